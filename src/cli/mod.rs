//! CLI Module
//!
//! Command-line interface for the spectral editing pipeline and the contact
//! book.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spectra - frequency-domain audio editing toolkit
#[derive(Parser, Debug)]
#[command(name = "spectra")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full editing sequence on an audio file
    #[command(name = "process")]
    Process {
        /// Input audio file (WAV, MP3 or OGG)
        #[arg(default_value = "songs/havana.mp3")]
        input: PathBuf,

        /// Directory for the edited output files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Also render spectrum plots next to the audio outputs
        #[arg(long)]
        plot: bool,
    },

    /// Render the magnitude spectrum of an audio file to a PNG
    #[command(name = "spectrum")]
    Spectrum {
        /// Input audio file
        input: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = "spectrum.png")]
        output: PathBuf,
    },

    /// Manage the contact book
    #[command(subcommand)]
    Contacts(ContactsCommand),
}

#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    /// Add a contact to a JSON contact file
    #[command(name = "add")]
    Add {
        first_name: String,
        last_name: String,
        phone: String,
        email: String,

        /// Contact file to update
        #[arg(short, long, default_value = "contacts.json")]
        file: PathBuf,
    },

    /// List all contacts
    #[command(name = "list")]
    List {
        /// Contact file to read
        #[arg(default_value = "contacts.json")]
        file: PathBuf,
    },

    /// Render the surname distribution bar chart
    #[command(name = "plot")]
    Plot {
        /// Contact file to read
        #[arg(default_value = "contacts.json")]
        file: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = "surname_distribution_plot.png")]
        output: PathBuf,
    },

    /// Export the contact file to CSV
    #[command(name = "export-csv")]
    ExportCsv {
        /// Contact file to read
        #[arg(default_value = "contacts.json")]
        file: PathBuf,

        /// CSV output path
        #[arg(short, long, default_value = "contacts.csv")]
        output: PathBuf,
    },

    /// Import contacts from CSV into the contact file
    #[command(name = "import-csv")]
    ImportCsv {
        /// CSV input path
        input: PathBuf,

        /// Contact file to update
        #[arg(short, long, default_value = "contacts.json")]
        file: PathBuf,
    },
}
