//! Spectra CLI
//!
//! Command-line interface for the spectral editing pipeline and the
//! contact book.

use clap::Parser;
use env_logger::Env;
use log::info;

use spectra::cli::{Cli, Commands, ContactsCommand};
use spectra::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Spectra v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Process {
            input,
            out_dir,
            plot,
        } => spectra::cli::commands::process(&input, &out_dir, plot),
        Commands::Spectrum { input, output } => spectra::cli::commands::spectrum(&input, &output),
        Commands::Contacts(cmd) => handle_contacts(cmd),
    }
}

fn handle_contacts(cmd: ContactsCommand) -> Result<()> {
    match cmd {
        ContactsCommand::Add {
            first_name,
            last_name,
            phone,
            email,
            file,
        } => spectra::cli::commands::contacts_add(&file, &first_name, &last_name, &phone, &email),
        ContactsCommand::List { file } => spectra::cli::commands::contacts_list(&file),
        ContactsCommand::Plot { file, output } => {
            spectra::cli::commands::contacts_plot(&file, &output)
        }
        ContactsCommand::ExportCsv { file, output } => {
            spectra::cli::commands::contacts_export_csv(&file, &output)
        }
        ContactsCommand::ImportCsv { input, file } => {
            spectra::cli::commands::contacts_import_csv(&input, &file)
        }
    }
}
