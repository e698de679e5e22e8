//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;

use log::info;

use crate::audio::{decode, encode, Signal};
use crate::contacts::{load_csv, load_json, save_csv, save_json, Contact};
use crate::error::Result;
use crate::plot::{plot_spectrum, plot_surname_distribution};
use crate::spectral::{remove_bass, remove_treble, shift_and_scale, DEFAULT_TREBLE_CUTOFF_HZ};

/// Amplitude scale applied by the demo edit
const DEMO_AMPLITUDE_SCALE: f64 = 1.5;
/// Frequency shift applied by the demo edit
const DEMO_FREQUENCY_SHIFT: f64 = 100.0;
/// High-pass cutoff used by the demo run (twice the library default)
const DEMO_BASS_CUTOFF_HZ: f64 = 300.0;

/// Run the full editing sequence and write the three output files.
pub fn process(input: &Path, out_dir: &Path, plot: bool) -> Result<()> {
    info!("Processing {}", input.display());

    let signal = decode(input)?;
    print_signal_stats(&signal);

    fs::create_dir_all(out_dir)?;

    let modified = shift_and_scale(&signal, DEMO_AMPLITUDE_SCALE, DEMO_FREQUENCY_SHIFT)?;
    let modified_path = out_dir.join("modified_audio.wav");
    encode(&modified, &modified_path)?;
    println!("Wrote {}", modified_path.display());

    let filtered = remove_bass(&signal, DEMO_BASS_CUTOFF_HZ)?;
    let filtered_path = out_dir.join("filtered_audio.wav");
    encode(&filtered, &filtered_path)?;
    println!("Wrote {}", filtered_path.display());

    let filtered_upper = remove_treble(&signal, DEFAULT_TREBLE_CUTOFF_HZ)?;
    let filtered_upper_path = out_dir.join("filtered_audio_upper.wav");
    encode(&filtered_upper, &filtered_upper_path)?;
    println!("Wrote {}", filtered_upper_path.display());

    if plot {
        let plots = [
            (&signal, "original_spectrum.png", "Original Audio Fourier Transform"),
            (&modified, "modified_spectrum.png", "Modified Audio Fourier Transform"),
            (&filtered, "filtered_spectrum.png", "Bass Removed Fourier Transform"),
            (
                &filtered_upper,
                "filtered_upper_spectrum.png",
                "Treble Removed Fourier Transform",
            ),
        ];
        for (sig, name, title) in plots {
            let path = out_dir.join(name);
            plot_spectrum(sig, &path, title)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Render the magnitude spectrum of an audio file.
pub fn spectrum(input: &Path, output: &Path) -> Result<()> {
    info!("Rendering spectrum of {}", input.display());

    let signal = decode(input)?;
    print_signal_stats(&signal);
    plot_spectrum(&signal, output, "Fourier Transform")?;
    println!("Wrote {}", output.display());

    Ok(())
}

/// Add a contact to the JSON contact file.
pub fn contacts_add(
    file: &Path,
    first_name: &str,
    last_name: &str,
    phone: &str,
    email: &str,
) -> Result<()> {
    let mut book = load_json(file)?;
    book.add(Contact::new(first_name, last_name, phone, email));
    save_json(&book, file)?;

    println!("Contact added: {first_name} {last_name}");
    Ok(())
}

/// Print every contact in the file.
pub fn contacts_list(file: &Path) -> Result<()> {
    let book = load_json(file)?;
    println!("{}", book.listing());
    Ok(())
}

/// Render the surname distribution chart.
pub fn contacts_plot(file: &Path, output: &Path) -> Result<()> {
    let book = load_json(file)?;
    plot_surname_distribution(&book, output)?;
    println!("Plot saved as '{}'", output.display());
    Ok(())
}

/// Export the JSON contact file to CSV.
pub fn contacts_export_csv(file: &Path, output: &Path) -> Result<()> {
    let book = load_json(file)?;
    save_csv(&book, output)?;
    println!("Contacts saved to {} (CSV format)", output.display());
    Ok(())
}

/// Import contacts from CSV, appending to the JSON contact file.
pub fn contacts_import_csv(input: &Path, file: &Path) -> Result<()> {
    let imported = load_csv(input)?;
    let mut book = load_json(file)?;
    let count = imported.len();
    for contact in imported.iter() {
        book.add(contact.clone());
    }
    save_json(&book, file)?;

    println!("Imported {} contacts from {}", count, input.display());
    Ok(())
}

fn print_signal_stats(signal: &Signal) {
    println!("Sampling Rate: {} Hz", signal.sample_rate());
    println!("Number of Samples: {}", signal.len());
    println!("Duration of the Audio: {:.3} seconds", signal.duration());
}
