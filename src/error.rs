//! Error types for Spectra
//!
//! All fallible operations return [`SpectraError`] through the crate-wide
//! [`Result`] alias.

use thiserror::Error;

/// Result type alias using SpectraError
pub type Result<T> = std::result::Result<T, SpectraError>;

/// All possible errors in Spectra
#[derive(Error, Debug)]
pub enum SpectraError {
    // Audio I/O errors
    #[error("Failed to read audio file: {path}")]
    AudioReadError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to decode audio file: {path}")]
    AudioDecodeError {
        path: String,
        #[source]
        source: symphonia::core::errors::Error,
    },

    #[error("Failed to write audio file: {path}")]
    AudioWriteError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Unsupported audio format: {details}")]
    UnsupportedFormat { details: String },

    // Signal errors
    #[error("Signal contains no samples")]
    EmptySignal,

    #[error("Invalid sample rate: {sample_rate} Hz")]
    InvalidSampleRate { sample_rate: u32 },

    #[error("Signal length mismatch: {left} vs {right} samples")]
    LengthMismatch { left: usize, right: usize },

    #[error("Sample rate mismatch: {left} Hz vs {right} Hz")]
    SampleRateMismatch { left: u32, right: u32 },

    // Plot rendering
    #[error("Failed to render plot: {path}: {details}")]
    PlotError { path: String, details: String },

    // Generic I/O and serialization
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl SpectraError {
    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::AudioReadError { .. } | Self::AudioDecodeError { .. } => {
                "Check that the file exists and is a valid WAV, MP3 or OGG file"
            }
            Self::UnsupportedFormat { .. } => "Convert the file to WAV, MP3 or OGG",
            Self::EmptySignal => "Load or generate audio before processing",
            Self::InvalidSampleRate { .. } => "Use a sample rate greater than zero",
            Self::LengthMismatch { .. } | Self::SampleRateMismatch { .. } => {
                "Only signals of identical length and rate can be combined"
            }
            Self::PlotError { .. } => "Check that the output directory is writable",
            _ => "Check the error details and try again",
        }
    }
}
