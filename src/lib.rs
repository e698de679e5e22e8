//! Spectra - Frequency-Domain Audio Editing Toolkit
//!
//! Spectra moves audio between the time and frequency domain and applies
//! simple full-spectrum edits:
//! - Amplitude scaling with a frequency-proportional phase ramp
//! - Bass removal (high-pass mask)
//! - Treble removal (low-pass mask)
//!
//! The pipeline is a composition of stateless pure functions:
//!
//! `signal -> forward -> spectrum -> edit -> inverse -> signal`
//!
//! Alongside the pipeline the crate carries a small contact book with
//! JSON/CSV persistence and a surname bar chart, plus codec-backed audio
//! I/O and PNG plot rendering.

pub mod audio;
pub mod cli;
pub mod contacts;
pub mod error;
pub mod plot;
pub mod spectral;

// Re-export commonly used types
pub use audio::Signal;
pub use error::{Result, SpectraError};
