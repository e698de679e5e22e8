//! Spectral Transform Pipeline
//!
//! Moves signals between the time and frequency domain and applies
//! frequency-domain edits:
//!
//! `signal -> forward -> spectrum -> edit -> inverse -> signal`
//!
//! All edits share the same forward/inverse machinery and are stateless
//! pure functions.

mod edits;
mod transform;

pub use edits::{
    difference, remove_bass, remove_treble, shift_and_scale, DEFAULT_BASS_CUTOFF_HZ,
    DEFAULT_TREBLE_CUTOFF_HZ,
};
pub use transform::{bin_frequencies, center, forward, inverse, uncenter};
