//! Signal measurement utilities
//!
//! Objective measurements over whole signals, used by the CLI statistics
//! output and by the test suite. The spectral measurements operate on the
//! full-length transform (no windowing, no framing), matching the pipeline.

use crate::audio::Signal;
use crate::spectral::{bin_frequencies, forward};

/// Calculate RMS (Root Mean Square) of samples
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = samples.iter().map(|s| s * s).sum();
    (sum_squares / samples.len() as f64).sqrt()
}

/// Calculate peak (maximum absolute value) of samples
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Magnitudes of the non-negative frequency bins as (frequency, |X|) pairs
pub fn magnitude_spectrum(signal: &Signal) -> Vec<(f64, f64)> {
    let spectrum = forward(signal);
    let freqs = bin_frequencies(spectrum.len(), signal.sample_rate());
    let half = (spectrum.len() + 1) / 2;

    freqs
        .into_iter()
        .zip(spectrum)
        .take(half)
        .map(|(f, bin)| (f, bin.norm()))
        .collect()
}

/// Frequency of the bin with the largest spectral magnitude
pub fn dominant_frequency(signal: &Signal) -> f64 {
    magnitude_spectrum(signal)
        .into_iter()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(f, _)| f)
        .unwrap_or(0.0)
}

/// Spectral magnitude at the bin nearest to the given frequency
pub fn magnitude_at(signal: &Signal, frequency: f64) -> f64 {
    let spectrum = magnitude_spectrum(signal);
    let step = signal.sample_rate() as f64 / signal.len() as f64;
    let bin = (frequency / step).round() as usize;

    spectrum.get(bin).map(|(_, m)| *m).unwrap_or(0.0)
}
