//! Frequency-domain edits
//!
//! Each edit is a stateless pure function: compute the spectrum, apply a
//! per-bin multiplier or mask, invert the transform, return a new Signal.
//! The input is never modified.

use crate::audio::Signal;
use crate::error::{Result, SpectraError};
use crate::spectral::transform::{bin_frequencies, center, forward, inverse, uncenter};
use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Default high-pass cutoff for [`remove_bass`]
pub const DEFAULT_BASS_CUTOFF_HZ: f64 = 150.0;

/// Default low-pass cutoff for [`remove_treble`]
pub const DEFAULT_TREBLE_CUTOFF_HZ: f64 = 5000.0;

/// Scale every bin's amplitude and apply a frequency-proportional phase ramp.
///
/// The spectrum is multiplied by `amplitude_scale`, re-centered around zero
/// frequency, multiplied per bin by `exp(i*2*pi*frequency_shift*f)` where f
/// is the bin's centered frequency, un-centered and inverted. With
/// `frequency_shift = 0` the ramp is the identity and this reduces to a pure
/// amplitude scale.
///
/// The multiplier depends only on each bin's own frequency, so spectral
/// energy never moves to a different bin: this is a phase rotation of every
/// pure-tone component, not a true frequency translation.
pub fn shift_and_scale(
    signal: &Signal,
    amplitude_scale: f64,
    frequency_shift: f64,
) -> Result<Signal> {
    let mut spectrum = forward(signal);

    for bin in &mut spectrum {
        *bin *= amplitude_scale;
    }

    let centered_freqs = center(&bin_frequencies(spectrum.len(), signal.sample_rate()));
    let mut centered = center(&spectrum);
    for (bin, f) in centered.iter_mut().zip(&centered_freqs) {
        *bin *= Complex::from_polar(1.0, 2.0 * PI * frequency_shift * f);
    }

    inverse(&uncenter(&centered), signal.sample_rate())
}

/// Zero every bin whose frequency is strictly below the cutoff
fn zero_below(spectrum: &mut [Complex<f64>], freqs: &[f64], cutoff_hz: f64) {
    for (bin, f) in spectrum.iter_mut().zip(freqs) {
        if *f < cutoff_hz {
            *bin = Complex::new(0.0, 0.0);
        }
    }
}

/// Zero every bin whose frequency is strictly above the cutoff
fn zero_above(spectrum: &mut [Complex<f64>], freqs: &[f64], cutoff_hz: f64) {
    for (bin, f) in spectrum.iter_mut().zip(freqs) {
        if *f > cutoff_hz {
            *bin = Complex::new(0.0, 0.0);
        }
    }
}

/// High-pass mask: zero every bin with frequency strictly below the cutoff.
///
/// For any positive cutoff this also zeroes DC and the entire
/// negative-frequency half of the spectrum; the mask is asymmetric by
/// construction. The one-sided spectrum is no longer conjugate-symmetric,
/// so the real-part inverse splits each kept bin across its mirror pair at
/// half amplitude; a second pass with the same cutoff halves the output
/// again rather than leaving it unchanged.
pub fn remove_bass(signal: &Signal, cutoff_hz: f64) -> Result<Signal> {
    let mut spectrum = forward(signal);
    let freqs = bin_frequencies(spectrum.len(), signal.sample_rate());
    zero_below(&mut spectrum, &freqs, cutoff_hz);
    inverse(&spectrum, signal.sample_rate())
}

/// Low-pass mask: zero every bin with frequency strictly above the cutoff.
///
/// Negative frequencies are never above a positive cutoff and are left
/// untouched; the asymmetry mirrors [`remove_bass`]. A removed positive
/// bin's untouched negative mirror regenerates the tone at half magnitude
/// through the real-part inverse.
pub fn remove_treble(signal: &Signal, cutoff_hz: f64) -> Result<Signal> {
    let mut spectrum = forward(signal);
    let freqs = bin_frequencies(spectrum.len(), signal.sample_rate());
    zero_above(&mut spectrum, &freqs, cutoff_hz);
    inverse(&spectrum, signal.sample_rate())
}

/// Elementwise subtraction of two equal-length, equal-rate signals
pub fn difference(a: &Signal, b: &Signal) -> Result<Signal> {
    if a.len() != b.len() {
        return Err(SpectraError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.sample_rate() != b.sample_rate() {
        return Err(SpectraError::SampleRateMismatch {
            left: a.sample_rate(),
            right: b.sample_rate(),
        });
    }

    let samples = a
        .samples()
        .iter()
        .zip(b.samples())
        .map(|(x, y)| x - y)
        .collect();

    Signal::new(samples, a.sample_rate())
}
