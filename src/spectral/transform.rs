//! Forward/inverse transform and frequency-bin addressing
//!
//! The forward transform is an unnormalized full-length DFT; the inverse
//! applies the 1/N factor and keeps only the real part, discarding the
//! imaginary residue left by floating-point rounding. No windowing and no
//! zero-padding: the spectrum always has exactly as many bins as the signal
//! has samples.

use crate::audio::Signal;
use crate::error::Result;
use rustfft::{num_complex::Complex, FftPlanner};

/// Compute the discrete Fourier transform of the full sample sequence
pub fn forward(signal: &Signal) -> Vec<Complex<f64>> {
    let mut bins: Vec<Complex<f64>> = signal
        .samples()
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(bins.len());
    fft.process(&mut bins);

    bins
}

/// Compute the inverse transform and return the real part as a Signal.
///
/// Discarding the imaginary part projects onto the conjugate-symmetric part
/// of the spectrum: a bin without its mirror comes back split across both
/// mirror positions at half amplitude.
pub fn inverse(spectrum: &[Complex<f64>], sample_rate: u32) -> Result<Signal> {
    let mut bins = spectrum.to_vec();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_inverse(bins.len());
    fft.process(&mut bins);

    // rustfft leaves the inverse unnormalized
    let n = bins.len() as f64;
    let samples = bins.iter().map(|c| c.re / n).collect();

    Signal::new(samples, sample_rate)
}

/// Map each spectrum index to its signed frequency in Hz.
///
/// Standard DFT bin layout: bin 0 is DC, the front half ascends toward the
/// Nyquist frequency, the back half holds the negative-frequency mirror in
/// ascending order from most negative.
pub fn bin_frequencies(n: usize, sample_rate: u32) -> Vec<f64> {
    let step = sample_rate as f64 / n as f64;
    let split = (n + 1) / 2;
    (0..n)
        .map(|k| {
            if k < split {
                k as f64 * step
            } else {
                (k as f64 - n as f64) * step
            }
        })
        .collect()
}

/// Reorder bins so frequencies run most-negative -> 0 -> most-positive
pub fn center<T: Clone>(bins: &[T]) -> Vec<T> {
    let mut centered = bins.to_vec();
    centered.rotate_right(bins.len() / 2);
    centered
}

/// Undo [`center`], restoring the standard DFT bin order.
///
/// For odd lengths the two rotations differ, so `uncenter(center(x)) == x`
/// holds for every length.
pub fn uncenter<T: Clone>(bins: &[T]) -> Vec<T> {
    let mut standard = bins.to_vec();
    standard.rotate_left(bins.len() / 2);
    standard
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_trip_reproduces_signal() {
        let signal = Signal::sine(441.0, 1.0, 8000);
        let spectrum = forward(&signal);
        let restored = inverse(&spectrum, signal.sample_rate()).unwrap();

        assert_eq!(restored.len(), signal.len());
        for (a, b) in signal.samples().iter().zip(restored.samples()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_round_trip_arbitrary_samples() {
        // Non-periodic, non-power-of-two length
        let samples: Vec<f64> = (0..1237).map(|i| ((i * 7919) % 1000) as f64 / 1000.0 - 0.5).collect();
        let signal = Signal::new(samples, 44100).unwrap();

        let restored = inverse(&forward(&signal), signal.sample_rate()).unwrap();
        assert!(signal.approx_eq(&restored, 1e-9));
    }

    #[test]
    fn test_bin_frequencies_even_length() {
        let freqs = bin_frequencies(8, 8);
        assert_eq!(freqs, vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0]);
    }

    #[test]
    fn test_bin_frequencies_odd_length() {
        let freqs = bin_frequencies(5, 5);
        assert_eq!(freqs, vec![0.0, 1.0, 2.0, -2.0, -1.0]);
    }

    #[test]
    fn test_bin_zero_is_dc() {
        for n in [1, 2, 7, 64] {
            assert_eq!(bin_frequencies(n, 48000)[0], 0.0);
        }
    }

    #[test]
    fn test_center_orders_frequencies() {
        let centered = center(&bin_frequencies(8, 8));
        assert_eq!(centered, vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_center_uncenter_inverse_for_odd_and_even() {
        for n in [4usize, 5, 8, 9, 1] {
            let bins: Vec<usize> = (0..n).collect();
            assert_eq!(uncenter(&center(&bins)), bins);
            assert_eq!(center(&uncenter(&bins)), bins);
        }
    }

    #[test]
    fn test_forward_dc_bin_holds_sample_sum() {
        let signal = Signal::new(vec![1.0, 1.0, 1.0, 1.0], 4).unwrap();
        let spectrum = forward(&signal);
        assert_abs_diff_eq!(spectrum[0].re, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spectrum[0].im, 0.0, epsilon = 1e-12);
    }
}
