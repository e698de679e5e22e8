//! Signal implementation
//!
//! Signal is the core data structure: a mono sequence of samples tied to a
//! fixed sample rate. Transforms never mutate a Signal in place; every edit
//! produces a new value.

use crate::error::{Result, SpectraError};

/// Mono audio samples with a fixed sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Samples normalized to -1.0..1.0 for audio sources
    samples: Vec<f64>,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl Signal {
    /// Create a new signal with the given samples and sample rate
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(SpectraError::EmptySignal);
        }
        if sample_rate == 0 {
            return Err(SpectraError::InvalidSampleRate { sample_rate });
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Create a silent signal with the given duration.
    ///
    /// Panics if `sample_rate` is zero.
    pub fn silence(duration_secs: f64, sample_rate: u32) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        let num_samples = (duration_secs * sample_rate as f64) as usize;
        Self {
            samples: vec![0.0; num_samples.max(1)],
            sample_rate,
        }
    }

    /// Create a sine wave test tone with amplitude 1.0.
    ///
    /// Panics if `sample_rate` is zero.
    pub fn sine(frequency: f64, duration_secs: f64, sample_rate: u32) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        let num_samples = ((duration_secs * sample_rate as f64) as usize).max(1);
        let mut samples = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let t = i as f64 / sample_rate as f64;
            samples.push((2.0 * std::f64::consts::PI * frequency * t).sin());
        }

        Self {
            samples,
            sample_rate,
        }
    }

    /// Get a reference to the samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the signal and return its samples
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A constructed signal always holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Half the sample rate: the highest unambiguous frequency
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Check if signals are approximately equal within tolerance
    pub fn approx_eq(&self, other: &Signal, tolerance: f64) -> bool {
        if self.sample_rate != other.sample_rate || self.samples.len() != other.samples.len() {
            return false;
        }
        self.samples
            .iter()
            .zip(other.samples.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_generation() {
        let signal = Signal::sine(440.0, 1.0, 44100);
        assert_eq!(signal.sample_rate(), 44100);
        assert_eq!(signal.len(), 44100);
        assert!((signal.duration() - 1.0).abs() < 0.001);
        // First sample of a sine is zero
        assert!(signal.samples()[0].abs() < 1e-12);
    }

    #[test]
    fn test_silence_generation() {
        let signal = Signal::silence(2.0, 8000);
        assert_eq!(signal.len(), 16000);
        assert!(signal.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_empty_signal_error() {
        let result = Signal::new(vec![], 44100);
        assert!(matches!(result, Err(SpectraError::EmptySignal)));
    }

    #[test]
    fn test_zero_sample_rate_error() {
        let result = Signal::new(vec![0.0], 0);
        assert!(matches!(
            result,
            Err(SpectraError::InvalidSampleRate { sample_rate: 0 })
        ));
    }

    #[test]
    #[should_panic(expected = "sample rate must be positive")]
    fn test_sine_rejects_zero_sample_rate() {
        let _ = Signal::sine(440.0, 1.0, 0);
    }

    #[test]
    #[should_panic(expected = "sample rate must be positive")]
    fn test_silence_rejects_zero_sample_rate() {
        let _ = Signal::silence(1.0, 0);
    }

    #[test]
    fn test_nyquist() {
        let signal = Signal::sine(100.0, 0.5, 8000);
        assert_eq!(signal.nyquist(), 4000.0);
    }

    #[test]
    fn test_approx_eq_rejects_mismatched_rate() {
        let a = Signal::sine(440.0, 0.1, 44100);
        let b = Signal::sine(440.0, 0.1, 48000);
        assert!(!a.approx_eq(&b, 1.0));
    }
}
