// src/synthesis/wave.rs
//! Single-component sinusoid generation

use std::f64::consts::PI;

/// Fully determines one sinusoidal component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpec {
    /// Oscillation frequency in Hz
    pub frequency_hz: f64,
    /// Peak amplitude
    pub amplitude: f64,
    /// Sampling rate in Hz
    pub sampling_rate_hz: f64,
    /// Signal length in seconds
    pub duration_secs: f64,
}

impl WaveSpec {
    /// Bundle the four parameters of one component.
    pub fn new(frequency_hz: f64, amplitude: f64, sampling_rate_hz: f64, duration_secs: f64) -> Self {
        Self {
            frequency_hz,
            amplitude,
            sampling_rate_hz,
            duration_secs,
        }
    }

    /// Number of samples the spec produces
    pub fn sample_count(&self) -> usize {
        (self.duration_secs * self.sampling_rate_hz).round() as usize
    }
}

/// Generates pure sinusoids from a [`WaveSpec`].
///
/// Performs no validation: degenerate specs (zero rate, zero duration)
/// yield empty or flat signals. Callers cross-check against Nyquist
/// where that matters.
pub struct WaveGenerator;

impl WaveGenerator {
    /// Sample i is `amplitude * sin(2π * frequency * i / fs)`
    pub fn generate(spec: &WaveSpec) -> Vec<f64> {
        let sample_count = spec.sample_count();
        if sample_count == 0 {
            return Vec::new();
        }

        let omega = 2.0 * PI * spec.frequency_hz / spec.sampling_rate_hz;
        (0..sample_count)
            .map(|i| spec.amplitude * (omega * i as f64).sin())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_matches_duration() {
        let spec = WaveSpec::new(10.0, 1.0, 256.0, 10.0);
        let wave = WaveGenerator::generate(&spec);
        assert_eq!(wave.len(), 2560);

        let spec = WaveSpec::new(10.0, 1.0, 100.0, 0.25);
        assert_eq!(WaveGenerator::generate(&spec).len(), 25);
    }

    #[test]
    fn test_known_sample_values() {
        // One cycle per second sampled at 4 Hz hits 0, 1, 0, -1
        let spec = WaveSpec::new(1.0, 1.0, 4.0, 1.0);
        let wave = WaveGenerator::generate(&spec);
        assert_eq!(wave.len(), 4);
        assert!((wave[0] - 0.0).abs() < 1e-12);
        assert!((wave[1] - 1.0).abs() < 1e-12);
        assert!(wave[2].abs() < 1e-12);
        assert!((wave[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_amplitude_bound() {
        let spec = WaveSpec::new(7.3, 0.4, 256.0, 2.0);
        let wave = WaveGenerator::generate(&spec);
        assert!(wave.iter().all(|&s| s.abs() <= 0.4 + 1e-12));
    }

    #[test]
    fn test_zero_frequency_is_flat() {
        let spec = WaveSpec::new(0.0, 1.0, 256.0, 1.0);
        let wave = WaveGenerator::generate(&spec);
        assert!(wave.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_degenerate_specs_yield_empty() {
        let spec = WaveSpec::new(10.0, 1.0, 0.0, 10.0);
        assert!(WaveGenerator::generate(&spec).is_empty());

        let spec = WaveSpec::new(10.0, 1.0, 256.0, 0.0);
        assert!(WaveGenerator::generate(&spec).is_empty());
    }
}
