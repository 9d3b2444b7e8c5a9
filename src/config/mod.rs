// src/config/mod.rs
//! Configuration for synthesis and decomposition runs

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::ConfigLoader;

use crate::processing::filters::FilterBand;
use serde::{Deserialize, Serialize};

/// Parameters for one synthesis run
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SimulationConfig {
    /// Output sampling rate in Hz
    #[serde(default = "defaults::sampling_rate_hz")]
    pub sampling_rate_hz: f64,

    /// Signal length in seconds
    #[serde(default = "defaults::duration_secs")]
    pub duration_secs: f64,

    /// Standard deviation of the additive Gaussian noise
    #[serde(default = "defaults::noise_std_dev")]
    pub noise_std_dev: f64,

    /// RNG seed; `None` seeds from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Parameters for one decomposition run
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DecompositionConfig {
    /// Sampling rate of the signal being decomposed, in Hz
    #[serde(default = "defaults::sampling_rate_hz")]
    pub sampling_rate_hz: f64,

    /// Butterworth order for every band filter
    #[serde(default = "defaults::filter_order")]
    pub filter_order: usize,
}

/// Default value providers using constants
mod defaults {
    use crate::config::constants::{filters, signal};

    pub fn sampling_rate_hz() -> f64 {
        signal::DEFAULT_SAMPLING_RATE_HZ
    }
    pub fn duration_secs() -> f64 {
        signal::DEFAULT_DURATION_SECS
    }
    pub fn noise_std_dev() -> f64 {
        signal::DEFAULT_NOISE_STD_DEV
    }
    pub fn filter_order() -> usize {
        filters::DEFAULT_FILTER_ORDER
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sampling_rate_hz: defaults::sampling_rate_hz(),
            duration_secs: defaults::duration_secs(),
            noise_std_dev: defaults::noise_std_dev(),
            seed: None,
        }
    }
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            sampling_rate_hz: defaults::sampling_rate_hz(),
            filter_order: defaults::filter_order(),
        }
    }
}

impl SimulationConfig {
    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.sampling_rate_hz.is_finite() || self.sampling_rate_hz <= 0.0 {
            errors.push(format!(
                "Sampling rate must be positive, got {}",
                self.sampling_rate_hz
            ));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            errors.push(format!(
                "Duration must be positive, got {}",
                self.duration_secs
            ));
        }
        if !self.noise_std_dev.is_finite() || self.noise_std_dev < 0.0 {
            errors.push(format!(
                "Noise standard deviation must be non-negative, got {}",
                self.noise_std_dev
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Number of samples one run will produce
    pub fn sample_count(&self) -> usize {
        (self.duration_secs * self.sampling_rate_hz).round() as usize
    }
}

impl DecompositionConfig {
    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.sampling_rate_hz.is_finite() || self.sampling_rate_hz <= 0.0 {
            errors.push(format!(
                "Sampling rate must be positive, got {}",
                self.sampling_rate_hz
            ));
        }
        if self.filter_order == 0 {
            errors.push("Filter order must be at least 1".to_string());
        }

        // Every band edge has to sit below Nyquist or decomposition
        // cannot design its filters
        let nyquist = self.sampling_rate_hz / 2.0;
        let highest_edge = FilterBand::Beta.high_cut_hz();
        if self.sampling_rate_hz > 0.0 && nyquist <= highest_edge {
            errors.push(format!(
                "Sampling rate {} Hz puts Nyquist ({} Hz) at or below the beta band edge ({} Hz)",
                self.sampling_rate_hz, nyquist, highest_edge
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
