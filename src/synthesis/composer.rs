// src/synthesis/composer.rs
//! Composite state-labeled signal generation

use super::noise::GaussianNoise;
use super::state::PhysiologicalState;
use super::wave::{WaveGenerator, WaveSpec};
use crate::config::SimulationConfig;
use tracing::debug;

/// Builds composite signals from per-state spectral recipes plus a
/// Gaussian noise floor.
///
/// The composer owns its noise source; construct one per reproducible run.
pub struct StateSignalComposer {
    noise: GaussianNoise,
}

impl StateSignalComposer {
    /// Build a composer from a simulation configuration
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            noise: GaussianNoise::new(config.noise_std_dev, config.seed),
        }
    }

    /// Build a composer with an explicit seed
    pub fn with_seed(noise_std_dev: f64, seed: u64) -> Self {
        Self {
            noise: GaussianNoise::new(noise_std_dev, Some(seed)),
        }
    }

    /// Produce the composite signal for one state.
    ///
    /// Each recipe component is generated as a pure sinusoid, summed
    /// sample-wise, then noise is added per sample in index order so a
    /// fixed seed yields a bit-identical signal.
    pub fn compose(
        &mut self,
        state: PhysiologicalState,
        sampling_rate_hz: f64,
        duration_secs: f64,
    ) -> Vec<f64> {
        let sample_count = (duration_secs * sampling_rate_hz).round() as usize;
        let mut signal = vec![0.0; sample_count];

        for &(frequency_hz, amplitude) in state.recipe() {
            let wave = WaveGenerator::generate(&WaveSpec::new(
                frequency_hz,
                amplitude,
                sampling_rate_hz,
                duration_secs,
            ));
            for (acc, sample) in signal.iter_mut().zip(wave) {
                *acc += sample;
            }
        }

        for sample in &mut signal {
            *sample = self.noise.add_noise(*sample);
        }

        debug!(
            "Composed {} samples for state {} at {} Hz",
            signal.len(),
            state,
            sampling_rate_hz
        );
        signal
    }
}
