// src/synthesis/noise.rs
//! Additive Gaussian noise with an explicit random source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Zero-mean Gaussian noise source.
///
/// The generator owns its RNG so repeated runs with the same seed are
/// bit-identical and concurrent composers never share state.
pub struct GaussianNoise {
    std_dev: f64,
    rng: StdRng,
}

impl GaussianNoise {
    /// Create a noise source; `None` seeds from OS entropy
    pub fn new(std_dev: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { std_dev, rng }
    }

    /// Draw one Gaussian sample scaled by the configured deviation
    pub fn sample(&mut self) -> f64 {
        if self.std_dev == 0.0 {
            return 0.0;
        }
        self.box_muller_transform() * self.std_dev
    }

    /// Add noise to a clean sample
    pub fn add_noise(&mut self, clean_signal: f64) -> f64 {
        clean_signal + self.sample()
    }

    fn box_muller_transform(&mut self) -> f64 {
        // Box-Muller transform for Gaussian random numbers;
        // u1 drawn on (0, 1] so the log stays finite
        let u1 = 1.0 - self.rng.gen::<f64>();
        let u2 = self.rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
