// src/config/constants.rs
//! Crate-wide defaults and bounds

/// Signal synthesis constants
pub mod signal {
    /// Sampling rate used when a config does not name one
    pub const DEFAULT_SAMPLING_RATE_HZ: f64 = 256.0;

    /// Synthesized signal length in seconds
    pub const DEFAULT_DURATION_SECS: f64 = 10.0;

    /// Standard deviation of the additive Gaussian noise floor
    pub const DEFAULT_NOISE_STD_DEV: f64 = 0.05;
}

/// Filter design and application constants
pub mod filters {
    /// Butterworth order for the band filters
    pub const DEFAULT_FILTER_ORDER: usize = 4;

    /// Reflective padding length per side is this factor times the
    /// coefficient count
    pub const PADDING_FACTOR: usize = 3;
}
