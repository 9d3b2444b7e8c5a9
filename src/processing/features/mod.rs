// src/processing/features/mod.rs
//! Feature extraction over raw and decomposed signals

pub mod band_power;

pub use band_power::{band_power, periodogram, relative_band_powers, signal_power};
