// src/processing/mod.rs
//! Signal processing: filter design, zero-phase filtering, band
//! decomposition, and spectral features

pub mod band_decomposer;
pub mod features;
pub mod filters;

pub use band_decomposer::{BandDecomposer, BandSignals};
pub use features::{band_power, periodogram, relative_band_powers, signal_power};
pub use filters::{
    filtfilt, lfilter, lfilter_zi, FilterBand, FilterCoefficients, FilterDesigner, FilterSpec,
    ZeroPhaseFilterEngine,
};
