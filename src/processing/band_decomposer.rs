// src/processing/band_decomposer.rs
//! Four-band EEG decomposition
//!
//! Splits a raw signal into the canonical delta, theta, alpha, and
//! beta components by running one zero-phase Butterworth bandpass per
//! band over the full signal.

use crate::config::constants::filters::DEFAULT_FILTER_ORDER;
use crate::error::{EegError, Result};
use crate::processing::filters::{
    design::FilterDesigner, zero_phase::ZeroPhaseFilterEngine, FilterBand, FilterSpec,
};
use tracing::debug;

/// One filtered signal per canonical band, all the same length as the
/// input they were decomposed from.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSignals {
    /// 0.5 - 4 Hz component
    pub delta: Vec<f64>,
    /// 4 - 8 Hz component
    pub theta: Vec<f64>,
    /// 8 - 13 Hz component
    pub alpha: Vec<f64>,
    /// 13 - 30 Hz component
    pub beta: Vec<f64>,
}

impl BandSignals {
    /// Borrow the component for one band.
    pub fn get(&self, band: FilterBand) -> &[f64] {
        match band {
            FilterBand::Delta => &self.delta,
            FilterBand::Theta => &self.theta,
            FilterBand::Alpha => &self.alpha,
            FilterBand::Beta => &self.beta,
        }
    }

    /// Bands with their components, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterBand, &[f64])> {
        FilterBand::ALL.iter().map(move |&band| (band, self.get(band)))
    }

    /// Samples per component.
    pub fn len(&self) -> usize {
        self.delta.len()
    }

    /// True when the components hold no samples.
    pub fn is_empty(&self) -> bool {
        self.delta.is_empty()
    }
}

/// Decomposes signals into the four canonical EEG bands.
pub struct BandDecomposer {
    sampling_rate_hz: f64,
    filter_order: usize,
}

impl BandDecomposer {
    /// Decomposer with the default filter order.
    pub fn new(sampling_rate_hz: f64) -> Self {
        Self {
            sampling_rate_hz,
            filter_order: DEFAULT_FILTER_ORDER,
        }
    }

    /// Override the Butterworth order used for every band.
    pub fn with_order(mut self, filter_order: usize) -> Self {
        self.filter_order = filter_order;
        self
    }

    /// Decompose `signal` into all four bands.
    ///
    /// Every error is prefixed with the band it came from. With the
    /// `parallel` feature the four filters run on the rayon pool.
    pub fn decompose(&self, signal: &[f64]) -> Result<BandSignals> {
        let bands = self.filter_all_bands(signal)?;
        debug!(
            "Decomposed {} samples into {} bands at {} Hz (order {})",
            signal.len(),
            FilterBand::ALL.len(),
            self.sampling_rate_hz,
            self.filter_order
        );
        Ok(bands)
    }

    /// Run a single band's filter over `signal`.
    pub fn decompose_band(&self, signal: &[f64], band: FilterBand) -> Result<Vec<f64>> {
        let spec = FilterSpec::for_band(band, self.sampling_rate_hz, self.filter_order);
        let result = FilterDesigner::design_bandpass(&spec)
            .and_then(ZeroPhaseFilterEngine::new)
            .and_then(|engine| engine.apply(signal));
        result.map_err(|e| Self::tag_band(band, e))
    }

    #[cfg(feature = "parallel")]
    fn filter_all_bands(&self, signal: &[f64]) -> Result<BandSignals> {
        let ((delta, theta), (alpha, beta)) = rayon::join(
            || {
                rayon::join(
                    || self.decompose_band(signal, FilterBand::Delta),
                    || self.decompose_band(signal, FilterBand::Theta),
                )
            },
            || {
                rayon::join(
                    || self.decompose_band(signal, FilterBand::Alpha),
                    || self.decompose_band(signal, FilterBand::Beta),
                )
            },
        );
        Ok(BandSignals {
            delta: delta?,
            theta: theta?,
            alpha: alpha?,
            beta: beta?,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn filter_all_bands(&self, signal: &[f64]) -> Result<BandSignals> {
        Ok(BandSignals {
            delta: self.decompose_band(signal, FilterBand::Delta)?,
            theta: self.decompose_band(signal, FilterBand::Theta)?,
            alpha: self.decompose_band(signal, FilterBand::Alpha)?,
            beta: self.decompose_band(signal, FilterBand::Beta)?,
        })
    }

    fn tag_band(band: FilterBand, error: EegError) -> EegError {
        match error {
            EegError::InvalidCutoff(msg) => {
                EegError::InvalidCutoff(format!("{} band: {}", band, msg))
            }
            EegError::InvalidFilterSpec(msg) => {
                EegError::InvalidFilterSpec(format!("{} band: {}", band, msg))
            }
            EegError::FilterInstability(msg) => {
                EegError::FilterInstability(format!("{} band: {}", band, msg))
            }
            other => other,
        }
    }
}
