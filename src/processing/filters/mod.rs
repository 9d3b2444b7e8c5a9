// src/processing/filters/mod.rs
//! Butterworth bandpass design and zero-phase application
//!
//! `design` turns a [`FilterSpec`] into digital transfer-function
//! coefficients; `zero_phase` runs those coefficients over a signal
//! forward and backward so the output carries no phase distortion.

pub mod design;
pub mod zero_phase;

pub use design::FilterDesigner;
pub use zero_phase::{filtfilt, lfilter, lfilter_zi, ZeroPhaseFilterEngine};

use crate::config::constants::filters::DEFAULT_FILTER_ORDER;
use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Canonical EEG frequency bands in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterBand {
    /// 0.5 - 4 Hz, dominant in deep sleep
    Delta,
    /// 4 - 8 Hz, drowsiness and light sleep
    Theta,
    /// 8 - 13 Hz, relaxed wakefulness
    Alpha,
    /// 13 - 30 Hz, active concentration
    Beta,
}

impl FilterBand {
    /// All bands in canonical (ascending frequency) order.
    pub const ALL: [FilterBand; 4] = [
        FilterBand::Delta,
        FilterBand::Theta,
        FilterBand::Alpha,
        FilterBand::Beta,
    ];

    /// Lower band edge in Hz.
    pub fn low_cut_hz(&self) -> f64 {
        match self {
            FilterBand::Delta => 0.5,
            FilterBand::Theta => 4.0,
            FilterBand::Alpha => 8.0,
            FilterBand::Beta => 13.0,
        }
    }

    /// Upper band edge in Hz.
    pub fn high_cut_hz(&self) -> f64 {
        match self {
            FilterBand::Delta => 4.0,
            FilterBand::Theta => 8.0,
            FilterBand::Alpha => 13.0,
            FilterBand::Beta => 30.0,
        }
    }

    /// Both edges as `(low, high)` in Hz.
    pub fn edges_hz(&self) -> (f64, f64) {
        (self.low_cut_hz(), self.high_cut_hz())
    }

    /// Lowercase band name.
    pub fn label(&self) -> &'static str {
        match self {
            FilterBand::Delta => "delta",
            FilterBand::Theta => "theta",
            FilterBand::Alpha => "alpha",
            FilterBand::Beta => "beta",
        }
    }
}

impl fmt::Display for FilterBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything needed to design one bandpass filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Lower cutoff frequency in Hz
    pub low_cut_hz: f64,
    /// Upper cutoff frequency in Hz
    pub high_cut_hz: f64,
    /// Butterworth order of the analog prototype
    pub order: usize,
    /// Sampling rate of the signal the filter will run on, in Hz
    pub sampling_rate_hz: f64,
}

impl FilterSpec {
    /// Spec with the default filter order.
    pub fn new(low_cut_hz: f64, high_cut_hz: f64, sampling_rate_hz: f64) -> Self {
        Self {
            low_cut_hz,
            high_cut_hz,
            order: DEFAULT_FILTER_ORDER,
            sampling_rate_hz,
        }
    }

    /// Override the filter order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Spec for one of the canonical EEG bands.
    pub fn for_band(band: FilterBand, sampling_rate_hz: f64, order: usize) -> Self {
        Self {
            low_cut_hz: band.low_cut_hz(),
            high_cut_hz: band.high_cut_hz(),
            order,
            sampling_rate_hz,
        }
    }
}

/// Digital IIR transfer function in polynomial form.
///
/// `b` holds the numerator and `a` the denominator, both ordered from
/// the z^0 term down, with `a[0]` normalized to 1. A bandpass of order
/// `n` has `2n + 1` coefficients on each side.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients {
    /// Numerator (feedforward) coefficients
    pub b: Vec<f64>,
    /// Denominator (feedback) coefficients
    pub a: Vec<f64>,
}

impl FilterCoefficients {
    /// Number of taps on the longer side.
    pub fn tap_count(&self) -> usize {
        self.a.len().max(self.b.len())
    }

    /// Complex response H(e^{jw}) at `frequency_hz` for a signal sampled
    /// at `sampling_rate_hz`.
    pub fn frequency_response(&self, frequency_hz: f64, sampling_rate_hz: f64) -> Complex64 {
        let omega = 2.0 * PI * frequency_hz / sampling_rate_hz;
        let z_inv = Complex64::from_polar(1.0, -omega);
        evaluate_polynomial(&self.b, z_inv) / evaluate_polynomial(&self.a, z_inv)
    }

    /// Magnitude response at `frequency_hz`.
    pub fn magnitude_at(&self, frequency_hz: f64, sampling_rate_hz: f64) -> f64 {
        self.frequency_response(frequency_hz, sampling_rate_hz).norm()
    }
}

/// Horner evaluation of `coeffs[0] + coeffs[1] x + coeffs[2] x^2 + ...`
fn evaluate_polynomial(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}
