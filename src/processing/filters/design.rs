// src/processing/filters/design.rs
//! Digital Butterworth bandpass design
//!
//! The classical chain: place the lowpass prototype poles on the unit
//! circle, transform lowpass to bandpass at the prewarped band edges,
//! map to the z-plane with the bilinear transform, then expand the
//! pole/zero form into transfer-function polynomials. Prewarping makes
//! the digital magnitude response hit exactly -3 dB at the requested
//! cutoffs.

use super::{FilterCoefficients, FilterSpec};
use crate::error::{EegError, Result};
use rustfft::num_complex::Complex64;
use std::f64::consts::PI;
use tracing::debug;

/// Sampling rate the normalized design chain runs at. Cutoffs are
/// expressed as fractions of Nyquist before entering the chain, so the
/// actual signal rate drops out here.
const DESIGN_FS: f64 = 2.0;

/// Stateless designer for bandpass transfer functions.
pub struct FilterDesigner;

impl FilterDesigner {
    /// Design a stable digital Butterworth bandpass filter.
    ///
    /// Returns [`FilterCoefficients`] with `2 * order + 1` taps per side
    /// and `a[0] == 1`. Invalid cutoff placement yields
    /// [`EegError::InvalidCutoff`], a malformed spec
    /// [`EegError::InvalidFilterSpec`], and a design whose poles land on
    /// or outside the unit circle [`EegError::FilterInstability`].
    pub fn design_bandpass(spec: &FilterSpec) -> Result<FilterCoefficients> {
        Self::validate(spec)?;

        let nyquist_hz = spec.sampling_rate_hz / 2.0;
        let low = spec.low_cut_hz / nyquist_hz;
        let high = spec.high_cut_hz / nyquist_hz;

        // Prewarp so the bilinear transform lands the analog edges on
        // the requested digital frequencies
        let warped_low = 2.0 * DESIGN_FS * (PI * low / DESIGN_FS).tan();
        let warped_high = 2.0 * DESIGN_FS * (PI * high / DESIGN_FS).tan();

        let bandwidth = warped_high - warped_low;
        let center = (warped_low * warped_high).sqrt();
        if !bandwidth.is_finite() || !center.is_finite() || bandwidth <= 0.0 {
            return Err(EegError::InvalidFilterSpec(format!(
                "Prewarped band {} - {} Hz collapses at sampling rate {} Hz",
                spec.low_cut_hz, spec.high_cut_hz, spec.sampling_rate_hz
            )));
        }

        let prototype = Self::prototype_poles(spec.order);
        let (zeros, poles, gain) = Self::lowpass_to_bandpass(&prototype, center, bandwidth);
        let (zeros, poles, gain) = Self::bilinear(&zeros, &poles, gain);

        let max_radius = poles.iter().map(|p| p.norm()).fold(0.0, f64::max);
        if max_radius >= 1.0 {
            return Err(EegError::FilterInstability(format!(
                "Pole at radius {} for band {} - {} Hz (order {}, sampling rate {} Hz)",
                max_radius, spec.low_cut_hz, spec.high_cut_hz, spec.order, spec.sampling_rate_hz
            )));
        }

        debug!(
            "Designed order-{} bandpass {} - {} Hz at {} Hz, max pole radius {:.6}",
            spec.order, spec.low_cut_hz, spec.high_cut_hz, spec.sampling_rate_hz, max_radius
        );

        Ok(Self::to_transfer_function(&zeros, &poles, gain))
    }

    fn validate(spec: &FilterSpec) -> Result<()> {
        if spec.order == 0 {
            return Err(EegError::InvalidFilterSpec(
                "Filter order must be at least 1".to_string(),
            ));
        }
        if !spec.sampling_rate_hz.is_finite() || spec.sampling_rate_hz <= 0.0 {
            return Err(EegError::InvalidFilterSpec(format!(
                "Sampling rate must be positive and finite, got {} Hz",
                spec.sampling_rate_hz
            )));
        }

        let nyquist_hz = spec.sampling_rate_hz / 2.0;
        let low = spec.low_cut_hz / nyquist_hz;
        let high = spec.high_cut_hz / nyquist_hz;
        if !(low > 0.0 && low < 1.0) || !(high > 0.0 && high < 1.0) {
            return Err(EegError::InvalidCutoff(format!(
                "Cutoffs {} and {} Hz must lie strictly between 0 and Nyquist ({} Hz)",
                spec.low_cut_hz, spec.high_cut_hz, nyquist_hz
            )));
        }
        if spec.low_cut_hz >= spec.high_cut_hz {
            return Err(EegError::InvalidCutoff(format!(
                "Low cutoff {} Hz must be below high cutoff {} Hz",
                spec.low_cut_hz, spec.high_cut_hz
            )));
        }
        Ok(())
    }

    /// Lowpass prototype poles, evenly spaced on the left half of the
    /// unit circle and symmetric about the real axis.
    fn prototype_poles(order: usize) -> Vec<Complex64> {
        (0..order)
            .map(|k| {
                let m = 2.0 * k as f64 - order as f64 + 1.0;
                let theta = PI * m / (2.0 * order as f64);
                -Complex64::from_polar(1.0, theta)
            })
            .collect()
    }

    /// Lowpass-to-bandpass transform in pole/zero form. Each prototype
    /// pole splits into a conjugate-ish pair around the band center;
    /// one zero lands at the origin per prototype pole.
    fn lowpass_to_bandpass(
        prototype: &[Complex64],
        center: f64,
        bandwidth: f64,
    ) -> (Vec<Complex64>, Vec<Complex64>, f64) {
        let center_sq = Complex64::new(center * center, 0.0);
        let mut poles = Vec::with_capacity(prototype.len() * 2);
        for &p in prototype {
            let scaled = p * (bandwidth / 2.0);
            let offset = (scaled * scaled - center_sq).sqrt();
            poles.push(scaled + offset);
            poles.push(scaled - offset);
        }
        let zeros = vec![Complex64::new(0.0, 0.0); prototype.len()];
        let gain = bandwidth.powi(prototype.len() as i32);
        (zeros, poles, gain)
    }

    /// Bilinear transform from the s-plane to the z-plane. The degree
    /// difference between poles and zeros reappears as zeros at Nyquist.
    fn bilinear(
        zeros: &[Complex64],
        poles: &[Complex64],
        gain: f64,
    ) -> (Vec<Complex64>, Vec<Complex64>, f64) {
        let fs2 = Complex64::new(2.0 * DESIGN_FS, 0.0);

        let mut digital_zeros: Vec<Complex64> =
            zeros.iter().map(|&z| (fs2 + z) / (fs2 - z)).collect();
        let digital_poles: Vec<Complex64> =
            poles.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();

        let degree = poles.len() - zeros.len();
        digital_zeros.extend(std::iter::repeat(Complex64::new(-1.0, 0.0)).take(degree));

        let numerator: Complex64 = zeros.iter().map(|&z| fs2 - z).product();
        let denominator: Complex64 = poles.iter().map(|&p| fs2 - p).product();
        let digital_gain = gain * (numerator / denominator).re;

        (digital_zeros, digital_poles, digital_gain)
    }

    /// Expand pole/zero form into `b` and `a` polynomials. Roots come in
    /// conjugate pairs, so the imaginary parts of the products cancel.
    fn to_transfer_function(
        zeros: &[Complex64],
        poles: &[Complex64],
        gain: f64,
    ) -> FilterCoefficients {
        let b: Vec<f64> = Self::polynomial_from_roots(zeros)
            .iter()
            .map(|&c| (c * gain).re)
            .collect();
        let a: Vec<f64> = Self::polynomial_from_roots(poles)
            .iter()
            .map(|c| c.re)
            .collect();

        let a0 = a[0];
        FilterCoefficients {
            b: b.iter().map(|c| c / a0).collect(),
            a: a.iter().map(|c| c / a0).collect(),
        }
    }

    /// Coefficients of `(x - r0)(x - r1)...` in descending powers,
    /// built by successive convolution with `[1, -r]`.
    fn polynomial_from_roots(roots: &[Complex64]) -> Vec<Complex64> {
        let mut coeffs = vec![Complex64::new(1.0, 0.0)];
        for &root in roots {
            coeffs.push(Complex64::new(0.0, 0.0));
            for i in (1..coeffs.len()).rev() {
                let prev = coeffs[i - 1];
                coeffs[i] -= root * prev;
            }
        }
        coeffs
    }
}
