// src/processing/features/band_power.rs
//! Spectral power features over the canonical EEG bands
//!
//! Power estimates come from a Hann-windowed periodogram. These are
//! summary features for checking where a signal's energy sits, not a
//! replacement for the time-domain band components the decomposer
//! produces.

use crate::processing::filters::FilterBand;
use rustfft::{num_complex::Complex64, FftPlanner};
use std::f64::consts::PI;

/// Mean-square power of a signal. Empty signals have zero power.
pub fn signal_power(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|s| s * s).sum::<f64>() / signal.len() as f64
}

/// One-sided Hann-windowed periodogram as `(frequency_hz, power)` bins.
///
/// Interior bins fold in their negative-frequency twins; DC and
/// Nyquist appear once.
pub fn periodogram(signal: &[f64], sampling_rate_hz: f64) -> Vec<(f64, f64)> {
    if signal.is_empty() {
        return Vec::new();
    }

    let window = hann_window(signal.len());
    let mut buffer: Vec<Complex64> = signal
        .iter()
        .zip(&window)
        .map(|(&s, &w)| Complex64::new(s * w, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    let n = buffer.len();
    let scale = window.iter().map(|w| w * w).sum::<f64>() * sampling_rate_hz;
    buffer
        .iter()
        .take(n / 2 + 1)
        .enumerate()
        .map(|(i, bin)| {
            let frequency_hz = i as f64 * sampling_rate_hz / n as f64;
            let mut power = bin.norm_sqr() / scale;
            if i > 0 && i < n - i {
                power *= 2.0;
            }
            (frequency_hz, power)
        })
        .collect()
}

/// Total periodogram power falling inside a band's edges. The lower
/// edge is inclusive and the upper exclusive, so contiguous bands
/// never double-count a bin.
pub fn band_power(psd: &[(f64, f64)], band: FilterBand) -> f64 {
    let (low_hz, high_hz) = band.edges_hz();
    psd.iter()
        .filter(|(f, _)| *f >= low_hz && *f < high_hz)
        .map(|(_, p)| p)
        .sum()
}

/// Each band's share of the summed four-band power, in canonical
/// order. All zeros when the signal carries no band power at all.
pub fn relative_band_powers(signal: &[f64], sampling_rate_hz: f64) -> [(FilterBand, f64); 4] {
    let psd = periodogram(signal, sampling_rate_hz);
    let mut powers = FilterBand::ALL.map(|band| (band, band_power(&psd, band)));
    let total: f64 = powers.iter().map(|(_, p)| p).sum();
    if total > 0.0 {
        for (_, power) in powers.iter_mut() {
            *power /= total;
        }
    }
    powers
}

fn hann_window(size: usize) -> Vec<f64> {
    if size == 1 {
        return vec![1.0];
    }
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / (size - 1) as f64).cos()))
        .collect()
}
