// tests/filter_properties.rs
//! Filter design and zero-phase filtering property tests
//!
//! These tests pin down the filter contract from the outside:
//! - Band edges sit at -3 dB after one pass and -6 dB after the round trip
//! - The round trip leaves no phase shift at in-band frequencies
//! - Design and filtering stay stable across the valid parameter space

use eeg_core::error::EegError;
use eeg_core::processing::{filtfilt, lfilter, FilterBand, FilterDesigner, FilterSpec};
use std::f64::consts::PI;

fn sine(frequency_hz: f64, sampling_rate_hz: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| (2.0 * PI * frequency_hz * i as f64 / sampling_rate_hz).sin())
        .collect()
}

fn rms(signal: &[f64]) -> f64 {
    (signal.iter().map(|s| s * s).sum::<f64>() / signal.len() as f64).sqrt()
}

/// Phase of `signal` relative to a unit sine at `frequency_hz`,
/// measured by projection over an integer number of periods.
fn phase_at(signal: &[f64], frequency_hz: f64, sampling_rate_hz: f64) -> f64 {
    let omega = 2.0 * PI * frequency_hz / sampling_rate_hz;
    let (mut in_phase, mut quadrature) = (0.0, 0.0);
    for (i, &y) in signal.iter().enumerate() {
        in_phase += y * (omega * i as f64).sin();
        quadrature += y * (omega * i as f64).cos();
    }
    quadrature.atan2(in_phase)
}

/// One forward pass attenuates a band-edge tone to 1/sqrt(2)
#[test]
fn single_pass_edge_attenuation_is_3db() {
    let spec = FilterSpec::for_band(FilterBand::Alpha, 256.0, 4);
    let coeffs = FilterDesigner::design_bandpass(&spec).unwrap();

    for edge_hz in [8.0, 13.0] {
        let signal = sine(edge_hz, 256.0, 1024);
        let output = lfilter(&coeffs, &signal, None);
        // Skip the startup transient before measuring
        let ratio = rms(&output[256..]) / rms(&signal[256..]);
        assert!(
            (ratio - 1.0 / 2.0_f64.sqrt()).abs() < 0.01,
            "{} Hz: ratio {}",
            edge_hz,
            ratio
        );
    }
}

/// The forward-backward round trip squares the magnitude response,
/// putting the band edges at -6 dB
#[test]
fn round_trip_edge_attenuation_is_6db() {
    let spec = FilterSpec::for_band(FilterBand::Alpha, 256.0, 4);
    let coeffs = FilterDesigner::design_bandpass(&spec).unwrap();

    for edge_hz in [8.0, 13.0] {
        let signal = sine(edge_hz, 256.0, 1024);
        let output = filtfilt(&coeffs, &signal).unwrap();
        let ratio = rms(&output[256..768]) / rms(&signal[256..768]);
        assert!(
            (ratio - 0.5).abs() < 0.02,
            "{} Hz: ratio {}",
            edge_hz,
            ratio
        );
    }
}

/// In-band tones come back from the round trip with no phase shift
#[test]
fn round_trip_leaves_no_phase_shift() {
    let spec = FilterSpec::for_band(FilterBand::Alpha, 256.0, 4);
    let coeffs = FilterDesigner::design_bandpass(&spec).unwrap();

    for frequency_hz in [9.0, 10.0, 11.0, 12.0] {
        let signal = sine(frequency_hz, 256.0, 1024);
        let output = filtfilt(&coeffs, &signal).unwrap();
        let phase = phase_at(&output[256..768], frequency_hz, 256.0);
        assert!(
            phase.abs() < 0.02,
            "{} Hz shifted by {} rad",
            frequency_hz,
            phase
        );
    }
}

/// A single pass does shift the phase away from the band center, which
/// is exactly what the round trip exists to cancel
#[test]
fn single_pass_shifts_phase_off_center() {
    let spec = FilterSpec::for_band(FilterBand::Alpha, 256.0, 4);
    let coeffs = FilterDesigner::design_bandpass(&spec).unwrap();

    let signal = sine(9.0, 256.0, 1024);
    let output = lfilter(&coeffs, &signal, None);
    let phase = phase_at(&output[256..768], 9.0, 256.0);
    assert!(phase.abs() > 0.05, "expected a phase shift, got {} rad", phase);
}

/// All four canonical bands design cleanly at the default rate
#[test]
fn canonical_bands_design_at_256_hz() {
    for band in FilterBand::ALL {
        for order in 1..=5 {
            let spec = FilterSpec::for_band(band, 256.0, order);
            let coeffs = FilterDesigner::design_bandpass(&spec).unwrap();
            assert_eq!(coeffs.b.len(), 2 * order + 1);
            assert_eq!(coeffs.a.len(), 2 * order + 1);
        }
    }
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Any spec with well-separated cutoffs inside Nyquist designs
        /// into finite, monic coefficients
        #[test]
        fn design_succeeds_across_valid_space(
            low_frac in 0.02f64..0.4,
            width_frac in 0.05f64..0.3,
            order in 1usize..=5,
            fs in 64.0f64..512.0,
        ) {
            let nyquist = fs / 2.0;
            let spec = FilterSpec {
                low_cut_hz: low_frac * nyquist,
                high_cut_hz: (low_frac + width_frac) * nyquist,
                order,
                sampling_rate_hz: fs,
            };
            let coeffs = FilterDesigner::design_bandpass(&spec);
            prop_assert!(coeffs.is_ok(), "{:?}", coeffs.err());
            let coeffs = coeffs.unwrap();
            prop_assert!(coeffs.b.iter().all(|c| c.is_finite()));
            prop_assert!(coeffs.a.iter().all(|c| c.is_finite()));
            prop_assert_eq!(coeffs.a[0], 1.0);
        }

        /// The round trip preserves length and never produces
        /// non-finite samples inside the valid space
        #[test]
        fn round_trip_preserves_length(
            low_frac in 0.02f64..0.4,
            width_frac in 0.05f64..0.3,
            order in 1usize..=5,
            fs in 64.0f64..512.0,
            len in 200usize..1200,
        ) {
            let nyquist = fs / 2.0;
            let spec = FilterSpec {
                low_cut_hz: low_frac * nyquist,
                high_cut_hz: (low_frac + width_frac) * nyquist,
                order,
                sampling_rate_hz: fs,
            };
            let coeffs = FilterDesigner::design_bandpass(&spec).unwrap();

            let signal: Vec<f64> = (0..len)
                .map(|i| (i as f64 * 0.37).sin() + 0.3 * (i as f64 * 0.11).cos())
                .collect();
            let output = filtfilt(&coeffs, &signal);
            prop_assert!(output.is_ok(), "{:?}", output.err());
            let output = output.unwrap();
            prop_assert_eq!(output.len(), len);
            prop_assert!(output.iter().all(|s| s.is_finite()));
        }

        /// Inverted cutoffs are rejected no matter the values
        #[test]
        fn inverted_cutoffs_are_rejected(
            low in 1.0f64..50.0,
            gap in 0.1f64..10.0,
        ) {
            let spec = FilterSpec {
                low_cut_hz: low + gap,
                high_cut_hz: low,
                order: 4,
                sampling_rate_hz: 256.0,
            };
            prop_assert!(matches!(
                FilterDesigner::design_bandpass(&spec),
                Err(EegError::InvalidCutoff(_))
            ));
        }
    }
}
