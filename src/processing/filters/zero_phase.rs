// src/processing/filters/zero_phase.rs
//! Zero-phase forward-backward filtering
//!
//! A single IIR pass delays every frequency component by its group
//! delay. Running the same filter forward and then backward over the
//! result cancels the phase response and squares the magnitude
//! response, which puts the band edges at -6 dB instead of -3 dB.
//! Edge transients are held down by reflecting the signal about its
//! endpoints and seeding each pass with steady-state initial
//! conditions scaled to the first sample.

use super::FilterCoefficients;
use crate::config::constants::filters::PADDING_FACTOR;
use crate::error::{EegError, Result};

/// Reusable zero-phase filter. Solving for the steady-state initial
/// conditions happens once at construction, so one engine can be
/// applied to any number of signals.
#[derive(Debug, Clone)]
pub struct ZeroPhaseFilterEngine {
    coefficients: FilterCoefficients,
    initial_state: Vec<f64>,
}

impl ZeroPhaseFilterEngine {
    /// Build an engine around designed coefficients.
    pub fn new(coefficients: FilterCoefficients) -> Result<Self> {
        let initial_state = lfilter_zi(&coefficients)?;
        Ok(Self {
            coefficients,
            initial_state,
        })
    }

    /// The transfer function this engine applies.
    pub fn coefficients(&self) -> &FilterCoefficients {
        &self.coefficients
    }

    /// Samples of reflected padding added to each end of the input.
    pub fn pad_len(&self) -> usize {
        PADDING_FACTOR * self.coefficients.tap_count()
    }

    /// Filter `signal` forward and backward, returning an output of the
    /// same length with zero phase shift.
    ///
    /// The signal must be longer than [`Self::pad_len`] samples or the
    /// reflection is undefined; shorter inputs yield
    /// [`EegError::InvalidFilterSpec`]. A pass that produces non-finite
    /// samples yields [`EegError::FilterInstability`].
    pub fn apply(&self, signal: &[f64]) -> Result<Vec<f64>> {
        let pad_len = self.pad_len();
        if signal.len() <= pad_len {
            return Err(EegError::InvalidFilterSpec(format!(
                "Signal of {} samples is too short to reflect {} samples at each end",
                signal.len(),
                pad_len
            )));
        }

        let extended = odd_extension(signal, pad_len);

        let scaled: Vec<f64> = self.initial_state.iter().map(|z| z * extended[0]).collect();
        let forward = lfilter(&self.coefficients, &extended, Some(&scaled));
        ensure_finite(&forward)?;

        let mut reversed = forward;
        reversed.reverse();
        let scaled: Vec<f64> = self.initial_state.iter().map(|z| z * reversed[0]).collect();
        let mut backward = lfilter(&self.coefficients, &reversed, Some(&scaled));
        ensure_finite(&backward)?;
        backward.reverse();

        Ok(backward[pad_len..backward.len() - pad_len].to_vec())
    }
}

/// One forward-backward pass without keeping an engine around.
pub fn filtfilt(coefficients: &FilterCoefficients, signal: &[f64]) -> Result<Vec<f64>> {
    ZeroPhaseFilterEngine::new(coefficients.clone())?.apply(signal)
}

/// Single IIR pass in direct form II transposed.
///
/// `zi` seeds the delay line with `tap_count - 1` values; `None` starts
/// from rest. `a[0]` must be nonzero.
pub fn lfilter(coefficients: &FilterCoefficients, signal: &[f64], zi: Option<&[f64]>) -> Vec<f64> {
    let n = coefficients.tap_count();
    let mut b = coefficients.b.clone();
    let mut a = coefficients.a.clone();
    b.resize(n, 0.0);
    a.resize(n, 0.0);

    let a0 = a[0];
    if a0 != 1.0 {
        for c in b.iter_mut() {
            *c /= a0;
        }
        for c in a.iter_mut() {
            *c /= a0;
        }
    }

    let mut state = match zi {
        Some(zi) => {
            debug_assert_eq!(zi.len(), n - 1);
            let mut state = zi.to_vec();
            state.resize(n - 1, 0.0);
            state
        }
        None => vec![0.0; n - 1],
    };

    let mut output = Vec::with_capacity(signal.len());
    for &x in signal {
        let y = b[0] * x + state.first().copied().unwrap_or(0.0);
        for j in 0..state.len().saturating_sub(1) {
            state[j] = b[j + 1] * x + state[j + 1] - a[j + 1] * y;
        }
        if let Some(last) = state.last_mut() {
            *last = b[n - 1] * x - a[n - 1] * y;
        }
        output.push(y);
    }
    output
}

/// Steady-state initial conditions: the delay-line state from which a
/// unit step input produces no startup transient. Solves
/// `(I - C^T) zi = b[1..] - a[1..] b[0]` where `C` is the companion
/// matrix of `a`.
pub fn lfilter_zi(coefficients: &FilterCoefficients) -> Result<Vec<f64>> {
    let n = coefficients.tap_count();
    let mut b = coefficients.b.clone();
    let mut a = coefficients.a.clone();
    b.resize(n, 0.0);
    a.resize(n, 0.0);

    let a0 = a[0];
    if a0 != 1.0 {
        for c in b.iter_mut() {
            *c /= a0;
        }
        for c in a.iter_mut() {
            *c /= a0;
        }
    }

    let m = n - 1;
    if m == 0 {
        return Ok(Vec::new());
    }

    let mut matrix = vec![vec![0.0; m]; m];
    for row in 0..m {
        matrix[row][0] += a[row + 1];
        matrix[row][row] += 1.0;
        if row + 1 < m {
            matrix[row][row + 1] -= 1.0;
        }
    }
    let rhs: Vec<f64> = (0..m).map(|row| b[row + 1] - a[row + 1] * b[0]).collect();

    solve_linear_system(matrix, rhs)
}

/// Gaussian elimination with partial pivoting.
fn solve_linear_system(mut matrix: Vec<Vec<f64>>, mut rhs: Vec<f64>) -> Result<Vec<f64>> {
    let n = rhs.len();
    for col in 0..n {
        let mut pivot = col;
        for row in (col + 1)..n {
            if matrix[row][col].abs() > matrix[pivot][col].abs() {
                pivot = row;
            }
        }
        if matrix[pivot][col].abs() < f64::EPSILON {
            return Err(EegError::FilterInstability(
                "Steady-state initial conditions are singular".to_string(),
            ));
        }
        matrix.swap(pivot, col);
        rhs.swap(pivot, col);

        for row in (col + 1)..n {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..n {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = rhs[row];
        for k in (row + 1)..n {
            sum -= matrix[row][k] * solution[k];
        }
        solution[row] = sum / matrix[row][row];
    }
    Ok(solution)
}

/// Point-reflect `pad_len` samples about each endpoint.
fn odd_extension(signal: &[f64], pad_len: usize) -> Vec<f64> {
    let n = signal.len();
    let first = signal[0];
    let last = signal[n - 1];

    let mut extended = Vec::with_capacity(n + 2 * pad_len);
    for i in (1..=pad_len).rev() {
        extended.push(2.0 * first - signal[i]);
    }
    extended.extend_from_slice(signal);
    for i in 1..=pad_len {
        extended.push(2.0 * last - signal[n - 1 - i]);
    }
    extended
}

fn ensure_finite(samples: &[f64]) -> Result<()> {
    if samples.iter().all(|s| s.is_finite()) {
        Ok(())
    } else {
        Err(EegError::FilterInstability(
            "Filter pass produced non-finite samples".to_string(),
        ))
    }
}
