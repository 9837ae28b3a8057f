//! Beat polarity detection.
//!
//! An upright beat has its dominant deflection (the R wave) above the
//! baseline, which shows up as positive skewness once slow baseline
//! drift is removed. Baseline estimation uses a zero-phase 2nd-order
//! Butterworth low-pass so the residual is not phase-shifted against
//! the original trace.

use std::f64::consts::{PI, SQRT_2};

use crate::error::{Error, Result};
use crate::processing::stats::channel_moments;

/// 2nd-order Butterworth low-pass coefficients via bilinear transform.
/// Returns `(b, a)` with `a0` normalized to one.
fn butter2_lowpass(fc: f64, fs: f64) -> ([f64; 3], [f64; 2]) {
    let k = (PI * fc / fs).tan();
    let norm = 1.0 / (1.0 + SQRT_2 * k + k * k);
    let b0 = k * k * norm;
    (
        [b0, 2.0 * b0, b0],
        [
            2.0 * (k * k - 1.0) * norm,
            (1.0 - SQRT_2 * k + k * k) * norm,
        ],
    )
}

/// Single forward pass, direct form II transposed. State starts at the
/// steady state for the first sample, so a constant input produces a
/// constant output from sample zero.
fn filter_once(x: &[f64], b: &[f64; 3], a: &[f64; 2]) -> Vec<f64> {
    let x0 = x[0];
    let mut z1 = (1.0 - b[0]) * x0;
    let mut z2 = (b[2] - a[1]) * x0;
    x.iter()
        .map(|&xi| {
            let y = b[0] * xi + z1;
            z1 = b[1] * xi - a[0] * y + z2;
            z2 = b[2] * xi - a[1] * y;
            y
        })
        .collect()
}

/// Zero-phase low-pass: filter forward, then backward, with odd
/// reflection padding at both ends to suppress edge transients.
pub fn lowpass_zero_phase(x: &[f64], fc: f64, fs: f64) -> Result<Vec<f64>> {
    if x.is_empty() {
        return Err(Error::EmptySignal);
    }
    if fs <= 0.0 {
        return Err(Error::NonPositiveSampleRate(fs));
    }
    let nyquist = fs / 2.0;
    if fc <= 0.0 || fc >= nyquist {
        return Err(Error::CutoffOutOfRange { fc, nyquist });
    }

    let (b, a) = butter2_lowpass(fc, fs);
    let n = x.len();
    let pad = 9.min(n - 1);

    // Odd extension about both endpoints.
    let mut ext = Vec::with_capacity(n + 2 * pad);
    for i in (1..=pad).rev() {
        ext.push(2.0 * x[0] - x[i]);
    }
    ext.extend_from_slice(x);
    for i in 1..=pad {
        ext.push(2.0 * x[n - 1] - x[n - 1 - i]);
    }

    let mut y = filter_once(&ext, &b, &a);
    y.reverse();
    let mut y = filter_once(&y, &b, &a);
    y.reverse();

    Ok(y[pad..pad + n].to_vec())
}

/// Per-channel beat polarity: `true` when the skewness of the
/// baseline-removed trace is non-negative.
///
/// `fc` is the baseline cutoff in Hz; 3 Hz is the conventional choice
/// for adult ECG.
pub fn polarity(ecg: &[Vec<f64>], fs: f64, fc: f64) -> Result<Vec<bool>> {
    if ecg.is_empty() || ecg[0].is_empty() {
        return Err(Error::EmptyInput);
    }
    let t_len = ecg[0].len();
    if ecg.iter().any(|r| r.len() != t_len) {
        return Err(Error::RaggedMatrix);
    }

    let mut residuals = Vec::with_capacity(ecg.len());
    for row in ecg {
        let baseline = lowpass_zero_phase(row, fc, fs)?;
        residuals.push(
            row.iter()
                .zip(&baseline)
                .map(|(x, bl)| x - bl)
                .collect::<Vec<f64>>(),
        );
    }

    Ok(channel_moments(&residuals)?
        .iter()
        .map(|m| m.skewness >= 0.0)
        .collect())
}
