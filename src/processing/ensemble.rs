//! Robust inverse-variance weighted ensemble averaging.
//!
//! Each row of the ensemble is one noisy realization of the same
//! event-related waveform (e.g. one generated or recorded beat). Rows
//! whose residual against a first-pass reference is noisier receive
//! proportionally less weight in the final average.

use crate::error::{Error, Result};
use crate::processing::rank::median;

/// Result of [`robust_weighted_average`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleAverage {
    /// Inverse-variance weighted mean waveform.
    pub mean: Vec<f64>,
    /// Across-row variance of the residual against `mean`, per sample.
    pub mean_variance: Vec<f64>,
    /// Weighted-median variant; present for ensembles of more than two
    /// rows.
    pub median: Option<Vec<f64>>,
    pub median_variance: Option<Vec<f64>>,
}

fn column_mean(rows: &[Vec<f64>]) -> Vec<f64> {
    let t_len = rows[0].len();
    let mut out = vec![0.0; t_len];
    for row in rows {
        for (o, &v) in out.iter_mut().zip(row) {
            *o += v;
        }
    }
    let n = rows.len() as f64;
    for o in &mut out {
        *o /= n;
    }
    out
}

fn column_median(rows: &[Vec<f64>]) -> Vec<f64> {
    let t_len = rows[0].len();
    (0..t_len)
        .map(|t| {
            let col: Vec<f64> = rows.iter().map(|r| r[t]).collect();
            median(&col)
        })
        .collect()
}

/// One weighting pass: weight each row by the inverse variance of its
/// residual against `reference`, then return the weighted combination
/// and the per-sample across-row variance of the residual against it.
///
/// A row that matches `reference` exactly has zero residual variance;
/// its infinite weight propagates as non-finite output rather than
/// being silently regularized.
fn weighted_toward(rows: &[Vec<f64>], reference: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let t_len = reference.len();
    let n = rows.len();

    let row_var: Vec<f64> = rows
        .iter()
        .map(|row| {
            let resid: Vec<f64> = row.iter().zip(reference).map(|(x, m)| x - m).collect();
            let mean_r = resid.iter().sum::<f64>() / t_len as f64;
            resid.iter().map(|r| (r - mean_r).powi(2)).sum::<f64>() / t_len as f64
        })
        .collect();

    let inv_sum: f64 = row_var.iter().map(|v| 1.0 / v).sum();
    let weights: Vec<f64> = row_var.iter().map(|v| 1.0 / (v * inv_sum)).collect();

    let mut avg = vec![0.0; t_len];
    for (row, &w) in rows.iter().zip(&weights) {
        for (a, &v) in avg.iter_mut().zip(row) {
            *a += w * v;
        }
    }

    let mut var = vec![0.0; t_len];
    for t in 0..t_len {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for row in rows {
            let r = row[t] - avg[t];
            sum += r;
            sum_sq += r * r;
        }
        let m = sum / n as f64;
        var[t] = sum_sq / n as f64 - m * m;
    }

    (avg, var)
}

/// Robust weighted averaging over an N x T ensemble.
///
/// For a single row the row itself is returned with zero variance. For
/// more than two rows a weighted-median variant (same weighting scheme,
/// median reference) is computed as well.
pub fn robust_weighted_average(rows: &[Vec<f64>]) -> Result<EnsembleAverage> {
    if rows.is_empty() || rows[0].is_empty() {
        return Err(Error::EmptyInput);
    }
    let t_len = rows[0].len();
    if rows.iter().any(|r| r.len() != t_len) {
        return Err(Error::RaggedMatrix);
    }

    if rows.len() == 1 {
        return Ok(EnsembleAverage {
            mean: rows[0].clone(),
            mean_variance: vec![0.0; t_len],
            median: None,
            median_variance: None,
        });
    }

    let (mean, mean_variance) = weighted_toward(rows, &column_mean(rows));

    let (median, median_variance) = if rows.len() > 2 {
        let (md, vr) = weighted_toward(rows, &column_median(rows));
        (Some(md), Some(vr))
    } else {
        (None, None)
    };

    Ok(EnsembleAverage {
        mean,
        mean_variance,
        median,
        median_variance,
    })
}
