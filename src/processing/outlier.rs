//! Sliding-window outlier replacement for multichannel traces.

use crate::error::{Error, Result};
use crate::processing::rank::{median, percentile_sorted};

/// Window statistic used both to detect and to replace outliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStat {
    Mean,
    Median,
}

/// Replace outlier samples with the local window statistic.
///
/// `x` is channels x time. The detection threshold is computed per
/// channel as the given percentile of the absolute first difference,
/// so a channel's own roughness sets its own bar. A sample is replaced
/// when it deviates from the window statistic by at least that
/// threshold. `half_window` is the number of neighbors taken on each
/// side (truncated at the edges).
pub fn outlier_filter(
    x: &[Vec<f64>],
    stat: WindowStat,
    half_window: usize,
    threshold_percentile: f64,
) -> Result<Vec<Vec<f64>>> {
    if x.is_empty() || x[0].len() < 2 {
        return Err(Error::EmptyInput);
    }
    let t_len = x[0].len();
    if x.iter().any(|r| r.len() != t_len) {
        return Err(Error::RaggedMatrix);
    }
    if !(0.0..=100.0).contains(&threshold_percentile) {
        return Err(Error::PercentileRange {
            lower: 0.0,
            upper: threshold_percentile,
        });
    }

    let thresholds: Vec<f64> = x
        .iter()
        .map(|row| {
            let mut diffs: Vec<f64> = row.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
            diffs.sort_by(f64::total_cmp);
            percentile_sorted(&diffs, threshold_percentile)
        })
        .collect();

    let mut filtered = x.to_vec();
    for t in 0..t_len {
        let start = t.saturating_sub(half_window);
        let end = (t + half_window + 1).min(t_len);
        for (c, row) in x.iter().enumerate() {
            let window = &row[start..end];
            let center = match stat {
                WindowStat::Mean => window.iter().sum::<f64>() / window.len() as f64,
                WindowStat::Median => median(window),
            };
            if (row[t] - center).abs() >= thresholds[c] {
                filtered[c][t] = center;
            }
        }
    }
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_an_injected_spike() {
        let mut trace: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
        trace[50] = 25.0;
        let clean = outlier_filter(&[trace.clone()], WindowStat::Median, 5, 95.0).unwrap();
        assert!(
            (clean[0][50] - (50.0 * 0.1_f64).sin()).abs() < 0.2,
            "spike survived: {}",
            clean[0][50]
        );
        // Away from the spike the trace passes through mostly untouched.
        assert!((clean[0][10] - trace[10]).abs() < 1e-12);
    }

    #[test]
    fn smooth_signal_interior_is_left_alone_by_median() {
        let trace: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let out = outlier_filter(&[trace.clone()], WindowStat::Median, 3, 100.0).unwrap();
        // A perfect ramp has constant |diff|, and the median of a full
        // symmetric window equals the center sample, so the interior
        // does not move. Edge windows are asymmetric and may shift.
        assert_eq!(out[0][3..47], trace[3..47]);
    }

    #[test]
    fn channels_use_their_own_thresholds() {
        let quiet: Vec<f64> = (0..60).map(|i| (i as f64 * 0.05).sin() * 0.01).collect();
        let mut loud: Vec<f64> = (0..60).map(|i| (i as f64 * 0.05).sin()).collect();
        loud[30] = 40.0;
        let out = outlier_filter(
            &[quiet.clone(), loud],
            WindowStat::Median,
            4,
            90.0,
        )
        .unwrap();
        assert!(out[1][30].abs() < 1.5, "loud-channel spike survived");
        // The quiet channel's tiny wiggles stay under its own threshold.
        assert!((out[0][15] - quiet[15]).abs() < 1e-9);
    }

    #[test]
    fn rejects_short_or_ragged_input() {
        assert_eq!(
            outlier_filter(&[vec![1.0]], WindowStat::Mean, 2, 95.0).unwrap_err(),
            Error::EmptyInput
        );
        let ragged = vec![vec![1.0, 2.0, 3.0], vec![1.0]];
        assert_eq!(
            outlier_filter(&ragged, WindowStat::Mean, 2, 95.0).unwrap_err(),
            Error::RaggedMatrix
        );
    }
}
