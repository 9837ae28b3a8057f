//! Percentile-trimmed column means over an ensemble matrix.

use crate::error::{Error, Result};
use crate::processing::rank::percentile_sorted;

/// Mean of each column restricted to the samples lying inside the
/// `[lower, upper]` percentile bounds of that column.
///
/// Rows are independent realizations (one generated beat per row); all
/// rows must share one length. If the interpolated bounds for a column
/// straddle no actual sample the column mean degenerates to NaN, which
/// is reported as-is.
pub fn trimmed_mean(rows: &[Vec<f64>], lower: f64, upper: f64) -> Result<Vec<f64>> {
    if rows.is_empty() || rows[0].is_empty() {
        return Err(Error::EmptyInput);
    }
    if !(0.0..=100.0).contains(&lower) || !(0.0..=100.0).contains(&upper) || lower >= upper {
        return Err(Error::PercentileRange { lower, upper });
    }
    let width = rows[0].len();
    if rows.iter().any(|r| r.len() != width) {
        return Err(Error::RaggedMatrix);
    }

    let mut out = Vec::with_capacity(width);
    for t in 0..width {
        let mut col: Vec<f64> = rows.iter().map(|r| r[t]).collect();
        col.sort_by(f64::total_cmp);
        let lo = percentile_sorted(&col, lower);
        let hi = percentile_sorted(&col, upper);
        let mut sum = 0.0;
        let mut count = 0usize;
        for &v in &col {
            if v >= lo && v <= hi {
                sum += v;
                count += 1;
            }
        }
        out.push(sum / count as f64);
    }
    Ok(out)
}
