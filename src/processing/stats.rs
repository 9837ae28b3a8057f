//! Per-channel moment statistics.

use crate::error::{Error, Result};

/// Mean, population standard deviation, and skewness of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
}

/// Third-moment skewness per channel via
/// `(E[x^3] - 3 m sd^2 - m^3) / sd^3`, with population standard
/// deviation. Channels with zero spread report zero skewness instead
/// of NaN.
pub fn channel_moments(rows: &[Vec<f64>]) -> Result<Vec<Moments>> {
    if rows.is_empty() || rows[0].is_empty() {
        return Err(Error::EmptyInput);
    }
    let t_len = rows[0].len();
    if rows.iter().any(|r| r.len() != t_len) {
        return Err(Error::RaggedMatrix);
    }

    Ok(rows
        .iter()
        .map(|row| {
            let n = row.len() as f64;
            let mean = row.iter().sum::<f64>() / n;
            let var = row.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
            let std_dev = var.sqrt();
            let m3 = row.iter().map(|&v| v.powi(3)).sum::<f64>() / n;
            let raw = (m3 - 3.0 * mean * var - mean.powi(3)) / std_dev.powi(3);
            let skewness = if raw.is_finite() { raw } else { 0.0 };
            Moments {
                mean,
                std_dev,
                skewness,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_data_has_zero_skewness() {
        let m = channel_moments(&[vec![-2.0, -1.0, 0.0, 1.0, 2.0]]).unwrap();
        assert_eq!(m[0].mean, 0.0);
        assert!((m[0].std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(m[0].skewness.abs() < 1e-12);
    }

    #[test]
    fn right_tail_gives_positive_skewness() {
        let m = channel_moments(&[vec![0.0, 0.0, 0.0, 0.0, 10.0]]).unwrap();
        assert!(m[0].skewness > 0.0);
        let flipped = channel_moments(&[vec![0.0, 0.0, 0.0, 0.0, -10.0]]).unwrap();
        assert!((m[0].skewness + flipped[0].skewness).abs() < 1e-12);
    }

    #[test]
    fn constant_channel_reports_zero_skewness() {
        let m = channel_moments(&[vec![3.0, 3.0, 3.0]]).unwrap();
        assert_eq!(m[0].std_dev, 0.0);
        assert_eq!(m[0].skewness, 0.0);
    }

    #[test]
    fn channels_are_independent() {
        let m = channel_moments(&[vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 9.0]]).unwrap();
        assert!((m[0].mean - 2.0).abs() < 1e-12);
        assert!((m[1].mean - 3.0).abs() < 1e-12);
        assert!(m[0].skewness.abs() < 1e-12);
        assert!(m[1].skewness > 0.0);
    }
}
