//! Soft saturation of outlier samples via scaled tanh.

use crate::error::{Error, Result};

/// How the per-channel saturation level `alpha` is chosen; the output
/// is `alpha * tanh(x / alpha)`, so `alpha` is the asymptotic bound.
#[derive(Debug, Clone, PartialEq)]
pub enum SaturationLevel {
    /// `alpha = k * sigma`, with sigma the channel's population
    /// standard deviation.
    KSigma(f64),
    /// One absolute level shared by every channel.
    Absolute(f64),
    /// One absolute level per channel.
    PerChannel(Vec<f64>),
}

pub fn tanh_saturation(x: &[Vec<f64>], level: &SaturationLevel) -> Result<Vec<Vec<f64>>> {
    if x.is_empty() || x[0].is_empty() {
        return Err(Error::EmptyInput);
    }
    let t_len = x[0].len();
    if x.iter().any(|r| r.len() != t_len) {
        return Err(Error::RaggedMatrix);
    }

    let scales: Vec<f64> = match level {
        SaturationLevel::KSigma(k) => x
            .iter()
            .map(|row| {
                let n = row.len() as f64;
                let mean = row.iter().sum::<f64>() / n;
                let var = row.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
                k * var.sqrt()
            })
            .collect(),
        SaturationLevel::Absolute(a) => vec![*a; x.len()],
        SaturationLevel::PerChannel(levels) => {
            if levels.len() != x.len() {
                return Err(Error::ChannelCountMismatch {
                    expected: x.len(),
                    got: levels.len(),
                });
            }
            levels.clone()
        }
    };

    Ok(x.iter()
        .zip(&scales)
        .map(|(row, &a)| row.iter().map(|&v| a * (v / a).tanh()).collect())
        .collect())
}
