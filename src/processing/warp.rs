//! Linear time-warping onto uniform grids of arbitrary length.

use crate::error::{Error, Result};

/// Resample `x` onto `len` uniformly spaced points spanning the same
/// interval, with linear interpolation. Endpoints are preserved
/// exactly; `len == x.len()` is an identity.
pub fn warp_vector(x: &[f64], len: usize) -> Result<Vec<f64>> {
    if x.is_empty() || len == 0 {
        return Err(Error::EmptySignal);
    }
    if x.len() == 1 {
        return Ok(vec![x[0]; len]);
    }
    if len == 1 {
        return Ok(vec![x[0]]);
    }

    let scale = (x.len() - 1) as f64 / (len - 1) as f64;
    Ok((0..len)
        .map(|i| {
            let pos = i as f64 * scale;
            let lo = (pos.floor() as usize).min(x.len() - 1);
            let hi = (lo + 1).min(x.len() - 1);
            let frac = pos - lo as f64;
            x[lo] + (x[hi] - x[lo]) * frac
        })
        .collect())
}

/// Warp a matrix to `rows x cols`: every row is warped to `cols`, then
/// every column to `rows` (separable bilinear interpolation).
pub fn warp_matrix(x: &[Vec<f64>], rows: usize, cols: usize) -> Result<Vec<Vec<f64>>> {
    if x.is_empty() || x[0].is_empty() || rows == 0 || cols == 0 {
        return Err(Error::EmptyInput);
    }
    let width = x[0].len();
    if x.iter().any(|r| r.len() != width) {
        return Err(Error::RaggedMatrix);
    }

    let row_warped: Vec<Vec<f64>> = x
        .iter()
        .map(|r| warp_vector(r, cols))
        .collect::<Result<_>>()?;

    let mut out = vec![vec![0.0; cols]; rows];
    for c in 0..cols {
        let col: Vec<f64> = row_warped.iter().map(|r| r[c]).collect();
        let warped = warp_vector(&col, rows)?;
        for (r, v) in warped.into_iter().enumerate() {
            out[r][c] = v;
        }
    }
    Ok(out)
}
