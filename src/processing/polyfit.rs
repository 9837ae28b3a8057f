//! Least-squares polynomial fitting of uniformly sampled segments.

use crate::error::{Error, Result};

/// Fit a polynomial of the given order to `x` sampled at `fs`, in the
/// time variable `t_i = i / fs`. Returns the fitted signal and the
/// coefficients in ascending powers.
///
/// The Vandermonde normal equations are solved with partial-pivot
/// Gaussian elimination; an order too high for the segment length (or
/// a numerically collapsed system) reports [`Error::SingularSystem`].
pub fn polynomial_fit(x: &[f64], fs: f64, order: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.is_empty() {
        return Err(Error::EmptySignal);
    }
    if fs <= 0.0 {
        return Err(Error::NonPositiveSampleRate(fs));
    }

    let n = order + 1;
    let t: Vec<f64> = (0..x.len()).map(|i| i as f64 / fs).collect();

    // Power sums m[p] = sum t^p and right-hand side r[i] = sum t^i x.
    let mut moments = vec![0.0; 2 * n - 1];
    let mut rhs = vec![0.0; n];
    for (&ti, &xi) in t.iter().zip(x) {
        let mut pow = 1.0;
        for p in 0..2 * n - 1 {
            moments[p] += pow;
            if p < n {
                rhs[p] += pow * xi;
            }
            pow *= ti;
        }
    }

    let mut gram = vec![vec![0.0; n]; n];
    for (i, row) in gram.iter_mut().enumerate() {
        for (j, g) in row.iter_mut().enumerate() {
            *g = moments[i + j];
        }
    }

    let coeffs = solve(gram, rhs)?;
    let fitted = t
        .iter()
        .map(|&ti| coeffs.iter().rev().fold(0.0, |acc, &c| acc * ti + c))
        .collect();
    Ok((fitted, coeffs))
}

/// Gaussian elimination with partial pivoting.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot_row][col].abs() < 1e-12 {
            return Err(Error::SingularSystem);
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut sol = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in row + 1..n {
            acc -= a[row][k] * sol[k];
        }
        sol[row] = acc / a[row][row];
    }
    Ok(sol)
}
