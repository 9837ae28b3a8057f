//! Gaussian kernel parameter sets for phase-domain ECG morphology.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered set of Gaussian kernels in cardiac phase space.
///
/// Kernel `j` contributes `alpha[j] * exp(-d^2 / (2 * width[j]^2))` to
/// the waveform, where `d` is the wrapped phase distance to
/// `center[j]`. The three arrays are co-indexed and always of equal
/// length; one kernel per morphological feature (P, Q, R, S, T).
///
/// Widths are not validated here. A zero width divides by zero in the
/// kernel and the non-finite result propagates to the output unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSet {
    /// Signed amplitudes.
    pub alpha: Vec<f64>,
    /// Angular widths in radians.
    pub width: Vec<f64>,
    /// Center phases in radians. Stored as given; canonicalization into
    /// the principal interval happens only through wrap arithmetic.
    pub center: Vec<f64>,
}

impl KernelSet {
    pub fn new(alpha: Vec<f64>, width: Vec<f64>, center: Vec<f64>) -> Result<Self> {
        if alpha.len() != width.len() || alpha.len() != center.len() {
            return Err(Error::KernelLengthMismatch {
                alpha: alpha.len(),
                width: width.len(),
                center: center.len(),
            });
        }
        Ok(Self {
            alpha,
            width,
            center,
        })
    }

    /// Split a flat `[alpha.., width.., center..]` vector of length `3K`.
    pub fn from_flat(params: &[f64]) -> Result<Self> {
        if params.len() % 3 != 0 {
            return Err(Error::FlatParamLength(params.len()));
        }
        let k = params.len() / 3;
        Ok(Self {
            alpha: params[..k].to_vec(),
            width: params[k..2 * k].to_vec(),
            center: params[2 * k..].to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// Draw a perturbed working copy for the next beat.
    ///
    /// Each deviation is a fractional half-range: the realized value is
    /// `nominal * (1 + (U(0,1) - 0.5) * dev)`, drawn independently per
    /// kernel. Width factors are floored at zero; amplitudes and
    /// centers are not. Draw order (all amplitudes, all centers, all
    /// widths) is part of the seeded-replay contract.
    pub fn perturbed<R: Rng + ?Sized>(
        &self,
        amplitude_dev: f64,
        center_dev: f64,
        width_dev: f64,
        rng: &mut R,
    ) -> KernelSet {
        let alpha = self
            .alpha
            .iter()
            .map(|&a| a * (1.0 + (rng.random::<f64>() - 0.5) * amplitude_dev))
            .collect();
        let center = self
            .center
            .iter()
            .map(|&c| c * (1.0 + (rng.random::<f64>() - 0.5) * center_dev))
            .collect();
        let width = self
            .width
            .iter()
            .map(|&w| w * (1.0 + (rng.random::<f64>() - 0.5) * width_dev).max(0.0))
            .collect();
        KernelSet {
            alpha,
            width,
            center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_rejects_mismatched_lengths() {
        let err = KernelSet::new(vec![1.0, 2.0], vec![0.1], vec![0.0, 0.5]).unwrap_err();
        assert_eq!(
            err,
            Error::KernelLengthMismatch {
                alpha: 2,
                width: 1,
                center: 2
            }
        );
    }

    #[test]
    fn from_flat_splits_in_thirds() {
        let ks = KernelSet::from_flat(&[1.0, 0.8, 0.2, 0.3, 0.0, 1.5]).unwrap();
        assert_eq!(ks.alpha, vec![1.0, 0.8]);
        assert_eq!(ks.width, vec![0.2, 0.3]);
        assert_eq!(ks.center, vec![0.0, 1.5]);
    }

    #[test]
    fn from_flat_rejects_non_multiple_of_three() {
        assert_eq!(
            KernelSet::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap_err(),
            Error::FlatParamLength(4)
        );
    }

    #[test]
    fn empty_flat_vector_is_an_empty_set() {
        let ks = KernelSet::from_flat(&[]).unwrap();
        assert!(ks.is_empty());
        assert_eq!(ks.len(), 0);
    }

    #[test]
    fn zero_deviation_perturbation_is_exact_identity() {
        let ks = KernelSet::new(vec![1.0, -0.5], vec![0.1, 0.2], vec![0.0, 1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let drawn = ks.perturbed(0.0, 0.0, 0.0, &mut rng);
        assert_eq!(drawn, ks);
    }

    #[test]
    fn width_factor_is_floored_at_zero() {
        // A deviation fraction this large lets the factor go negative;
        // the clamp must keep every realized width non-negative.
        let ks = KernelSet::new(vec![1.0; 4], vec![0.1; 4], vec![0.0; 4]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let drawn = ks.perturbed(0.0, 0.0, 6.0, &mut rng);
            assert!(drawn.width.iter().all(|&w| w >= 0.0), "{:?}", drawn.width);
        }
    }

    #[test]
    fn perturbation_stays_inside_half_range() {
        let ks = KernelSet::new(vec![2.0], vec![0.1], vec![1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let drawn = ks.perturbed(0.2, 0.2, 0.2, &mut rng);
            assert!(drawn.alpha[0] >= 2.0 * 0.9 && drawn.alpha[0] <= 2.0 * 1.1);
            assert!(drawn.center[0] >= 0.9 && drawn.center[0] <= 1.1);
            assert!(drawn.width[0] >= 0.09 && drawn.width[0] <= 0.11);
        }
    }
}
