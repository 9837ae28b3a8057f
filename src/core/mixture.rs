//! Batch Gaussian-mixture evaluation over a cardiac phase trajectory.

use crate::core::kernels::KernelSet;
use crate::core::phase::angle_diff_pm_pi;

/// Evaluate the kernel mixture at every sample of `phase`.
///
/// Each output sample is the sum over kernels of
/// `alpha_j * exp(-d_j^2 / (2 * width_j^2))` with `d_j` the wrapped
/// phase distance to `center_j`. Deterministic, no side effects; the
/// output has exactly the shape of `phase`, and an empty kernel set
/// yields all zeros.
pub fn mixture_series(phase: &[f64], kernels: &KernelSet) -> Vec<f64> {
    let mut x = vec![0.0; phase.len()];
    for j in 0..kernels.len() {
        let a = kernels.alpha[j];
        let c = kernels.center[j];
        let denom = 2.0 * kernels.width[j] * kernels.width[j];
        for (xi, &p) in x.iter_mut().zip(phase) {
            let d = angle_diff_pm_pi(p, c);
            *xi += a * (-d * d / denom).exp();
        }
    }
    x
}
