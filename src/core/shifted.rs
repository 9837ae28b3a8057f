//! Phase-shifted synthesis: the mixture evaluated against a shifted,
//! wrapped trajectory, with the shifted phase handed back alongside the
//! signal for downstream phase-domain analysis.

use crate::core::kernels::KernelSet;
use crate::core::mixture::mixture_series;
use crate::core::phase::wrap_pm_pi;

/// Returns `(signal, shifted_phase)`.
///
/// The shift applies to the trajectory, never to the kernel centers,
/// and the shifted phase is wrapped into the principal interval before
/// evaluation. Stateless and deterministic under well-formed inputs.
pub fn shifted_series(phase: &[f64], theta0: f64, kernels: &KernelSet) -> (Vec<f64>, Vec<f64>) {
    let shifted: Vec<f64> = phase.iter().map(|&p| wrap_pm_pi(p + theta0)).collect();
    let signal = mixture_series(&shifted, kernels);
    (signal, shifted)
}
