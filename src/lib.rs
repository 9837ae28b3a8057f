//! Synthetic ECG generation from a dynamical cardiac phase model.
//!
//! Beat morphology is a sum of Gaussian kernels in phase space, one per
//! wave (P, Q, R, S, T). Three generators share that kernel: batch
//! evaluation over a caller-supplied phase trajectory, a phase-shifted
//! variant that also returns the shifted trajectory, and a stochastic
//! time-domain integrator that advances the phase/amplitude ODE with
//! explicit Euler steps and redraws the morphology at every beat
//! boundary. `processing` holds the ensemble post-processing used on
//! generated beats: robust averaging, trimming, outlier replacement,
//! saturation, polarity detection, warping, and polynomial detrending.

pub mod config;
pub mod core;
pub mod error;
pub mod processing;

pub use crate::core::kernels::KernelSet;
pub use crate::core::mixture::mixture_series;
pub use crate::core::shifted::shifted_series;
pub use crate::core::stochastic::StochasticModel;
pub use crate::error::{Error, Result};
