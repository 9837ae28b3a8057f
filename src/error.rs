//! Crate-wide error taxonomy.
//!
//! Structural parameter problems are rejected eagerly, before any
//! synthesis or filtering runs. Numeric degeneracies (zero kernel
//! widths, zero-variance ensemble rows) are deliberately not in this
//! list: they propagate as IEEE non-finite values instead of erroring.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("kernel arrays must share one length (alpha: {alpha}, width: {width}, center: {center})")]
    KernelLengthMismatch {
        alpha: usize,
        width: usize,
        center: usize,
    },

    #[error("flat kernel vector length {0} is not a multiple of 3")]
    FlatParamLength(usize),

    #[error("signal must contain at least one sample")]
    EmptySignal,

    #[error("input matrix must contain at least one row and one column")]
    EmptyInput,

    #[error("matrix rows must all have the same length")]
    RaggedMatrix,

    #[error("sample rate must be positive, got {0}")]
    NonPositiveSampleRate(f64),

    #[error("heart rate must be positive, got {0}")]
    NonPositiveHeartRate(f64),

    #[error("percentile bounds must satisfy 0 <= lower < upper <= 100, got [{lower}, {upper}]")]
    PercentileRange { lower: f64, upper: f64 },

    #[error("cutoff must lie in (0, {nyquist}) Hz, got {fc}")]
    CutoffOutOfRange { fc: f64, nyquist: f64 },

    #[error("expected {expected} per-channel values, got {got}")]
    ChannelCountMismatch { expected: usize, got: usize },

    #[error("normal equations are singular; reduce the polynomial order")]
    SingularSystem,
}
