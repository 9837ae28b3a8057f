pub mod kernels;
pub mod mixture;
pub mod phase;
pub mod shifted;
pub mod stochastic;
