//! Post-processing for generated beat ensembles: trimming, outlier
//! replacement, robust averaging, saturation, channel statistics,
//! polarity detection, warping, and polynomial detrending.
//!
//! Everything here is a stateless single-pass transform over a trace
//! (`&[f64]`) or a rows-of-channels matrix (`&[Vec<f64>]`); none of it
//! feeds back into the generators.

pub mod ensemble;
pub mod outlier;
pub mod polarity;
pub mod polyfit;
pub mod rank;
pub mod saturation;
pub mod stats;
pub mod trimmed_mean;
pub mod warp;
