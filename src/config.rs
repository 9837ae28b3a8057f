use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::core::kernels::KernelSet;
use crate::core::stochastic::StochasticModel;
use crate::error::Result;

/// Kernel morphology preset: one Gaussian bump per wave, P through T.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphologyConfig {
    #[serde(default = "MorphologyConfig::default_alpha")]
    pub alpha: Vec<f64>,
    #[serde(default = "MorphologyConfig::default_width")]
    pub width: Vec<f64>,
    #[serde(default = "MorphologyConfig::default_center")]
    pub center: Vec<f64>,
}

impl MorphologyConfig {
    // Representative adult lead-II morphology, amplitudes in mV.
    fn default_alpha() -> Vec<f64> {
        vec![0.15, -0.2, 1.0, -0.25, 0.35]
    }
    fn default_width() -> Vec<f64> {
        vec![0.25, 0.1, 0.1, 0.1, 0.4]
    }
    fn default_center() -> Vec<f64> {
        let pi = std::f64::consts::PI;
        vec![-pi / 3.0, -pi / 12.0, 0.0, pi / 12.0, pi / 2.0]
    }
}

impl Default for MorphologyConfig {
    fn default() -> Self {
        Self {
            alpha: Self::default_alpha(),
            width: Self::default_width(),
            center: Self::default_center(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhythmConfig {
    #[serde(default = "RhythmConfig::default_sample_rate_hz")]
    pub sample_rate_hz: f64,
    /// Mean heart rate in Hz (1.2 Hz = 72 BPM).
    #[serde(default = "RhythmConfig::default_heart_rate_hz")]
    pub heart_rate_hz: f64,
    #[serde(default = "RhythmConfig::default_initial_phase")]
    pub initial_phase: f64,
}

impl RhythmConfig {
    fn default_sample_rate_hz() -> f64 {
        500.0
    }
    fn default_heart_rate_hz() -> f64 {
        1.2
    }
    fn default_initial_phase() -> f64 {
        -std::f64::consts::PI
    }
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: Self::default_sample_rate_hz(),
            heart_rate_hz: Self::default_heart_rate_hz(),
            initial_phase: Self::default_initial_phase(),
        }
    }
}

/// Beat-to-beat deviation fractions (uniform half-ranges).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviationConfig {
    #[serde(default = "DeviationConfig::default_rate")]
    pub rate: f64,
    #[serde(default = "DeviationConfig::default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "DeviationConfig::default_width")]
    pub width: f64,
    #[serde(default = "DeviationConfig::default_center")]
    pub center: f64,
}

impl DeviationConfig {
    fn default_rate() -> f64 {
        0.1
    }
    fn default_amplitude() -> f64 {
        0.1
    }
    fn default_width() -> f64 {
        0.05
    }
    fn default_center() -> f64 {
        0.05
    }
}

impl Default for DeviationConfig {
    fn default() -> Self {
        Self {
            rate: Self::default_rate(),
            amplitude: Self::default_amplitude(),
            width: Self::default_width(),
            center: Self::default_center(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SynthConfig {
    #[serde(default)]
    pub morphology: MorphologyConfig,
    #[serde(default)]
    pub rhythm: RhythmConfig,
    #[serde(default)]
    pub deviation: DeviationConfig,
}

impl SynthConfig {
    /// Read a TOML preset if the file exists and parses; fall back to
    /// the built-in defaults otherwise. Never errors: a bad preset is
    /// a warning, not a failure.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            return Self::default();
        }
        match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("failed to parse preset {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                warn!("failed to read preset {path}: {err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn kernels(&self) -> Result<KernelSet> {
        KernelSet::new(
            self.morphology.alpha.clone(),
            self.morphology.width.clone(),
            self.morphology.center.clone(),
        )
    }

    pub fn model(&self) -> Result<StochasticModel> {
        Ok(StochasticModel {
            kernels: self.kernels()?,
            sample_rate_hz: self.rhythm.sample_rate_hz,
            heart_rate_hz: self.rhythm.heart_rate_hz,
            initial_phase: self.rhythm.initial_phase,
            rate_deviation: self.deviation.rate,
            amplitude_deviation: self.deviation.amplitude,
            width_deviation: self.deviation.width,
            center_deviation: self.deviation.center,
        })
    }
}
