use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of [`crate::force::ConstantRadialPressure`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureConfig {
    /// Force per unit arclength; positive pushes cells outward.
    pub pressure: f64,
    /// Physical radius assumed for every node cell.
    pub radius: f64,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            pressure: 1.0,
            radius: 0.5,
        }
    }
}

impl PressureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pressure.is_finite() {
            return Err(ConfigError::NonFinitePressure(self.pressure));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// Time-stepping parameters for [`crate::simulation::Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub dt: f64,
    /// Drag coefficient of the overdamped update `x += dt * F / damping`.
    pub damping: f64,
    pub pressure: PressureConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            damping: 1.0,
            pressure: PressureConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        self.pressure.validate()
    }

    /// Parses and validates a RON document. Missing fields take their
    /// default values.
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = ron::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let cfg = Self::from_ron_str(&contents)?;
        log::info!("Loaded simulation config from {:?}", path);
        Ok(cfg)
    }
}
