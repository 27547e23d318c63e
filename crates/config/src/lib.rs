//! Configuration models and loaders for the Hohmann transfer simulator.
//!
//! Every field has a default matching the Earth→Mars scenario, so an empty
//! file (or no file at all) yields a runnable configuration.

use std::fs::File;
use std::path::Path;

use hohmann_core::constants::{EARTH_ORBIT_RADIUS_M, G, M_SUN, MARS_ORBIT_RADIUS_M};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = G;
pub const DEFAULT_CENTRAL_MASS_KG: f64 = M_SUN;
pub const DEFAULT_INNER_RADIUS_M: f64 = EARTH_ORBIT_RADIUS_M;
pub const DEFAULT_OUTER_RADIUS_M: f64 = MARS_ORBIT_RADIUS_M;
/// Lead of the outer body at departure. Tuned by hand so the arc meets Mars;
/// the textbook Hohmann value for these radii is about 44.33°.
pub const DEFAULT_PHASE_OFFSET_DEG: f64 = 44.75;
pub const DEFAULT_SAMPLES: usize = 1000;
/// Upper bound on `samples`; each sample holds several position series in memory.
pub const MAX_SAMPLES: usize = 10_000_000;

/// A body on a circular orbit around the central mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    pub orbit_radius_m: f64,
}

impl BodyConfig {
    pub fn default_inner() -> Self {
        Self {
            name: "Earth".to_string(),
            orbit_radius_m: DEFAULT_INNER_RADIUS_M,
        }
    }

    pub fn default_outer() -> Self {
        Self {
            name: "Mars".to_string(),
            orbit_radius_m: DEFAULT_OUTER_RADIUS_M,
        }
    }
}

/// Body table as written in a scenario file; absent keys fall back per body.
#[derive(Debug, Deserialize)]
struct PartialBody {
    name: Option<String>,
    orbit_radius_m: Option<f64>,
}

impl PartialBody {
    fn or(self, fallback: BodyConfig) -> BodyConfig {
        BodyConfig {
            name: self.name.unwrap_or(fallback.name),
            orbit_radius_m: self.orbit_radius_m.unwrap_or(fallback.orbit_radius_m),
        }
    }
}

fn inner_body<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BodyConfig, D::Error> {
    PartialBody::deserialize(deserializer).map(|body| body.or(BodyConfig::default_inner()))
}

fn outer_body<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BodyConfig, D::Error> {
    PartialBody::deserialize(deserializer).map(|body| body.or(BodyConfig::default_outer()))
}

/// Full scenario description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    pub central_mass_kg: f64,
    #[serde(deserialize_with = "inner_body")]
    pub inner: BodyConfig,
    #[serde(deserialize_with = "outer_body")]
    pub outer: BodyConfig,
    pub phase_offset_deg: f64,
    pub samples: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            central_mass_kg: DEFAULT_CENTRAL_MASS_KG,
            inner: BodyConfig::default_inner(),
            outer: BodyConfig::default_outer(),
            phase_offset_deg: DEFAULT_PHASE_OFFSET_DEG,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{name} must be positive and finite (got {value})"
        )))
    }
}

impl SimulationConfig {
    /// Reject configurations the kinematics cannot sample.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("gravitational_constant", self.gravitational_constant)?;
        positive("central_mass_kg", self.central_mass_kg)?;
        positive("inner.orbit_radius_m", self.inner.orbit_radius_m)?;
        positive("outer.orbit_radius_m", self.outer.orbit_radius_m)?;
        if !self.phase_offset_deg.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "phase_offset_deg must be finite (got {})",
                self.phase_offset_deg
            )));
        }
        if self.inner.orbit_radius_m >= self.outer.orbit_radius_m {
            return Err(ConfigError::Invalid(format!(
                "inner orbit ({} m) must lie inside outer orbit ({} m)",
                self.inner.orbit_radius_m, self.outer.orbit_radius_m
            )));
        }
        if self.samples == 0 {
            return Err(ConfigError::Invalid("samples must be at least 1".into()));
        }
        if self.samples > MAX_SAMPLES {
            return Err(ConfigError::Invalid(format!(
                "samples must not exceed {MAX_SAMPLES} (got {})",
                self.samples
            )));
        }
        Ok(())
    }
}

/// Load a scenario from a TOML (`.toml`) or YAML (anything else) file and validate it.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let config: SimulationConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.validate()?;
    Ok(config)
}
