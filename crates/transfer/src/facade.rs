//! Re-exported APIs for consumers of the transfer crate.

pub use crate::simulation::{BodyId, Simulation, SimulationError};
pub use crate::telemetry::{Telemetry, TransferSummary};
pub use hohmann_config::{ConfigError, SimulationConfig};
pub use hohmann_orbits::KinematicsError;
