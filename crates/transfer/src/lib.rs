//! Transfer simulation façade: builds every series once from a scenario and
//! answers per-frame position and telemetry queries.

pub mod simulation;
pub mod telemetry;

pub use facade::*;
pub use hohmann_impulsive as impulsive;
pub use hohmann_orbits as orbits;

mod facade;
