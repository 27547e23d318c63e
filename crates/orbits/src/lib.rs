//! Orbital kinematics engine: circular orbits, the idealized transfer arc,
//! and the closest-approach search that splices the two together.
//!
//! Everything here is closed-form and pure. Position series are plain
//! `Vec<[f64; 2]>` sampled on a shared [`TimeGrid`].

pub mod circular;
pub mod intercept;

pub use circular::{
    CelestialConstants, OrbitDescriptor, TimeGrid, compute_circular_positions, compute_period,
};
pub use intercept::{
    compose_trajectory, compute_transfer_arc, find_closest_approach, separation_distances,
    translate,
};

use thiserror::Error;

/// Errors raised while building orbits or comparing position series.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KinematicsError {
    #[error("invalid orbit: radius {radius_m} m around mass {central_mass_kg} kg")]
    InvalidOrbit { radius_m: f64, central_mass_kg: f64 },
    #[error("time grid span must be finite and non-negative (got {end_s} s)")]
    InvalidTimeSpan { end_s: f64 },
    #[error("position sequence is empty")]
    EmptySequence,
    #[error("position sequences differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}
