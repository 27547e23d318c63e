//! Impulsive transfer utilities: classical Hohmann estimates in the coplanar, circular limit.

pub mod transfers;

pub use transfers::{HohmannResult, ImpulsiveError, hohmann, ideal_phase_angle_rad};
