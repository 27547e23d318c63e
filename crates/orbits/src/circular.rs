//! Circular orbits under the two-body approximation.

use std::f64::consts::TAU;

use hohmann_core::constants::{G, M_SUN};
use hohmann_core::vector::Vector2;

use crate::KinematicsError;

/// Gravitational constant and central mass of the system being modelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialConstants {
    pub gravitational_constant: f64,
    pub central_mass_kg: f64,
}

impl Default for CelestialConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            central_mass_kg: M_SUN,
        }
    }
}

impl CelestialConstants {
    /// Standard gravitational parameter μ = G·M (m³/s²).
    #[inline]
    pub fn mu(&self) -> f64 {
        self.gravitational_constant * self.central_mass_kg
    }

    /// Kepler's third law, T = 2π√(r³/μ).
    pub fn orbital_period(&self, radius_m: f64) -> Result<f64, KinematicsError> {
        let valid = radius_m.is_finite()
            && radius_m > 0.0
            && self.central_mass_kg.is_finite()
            && self.central_mass_kg > 0.0
            && self.gravitational_constant > 0.0;
        if !valid {
            return Err(KinematicsError::InvalidOrbit {
                radius_m,
                central_mass_kg: self.central_mass_kg,
            });
        }
        Ok(TAU * (radius_m.powi(3) / self.mu()).sqrt())
    }
}

/// Orbital period of a circular orbit of `radius_m` around `central_mass_kg`,
/// using the standard gravitational constant.
pub fn compute_period(radius_m: f64, central_mass_kg: f64) -> Result<f64, KinematicsError> {
    CelestialConstants {
        gravitational_constant: G,
        central_mass_kg,
    }
    .orbital_period(radius_m)
}

/// Evenly spaced sample instants, both endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// `samples` instants spanning `[0, end_s]`. A single sample is placed at 0.
    ///
    /// A negative or non-finite `end_s` would break monotonicity and is rejected.
    pub fn linspace(end_s: f64, samples: usize) -> Result<Self, KinematicsError> {
        if !end_s.is_finite() || end_s < 0.0 {
            return Err(KinematicsError::InvalidTimeSpan { end_s });
        }
        let samples = match samples {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let step = end_s / (n - 1) as f64;
                (0..n).map(|i| i as f64 * step).collect()
            }
        };
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Final instant of the grid, or zero when empty.
    pub fn end_s(&self) -> f64 {
        self.samples.last().copied().unwrap_or(0.0)
    }
}

/// Circular orbit with its derived period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDescriptor {
    radius_m: f64,
    phase_offset_rad: f64,
    period_s: f64,
}

impl OrbitDescriptor {
    pub fn new(
        radius_m: f64,
        phase_offset_rad: f64,
        constants: &CelestialConstants,
    ) -> Result<Self, KinematicsError> {
        let period_s = constants.orbital_period(radius_m)?;
        Ok(Self {
            radius_m,
            phase_offset_rad,
            period_s,
        })
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn phase_offset_rad(&self) -> f64 {
        self.phase_offset_rad
    }

    pub fn period_s(&self) -> f64 {
        self.period_s
    }

    /// Mean motion 2π/T (rad/s).
    pub fn angular_rate(&self) -> f64 {
        TAU / self.period_s
    }

    pub fn positions(&self, grid: &TimeGrid) -> Vec<Vector2> {
        compute_circular_positions(self.radius_m, self.period_s, self.phase_offset_rad, grid)
    }
}

/// Sample `radius·(cos θ, sin θ)` with `θ(t) = 2π·t/period + phase` on every grid instant.
pub fn compute_circular_positions(
    radius_m: f64,
    period_s: f64,
    phase_offset_rad: f64,
    grid: &TimeGrid,
) -> Vec<Vector2> {
    let rate = TAU / period_s;
    grid.samples()
        .iter()
        .map(|&t| {
            let theta = rate * t + phase_offset_rad;
            [radius_m * theta.cos(), radius_m * theta.sin()]
        })
        .collect()
}
