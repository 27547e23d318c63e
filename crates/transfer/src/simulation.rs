//! Scenario → orbits → series → intercept, computed once and then read-only.

use std::fmt;

use hohmann_config::{ConfigError, SimulationConfig};
use hohmann_core::angle::deg_to_rad;
use hohmann_core::time::seconds_to_days;
use hohmann_core::vector::{self, Vector2};
use hohmann_impulsive::{HohmannResult, ImpulsiveError};
use hohmann_orbits::{
    CelestialConstants, KinematicsError, OrbitDescriptor, TimeGrid, compose_trajectory,
    compute_transfer_arc, find_closest_approach, translate,
};
use tracing::{debug, info};

/// Bodies whose positions are tracked per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    /// Origin body; the transfer departs from its initial position.
    Inner,
    /// Destination body.
    Outer,
    /// Transfer arc until the intercept, then locked to the destination.
    Rocket,
}

impl BodyId {
    pub const ALL: [BodyId; 3] = [BodyId::Inner, BodyId::Outer, BodyId::Rocket];
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyId::Inner => "inner",
            BodyId::Outer => "outer",
            BodyId::Rocket => "rocket",
        };
        f.write_str(name)
    }
}

/// Top-level simulation error.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),
    #[error("kinematics failed: {0}")]
    Kinematics(#[from] KinematicsError),
    #[error("transfer estimate failed: {0}")]
    Impulsive(#[from] ImpulsiveError),
}

/// Fully sampled transfer scenario.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) config: SimulationConfig,
    pub(crate) constants: CelestialConstants,
    pub(crate) inner: OrbitDescriptor,
    pub(crate) outer: OrbitDescriptor,
    pub(crate) grid: TimeGrid,
    inner_positions: Vec<Vector2>,
    outer_positions: Vec<Vector2>,
    transfer_arc: Vec<Vector2>,
    rocket_positions: Vec<Vector2>,
    pub(crate) intercept_index: usize,
    pub(crate) hohmann: HohmannResult,
    pub(crate) ideal_phase_rad: f64,
}

impl Simulation {
    /// Validate the scenario and precompute every series.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let constants = CelestialConstants {
            gravitational_constant: config.gravitational_constant,
            central_mass_kg: config.central_mass_kg,
        };
        let inner = OrbitDescriptor::new(config.inner.orbit_radius_m, 0.0, &constants)?;
        let outer = OrbitDescriptor::new(
            config.outer.orbit_radius_m,
            deg_to_rad(config.phase_offset_deg),
            &constants,
        )?;
        info!(
            inner = %config.inner.name,
            outer = %config.outer.name,
            inner_period_days = seconds_to_days(inner.period_s()),
            outer_period_days = seconds_to_days(outer.period_s()),
            "derived orbital periods"
        );

        let grid = TimeGrid::linspace(outer.period_s(), config.samples)?;
        let inner_positions = inner.positions(&grid);
        let outer_positions = outer.positions(&grid);

        let departure = inner_positions
            .first()
            .copied()
            .ok_or(KinematicsError::EmptySequence)?;
        let arc = compute_transfer_arc(inner.radius_m(), outer.radius_m(), &constants, &grid);
        let transfer_arc = translate(&arc, departure);

        let intercept_index = find_closest_approach(&transfer_arc, &outer_positions)?;
        let rocket_positions = compose_trajectory(&transfer_arc, &outer_positions, intercept_index)?;
        let miss_m = vector::distance(
            &transfer_arc[intercept_index],
            &outer_positions[intercept_index],
        );
        info!(
            intercept_index,
            samples = grid.len(),
            intercept_day = seconds_to_days(grid.samples()[intercept_index]),
            closest_approach_m = miss_m,
            "located closest approach"
        );

        let hohmann = hohmann_impulsive::hohmann(inner.radius_m(), outer.radius_m(), constants.mu())?;
        let ideal_phase_rad =
            hohmann_impulsive::ideal_phase_angle_rad(inner.radius_m(), outer.radius_m())?;
        debug!(
            ideal_phase_deg = ideal_phase_rad.to_degrees(),
            configured_phase_deg = config.phase_offset_deg,
            "phase angle comparison"
        );

        Ok(Self {
            config: config.clone(),
            constants,
            inner,
            outer,
            grid,
            inner_positions,
            outer_positions,
            transfer_arc,
            rocket_positions,
            intercept_index,
            hohmann,
            ideal_phase_rad,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn constants(&self) -> &CelestialConstants {
        &self.constants
    }

    pub fn inner_orbit(&self) -> &OrbitDescriptor {
        &self.inner
    }

    pub fn outer_orbit(&self) -> &OrbitDescriptor {
        &self.outer
    }

    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Number of samples, i.e. animation frames.
    pub fn sample_count(&self) -> usize {
        self.grid.len()
    }

    pub fn intercept_index(&self) -> usize {
        self.intercept_index
    }

    /// Whether the rocket is still on the transfer arc at `sample_index`.
    pub fn in_transfer(&self, sample_index: usize) -> bool {
        sample_index < self.intercept_index
    }

    /// Full position series for a body.
    pub fn series(&self, body: BodyId) -> &[Vector2] {
        match body {
            BodyId::Inner => &self.inner_positions,
            BodyId::Outer => &self.outer_positions,
            BodyId::Rocket => &self.rocket_positions,
        }
    }

    /// Position of `body` at `sample_index`, or `None` past the end of the grid.
    pub fn position(&self, body: BodyId, sample_index: usize) -> Option<Vector2> {
        self.series(body).get(sample_index).copied()
    }

    /// The uncut transfer arc in the shared heliocentric frame.
    pub fn transfer_arc(&self) -> &[Vector2] {
        &self.transfer_arc
    }

    /// Separation between the transfer arc and the destination at the intercept.
    pub fn closest_approach_m(&self) -> f64 {
        vector::distance(
            &self.transfer_arc[self.intercept_index],
            &self.outer_positions[self.intercept_index],
        )
    }
}
