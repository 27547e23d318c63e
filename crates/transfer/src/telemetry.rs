//! Derived per-frame read-outs and the scenario summary.

use hohmann_core::angle::rad_to_deg;
use hohmann_core::time::seconds_to_days;
use hohmann_core::vector;
use serde::Serialize;

use crate::simulation::{BodyId, Simulation};

/// Rocket relative to the inner body at one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Telemetry {
    pub sample_index: usize,
    pub time_s: f64,
    /// `atan2(dy, dx)` of the rocket-minus-inner displacement, degrees in (-180, 180].
    pub bearing_deg: f64,
    pub distance_m: f64,
}

impl Telemetry {
    pub fn time_days(&self) -> f64 {
        seconds_to_days(self.time_s)
    }
}

/// Headline numbers for a sampled scenario.
#[derive(Debug, Clone, Serialize)]
pub struct TransferSummary {
    pub inner_body: String,
    pub outer_body: String,
    pub inner_period_s: f64,
    pub inner_period_days: f64,
    pub outer_period_s: f64,
    pub outer_period_days: f64,
    pub semi_major_axis_m: f64,
    pub samples: usize,
    pub intercept_index: usize,
    pub intercept_time_s: f64,
    pub intercept_time_days: f64,
    pub closest_approach_m: f64,
    pub phase_offset_deg: f64,
    pub ideal_phase_angle_deg: f64,
    pub hohmann_dv1_m_s: f64,
    pub hohmann_dv2_m_s: f64,
    pub hohmann_dv_total_m_s: f64,
    pub hohmann_tof_days: f64,
}

impl Simulation {
    /// Bearing and distance of the rocket as seen from the inner body.
    pub fn telemetry(&self, sample_index: usize) -> Option<Telemetry> {
        let rocket = self.position(BodyId::Rocket, sample_index)?;
        self.relative_to_inner(rocket, sample_index)
    }

    /// Like [`Simulation::telemetry`], but follows the uncut transfer arc past
    /// the intercept instead of the captured rocket.
    pub fn arc_telemetry(&self, sample_index: usize) -> Option<Telemetry> {
        let point = *self.transfer_arc().get(sample_index)?;
        self.relative_to_inner(point, sample_index)
    }

    /// Arc telemetry for every sample, in grid order.
    pub fn arc_telemetry_series(&self) -> Vec<Telemetry> {
        (0..self.sample_count())
            .filter_map(|i| self.arc_telemetry(i))
            .collect()
    }

    fn relative_to_inner(&self, point: [f64; 2], sample_index: usize) -> Option<Telemetry> {
        let inner = self.position(BodyId::Inner, sample_index)?;
        let time_s = *self.grid.samples().get(sample_index)?;
        let delta = vector::sub(&point, &inner);
        Some(Telemetry {
            sample_index,
            time_s,
            bearing_deg: rad_to_deg(vector::bearing(&delta)),
            distance_m: vector::norm(&delta),
        })
    }

    /// Telemetry for every sample, in grid order.
    pub fn telemetry_series(&self) -> Vec<Telemetry> {
        (0..self.sample_count())
            .filter_map(|i| self.telemetry(i))
            .collect()
    }

    pub fn summary(&self) -> TransferSummary {
        let intercept_time_s = self.grid.samples()[self.intercept_index];
        TransferSummary {
            inner_body: self.config.inner.name.clone(),
            outer_body: self.config.outer.name.clone(),
            inner_period_s: self.inner.period_s(),
            inner_period_days: seconds_to_days(self.inner.period_s()),
            outer_period_s: self.outer.period_s(),
            outer_period_days: seconds_to_days(self.outer.period_s()),
            semi_major_axis_m: 0.5 * (self.inner.radius_m() + self.outer.radius_m()),
            samples: self.sample_count(),
            intercept_index: self.intercept_index,
            intercept_time_s,
            intercept_time_days: seconds_to_days(intercept_time_s),
            closest_approach_m: self.closest_approach_m(),
            phase_offset_deg: self.config.phase_offset_deg,
            ideal_phase_angle_deg: rad_to_deg(self.ideal_phase_rad),
            hohmann_dv1_m_s: self.hohmann.dv1_m_s,
            hohmann_dv2_m_s: self.hohmann.dv2_m_s,
            hohmann_dv_total_m_s: self.hohmann.dv_total_m_s,
            hohmann_tof_days: seconds_to_days(self.hohmann.tof_seconds),
        }
    }
}
