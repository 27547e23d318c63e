//! Analytic estimators for impulsive transfers in the coplanar, circular limit.
//!
//! Provides the Hohmann transfer burns and time of flight for two-body
//! Keplerian motion with a specified central μ, plus the departure phase
//! angle that makes the transfer arrive on top of the target.

use std::f64::consts::PI;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ImpulsiveError {
    #[error("transfer inputs must be positive and finite (r1={r1_m}, r2={r2_m}, mu={mu_m3_s2})")]
    InvalidInput { r1_m: f64, r2_m: f64, mu_m3_s2: f64 },
}

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannResult {
    pub dv1_m_s: f64,      // signed: negative for inward (retro) burn
    pub dv2_m_s: f64,      // signed: negative for retro capture when arriving inward
    pub dv_total_m_s: f64, // |dv1| + |dv2|
    pub tof_seconds: f64,
}

fn check(r1_m: f64, r2_m: f64, mu_m3_s2: f64) -> Result<(), ImpulsiveError> {
    let ok = [r1_m, r2_m, mu_m3_s2]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
    if ok {
        Ok(())
    } else {
        Err(ImpulsiveError::InvalidInput {
            r1_m,
            r2_m,
            mu_m3_s2,
        })
    }
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1_m`: initial circular orbit radius (m)
/// - `r2_m`: target circular orbit radius (m)
/// - `mu_m3_s2`: gravitational parameter of the central body (m^3/s^2)
pub fn hohmann(r1_m: f64, r2_m: f64, mu_m3_s2: f64) -> Result<HohmannResult, ImpulsiveError> {
    check(r1_m, r2_m, mu_m3_s2)?;

    let v1 = (mu_m3_s2 / r1_m).sqrt();
    let v2 = (mu_m3_s2 / r2_m).sqrt();
    let a_t = 0.5 * (r1_m + r2_m);
    let tof = PI * (a_t.powi(3) / mu_m3_s2).sqrt();

    // Transfer periapsis speed (at r1) and apoapsis speed (at r2)
    let v_t1 = (mu_m3_s2 * (2.0 / r1_m - 1.0 / a_t)).sqrt();
    let v_t2 = (mu_m3_s2 * (2.0 / r2_m - 1.0 / a_t)).sqrt();

    let dv1 = v_t1 - v1;
    let dv2 = v2 - v_t2;

    Ok(HohmannResult {
        dv1_m_s: dv1,
        dv2_m_s: dv2,
        dv_total_m_s: dv1.abs() + dv2.abs(),
        tof_seconds: tof,
    })
}

/// Angle (rad) by which the target must lead the origin body at departure.
///
/// The target sweeps `π·√(((r1+r2)/(2·r2))³)` during the half-ellipse flight,
/// so it has to start `π` minus that ahead. Independent of μ.
pub fn ideal_phase_angle_rad(r1_m: f64, r2_m: f64) -> Result<f64, ImpulsiveError> {
    check(r1_m, r2_m, 1.0)?;
    let ratio = (r1_m + r2_m) / (2.0 * r2_m);
    Ok(PI * (1.0 - ratio.powi(3).sqrt()))
}
