//! Core units, constants, and shared primitives for the Hohmann transfer simulator.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.674_30e-11;
    /// Mass of the Sun (kg).
    pub const M_SUN: f64 = 1.989e30;
    /// Mean radius of Earth's heliocentric orbit (m).
    pub const EARTH_ORBIT_RADIUS_M: f64 = 1.496e11;
    /// Mean radius of Mars' heliocentric orbit (m).
    pub const MARS_ORBIT_RADIUS_M: f64 = 2.279e11;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}

/// Angle conversions.
pub mod angle {
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg.to_radians()
    }

    #[inline]
    pub fn rad_to_deg(rad: f64) -> f64 {
        rad.to_degrees()
    }
}

/// Minimal planar vector helpers to avoid ad-hoc `[f64; 2]` math everywhere.
pub mod vector {
    /// A point or displacement in the orbital plane, metres.
    pub type Vector2 = [f64; 2];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        v[0].hypot(v[1])
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] + b[0], a[1] + b[1]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(a: &Vector2, b: &Vector2) -> f64 {
        norm(&sub(a, b))
    }

    /// Polar angle of a vector in radians, measured from +x.
    #[inline]
    pub fn bearing(v: &Vector2) -> f64 {
        v[1].atan2(v[0])
    }
}
