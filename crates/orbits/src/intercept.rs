//! Transfer arc sampling and the closest-approach splice onto the target orbit.

use hohmann_core::vector::{self, Vector2};

use crate::KinematicsError;
use crate::circular::{CelestialConstants, TimeGrid};

/// Sample the idealized transfer arc relative to the inner body's initial position.
///
/// With `a = (r_inner + r_outer)/2` and `θ(t) = √(μ/a³)·t` each sample is
/// `a·(cos θ − 1, sin θ)`, so the arc starts at `(0, 0)`.
pub fn compute_transfer_arc(
    inner_radius_m: f64,
    outer_radius_m: f64,
    constants: &CelestialConstants,
    grid: &TimeGrid,
) -> Vec<Vector2> {
    let a = 0.5 * (inner_radius_m + outer_radius_m);
    let rate = (constants.mu() / a.powi(3)).sqrt();
    grid.samples()
        .iter()
        .map(|&t| {
            let theta = rate * t;
            [a * (theta.cos() - 1.0), a * theta.sin()]
        })
        .collect()
}

/// Shift every point by `offset`.
pub fn translate(positions: &[Vector2], offset: Vector2) -> Vec<Vector2> {
    positions.iter().map(|p| vector::add(p, &offset)).collect()
}

fn check_pair(a: &[Vector2], b: &[Vector2]) -> Result<(), KinematicsError> {
    if a.is_empty() || b.is_empty() {
        return Err(KinematicsError::EmptySequence);
    }
    if a.len() != b.len() {
        return Err(KinematicsError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Per-sample Euclidean distance between two equal-length series.
pub fn separation_distances(a: &[Vector2], b: &[Vector2]) -> Result<Vec<f64>, KinematicsError> {
    check_pair(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(p, q)| vector::distance(p, q))
        .collect())
}

/// Index of the smallest separation between `transfer` and `target`.
///
/// Ties resolve to the earliest index. NaN distances never win.
pub fn find_closest_approach(
    transfer: &[Vector2],
    target: &[Vector2],
) -> Result<usize, KinematicsError> {
    let distances = separation_distances(transfer, target)?;
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (idx, &d) in distances.iter().enumerate() {
        if d < best_distance {
            best = idx;
            best_distance = d;
        }
    }
    Ok(best)
}

/// Rocket path: the transfer arc before `intercept_index`, the target's orbit from it on.
pub fn compose_trajectory(
    transfer: &[Vector2],
    target: &[Vector2],
    intercept_index: usize,
) -> Result<Vec<Vector2>, KinematicsError> {
    check_pair(transfer, target)?;
    Ok(transfer
        .iter()
        .zip(target)
        .enumerate()
        .map(|(i, (t, g))| if i < intercept_index { *t } else { *g })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize, scale: f64) -> Vec<Vector2> {
        (0..n).map(|i| [i as f64 * scale, -(i as f64)]).collect()
    }

    #[test]
    fn transfer_arc_starts_at_origin() {
        let constants = CelestialConstants::default();
        let grid = TimeGrid::linspace(3.0e7, 10).unwrap();
        for (r1, r2) in [(1.0e11, 2.0e11), (5.0e10, 9.0e12), (1.496e11, 2.279e11)] {
            let arc = compute_transfer_arc(r1, r2, &constants, &grid);
            assert_eq!(arc.len(), grid.len());
            assert_eq!(arc[0], [0.0, 0.0]);
        }
    }

    #[test]
    fn transfer_arc_stays_on_its_circle() {
        let constants = CelestialConstants::default();
        let grid = TimeGrid::linspace(5.0e7, 64).unwrap();
        let (r1, r2) = (1.0e11, 3.0e11);
        let a = 0.5 * (r1 + r2);
        for p in compute_transfer_arc(r1, r2, &constants, &grid) {
            let r = (p[0] + a).hypot(p[1]);
            assert!(((r - a) / a).abs() < 1e-9);
        }
    }

    #[test]
    fn identical_sequences_pick_first_index() {
        let series = ramp(12, 3.0);
        assert_eq!(find_closest_approach(&series, &series), Ok(0));
    }

    #[test]
    fn closest_approach_finds_global_minimum() {
        let a: Vec<Vector2> = (0..9).map(|i| [i as f64, 0.0]).collect();
        let b: Vec<Vector2> = (0..9).map(|i| [i as f64, (i as f64 - 5.0).abs() + 1.0]).collect();
        assert_eq!(find_closest_approach(&a, &b), Ok(5));
    }

    #[test]
    fn closest_approach_tie_breaks_to_first() {
        let a = vec![[0.0, 0.0]; 5];
        let b = vec![[3.0, 0.0], [1.0, 0.0], [2.0, 0.0], [-1.0, 0.0], [1.0, 0.0]];
        assert_eq!(find_closest_approach(&a, &b), Ok(1));
    }

    #[test]
    fn closest_approach_rejects_bad_input() {
        let a = ramp(4, 1.0);
        let b = ramp(5, 1.0);
        assert_eq!(
            find_closest_approach(&a, &b),
            Err(KinematicsError::LengthMismatch { left: 4, right: 5 })
        );
        assert_eq!(
            find_closest_approach(&[], &b),
            Err(KinematicsError::EmptySequence)
        );
        assert_eq!(
            find_closest_approach(&a, &[]),
            Err(KinematicsError::EmptySequence)
        );
        assert_eq!(
            find_closest_approach(&[], &[]),
            Err(KinematicsError::EmptySequence)
        );
    }

    #[test]
    fn nan_distances_never_win() {
        let a = vec![[f64::NAN, 0.0], [5.0, 0.0], [1.0, 0.0]];
        let b = vec![[0.0, 0.0]; 3];
        assert_eq!(find_closest_approach(&a, &b), Ok(2));
    }

    #[test]
    fn compose_switches_at_intercept() {
        let transfer = ramp(10, 1.0);
        let target = ramp(10, 100.0);
        let k = 4;
        let path = compose_trajectory(&transfer, &target, k).unwrap();
        assert_eq!(path.len(), 10);
        assert_eq!(path[k - 1], transfer[k - 1]);
        assert_eq!(path[k], target[k]);
        assert_eq!(path[k + 1], target[k + 1]);
        for i in 0..10 {
            let expected = if i < k { transfer[i] } else { target[i] };
            assert_eq!(path[i], expected);
        }
    }

    #[test]
    fn compose_edges() {
        let transfer = ramp(3, 1.0);
        let target = ramp(3, 7.0);
        assert_eq!(compose_trajectory(&transfer, &target, 0).unwrap(), target);
        assert_eq!(compose_trajectory(&transfer, &target, 99).unwrap(), transfer);
        assert!(compose_trajectory(&transfer, &target[..2], 1).is_err());
    }

    #[test]
    fn translate_offsets_every_point() {
        let shifted = translate(&[[0.0, 0.0], [1.0, 2.0]], [10.0, -1.0]);
        assert_eq!(shifted, vec![[10.0, -1.0], [11.0, 1.0]]);
    }
}
