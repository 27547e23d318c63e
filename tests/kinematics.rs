use hohmann_sim::primitives::constants::{G, M_SUN};
use hohmann_sim::orbits::{
    CelestialConstants, KinematicsError, TimeGrid, compose_trajectory, compute_circular_positions,
    compute_period, compute_transfer_arc, find_closest_approach, separation_distances, translate,
};

const R_INNER: f64 = 1.496e11; // m
const R_OUTER: f64 = 2.279e11; // m
const SAMPLES: usize = 1000;

#[test]
fn period_is_positive_and_scales_as_three_halves() {
    for r in [1.0e9, 5.8e10, R_INNER, R_OUTER, 4.5e12] {
        let p = compute_period(r, M_SUN).expect("valid orbit");
        assert!(p > 0.0);
        let ratio = compute_period(4.0 * r, M_SUN).unwrap() / p;
        assert!((ratio - 8.0).abs() < 1e-9, "ratio = {ratio}");
    }
}

#[test]
fn invalid_orbit_is_reported() {
    let err = compute_period(0.0, M_SUN).unwrap_err();
    assert!(matches!(err, KinematicsError::InvalidOrbit { .. }));
    assert!(err.to_string().contains("invalid orbit"));
}

#[test]
fn earth_to_mars_intercept_is_a_near_miss() {
    let constants = CelestialConstants {
        gravitational_constant: G,
        central_mass_kg: M_SUN,
    };
    let t_inner = compute_period(R_INNER, M_SUN).unwrap();
    let t_outer = compute_period(R_OUTER, M_SUN).unwrap();
    let grid = TimeGrid::linspace(t_outer, SAMPLES).unwrap();

    let inner = compute_circular_positions(R_INNER, t_inner, 0.0, &grid);
    let outer = compute_circular_positions(R_OUTER, t_outer, 44.75_f64.to_radians(), &grid);
    let arc = compute_transfer_arc(R_INNER, R_OUTER, &constants, &grid);
    let transfer = translate(&arc, inner[0]);

    let k = find_closest_approach(&transfer, &outer).expect("closest approach");
    assert!(k > 0 && k < SAMPLES - 1, "intercept index {k}");

    let distances = separation_distances(&transfer, &outer).unwrap();
    assert!(distances[k] < 1.0e9, "miss distance {} m", distances[k]);
    assert!(distances.iter().all(|d| *d >= distances[k]));

    let rocket = compose_trajectory(&transfer, &outer, k).unwrap();
    assert_eq!(rocket[k - 1], transfer[k - 1]);
    assert_eq!(rocket[k], outer[k]);
    assert_eq!(rocket[k + 1], outer[k + 1]);
}

#[test]
fn closest_approach_input_errors() {
    let a = vec![[0.0, 0.0]; 3];
    let b = vec![[1.0, 0.0]; 2];
    assert_eq!(
        find_closest_approach(&a, &b),
        Err(KinematicsError::LengthMismatch { left: 3, right: 2 })
    );
    assert_eq!(
        find_closest_approach(&[], &[]),
        Err(KinematicsError::EmptySequence)
    );
    assert_eq!(find_closest_approach(&a, &a), Ok(0));
}
