//! Cloth force, integration, pin and divergence passes working together.

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use sim_deformable::{
    ClothConstraints, ClothParameters, ClothSimulation, ClothState, DIVERGENCE_FORCE_THRESHOLD,
    DeformableError, DivergenceKind, Grid2D, Wind, apply_constraints, compute_force,
    detect_divergence, integrate, spring_force_at,
};
use sim_types::Gravity;

#[test]
fn pinned_corner_exact_after_one_cycle() {
    let mut state = ClothState::unit_square(6).unwrap();
    let params = ClothParameters::default();
    let target = Point3::new(-0.4, 0.55, 0.125);

    let mut constraints = ClothConstraints::new();
    constraints.fix_position(0, 5, target);

    compute_force(&mut state, &params);
    integrate(&mut state, &params, 1.0 / 60.0);
    apply_constraints(&mut state, &constraints);

    assert_eq!(state.position[(0, 5)], target);
    // Free corners fell under gravity.
    assert!(state.position[(5, 0)].z < 0.0);
}

#[test]
fn pinned_corners_hold_through_simulation() {
    let state = ClothState::unit_square(10).unwrap();
    let mut constraints = ClothConstraints::new();
    constraints.pin_current(&state, 0, 9).unwrap();
    constraints.pin_current(&state, 9, 9).unwrap();
    let left = state.position[(0, 9)];
    let right = state.position[(9, 9)];

    let mut sim = ClothSimulation::new(state, ClothParameters::default(), constraints).unwrap();
    for _ in 0..300 {
        let outcome = sim.step(1.0 / 60.0);
        assert!(!outcome.is_diverged());
    }

    assert_eq!(sim.state().position[(0, 9)], left);
    assert_eq!(sim.state().position[(9, 9)], right);
    assert!(sim.state().position[(5, 0)].z < -0.1);
    assert!(sim.state().is_finite());
}

#[test]
fn nan_force_detected() {
    let mut state = ClothState::unit_square(5).unwrap();
    state.force[(2, 3)].y = f64::NAN;

    let divergence = detect_divergence(&state).expect("NaN force must be reported");

    assert_eq!(divergence.kind(), DivergenceKind::NanForce);
    assert_eq!(divergence.coords(), (2, 3));
    assert_eq!(divergence.vertex(), state.position.index_of(2, 3).unwrap());
}

#[test]
fn calm_grid_not_diverged() {
    let mut state = ClothState::unit_square(10).unwrap();
    compute_force(&mut state, &ClothParameters::default());

    assert!(state.force.iter().all(|f| f.norm() < 1.0));
    assert!(detect_divergence(&state).is_none());
}

#[test]
fn strong_force_detected_above_threshold() {
    let mut state = ClothState::unit_square(4).unwrap();
    state.force[(1, 0)] = Vector3::new(DIVERGENCE_FORCE_THRESHOLD, 0.0, 0.0);
    assert!(detect_divergence(&state).is_none());

    state.force[(3, 3)] = Vector3::new(0.0, 0.0, DIVERGENCE_FORCE_THRESHOLD + 1.0);
    let divergence = detect_divergence(&state).unwrap();
    assert_eq!(divergence.coords(), (3, 3));
    assert!(matches!(
        divergence.kind(),
        DivergenceKind::StrongForce { magnitude } if magnitude > DIVERGENCE_FORCE_THRESHOLD
    ));
}

#[test]
fn corners_have_fewer_springs_than_center() {
    let state = ClothState::unit_square(7).unwrap();
    let count = |ku, kv| spring_force_at(&state.position, ku, kv, 5.0).springs;

    let center = count(3, 3);
    assert_eq!(center, 12);
    for (ku, kv) in [(0, 0), (0, 6), (6, 0), (6, 6)] {
        assert!(count(ku, kv) < center, "corner ({ku}, {kv})");
    }
    assert!(count(0, 0) < count(0, 3));
}

#[test]
fn rest_grid_has_no_spring_force() {
    let state = ClothState::unit_square(6).unwrap();
    for ku in 0..6 {
        for kv in 0..6 {
            let contribution = spring_force_at(&state.position, ku, kv, 50.0);
            assert_relative_eq!(contribution.force, Vector3::zeros(), epsilon = 1e-9);
        }
    }
}

#[test]
fn wind_pushes_along_normal() {
    let params = ClothParameters::default()
        .with_gravity(Gravity::zero())
        .with_wind(Wind::new(Vector3::z(), 0.5));
    let mut sim =
        ClothSimulation::new(ClothState::unit_square(8).unwrap(), params, ClothConstraints::new())
            .unwrap();
    let start = sim.state().centroid();

    for _ in 0..30 {
        sim.step(1.0 / 60.0);
    }

    let end = sim.state().centroid();
    assert!(end.z > start.z);
    assert_relative_eq!(end.x, start.x, epsilon = 1e-9);
    assert_relative_eq!(end.y, start.y, epsilon = 1e-9);
}

#[test]
fn overly_stiff_cloth_reports_divergence() {
    let params = ClothParameters::default()
        .with_stiffness(5.0e4)
        .with_damping(0.0);
    let state = ClothState::unit_square(8).unwrap();
    let mut constraints = ClothConstraints::new();
    constraints.pin_current(&state, 0, 7).unwrap();
    let mut sim = ClothSimulation::new(state, params, constraints).unwrap();

    let diverged = (0..1000).find_map(|_| sim.step(1.0 / 60.0).divergence);

    let divergence = diverged.expect("explicit integration should blow up");
    let err = sim_types::SimError::from(divergence);
    assert!(err.is_diverged());
}

#[test]
fn mismatched_grids_rejected_before_stepping() {
    let mut state = ClothState::unit_square(4).unwrap();
    state.force = Grid2D::new(2, Vector3::zeros());
    state.velocity = Grid2D::new(2, Vector3::zeros());

    let err = ClothSimulation::new(state, ClothParameters::default(), ClothConstraints::new())
        .unwrap_err();
    assert!(matches!(err, DeformableError::InvalidGrid(_)));
}
