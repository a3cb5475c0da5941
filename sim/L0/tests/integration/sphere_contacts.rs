//! Sphere pair and plane contact resolution.

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use sim_particles::{CollisionConfig, Particle, SphereSolver, StepStats};
use sim_types::Plane;

use crate::test_utils::{STEP_TOL, sphere};

fn resolve(solver: &SphereSolver, particles: &mut [Particle]) -> StepStats {
    let mut stats = StepStats::default();
    solver.resolve_pairs(particles, &mut stats);
    stats
}

#[test]
fn separated_spheres_untouched_by_pair_pass() {
    let solver = SphereSolver::default();
    let mut particles = vec![
        sphere(0.0, 0.0, 0.0, Vector3::new(1.0, 0.0, 0.0)),
        sphere(0.5, 0.0, 0.0, Vector3::new(-1.0, 0.0, 0.0)),
        sphere(0.0, 0.5, 0.3, Vector3::zeros()),
    ];
    let before = particles.clone();

    let stats = resolve(&solver, &mut particles);

    assert_eq!(particles, before);
    assert_eq!(stats, StepStats::default());
}

#[test]
fn coincident_spheres_skipped_without_nan() {
    let solver = SphereSolver::default();
    let mut particles = vec![
        sphere(0.2, 0.2, 0.2, Vector3::new(0.0, 0.0, 1.0)),
        sphere(0.2, 0.2, 0.2, Vector3::new(0.0, 0.0, -1.0)),
    ];
    let before = particles.clone();

    let stats = resolve(&solver, &mut particles);

    assert!(particles.iter().all(Particle::is_finite));
    assert_eq!(particles, before);
    assert_eq!(stats.degenerate_pairs, 1);
    assert_eq!(stats.pair_contacts, 0);
}

#[test]
fn resting_pair_damped_not_swapped() {
    let solver = SphereSolver::default();
    let mut particles = vec![
        sphere(0.0, 0.0, 0.0, Vector3::new(0.02, 0.0, 0.0)),
        sphere(0.15, 0.0, 0.0, Vector3::new(-0.03, 0.0, 0.0)),
    ];

    let stats = resolve(&solver, &mut particles);

    assert_eq!(stats.resting_contacts, 1);
    assert_eq!(stats.impacts, 0);
    assert_relative_eq!(particles[0].velocity.x, 0.8 * 0.02, epsilon = STEP_TOL);
    assert_relative_eq!(particles[1].velocity.x, 0.8 * -0.03, epsilon = STEP_TOL);

    // Pushed apart symmetrically to exact contact.
    assert_relative_eq!(particles[0].position.x, -0.025, epsilon = STEP_TOL);
    assert_relative_eq!(particles[1].position.x, 0.175, epsilon = STEP_TOL);
}

#[test]
fn head_on_impact_exchanges_normal_velocity() {
    let solver = SphereSolver::default();
    let mut particles = vec![
        sphere(0.0, 0.0, 0.0, Vector3::new(1.0, 0.3, 0.0)),
        sphere(0.15, 0.0, 0.0, Vector3::new(-1.0, 0.0, 0.0)),
    ];
    let momentum_before: Vector3<f64> = particles.iter().map(Particle::momentum).sum();

    let stats = resolve(&solver, &mut particles);

    assert_eq!(stats.impacts, 1);
    assert_relative_eq!(
        particles[0].velocity,
        Vector3::new(-1.0, 0.3, 0.0),
        epsilon = STEP_TOL
    );
    assert_relative_eq!(
        particles[1].velocity,
        Vector3::new(1.0, 0.0, 0.0),
        epsilon = STEP_TOL
    );

    let momentum_after: Vector3<f64> = particles.iter().map(Particle::momentum).sum();
    assert_relative_eq!(momentum_after, momentum_before, epsilon = STEP_TOL);
}

#[test]
fn plane_contact_reflects_and_snaps() {
    let mut solver = SphereSolver::default();
    let mut particles = vec![sphere(0.0, 0.0, -1.05, Vector3::new(1.0, 0.0, -2.0))];

    let stats = solver.step(&mut particles, 0.01);

    assert_eq!(stats.plane_contacts, 1);
    assert_relative_eq!(
        particles[0].velocity,
        Vector3::new(0.8, 0.0, 1.6),
        epsilon = STEP_TOL
    );
    assert_relative_eq!(particles[0].position.z, -1.0, epsilon = STEP_TOL);
    assert_relative_eq!(particles[0].position.x, 0.0, epsilon = STEP_TOL);
}

#[test]
fn free_flight_applies_drag_and_gravity() {
    let dt = 0.01;
    let mut particles = vec![sphere(0.0, 0.0, 5.0, Vector3::new(2.0, 0.0, 0.0))];

    sim_particles::step(&mut particles, dt);

    let expected_v = Vector3::new(2.0 * (1.0 - 0.9 * dt), 0.0, -9.81 * dt);
    assert_relative_eq!(particles[0].velocity, expected_v, epsilon = STEP_TOL);
    assert_relative_eq!(
        particles[0].position,
        Point3::new(0.0, 0.0, 5.0) + expected_v * dt,
        epsilon = STEP_TOL
    );
}

#[test]
fn tilted_plane_catches_falling_sphere() {
    let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 1.0, 1.0));
    let config = CollisionConfig::default().with_plane(plane);
    let mut solver = SphereSolver::new(config);
    let mut particles = vec![sphere(0.0, 0.0, 1.0, Vector3::zeros())];

    for _ in 0..2000 {
        solver.step(&mut particles, 1.0 / 120.0);
    }

    let p = &particles[0];
    assert!(p.is_finite());
    assert!(plane.signed_distance(&p.position) >= p.radius - 1e-9);
}

#[test]
fn crowded_pile_stays_finite_above_ground() {
    let mut solver = SphereSolver::default();
    let mut particles: Vec<Particle> = (0..6_u32)
        .flat_map(|i| {
            (0..6_u32).map(move |j| {
                sphere(
                    0.12 * f64::from(i),
                    0.12 * f64::from(j),
                    f64::from(i + j) * 0.05,
                    Vector3::zeros(),
                )
            })
        })
        .collect();

    for _ in 0..600 {
        solver.step(&mut particles, 1.0 / 60.0);
    }

    for p in &particles {
        assert!(p.is_finite());
        assert!(p.position.z > -1.1);
    }
}

mod properties {
    use approx::relative_eq;
    use nalgebra::{Point3, Vector3};
    use proptest::prelude::*;
    use sim_particles::{CollisionConfig, Particle, SphereSolver, StepStats};

    fn arb_sphere() -> impl Strategy<Value = Particle> {
        (
            prop::array::uniform3(-0.4..0.4f64),
            prop::array::uniform3(-2.0..2.0f64),
        )
            .prop_map(|([x, y, z], [vx, vy, vz])| {
                Particle::new(Point3::new(x, y, z), 0.1, 1.0)
                    .unwrap()
                    .with_velocity(Vector3::new(vx, vy, vz))
            })
    }

    proptest! {
        /// With undamped resting contacts, equal-mass pair resolution keeps
        /// both the total momentum and the center of mass.
        #[test]
        fn proptest_elastic_pairs_conserve_momentum(
            mut particles in prop::collection::vec(arb_sphere(), 2..10)
        ) {
            let solver = SphereSolver::new(CollisionConfig::elastic());
            let momentum: Vector3<f64> = particles.iter().map(Particle::momentum).sum();
            let center: Vector3<f64> = particles.iter().map(|p| p.position.coords).sum();

            let mut stats = StepStats::default();
            solver.resolve_pairs(&mut particles, &mut stats);

            let momentum_after: Vector3<f64> = particles.iter().map(Particle::momentum).sum();
            let center_after: Vector3<f64> = particles.iter().map(|p| p.position.coords).sum();

            prop_assert!(particles.iter().all(Particle::is_finite));
            prop_assert!(relative_eq!(momentum_after, momentum, epsilon = 1e-9));
            prop_assert!(relative_eq!(center_after, center, epsilon = 1e-9));
            prop_assert_eq!(
                stats.pair_contacts,
                stats.resting_contacts + stats.impacts
            );
        }
    }
}
