//! Shared tolerances and builders for the integration tests.

use nalgebra::{Point3, Vector3};
use sim_particles::Particle;
use sim_types::Transform;

/// Tolerance for composed transforms and mapped points.
///
/// A few chained quaternion products, each within a handful of ulps.
pub const GEOM_TOL: f64 = 1e-10;

/// Tolerance for values after a single explicit integration step.
pub const STEP_TOL: f64 = 1e-12;

/// Frame step used by the scene tests.
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Assert two points agree to within [`GEOM_TOL`] per component.
pub fn assert_point_near(actual: &Point3<f64>, expected: &Point3<f64>) {
    let err = (actual - expected).norm();
    assert!(
        err < GEOM_TOL,
        "point mismatch: expected {expected:?}, got {actual:?} (error {err:e})"
    );
}

/// Assert two transforms map a set of probe points identically.
pub fn assert_transform_near(actual: &Transform, expected: &Transform) {
    let probes = [
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(-0.3, 0.7, 2.1),
    ];
    for probe in &probes {
        assert_point_near(
            &actual.transform_point(probe),
            &expected.transform_point(probe),
        );
    }
}

/// Unit-mass sphere of radius 0.1 at `(x, y, z)` with velocity `v`.
pub fn sphere(x: f64, y: f64, z: f64, v: Vector3<f64>) -> Particle {
    Particle::new(Point3::new(x, y, z), 0.1, 1.0)
        .expect("valid sphere")
        .with_velocity(v)
}
