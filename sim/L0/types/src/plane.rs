//! Infinite plane used as a static collision constraint.

use nalgebra::{Point3, Unit, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An infinite plane through `point` with unit `normal`.
///
/// The normal points to the free side: positive signed distance means the
/// query point is above the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    /// Any point on the plane.
    pub point: Point3<f64>,
    /// Unit normal pointing to the free side.
    pub normal: Unit<Vector3<f64>>,
}

impl Default for Plane {
    fn default() -> Self {
        Self::horizontal(0.0)
    }
}

impl Plane {
    /// Create a plane from a point and a normal (normalized here).
    #[must_use]
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            point,
            normal: Unit::new_normalize(normal),
        }
    }

    /// Horizontal plane `z = height` with normal `+Z`.
    #[must_use]
    pub fn horizontal(height: f64) -> Self {
        Self {
            point: Point3::new(0.0, 0.0, height),
            normal: Vector3::z_axis(),
        }
    }

    /// Signed distance from `p` to the plane along the normal.
    #[must_use]
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        (p - self.point).dot(&*self.normal)
    }
}
