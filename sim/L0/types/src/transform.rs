//! Rigid transform with uniform scale.
//!
//! A [`Transform`] maps a point `p` of a child frame into its parent frame as
//!
//! ```text
//! p' = t + R * (s * p)
//! ```
//!
//! i.e. scale first, then rotate, then translate. Composition stays in the
//! same family because the scale is uniform:
//!
//! ```text
//! (a ∘ b).t = a.t + a.R * (a.s * b.t)
//! (a ∘ b).R = a.R * b.R
//! (a ∘ b).s = a.s * b.s
//! ```

use nalgebra::{Matrix4, Point3, Similarity3, Translation3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Translation, rotation and uniform scale of a frame relative to its parent.
///
/// # Example
///
/// ```
/// use sim_types::Transform;
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
/// use std::f64::consts::FRAC_PI_2;
///
/// let t = Transform::from_parts(
///     Vector3::new(1.0, 0.0, 0.0),
///     UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
///     2.0,
/// );
///
/// // Scale to (2,0,0), rotate to (0,2,0), translate to (1,2,0).
/// let p = t.transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert!((p - Point3::new(1.0, 2.0, 0.0)).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Translation in the parent frame.
    pub translation: Vector3<f64>,
    /// Orientation relative to the parent frame.
    pub rotation: UnitQuaternion<f64>,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: 1.0,
        }
    }

    /// Create a transform from translation only.
    #[must_use]
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// Create a transform from rotation only.
    #[must_use]
    pub fn from_rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    /// Create a transform from translation and rotation (unit scale).
    #[must_use]
    pub fn from_translation_rotation(
        translation: Vector3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Self {
        Self {
            translation,
            rotation,
            scale: 1.0,
        }
    }

    /// Create a transform from all three parts.
    #[must_use]
    pub const fn from_parts(
        translation: Vector3<f64>,
        rotation: UnitQuaternion<f64>,
        scale: f64,
    ) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Compose two transforms: `self ∘ other`.
    ///
    /// The result maps a point of `other`'s child frame directly into the
    /// parent frame of `self`. For a hierarchy this is
    /// `global = parent.global.compose(&local)`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            translation: self.translation + self.rotation * (other.translation * self.scale),
            rotation: self.rotation * other.rotation,
            scale: self.scale * other.scale,
        }
    }

    /// Transform a point from the child frame to the parent frame.
    #[must_use]
    pub fn transform_point(&self, local: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.translation + self.rotation * (local.coords * self.scale))
    }

    /// Transform a direction (no translation).
    #[must_use]
    pub fn transform_vector(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * (local * self.scale)
    }

    /// Compute the inverse transform.
    ///
    /// Returns `None` when the scale is zero or not finite.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        let inv_rotation = self.rotation.inverse();
        let inv_scale = 1.0 / self.scale;
        Some(Self {
            translation: -(inv_rotation * self.translation) * inv_scale,
            rotation: inv_rotation,
            scale: inv_scale,
        })
    }

    /// Convert to a nalgebra similarity.
    #[must_use]
    pub fn to_similarity(&self) -> Similarity3<f64> {
        Similarity3::from_parts(
            Translation3::from(self.translation),
            self.rotation,
            self.scale,
        )
    }

    /// 4x4 homogeneous matrix, the layout a renderer uploads as a model matrix.
    #[must_use]
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        self.to_similarity().to_homogeneous()
    }

    /// Check if the transform contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.translation.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
            && self.scale.is_finite()
    }
}
