//! Configuration for the sphere collision solver.

use sim_types::{Gravity, Plane, Result, SimError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contact and integration constants for [`SphereSolver`](crate::SphereSolver).
///
/// Defaults: rest threshold 0.1, rest damping 0.8, restitution 0.8,
/// friction damping 0.8, drag 0.9, Earth gravity, ground plane `z = -1.1`
/// with normal `+Z`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionConfig {
    /// Relative speed at or below which a sphere pair is a resting contact.
    pub rest_threshold: f64,
    /// Velocity scale applied to both spheres of a resting contact.
    pub rest_damping: f64,
    /// Scale of the reflected normal velocity at the plane.
    pub restitution: f64,
    /// Scale of the tangential velocity at the plane.
    pub friction_damping: f64,
    /// Linear drag rate for free flight: `v' = (1 - drag dt) v + dt f / m`.
    pub drag: f64,
    /// Gravity applied during free flight.
    pub gravity: Gravity,
    /// Static ground plane.
    pub plane: Plane,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            rest_threshold: 0.1,
            rest_damping: 0.8,
            restitution: 0.8,
            friction_damping: 0.8,
            drag: 0.9,
            gravity: Gravity::earth(),
            plane: Plane::horizontal(-1.1),
        }
    }
}

impl CollisionConfig {
    /// Perfectly elastic, frictionless, drag-free contacts (useful for tests).
    #[must_use]
    pub fn elastic() -> Self {
        Self {
            rest_damping: 1.0,
            restitution: 1.0,
            friction_damping: 1.0,
            drag: 0.0,
            ..Default::default()
        }
    }

    /// Set the ground plane.
    #[must_use]
    pub const fn with_plane(mut self, plane: Plane) -> Self {
        self.plane = plane;
        self
    }

    /// Set the gravity.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Disable gravity.
    #[must_use]
    pub fn zero_gravity(mut self) -> Self {
        self.gravity = Gravity::zero();
        self
    }

    /// Set the resting-contact threshold and damping.
    #[must_use]
    pub const fn with_rest_contact(mut self, threshold: f64, damping: f64) -> Self {
        self.rest_threshold = threshold;
        self.rest_damping = damping;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("rest_threshold", self.rest_threshold),
            ("rest_damping", self.rest_damping),
            ("restitution", self.restitution),
            ("friction_damping", self.friction_damping),
            ("drag", self.drag),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::invalid_config(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }

        if !self.gravity.is_finite() {
            return Err(SimError::invalid_config("gravity must be finite"));
        }

        if !self.plane.normal.iter().all(|x| x.is_finite()) {
            return Err(SimError::invalid_config("plane normal must be finite"));
        }

        Ok(())
    }
}
