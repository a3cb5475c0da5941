//! Rigid sphere particle.

use nalgebra::{Point3, Vector3};
use sim_types::{Result, SimError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A free rigid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Particle {
    /// Center position.
    pub position: Point3<f64>,
    /// Linear velocity.
    pub velocity: Vector3<f64>,
    /// Mass (kg), strictly positive.
    pub mass: f64,
    /// Radius (m), strictly positive.
    pub radius: f64,
}

impl Particle {
    /// Create a particle at rest.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParticle`] if `mass` or `radius` is not a
    /// positive finite number.
    pub fn new(position: Point3<f64>, radius: f64, mass: f64) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::invalid_particle(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::invalid_particle(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        Ok(Self {
            position,
            velocity: Vector3::zeros(),
            mass,
            radius,
        })
    }

    /// Set the initial velocity.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Kinetic energy `½ m |v|²`.
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Linear momentum `m v`.
    #[must_use]
    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    /// Whether the spheres of `self` and `other` touch or overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        (self.position - other.position).norm() <= self.radius + other.radius
    }

    /// Check that position and velocity are free of `NaN`/`Inf`.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|x| x.is_finite()) && self.velocity.iter().all(|x| x.is_finite())
    }
}
