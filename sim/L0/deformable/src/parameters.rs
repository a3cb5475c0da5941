//! Physical parameters for cloth simulation.

use nalgebra::Vector3;
use sim_types::Gravity;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DeformableError, Result};

/// Wind acting along the cloth normals.
///
/// The per-particle force is `((n · direction) n) magnitude`, so only the
/// component of the wind facing the surface pushes it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    /// Wind direction (not required to be unit length).
    pub direction: Vector3<f64>,
    /// Wind strength.
    pub magnitude: f64,
}

impl Default for Wind {
    fn default() -> Self {
        Self::calm()
    }
}

impl Wind {
    /// No wind.
    #[must_use]
    pub fn calm() -> Self {
        Self {
            direction: Vector3::x(),
            magnitude: 0.0,
        }
    }

    /// Wind along `direction` with the given strength.
    #[must_use]
    pub const fn new(direction: Vector3<f64>, magnitude: f64) -> Self {
        Self {
            direction,
            magnitude,
        }
    }

    /// Force on a surface element with unit normal `normal`.
    #[must_use]
    pub fn force_on(&self, normal: &Vector3<f64>) -> Vector3<f64> {
        normal * (normal.dot(&self.direction) * self.magnitude)
    }
}

/// Parameters of the mass-spring cloth model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothParameters {
    /// Spring stiffness `K`, shared by structural, shear and bending springs.
    pub stiffness: f64,
    /// Total cloth mass (kg).
    pub mass_total: f64,
    /// Linear drag coefficient `mu`; drag force is `-mu m v`.
    pub damping: f64,
    /// Wind.
    pub wind: Wind,
    /// Gravity.
    pub gravity: Gravity,
}

impl Default for ClothParameters {
    fn default() -> Self {
        Self {
            stiffness: 5.0,
            mass_total: 0.8,
            damping: 40.0,
            wind: Wind::calm(),
            gravity: Gravity::earth(),
        }
    }
}

impl ClothParameters {
    /// Stiffer, lightly damped sheet.
    #[must_use]
    pub fn stiff() -> Self {
        Self {
            stiffness: 20.0,
            damping: 10.0,
            ..Default::default()
        }
    }

    /// Set the spring stiffness.
    #[must_use]
    pub const fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the total mass.
    #[must_use]
    pub const fn with_mass_total(mut self, mass_total: f64) -> Self {
        self.mass_total = mass_total;
        self
    }

    /// Set the drag coefficient.
    #[must_use]
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the wind.
    #[must_use]
    pub const fn with_wind(mut self, wind: Wind) -> Self {
        self.wind = wind;
        self
    }

    /// Set the gravity.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Mass used in the force pass: `mass_total / N` over all `N` particles.
    #[must_use]
    pub fn force_mass(&self, particle_count: usize) -> f64 {
        self.mass_total / particle_count as f64
    }

    /// Mass used in integration: `mass_total / N_edge`.
    ///
    /// This differs from [`force_mass`](Self::force_mass): the force pass
    /// spreads the mass over every particle, integration over one edge.
    #[must_use]
    pub fn integration_mass(&self, n_samples_edge: usize) -> f64 {
        self.mass_total / n_samples_edge as f64
    }

    /// Validate the parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.stiffness.is_finite() || self.stiffness < 0.0 {
            return Err(DeformableError::invalid_config(format!(
                "stiffness must be non-negative and finite, got {}",
                self.stiffness
            )));
        }
        if !self.mass_total.is_finite() || self.mass_total <= 0.0 {
            return Err(DeformableError::invalid_config(format!(
                "mass_total must be positive and finite, got {}",
                self.mass_total
            )));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(DeformableError::invalid_config(format!(
                "damping must be non-negative and finite, got {}",
                self.damping
            )));
        }
        if !self.wind.magnitude.is_finite() || !self.wind.direction.iter().all(|x| x.is_finite())
        {
            return Err(DeformableError::invalid_config("wind must be finite"));
        }
        if !self.gravity.is_finite() {
            return Err(DeformableError::invalid_config("gravity must be finite"));
        }
        Ok(())
    }
}
