//! Stepping a cloth with its parameters and constraints.

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::cloth::ClothState;
use crate::constraints::ClothConstraints;
use crate::error::{DeformableError, Result};
use crate::parameters::ClothParameters;
use crate::solver::{Divergence, apply_constraints, compute_force, detect_divergence, integrate};

/// Result of one cloth step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothStepOutcome {
    /// Number of steps taken so far, including this one.
    pub step: u64,
    /// Largest force magnitude computed this step.
    pub max_force: f64,
    /// First diverged sample, if any.
    pub divergence: Option<Divergence>,
}

impl ClothStepOutcome {
    /// Whether divergence was detected.
    #[must_use]
    pub const fn is_diverged(&self) -> bool {
        self.divergence.is_some()
    }
}

/// A cloth sheet together with the parameters and pins that drive it.
///
/// # Example
///
/// ```
/// use sim_deformable::{ClothConstraints, ClothParameters, ClothSimulation, ClothState};
///
/// let state = ClothState::unit_square(10).unwrap();
/// let mut constraints = ClothConstraints::new();
/// constraints.pin_current(&state, 0, 9).unwrap();
/// constraints.pin_current(&state, 9, 9).unwrap();
///
/// let mut cloth =
///     ClothSimulation::new(state, ClothParameters::default(), constraints).unwrap();
///
/// for _ in 0..60 {
///     let outcome = cloth.step(1.0 / 60.0);
///     assert!(!outcome.is_diverged());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClothSimulation {
    state: ClothState,
    parameters: ClothParameters,
    constraints: ClothConstraints,
    steps: u64,
}

impl ClothSimulation {
    /// Create a simulation.
    ///
    /// # Errors
    ///
    /// - [`DeformableError::InvalidGrid`] if the state's grids disagree in
    ///   dimension
    /// - [`DeformableError::InvalidConfig`] if the parameters fail validation
    pub fn new(
        state: ClothState,
        parameters: ClothParameters,
        constraints: ClothConstraints,
    ) -> Result<Self> {
        state.validate()?;
        parameters.validate()?;
        Ok(Self {
            state,
            parameters,
            constraints,
            steps: 0,
        })
    }

    /// Get the state.
    #[must_use]
    pub const fn state(&self) -> &ClothState {
        &self.state
    }

    /// Position of sample `(ku, kv)`, for editing in place.
    ///
    /// # Errors
    ///
    /// Returns [`DeformableError::IndexOutOfBounds`] if `(ku, kv)` is not on
    /// the cloth.
    pub fn position_mut(&mut self, ku: usize, kv: usize) -> Result<&mut Point3<f64>> {
        self.state.check_index(ku, kv)?;
        self.state
            .position
            .get_mut(ku, kv)
            .ok_or_else(|| DeformableError::index_out_of_bounds(format!("({ku}, {kv})")))
    }

    /// Velocity of sample `(ku, kv)`, for editing in place.
    ///
    /// # Errors
    ///
    /// Returns [`DeformableError::IndexOutOfBounds`] if `(ku, kv)` is not on
    /// the cloth.
    pub fn velocity_mut(&mut self, ku: usize, kv: usize) -> Result<&mut Vector3<f64>> {
        self.state.check_index(ku, kv)?;
        self.state
            .velocity
            .get_mut(ku, kv)
            .ok_or_else(|| DeformableError::index_out_of_bounds(format!("({ku}, {kv})")))
    }

    /// Get the parameters.
    #[must_use]
    pub const fn parameters(&self) -> &ClothParameters {
        &self.parameters
    }

    /// Replace the parameters.
    pub fn set_parameters(&mut self, parameters: ClothParameters) -> Result<()> {
        parameters.validate()?;
        self.parameters = parameters;
        Ok(())
    }

    /// Get the constraints.
    #[must_use]
    pub const fn constraints(&self) -> &ClothConstraints {
        &self.constraints
    }

    /// Get the constraints mutably.
    pub const fn constraints_mut(&mut self) -> &mut ClothConstraints {
        &mut self.constraints
    }

    /// Pin sample `(ku, kv)` to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`DeformableError::IndexOutOfBounds`](crate::DeformableError::IndexOutOfBounds)
    /// if `(ku, kv)` is not on the cloth.
    pub fn fix_position(&mut self, ku: usize, kv: usize, position: Point3<f64>) -> Result<()> {
        self.state.check_index(ku, kv)?;
        self.constraints.fix_position(ku, kv, position);
        Ok(())
    }

    /// Number of steps taken.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance the cloth by `dt`.
    ///
    /// Runs force computation, integration, pin enforcement and divergence
    /// detection in that order, then refreshes normals for the next step's
    /// wind. A divergence is reported in the outcome; the state is not
    /// rolled back.
    pub fn step(&mut self, dt: f64) -> ClothStepOutcome {
        compute_force(&mut self.state, &self.parameters);
        integrate(&mut self.state, &self.parameters, dt);
        apply_constraints(&mut self.state, &self.constraints);
        let divergence = detect_divergence(&self.state);
        self.state.update_normals();

        self.steps += 1;
        let max_force = self
            .state
            .force
            .iter()
            .map(Vector3::norm)
            .fold(0.0, f64::max);

        debug!(
            step = self.steps,
            max_force,
            diverged = divergence.is_some(),
            "Cloth step"
        );

        ClothStepOutcome {
            step: self.steps,
            max_force,
            divergence,
        }
    }

    /// Replace the state and restart the step counter. Pins are kept.
    ///
    /// # Errors
    ///
    /// Returns [`DeformableError::InvalidGrid`] if the state's grids disagree
    /// in dimension; the current state is kept.
    pub fn reset(&mut self, state: ClothState) -> Result<()> {
        state.validate()?;
        self.state = state;
        self.steps = 0;
        Ok(())
    }
}
