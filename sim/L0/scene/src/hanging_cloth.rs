//! Cloth hanging from its two top corners.
//!
//! Stepping stops at the first reported divergence; [`HangingCloth::reset`]
//! restores the initial sheet and resumes.

use sim_deformable::{
    ClothConstraints, ClothSimulation, ClothState, ClothStepOutcome, Divergence,
};
use sim_types::SimError;
use tracing::{info, warn};

use crate::clock::FrameTime;
use crate::config::HangingClothConfig;
use crate::error::Result;

/// A square cloth pinned at `(0, N-1)` and `(N-1, N-1)`.
#[derive(Debug, Clone)]
pub struct HangingCloth {
    config: HangingClothConfig,
    simulation: ClothSimulation,
    initial: ClothState,
    divergence: Option<Divergence>,
}

impl HangingCloth {
    /// Create a hanging cloth at rest.
    pub fn new(config: HangingClothConfig) -> Result<Self> {
        config.validate()?;

        let n = config.n_samples_edge;
        let initial = ClothState::unit_square(n)?;

        let mut constraints = ClothConstraints::new().with_ground_z(config.ground_z);
        constraints.pin_current(&initial, 0, n - 1)?;
        constraints.pin_current(&initial, n - 1, n - 1)?;

        let simulation = ClothSimulation::new(initial.clone(), config.parameters, constraints)?;

        info!(
            n_samples_edge = n,
            stiffness = config.parameters.stiffness,
            "Created hanging cloth"
        );
        Ok(Self {
            config,
            simulation,
            initial,
            divergence: None,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &HangingClothConfig {
        &self.config
    }

    /// Get the underlying simulation.
    #[must_use]
    pub const fn simulation(&self) -> &ClothSimulation {
        &self.simulation
    }

    /// Get the underlying simulation mutably (e.g. to change wind).
    pub const fn simulation_mut(&mut self) -> &mut ClothSimulation {
        &mut self.simulation
    }

    /// Current cloth state.
    #[must_use]
    pub const fn state(&self) -> &ClothState {
        self.simulation.state()
    }

    /// Divergence that halted stepping, if any.
    #[must_use]
    pub const fn divergence(&self) -> Option<&Divergence> {
        self.divergence.as_ref()
    }

    /// Whether stepping has stopped after a divergence.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.divergence.is_some()
    }

    /// Step the cloth, unless halted.
    ///
    /// Returns `None` without touching the state once a divergence has been
    /// seen.
    pub fn step(&mut self, frame: FrameTime) -> Option<ClothStepOutcome> {
        if self.is_halted() {
            return None;
        }

        let outcome = self.simulation.step(frame.dt);
        if let Some(divergence) = outcome.divergence {
            warn!(frame = frame.frame, "Halting cloth: {divergence}");
            self.divergence = Some(divergence);
        }
        Some(outcome)
    }

    /// Fail if the cloth has diverged.
    pub fn ensure_stable(&self) -> Result<()> {
        match self.divergence {
            Some(divergence) => Err(SimError::from(divergence).into()),
            None => Ok(()),
        }
    }

    /// Restore the initial sheet and resume stepping.
    pub fn reset(&mut self) -> Result<()> {
        self.simulation.reset(self.initial.clone())?;
        self.divergence = None;
        Ok(())
    }
}
