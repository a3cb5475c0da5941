//! Drives all scenes from one clock.

use sim_deformable::ClothStepOutcome;
use sim_hierarchy::Hierarchy;
use sim_particles::StepStats;
use tracing::info;

use crate::bird::{BirdPart, BirdRig};
use crate::clock::{FrameTime, SimulationClock};
use crate::config::SceneConfig;
use crate::error::Result;
use crate::fountain::SphereFountain;
use crate::hanging_cloth::HangingCloth;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame time.
    pub time: FrameTime,
    /// Sphere fountain counters.
    pub spheres: StepStats,
    /// Cloth outcome, `None` once the cloth has halted.
    pub cloth: Option<ClothStepOutcome>,
}

/// The bird rig, sphere fountain and hanging cloth on a shared clock.
#[derive(Debug, Clone)]
pub struct SceneRunner {
    clock: SimulationClock,
    bird: BirdRig,
    bird_hierarchy: Hierarchy<BirdPart>,
    fountain: SphereFountain,
    cloth: HangingCloth,
}

impl SceneRunner {
    /// Build every scene from `config`.
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let bird = BirdRig::new(config.bird)?;
        let bird_hierarchy = bird.build_hierarchy()?;
        let runner = Self {
            clock: SimulationClock::new(),
            bird,
            bird_hierarchy,
            fountain: SphereFountain::new(config.fountain)?,
            cloth: HangingCloth::new(config.cloth)?,
        };

        info!("Scenes ready");
        Ok(runner)
    }

    /// Advance every scene by `dt`.
    pub fn frame(&mut self, dt: f64) -> Result<FrameReport> {
        let time = self.clock.advance(dt)?;

        self.bird.animate(&mut self.bird_hierarchy, time)?;
        let spheres = self.fountain.step(time)?;
        let cloth = self.cloth.step(time);

        Ok(FrameReport {
            time,
            spheres,
            cloth,
        })
    }

    /// Make the bird flap.
    pub fn flap(&mut self) {
        self.bird.flap();
    }

    /// Get the clock.
    #[must_use]
    pub const fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Get the bird rig.
    #[must_use]
    pub const fn bird(&self) -> &BirdRig {
        &self.bird
    }

    /// Get the bird hierarchy.
    #[must_use]
    pub const fn bird_hierarchy(&self) -> &Hierarchy<BirdPart> {
        &self.bird_hierarchy
    }

    /// Get the sphere fountain.
    #[must_use]
    pub const fn fountain(&self) -> &SphereFountain {
        &self.fountain
    }

    /// Get the hanging cloth.
    #[must_use]
    pub const fn cloth(&self) -> &HangingCloth {
        &self.cloth
    }

    /// Get the hanging cloth mutably.
    pub const fn cloth_mut(&mut self) -> &mut HangingCloth {
        &mut self.cloth
    }
}
