//! Sphere fountain: spheres launched upward from one point at a fixed rate,
//! colliding with each other and the ground plane.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sim_particles::{Particle, SphereSolver, StepStats};
use tracing::{debug, info};

use crate::clock::FrameTime;
use crate::config::FountainConfig;
use crate::error::Result;

/// Emits spheres and steps their collisions.
#[derive(Debug, Clone)]
pub struct SphereFountain {
    config: FountainConfig,
    solver: SphereSolver,
    particles: Vec<Particle>,
    rng: StdRng,
    since_emit: f64,
}

impl SphereFountain {
    /// Create an empty fountain.
    pub fn new(config: FountainConfig) -> Result<Self> {
        config.validate()?;
        info!(
            max_particles = config.max_particles,
            emit_period = config.emit_period,
            seed = config.seed,
            "Created sphere fountain"
        );
        Ok(Self {
            solver: SphereSolver::new(config.collision),
            particles: Vec::with_capacity(config.max_particles),
            rng: StdRng::seed_from_u64(config.seed),
            since_emit: 0.0,
            config,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &FountainConfig {
        &self.config
    }

    /// Spheres emitted so far.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Counters from the last step.
    #[must_use]
    pub const fn stats(&self) -> &StepStats {
        self.solver.stats()
    }

    /// Launch one sphere from the origin, unless the fountain is full.
    ///
    /// Returns whether a sphere was emitted.
    pub fn emit(&mut self) -> Result<bool> {
        if self.particles.len() >= self.config.max_particles {
            return Ok(false);
        }

        let spread = self.config.horizontal_spread;
        let velocity = if spread > 0.0 {
            Vector3::new(
                self.rng.gen_range(-spread..=spread),
                self.rng.gen_range(-spread..=spread),
                self.config.launch_speed,
            )
        } else {
            Vector3::new(0.0, 0.0, self.config.launch_speed)
        };

        let particle = Particle::new(self.config.origin, self.config.radius, self.config.mass)?
            .with_velocity(velocity);
        self.particles.push(particle);

        debug!(count = self.particles.len(), "Emitted sphere");
        Ok(true)
    }

    /// Emit if the period has elapsed, then step every sphere by `frame.dt`.
    pub fn step(&mut self, frame: FrameTime) -> Result<StepStats> {
        self.since_emit += frame.dt;
        if self.since_emit >= self.config.emit_period {
            self.since_emit = 0.0;
            self.emit()?;
        }

        Ok(self.solver.step(&mut self.particles, frame.dt))
    }

    /// Remove all spheres and restart the emission RNG.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.since_emit = 0.0;
    }
}
