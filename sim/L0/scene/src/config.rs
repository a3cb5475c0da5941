//! Configuration for the scene drivers.
//!
//! Each scene has its own config with the scene constants as defaults;
//! [`SceneConfig`] bundles them for [`SceneRunner`](crate::SceneRunner).

use nalgebra::Point3;
use sim_deformable::ClothParameters;
use sim_particles::CollisionConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::invalid_config(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid_config(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

/// Flappy-bird rig constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BirdConfig {
    /// Vertical acceleration of the bird body.
    pub gravity: f64,
    /// Vertical speed below which gravity stops accelerating the bird.
    pub min_speed: f64,
    /// Vertical speed set by a flap.
    pub max_speed: f64,
    /// Vertical speed at start.
    pub initial_speed: f64,
    /// Wing flap angular frequency (rad/s).
    pub wing_frequency: f64,
    /// Head nod angular frequency (rad/s).
    pub head_frequency: f64,
    /// Head nod amplitude (rad).
    pub head_amplitude: f64,
    /// Height the tube is held at.
    pub tube_height: f64,
    /// Tube displacement along `-X` per frame.
    pub tube_scroll: f64,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            gravity: -25.0,
            min_speed: -30.0,
            max_speed: 15.0,
            initial_speed: 15.0,
            wing_frequency: 7.0,
            head_frequency: 2.0,
            head_amplitude: 0.25,
            tube_height: -8.0,
            tube_scroll: 0.03,
        }
    }
}

impl BirdConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("initial_speed", self.initial_speed),
            ("wing_frequency", self.wing_frequency),
            ("head_frequency", self.head_frequency),
            ("head_amplitude", self.head_amplitude),
            ("tube_height", self.tube_height),
            ("tube_scroll", self.tube_scroll),
        ] {
            check_finite(name, value)?;
        }
        check_finite("min_speed", self.min_speed)?;
        check_finite("max_speed", self.max_speed)?;
        if self.min_speed >= self.max_speed {
            return Err(SceneError::invalid_config(format!(
                "min_speed ({}) must be below max_speed ({})",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }
}

/// Sphere fountain constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FountainConfig {
    /// Where new spheres appear.
    pub origin: Point3<f64>,
    /// Seconds between emissions.
    pub emit_period: f64,
    /// Emission stops once this many spheres exist.
    pub max_particles: usize,
    /// Sphere radius.
    pub radius: f64,
    /// Sphere mass.
    pub mass: f64,
    /// Upward launch speed.
    pub launch_speed: f64,
    /// Horizontal launch velocity components are drawn from `[-spread, spread]`.
    pub horizontal_spread: f64,
    /// Seed of the emission RNG.
    pub seed: u64,
    /// Collision solver settings.
    pub collision: CollisionConfig,
}

impl Default for FountainConfig {
    fn default() -> Self {
        Self {
            origin: Point3::origin(),
            emit_period: 0.1,
            max_particles: 150,
            radius: 0.08,
            mass: 1.0,
            launch_speed: 5.0,
            horizontal_spread: 1.0,
            seed: 42,
            collision: CollisionConfig::default(),
        }
    }
}

impl FountainConfig {
    /// Set the maximum sphere count.
    #[must_use]
    pub const fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the emission period.
    #[must_use]
    pub const fn with_emit_period(mut self, emit_period: f64) -> Self {
        self.emit_period = emit_period;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        check_positive("emit_period", self.emit_period)?;
        check_positive("radius", self.radius)?;
        check_positive("mass", self.mass)?;
        check_finite("launch_speed", self.launch_speed)?;
        check_finite("horizontal_spread", self.horizontal_spread)?;
        if self.horizontal_spread < 0.0 {
            return Err(SceneError::invalid_config(
                "horizontal_spread must be non-negative",
            ));
        }
        if !self.origin.iter().all(|x| x.is_finite()) {
            return Err(SceneError::invalid_config("origin must be finite"));
        }
        self.collision.validate()?;
        Ok(())
    }
}

/// Hanging cloth constants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HangingClothConfig {
    /// Samples per cloth edge.
    pub n_samples_edge: usize,
    /// Cloth physics.
    pub parameters: ClothParameters,
    /// Ground reference height.
    pub ground_z: f64,
}

impl Default for HangingClothConfig {
    fn default() -> Self {
        Self {
            n_samples_edge: 20,
            parameters: ClothParameters::default(),
            ground_z: -1.0,
        }
    }
}

impl HangingClothConfig {
    /// Set the grid resolution.
    #[must_use]
    pub const fn with_samples(mut self, n_samples_edge: usize) -> Self {
        self.n_samples_edge = n_samples_edge;
        self
    }

    /// Set the cloth parameters.
    #[must_use]
    pub const fn with_parameters(mut self, parameters: ClothParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.n_samples_edge < 2 {
            return Err(SceneError::invalid_config(format!(
                "n_samples_edge must be at least 2, got {}",
                self.n_samples_edge
            )));
        }
        check_finite("ground_z", self.ground_z)?;
        self.parameters.validate()?;
        Ok(())
    }
}

/// All scene configs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Bird rig.
    pub bird: BirdConfig,
    /// Sphere fountain.
    pub fountain: FountainConfig,
    /// Hanging cloth.
    pub cloth: HangingClothConfig,
}

impl SceneConfig {
    /// Validate every scene config.
    pub fn validate(&self) -> Result<()> {
        self.bird.validate()?;
        self.fountain.validate()?;
        self.cloth.validate()?;
        Ok(())
    }
}
