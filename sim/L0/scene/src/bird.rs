//! Flappy-bird articulated rig.
//!
//! ```text
//! Tube 1 ── Tube 1 top
//!
//! Bird body ─┬─ Bird head ── Bird nose
//!            ├─ Bird up left wing ── Bird low left wing
//!            └─ Bird up right wing ── Bird low right wing
//! ```
//!
//! The body falls under its own gravity and pitches with its vertical speed,
//! wings flap and the head nods as functions of elapsed time, and the tube
//! scrolls toward `-X` by a fixed amount per frame.

use std::f64::consts::PI;

use nalgebra::{Unit, UnitQuaternion, Vector3};
use sim_hierarchy::Hierarchy;
use sim_types::Transform;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::FrameTime;
use crate::config::BirdConfig;
use crate::error::Result;

/// Node names of the rig.
pub mod names {
    /// Scrolling tube.
    pub const TUBE: &str = "Tube 1";
    /// Cap on top of the tube.
    pub const TUBE_TOP: &str = "Tube 1 top";
    /// Bird body.
    pub const BODY: &str = "Bird body";
    /// Bird head.
    pub const HEAD: &str = "Bird head";
    /// Bird nose.
    pub const NOSE: &str = "Bird nose";
    /// Upper left wing.
    pub const UP_LEFT_WING: &str = "Bird up left wing";
    /// Upper right wing.
    pub const UP_RIGHT_WING: &str = "Bird up right wing";
    /// Lower left wing.
    pub const LOW_LEFT_WING: &str = "Bird low left wing";
    /// Lower right wing.
    pub const LOW_RIGHT_WING: &str = "Bird low right wing";
}

/// Shape carried by each rig node, for a renderer to map to a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BirdPart {
    /// Cylinder of radius 1 and height 5.5.
    Tube,
    /// Cylinder of radius 1.2 and height 0.6.
    TubeTop,
    /// Ellipsoid with radii (0.5, 0.3, 0.3).
    Body,
    /// Sphere of radius 0.2.
    Head,
    /// Cone of radius 0.12 and height 0.2.
    Nose,
    /// Quad from x = -0.3..0.3, y = 0..0.4.
    UpperWing,
    /// Trapezoid from x = -0.3..0.3 at y = 0 to x = -0.15..0.15 at y = 0.25.
    LowerWing,
}

const TUBE_TOP_OFFSET: Vector3<f64> = Vector3::new(0.0, 0.0, 5.5);
const HEAD_OFFSET: Vector3<f64> = Vector3::new(0.45, 0.0, 0.3);
const NOSE_OFFSET: Vector3<f64> = Vector3::new(0.12, 0.0, 0.0);
const NOSE_ANGLE: f64 = 1.571;
const LOWER_WING_OFFSET: Vector3<f64> = Vector3::new(0.0, 0.4, 0.0);

fn about(axis: &Unit<Vector3<f64>>, angle: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(axis, angle)
}

/// Animation state of the bird.
#[derive(Debug, Clone, PartialEq)]
pub struct BirdRig {
    config: BirdConfig,
    vertical_speed: f64,
}

impl BirdRig {
    /// Create a rig.
    pub fn new(config: BirdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            vertical_speed: config.initial_speed,
            config,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &BirdConfig {
        &self.config
    }

    /// Build the rig hierarchy with globals already propagated.
    pub fn build_hierarchy(&self) -> Result<Hierarchy<BirdPart>> {
        let mut h = Hierarchy::new();

        h.add_root(BirdPart::Tube, names::TUBE, Transform::identity())?;
        h.add_child(BirdPart::TubeTop, names::TUBE_TOP, names::TUBE, TUBE_TOP_OFFSET)?;
        h.add_root(BirdPart::Body, names::BODY, Transform::identity())?;
        h.add_child(BirdPart::Head, names::HEAD, names::BODY, HEAD_OFFSET)?;
        h.add_child_with_rotation(
            BirdPart::Nose,
            names::NOSE,
            names::HEAD,
            NOSE_OFFSET,
            about(&Vector3::y_axis(), NOSE_ANGLE),
        )?;
        h.add_child(BirdPart::UpperWing, names::UP_LEFT_WING, names::BODY, Vector3::zeros())?;
        h.add_child(BirdPart::UpperWing, names::UP_RIGHT_WING, names::BODY, Vector3::zeros())?;
        h.add_child(
            BirdPart::LowerWing,
            names::LOW_LEFT_WING,
            names::UP_LEFT_WING,
            LOWER_WING_OFFSET,
        )?;
        h.add_child(
            BirdPart::LowerWing,
            names::LOW_RIGHT_WING,
            names::UP_RIGHT_WING,
            LOWER_WING_OFFSET,
        )?;
        h.update_global_transforms();

        info!(nodes = h.len(), "Built bird rig");
        Ok(h)
    }

    /// Current vertical speed of the body.
    #[must_use]
    pub const fn vertical_speed(&self) -> f64 {
        self.vertical_speed
    }

    /// Vertical speed mapped linearly from `[min_speed, max_speed]` to `[-1, 1]`.
    #[must_use]
    pub fn normalized_speed(&self) -> f64 {
        let BirdConfig {
            min_speed,
            max_speed,
            ..
        } = self.config;
        (self.vertical_speed - min_speed) / (max_speed - min_speed) * 2.0 - 1.0
    }

    /// Flap: set the vertical speed to its maximum.
    pub fn flap(&mut self) {
        self.vertical_speed = self.config.max_speed;
    }

    /// Animate one frame and propagate global transforms.
    ///
    /// Gravity only accelerates the body while its speed is above
    /// `min_speed`. The tube scroll is per call, independent of `dt`.
    pub fn animate(&mut self, hierarchy: &mut Hierarchy<BirdPart>, frame: FrameTime) -> Result<()> {
        let FrameTime { t, dt, .. } = frame;
        let c = self.config;

        if self.vertical_speed > c.min_speed {
            self.vertical_speed += c.gravity * dt;
        }
        let pitch = -self.normalized_speed();

        let body = hierarchy.lookup(names::BODY)?;
        body.translation.z += self.vertical_speed * dt;
        body.rotation = about(&Vector3::y_axis(), pitch);

        let flap = (c.wing_frequency * t).cos();
        let x = Vector3::x_axis();
        hierarchy.lookup(names::UP_LEFT_WING)?.rotation = about(&x, -flap / 2.0);
        hierarchy.lookup(names::LOW_LEFT_WING)?.rotation = about(&x, -flap);
        hierarchy.lookup(names::UP_RIGHT_WING)?.rotation = about(&x, flap / 2.0) * about(&x, PI);
        hierarchy.lookup(names::LOW_RIGHT_WING)?.rotation = about(&x, flap);
        hierarchy.lookup(names::HEAD)?.rotation = about(
            &Vector3::y_axis(),
            (c.head_frequency * t).cos() * c.head_amplitude,
        );

        let tube = hierarchy.lookup(names::TUBE)?;
        tube.translation.z = c.tube_height;
        tube.translation.x -= c.tube_scroll;

        hierarchy.update_global_transforms();
        Ok(())
    }
}
