//! Core types shared by the animation and dynamics crates.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`Transform`] - Translation, rotation and uniform scale of a frame
//! - [`Plane`] - An infinite plane given by a point and a unit normal
//! - [`Gravity`] - Uniform gravitational acceleration
//! - [`SimError`] - Errors shared by the dynamics crates
//!
//! # Design Philosophy
//!
//! These types are **pure data** plus the small amount of algebra needed to
//! compose them. They carry no simulation state and know nothing about
//! rendering: a renderer reads [`Transform::to_homogeneous`] and positions,
//! a scene driver writes local transforms and supplies `dt`.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero rendering dependencies**.
//!
//! # Coordinate System
//!
//! - X: right
//! - Y: forward
//! - Z: up
//! - Right-handed
//!
//! # Example
//!
//! ```
//! use sim_types::Transform;
//! use nalgebra::{Point3, Vector3};
//!
//! let parent = Transform::from_translation(Vector3::new(0.0, 0.0, 1.0));
//! let child = Transform::from_translation(Vector3::new(1.0, 0.0, 0.0));
//!
//! let world = parent.compose(&child);
//! assert_eq!(world.transform_point(&Point3::origin()), Point3::new(1.0, 0.0, 1.0));
//! ```

#![doc(html_root_url = "https://docs.rs/sim-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
    clippy::missing_errors_doc,        // Error docs added where non-obvious
)]

mod error;
mod gravity;
mod plane;
mod transform;

pub use error::SimError;
pub use gravity::Gravity;
pub use plane::Plane;
pub use transform::Transform;

// Re-export math types for convenience
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Check that a timestep is usable for one explicit integration step.
///
/// The dynamics engines never clamp `dt`; drivers call this before stepping
/// when the timestep comes from an untrusted source such as a frame timer.
pub fn validate_timestep(dt: f64) -> Result<()> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimestep(dt))
    }
}
