//! Rigid sphere collision for particle fountains.
//!
//! Each sphere has a position, velocity, mass and radius. A step resolves
//! sphere-sphere overlaps pairwise, then applies plane contact or forced
//! free flight to every sphere:
//!
//! ```text
//! sphere-sphere:  positional correction + resting damping / velocity exchange
//! sphere-plane:   restitution on v_n, friction damping on v_t, snap to surface
//! free flight:    v' = (1 - drag dt) v + dt f / m,   p' = p + dt v'
//! ```
//!
//! The pairwise pass is O(n²) with no broad phase. It is meant for scenes
//! of a few hundred spheres.
//!
//! # Quick Start
//!
//! ```
//! use sim_particles::{CollisionConfig, Particle, SphereSolver};
//! use nalgebra::{Point3, Vector3};
//!
//! let mut particles = vec![
//!     Particle::new(Point3::new(0.0, 0.0, 0.5), 0.1, 1.0)
//!         .unwrap()
//!         .with_velocity(Vector3::new(0.0, 0.0, 2.0)),
//! ];
//!
//! let mut solver = SphereSolver::new(CollisionConfig::default());
//! for _ in 0..600 {
//!     solver.step(&mut particles, 1.0 / 60.0);
//! }
//!
//! // The sphere has come to rest on the ground plane at z = -1.1.
//! assert!(particles[0].position.z > -1.1);
//! assert!(particles[0].velocity.norm() < 0.5);
//! ```
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero rendering dependencies**.

#![doc(html_root_url = "https://docs.rs/sim-particles/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc, clippy::suboptimal_flops)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::float_cmp))]

pub mod config;
pub mod particle;
pub mod solver;

pub use config::CollisionConfig;
pub use particle::Particle;
pub use sim_types::{Gravity, Plane, Result, SimError};
pub use solver::{SphereSolver, StepStats, step};
