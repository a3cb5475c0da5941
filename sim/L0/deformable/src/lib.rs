//! Mass-spring cloth simulation on a square particle grid.
//!
//! A cloth is an `N_edge × N_edge` grid of particles. Each particle is tied
//! to up to 12 neighbors by linear springs (structural, shear and bending)
//! and feels gravity, linear drag and a wind force along its surface normal.
//!
//! # Step
//!
//! ```text
//! ComputeForce → Integrate → ApplyConstraints → DetectDivergence
//! ```
//!
//! - **ComputeForce** rebuilds every force from scratch.
//! - **Integrate** is semi-implicit Euler per particle.
//! - **ApplyConstraints** forces pinned particles onto their targets.
//! - **DetectDivergence** reports the first `NaN` or force blow-up. It never
//!   corrects or halts; the caller decides whether to stop or reset.
//!
//! Normals are refreshed after each step and feed the next step's wind.
//!
//! # Quick Start
//!
//! ```
//! use sim_deformable::{ClothConstraints, ClothParameters, ClothSimulation, ClothState, Wind};
//! use nalgebra::Vector3;
//!
//! let state = ClothState::unit_square(20).unwrap();
//! let mut constraints = ClothConstraints::new();
//! constraints.pin_current(&state, 0, 19).unwrap();
//! constraints.pin_current(&state, 19, 19).unwrap();
//!
//! let params = ClothParameters::default().with_wind(Wind::new(Vector3::x(), 2.0));
//! let mut cloth = ClothSimulation::new(state, params, constraints).unwrap();
//!
//! let outcome = cloth.step(1.0 / 60.0);
//! if let Some(divergence) = outcome.divergence {
//!     eprintln!("stopping: {divergence}");
//! }
//! ```
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering dependencies**. A renderer reads
//! [`ClothState::position`] and [`ClothState::normal`] after each step.

#![doc(html_root_url = "https://docs.rs/sim-deformable/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
// Allow precision loss when converting indices to f64 - these are small values
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc, clippy::suboptimal_flops)]
// Test-related lints - these are style preferences
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::float_cmp))]

pub mod cloth;
pub mod constraints;
pub mod error;
pub mod grid;
pub mod parameters;
pub mod simulation;
pub mod solver;

pub use cloth::ClothState;
pub use constraints::ClothConstraints;
pub use error::{DeformableError, Result};
pub use grid::Grid2D;
pub use parameters::{ClothParameters, Wind};
pub use simulation::{ClothSimulation, ClothStepOutcome};
pub use solver::{
    DIVERGENCE_FORCE_THRESHOLD, Divergence, DivergenceKind, SPRING_STENCIL, SpringContribution,
    SpringKind, apply_constraints, compute_force, detect_divergence, integrate, rest_length,
    spring_force_at,
};
