//! Scene drivers for the hierarchy, sphere and cloth engines.
//!
//! Each driver owns its simulation state and advances it one frame at a
//! time from an explicit [`FrameTime`]:
//!
//! - [`BirdRig`] animates a flappy-bird [`Hierarchy`](sim_hierarchy::Hierarchy)
//! - [`SphereFountain`] emits spheres and steps their collisions
//! - [`HangingCloth`] steps a cloth pinned at two corners and halts on
//!   divergence
//!
//! [`SceneRunner`] runs all three from one [`SimulationClock`].
//!
//! # Quick Start
//!
//! ```
//! use sim_scene::{SceneConfig, SceneRunner};
//!
//! let mut runner = SceneRunner::new(&SceneConfig::default()).unwrap();
//! for _ in 0..10 {
//!     let report = runner.frame(1.0 / 60.0).unwrap();
//!     assert!(report.cloth.is_some());
//! }
//! runner.flap();
//! ```
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero rendering dependencies**. Rendering reads
//! global transforms, sphere positions and cloth positions and normals.

#![doc(html_root_url = "https://docs.rs/sim-scene/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc, clippy::cast_precision_loss)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::float_cmp))]

pub mod bird;
pub mod clock;
pub mod config;
pub mod error;
pub mod fountain;
pub mod hanging_cloth;
pub mod runner;

pub use bird::{BirdPart, BirdRig};
pub use clock::{FrameTime, SimulationClock};
pub use config::{BirdConfig, FountainConfig, HangingClothConfig, SceneConfig};
pub use error::{Result, SceneError};
pub use fountain::SphereFountain;
pub use hanging_cloth::HangingCloth;
pub use runner::{FrameReport, SceneRunner};
