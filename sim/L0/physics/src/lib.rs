//! Unified simulation API.
//!
//! This crate re-exports the complete stack:
//!
//! - [`sim_types`] - Core data types (transform, plane, gravity, errors)
//! - [`sim_hierarchy`] - Name-indexed transform hierarchy
//! - [`sim_particles`] - Rigid sphere collision
//! - [`sim_deformable`] - Mass-spring cloth
//! - [`sim_scene`] - Scene drivers (clock, bird rig, fountain, hanging cloth)
//!
//! # Quick Start
//!
//! ```
//! use sim_physics::prelude::*;
//!
//! // Articulated chain
//! let mut arm: Hierarchy<()> = Hierarchy::new();
//! arm.add_root((), "base", Transform::identity()).unwrap();
//! arm.add_child((), "link", "base", Vector3::new(1.0, 0.0, 0.0)).unwrap();
//! arm.update_global_transforms();
//!
//! // Spheres
//! let mut spheres = vec![Particle::new(Point3::new(0.0, 0.0, 1.0), 0.1, 1.0).unwrap()];
//! SphereSolver::default().step(&mut spheres, 1.0 / 60.0);
//!
//! // Cloth
//! let state = ClothState::unit_square(10).unwrap();
//! let mut cloth =
//!     ClothSimulation::new(state, ClothParameters::default(), ClothConstraints::new()).unwrap();
//! let outcome = cloth.step(1.0 / 60.0);
//! assert!(!outcome.is_diverged());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      sim-physics (this crate)                   │
//! │                     Unified API / re-exports                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//!                                  ▼
//!                        ┌─────────────────┐
//!                        │    sim-scene    │
//!                        │  Scene drivers  │
//!                        └────────┬────────┘
//!          ┌──────────────────────┼───────────────────────┐
//!          ▼                      ▼                       ▼
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │  sim-hierarchy  │   │  sim-particles  │   │ sim-deformable  │
//! │   Transforms    │   │ Sphere contacts │   │      Cloth      │
//! └────────┬────────┘   └────────┬────────┘   └────────┬────────┘
//!          └──────────────────────┼───────────────────────┘
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │    sim-types    │
//!                        │  Data structs   │
//!                        └─────────────────┘
//! ```

#![doc(html_root_url = "https://docs.rs/sim-physics/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

// Re-export sub-crates
pub use sim_deformable;
pub use sim_hierarchy;
pub use sim_particles;
pub use sim_scene;
pub use sim_types;

// Re-export nalgebra for convenience
pub use nalgebra;

/// Prelude module for convenient imports.
///
/// ```
/// use sim_physics::prelude::*;
/// ```
pub mod prelude {
    // ========================================================================
    // Core types from sim-types
    // ========================================================================

    pub use sim_types::{Gravity, Plane, SimError, Transform, validate_timestep};

    // ========================================================================
    // Hierarchy from sim-hierarchy
    // ========================================================================

    pub use sim_hierarchy::{Hierarchy, HierarchyError, HierarchyNode, NodeId};

    // ========================================================================
    // Sphere collision from sim-particles
    // ========================================================================

    pub use sim_particles::{CollisionConfig, Particle, SphereSolver, StepStats};

    // ========================================================================
    // Cloth from sim-deformable
    // ========================================================================

    pub use sim_deformable::{
        ClothConstraints, ClothParameters, ClothSimulation, ClothState, ClothStepOutcome,
        DeformableError, Divergence, DivergenceKind, Grid2D, Wind,
    };

    // ========================================================================
    // Scenes from sim-scene
    // ========================================================================

    pub use sim_scene::{
        BirdConfig, BirdPart, BirdRig, FountainConfig, FrameReport, FrameTime, HangingCloth,
        HangingClothConfig, SceneConfig, SceneError, SceneRunner, SimulationClock,
        SphereFountain,
    };

    // ========================================================================
    // Math types from nalgebra
    // ========================================================================

    pub use nalgebra::{Point3, UnitQuaternion, Vector3};
}
