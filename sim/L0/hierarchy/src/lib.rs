//! Hierarchical transform propagation for articulated scenes.
//!
//! A [`Hierarchy`] stores named nodes, each with a local [`Transform`]
//! relative to its parent. Animation code mutates local transforms by name;
//! once per frame [`Hierarchy::update_global_transforms`] recomputes every
//! node's world transform:
//!
//! ```text
//! root:      global = local
//! otherwise: global = parent.global ∘ local
//! ```
//!
//! # Ownership Model
//!
//! Nodes live in a single insertion-ordered arena with a name → [`NodeId`]
//! index. Parents are stored as ids, never pointers, and a parent must be
//! inserted before its children. The arena is therefore always in
//! topological order, and propagation is one forward pass with no sort.
//!
//! ```text
//! index:  0          1             2            3
//!         Tube 1 ─── Tube 1 top    Bird body ── Bird head ...
//!         (root)     parent = 0    (root)       parent = 2
//! ```
//!
//! # Quick Start
//!
//! ```
//! use sim_hierarchy::Hierarchy;
//! use sim_types::Transform;
//! use nalgebra::{UnitQuaternion, Vector3};
//!
//! let mut bird: Hierarchy<&str> = Hierarchy::new();
//! bird.add_root("ellipsoid", "body", Transform::identity()).unwrap();
//! bird.add_child("sphere", "head", "body", Vector3::new(0.45, 0.0, 0.3)).unwrap();
//!
//! // Per frame: animate locals, then propagate.
//! *bird.lookup("body").unwrap() = Transform::from_rotation(
//!     UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.2),
//! );
//! bird.update_global_transforms();
//!
//! let head = bird.global("head").unwrap();
//! assert!(head.translation.z < 0.3);
//! ```
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero rendering dependencies**. A renderer reads
//! [`HierarchyNode::global`] (or [`Transform::to_homogeneous`]) per node.

#![doc(html_root_url = "https://docs.rs/sim-hierarchy/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::uninlined_format_args, clippy::float_cmp))]

pub mod error;
pub mod hierarchy;
pub mod node;

pub use error::{HierarchyError, Result};
pub use hierarchy::Hierarchy;
pub use node::{HierarchyNode, NodeId};
pub use sim_types::Transform;
