//! Integration tests for the sim-* crate ecosystem.
//!
//! These tests exercise the crates together through their public APIs:
//! - Hierarchy building → global transform propagation
//! - Sphere sets → pair and plane contact resolution
//! - Cloth grids → forces, pins and divergence detection
//! - Scene drivers → deterministic multi-frame runs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

pub mod cloth_pipeline;
pub mod hierarchy_pipeline;
pub mod scene_pipeline;
pub mod sphere_contacts;
pub mod test_utils;
