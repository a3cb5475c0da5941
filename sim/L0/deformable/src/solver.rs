//! Mass-spring cloth solver.
//!
//! # Algorithm Overview
//!
//! ```text
//! For each time step:
//!   1. ComputeForce:      f = m g - mu m v + Σ springs + wind     (m = M / N)
//!   2. Integrate:         v += dt f / m';  p += dt v              (m' = M / N_edge)
//!   3. ApplyConstraints:  p = target for every pinned sample
//!   4. DetectDivergence:  first NaN force, |f| > 600 or NaN position
//! ```
//!
//! Springs connect each sample to the 12 neighbors of a fixed stencil:
//!
//! ```text
//!             (0,2)
//!      (-1,1) (0,1) (1,1)
//! (-2,0)(-1,0)  ●  (1,0)(2,0)
//!      (-1,-1)(0,-1)(1,-1)
//!             (0,-2)
//! ```
//!
//! A spring over offset `o` has rest length `L0 |o|` with
//! `L0 = 1 / (N_edge - 1)`. Offsets that leave the grid are skipped, so
//! boundary samples have fewer springs.
//!
//! Forces are computed for every sample before any sample is integrated.

use std::fmt;

use nalgebra::{Point3, Vector3};
use sim_types::SimError;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cloth::ClothState;
use crate::constraints::ClothConstraints;
use crate::grid::Grid2D;
use crate::parameters::ClothParameters;

/// Force magnitude above which a sample is reported as diverged.
pub const DIVERGENCE_FORCE_THRESHOLD: f64 = 600.0;

/// Role of a spring in the stencil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpringKind {
    /// Direct neighbor, resists stretching.
    Structural,
    /// Diagonal neighbor, resists shearing.
    Shear,
    /// Neighbor two samples away, resists bending.
    Bending,
}

/// Neighbor offsets `(du, dv)` of the spring stencil.
pub const SPRING_STENCIL: [(isize, isize, SpringKind); 12] = [
    (-1, 0, SpringKind::Structural),
    (0, 1, SpringKind::Structural),
    (1, 0, SpringKind::Structural),
    (0, -1, SpringKind::Structural),
    (-1, 1, SpringKind::Shear),
    (1, 1, SpringKind::Shear),
    (1, -1, SpringKind::Shear),
    (-1, -1, SpringKind::Shear),
    (-2, 0, SpringKind::Bending),
    (0, 2, SpringKind::Bending),
    (2, 0, SpringKind::Bending),
    (0, -2, SpringKind::Bending),
];

/// Base spacing `L0 = 1 / (N_edge - 1)` between direct neighbors.
#[must_use]
pub fn rest_length(n_samples_edge: usize) -> f64 {
    1.0 / (n_samples_edge as f64 - 1.0)
}

/// Net spring force on one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringContribution {
    /// Sum of the spring forces.
    pub force: Vector3<f64>,
    /// Number of stencil springs that stayed inside the grid.
    pub springs: usize,
}

/// Sum the Hooke forces acting on sample `(ku, kv)`.
///
/// Each in-grid neighbor `q` contributes
/// `K (|q - p| - L0 |o|) (q - p) / |q - p|`. Coincident neighbors produce
/// `NaN`, which divergence detection reports.
#[must_use]
pub fn spring_force_at(
    positions: &Grid2D<Point3<f64>>,
    ku: usize,
    kv: usize,
    stiffness: f64,
) -> SpringContribution {
    let l0 = rest_length(positions.dimension());
    let p = positions[(ku, kv)];

    let mut force = Vector3::zeros();
    let mut springs = 0;
    for &(du, dv, _) in &SPRING_STENCIL {
        let Some(neighbor) = positions.offset(ku, kv, du, dv) else {
            continue;
        };
        let delta = positions[neighbor] - p;
        let dist = delta.norm();
        let rest = l0 * ((du * du + dv * dv) as f64).sqrt();
        force += delta * (stiffness * (dist - rest) / dist);
        springs += 1;
    }

    SpringContribution { force, springs }
}

/// Rebuild the force grid from gravity, drag, springs and wind.
///
/// Wind uses the normals stored in `state`, i.e. those of the previous step.
pub fn compute_force(state: &mut ClothState, params: &ClothParameters) {
    let ClothState {
        position,
        velocity,
        force,
        normal,
    } = state;

    let n = position.dimension();
    let m = params.force_mass(position.len());
    let weight = params.gravity.force_on_mass(m);
    let drag = params.damping * m;

    for ku in 0..n {
        for kv in 0..n {
            let springs = spring_force_at(position, ku, kv, params.stiffness);
            force[(ku, kv)] = weight - velocity[(ku, kv)] * drag
                + springs.force
                + params.wind.force_on(&normal[(ku, kv)]);
        }
    }
}

/// Semi-implicit Euler on every sample: velocity first, then position.
pub fn integrate(state: &mut ClothState, params: &ClothParameters, dt: f64) {
    let inv_m = 1.0 / params.integration_mass(state.n_samples_edge());

    let positions = state.position.as_mut_slice();
    let velocities = state.velocity.as_mut_slice();
    let forces = state.force.as_slice();

    for ((p, v), f) in positions.iter_mut().zip(velocities.iter_mut()).zip(forces) {
        *v += f * (dt * inv_m);
        *p += *v * dt;
    }
}

/// Overwrite every pinned sample with its target position.
///
/// Pins outside the grid are ignored. Velocities are left untouched.
pub fn apply_constraints(state: &mut ClothState, constraints: &ClothConstraints) {
    for ((ku, kv), target) in constraints.iter_fixed() {
        if let Some(p) = state.position.get_mut(ku, kv) {
            *p = *target;
        }
    }
}

/// What tripped divergence detection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivergenceKind {
    /// A force component is `NaN`.
    NanForce,
    /// Force magnitude above [`DIVERGENCE_FORCE_THRESHOLD`].
    StrongForce {
        /// Offending magnitude.
        magnitude: f64,
    },
    /// A position component is `NaN`.
    NanPosition,
}

/// First diverged sample found in a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Divergence {
    vertex: usize,
    coords: (usize, usize),
    kind: DivergenceKind,
}

impl Divergence {
    /// Row-major index of the sample.
    #[must_use]
    pub const fn vertex(&self) -> usize {
        self.vertex
    }

    /// Grid coordinates `(ku, kv)` of the sample.
    #[must_use]
    pub const fn coords(&self) -> (usize, usize) {
        self.coords
    }

    /// What was detected.
    #[must_use]
    pub const fn kind(&self) -> DivergenceKind {
        self.kind
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DivergenceKind::NanForce => write!(f, "NaN detected in forces at vertex {}", self.vertex),
            DivergenceKind::StrongForce { magnitude } => write!(
                f,
                "strong force magnitude {magnitude} detected at vertex {}",
                self.vertex
            ),
            DivergenceKind::NanPosition => {
                write!(f, "NaN detected in positions at vertex {}", self.vertex)
            }
        }
    }
}

impl From<Divergence> for SimError {
    fn from(divergence: Divergence) -> Self {
        Self::diverged(divergence.to_string())
    }
}

/// Scan samples in row-major order and report the first divergence.
///
/// Read-only: the state is not corrected. Emits one warning on a hit.
#[must_use]
pub fn detect_divergence(state: &ClothState) -> Option<Divergence> {
    let hit = state
        .force
        .iter()
        .zip(state.position.iter())
        .enumerate()
        .find_map(|(vertex, (f, p))| {
            let magnitude = f.norm();
            let kind = if magnitude.is_nan() {
                DivergenceKind::NanForce
            } else if magnitude > DIVERGENCE_FORCE_THRESHOLD {
                DivergenceKind::StrongForce { magnitude }
            } else if p.iter().any(|x| x.is_nan()) {
                DivergenceKind::NanPosition
            } else {
                return None;
            };
            Some(Divergence {
                vertex,
                coords: state.position.coords_of(vertex),
                kind,
            })
        })?;

    warn!(
        vertex = hit.vertex,
        ku = hit.coords.0,
        kv = hit.coords.1,
        "Cloth diverged: {hit}"
    );
    Some(hit)
}
