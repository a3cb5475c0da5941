//! Cloth state: a square grid of particles.
//!
//! Neighboring samples are joined by quads, each split into two triangles
//! for normal estimation:
//!
//! ```text
//!   (ku, kv+1) ●───● (ku+1, kv+1)
//!              |  /|
//!              | / |
//!              |/  |
//!     (ku, kv) ●───● (ku+1, kv)
//! ```

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DeformableError, Result};
use crate::grid::Grid2D;

/// Per-particle state of a cloth sheet.
///
/// All four grids share the same dimension. `force` is rebuilt from scratch
/// every step, and `normal` is derived from `position`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothState {
    /// Particle positions.
    pub position: Grid2D<Point3<f64>>,
    /// Particle velocities.
    pub velocity: Grid2D<Vector3<f64>>,
    /// Accumulated forces from the last force pass.
    pub force: Grid2D<Vector3<f64>>,
    /// Unit surface normals.
    pub normal: Grid2D<Vector3<f64>>,
}

impl ClothState {
    /// Create a flat sheet at rest.
    ///
    /// Sample `(ku, kv)` sits at
    /// `origin + u_axis * ku / (n - 1) + v_axis * kv / (n - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`DeformableError::InvalidGrid`] if `n_samples_edge < 2`.
    pub fn grid(
        n_samples_edge: usize,
        origin: Point3<f64>,
        u_axis: Vector3<f64>,
        v_axis: Vector3<f64>,
    ) -> Result<Self> {
        if n_samples_edge < 2 {
            return Err(DeformableError::invalid_grid(format!(
                "need at least 2 samples per edge, got {n_samples_edge}"
            )));
        }

        let segments = (n_samples_edge - 1) as f64;
        let position = Grid2D::from_fn(n_samples_edge, |ku, kv| {
            origin + u_axis * (ku as f64 / segments) + v_axis * (kv as f64 / segments)
        });

        let mut state = Self {
            position,
            velocity: Grid2D::new(n_samples_edge, Vector3::zeros()),
            force: Grid2D::new(n_samples_edge, Vector3::zeros()),
            normal: Grid2D::new(n_samples_edge, Vector3::z()),
        };
        state.update_normals();
        Ok(state)
    }

    /// A horizontal unit square centered on the origin, normal `+Z`.
    ///
    /// The sample spacing equals the spring rest length `1 / (n - 1)`.
    pub fn unit_square(n_samples_edge: usize) -> Result<Self> {
        Self::grid(
            n_samples_edge,
            Point3::new(-0.5, -0.5, 0.0),
            Vector3::x(),
            Vector3::y(),
        )
    }

    /// Samples per grid edge.
    #[must_use]
    pub const fn n_samples_edge(&self) -> usize {
        self.position.dimension()
    }

    /// Total number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Whether the cloth has no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Check that `(ku, kv)` lies on the cloth.
    pub fn check_index(&self, ku: usize, kv: usize) -> Result<()> {
        if self.position.index_of(ku, kv).is_none() {
            let n = self.n_samples_edge();
            return Err(DeformableError::index_out_of_bounds(format!(
                "({ku}, {kv}) on a {n}x{n} cloth"
            )));
        }
        Ok(())
    }

    /// Check that all four grids share one dimension of at least 2.
    ///
    /// # Errors
    ///
    /// Returns [`DeformableError::InvalidGrid`] naming the first grid whose
    /// dimension differs from `position`, or if the sheet is smaller than
    /// 2x2.
    pub fn validate(&self) -> Result<()> {
        let n = self.n_samples_edge();
        if n < 2 {
            return Err(DeformableError::invalid_grid(format!(
                "need at least 2 samples per edge, got {n}"
            )));
        }
        for (name, dimension) in [
            ("velocity", self.velocity.dimension()),
            ("force", self.force.dimension()),
            ("normal", self.normal.dimension()),
        ] {
            if dimension != n {
                return Err(DeformableError::invalid_grid(format!(
                    "{name} grid is {dimension}x{dimension}, position grid is {n}x{n}"
                )));
            }
        }
        Ok(())
    }

    /// Recompute vertex normals from the current positions.
    ///
    /// Each vertex normal is the normalized sum of the unnormalized normals
    /// of its adjacent triangles, i.e. an area-weighted average. A vertex
    /// whose triangles are all degenerate keeps `+Z`.
    pub fn update_normals(&mut self) {
        let n = self.n_samples_edge();
        let mut accumulated = Grid2D::new(n, Vector3::zeros());

        for ku in 0..n.saturating_sub(1) {
            for kv in 0..n.saturating_sub(1) {
                let c00 = (ku, kv);
                let c10 = (ku + 1, kv);
                let c11 = (ku + 1, kv + 1);
                let c01 = (ku, kv + 1);

                for [a, b, c] in [[c00, c10, c11], [c00, c11, c01]] {
                    let pa = self.position[a];
                    let weighted = (self.position[b] - pa).cross(&(self.position[c] - pa));
                    accumulated[a] += weighted;
                    accumulated[b] += weighted;
                    accumulated[c] += weighted;
                }
            }
        }

        for (normal, sum) in self
            .normal
            .as_mut_slice()
            .iter_mut()
            .zip(accumulated.iter())
        {
            *normal = sum.try_normalize(1e-12).unwrap_or_else(Vector3::z);
        }
    }

    /// Zero all velocities and forces.
    pub fn clear_dynamics(&mut self) {
        self.velocity.fill(Vector3::zeros());
        self.force.fill(Vector3::zeros());
    }

    /// Check that positions and velocities are free of `NaN`/`Inf`.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position
            .iter()
            .all(|p| p.iter().all(|x| x.is_finite()))
            && self
                .velocity
                .iter()
                .all(|v| v.iter().all(|x| x.is_finite()))
    }

    /// Centroid of all particle positions.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        let sum: Vector3<f64> = self.position.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.len() as f64)
    }
}
