//! Sphere collision solver.
//!
//! # Algorithm Overview
//!
//! ```text
//! For each time step:
//!   1. Pairwise pass, unordered pairs (i < j), ascending i then j:
//!      skip if dist == 0 or dist > r_i + r_j
//!      push both spheres apart by depth/2 along u = (p_i - p_j)/dist
//!      |v_j - v_i| <= threshold  → resting: v_i *= damping, v_j *= damping
//!      otherwise                 → swap normal components of v_i and v_j
//!   2. Plane pass, per sphere:
//!      in contact → reflect normal velocity, damp tangential, snap to surface
//!      otherwise  → v = (1 - drag dt) v + dt f / m;  p += dt v
//! ```
//!
//! Pairs are resolved in place, so a sphere's response to pair `(i, j)`
//! already reflects any earlier pair it took part in during the same step.

use nalgebra::Vector3;
use tracing::debug;

use crate::config::CollisionConfig;
use crate::particle::Particle;

/// Counters from one solver step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Overlapping sphere pairs resolved.
    pub pair_contacts: usize,
    /// Of those, pairs treated as resting contact.
    pub resting_contacts: usize,
    /// Of those, pairs that exchanged normal velocity.
    pub impacts: usize,
    /// Spheres in contact with the plane.
    pub plane_contacts: usize,
    /// Coincident pairs skipped (zero separation, no contact normal).
    pub degenerate_pairs: usize,
}

/// Steps a set of free spheres against each other and a static plane.
///
/// # Example
///
/// ```
/// use sim_particles::{Particle, SphereSolver};
/// use nalgebra::Point3;
///
/// let mut particles = vec![
///     Particle::new(Point3::new(0.0, 0.0, 1.0), 0.1, 1.0).unwrap(),
///     Particle::new(Point3::new(0.15, 0.0, 1.0), 0.1, 1.0).unwrap(),
/// ];
///
/// let mut solver = SphereSolver::default();
/// let stats = solver.step(&mut particles, 1.0 / 60.0);
/// assert_eq!(stats.pair_contacts, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SphereSolver {
    config: CollisionConfig,
    stats: StepStats,
}

impl SphereSolver {
    /// Create a solver with the given configuration.
    #[must_use]
    pub const fn new(config: CollisionConfig) -> Self {
        Self {
            config,
            stats: StepStats {
                pair_contacts: 0,
                resting_contacts: 0,
                impacts: 0,
                plane_contacts: 0,
                degenerate_pairs: 0,
            },
        }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Replace the configuration.
    pub const fn set_config(&mut self, config: CollisionConfig) {
        self.config = config;
    }

    /// Counters from the last step.
    #[must_use]
    pub const fn stats(&self) -> &StepStats {
        &self.stats
    }

    /// Advance all particles by `dt` in place.
    ///
    /// `dt` is used as given; callers are responsible for keeping it small.
    pub fn step(&mut self, particles: &mut [Particle], dt: f64) -> StepStats {
        let mut stats = StepStats::default();

        self.resolve_pairs(particles, &mut stats);
        self.apply_plane_and_forces(particles, dt, &mut stats);

        debug!(
            particles = particles.len(),
            pair_contacts = stats.pair_contacts,
            resting = stats.resting_contacts,
            impacts = stats.impacts,
            plane_contacts = stats.plane_contacts,
            "Sphere step"
        );

        self.stats = stats;
        stats
    }

    /// Pairwise overlap resolution over all unordered pairs.
    ///
    /// Each pair is visited once as `(i, j)` with `i < j`, never again as
    /// `(j, i)`, in ascending `i` then ascending `j`.
    pub fn resolve_pairs(&self, particles: &mut [Particle], stats: &mut StepStats) {
        let n = particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = particles.split_at_mut(j);
                self.resolve_pair(&mut head[i], &mut tail[0], stats);
            }
        }
    }

    fn resolve_pair(&self, a: &mut Particle, b: &mut Particle, stats: &mut StepStats) {
        let separation = a.position - b.position;
        let dist = separation.norm();

        if dist == 0.0 {
            stats.degenerate_pairs += 1;
            return;
        }
        if dist > a.radius + b.radius {
            return;
        }

        stats.pair_contacts += 1;

        let u = separation / dist;
        let half_depth = 0.5 * (a.radius + b.radius - dist);
        a.position += u * half_depth;
        b.position -= u * half_depth;

        let relative = b.velocity - a.velocity;
        if relative.norm() <= self.config.rest_threshold {
            stats.resting_contacts += 1;
            a.velocity *= self.config.rest_damping;
            b.velocity *= self.config.rest_damping;
        } else {
            stats.impacts += 1;
            let exchange = u * relative.dot(&u);
            a.velocity += exchange;
            b.velocity -= exchange;
        }
    }

    /// Plane contact for spheres touching the plane, forced motion otherwise.
    pub fn apply_plane_and_forces(
        &self,
        particles: &mut [Particle],
        dt: f64,
        stats: &mut StepStats,
    ) {
        let plane = &self.config.plane;
        let normal: Vector3<f64> = plane.normal.into_inner();

        for particle in particles.iter_mut() {
            let detection = plane.signed_distance(&particle.position);

            if detection <= particle.radius {
                stats.plane_contacts += 1;

                let v_normal = normal * particle.velocity.dot(&normal);
                let v_tangent = particle.velocity - v_normal;
                particle.velocity =
                    v_tangent * self.config.friction_damping - v_normal * self.config.restitution;
                particle.position += normal * (particle.radius - detection);
            } else {
                let force = self.config.gravity.force_on_mass(particle.mass);
                particle.velocity = particle.velocity * (1.0 - self.config.drag * dt)
                    + force * (dt / particle.mass);
                particle.position += particle.velocity * dt;
            }
        }
    }
}

/// Step `particles` by `dt` with the default configuration.
pub fn step(particles: &mut [Particle], dt: f64) -> StepStats {
    SphereSolver::default().step(particles, dt)
}
