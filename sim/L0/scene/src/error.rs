//! Error types for scene drivers.

use sim_deformable::DeformableError;
use sim_hierarchy::HierarchyError;
use sim_types::SimError;
use thiserror::Error;

/// Errors raised while building or running a scene.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// Hierarchy construction or lookup failed.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    /// Timestep, particle or divergence error from the dynamics.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Cloth setup failed.
    #[error(transparent)]
    Deformable(#[from] DeformableError),

    /// Scene configuration error.
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
}

impl SceneError {
    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Check if this error reports a diverged simulation.
    #[must_use]
    pub fn is_diverged(&self) -> bool {
        matches!(self, Self::Sim(err) if err.is_diverged())
    }
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
