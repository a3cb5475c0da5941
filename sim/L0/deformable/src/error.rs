//! Error types for cloth simulation.

use thiserror::Error;

/// Errors that can occur while setting up a cloth simulation.
///
/// Numerical blow-up during stepping is not an error; it is reported through
/// [`Divergence`](crate::Divergence).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeformableError {
    /// Grid dimensions cannot carry a cloth (fewer than two samples per edge).
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Grid coordinates outside the cloth.
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(String),

    /// Configuration error (e.g., negative stiffness).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DeformableError {
    /// Create an invalid grid error.
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Create an index out of bounds error.
    pub fn index_out_of_bounds(msg: impl Into<String>) -> Self {
        Self::IndexOutOfBounds(msg.into())
    }

    /// Create an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for cloth operations.
pub type Result<T> = std::result::Result<T, DeformableError>;
