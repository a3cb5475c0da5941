//! Error types for hierarchy construction and lookup.

use thiserror::Error;

/// Structural violations of the hierarchy.
///
/// Insertions that would produce a malformed tree are rejected and leave the
/// hierarchy unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The requested parent has not been inserted (yet).
    #[error("node '{name}' references unknown parent '{parent}'")]
    UnknownParent {
        /// Name of the node being inserted.
        name: String,
        /// Name of the missing parent.
        parent: String,
    },

    /// A node with this name already exists.
    #[error("duplicate node name: '{0}'")]
    DuplicateName(String),

    /// No node with this name.
    #[error("node not found: '{0}'")]
    NodeNotFound(String),
}

impl HierarchyError {
    /// Create an unknown parent error.
    pub fn unknown_parent(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnknownParent {
            name: name.into(),
            parent: parent.into(),
        }
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Create a node not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NodeNotFound(name.into())
    }
}

/// Result type for hierarchy operations.
pub type Result<T> = std::result::Result<T, HierarchyError>;
