//! Hierarchy nodes and their identifiers.

use sim_types::Transform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a node in its hierarchy's insertion-ordered arena.
///
/// A parent's id is always smaller than any of its children's ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A named node carrying a caller payload and its local/global transforms.
///
/// `element` is whatever the caller attaches to the node (a mesh handle for a
/// renderer, `()` for pure kinematics).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HierarchyNode<T> {
    name: String,
    parent: Option<NodeId>,
    /// Caller payload.
    pub element: T,
    /// Transform relative to the parent frame. Mutated by animation code.
    pub local: Transform,
    global: Transform,
}

impl<T> HierarchyNode<T> {
    pub(crate) fn new(name: String, parent: Option<NodeId>, element: T, local: Transform) -> Self {
        Self {
            name,
            parent,
            element,
            local,
            global: local,
        }
    }

    /// Unique name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent node, `None` for a root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this node hangs directly off the world frame.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// World transform computed by the last propagation pass.
    #[must_use]
    pub const fn global(&self) -> &Transform {
        &self.global
    }

    pub(crate) fn set_global(&mut self, global: Transform) {
        self.global = global;
    }
}
