//! The transform hierarchy arena.

use hashbrown::HashMap;
use nalgebra::{UnitQuaternion, Vector3};
use sim_types::Transform;
use tracing::{debug, warn};

use crate::error::{HierarchyError, Result};
use crate::node::{HierarchyNode, NodeId};

/// A tree (or forest) of named nodes with local and global transforms.
///
/// Nodes live in an insertion-ordered `Vec`; a name index gives O(1) lookup.
/// Because a parent must exist before its child is inserted, the arena is
/// always in topological order and a single forward pass propagates
/// transforms.
///
/// # Example
///
/// ```
/// use sim_hierarchy::Hierarchy;
/// use sim_types::Transform;
/// use nalgebra::Vector3;
///
/// let mut hierarchy = Hierarchy::new();
/// hierarchy.add_root((), "base", Transform::identity()).unwrap();
/// hierarchy
///     .add_child((), "arm", "base", Vector3::new(0.0, 0.0, 0.5))
///     .unwrap();
///
/// hierarchy.local_mut("base").unwrap().translation.x = 2.0;
/// hierarchy.update_global_transforms();
///
/// let arm = hierarchy.global("arm").unwrap();
/// assert_eq!(arm.translation, Vector3::new(2.0, 0.0, 0.5));
/// ```
#[derive(Debug, Clone)]
pub struct Hierarchy<T = ()> {
    nodes: Vec<HierarchyNode<T>>,
    index: HashMap<String, NodeId>,
}

impl<T> Default for Hierarchy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Hierarchy<T> {
    /// Create an empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a node.
    ///
    /// `parent` names an already inserted node, or `None` to attach the node
    /// directly to the world frame.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::DuplicateName`] if `name` is taken
    /// - [`HierarchyError::UnknownParent`] if `parent` is given but absent
    ///
    /// The hierarchy is unchanged on error.
    pub fn add(
        &mut self,
        element: T,
        name: impl Into<String>,
        parent: Option<&str>,
        local: Transform,
    ) -> Result<NodeId> {
        let name = name.into();

        if self.index.contains_key(&name) {
            warn!(node = %name, "Rejected duplicate node name");
            return Err(HierarchyError::duplicate_name(name));
        }

        let parent_id = match parent {
            Some(parent_name) => match self.index.get(parent_name) {
                Some(&id) => Some(id),
                None => {
                    warn!(node = %name, parent = parent_name, "Rejected node with unknown parent");
                    return Err(HierarchyError::unknown_parent(name, parent_name));
                }
            },
            None => None,
        };

        // The initial global is only exact for roots; propagation fixes the rest.
        let initial_global = match parent_id {
            Some(pid) => self.nodes[pid.0].global().compose(&local),
            None => local,
        };

        let id = NodeId(self.nodes.len());
        debug!(node = %name, id = id.0, parent = ?parent, "Inserted hierarchy node");

        let mut node = HierarchyNode::new(name.clone(), parent_id, element, local);
        node.set_global(initial_global);
        self.nodes.push(node);
        self.index.insert(name, id);

        Ok(id)
    }

    /// Insert a node attached to the world frame.
    pub fn add_root(
        &mut self,
        element: T,
        name: impl Into<String>,
        local: Transform,
    ) -> Result<NodeId> {
        self.add(element, name, None, local)
    }

    /// Insert a child with a local translation and no rotation.
    pub fn add_child(
        &mut self,
        element: T,
        name: impl Into<String>,
        parent: &str,
        translation: Vector3<f64>,
    ) -> Result<NodeId> {
        self.add(
            element,
            name,
            Some(parent),
            Transform::from_translation(translation),
        )
    }

    /// Insert a child with a local translation and rotation.
    pub fn add_child_with_rotation(
        &mut self,
        element: T,
        name: impl Into<String>,
        parent: &str,
        translation: Vector3<f64>,
        rotation: UnitQuaternion<f64>,
    ) -> Result<NodeId> {
        self.add(
            element,
            name,
            Some(parent),
            Transform::from_translation_rotation(translation, rotation),
        )
    }

    /// Recompute every node's global transform from the local transforms.
    ///
    /// `global = local` for roots, `global = parent.global ∘ local` otherwise.
    /// Parents precede children in the arena, so one forward pass suffices.
    pub fn update_global_transforms(&mut self) {
        for k in 0..self.nodes.len() {
            let global = match self.nodes[k].parent() {
                Some(parent) => self.nodes[parent.0].global().compose(&self.nodes[k].local),
                None => self.nodes[k].local,
            };
            self.nodes[k].set_global(global);
        }
    }

    /// Mutable access to a node's local transform, for animation code.
    ///
    /// # Errors
    ///
    /// [`HierarchyError::NodeNotFound`] if no node has this name.
    pub fn local_mut(&mut self, name: &str) -> Result<&mut Transform> {
        self.node_mut(name).map(|node| &mut node.local)
    }

    /// Alias of [`Hierarchy::local_mut`].
    pub fn lookup(&mut self, name: &str) -> Result<&mut Transform> {
        self.local_mut(name)
    }

    /// A node's local transform.
    pub fn local(&self, name: &str) -> Result<&Transform> {
        self.node(name).map(|node| &node.local)
    }

    /// A node's global transform as of the last propagation pass.
    pub fn global(&self, name: &str) -> Result<&Transform> {
        self.node(name).map(HierarchyNode::global)
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Result<&HierarchyNode<T>> {
        let id = self.id(name)?;
        Ok(&self.nodes[id.0])
    }

    /// Look up a node by name, mutably.
    pub fn node_mut(&mut self, name: &str) -> Result<&mut HierarchyNode<T>> {
        let id = self.id(name)?;
        Ok(&mut self.nodes[id.0])
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node_by_id(&self, id: NodeId) -> Option<&HierarchyNode<T>> {
        self.nodes.get(id.0)
    }

    /// Resolve a name to its id.
    pub fn id(&self, name: &str) -> Result<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| HierarchyError::not_found(name))
    }

    /// Name of a node's parent, `None` for roots.
    pub fn parent_of(&self, name: &str) -> Result<Option<&str>> {
        let node = self.node(name)?;
        Ok(node.parent().map(|p| self.nodes[p.0].name()))
    }

    /// Direct children of a node, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .skip(id.0 + 1)
            .filter(move |(_, node)| node.parent() == Some(id))
            .map(|(k, _)| NodeId(k))
    }

    /// Root nodes (attached to the world frame), in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_root())
            .map(|(k, _)| NodeId(k))
    }

    /// Check whether a node with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in insertion (topological) order.
    pub fn iter(&self) -> impl Iterator<Item = &HierarchyNode<T>> {
        self.nodes.iter()
    }
}
