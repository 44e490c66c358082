//! Node.

use alloc::vec::Vec;

use crate::error::{Result, TreeError};
use crate::forest::traverse::{Children, DepthFirstTraverse};
use crate::forest::{Child, DebugPrint, Forest};
use crate::hierarchy::Hierarchy;
use crate::NodeId;

/// Immutable reference to a node.
///
/// This type guarantees that the node ID is present in the forest and is not
/// discarded yet.
#[derive(Debug)]
pub struct Node<'a, T> {
    /// Forest.
    forest: &'a Forest<T>,
    /// Node ID.
    id: NodeId,
}

// Derived impls would require `T: Clone`.
impl<T> Clone for Node<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<'a, T> Node<'a, T> {
    /// Creates a new `Node` object.
    #[must_use]
    pub(super) fn new(forest: &'a Forest<T>, id: NodeId) -> Option<Self> {
        if !forest.is_alive(id) {
            return None;
        }
        Some(Self { forest, id })
    }

    /// Returns the forest the node belongs to.
    #[inline]
    #[must_use]
    pub(super) fn forest(&self) -> &'a Forest<T> {
        self.forest
    }

    /// Returns the hierarchy of the forest.
    #[inline]
    #[must_use]
    pub(super) fn hierarchy(&self) -> &'a Hierarchy {
        &self.forest.hierarchy
    }

    /// Returns the node ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns a reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &'a T {
        self.forest
            .data(self.id)
            .expect("[validity] the node has been checked to be alive")
    }

    /// Returns the node ID of the parent.
    #[must_use]
    pub fn parent_id(&self) -> Option<NodeId> {
        self.forest
            .neighbors(self.id)
            .expect("[validity] the node has been checked to be alive")
            .parent()
    }

    /// Returns the node ID of the next sibling.
    #[must_use]
    pub fn next_sibling_id(&self) -> Option<NodeId> {
        self.forest
            .neighbors(self.id)
            .expect("[validity] the node has been checked to be alive")
            .next_sibling()
    }

    /// Returns the node ID of the previous sibling.
    #[must_use]
    pub fn prev_sibling_id(&self) -> Option<NodeId> {
        self.forest
            .neighbors(self.id)
            .expect("[validity] the node has been checked to be alive")
            .prev_sibling(self.hierarchy())
    }

    /// Returns the node ID of the first child.
    #[must_use]
    pub fn first_child_id(&self) -> Option<NodeId> {
        self.forest
            .neighbors(self.id)
            .expect("[validity] the node has been checked to be alive")
            .first_child()
    }

    /// Returns the node ID of the last child.
    #[must_use]
    pub fn last_child_id(&self) -> Option<NodeId> {
        self.forest
            .neighbors(self.id)
            .expect("[validity] the node has been checked to be alive")
            .last_child(self.hierarchy())
    }

    /// Returns the parent node.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.parent_id()
            .map(|id| Self::new(self.forest, id).expect("[consistency] the parent must be alive"))
    }

    /// Returns the next sibling node.
    #[must_use]
    pub fn next_sibling(&self) -> Option<Self> {
        self.next_sibling_id().map(|id| {
            Self::new(self.forest, id).expect("[consistency] the next sibling must be alive")
        })
    }

    /// Returns the previous sibling node.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<Self> {
        self.prev_sibling_id().map(|id| {
            Self::new(self.forest, id).expect("[consistency] the previous sibling must be alive")
        })
    }

    /// Returns the first child node.
    #[must_use]
    pub fn first_child(&self) -> Option<Self> {
        self.first_child_id().map(|id| {
            Self::new(self.forest, id).expect("[consistency] the first child must be alive")
        })
    }

    /// Returns the last child node.
    #[must_use]
    pub fn last_child(&self) -> Option<Self> {
        self.last_child_id().map(|id| {
            Self::new(self.forest, id).expect("[consistency] the last child must be alive")
        })
    }

    /// Returns an iterator of the immediate children, in insertion order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> Children<'a, T> {
        Children::with_parent(self)
    }

    /// Returns a depth-first pre-order iterator of the subtree.
    ///
    /// Each item is a node and its depth from `self`, which has depth 0.
    /// A node is always visited before its descendants, and siblings are
    /// visited in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root("root");
    /// let a = forest.create_child(root, "a")?;
    /// forest.create_child(a, "a-0")?;
    /// forest.create_child(root, "b")?;
    ///
    /// let node = forest.node(root).expect("should never fail: node exists");
    /// let visited = node
    ///     .depth_first_traverse()
    ///     .map(|(node, depth)| (*node.data(), depth))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(visited, [("root", 0), ("a", 1), ("a-0", 2), ("b", 1)]);
    /// # Ok::<_, dfselect::TreeError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn depth_first_traverse(&self) -> DepthFirstTraverse<'a, T> {
        DepthFirstTraverse::with_toplevel(self)
    }

    /// Returns true if the given node is a descendant of this node.
    ///
    /// Nodes are compared by identity. A node is not its own descendant.
    #[inline]
    #[must_use]
    pub fn is_descendant(&self, node: NodeId) -> bool {
        self.forest.is_descendant(self.id, node)
    }

    /// Selects data in the subtree with the filter, in depth-first pre-order.
    ///
    /// `filter` is called exactly once for every node of the subtree
    /// (including `self`) with the node's data and its depth from `self`,
    /// which has depth 0. The data of the nodes it accepts are returned in
    /// visitation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root(1);
    /// let branch2 = forest.create_child(root, 2)?;
    /// let branch3 = forest.create_child(root, 3)?;
    /// forest.create_child(branch2, 4)?;
    /// forest.create_child(branch2, 5)?;
    /// forest.create_child(branch3, 6)?;
    /// forest.create_child(branch3, 7)?;
    ///
    /// let root = forest.node(root).expect("should never fail: node exists");
    /// assert_eq!(root.df_select(|value, _depth| value % 2 == 1), [&1, &5, &3, &7]);
    /// assert_eq!(root.df_select(|_value, depth| depth == 1), [&2, &3]);
    /// # Ok::<_, dfselect::TreeError>(())
    /// ```
    pub fn df_select<F>(&self, mut filter: F) -> Vec<&'a T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.depth_first_traverse()
            .map(|(node, depth)| (node.data(), depth))
            .filter(|&(data, depth)| filter(data, depth))
            .map(|(data, _depth)| data)
            .collect()
    }

    /// Returns a wrapper that prints the subtree in a tree shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root("root");
    /// let a = forest.create_child(root, "a")?;
    /// forest.create_child(a, "a-0")?;
    /// forest.create_child(root, "b")?;
    ///
    /// let node = forest.node(root).expect("should never fail: node exists");
    /// assert_eq!(
    ///     node.debug_print().to_string(),
    ///     "root\n|-- a\n|   `-- a-0\n`-- b"
    /// );
    /// # Ok::<_, dfselect::TreeError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn debug_print(&self) -> DebugPrint<'a, T> {
        DebugPrint::new(*self)
    }
}

/// Mutable reference to a node.
///
/// This type guarantees that the node ID is present in the forest and is not
/// discarded yet.
#[derive(Debug)]
pub struct NodeMut<'a, T> {
    /// Forest.
    forest: &'a mut Forest<T>,
    /// Node ID.
    id: NodeId,
}

impl<'a, T> NodeMut<'a, T> {
    /// Creates a new `NodeMut` object.
    #[must_use]
    pub(super) fn new(forest: &'a mut Forest<T>, id: NodeId) -> Option<Self> {
        if !forest.is_alive(id) {
            return None;
        }
        Some(Self { forest, id })
    }

    /// Returns the node ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns an immutable proxy to the same node.
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Node<'_, T> {
        Node::new(self.forest, self.id).expect("[validity] the node has been checked to be alive")
    }

    /// Returns a reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &T {
        self.forest
            .data(self.id)
            .expect("[validity] the node has been checked to be alive")
    }

    /// Returns a mutable reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        self.forest
            .data_mut(self.id)
            .expect("[validity] the node has been checked to be alive")
    }

    /// Adds the child as the last child of this node.
    ///
    /// See [`Forest::add_child`].
    ///
    /// # Errors
    ///
    /// * [`TreeError::NodeNotFound`]
    ///     + In case the child node is not alive.
    /// * [`TreeError::DuplicateDescendant`]
    ///     + In case the child node is already a descendant of this node.
    /// * [`TreeError::AncestorDescendantLoop`]
    ///     + In case the child node is this node or one of its ancestors.
    #[inline]
    pub fn add_child(&mut self, child: Child<T>) -> Result<NodeId> {
        self.forest.add_child(self.id, child)
    }

    /// Creates a node with the given data as the last child of this node.
    ///
    /// Returns the node ID of the new child.
    pub fn create_child(&mut self, data: T) -> NodeId {
        self.forest
            .create_child(self.id, data)
            .expect("[validity] the node has been checked to be alive")
    }

    /// Removes the given immediate child of this node.
    ///
    /// See [`Forest::remove_child`].
    ///
    /// # Errors
    ///
    /// * [`TreeError::NodeNotFound`]
    ///     + In case `child` is not alive.
    /// * [`TreeError::NotImmediateChild`]
    ///     + In case `child` is not an immediate child of this node.
    #[inline]
    pub fn remove_child(&mut self, child: NodeId) -> Result<(), TreeError> {
        self.forest.remove_child(self.id, child)
    }
}
