//! Forest.

mod debug_print;
mod node;
pub mod traverse;

use alloc::vec::Vec;

use crate::error::{Result, TreeError};
use crate::hierarchy::{Hierarchy, Neighbors};
use crate::NodeId;

pub use self::debug_print::DebugPrint;
pub use self::node::{Node, NodeMut};

/// Child to add under a parent node.
///
/// A child is either a node that already exists in the forest, or a value
/// that will be wrapped into a freshly created node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Child<T> {
    /// An existing node.
    Node(NodeId),
    /// A value to be wrapped into a new node.
    Value(T),
}

/// Forest.
///
/// The arena that owns every node. A node without a parent is the root of
/// its own tree, so a forest can hold any number of independent trees.
#[derive(Debug, Clone)]
pub struct Forest<T> {
    /// Hierarchy.
    hierarchy: Hierarchy,
    /// Data.
    ///
    /// `None` is used for discarded nodes.
    data: Vec<Option<T>>,
    /// Number of nodes that are not discarded.
    len: usize,
}

impl<T> Forest<T> {
    /// Creates a new empty forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    ///
    /// let id = forest.create_root(42);
    /// assert_eq!(forest.data(id).copied(), Some(42));
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live nodes in the forest.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the forest has no live nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the node exists and is not yet discarded.
    #[must_use]
    fn is_alive(&self, id: NodeId) -> bool {
        self.data
            .get(id.index())
            .map_or(false, |entry| entry.is_some())
    }

    /// Returns the node ID back if the node is alive.
    fn alive(&self, id: NodeId) -> Result<NodeId> {
        if self.is_alive(id) {
            Ok(id)
        } else {
            tracing::debug!(node = %id, "node is not alive");
            Err(TreeError::NodeNotFound(id))
        }
    }

    /// Returns a [proxy object][`Node`] to the node.
    ///
    /// Returns `None` if the node does not exist or has been discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let id = forest.create_root(42);
    ///
    /// let node = forest.node(id).expect("should never fail: node exists");
    ///
    /// assert_eq!(*node.data(), 42);
    /// assert!(
    ///     node.parent_id().is_none(),
    ///     "the root node does not have a parent"
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<Node<'_, T>> {
        Node::new(self, id)
    }

    /// Returns a [proxy object][`NodeMut`] to the mutable node.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let id = forest.create_root(42);
    ///
    /// let mut node = forest.node_mut(id).expect("should never fail: node exists");
    /// *node.data_mut() = 314;
    /// let child = node.create_child(141421356);
    ///
    /// assert_eq!(forest.data(id).copied(), Some(314));
    /// assert_eq!(forest.data(child).copied(), Some(141421356));
    /// ```
    #[inline]
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_, T>> {
        NodeMut::new(self, id)
    }

    /// Returns a reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.data.get(id.index()).and_then(|entry| entry.as_ref())
    }

    /// Returns a mutable reference to the data associated to the node.
    #[inline]
    #[must_use]
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.data.get_mut(id.index()).and_then(|entry| entry.as_mut())
    }

    /// Returns a reference to the neighbors data associated to the node.
    #[inline]
    #[must_use]
    fn neighbors(&self, id: NodeId) -> Option<&Neighbors> {
        self.hierarchy.neighbors(id)
    }

    /// Creates a new root node, i.e. a tree with a single node.
    ///
    /// # Panics
    ///
    /// Panics if the node ID overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root("root");
    ///
    /// let node = forest.node(root).expect("should never fail: node exists");
    /// assert!(node.parent_id().is_none());
    /// assert!(node.first_child_id().is_none());
    /// ```
    pub fn create_root(&mut self, data: T) -> NodeId {
        let new_id = self.hierarchy.create_root();
        assert_eq!(
            self.data.len(),
            new_id.index(),
            "[consistency] node ID must be able to be used as an index for the vec"
        );
        self.data.push(Some(data));
        self.len += 1;
        tracing::trace!(node = %new_id, "created node");

        new_id
    }

    /// Adds the child as the last child of `parent`.
    ///
    /// [`Child::Value`] is wrapped into a new node. [`Child::Node`] is moved
    /// together with its subtree: if it is attached somewhere else, it is
    /// detached from there first.
    ///
    /// Returns the node ID of the added child.
    ///
    /// # Errors
    ///
    /// * [`TreeError::NodeNotFound`]
    ///     + In case `parent` or the child node is not alive.
    /// * [`TreeError::DuplicateDescendant`]
    ///     + In case the child node is already a descendant of `parent`, at
    ///       any depth.
    /// * [`TreeError::AncestorDescendantLoop`]
    ///     + In case the child node is `parent` itself or an ancestor of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::{Child, Forest, TreeError};
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root(1);
    /// let child = forest.add_child(root, Child::Value(2))?;
    ///
    /// assert_eq!(
    ///     forest.add_child(root, Child::Node(child)),
    ///     Err(TreeError::DuplicateDescendant)
    /// );
    /// # Ok::<_, TreeError>(())
    /// ```
    pub fn add_child(&mut self, parent: NodeId, child: Child<T>) -> Result<NodeId> {
        let parent = self.alive(parent)?;
        let child = match child {
            Child::Value(data) => self.create_root(data),
            Child::Node(id) => {
                let id = self.alive(id)?;
                if self.hierarchy.is_descendant(parent, id) {
                    tracing::debug!(%parent, child = %id, "child is already a descendant");
                    return Err(TreeError::DuplicateDescendant);
                }
                if id == parent || self.hierarchy.is_descendant(id, parent) {
                    tracing::debug!(%parent, child = %id, "child is an ancestor of the parent");
                    return Err(TreeError::AncestorDescendantLoop);
                }
                self.hierarchy.detach(id);
                id
            }
        };

        self.hierarchy.append_child(parent, child);
        tracing::trace!(%parent, %child, "appended child");

        Ok(child)
    }

    /// Creates a node with the given data as the last child of `parent`.
    ///
    /// Equivalent to `self.add_child(parent, Child::Value(data))`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if `parent` is not alive.
    #[inline]
    pub fn create_child(&mut self, parent: NodeId, data: T) -> Result<NodeId> {
        self.add_child(parent, Child::Value(data))
    }

    /// Returns true if `node` is a descendant of `ancestor` at any depth.
    ///
    /// Nodes are compared by identity, not by value, and a node is not a
    /// descendant of itself. Returns false if either node is not alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root(1);
    /// let branch = forest.create_child(root, 2)?;
    /// let leaf = forest.create_child(branch, 4)?;
    ///
    /// assert!(forest.is_descendant(root, leaf));
    /// assert!(!forest.is_descendant(leaf, root));
    /// assert!(!forest.is_descendant(root, root));
    /// # Ok::<_, dfselect::TreeError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn is_descendant(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.hierarchy.is_descendant(ancestor, node)
    }

    /// Removes `child` from the immediate children of `parent`.
    ///
    /// The removed node keeps its own subtree and becomes a root, so it can
    /// be added somewhere else later, or [discarded][`Self::discard`].
    ///
    /// # Errors
    ///
    /// * [`TreeError::NodeNotFound`]
    ///     + In case `parent` or `child` is not alive.
    /// * [`TreeError::NotImmediateChild`]
    ///     + In case `child` is not an immediate child of `parent`. Deeper
    ///       descendants are not removable through their ancestors.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::{Forest, TreeError};
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root(1);
    /// let branch = forest.create_child(root, 2)?;
    /// let leaf = forest.create_child(branch, 4)?;
    ///
    /// assert_eq!(
    ///     forest.remove_child(root, leaf),
    ///     Err(TreeError::NotImmediateChild)
    /// );
    /// forest.remove_child(branch, leaf)?;
    /// assert!(!forest.is_descendant(root, leaf));
    /// # Ok::<_, TreeError>(())
    /// ```
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent = self.alive(parent)?;
        let child = self.alive(child)?;
        let actual_parent = self
            .neighbors(child)
            .expect("[validity] the node has been checked to be alive")
            .parent();
        if actual_parent != Some(parent) {
            tracing::debug!(%parent, %child, "node is not an immediate child");
            return Err(TreeError::NotImmediateChild);
        }

        self.hierarchy.detach(child);
        tracing::trace!(%parent, %child, "removed child");

        Ok(())
    }

    /// Collects the data of the nodes under `root` (inclusive) that the
    /// filter accepts.
    ///
    /// See [`Node::df_select`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if `root` is not alive.
    pub fn df_select<F>(&self, root: NodeId, filter: F) -> Result<Vec<&T>>
    where
        F: FnMut(&T, usize) -> bool,
    {
        let root = self.alive(root)?;
        let node = self
            .node(root)
            .expect("[validity] the node has been checked to be alive");
        Ok(node.df_select(filter))
    }

    /// Discards the node and all of its descendants from the forest.
    ///
    /// The node is detached first if it has a parent. IDs of the discarded
    /// nodes become invalid and will never be reused.
    ///
    /// Returns the data of `root`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if `root` is not alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfselect::{Forest, TreeError};
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.create_root("root");
    /// let branch = forest.create_child(root, "branch")?;
    /// let leaf = forest.create_child(branch, "leaf")?;
    ///
    /// assert_eq!(forest.discard(branch), Ok("branch"));
    /// assert_eq!(forest.len(), 1);
    /// assert!(forest.node(leaf).is_none());
    /// assert_eq!(forest.discard(leaf), Err(TreeError::NodeNotFound(leaf)));
    /// # Ok::<_, TreeError>(())
    /// ```
    pub fn discard(&mut self, root: NodeId) -> Result<T> {
        let root = self.alive(root)?;
        let removed = self.hierarchy.remove_subtree(root);
        tracing::trace!(node = %root, count = removed.len(), "discarded subtree");

        let mut root_data = None;
        for id in removed {
            let data = self.data[id.index()]
                .take()
                .expect("[consistency] nodes in a live subtree must have data");
            self.len -= 1;
            if id == root {
                root_data = Some(data);
            }
        }

        Ok(root_data.expect("[consistency] the root is the first removed node"))
    }
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self {
            hierarchy: Default::default(),
            data: Default::default(),
            len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_tracks_creation_and_discard() {
        let mut forest = Forest::new();
        assert!(forest.is_empty());

        let root = forest.create_root(0);
        let child = forest.create_child(root, 1).expect("root is alive");
        forest.create_child(child, 2).expect("child is alive");
        let other = forest.create_root(3);
        assert_eq!(forest.len(), 4);

        assert_eq!(forest.discard(child), Ok(1));
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.discard(other), Ok(3));
        assert_eq!(forest.discard(root), Ok(0));
        assert!(forest.is_empty());
    }

    #[test]
    fn value_child_for_dead_parent_creates_nothing() {
        let mut forest = Forest::new();
        let root = forest.create_root(0);
        forest.discard(root).expect("root is alive");

        assert_eq!(
            forest.create_child(root, 1),
            Err(TreeError::NodeNotFound(root))
        );
        assert!(forest.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut forest = Forest::new();
        let first = forest.create_root("first");
        forest.discard(first).expect("node is alive");
        let second = forest.create_root("second");

        assert_ne!(first, second);
        assert_eq!(forest.data(first), None);
        assert_eq!(forest.data(second), Some(&"second"));
    }

    #[test]
    fn self_insertion_is_a_loop() {
        let mut forest = Forest::new();
        let root = forest.create_root(());

        assert_eq!(
            forest.add_child(root, Child::Node(root)),
            Err(TreeError::AncestorDescendantLoop)
        );
    }
}
