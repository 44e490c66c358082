//! Parent, sibling and child links of the nodes in a forest.

pub(crate) mod traverse;

use core::fmt;

use alloc::vec::Vec;

use crate::hierarchy::traverse::{AncestorsTraverser, DepthFirstTraverser, DftEvent};
use crate::NodeId;

/// A forest without custom data tied to nodes.
#[derive(Debug, Clone, Default)]
pub(crate) struct Hierarchy {
    /// Neighbors storage, indexed by node ID.
    neighbors: Vec<Neighbors>,
}

impl Hierarchy {
    /// Creates a new root node.
    ///
    /// # Panics
    ///
    /// Panics if the node ID overflows.
    pub(crate) fn create_root(&mut self) -> NodeId {
        let new_id = NodeId::from_index(self.neighbors.len())
            .expect("[precondition] node ID overflowed presumably due to too many node creations");
        self.neighbors.push(Neighbors::new_root(new_id));

        new_id
    }

    /// Returns a reference to the neighbors for the node if the node is alive.
    ///
    /// Returns `None` if the node ID is invalid or the node has already been removed.
    #[must_use]
    pub(crate) fn neighbors(&self, id: NodeId) -> Option<&Neighbors> {
        self.neighbors.get(id.index()).filter(|v| v.is_alive())
    }

    /// Returns a mutable reference to the neighbors for the node if the node is alive.
    #[must_use]
    fn neighbors_mut(&mut self, id: NodeId) -> Option<&mut Neighbors> {
        self.neighbors
            .get_mut(id.index())
            .filter(|v| v.is_alive())
    }

    /// Returns true if the node is alive.
    #[must_use]
    pub(crate) fn is_alive(&self, id: NodeId) -> bool {
        self.neighbors(id).is_some()
    }

    /// Returns true if `node` is a strict descendant of `ancestor`.
    ///
    /// A node is not a descendant of itself.
    /// Returns false if either node is not alive.
    #[must_use]
    pub(crate) fn is_descendant(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.is_alive(ancestor) || !self.is_alive(node) {
            return false;
        }
        let mut ancestors = AncestorsTraverser::with_start(node);
        // The starting node itself comes first.
        let _ = ancestors.next(self);
        while let Some(id) = ancestors.next(self) {
            if id == ancestor {
                return true;
            }
        }
        false
    }

    /// Appends a detached root to the children of `parent` as the last child.
    ///
    /// ```text
    /// Before:
    ///
    /// parent       new_last
    /// |-- 0        `-- a
    /// `-- 1
    ///
    /// After:
    ///
    /// parent
    /// |-- 0
    /// |-- 1
    /// `-- new_last
    ///     `-- a
    /// ```
    ///
    /// # Panics
    ///
    /// * Panics if any of the given nodes are not alive.
    /// * Panics if `new_last` has a parent.
    /// * Panics if `new_last` and `parent` are identical.
    ///
    /// It is caller's responsibility to ensure `parent` is not a descendant of
    /// `new_last`, since that cannot be detected in O(1).
    pub(crate) fn append_child(&mut self, parent: NodeId, new_last: NodeId) {
        if parent == new_last {
            panic!("[precondition] a node cannot be a child of itself");
        }
        let new_nbs = self
            .neighbors(new_last)
            .expect("[precondition] the new child must be alive");
        if new_nbs.parent.is_some() {
            panic!("[precondition] the new child must be detached before appended");
        }

        let first_child = self
            .neighbors(parent)
            .expect("[precondition] the parent must be alive")
            .first_child;

        match first_child {
            None => {
                self.neighbors_mut(parent)
                    .expect("[precondition] the parent must be alive")
                    .first_child = Some(new_last);
                let new_nbs = self
                    .neighbors_mut(new_last)
                    .expect("[precondition] the new child must be alive");
                new_nbs.parent = Some(parent);
                new_nbs.next_sibling = None;
                new_nbs.prev_sibling_cyclic = Some(new_last);
            }
            Some(first_child) => {
                let old_last = self
                    .neighbors(first_child)
                    .expect("[consistency] children of a live node must also be alive")
                    .prev_sibling_cyclic
                    .expect("[consistency] the first child must be alive");

                self.neighbors_mut(old_last)
                    .expect("[consistency] the last child must be alive")
                    .next_sibling = Some(new_last);
                let new_nbs = self
                    .neighbors_mut(new_last)
                    .expect("[precondition] the new child must be alive");
                new_nbs.parent = Some(parent);
                new_nbs.next_sibling = None;
                new_nbs.prev_sibling_cyclic = Some(old_last);
                // The first child remembers the last child.
                self.neighbors_mut(first_child)
                    .expect("[consistency] the first child must be alive")
                    .prev_sibling_cyclic = Some(new_last);
            }
        }
    }

    /// Detaches the tree from neighbors.
    ///
    /// Tree structure under the given node will be preserved.
    /// The detached node will become a root node.
    ///
    /// ```text
    /// Before `detach`:
    ///
    /// root
    /// |-- 0
    /// |-- 1
    /// |   |-- 1-0
    /// |   `-- 1-1
    /// `-- 2
    ///
    /// After `detach`:
    ///
    /// root
    /// |-- 0
    /// `-- 2
    ///
    /// 1
    /// |-- 1-0
    /// `-- 1-1
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the node is not alive.
    pub(crate) fn detach(&mut self, node: NodeId) {
        let nbs = self
            .neighbors(node)
            .expect("[precondition] the node must be alive");
        // If the node has no parent, the tree can be considered already detached.
        let parent = match nbs.parent {
            Some(v) => v,
            None => return,
        };
        let prev = nbs.prev_sibling(self);
        let next = nbs.next_sibling;
        let prev_cyclic = nbs.prev_sibling_cyclic;

        match (prev, next) {
            // The only child.
            (None, None) => {
                self.neighbors_mut(parent)
                    .expect("[consistency] the parent must be alive")
                    .first_child = None;
            }
            // The first child of several.
            (None, Some(next)) => {
                self.neighbors_mut(parent)
                    .expect("[consistency] the parent must be alive")
                    .first_child = Some(next);
                // `prev_cyclic` of the first child is the last child.
                self.neighbors_mut(next)
                    .expect("[consistency] the next sibling must be alive")
                    .prev_sibling_cyclic = prev_cyclic;
            }
            // The last child of several.
            (Some(prev), None) => {
                self.neighbors_mut(prev)
                    .expect("[consistency] the previous sibling must be alive")
                    .next_sibling = None;
                let first_child = self
                    .neighbors(parent)
                    .expect("[consistency] the parent must be alive")
                    .first_child
                    .expect("[consistency] `parent` must have a child including `node`");
                self.neighbors_mut(first_child)
                    .expect("[consistency] the first child must be alive")
                    .prev_sibling_cyclic = Some(prev);
            }
            // Somewhere in the middle.
            (Some(prev), Some(next)) => {
                self.neighbors_mut(prev)
                    .expect("[consistency] the previous sibling must be alive")
                    .next_sibling = Some(next);
                self.neighbors_mut(next)
                    .expect("[consistency] the next sibling must be alive")
                    .prev_sibling_cyclic = Some(prev);
            }
        }

        // Reset the neighbors info of the node.
        let nbs = self
            .neighbors_mut(node)
            .expect("[precondition] the node must be alive");
        nbs.parent = None;
        nbs.next_sibling = None;
        nbs.prev_sibling_cyclic = Some(node);
    }

    /// Detaches the subtree and marks all the nodes in it removed.
    ///
    /// Returns the IDs of the removed nodes in depth-first pre-order, starting
    /// with `root`.
    ///
    /// # Panics
    ///
    /// Panics if the node is not alive.
    pub(crate) fn remove_subtree(&mut self, root: NodeId) -> Vec<NodeId> {
        self.detach(root);

        let mut removed = Vec::new();
        let mut traverser = DepthFirstTraverser::with_toplevel(root);
        while let Some((ev, _depth)) = traverser.next(self) {
            if let DftEvent::Open(id) = ev {
                removed.push(id);
            }
        }
        // Links are cleared only after the walk, since the walk follows them.
        for &id in &removed {
            self.neighbors_mut(id)
                .expect("[consistency] nodes in the subtree must be alive")
                .make_removed();
        }

        removed
    }
}

/// Neighbors.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Neighbors {
    /// Parent.
    parent: Option<NodeId>,
    /// Cyclic previous sibling.
    ///
    /// `None` if the node has already been removed.
    /// If the node is alive and is the first sibling, node ID of the last sibling.
    /// Otherwise (i.e. the node is alive but is not the first sibling),
    /// node ID of the previous sibling.
    ///
    /// By making this field cyclic, "last child" field becomes unnecessary.
    prev_sibling_cyclic: Option<NodeId>,
    /// Next sibling.
    next_sibling: Option<NodeId>,
    /// First child.
    first_child: Option<NodeId>,
}

impl Neighbors {
    /// Creates a new `Neighbors` that is not connected to anyone.
    #[inline]
    #[must_use]
    fn new_root(id: NodeId) -> Self {
        Self {
            parent: None,
            prev_sibling_cyclic: Some(id),
            next_sibling: None,
            first_child: None,
        }
    }

    /// Returns true if the node is alive.
    #[inline]
    #[must_use]
    fn is_alive(&self) -> bool {
        self.prev_sibling_cyclic.is_some()
    }

    /// Returns the node ID of the parent.
    #[inline]
    #[must_use]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the node ID of the next sibling.
    #[inline]
    #[must_use]
    pub(crate) fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// Returns the node ID of the previous sibling.
    #[must_use]
    pub(crate) fn prev_sibling(&self, hier: &Hierarchy) -> Option<NodeId> {
        let prev_sibling_cyclic = self
            .prev_sibling_cyclic
            .expect("[precondition] the node must be alive");
        let prev_cyc_node = hier
            .neighbors(prev_sibling_cyclic)
            .expect("[consistency] the `prev_sibling_cyclic` node must be alive");

        // If `next_sibling` of the cyclic previous node is available, it is a
        // real previous node. Otherwise it is the last sibling (possibly the
        // node itself) and the node is the first sibling.
        prev_cyc_node.next_sibling.and(Some(prev_sibling_cyclic))
    }

    /// Returns the node ID of the first child.
    #[inline]
    #[must_use]
    pub(crate) fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    /// Returns the node ID of the last child.
    #[must_use]
    pub(crate) fn last_child(&self, hier: &Hierarchy) -> Option<NodeId> {
        let first_child = self.first_child?;
        let last_child = hier
            .neighbors(first_child)
            .expect("[consistency] children of a live node must also be alive")
            .prev_sibling_cyclic;

        match last_child {
            Some(last_child) => Some(last_child),
            None => panic!("[consistency] the last child must be alive"),
        }
    }

    /// Makes the node removed state.
    ///
    /// It is caller's responsibility to keep the hierarchy consistent.
    fn make_removed(&mut self) {
        self.parent = None;
        self.prev_sibling_cyclic = None;
        self.next_sibling = None;
        self.first_child = None;
    }
}

// For compact printing.
impl fmt::Debug for Neighbors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// A wrapper to print optional node ID in compact form.
        #[derive(Clone, Copy)]
        struct OptNodeId<'a>(&'a Option<NodeId>);
        impl fmt::Debug for OptNodeId<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Some(id) => id.fmt(f),
                    None => f.write_str("None"),
                }
            }
        }

        f.debug_struct("Neighbors")
            .field("parent", &OptNodeId(&self.parent))
            .field("prev_sibling_cyclic", &OptNodeId(&self.prev_sibling_cyclic))
            .field("next_sibling", &OptNodeId(&self.next_sibling))
            .field("first_child", &OptNodeId(&self.first_child))
            .finish()
    }
}
