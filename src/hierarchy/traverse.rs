//! Tree traversal over the raw links.

use crate::hierarchy::Hierarchy;
use crate::NodeId;

/// Depth-first traversal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DftEvent {
    /// Node open.
    Open(NodeId),
    /// Node close.
    Close(NodeId),
}

/// Forward depth-first tree traverser that tracks depth.
///
/// The toplevel node has depth 0, and both events of a node carry the same
/// depth.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepthFirstTraverser {
    /// Toplevel node of the traversal.
    toplevel: NodeId,
    /// Next event to emit, and its depth.
    next: Option<(DftEvent, usize)>,
}

impl DepthFirstTraverser {
    /// Creates a traverser from a toplevel node.
    ///
    /// The toplevel does not need to be the root of a tree.
    #[must_use]
    pub(crate) fn with_toplevel(id: NodeId) -> Self {
        Self {
            toplevel: id,
            next: Some((DftEvent::Open(id), 0)),
        }
    }

    /// Traverses the tree forward and returns the next node event.
    pub(crate) fn next(&mut self, hier: &Hierarchy) -> Option<(DftEvent, usize)> {
        let next = self.next?;
        self.next = self.next_of(next, hier);
        Some(next)
    }

    /// Returns the event that follows the given one.
    #[must_use]
    fn next_of(
        &self,
        (ev, depth): (DftEvent, usize),
        hier: &Hierarchy,
    ) -> Option<(DftEvent, usize)> {
        match ev {
            DftEvent::Open(id) => {
                // Dive into the first child if available, or leave the node.
                let neighbors = hier
                    .neighbors(id)
                    .expect("[consistency] the node being traversed must be alive");
                Some(match neighbors.first_child() {
                    Some(first_child) => (DftEvent::Open(first_child), depth + 1),
                    None => (DftEvent::Close(id), depth),
                })
            }
            DftEvent::Close(id) => {
                if id == self.toplevel {
                    return None;
                }
                // Go to the next sibling if available, or leave the parent.
                let neighbors = hier
                    .neighbors(id)
                    .expect("[consistency] the node being traversed must be alive");
                Some(match neighbors.next_sibling() {
                    Some(next_sibling) => (DftEvent::Open(next_sibling), depth),
                    None => {
                        let parent = neighbors.parent().expect(
                            "[consistency] parent node must exist since the node is not the toplevel",
                        );
                        (DftEvent::Close(parent), depth - 1)
                    }
                })
            }
        }
    }
}

/// Ancestors traverser.
///
/// Note that this returns the starting node first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AncestorsTraverser {
    /// Next node to emit.
    next: Option<NodeId>,
}

impl AncestorsTraverser {
    /// Creates a traverser from the node.
    #[inline]
    #[must_use]
    pub(crate) fn with_start(id: NodeId) -> Self {
        Self { next: Some(id) }
    }

    /// Returns the next ancestor.
    pub(crate) fn next(&mut self, hier: &Hierarchy) -> Option<NodeId> {
        let next = self.next?;
        self.next = hier
            .neighbors(next)
            .expect("[consistency] the node being traversed must be alive")
            .parent();

        Some(next)
    }
}

/// Forward siblings traverser.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SiblingsTraverser {
    /// Next node to emit.
    next: Option<NodeId>,
}

impl SiblingsTraverser {
    /// Creates a traverser over the children of the parent.
    #[inline]
    #[must_use]
    pub(crate) fn with_parent(parent: NodeId, hier: &Hierarchy) -> Self {
        let next = hier
            .neighbors(parent)
            .expect("[consistency] the node being traversed must be alive")
            .first_child();

        Self { next }
    }

    /// Returns the next sibling.
    pub(crate) fn next(&mut self, hier: &Hierarchy) -> Option<NodeId> {
        let next = self.next?;
        self.next = hier
            .neighbors(next)
            .expect("[consistency] the node being traversed must be alive")
            .next_sibling();

        Some(next)
    }
}
