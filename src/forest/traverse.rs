//! Tree traversal.

use core::iter;

use crate::forest::{Forest, Node};
use crate::hierarchy::traverse::{DepthFirstTraverser, DftEvent, SiblingsTraverser};

/// Iterator for depth-first pre-order traversal.
///
/// Values returned by the iterator are pairs of a node and its depth.
/// The toplevel node of the iteration has depth 0.
#[derive(Debug)]
pub struct DepthFirstTraverse<'a, T> {
    /// Forest.
    forest: &'a Forest<T>,
    /// Traverser.
    traverser: DepthFirstTraverser,
}

impl<T> Clone for DepthFirstTraverse<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            forest: self.forest,
            traverser: self.traverser,
        }
    }
}

impl<'a, T> DepthFirstTraverse<'a, T> {
    /// Creates a new iterator.
    #[inline]
    #[must_use]
    pub(super) fn with_toplevel(node: &Node<'a, T>) -> Self {
        Self {
            forest: node.forest(),
            traverser: DepthFirstTraverser::with_toplevel(node.id()),
        }
    }
}

impl<'a, T> Iterator for DepthFirstTraverse<'a, T> {
    type Item = (Node<'a, T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        // Only node open events are interesting for pre-order traversal.
        while let Some((ev, depth)) = self.traverser.next(&self.forest.hierarchy) {
            if let DftEvent::Open(id) = ev {
                let node = self
                    .forest
                    .node(id)
                    .expect("[consistency] the node must be the part of the tree");
                return Some((node, depth));
            }
        }
        None
    }
}

impl<T> iter::FusedIterator for DepthFirstTraverse<'_, T> {}

/// Iterator of the immediate children of a node.
#[derive(Debug)]
pub struct Children<'a, T> {
    /// Forest.
    forest: &'a Forest<T>,
    /// Traverser.
    traverser: SiblingsTraverser,
}

impl<T> Clone for Children<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            forest: self.forest,
            traverser: self.traverser,
        }
    }
}

impl<'a, T> Children<'a, T> {
    /// Creates a new iterator from a parent.
    #[inline]
    #[must_use]
    pub(super) fn with_parent(parent: &Node<'a, T>) -> Self {
        Self {
            forest: parent.forest(),
            traverser: SiblingsTraverser::with_parent(parent.id(), parent.hierarchy()),
        }
    }
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = Node<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.traverser.next(&self.forest.hierarchy)?;
        let node = self
            .forest
            .node(id)
            .expect("[consistency] the node must be the part of the tree");
        Some(node)
    }
}

impl<T> iter::FusedIterator for Children<'_, T> {}
