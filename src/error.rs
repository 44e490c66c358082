//! Errors reported by structural edits.

use thiserror::Error;

use crate::NodeId;

/// Result type alias for forest operations.
pub type Result<T, E = TreeError> = core::result::Result<T, E>;

/// Errors that can occur when editing or querying a forest.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The node to add is already a descendant of the new parent.
    #[error("that child is already a descendant of this tree")]
    DuplicateDescendant,

    /// The node to remove is not an immediate child of the parent.
    #[error("that node is not an immediate child of this tree")]
    NotImmediateChild,

    /// Attempt to make a node the ancestor of itself.
    #[error("attempt to make a node the ancestor of itself")]
    AncestorDescendantLoop,

    /// The node does not exist in the forest, or has already been discarded.
    #[error("node {0} does not exist in the forest")]
    NodeNotFound(NodeId),
}
