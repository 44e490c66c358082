//! Node ID.

use core::fmt;
use core::num::NonZeroUsize;

/// Node ID.
///
/// A node ID is the identity of a node inside a [`Forest`][`crate::Forest`].
/// Two nodes holding equal values are still distinct nodes, and node IDs are
/// the only thing compared when the forest checks membership.
///
/// IDs of discarded nodes are never handed out again, so a stale ID is
/// reported as missing rather than silently pointing at another node.
///
/// The ordering (`PartialOrd` and `Ord`) is only provided for use with ordered
/// containers such as `BTreeSet`. It is **not** guaranteed to have any
/// relation to the order the nodes are created in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    /// Creates a node ID from the index into the arena.
    ///
    /// Returns `None` if the index is `usize::MAX`.
    #[inline]
    #[must_use]
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroUsize::new).map(Self)
    }

    /// Returns the index into the arena.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0.get() - 1
    }
}

// Prevent `{:#?}` from printing the value in redundant 3 lines.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
