//! Arena-backed tree with duplicate-safe child insertion and depth-first
//! selection.
//!
//! Nodes live in a [`Forest`] and are identified by [`NodeId`]s, so two nodes
//! holding equal values are still distinct nodes. A node without a parent is
//! the root of its own tree.
//!
//! # Examples
//!
//! ```
//! use dfselect::{Child, Forest, TreeError};
//!
//! // 1
//! // |-- 2
//! // |   |-- 4
//! // |   `-- 5
//! // `-- 3
//! //     |-- 6
//! //     `-- 7
//! let mut forest = Forest::new();
//! let root = forest.create_root(1);
//! let branch2 = forest.create_child(root, 2)?;
//! let branch3 = forest.create_child(root, 3)?;
//! let leaf4 = forest.create_child(branch2, 4)?;
//! forest.create_child(branch2, 5)?;
//! let leaf6 = forest.create_child(branch3, 6)?;
//! forest.create_child(branch3, 7)?;
//!
//! assert_eq!(forest.df_select(root, |v, _| v % 2 == 1)?, [&1, &5, &3, &7]);
//! assert_eq!(forest.df_select(root, |_, depth| depth == 1)?, [&2, &3]);
//! assert!(forest.is_descendant(root, leaf4));
//!
//! // A node can be in a tree only once.
//! assert_eq!(
//!     forest.add_child(root, Child::Node(leaf4)),
//!     Err(TreeError::DuplicateDescendant)
//! );
//!
//! forest.remove_child(branch3, leaf6)?;
//! assert_eq!(forest.df_select(root, |_, _| true)?, [&1, &2, &4, &5, &3, &7]);
//! # Ok::<_, TreeError>(())
//! ```
//!
//! # Features
//!
//! * `std` (enabled by default): links the standard library. Without it the
//!   crate is `no_std` and only needs `alloc`.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod forest;
mod hierarchy;
mod id;

pub use self::error::TreeError;
pub use self::forest::{Child, Forest, Node, NodeMut};
pub use self::id::NodeId;
