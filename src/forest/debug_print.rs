//! Debug printer.

use core::fmt::{self, Write as _};

use alloc::vec::Vec;

use crate::forest::Node;

/// Tree printer for debugging.
///
/// Prints one node per line, with `|--` and `` `-- `` connectors:
///
/// ```text
/// root
/// |-- 0
/// |   |-- 0-0
/// |   `-- 0-1
/// `-- 1
/// ```
///
/// Data is expected to be printed in a single line. Note that the output
/// format is not guaranteed to be stable.
pub struct DebugPrint<'a, T> {
    /// Toplevel node of the (sub)tree to print.
    node: Node<'a, T>,
}

impl<'a, T> DebugPrint<'a, T> {
    /// Creates a new `DebugPrint` object for the node.
    #[inline]
    #[must_use]
    pub(crate) fn new(node: Node<'a, T>) -> Self {
        Self { node }
    }

    /// Writes the tree, using `write_data` for the data of each node.
    fn fmt_tree<F>(&self, f: &mut fmt::Formatter<'_>, mut write_data: F) -> fmt::Result
    where
        F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        // Whether each ancestor on the current path (excluding the toplevel)
        // is the last child of its parent.
        let mut is_last_item: Vec<bool> = Vec::new();

        for (node, depth) in self.node.depth_first_traverse() {
            if depth > 0 {
                f.write_char('\n')?;
                is_last_item.truncate(depth - 1);
                for &is_last in &is_last_item {
                    f.write_str(if is_last { "    " } else { "|   " })?;
                }
                let is_last = node.next_sibling_id().is_none();
                f.write_str(if is_last { "`-- " } else { "|-- " })?;
                is_last_item.push(is_last);
            }
            write_data(node.data(), f)?;
        }

        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, |data, f| fmt::Display::fmt(data, f))
    }
}

impl<T: fmt::Debug> fmt::Debug for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, |data, f| fmt::Debug::fmt(data, f))
    }
}

#[cfg(test)]
mod tests {
    use crate::Forest;

    use alloc::format;

    #[test]
    fn single_node() {
        let mut forest = Forest::new();
        let root = forest.create_root("alone");
        let node = forest.node(root).expect("root is alive");

        assert_eq!(format!("{}", node.debug_print()), "alone");
        assert_eq!(format!("{:?}", node.debug_print()), "\"alone\"");
    }

    #[test]
    fn nested_tree() {
        let mut forest = Forest::new();
        let root = forest.create_root(0);
        let a = forest.create_child(root, 1).expect("root is alive");
        forest.create_child(a, 2).expect("a is alive");
        let a1 = forest.create_child(a, 3).expect("a is alive");
        forest.create_child(a1, 4).expect("a1 is alive");
        let b = forest.create_child(root, 5).expect("root is alive");
        forest.create_child(b, 6).expect("b is alive");

        let node = forest.node(root).expect("root is alive");
        let expected = "\
0
|-- 1
|   |-- 2
|   `-- 3
|       `-- 4
`-- 5
    `-- 6";
        assert_eq!(format!("{}", node.debug_print()), expected);
    }

    #[test]
    fn subtree_ignores_siblings_of_toplevel() {
        let mut forest = Forest::new();
        let root = forest.create_root("root");
        let a = forest.create_child(root, "a").expect("root is alive");
        forest.create_child(a, "a-0").expect("a is alive");
        forest.create_child(root, "b").expect("root is alive");

        let node = forest.node(a).expect("a is alive");
        assert_eq!(format!("{}", node.debug_print()), "a\n`-- a-0");
    }
}
