//! Property tests over randomly shaped trees.

use proptest::prelude::*;
use proptest::sample::Index;

use dfselect::{Child, Forest, NodeId, TreeError};

/// A random tree and a plain model of its shape.
#[derive(Debug)]
struct Shape {
    forest: Forest<usize>,
    /// Node IDs, indexed by the node's value.
    ids: Vec<NodeId>,
    /// Parent value of each node; `None` for the root (value 0).
    parents: Vec<Option<usize>>,
}

impl Shape {
    /// Builds a tree where node `i + 1` is appended to an earlier node.
    fn build(parent_choices: &[Index]) -> Self {
        let mut forest = Forest::new();
        let mut ids = vec![forest.create_root(0)];
        let mut parents = vec![None];
        for (i, choice) in parent_choices.iter().enumerate() {
            let parent = choice.index(i + 1);
            let id = forest
                .create_child(ids[parent], i + 1)
                .expect("earlier nodes are alive");
            ids.push(id);
            parents.push(Some(parent));
        }

        Self {
            forest,
            ids,
            parents,
        }
    }

    /// Children values of the node in insertion order.
    fn children(&self, value: usize) -> Vec<usize> {
        (0..self.parents.len())
            .filter(|&v| self.parents[v] == Some(value))
            .collect()
    }

    /// Pre-order of `(value, depth)` computed on the model.
    fn pre_order(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, 0)];
        while let Some((value, depth)) = stack.pop() {
            out.push((value, depth));
            for child in self.children(value).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }

    /// Returns true if `ancestor` is a strict ancestor of `value` in the model.
    fn is_ancestor(&self, ancestor: usize, value: usize) -> bool {
        let mut current = self.parents[value];
        while let Some(v) = current {
            if v == ancestor {
                return true;
            }
            current = self.parents[v];
        }
        false
    }

    /// Selects values from the root.
    fn select<F>(&self, filter: F) -> Vec<usize>
    where
        F: FnMut(&usize, usize) -> bool,
    {
        self.forest
            .df_select(self.ids[0], filter)
            .expect("root is alive")
            .into_iter()
            .copied()
            .collect()
    }
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop::collection::vec(any::<Index>(), 0..48).prop_map(|choices| Shape::build(&choices))
}

proptest! {
    /// Accepting everything yields every value, parents before children and
    /// siblings in insertion order.
    #[test]
    fn select_all_is_pre_order(shape in arb_shape()) {
        let expected = shape
            .pre_order()
            .into_iter()
            .map(|(value, _)| value)
            .collect::<Vec<_>>();
        prop_assert_eq!(shape.select(|_, _| true), expected);
    }

    /// The selection never has more items than the tree has nodes.
    #[test]
    fn select_is_bounded_by_node_count(shape in arb_shape(), modulo in 1usize..5) {
        let selected = shape.select(|v, _| v % modulo == 0);
        prop_assert!(selected.len() <= shape.forest.len());
    }

    /// Selecting one depth yields exactly the nodes at that depth, left to right.
    #[test]
    fn select_by_depth(shape in arb_shape(), depth in 0usize..8) {
        let expected = shape
            .pre_order()
            .into_iter()
            .filter(|&(_, d)| d == depth)
            .map(|(value, _)| value)
            .collect::<Vec<_>>();
        prop_assert_eq!(shape.select(|_, d| d == depth), expected);
    }

    /// The filter receives the right depth for every node.
    #[test]
    fn filter_sees_model_depths(shape in arb_shape()) {
        let mut seen = Vec::new();
        shape.select(|&v, d| {
            seen.push((v, d));
            false
        });
        prop_assert_eq!(seen, shape.pre_order());
    }

    /// `is_descendant` agrees with the model, and repeated queries agree.
    #[test]
    fn is_descendant_matches_model(shape in arb_shape(), a in any::<Index>(), b in any::<Index>()) {
        let n = shape.ids.len();
        let (a, b) = (a.index(n), b.index(n));
        let expected = shape.is_ancestor(a, b);
        prop_assert_eq!(shape.forest.is_descendant(shape.ids[a], shape.ids[b]), expected);
        prop_assert_eq!(shape.forest.is_descendant(shape.ids[a], shape.ids[b]), expected);
        prop_assert_eq!(shape.select(|_, _| true).len(), n);
    }

    /// Any node already in a subtree cannot be added to that subtree again.
    #[test]
    fn duplicate_insertion_is_rejected(shape in arb_shape(), target in any::<Index>()) {
        let mut shape = shape;
        let n = shape.ids.len();
        let target = target.index(n);
        let before = shape.select(|_, _| true);

        for ancestor in 0..n {
            if !shape.is_ancestor(ancestor, target) {
                continue;
            }
            let result = shape.forest.add_child(shape.ids[ancestor], Child::Node(shape.ids[target]));
            prop_assert_eq!(result, Err(TreeError::DuplicateDescendant));
        }
        prop_assert_eq!(shape.select(|_, _| true), before);
    }

    /// Removal succeeds exactly for immediate children, and keeps the rest in order.
    #[test]
    fn removal_is_scoped_to_immediate_children(
        shape in arb_shape(),
        parent in any::<Index>(),
        child in any::<Index>(),
    ) {
        let mut shape = shape;
        let n = shape.ids.len();
        let (parent, child) = (parent.index(n), child.index(n));

        let result = shape.forest.remove_child(shape.ids[parent], shape.ids[child]);
        if shape.parents[child] == Some(parent) {
            prop_assert_eq!(result, Ok(()));
            // Drop the removed subtree from the model.
            let removed = (0..n)
                .filter(|&v| v == child || shape.is_ancestor(child, v))
                .collect::<Vec<_>>();
            let expected = shape
                .pre_order()
                .into_iter()
                .map(|(value, _)| value)
                .filter(|v| !removed.contains(v))
                .collect::<Vec<_>>();
            prop_assert_eq!(shape.select(|_, _| true), expected);
            let detached = shape
                .forest
                .df_select(shape.ids[child], |_, _| true)
                .expect("removed node is still alive");
            prop_assert_eq!(detached.len(), removed.len());
        } else {
            prop_assert_eq!(result, Err(TreeError::NotImmediateChild));
            prop_assert_eq!(shape.select(|_, _| true).len(), n);
        }
    }
}
