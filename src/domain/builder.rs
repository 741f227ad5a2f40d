//! Tree builder for fixed-shape n-ary trees.

use std::rc::Rc;

use tracing::{debug, instrument};

use crate::domain::node::{Node, NodeRef, NodeValue};

/// Children attached to every inner node by `linear_tree`.
pub const DEFAULT_BRANCHING: usize = 8;

/// Constructs trees in which every node above the last level has the same number of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    branching: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            branching: DEFAULT_BRANCHING,
        }
    }

    pub fn with_branching(mut self, branching: usize) -> Self {
        self.branching = branching;
        self
    }

    /// Builds a tree whose leaves sit at level `levels`.
    ///
    /// Non-recursive: an explicit stack stands in for the call stack. Children are
    /// attached in index order, so sibling order is `.0, .1, ...` regardless of the
    /// order in which the stack expands them.
    #[instrument(level = "debug")]
    pub fn build(&self, levels: usize) -> NodeRef {
        let root = Node::new_root(NodeValue::root());
        let mut stack = vec![Rc::clone(&root)];

        while let Some(node_rc) = stack.pop() {
            let value = node_rc.borrow().value.clone();

            if value.level < levels {
                for index in 0..self.branching {
                    let child = Node::new_child(&node_rc, value.child(index));
                    stack.push(child);
                }
            }
        }

        debug!(nodes = root.borrow().count(), "tree built");
        root
    }
}

/// Builds a tree of depth `levels` with 8 children per inner node.
pub fn linear_tree(levels: usize) -> NodeRef {
    TreeBuilder::new().build(levels)
}

/// `branching^0 + branching^1 + ... + branching^levels`, None on overflow.
pub fn expected_node_count(branching: usize, levels: usize) -> Option<usize> {
    let mut total: usize = 0;
    let mut level_size: usize = 1;
    for level in 0..=levels {
        total = total.checked_add(level_size)?;
        if level < levels {
            level_size = level_size.checked_mul(branching)?;
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_zero_levels_when_building_then_returns_single_root() {
        let root = linear_tree(0);
        let root = root.borrow();
        assert_eq!(root.value, NodeValue::root());
        assert!(root.is_leaf());
    }

    #[test]
    fn given_one_level_when_building_then_root_has_eight_ordered_children() {
        let root = linear_tree(1);
        let labels: Vec<String> = root
            .borrow()
            .children
            .iter()
            .map(|c| c.borrow().value.label.clone())
            .collect();
        assert_eq!(
            labels,
            vec![">.0", ">.1", ">.2", ">.3", ">.4", ">.5", ">.6", ">.7"]
        );
    }

    #[test]
    fn given_custom_branching_when_building_then_uses_it() {
        let root = TreeBuilder::new().with_branching(3).build(2);
        assert_eq!(root.borrow().count(), 13);
        assert_eq!(root.borrow().depth(), 3);
    }

    #[test]
    fn given_zero_branching_when_building_then_only_root() {
        let root = TreeBuilder::new().with_branching(0).build(4);
        assert_eq!(root.borrow().count(), 1);
    }

    #[test]
    fn given_shape_when_computing_expected_count_then_geometric_sum() {
        assert_eq!(expected_node_count(8, 0), Some(1));
        assert_eq!(expected_node_count(8, 3), Some(585));
        assert_eq!(expected_node_count(1, 4), Some(5));
        assert_eq!(expected_node_count(0, 4), Some(1));
        assert_eq!(expected_node_count(usize::MAX, 2), None);
    }
}
