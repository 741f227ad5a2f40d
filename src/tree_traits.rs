/*
Rendering for trees built from Rc<RefCell<Node>>.

NodeRef is a type alias for a std type, so inherent methods are not possible (E0116);
the conversion lives in a trait implemented for it.
 */
use std::rc::Rc;

use termtree::Tree;
use tracing::instrument;

use crate::domain::NodeRef;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for NodeRef {
    #[instrument(level = "trace", skip_all)]
    fn to_tree_string(&self) -> Tree<String> {
        // (node, index of the next child to render, tree rendered so far)
        let mut stack: Vec<(NodeRef, usize, Tree<String>)> =
            vec![(Rc::clone(self), 0, Tree::new(self.borrow().value.to_string()))];

        while let Some((node_rc, next, tree)) = stack.pop() {
            let child = node_rc.borrow().children.get(next).map(Rc::clone);
            match child {
                Some(child_rc) => {
                    let child_tree = Tree::new(child_rc.borrow().value.to_string());
                    stack.push((node_rc, next + 1, tree));
                    stack.push((child_rc, 0, child_tree));
                }
                None => match stack.last_mut() {
                    Some((_, _, parent_tree)) => {
                        parent_tree.push(tree);
                    }
                    None => return tree,
                },
            }
        }

        unreachable!("the root frame returns its tree")
    }
}
