//! Queue based traversal.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use tracing::{instrument, trace};

use crate::domain::{Node, NodeRef};

/// Breadth-grouped preorder over a queue of sibling groups.
///
/// Each queue entry is one parent's complete child list. A group is taken from the
/// front; every node in it enqueues its own child group at the back and is then
/// visited. The first visitor error aborts the walk and is returned.
#[instrument(level = "debug", skip_all, fields(start = %start.borrow().value))]
pub fn try_z_preorder_traverse<F, E>(start: &NodeRef, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<(), E>,
{
    let mut queue: VecDeque<Vec<NodeRef>> = VecDeque::from([vec![Rc::clone(start)]]);

    while let Some(siblings) = queue.pop_front() {
        trace!(pending = queue.len() + 1, "sibling queue");

        for node_rc in &siblings {
            let node = node_rc.borrow();
            if !node.children.is_empty() {
                queue.push_back(node.children.clone());
            }
            visitor(&node)?;
        }
    }

    Ok(())
}

/// Infallible form of [`try_z_preorder_traverse`].
pub fn z_preorder_traverse<F>(start: &NodeRef, mut visitor: F)
where
    F: FnMut(&Node),
{
    try_z_preorder_traverse(start, |node| {
        visitor(node);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {})
}
