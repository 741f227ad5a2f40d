//! Stack based traversals.
//!
//! All three keep their pending work in an explicit `Vec` used as a stack; none recurse.
//! Each comes in a fallible `try_` form that stops at the first visitor error and an
//! infallible convenience form.

use std::convert::Infallible;
use std::rc::Rc;

use tracing::{instrument, trace};

use crate::domain::{Node, NodeRef};

/// Level-batched traversal over a stack of `(level, node)` pairs.
///
/// The top entry is popped together with every further entry of the same level; an
/// entry of a different level goes back on the stack and ends the batch. Each node of
/// the batch pushes its children tagged `level + 1` and is visited. Levels are counted
/// from `start`, not from the tree root.
///
/// Because a batch drains its level completely, the stack holds a single level at a
/// time. Sibling order flips on every level: the last pushed entry is popped first.
#[instrument(level = "debug", skip_all, fields(start = %start.borrow().value))]
pub fn try_z_preorder_traverse1<F, E>(start: &NodeRef, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<(), E>,
{
    let mut stack: Vec<(usize, NodeRef)> = vec![(0, Rc::clone(start))];

    while let Some((level, first)) = stack.pop() {
        trace!(pending = stack.len() + 1, "level stack");

        let mut batch = vec![first];
        while let Some((next_level, next)) = stack.pop() {
            if next_level != level {
                stack.push((next_level, next));
                break;
            }
            batch.push(next);
        }

        for node_rc in &batch {
            let node = node_rc.borrow();
            for child in &node.children {
                stack.push((level + 1, Rc::clone(child)));
            }
            visitor(&node)?;
        }
    }

    Ok(())
}

/// Infallible form of [`try_z_preorder_traverse1`].
pub fn z_preorder_traverse1<F>(start: &NodeRef, mut visitor: F)
where
    F: FnMut(&Node),
{
    try_z_preorder_traverse1(start, |node| {
        visitor(node);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {})
}

/// Iterative preorder: root first, children left to right, depth first.
///
/// `current` is the node being entered; `pending` holds right siblings parked for later.
/// Siblings are parked in reverse so the nearest one is resumed first.
#[instrument(level = "debug", skip_all, fields(start = %start.borrow().value))]
pub fn try_preorder_traverse<F, E>(start: &NodeRef, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<(), E>,
{
    let mut pending: Vec<NodeRef> = Vec::new();
    let mut current = Some(Rc::clone(start));

    while current.is_some() || !pending.is_empty() {
        match current.take() {
            Some(node_rc) => {
                let node = node_rc.borrow();
                visitor(&node)?;
                current = descend(&node, &mut pending);
            }
            None => current = pending.pop(),
        }
    }

    Ok(())
}

/// Infallible form of [`try_preorder_traverse`].
pub fn preorder_traverse<F>(start: &NodeRef, mut visitor: F)
where
    F: FnMut(&Node),
{
    try_preorder_traverse(start, |node| {
        visitor(node);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {})
}

/// Preorder that visits a node's children as one batch when the node is reached.
///
/// The start node is visited first. Descending then follows the same current/pending
/// scheme as [`try_preorder_traverse`], but entering a node visits all of its children
/// instead of the node itself (it was already visited with its own siblings).
#[instrument(level = "debug", skip_all, fields(start = %start.borrow().value))]
pub fn try_z_preorder_traverse2<F, E>(start: &NodeRef, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<(), E>,
{
    visitor(&start.borrow())?;

    let mut pending: Vec<NodeRef> = Vec::new();
    let mut current = Some(Rc::clone(start));

    while current.is_some() || !pending.is_empty() {
        match current.take() {
            Some(node_rc) => {
                let node = node_rc.borrow();
                for child in &node.children {
                    visitor(&child.borrow())?;
                }
                current = descend(&node, &mut pending);
            }
            None => current = pending.pop(),
        }
    }

    Ok(())
}

/// Infallible form of [`try_z_preorder_traverse2`].
pub fn z_preorder_traverse2<F>(start: &NodeRef, mut visitor: F)
where
    F: FnMut(&Node),
{
    try_z_preorder_traverse2(start, |node| {
        visitor(node);
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {})
}

/// Returns the first child and parks the rest on `pending`, nearest sibling on top.
fn descend(node: &Node, pending: &mut Vec<NodeRef>) -> Option<NodeRef> {
    let (first, rest) = node.children.split_first()?;
    pending.extend(rest.iter().rev().map(Rc::clone));
    Some(Rc::clone(first))
}
