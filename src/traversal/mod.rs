//! Traversal orders over a built tree.
//!
//! Every order visits each node reachable from the start exactly once; they differ
//! only in sequence. Visitors receive a shared borrow of the node and must not try
//! to mutate the tree.

mod queue;
mod stack;

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{Node, NodeRef, NodeValue};

pub use queue::{try_z_preorder_traverse, z_preorder_traverse};
pub use stack::{
    preorder_traverse, try_preorder_traverse, try_z_preorder_traverse1, try_z_preorder_traverse2,
    z_preorder_traverse1, z_preorder_traverse2,
};

/// Selects one of the traversal functions by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum Order {
    /// Breadth-first over whole sibling groups
    #[value(name = "z-preorder")]
    #[serde(rename = "z-preorder")]
    ZPreorder,
    /// Level batches popped from a single stack
    #[value(name = "z-preorder1")]
    #[serde(rename = "z-preorder1")]
    ZPreorder1,
    /// Standard root-first, left-to-right preorder
    #[value(name = "preorder")]
    #[serde(rename = "preorder")]
    Preorder,
    /// Preorder that visits all children of a node as a batch when reaching it
    #[default]
    #[value(name = "z-preorder2")]
    #[serde(rename = "z-preorder2")]
    ZPreorder2,
}

impl Order {
    pub const ALL: [Order; 4] = [
        Order::ZPreorder,
        Order::ZPreorder1,
        Order::Preorder,
        Order::ZPreorder2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Order::ZPreorder => "z-preorder",
            Order::ZPreorder1 => "z-preorder1",
            Order::Preorder => "preorder",
            Order::ZPreorder2 => "z-preorder2",
        }
    }

    pub fn try_traverse<F, E>(&self, start: &NodeRef, visitor: F) -> Result<(), E>
    where
        F: FnMut(&Node) -> Result<(), E>,
    {
        match self {
            Order::ZPreorder => try_z_preorder_traverse(start, visitor),
            Order::ZPreorder1 => try_z_preorder_traverse1(start, visitor),
            Order::Preorder => try_preorder_traverse(start, visitor),
            Order::ZPreorder2 => try_z_preorder_traverse2(start, visitor),
        }
    }

    pub fn traverse<F>(&self, start: &NodeRef, visitor: F)
    where
        F: FnMut(&Node),
    {
        match self {
            Order::ZPreorder => z_preorder_traverse(start, visitor),
            Order::ZPreorder1 => z_preorder_traverse1(start, visitor),
            Order::Preorder => preorder_traverse(start, visitor),
            Order::ZPreorder2 => z_preorder_traverse2(start, visitor),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values in the order `order` visits them.
pub fn visit_sequence(order: Order, start: &NodeRef) -> Vec<NodeValue> {
    let mut values = Vec::new();
    order.traverse(start, |node| values.push(node.value.clone()));
    values
}

/// Example visitor: prints the node value to stdout.
pub fn print_node(node: &Node) {
    println!("{}", node.value);
}

/// Writes the node value as one line, like [`print_node`] but to any writer.
pub fn write_node<W: Write>(out: &mut W, node: &Node) -> io::Result<()> {
    writeln!(out, "{}", node.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::linear_tree;

    #[test]
    fn given_order_names_when_parsing_then_roundtrip_through_value_enum() {
        for order in Order::ALL {
            let parsed = Order::from_str(order.name(), false).expect("known order");
            assert_eq!(parsed, order);
        }
    }

    #[test]
    fn given_default_order_then_z_preorder2() {
        assert_eq!(Order::default(), Order::ZPreorder2);
    }

    #[test]
    fn given_single_root_when_printing_then_example_visitor_runs() {
        let root = linear_tree(0);
        Order::ZPreorder2.traverse(&root, print_node);
    }

    #[test]
    fn given_writer_when_writing_nodes_then_one_line_per_node() {
        let root = linear_tree(1);
        let mut out = Vec::new();
        Order::Preorder
            .try_traverse(&root, |node| write_node(&mut out, node))
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "(0, '>')");
        assert_eq!(lines[8], "(1, '>.7')");
    }
}
