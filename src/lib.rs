//! Preorder and z-order traversals over generated n-ary trees.
//!
//! [`linear_tree`] builds a tree in which every node above the last level has eight
//! children labelled `<parent>.<index>`. The traversal family walks such a tree in
//! different orders, calling a visitor once per node:
//!
//! - [`z_preorder_traverse`]: breadth-first over whole sibling groups
//! - [`z_preorder_traverse1`]: level batches popped from one stack
//! - [`preorder_traverse`]: root first, children left to right
//! - [`z_preorder_traverse2`]: a node's children are visited together when it is reached
//!
//! ```
//! use ztree::{linear_tree, preorder_traverse};
//!
//! let root = linear_tree(1);
//! let mut labels = Vec::new();
//! preorder_traverse(&root, |node| labels.push(node.value.label.clone()));
//! assert_eq!(labels[..3], [">", ">.0", ">.1"]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod traversal;
pub mod tree_traits;
pub mod util;

pub use domain::{linear_tree, Node, NodeRef, NodeValue, TreeBuilder};
pub use errors::{ZtreeError, ZtreeResult};
pub use traversal::{
    preorder_traverse, print_node, try_preorder_traverse, try_z_preorder_traverse,
    try_z_preorder_traverse1, try_z_preorder_traverse2, visit_sequence, write_node,
    z_preorder_traverse, z_preorder_traverse1, z_preorder_traverse2, Order,
};
