//! Domain layer: tree model and construction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod node;

pub use builder::{expected_node_count, linear_tree, TreeBuilder, DEFAULT_BRANCHING};
pub use node::{Node, NodeRef, NodeValue, WeakNodeRef, ROOT_LABEL};
