//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::traversal::Order;

/// Compare preorder and z-order traversals over generated n-ary trees
///
/// Without a subcommand, builds the configured tree and prints its nodes in the
/// configured order (default: depth 3, branching 8, z-preorder2).
#[derive(Parser, Debug)]
#[command(name = "ztree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Tree shape overrides; unset values come from the settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ShapeArgs {
    /// Level of the leaves (root is level 0)
    #[arg(short, long)]
    pub levels: Option<usize>,

    /// Children per inner node
    #[arg(short, long)]
    pub branching: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print node values in traversal order
    Traverse {
        /// Traversal order
        #[arg(short, long, value_enum)]
        order: Option<Order>,

        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// Run every traversal and check each visits all nodes exactly once
    Compare {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Labels shown per order
        #[arg(short = 'n', long, default_value_t = 10)]
        head: usize,
    },

    /// Render the tree
    Tree {
        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show the global config file path
    Path,
}
