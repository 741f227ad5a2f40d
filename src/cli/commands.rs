//! Command dispatch

use std::collections::HashSet;
use std::io::{self, BufWriter, Write};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, info, instrument, warn};

use crate::cli::args::{Cli, Commands, ConfigCommands, ShapeArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{expected_node_count, NodeRef, TreeBuilder};
use crate::traversal::{visit_sequence, write_node, Order};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        None => _run(&settings),
        Some(Commands::Traverse { order, shape }) => _traverse(&settings, *order, shape),
        Some(Commands::Compare { shape, head }) => _compare(&settings, shape, *head),
        Some(Commands::Tree { shape }) => _tree(&settings, shape),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Builds the tree described by the settings, with command-line overrides applied.
#[instrument(level = "debug", skip(settings))]
fn build_tree(settings: &Settings, shape: &ShapeArgs) -> NodeRef {
    let levels = shape.levels.unwrap_or(settings.levels);
    let branching = shape.branching.unwrap_or(settings.branching);

    match expected_node_count(branching, levels) {
        Some(count) => info!(levels, branching, count, "building tree"),
        None => warn!(levels, branching, "node count overflows usize"),
    }

    TreeBuilder::new().with_branching(branching).build(levels)
}

/// The default scenario: one tree, one traversal, one line per node.
#[instrument(level = "debug", skip_all)]
fn _run(settings: &Settings) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_traversal(settings, None, &ShapeArgs::default(), &mut out)
}

#[instrument(level = "debug", skip(settings))]
fn _traverse(settings: &Settings, order: Option<Order>, shape: &ShapeArgs) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_traversal(settings, order, shape, &mut out)
}

/// Builds the tree and writes its values in `order` (settings order if None).
///
/// The first failed write aborts the traversal and is returned as an output error.
pub fn write_traversal<W: Write>(
    settings: &Settings,
    order: Option<Order>,
    shape: &ShapeArgs,
    out: &mut W,
) -> CliResult<()> {
    let order = order.unwrap_or(settings.order);
    let root = build_tree(settings, shape);

    order.try_traverse(&root, |node| write_node(&mut *out, node))?;
    out.flush()?;
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _compare(settings: &Settings, shape: &ShapeArgs, head: usize) -> CliResult<()> {
    let root = build_tree(settings, shape);
    let expected = root.borrow().count();
    let mut mismatch = None;

    for order in Order::ALL {
        let sequence = visit_sequence(order, &root);
        let distinct = sequence.iter().collect::<HashSet<_>>().len();

        output::header(&order);
        let summary = format!("{} visited, {} distinct", sequence.len(), distinct);
        if sequence.len() == expected && distinct == expected {
            output::success(&summary);
        } else {
            output::failure(&summary);
            if mismatch.is_none() {
                mismatch = Some(CliError::Mismatch {
                    order,
                    visited: sequence.len(),
                    distinct,
                    expected,
                });
            }
        }

        let mut labels = sequence.iter().map(|v| v.label.as_str()).take(head).join(" ");
        if sequence.len() > head {
            labels.push_str(" ...");
        }
        output::detail(&labels);
    }

    match mismatch {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[instrument(level = "debug", skip(settings))]
fn _tree(settings: &Settings, shape: &ShapeArgs) -> CliResult<()> {
    let root = build_tree(settings, shape);
    output::info(&root.to_tree_string());
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::error("no config directory on this platform"),
        },
    }
    Ok(())
}
