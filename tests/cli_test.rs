//! Tests for CLI argument parsing

use clap::{CommandFactory, Parser};

use ztree::cli::args::ConfigCommands;
use ztree::cli::{Cli, Commands};
use ztree::Order;

#[test]
fn given_cli_definition_when_asserting_then_valid() {
    Cli::command().debug_assert();
}

#[test]
fn given_no_subcommand_when_parsing_then_default_scenario() {
    let cli = Cli::try_parse_from(["ztree"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.debug, 0);
    assert!(cli.config.is_none());
}

#[test]
fn given_traverse_with_overrides_when_parsing_then_captures_order_and_shape() {
    let cli = Cli::try_parse_from([
        "ztree", "-dd", "traverse", "--order", "z-preorder1", "-l", "2", "-b", "3",
    ])
    .unwrap();

    assert_eq!(cli.debug, 2);
    match cli.command {
        Some(Commands::Traverse { order, shape }) => {
            assert_eq!(order, Some(Order::ZPreorder1));
            assert_eq!(shape.levels, Some(2));
            assert_eq!(shape.branching, Some(3));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_unknown_order_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["ztree", "traverse", "--order", "inorder"]);
    assert!(result.is_err());
}

#[test]
fn given_compare_without_head_when_parsing_then_defaults_to_ten() {
    let cli = Cli::try_parse_from(["ztree", "compare", "--levels", "1"]).unwrap();
    match cli.command {
        Some(Commands::Compare { shape, head }) => {
            assert_eq!(head, 10);
            assert_eq!(shape.levels, Some(1));
            assert_eq!(shape.branching, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_config_show_with_global_file_flag_when_parsing_then_both_captured() {
    let cli = Cli::try_parse_from(["ztree", "config", "show", "--config", "my.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("my.toml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Show
        })
    ));
}

mod default_run {
    use std::fs;
    use std::io::{self, Write};

    use clap::Parser;
    use tempfile::TempDir;

    use ztree::cli::args::ShapeArgs;
    use ztree::cli::commands::{execute_command, write_traversal};
    use ztree::cli::Cli;
    use ztree::config::Settings;
    use ztree::exitcode;

    /// Writer whose reader has gone away, like stdout piped into `head`.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn given_default_settings_when_writing_traversal_then_z_preorder2_of_three_levels() {
        let mut out = Vec::new();

        write_traversal(&Settings::default(), None, &ShapeArgs::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 585);
        assert_eq!(lines[..3], ["(0, '>')", "(1, '>.0')", "(1, '>.1')"]);
        assert_eq!(lines[9], "(2, '>.0.0')");
    }

    #[test]
    fn given_closed_output_when_writing_traversal_then_io_error_exit_code() {
        let err = write_traversal(&Settings::default(), None, &ShapeArgs::default(), &mut ClosedPipe)
            .unwrap_err();

        assert_eq!(err.exit_code(), exitcode::IOERR);
        assert!(err.to_string().contains("failed to write output"));
    }

    #[test]
    fn given_no_subcommand_when_executing_then_default_run_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ztree.toml");
        fs::write(&path, "levels = 0\n").unwrap();
        let config = path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["ztree", "--config", config.as_str()]).unwrap();

        assert!(execute_command(&cli).is_ok());
    }

    #[test]
    fn given_missing_config_file_when_executing_then_config_exit_code() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("absent.toml").to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["ztree", "--config", config.as_str()]).unwrap();
        let err = execute_command(&cli).unwrap_err();

        assert_eq!(err.exit_code(), exitcode::CONFIG);
    }
}
