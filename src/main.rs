use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use ztree::cli::commands::execute_command;
use ztree::cli::output;
use ztree::cli::Cli;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

/// `-d` counts win; without them `RUST_LOG` applies, falling back to warnings only.
fn log_filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbosity {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        3 => Some(LevelFilter::TRACE),
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            Some(LevelFilter::TRACE)
        }
    };

    match (level, rust_log) {
        (Some(level), _) => EnvFilter::default().add_directive(level.into()),
        (None, Some(directives)) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
        (None, None) => EnvFilter::new("warn"),
    }
}

fn setup_logging(verbosity: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(verbosity, rust_log.as_deref());
    let max_level = filter.max_level_hint();

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match max_level {
        Some(LevelFilter::INFO) => tracing::info!("Debug mode: info"),
        Some(LevelFilter::DEBUG) => tracing::debug!("Debug mode: debug"),
        Some(LevelFilter::TRACE) => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info;
    use ztree::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        use clap::CommandFactory;
        Cli::command().debug_assert();
        info!("Debug mode: info");
    }

    #[test]
    fn given_rust_log_without_flags_when_filtering_then_env_applies() {
        let filter = log_filter(0, Some("trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn given_debug_flags_and_rust_log_when_filtering_then_flags_win() {
        let filter = log_filter(2, Some("trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn given_nothing_set_when_filtering_then_warnings_only() {
        assert_eq!(log_filter(0, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(0, Some("ztree=loud")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
