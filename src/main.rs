//! exoatlas CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use exoatlas::cli::{Cli, CommandDispatcher};
use exoatlas::storage::DataDirectories;
use exoatlas::ui::{create_policy, Output, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("exoatlas=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exoatlas=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("exoatlas starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };
    let output = Output::new(output_mode);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve and bootstrap the data directories; an empty override counts
    // as unset, same as the environment variable.
    let dirs = match cli.data_dir.as_deref().filter(|p| !p.as_os_str().is_empty()) {
        Some(base) => DataDirectories::from_base(base),
        None => DataDirectories::from_env(),
    };
    dirs.ensure();

    // Prompts only when attached to a terminal and not told otherwise
    let interactive = !cli.non_interactive && std::io::stdin().is_terminal();
    let mut policy = create_policy(interactive, false);

    let dispatcher = CommandDispatcher::new(dirs);

    match dispatcher.dispatch(&cli, &output, policy.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
