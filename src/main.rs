//! hover-detect CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use hover_detect::cli::{Cli, CommandDispatcher};
use hover_detect::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for configuration errors (bad preset, unreadable env file).
const CONFIG_ERROR_EXIT_CODE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hover_detect=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hover_detect=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("hover-detect starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::new(output_mode);

    let source = match cli.environment_source() {
        Ok(source) => source,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(CONFIG_ERROR_EXIT_CODE);
        }
    };

    let dispatcher = CommandDispatcher::new(source);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(CONFIG_ERROR_EXIT_CODE)
        }
    }
}
