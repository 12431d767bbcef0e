//! shopcheck CLI entry point.

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use shopcheck::cli::{Cli, CommandDispatcher};
use shopcheck::shell::is_ci;
use shopcheck::ui::{create_ui, restore_cursor, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs reach stderr only with `--debug` or `--verbose`; `--log-file` adds a
/// plain-text copy. Returns the error if the log file could not be opened.
fn init_tracing(debug: bool, verbose: bool, log_file: Option<&Path>) -> Option<std::io::Error> {
    let filter = if debug {
        EnvFilter::new("shopcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shopcheck=info"))
    };

    let stderr_layer = (debug || verbose).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    let (file, file_error) = match log_file.map(File::create) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let file_layer = file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(filter)
        .init();

    file_error
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_error = init_tracing(cli.debug, cli.verbose, cli.log_file.as_deref());

    tracing::debug!(command = ?cli.command, "shopcheck starting");

    if let Err(e) = ctrlc::set_handler(|| {
        restore_cursor();
        eprintln!("\nInterrupted.");
        std::process::exit(1);
    }) {
        tracing::warn!(error = %e, "Could not install Ctrl-C handler");
    }

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet, cli.json);
    let mut ui = create_ui(!is_ci(), output_mode);

    if let Some(e) = log_error {
        ui.warning(&format!("Could not open log file: {}", e));
    }

    let result = CommandDispatcher::from_cli(&cli).and_then(|d| d.dispatch(&cli, ui.as_mut()));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
