//! Nero CLI entry point
//!
//! Parses the flag-driven command line, initializes logging from the
//! verbosity flags (overridable with `RUST_LOG`), runs the selected
//! operation, and maps failures to user-friendly messages with distinct
//! exit codes.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use nero_cli::cli::{self, prompt::ConsolePrompt};
use nero_cli::core::user_friendly_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // With no arguments at all, show usage instead of starting the
    // interactive flow.
    if std::env::args().len() == 1 {
        cli::Cli::command().print_help()?;
        return Ok(());
    }

    let cli = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute(&ConsolePrompt).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(error_ctx.exit_code());
        }
    }
}
