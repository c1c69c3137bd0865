//! # anybadge
//!
//! **CLI Binary**
//!
//! This is the entry point for the `anybadge` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Build the badge and write it to a file or stdout
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod error_hints;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use anybadge_config::{Cli, discover, init_tracing, resolve_badge};
use anybadge_core::Badge;

/// Entry point used by the `anybadge` binary.
pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

/// Run with already parsed arguments.
pub fn run_with(cli: Cli) -> Result<()> {
    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    init_tracing(if cli.verbose { "debug" } else { "warn" });

    let config = discover(cli.config.as_deref()).context("Failed to load configuration")?;
    let options = resolve_badge(&cli, config.as_ref()).context("Invalid badge arguments")?;
    debug!(?options, "resolved badge options");

    let badge = Badge::new(options).context("Failed to build badge")?;

    match &cli.file {
        Some(path) => {
            let written = badge
                .write(path, cli.overwrite)
                .with_context(|| format!("Failed to write badge to {}", path.display()))?;
            info!(path = %written.display(), "badge written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", badge.svg()).context("Failed to write badge to stdout")?;
        }
    }
    Ok(())
}

/// Render an error with hints for the terminal.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
