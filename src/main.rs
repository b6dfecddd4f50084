//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_expander` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use url_expander::initialization::init_logger_with;
use url_expander::{run_expand, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    if let Err(e) =
        init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")
    {
        eprintln!("url_expander error: {:#}", e);
        process::exit(2);
    }

    let mut stdout = std::io::stdout().lock();
    match run_expand(config, &mut stdout).await {
        Ok(report) => {
            if report.total_inputs > 0 && report.expanded == 0 {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("url_expander error: {:#}", e);
            process::exit(2);
        }
    }
}
