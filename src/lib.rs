//! url_expander library: turn a shared link into its clean destination.
//!
//! The core takes arbitrary text, finds the first HTTP(S) URL in it, follows
//! exactly one redirect hop with a non-following GET, and replaces the URL with
//! the redirect target reduced to `scheme://host/path`.
//!
//! # Example
//!
//! ```no_run
//! use url_expander::{Config, Expander};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expander = Expander::from_config(&Config::default())?;
//! if let Some(text) = expander.expand("look at this https://bit.ly/3abc").await {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
mod expand;
mod fetch;
pub mod initialization;
mod parse;

// Re-export public API
pub use app::ExpandRecord;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{ErrorType, ExpandError, NormalizeError, ResolveError};
pub use expand::{Expander, Expansion};
pub use fetch::{RedirectResolver, Resolve, ResolutionOutcome};
pub use parse::{browser_target, clean_url, extract_url, find_url, upgrade_scheme};
pub use run::{run_expand, ExpandReport};

// Internal run module (drives the CLI over one or many inputs)
mod run {
    use std::io::Write;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::app::{print_error_statistics, print_summary, ExpandRecord};
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::expand::Expander;
    use crate::fetch::Resolve;

    /// Results of an expansion run.
    #[derive(Debug, Clone)]
    pub struct ExpandReport {
        /// Number of inputs processed
        pub total_inputs: usize,
        /// Number of inputs that produced a clean URL
        pub expanded: usize,
        /// Number of inputs that produced nothing
        pub failed: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Expands the configured inputs and writes one rendered line per result to `out`.
    ///
    /// When `config.inputs` is non-empty the arguments are joined with spaces
    /// into a single input. Otherwise stdin is read line by line; blank lines and
    /// lines starting with `#` are skipped. Inputs are processed one at a time.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be initialized
    /// - stdin cannot be read
    /// - Writing to `out` fails
    ///
    /// Expansion failures are not errors; they are counted in the report.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use url_expander::{run_expand, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     inputs: vec!["https://bit.ly/3abc".to_string()],
    ///     ..Default::default()
    /// };
    /// let report = run_expand(config, &mut std::io::stdout()).await?;
    /// println!("Expanded {} of {}", report.expanded, report.total_inputs);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_expand<W: Write>(config: Config, out: &mut W) -> Result<ExpandReport> {
        let start_time = Instant::now();
        let expander =
            Expander::from_config(&config).context("Failed to initialize HTTP client")?;
        let stats = ProcessingStats::new();

        if !config.inputs.is_empty() {
            let input = config.inputs.join(" ");
            process_input(&expander, &input, &config, &stats, out).await?;
        } else {
            info!("Reading inputs from stdin");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines
                .next_line()
                .await
                .context("Failed to read from stdin")?
            {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                process_input(&expander, trimmed, &config, &stats, out).await?;
            }
        }

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_error_statistics(&stats);
        print_summary(&stats, elapsed_seconds);

        Ok(ExpandReport {
            total_inputs: stats.total(),
            expanded: stats.expanded(),
            failed: stats.total_errors(),
            elapsed_seconds,
        })
    }

    async fn process_input<R: Resolve, W: Write>(
        expander: &Expander<R>,
        input: &str,
        config: &Config,
        stats: &ProcessingStats,
        out: &mut W,
    ) -> Result<()> {
        let result = expander.try_expand(input).await;
        match &result {
            Ok(_) => stats.increment_expanded(),
            Err(e) => stats.increment_error(e.error_type()),
        }

        let record = ExpandRecord::from_result(input, &result);
        if let Some(message) = record.failure_message() {
            warn!("{}", message);
        }
        if let Some(line) = record.render(&config.output_format, config.url_only) {
            writeln!(out, "{line}").context("Failed to write result")?;
        }
        Ok(())
    }
}
