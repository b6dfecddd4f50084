//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Result output format written to stdout.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One expanded text (or clean URL) per line
    Text,
    /// One JSON object per input line
    Json,
}

/// Library configuration, also parsed from the command line by the binary.
///
/// # Examples
///
/// ```no_run
/// use url_expander::Config;
///
/// let config = Config {
///     inputs: vec!["see https://bit.ly/example".to_string()],
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "url_expander",
    version,
    about = "Replaces a shared link with its clean destination by following one redirect hop"
)]
pub struct Config {
    /// Input text containing a URL; when omitted, each stdin line is one input
    pub inputs: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format for results
    #[arg(long = "output", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Total per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[arg(long, default_value_t = TCP_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Keep `http://` links as typed instead of upgrading them to `https://`
    #[arg(long = "no-https-upgrade", action = clap::ArgAction::SetFalse)]
    pub prefer_https: bool,

    /// Print only the clean URL instead of the rewritten text
    #[arg(long)]
    pub url_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Text,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: TCP_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            prefer_https: true,
            url_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.inputs.is_empty());
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.connect_timeout_seconds, 5);
        assert!(config.prefer_https);
        assert!(!config.url_only);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_config_parse_matches_default() {
        let config = Config::try_parse_from(["url_expander"]).expect("Should parse without args");
        let default = Config::default();
        assert_eq!(config.timeout_seconds, default.timeout_seconds);
        assert_eq!(
            config.connect_timeout_seconds,
            default.connect_timeout_seconds
        );
        assert_eq!(config.user_agent, default.user_agent);
        assert_eq!(config.prefer_https, default.prefer_https);
        assert_eq!(
            log::LevelFilter::from(config.log_level),
            log::LevelFilter::from(default.log_level)
        );
    }

    #[test]
    fn test_config_parse_no_https_upgrade() {
        let config = Config::try_parse_from(["url_expander", "--no-https-upgrade"])
            .expect("Should parse flag");
        assert!(!config.prefer_https);
    }

    #[test]
    fn test_config_parse_inputs_and_options() {
        let config = Config::try_parse_from([
            "url_expander",
            "--timeout-seconds",
            "3",
            "--output",
            "json",
            "--url-only",
            "look at https://t.co/abc",
            "and http://bit.ly/xyz",
        ])
        .expect("Should parse inputs");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.url_only);
        assert_eq!(
            config.inputs,
            vec![
                "look at https://t.co/abc".to_string(),
                "and http://bit.ly/xyz".to_string()
            ]
        );
    }

    #[test]
    fn test_config_parse_rejects_bad_timeout() {
        let result = Config::try_parse_from(["url_expander", "--timeout-seconds", "soon"]);
        assert!(result.is_err());
    }
}
