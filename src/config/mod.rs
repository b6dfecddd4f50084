//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, redirect status codes, messages)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
