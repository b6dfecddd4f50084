//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The redirect-disabled HTTP client (with timeouts)
//! - The logger

mod client;
mod logger;

// Re-export public API
pub use client::{build_redirect_client, init_redirect_client};
pub use logger::init_logger_with;
