//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for each expansion stage
//! - Categorization of transport errors
//! - Outcome statistics keyed by `ErrorType`

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{ErrorType, ExpandError, InitializationError, NormalizeError, ResolveError};
