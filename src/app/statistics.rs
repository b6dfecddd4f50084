//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs a breakdown of failed expansions by category.
///
/// Categories with a zero count are skipped.
pub fn print_error_statistics(stats: &ProcessingStats) {
    if stats.total_errors() == 0 {
        return;
    }
    info!("Inputs without a clean URL: {}", stats.total_errors());
    for error_type in ErrorType::iter() {
        let count = stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type, count);
        }
    }
}

/// Logs a one-line summary of the run.
pub fn print_summary(stats: &ProcessingStats, elapsed_seconds: f64) {
    info!(
        "Expanded {} of {} input{} in {:.2}s",
        stats.expanded(),
        stats.total(),
        if stats.total() == 1 { "" } else { "s" },
        elapsed_seconds
    );
}
