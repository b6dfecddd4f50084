//! CLI-facing helpers: result rendering and run statistics.

mod output;
mod statistics;

pub use output::ExpandRecord;
pub use statistics::{print_error_statistics, print_summary};
