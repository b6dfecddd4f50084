//! Processing statistics tracking.
//!
//! Thread-safe counters for expansion outcomes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe expansion statistics tracker.
///
/// Counts successful expansions and failures per `ErrorType` using atomic
/// counters, so it can be shared across tasks behind an `Arc`. All types are
/// initialized to zero on creation.
pub struct ProcessingStats {
    expanded: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        ProcessingStats {
            expanded: AtomicUsize::new(0),
            errors,
        }
    }

    /// Record one successful expansion.
    pub fn increment_expanded(&self) {
        self.expanded.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment an error counter.
    ///
    /// Every `ErrorType` is inserted by `new()`, so a miss means a new variant
    /// was added without updating the constructor; it is logged, not panicked on.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map",
                error
            );
        }
    }

    pub fn expanded(&self) -> usize {
        self.expanded.load(Ordering::SeqCst)
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    pub fn total(&self) -> usize {
        self.expanded() + self.total_errors()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
