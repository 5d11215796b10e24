//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for network errors, warnings and
//! fallback substitutions recorded during analysis.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, FallbackType, WarningType};

/// Thread-safe processing statistics tracker.
///
/// Tracks errors, warnings, and fallback substitutions using atomic counters,
/// allowing concurrent access from multiple analyses. All types are initialized
/// to zero on creation. The counters are observability only and never feed back
/// into an analysis result.
///
/// # Categories
///
/// - **Errors**: network failures absorbed by a fallback
/// - **Warnings**: missing optional page data
/// - **Fallbacks**: fixed data substituted for an unavailable input
#[derive(Debug)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    warnings: HashMap<WarningType, AtomicUsize>,
    fallbacks: HashMap<FallbackType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter()
            .map(|error| (error, AtomicUsize::new(0)))
            .collect();
        let warnings = WarningType::iter()
            .map(|warning| (warning, AtomicUsize::new(0)))
            .collect();
        let fallbacks = FallbackType::iter()
            .map(|fallback| (fallback, AtomicUsize::new(0)))
            .collect();

        ProcessingStats {
            errors,
            warnings,
            fallbacks,
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                warning
            );
        }
    }

    /// Increment a fallback counter.
    pub fn increment_fallback(&self, fallback: FallbackType) {
        if let Some(counter) = self.fallbacks.get(&fallback) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment fallback counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                fallback
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a fallback type.
    pub fn get_fallback_count(&self, fallback: FallbackType) -> usize {
        self.fallbacks
            .get(&fallback)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Get total fallback count across all fallback types.
    pub fn total_fallbacks(&self) -> usize {
        FallbackType::iter().map(|f| self.get_fallback_count(f)).sum()
    }
}
