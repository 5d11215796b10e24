//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (hard `AnalysisError`, soft `ScoreError` / `FetchError`)
//! - Processing statistics tracking (errors, warnings, fallbacks)
//! - Error categorization for reqwest failures
//!
//! Only `AnalysisError` ever reaches a caller. Every other failure is absorbed
//! by substituting fixed fallback data and is counted here.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, record_fetch_error, record_score_error};
pub use stats::ProcessingStats;
pub use types::{
    AnalysisError, ErrorType, FallbackType, FetchError, InitializationError, ScoreError,
    WarningType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for fallback_type in FallbackType::iter() {
            assert_eq!(stats.get_fallback_count(fallback_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestConnectError);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestConnectError), 1);

        stats.increment_warning(WarningType::MissingMetaDescription);
        assert_eq!(
            stats.get_warning_count(WarningType::MissingMetaDescription),
            1
        );

        stats.increment_fallback(FallbackType::PageContent);
        stats.increment_fallback(FallbackType::PageContent);
        assert_eq!(stats.get_fallback_count(FallbackType::PageContent), 2);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::CallTimeout);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_warning(WarningType::MissingTitle);
        stats.increment_fallback(FallbackType::MobileScore);
        stats.increment_fallback(FallbackType::DesktopScore);
        stats.increment_fallback(FallbackType::CategoryScore);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_fallbacks(), 3);
    }
}
