//! Error categorization.
//!
//! Maps the soft failures of the scoring calls and the content fetch onto
//! `ErrorType` counters.

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError, ScoreError, WarningType};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status codes are checked first, then the reqwest error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        match status.as_u16() {
            400 => return ErrorType::HttpRequestBadRequest,
            403 => return ErrorType::HttpRequestBotDetectionError,
            404 => return ErrorType::HttpRequestNotFound,
            429 => return ErrorType::HttpRequestTooManyRequests,
            _ if status.is_server_error() => return ErrorType::HttpRequestServerError,
            _ if status.is_client_error() => return ErrorType::HttpRequestOtherError,
            _ => {
                // Non-standard status codes - fall through to check error type
            }
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a scoring-call failure in the statistics.
///
/// A missing API key is an expected configuration, so it counts as a warning
/// rather than an error.
pub fn record_score_error(stats: &ProcessingStats, error: &ScoreError) {
    match error {
        ScoreError::MissingApiKey => stats.increment_warning(WarningType::MissingApiKey),
        ScoreError::Request(e) => stats.increment_error(categorize_reqwest_error(e)),
        ScoreError::Timeout(_) => stats.increment_error(ErrorType::CallTimeout),
    }
}

/// Records a content-fetch failure in the statistics.
pub fn record_fetch_error(stats: &ProcessingStats, error: &FetchError) {
    match error {
        FetchError::Request(e) => stats.increment_error(categorize_reqwest_error(e)),
        FetchError::Timeout(_) => stats.increment_error(ErrorType::CallTimeout),
    }
}
