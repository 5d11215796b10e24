//! Error type definitions.
//!
//! This module defines the hard error returned to callers, the soft errors that are
//! absorbed into fallback data, and the counter categories tracked by
//! `ProcessingStats`.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// The only error `Analyzer::analyze` surfaces.
///
/// Raised before any network call when the input cannot be turned into an
/// absolute http(s) URL, even after `https://` has been prepended.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input is not a valid URL.
    #[error("Invalid URL '{input}': {reason}. Enter a valid URL")]
    InvalidUrl {
        /// The raw input as given by the caller
        input: String,
        /// Why validation rejected it
        reason: String,
    },
}

impl AnalysisError {
    pub(crate) fn invalid_url(input: &str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Soft failure of a scoring call. Always replaced by the mock score report.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// No API key is configured, so the call is skipped entirely.
    #[error("no PageSpeed API key configured")]
    MissingApiKey,

    /// Transport, status or decode failure reported by reqwest.
    #[error("PageSpeed request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The call did not settle within the per-call timeout.
    #[error("PageSpeed request timed out after {0:?}")]
    Timeout(Duration),
}

/// Soft failure of the content fetch. Always replaced by the mock page content.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport or body failure reported by reqwest.
    #[error("content fetch failed: {0}")]
    Request(#[from] ReqwestError),

    /// The call did not settle within the per-call timeout.
    #[error("content fetch timed out after {0:?}")]
    Timeout(Duration),
}

/// Categories of network errors seen during analysis.
///
/// None of these fail an analysis; they are counted for the end-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    HttpRequestBadRequest,        // 400 Bad Request
    HttpRequestNotFound,          // 404 Not Found
    HttpRequestServerError,       // any 5xx
    // Per-call timeout enforced by the pipeline
    CallTimeout,
}

/// Types of warnings about missing optional data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningType {
    MissingTitle,
    MissingMetaDescription,
    MissingMetaKeywords,
    MissingViewport,
    MissingApiKey,
}

/// Substitutions of fixed fallback data for unavailable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FallbackType {
    /// Mock score report used for the mobile strategy
    MobileScore,
    /// Mock score report used for the desktop strategy
    DesktopScore,
    /// Mock HTML used instead of the fetched page
    PageContent,
    /// Fixed constant used for a category neither strategy reported
    CategoryScore,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
            ErrorType::CallTimeout => "Call timeout",
        }
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingMetaDescription => "Missing meta description",
            WarningType::MissingMetaKeywords => "Missing meta keywords",
            WarningType::MissingViewport => "Missing viewport meta tag",
            WarningType::MissingApiKey => "Missing PageSpeed API key",
        }
    }
}

impl FallbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackType::MobileScore => "Mock mobile score report",
            FallbackType::DesktopScore => "Mock desktop score report",
            FallbackType::PageContent => "Mock page content",
            FallbackType::CategoryScore => "Fixed category score",
        }
    }
}
