//! Configuration constants.
//!
//! This module defines the constants used throughout the analyzer, including
//! timeouts, size limits, the scoring endpoint and the fallback values that stand
//! in for unavailable data.

/// PageSpeed Insights v5 endpoint used for the mobile and desktop score reports.
pub const PAGESPEED_API_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Environment variable holding the PageSpeed API key.
pub const PAGESPEED_API_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// Default per-call timeout in seconds.
///
/// Applied separately to the mobile score call, the desktop score call and the
/// content fetch. A call that exceeds it is replaced by its fallback.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of URLs analyzed at once by `Analyzer::analyze_many`.
///
/// Each analysis makes up to three concurrent requests.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Default User-Agent string for the content fetch.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger bodies are truncated before extraction
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum redirect hops followed by the content fetch.
pub const MAX_REDIRECT_HOPS: usize = 10;

// Fallback category scores, used when neither strategy reports a category
pub const FALLBACK_PERFORMANCE_SCORE: f64 = 0.85;
pub const FALLBACK_ACCESSIBILITY_SCORE: f64 = 0.92;
pub const FALLBACK_BEST_PRACTICES_SCORE: f64 = 0.88;
pub const FALLBACK_SEO_SCORE: f64 = 0.95;

// Fallback audit values for the mock score report
pub const FALLBACK_LCP_MS: f64 = 2500.0;
pub const FALLBACK_FID_MS: f64 = 100.0;
pub const FALLBACK_CLS: f64 = 0.05;
pub const FALLBACK_SPEED_INDEX_MS: f64 = 1500.0;

// Substitutes for missing page data
pub const TITLE_NOT_FOUND: &str = "Title not found";
pub const DESCRIPTION_NOT_FOUND: &str = "Description not found";
pub const UNKNOWN_VALUE: &str = "Unknown";
