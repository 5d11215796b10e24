//! PageSpeed Insights scoring.
//!
//! This module provides:
//! - The score report model (`ScoreReport`) and the service's JSON response model
//! - `PageSpeedClient`, which requests one report per strategy
//! - The fixed mock report used whenever a real report is unavailable

mod client;
mod mock;
mod types;

// Re-export public API
pub use client::PageSpeedClient;
pub use mock::mock_score_report;
pub use types::{
    Audit, AuditResult, Category, CategoryResult, LighthouseResult, PageSpeedResponse,
    ScoreReport, Strategy,
};
