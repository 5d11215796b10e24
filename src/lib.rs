//! site_analyzer library: web page analysis
//!
//! This library analyzes a web page by combining PageSpeed Insights scores for the
//! mobile and desktop strategies with metrics extracted from the page itself:
//! title and meta tags, headings, image alt coverage, links, detected technologies,
//! security headers and viewport presence.
//!
//! The three remote calls run concurrently. Any of them that fails is replaced by
//! fixed fallback data, so once a URL is valid an analysis always produces a fully
//! populated [`AnalysisResult`].
//!
//! # Example
//!
//! ```no_run
//! use site_analyzer::{Analyzer, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: std::env::var("PAGESPEED_API_KEY").ok(),
//!     ..Default::default()
//! };
//!
//! let analyzer = Analyzer::new(&config)?;
//! let result = analyzer.analyze("example.com").await?;
//! println!("{} scored {}/100", result.url, result.performance.page_speed_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
mod app;
pub mod config;
pub mod detect;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod pagespeed;
pub mod parse;
pub mod report;
mod utils;

// Re-export public API
pub use analysis::{AnalysisResult, Analyzer, DataSource, Summary};
pub use app::{
    print_processing_statistics, processing_statistics_lines, validate_and_normalize_url,
};
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{AnalysisError, InitializationError, ProcessingStats};
