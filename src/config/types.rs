//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, PAGESPEED_API_KEY_ENV,
    PAGESPEED_API_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// A pretty-printed JSON array with one entry per analyzed URL
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use site_analyzer::Config;
///
/// let config = Config {
///     api_key: Some("my-key".to_string()),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// PageSpeed API key. `None` or an empty string skips the scoring calls.
    pub api_key: Option<String>,

    /// Scoring endpoint (defaults to the public PageSpeed Insights v5 API)
    pub pagespeed_url: String,

    /// Per-call timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum URLs analyzed at once (values below 1 are treated as 1)
    pub max_concurrency: usize,

    /// HTTP User-Agent header value for the content fetch
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Per-call timeout as a `Duration`.
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Concurrency limit for `Analyzer::analyze_many`, at least 1.
    pub fn concurrency_limit(&self) -> usize {
        self.max_concurrency.max(1)
    }

    /// The API key, if one is configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            pagespeed_url: PAGESPEED_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Analyze one page with mock scores (no API key)
/// site_analyzer example.com
///
/// # Real PageSpeed scores, JSON output
/// PAGESPEED_API_KEY=... site_analyzer https://example.com --format json
///
/// # Several pages, JSON written to a file
/// site_analyzer example.com example.org --output report.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "site_analyzer",
    about = "Analyzes web pages: PageSpeed scores, SEO metadata, technologies and security headers."
)]
pub struct Opt {
    /// URLs to analyze (https:// is assumed when no scheme is given)
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// PageSpeed Insights API key (mock scores are used when absent)
    #[arg(long, env = PAGESPEED_API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Scoring endpoint
    #[arg(long, default_value = PAGESPEED_API_URL)]
    pub pagespeed_url: String,

    /// Per-call timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum URLs analyzed at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the JSON report to this file instead of printing to stdout
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Config {
            api_key: opt.api_key.clone(),
            pagespeed_url: opt.pagespeed_url.clone(),
            timeout_seconds: opt.timeout_seconds,
            max_concurrency: opt.max_concurrency,
            user_agent: opt.user_agent.clone(),
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
