//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, fallback values)
//! - HTTP header name constants
//! - Library `Config` and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
