//! Application-level helpers shared by the library and the CLI.

pub mod statistics;
mod url;

pub use statistics::{print_processing_statistics, processing_statistics_lines};
pub use url::validate_and_normalize_url;
