//! HTML parsing and data extraction.
//!
//! This module extracts page metrics from HTML content:
//! - Title, meta description and keywords
//! - Open Graph tags
//! - Heading counts and image alt-text coverage
//! - Links and their internal/external split
//! - Viewport presence
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Every function
//! tolerates malformed or empty input by returning an empty or zero result.

mod elements;
mod html;
mod structured;

// Re-export public API
pub use elements::{
    classify_links, count_headings, extract_images, extract_links, HeadingCounts, ImageStats,
    LinkStats,
};
pub use html::{extract_meta_description, extract_meta_keywords, extract_title, has_viewport};
pub use structured::extract_og_tags;
