//! Page content fetching.
//!
//! Fetches the raw page (status, headers, body) for extraction, and provides the
//! fixed mock page used when the fetch fails.

mod content;
mod mock;

// Re-export public API
pub use content::{collect_headers, fetch_page_content, PageContent};
pub use mock::{mock_page_content, MOCK_HTML, MOCK_SERVER_HEADER};
