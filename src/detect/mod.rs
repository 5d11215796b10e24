//! Technology and security header detection.
//!
//! Both detectors work on the lowercase-keyed header map of
//! [`PageContent`](crate::fetch::PageContent) and never fail.

mod security;
mod technologies;

pub use security::extract_security_headers;
pub use technologies::detect_technologies;
