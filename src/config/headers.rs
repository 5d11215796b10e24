//! HTTP header name constants.
//!
//! Header names are lower-case because `PageContent` stores headers under
//! lower-cased keys.

// Security header names
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "permissions-policy";

/// Security headers collected into the analysis result.
/// To add/remove headers, modify this array.
pub const SECURITY_HEADERS: &[&str] = &[
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_X_FRAME_OPTIONS,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_REFERRER_POLICY,
    HEADER_PERMISSIONS_POLICY,
];

// Other HTTP header names
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "server";
/// Content-Type header
pub const HEADER_CONTENT_TYPE: &str = "content-type";
/// Last-Modified header
pub const HEADER_LAST_MODIFIED: &str = "last-modified";
