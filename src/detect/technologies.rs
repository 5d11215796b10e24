//! Technology detection from the server header and page body.

use std::collections::BTreeMap;

use crate::config::HEADER_SERVER;

/// Where a fingerprint is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// `server` response header, matched case-insensitively.
    ServerHeader,
    /// Raw page body, matched case-sensitively.
    Body,
}

/// A substring fingerprint for one technology.
struct Fingerprint {
    technology: &'static str,
    source: Source,
    needle: &'static str,
}

const fn server(needle: &'static str, technology: &'static str) -> Fingerprint {
    Fingerprint {
        technology,
        source: Source::ServerHeader,
        needle,
    }
}

const fn body(needle: &'static str, technology: &'static str) -> Fingerprint {
    Fingerprint {
        technology,
        source: Source::Body,
        needle,
    }
}

// Order here is the order of the detected list.
const FINGERPRINTS: &[Fingerprint] = &[
    server("nginx", "Nginx"),
    server("apache", "Apache"),
    server("iis", "IIS"),
    body("wp-content", "WordPress"),
    body("cdn.shopify.com", "Shopify"),
    body("analytics.js", "Google Analytics"),
    body("gtag", "Google Analytics 4"),
    body("bootstrap", "Bootstrap"),
    body("jquery", "jQuery"),
    body("react", "React"),
    body("vue", "Vue.js"),
    body("angular", "Angular"),
];

/// Detects technologies from response headers and body.
///
/// `headers` must be keyed by lowercase header name. Returns technology names in
/// fingerprint order without duplicates. A page with no matching fingerprint
/// yields an empty list.
pub fn detect_technologies(headers: &BTreeMap<String, String>, body: &str) -> Vec<String> {
    let server_header = headers
        .get(HEADER_SERVER)
        .map(|value| value.to_ascii_lowercase())
        .unwrap_or_default();

    let mut detected: Vec<String> = Vec::new();
    for fingerprint in FINGERPRINTS {
        let haystack = match fingerprint.source {
            Source::ServerHeader => server_header.as_str(),
            Source::Body => body,
        };
        if haystack.contains(fingerprint.needle)
            && !detected.iter().any(|t| t == fingerprint.technology)
        {
            log::debug!(
                "Detected {} via {:?} match on '{}'",
                fingerprint.technology,
                fingerprint.source,
                fingerprint.needle
            );
            detected.push(fingerprint.technology.to_string());
        }
    }

    detected
}
