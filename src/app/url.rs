//! URL validation and normalization utilities.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Matches a leading `scheme:`.
const SCHEME_PREFIX_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.\-]*:";

/// Matches `host:port` with an optional path, query or fragment. Such input has no
/// scheme even though it starts like one.
const HOST_PORT_PATTERN: &str = r"^[^:/?#]+:\d+(?:[/?#].*)?$";

fn compile_regex(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static SCHEME_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(SCHEME_PREFIX_PATTERN, "SCHEME_PREFIX_RE"));

static HOST_PORT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(HOST_PORT_PATTERN, "HOST_PORT_RE"));

/// Whether `input` carries its own scheme (`https://...`, `mailto:...`, `file:/...`).
fn has_scheme(input: &str) -> bool {
    SCHEME_PREFIX_RE.is_match(input) && !HOST_PORT_RE.is_match(input)
}

/// Validates and normalizes a URL.
///
/// Trims the input, adds an `https://` prefix if no scheme is present, then
/// validates that the result is a syntactically valid absolute URL with a host
/// and an http/https scheme. Inputs longer than `MAX_URL_LENGTH` are rejected.
///
/// # Arguments
///
/// * `input` - The URL string to validate and normalize
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` describing why the input was rejected.
pub fn validate_and_normalize_url(input: &str) -> Result<Url, AnalysisError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AnalysisError::invalid_url(input, "the URL is empty"));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        let preview: String = trimmed.chars().take(50).collect();
        return Err(AnalysisError::invalid_url(
            &preview,
            format!(
                "the URL exceeds the maximum length ({} > {})",
                trimmed.len(),
                MAX_URL_LENGTH
            ),
        ));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(AnalysisError::invalid_url(
            input,
            "the URL contains whitespace",
        ));
    }

    let normalized = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&normalized)
        .map_err(|e| AnalysisError::invalid_url(input, e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AnalysisError::invalid_url(
                input,
                format!("unsupported scheme '{other}'"),
            ))
        }
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(AnalysisError::invalid_url(input, "the URL has no host")),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;
    use crate::error_handling::AnalysisError;

    fn normalized(input: &str) -> String {
        validate_and_normalize_url(input)
            .expect("input should be valid")
            .to_string()
    }

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        assert_eq!(normalized("example.com"), "https://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_https() {
        assert_eq!(normalized("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        assert_eq!(normalized("http://example.com"), "http://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_uppercase_scheme() {
        assert_eq!(normalized("HTTP://Example.com"), "http://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_trims_input() {
        assert_eq!(normalized("  example.com/path  "), "https://example.com/path");
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_port() {
        assert_eq!(
            normalized("example.com:8080/path?query=value"),
            "https://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_validate_and_normalize_url_ipv6() {
        assert_eq!(normalized("[2001:db8::1]"), "https://[2001:db8::1]/");
        assert_eq!(
            normalized("http://[2001:db8::1]:8080"),
            "http://[2001:db8::1]:8080/"
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_empty() {
        assert!(matches!(
            validate_and_normalize_url(""),
            Err(AnalysisError::InvalidUrl { .. })
        ));
        assert!(validate_and_normalize_url("   ").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        assert!(validate_and_normalize_url("not a url").is_err());
        assert!(validate_and_normalize_url("not a valid url!!!").is_err());
        assert!(validate_and_normalize_url("https://").is_err());
        assert!(validate_and_normalize_url("http://exa mple.com").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        let err = validate_and_normalize_url("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));

        // A scheme without "//" is still a scheme, not a host
        let err = validate_and_normalize_url("mailto:user@example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'mailto'"));
        let err = validate_and_normalize_url("file:/etc/passwd").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'file'"));
        assert!(validate_and_normalize_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_single_slash_http() {
        // Parsed as http with host example.com, never as host "http"
        assert_eq!(normalized("http:/example.com"), "http://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_host_port_without_scheme() {
        assert_eq!(normalized("localhost:8080"), "https://localhost:8080/");
        assert_eq!(normalized("localhost:8080/path?q=1"), "https://localhost:8080/path?q=1");
        assert_eq!(normalized("example.com:443"), "https://example.com/");
        assert_eq!(normalized("127.0.0.1:1/"), "https://127.0.0.1:1/");
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("example.com/{}", "a".repeat(3000));
        assert!(validate_and_normalize_url(&long).is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_keeps_input_in_error() {
        match validate_and_normalize_url("bad host!") {
            Err(AnalysisError::InvalidUrl { input, .. }) => assert_eq!(input, "bad host!"),
            Ok(url) => panic!("expected an error, got {url}"),
        }
    }
}
