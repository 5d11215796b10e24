//! Security header collection.

use std::collections::BTreeMap;

use crate::config::SECURITY_HEADERS;

/// Collects the security headers present in `headers`.
///
/// `headers` must be keyed by lowercase header name. Only names in
/// `SECURITY_HEADERS` are kept.
pub fn extract_security_headers(headers: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    SECURITY_HEADERS
        .iter()
        .filter_map(|&header_name| {
            headers
                .get(header_name)
                .map(|value| (header_name.to_string(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_security_headers() {
        let headers = BTreeMap::from([
            (
                "strict-transport-security".to_string(),
                "max-age=63072000".to_string(),
            ),
            ("x-frame-options".to_string(), "DENY".to_string()),
            ("server".to_string(), "nginx".to_string()),
            ("content-type".to_string(), "text/html".to_string()),
        ]);

        let security = extract_security_headers(&headers);
        assert_eq!(security.len(), 2);
        assert_eq!(
            security.get("strict-transport-security").map(String::as_str),
            Some("max-age=63072000")
        );
        assert_eq!(security.get("x-frame-options").map(String::as_str), Some("DENY"));
        assert!(!security.contains_key("server"));
    }

    #[test]
    fn test_extract_security_headers_none() {
        assert!(extract_security_headers(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_all_security_headers_recognized() {
        let headers: BTreeMap<String, String> = SECURITY_HEADERS
            .iter()
            .map(|name| (name.to_string(), "v".to_string()))
            .collect();
        assert_eq!(extract_security_headers(&headers).len(), SECURITY_HEADERS.len());
    }
}
