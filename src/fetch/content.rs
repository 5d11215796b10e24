//! Raw page fetch.

use std::collections::BTreeMap;
use std::time::Instant;

use log::debug;
use serde::Serialize;
use url::Url;

use crate::config::{HEADER_CONTENT_TYPE, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::FetchError;

/// Status, headers and body of a fetched page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContent {
    /// HTTP status code
    pub status: u16,
    /// Response headers keyed by lower-case name; the first value of a repeated header wins
    pub headers: BTreeMap<String, String>,
    /// Response body as text
    pub body: String,
    /// Time from sending the request to reading the full body
    pub response_time_ms: u64,
}

impl PageContent {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Collects response headers into a lower-cased map.
///
/// Values that are not valid visible ASCII are skipped.
pub fn collect_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut collected = BTreeMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            collected
                .entry(name.as_str().to_ascii_lowercase())
                .or_insert_with(|| value.to_string());
        }
    }
    collected
}

/// Truncates `body` to at most `max_len` bytes on a char boundary.
pub(crate) fn truncate_body(mut body: String, max_len: usize) -> String {
    if body.len() > max_len {
        let mut end = max_len;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}

/// Fetches `url` and returns its status, headers and body.
///
/// Redirects are followed by the client. Bodies larger than
/// `MAX_RESPONSE_BODY_SIZE` are truncated before extraction.
///
/// # Errors
///
/// Returns `FetchError::Request` on transport failure, a non-2xx status, or a body
/// that cannot be read.
pub async fn fetch_page_content(
    client: &reqwest::Client,
    url: &Url,
) -> Result<PageContent, FetchError> {
    let start = Instant::now();

    let response = client.get(url.clone()).send().await?.error_for_status()?;
    debug!("Final url after redirects: {}", response.url());

    let status = response.status().as_u16();
    let headers = collect_headers(response.headers());

    if let Some(ct) = headers.get(HEADER_CONTENT_TYPE) {
        if !ct.to_ascii_lowercase().starts_with("text/html") {
            debug!("Non-HTML content-type for {url}: {ct}");
        }
    }

    let body = response.text().await?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        debug!(
            "Truncating large body for {url}: {} bytes > {} bytes",
            body.len(),
            MAX_RESPONSE_BODY_SIZE
        );
    }
    let body = truncate_body(body, MAX_RESPONSE_BODY_SIZE);

    let response_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(
        "Fetched {url}: status {status}, {} bytes in {response_time_ms} ms",
        body.len()
    );

    Ok(PageContent {
        status,
        headers,
        body,
        response_time_ms,
    })
}
