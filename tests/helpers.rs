// Shared test helpers for mock servers and analyzer setup.
// Not every test file uses every helper.
#![allow(dead_code)]

use serde_json::{json, Value};
use site_analyzer::{Analyzer, Config, LogFormat, LogLevel};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PAGESPEED_PATH: &str = "/pagespeed";
pub const TEST_API_KEY: &str = "test-key";

pub const LIVE_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Live Test Page</title>
    <meta name="description" content="Served by the mock server">
    <meta name="keywords" content="rust, testing">
    <meta property="og:title" content="Live OG Title">
    <script src="/static/jquery.min.js"></script>
  </head>
  <body>
    <h1>Heading</h1>
    <h3>Minor</h3>
    <img src="a.png" alt="first">
    <img src="b.png" alt="second">
    <img src="c.png">
    <a href="/about">About</a>
    <a href="https://elsewhere.example.net/">Elsewhere</a>
    <a href="mailto:team@example.com">Mail</a>
  </body>
</html>"#;

/// Builds a config pointing the scoring service at `server`.
pub fn test_config(server: &MockServer, api_key: Option<&str>) -> Config {
    Config {
        api_key: api_key.map(String::from),
        pagespeed_url: format!("{}{}", server.uri(), PAGESPEED_PATH),
        timeout_seconds: 5,
        max_concurrency: 4,
        user_agent: "site_analyzer_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
    }
}

pub fn test_analyzer(server: &MockServer, api_key: Option<&str>) -> Analyzer {
    Analyzer::new(&test_config(server, api_key)).expect("Failed to build analyzer")
}

/// A scoring response with the same value for all four categories.
pub fn pagespeed_body(score: f64, lcp_ms: f64) -> Value {
    json!({
        "lighthouseResult": {
            "categories": {
                "performance": { "score": score },
                "accessibility": { "score": score },
                "best-practices": { "score": score },
                "seo": { "score": score }
            },
            "audits": {
                "largest-contentful-paint": { "numericValue": lcp_ms },
                "first-input": { "numericValue": 40.0 },
                "cumulative-layout-shift": { "numericValue": 0.01 },
                "speed-index": { "numericValue": 1200.0 }
            }
        }
    })
}

/// Mounts a scoring response for one strategy.
pub async fn mount_pagespeed(server: &MockServer, strategy: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(PAGESPEED_PATH))
        .and(query_param("strategy", strategy))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts `LIVE_HTML` at `page_path`.
pub async fn mount_page(server: &MockServer, page_path: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("server", "Apache/2.4.58")
                .insert_header("strict-transport-security", "max-age=31536000")
                .insert_header("x-frame-options", "SAMEORIGIN")
                .insert_header("last-modified", "Wed, 21 Oct 2026 07:28:00 GMT")
                .set_body_raw(LIVE_HTML, "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}
