//! Tests for CLI option parsing.

use clap::Parser;
use site_analyzer::config::{DEFAULT_TIMEOUT_SECS, PAGESPEED_API_URL};
use site_analyzer::{Config, LogFormat, LogLevel, Opt, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["site_analyzer", "--api-key", "", "example.com"])
        .expect("valid arguments");
    assert_eq!(opt.urls, vec!["example.com"]);
    assert_eq!(opt.format, OutputFormat::Text);
    assert_eq!(opt.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    assert_eq!(opt.pagespeed_url, PAGESPEED_API_URL);
    assert!(opt.output.is_none());

    // An empty key counts as absent
    let config = Config::from(&opt);
    assert_eq!(config.api_key(), None);
}

#[test]
fn test_all_options() {
    let opt = Opt::try_parse_from([
        "site_analyzer",
        "--api-key",
        "abc123",
        "--timeout-seconds",
        "3",
        "--max-concurrency",
        "8",
        "--user-agent",
        "custom/1.0",
        "--pagespeed-url",
        "http://localhost:9000/score",
        "--format",
        "json",
        "--output",
        "out.json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "example.com",
        "https://example.org/path",
    ])
    .expect("valid arguments");

    assert_eq!(opt.urls.len(), 2);
    assert_eq!(opt.format, OutputFormat::Json);
    assert_eq!(opt.output, Some(PathBuf::from("out.json")));

    let config = Config::from(&opt);
    assert_eq!(config.api_key(), Some("abc123"));
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.call_timeout(), std::time::Duration::from_secs(3));
    assert_eq!(config.user_agent, "custom/1.0");
    assert_eq!(config.pagespeed_url, "http://localhost:9000/score");
    assert_eq!(config.concurrency_limit(), 8);
    // The logger is initialized from these
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_requires_at_least_one_url() {
    assert!(Opt::try_parse_from(["site_analyzer"]).is_err());
}

#[test]
fn test_rejects_unknown_format() {
    assert!(Opt::try_parse_from(["site_analyzer", "--format", "xml", "example.com"]).is_err());
}

#[test]
fn test_rejects_non_numeric_timeout() {
    assert!(
        Opt::try_parse_from(["site_analyzer", "--timeout-seconds", "soon", "example.com"])
            .is_err()
    );
}
