//! Tests for writing JSON reports to files.

mod helpers;

use helpers::{mount_page, test_analyzer};
use site_analyzer::report::write_json_report;
use wiremock::MockServer;

#[tokio::test]
async fn test_json_report_written_to_file() {
    let server = MockServer::start().await;
    mount_page(&server, "/page").await;
    let analyzer = test_analyzer(&server, None);

    let result = analyzer
        .analyze(&format!("{}/page", server.uri()))
        .await
        .expect("valid URL");

    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("report.json");
    let written = write_json_report(&[result], Some(path.as_path())).expect("report written");
    assert_eq!(written, 1);

    let contents = std::fs::read_to_string(&path).expect("report readable");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    let entry = &value[0];
    assert_eq!(entry["basic_info"]["title"], "Live Test Page");
    assert_eq!(entry["sources"]["content"], "live");
    assert_eq!(entry["sources"]["mobile_score"], "fallback");
    assert_eq!(entry["technical"]["security"]["ssl"], false);
    assert!(entry["analyzed_at"].is_string());
    assert!(entry["summary"]["mobile_score"].is_number());
}

#[test]
fn test_json_report_to_unwritable_path_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("missing-dir").join("report.json");
    let err = write_json_report(&[], Some(path.as_path())).expect_err("parent directory is missing");
    assert!(format!("{err:#}").contains("Failed to create output file"));
}
