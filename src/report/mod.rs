//! Rendering analysis results as text or JSON.

mod json;
mod text;

pub use json::{render_json, write_json_report};
pub use text::render_text;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        AnalysisResult, BasicInfo, CoreWebVitals, DataSource, LighthouseScores, Links, MetaTags,
        Mobile, Performance, Security, Seo, ServerInfo, Sources, Technical,
    };
    use crate::parse::{HeadingCounts, ImageStats};
    use std::collections::BTreeMap;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            url: "https://example.com/".to_string(),
            analyzed_at: chrono::Utc::now(),
            basic_info: BasicInfo {
                title: "Example".to_string(),
                description: "An example".to_string(),
                status_code: 200,
                response_time_ms: 42,
                content_length: 1024,
                last_modified: "Unknown".to_string(),
            },
            performance: Performance {
                page_speed_score: 72,
                core_web_vitals: CoreWebVitals {
                    lcp_ms: 2100.0,
                    fid_ms: 80.0,
                    cls: 0.1,
                    speed_index_ms: 1800.0,
                },
                lighthouse: LighthouseScores {
                    performance: 0.72,
                    accessibility: 0.9,
                    best_practices: 0.8,
                    seo: 1.0,
                },
            },
            seo: Seo {
                meta_tags: MetaTags {
                    title: "Example".to_string(),
                    description: "An example".to_string(),
                    keywords: vec!["rust".to_string()],
                    og_tags: BTreeMap::from([("title".to_string(), "OG".to_string())]),
                },
                headings: HeadingCounts { h1: 1, h2: 0, h3: 0 },
                images: ImageStats {
                    total: 0,
                    with_alt: 0,
                    without_alt: 0,
                },
            },
            technical: Technical {
                server_info: ServerInfo {
                    server: "nginx".to_string(),
                    technologies: vec!["Nginx".to_string()],
                },
                security: Security {
                    ssl: true,
                    security_headers: BTreeMap::from([(
                        "x-frame-options".to_string(),
                        "DENY".to_string(),
                    )]),
                },
                mobile: Mobile {
                    viewport: true,
                    mobile_friendly: true,
                },
            },
            links: Links {
                hrefs: vec!["/a".to_string()],
                total: 1,
                internal: 1,
                external: 0,
            },
            sources: Sources {
                mobile_score: DataSource::Live,
                desktop_score: DataSource::Fallback,
                content: DataSource::Live,
            },
        }
    }

    #[test]
    fn test_render_text_contains_key_fields() {
        colored::control::set_override(false);
        let text = render_text(&sample_result());
        assert!(text.contains("https://example.com/"));
        assert!(text.contains("72/100 (Good)"));
        assert!(text.contains("Security: Warning"));
        assert!(text.contains("Mobile: 100/100"));
        assert!(text.contains("og:title: OG"));
        assert!(text.contains("desktop fallback"));
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&[sample_result()]).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        let entry = &value[0];
        assert_eq!(entry["url"], "https://example.com/");
        assert_eq!(entry["performance"]["page_speed_score"], 72);
        assert_eq!(entry["performance"]["lighthouse"]["best_practices"], 0.8);
        assert_eq!(entry["seo"]["images"]["without_alt"], 0);
        assert_eq!(entry["sources"]["desktop_score"], "fallback");
        assert_eq!(entry["summary"]["performance_rating"], "Good");
        assert_eq!(entry["summary"]["security_status"], "Warning");
    }

    #[test]
    fn test_write_json_report_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        let written = write_json_report(&[sample_result(), sample_result()], Some(path.as_path()))
            .expect("report written");
        assert_eq!(written, 2);
        let contents = std::fs::read_to_string(&path).expect("report readable");
        let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
