//! The analysis result model.
//!
//! Every field is populated on every successful analysis. Missing page data is
//! replaced by fixed substitutes (`"Title not found"`, `"Unknown"`, ...) and
//! unavailable remote data by fallback values; `sources` records which inputs were
//! live.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::Display;

use crate::parse::{HeadingCounts, ImageStats};

/// Where one input of an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Returned by the remote service or page
    Live,
    /// Substituted fixed data
    Fallback,
}

/// Origin of the three concurrent inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sources {
    pub mobile_score: DataSource,
    pub desktop_score: DataSource,
    pub content: DataSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    pub title: String,
    pub description: String,
    pub status_code: u16,
    pub response_time_ms: u64,
    /// Body length in bytes
    pub content_length: usize,
    pub last_modified: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoreWebVitals {
    pub lcp_ms: f64,
    pub fid_ms: f64,
    pub cls: f64,
    pub speed_index_ms: f64,
}

/// Merged category scores, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LighthouseScores {
    pub performance: f64,
    pub accessibility: f64,
    pub best_practices: f64,
    pub seo: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Performance {
    /// Merged performance score scaled to 0-100 and rounded
    pub page_speed_score: u8,
    pub core_web_vitals: CoreWebVitals,
    pub lighthouse: LighthouseScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seo {
    pub meta_tags: MetaTags,
    pub headings: HeadingCounts,
    pub images: ImageStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerInfo {
    pub server: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Security {
    /// Whether the normalized URL uses https
    pub ssl: bool,
    pub security_headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mobile {
    pub viewport: bool,
    pub mobile_friendly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technical {
    pub server_info: ServerInfo,
    pub security: Security,
    pub mobile: Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Links {
    /// Non-empty hrefs in document order
    pub hrefs: Vec<String>,
    pub total: usize,
    pub internal: usize,
    pub external: usize,
}

/// Result of analyzing one URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Normalized URL
    pub url: String,
    pub analyzed_at: DateTime<Utc>,
    pub basic_info: BasicInfo,
    pub performance: Performance,
    pub seo: Seo,
    pub technical: Technical,
    pub links: Links,
    pub sources: Sources,
}
