//! PageSpeed data structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Device profile the page is scored for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Mobile,
    Desktop,
}

/// Lighthouse score categories requested from the scoring service.
///
/// The string form is the key the service uses (`best-practices` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

/// Raw Lighthouse audits carried into the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Audit {
    /// Largest Contentful Paint, milliseconds
    LargestContentfulPaint,
    /// First Input Delay, milliseconds
    FirstInput,
    /// Cumulative Layout Shift, unitless
    CumulativeLayoutShift,
    /// Speed Index, milliseconds
    SpeedIndex,
}

impl Strategy {
    /// Query value sent to the scoring service.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

impl Category {
    /// Category key used by the scoring service.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

impl Audit {
    /// Audit key used by the scoring service.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Scores and audit values for one strategy.
///
/// Every value is optional: the service may omit any category or audit, and the
/// merge step decides what stands in for a gap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreReport {
    pub performance: Option<f64>,
    pub accessibility: Option<f64>,
    pub best_practices: Option<f64>,
    pub seo: Option<f64>,
    pub lcp_ms: Option<f64>,
    pub fid_ms: Option<f64>,
    pub cls: Option<f64>,
    pub speed_index_ms: Option<f64>,
}

impl ScoreReport {
    /// Score in [0,1] for a category, if reported.
    pub fn score(&self, category: Category) -> Option<f64> {
        match category {
            Category::Performance => self.performance,
            Category::Accessibility => self.accessibility,
            Category::BestPractices => self.best_practices,
            Category::Seo => self.seo,
        }
    }

    /// Numeric value of an audit, if reported.
    pub fn audit(&self, audit: Audit) -> Option<f64> {
        match audit {
            Audit::LargestContentfulPaint => self.lcp_ms,
            Audit::FirstInput => self.fid_ms,
            Audit::CumulativeLayoutShift => self.cls,
            Audit::SpeedIndex => self.speed_index_ms,
        }
    }
}

/// Top-level PageSpeed Insights v5 response.
///
/// Only the fields the analyzer reads are modeled; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSpeedResponse {
    #[serde(rename = "lighthouseResult", default)]
    pub lighthouse_result: Option<LighthouseResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LighthouseResult {
    #[serde(default)]
    pub categories: HashMap<String, CategoryResult>,
    #[serde(default)]
    pub audits: HashMap<String, AuditResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryResult {
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditResult {
    #[serde(rename = "numericValue", default)]
    pub numeric_value: Option<f64>,
}

impl From<PageSpeedResponse> for ScoreReport {
    fn from(response: PageSpeedResponse) -> Self {
        let Some(result) = response.lighthouse_result else {
            return ScoreReport::default();
        };

        // Scores outside [0,1] are treated as not reported
        let score = |category: Category| {
            result
                .categories
                .get(category.key())
                .and_then(|c| c.score)
                .filter(|s| (0.0..=1.0).contains(s))
        };
        let audit = |audit: Audit| {
            result
                .audits
                .get(audit.key())
                .and_then(|a| a.numeric_value)
                .filter(|v| v.is_finite() && *v >= 0.0)
        };

        ScoreReport {
            performance: score(Category::Performance),
            accessibility: score(Category::Accessibility),
            best_practices: score(Category::BestPractices),
            seo: score(Category::Seo),
            lcp_ms: audit(Audit::LargestContentfulPaint),
            fid_ms: audit(Audit::FirstInput),
            cls: audit(Audit::CumulativeLayoutShift),
            speed_index_ms: audit(Audit::SpeedIndex),
        }
    }
}
