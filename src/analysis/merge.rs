//! Merging the mobile and desktop score reports.
//!
//! Category scores prefer desktop, then mobile, then a fixed constant. Web vitals
//! prefer mobile, then desktop, then zero.

use log::debug;

use super::result::{CoreWebVitals, LighthouseScores};
use crate::config::{
    FALLBACK_ACCESSIBILITY_SCORE, FALLBACK_BEST_PRACTICES_SCORE, FALLBACK_PERFORMANCE_SCORE,
    FALLBACK_SEO_SCORE,
};
use crate::error_handling::{FallbackType, ProcessingStats};
use crate::pagespeed::{Audit, Category, ScoreReport};

/// Which tier supplied a merged category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Desktop,
    Mobile,
    Constant,
}

/// Fixed score used when neither report has a category.
pub fn fallback_category_score(category: Category) -> f64 {
    match category {
        Category::Performance => FALLBACK_PERFORMANCE_SCORE,
        Category::Accessibility => FALLBACK_ACCESSIBILITY_SCORE,
        Category::BestPractices => FALLBACK_BEST_PRACTICES_SCORE,
        Category::Seo => FALLBACK_SEO_SCORE,
    }
}

/// Three-tier category lookup: desktop, then mobile, then the fixed constant.
pub fn select_category_score(
    desktop: &ScoreReport,
    mobile: &ScoreReport,
    category: Category,
) -> (f64, ScoreTier) {
    if let Some(score) = desktop.score(category) {
        (score, ScoreTier::Desktop)
    } else if let Some(score) = mobile.score(category) {
        (score, ScoreTier::Mobile)
    } else {
        (fallback_category_score(category), ScoreTier::Constant)
    }
}

/// Audit lookup: mobile, then desktop, then 0.0.
pub fn select_audit_value(mobile: &ScoreReport, desktop: &ScoreReport, audit: Audit) -> f64 {
    mobile
        .audit(audit)
        .or_else(|| desktop.audit(audit))
        .unwrap_or(0.0)
}

/// Merges the four category scores, counting each use of the constant tier.
pub fn merge_lighthouse_scores(
    desktop: &ScoreReport,
    mobile: &ScoreReport,
    stats: &ProcessingStats,
) -> LighthouseScores {
    let merged = |category: Category| {
        let (score, tier) = select_category_score(desktop, mobile, category);
        if tier == ScoreTier::Constant {
            debug!("No report has a {category} score, using {score}");
            stats.increment_fallback(FallbackType::CategoryScore);
        }
        score
    };

    LighthouseScores {
        performance: merged(Category::Performance),
        accessibility: merged(Category::Accessibility),
        best_practices: merged(Category::BestPractices),
        seo: merged(Category::Seo),
    }
}

/// Merges the four web vitals.
pub fn merge_web_vitals(mobile: &ScoreReport, desktop: &ScoreReport) -> CoreWebVitals {
    CoreWebVitals {
        lcp_ms: select_audit_value(mobile, desktop, Audit::LargestContentfulPaint),
        fid_ms: select_audit_value(mobile, desktop, Audit::FirstInput),
        cls: select_audit_value(mobile, desktop, Audit::CumulativeLayoutShift),
        speed_index_ms: select_audit_value(mobile, desktop, Audit::SpeedIndex),
    }
}

/// Scales a [0,1] performance score to 0-100, rounded.
pub fn page_speed_score(performance: f64) -> u8 {
    (performance * 100.0).round().clamp(0.0, 100.0) as u8
}
