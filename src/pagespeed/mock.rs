//! Fixed score report substituted when a scoring call is unavailable.

use crate::config::{
    FALLBACK_ACCESSIBILITY_SCORE, FALLBACK_BEST_PRACTICES_SCORE, FALLBACK_CLS, FALLBACK_FID_MS,
    FALLBACK_LCP_MS, FALLBACK_PERFORMANCE_SCORE, FALLBACK_SEO_SCORE, FALLBACK_SPEED_INDEX_MS,
};

use super::types::ScoreReport;

/// The mock score report. Identical for both strategies.
pub fn mock_score_report() -> ScoreReport {
    ScoreReport {
        performance: Some(FALLBACK_PERFORMANCE_SCORE),
        accessibility: Some(FALLBACK_ACCESSIBILITY_SCORE),
        best_practices: Some(FALLBACK_BEST_PRACTICES_SCORE),
        seo: Some(FALLBACK_SEO_SCORE),
        lcp_ms: Some(FALLBACK_LCP_MS),
        fid_ms: Some(FALLBACK_FID_MS),
        cls: Some(FALLBACK_CLS),
        speed_index_ms: Some(FALLBACK_SPEED_INDEX_MS),
    }
}
