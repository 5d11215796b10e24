//! Summary ratings derived from an `AnalysisResult`.

use serde::Serialize;
use strum_macros::Display;

use super::result::AnalysisResult;

/// Headline rating for a 0-100 performance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    #[strum(serialize = "Needs Improvement")]
    NeedsImprovement,
    Poor,
}

impl PerformanceRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => PerformanceRating::Excellent,
            70..=89 => PerformanceRating::Good,
            50..=69 => PerformanceRating::NeedsImprovement,
            _ => PerformanceRating::Poor,
        }
    }
}

/// Transport security status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum SecurityStatus {
    Secure,
    Warning,
    Insecure,
}

impl SecurityStatus {
    /// Secure needs https and at least three security headers; https with fewer
    /// headers is a warning.
    pub fn from_parts(ssl: bool, security_header_count: usize) -> Self {
        match (ssl, security_header_count) {
            (true, 3..) => SecurityStatus::Secure,
            (true, 1..) => SecurityStatus::Warning,
            _ => SecurityStatus::Insecure,
        }
    }
}

/// Mobile readiness score, 0-100.
pub fn mobile_score(viewport: bool, mobile_friendly: bool, page_speed_score: u8) -> u8 {
    let mut score: u8 = 0;
    if viewport {
        score += 40;
    }
    if mobile_friendly {
        score += 30;
    }
    if page_speed_score >= 70 {
        score += 30;
    }
    score.min(100)
}

/// Ratings shown at the top of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub performance_rating: PerformanceRating,
    pub security_status: SecurityStatus,
    pub mobile_score: u8,
}

impl Summary {
    pub fn of(result: &AnalysisResult) -> Self {
        let score = result.performance.page_speed_score;
        let technical = &result.technical;
        Summary {
            performance_rating: PerformanceRating::from_score(score),
            security_status: SecurityStatus::from_parts(
                technical.security.ssl,
                technical.security.security_headers.len(),
            ),
            mobile_score: mobile_score(
                technical.mobile.viewport,
                technical.mobile.mobile_friendly,
                score,
            ),
        }
    }
}
