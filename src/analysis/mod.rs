//! URL analysis: the pipeline, the merge policy, the result model and summary
//! ratings.

mod merge;
mod pipeline;
mod result;
mod summary;

// Re-export public API
pub use merge::{
    fallback_category_score, merge_lighthouse_scores, merge_web_vitals, page_speed_score,
    select_audit_value, select_category_score, ScoreTier,
};
pub use pipeline::Analyzer;
pub use result::{
    AnalysisResult, BasicInfo, CoreWebVitals, DataSource, LighthouseScores, Links, MetaTags,
    Mobile, Performance, Security, Seo, ServerInfo, Sources, Technical,
};
pub use summary::{mobile_score, PerformanceRating, SecurityStatus, Summary};
