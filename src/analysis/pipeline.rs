//! The URL analysis pipeline.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use log::{debug, info, warn};
use scraper::Html;
use tokio::sync::Semaphore;
use url::Url;

use super::merge::{merge_lighthouse_scores, merge_web_vitals, page_speed_score};
use super::result::{
    AnalysisResult, BasicInfo, DataSource, Links, MetaTags, Mobile, Performance, Security, Seo,
    ServerInfo, Sources, Technical,
};
use crate::app::validate_and_normalize_url;
use crate::config::{
    Config, DESCRIPTION_NOT_FOUND, HEADER_LAST_MODIFIED, HEADER_SERVER, TITLE_NOT_FOUND,
    UNKNOWN_VALUE,
};
use crate::detect::{detect_technologies, extract_security_headers};
use crate::error_handling::{
    record_fetch_error, record_score_error, AnalysisError, FallbackType, FetchError,
    InitializationError, ProcessingStats, ScoreError, WarningType,
};
use crate::fetch::{fetch_page_content, mock_page_content, PageContent};
use crate::initialization::init_client;
use crate::pagespeed::{mock_score_report, PageSpeedClient, ScoreReport, Strategy};
use crate::parse;

/// Analyzes URLs.
///
/// Holds only immutable settings, a shared HTTP client and atomic counters, so one
/// `Analyzer` can run any number of analyses concurrently.
///
/// # Examples
///
/// ```no_run
/// use site_analyzer::{Analyzer, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = Analyzer::new(&Config::default())?;
/// let result = analyzer.analyze("example.com").await?;
/// println!("{}: {}", result.url, result.performance.page_speed_score);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Arc<reqwest::Client>,
    pagespeed: PageSpeedClient,
    call_timeout: Duration,
    semaphore: Arc<Semaphore>,
    stats: Arc<ProcessingStats>,
}

impl Analyzer {
    /// Builds an analyzer and its HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::with_client(config, client))
    }

    /// Builds an analyzer around an existing HTTP client.
    pub fn with_client(config: &Config, client: Arc<reqwest::Client>) -> Self {
        let pagespeed = PageSpeedClient::new(
            Arc::clone(&client),
            &config.pagespeed_url,
            config.api_key(),
        );
        if !pagespeed.has_api_key() {
            info!("No PageSpeed API key configured, mock scores will be used");
        }
        Self {
            client,
            pagespeed,
            call_timeout: config.call_timeout(),
            semaphore: Arc::new(Semaphore::new(config.concurrency_limit())),
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Error, warning and fallback counters accumulated across analyses.
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }

    /// Analyzes one URL.
    ///
    /// Runs the mobile score call, the desktop score call and the content fetch
    /// concurrently. Any of them that fails or exceeds the per-call timeout is
    /// replaced by its fixed fallback.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidUrl` when the input cannot be normalized into
    /// an http(s) URL. No network request is made in that case. Once the URL is
    /// valid the analysis always succeeds.
    pub async fn analyze(&self, raw_url: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = validate_and_normalize_url(raw_url)?;
        info!("Analyzing {url}");

        let (mobile, desktop, content) = tokio::join!(
            self.score(&url, Strategy::Mobile),
            self.score(&url, Strategy::Desktop),
            self.fetch_content(&url),
        );

        let (mobile, mobile_source) = self.score_or_fallback(&url, Strategy::Mobile, mobile);
        let (desktop, desktop_source) = self.score_or_fallback(&url, Strategy::Desktop, desktop);
        let (content, content_source) = self.content_or_fallback(&url, content);

        let sources = Sources {
            mobile_score: mobile_source,
            desktop_score: desktop_source,
            content: content_source,
        };
        let result = assemble(&url, &mobile, &desktop, &content, sources, &self.stats);

        debug!(
            "Analysis of {url} complete: page speed score {}, sources {:?}",
            result.performance.page_speed_score, result.sources
        );
        Ok(result)
    }

    /// Analyzes several URLs concurrently, returning one result per input in input
    /// order.
    ///
    /// At most `Config::max_concurrency` analyses run at once.
    pub async fn analyze_many<S: AsRef<str>>(
        &self,
        urls: &[S],
    ) -> Vec<Result<AnalysisResult, AnalysisError>> {
        join_all(urls.iter().map(|url| async move {
            // The semaphore is never closed
            let _permit = self.semaphore.acquire().await.ok();
            self.analyze(url.as_ref()).await
        }))
        .await
    }

    async fn score(&self, url: &Url, strategy: Strategy) -> Result<ScoreReport, ScoreError> {
        match tokio::time::timeout(self.call_timeout, self.pagespeed.fetch(url, strategy)).await {
            Ok(result) => result,
            Err(_) => Err(ScoreError::Timeout(self.call_timeout)),
        }
    }

    async fn fetch_content(&self, url: &Url) -> Result<PageContent, FetchError> {
        match tokio::time::timeout(self.call_timeout, fetch_page_content(&self.client, url)).await
        {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.call_timeout)),
        }
    }

    fn score_or_fallback(
        &self,
        url: &Url,
        strategy: Strategy,
        result: Result<ScoreReport, ScoreError>,
    ) -> (ScoreReport, DataSource) {
        match result {
            Ok(report) => (report, DataSource::Live),
            Err(e) => {
                match &e {
                    ScoreError::MissingApiKey => {
                        debug!("Using mock {strategy} scores for {url}: {e}")
                    }
                    _ => warn!("Using mock {strategy} scores for {url}: {e}"),
                }
                record_score_error(&self.stats, &e);
                self.stats.increment_fallback(match strategy {
                    Strategy::Mobile => FallbackType::MobileScore,
                    Strategy::Desktop => FallbackType::DesktopScore,
                });
                (mock_score_report(), DataSource::Fallback)
            }
        }
    }

    fn content_or_fallback(
        &self,
        url: &Url,
        result: Result<PageContent, FetchError>,
    ) -> (PageContent, DataSource) {
        match result {
            Ok(content) => (content, DataSource::Live),
            Err(e) => {
                warn!("Using mock page content for {url}: {e}");
                record_fetch_error(&self.stats, &e);
                self.stats.increment_fallback(FallbackType::PageContent);
                (mock_page_content(), DataSource::Fallback)
            }
        }
    }
}

fn or_substitute(value: String, substitute: &str) -> String {
    if value.is_empty() {
        substitute.to_string()
    } else {
        value
    }
}

/// Merges the score reports and extracts page metrics into a result.
fn assemble(
    url: &Url,
    mobile: &ScoreReport,
    desktop: &ScoreReport,
    content: &PageContent,
    sources: Sources,
    stats: &ProcessingStats,
) -> AnalysisResult {
    let lighthouse = merge_lighthouse_scores(desktop, mobile, stats);
    let performance = Performance {
        page_speed_score: page_speed_score(lighthouse.performance),
        core_web_vitals: merge_web_vitals(mobile, desktop),
        lighthouse,
    };

    let document = Html::parse_document(&content.body);

    let title = parse::extract_title(&document);
    if title.is_empty() {
        stats.increment_warning(WarningType::MissingTitle);
    }
    let title = or_substitute(title, TITLE_NOT_FOUND);

    let description = parse::extract_meta_description(&document);
    if description.is_empty() {
        stats.increment_warning(WarningType::MissingMetaDescription);
    }
    let description = or_substitute(description, DESCRIPTION_NOT_FOUND);

    let keywords = parse::extract_meta_keywords(&document);
    if keywords.is_empty() {
        stats.increment_warning(WarningType::MissingMetaKeywords);
    }

    let viewport = parse::has_viewport(&document);
    if !viewport {
        stats.increment_warning(WarningType::MissingViewport);
    }

    let hrefs = parse::extract_links(&document);
    let link_stats = parse::classify_links(&hrefs, url);

    let basic_info = BasicInfo {
        title: title.clone(),
        description: description.clone(),
        status_code: content.status,
        response_time_ms: content.response_time_ms,
        content_length: content.body.len(),
        last_modified: content
            .header(HEADER_LAST_MODIFIED)
            .unwrap_or(UNKNOWN_VALUE)
            .to_string(),
    };

    let seo = Seo {
        meta_tags: MetaTags {
            title,
            description,
            keywords,
            og_tags: parse::extract_og_tags(&document),
        },
        headings: parse::count_headings(&document),
        images: parse::extract_images(&document),
    };

    let technical = Technical {
        server_info: ServerInfo {
            server: content
                .header(HEADER_SERVER)
                .unwrap_or(UNKNOWN_VALUE)
                .to_string(),
            technologies: detect_technologies(&content.headers, &content.body),
        },
        security: Security {
            ssl: url.scheme() == "https",
            security_headers: extract_security_headers(&content.headers),
        },
        mobile: Mobile {
            viewport,
            mobile_friendly: viewport,
        },
    };

    AnalysisResult {
        url: url.to_string(),
        analyzed_at: Utc::now(),
        basic_info,
        performance,
        seo,
        technical,
        links: Links {
            total: link_stats.total,
            internal: link_stats.internal,
            external: link_stats.external,
            hrefs,
        },
        sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn https(url: &str) -> Url {
        Url::parse(url).expect("valid test URL")
    }

    fn all_fallback() -> Sources {
        Sources {
            mobile_score: DataSource::Fallback,
            desktop_score: DataSource::Fallback,
            content: DataSource::Fallback,
        }
    }

    #[test]
    fn test_assemble_from_fallbacks() {
        let stats = ProcessingStats::new();
        let mock = mock_score_report();
        let result = assemble(
            &https("https://example.com/"),
            &mock,
            &mock,
            &mock_page_content(),
            all_fallback(),
            &stats,
        );

        assert_eq!(result.url, "https://example.com/");
        assert_eq!(result.basic_info.title, "Example Web Page");
        assert_eq!(result.basic_info.description, "This is an example web page");
        assert_eq!(result.basic_info.status_code, 200);
        assert_eq!(result.basic_info.last_modified, "Unknown");
        assert_eq!(result.performance.page_speed_score, 85);
        assert_eq!(result.performance.core_web_vitals.lcp_ms, 2500.0);
        assert_eq!(result.seo.meta_tags.keywords, vec!["example", "web", "analysis"]);
        assert_eq!((result.seo.headings.h1, result.seo.headings.h2), (1, 1));
        assert_eq!(result.seo.images.total, 2);
        assert_eq!(result.technical.server_info.server, "nginx/1.18.0");
        assert_eq!(result.technical.server_info.technologies, vec!["Nginx"]);
        assert!(result.technical.security.ssl);
        assert!(result.technical.mobile.viewport);
        assert!(result.technical.mobile.mobile_friendly);
        assert_eq!((result.links.internal, result.links.external), (1, 1));
        assert_eq!(stats.total_warnings(), 0);
    }

    #[test]
    fn test_assemble_substitutes_missing_page_data() {
        let stats = ProcessingStats::new();
        let content = PageContent {
            status: 200,
            headers: BTreeMap::new(),
            body: "<html><body><p>bare</p></body></html>".to_string(),
            response_time_ms: 12,
        };
        let empty = ScoreReport::default();
        let result = assemble(
            &https("http://example.com/"),
            &empty,
            &empty,
            &content,
            all_fallback(),
            &stats,
        );

        assert_eq!(result.basic_info.title, TITLE_NOT_FOUND);
        assert_eq!(result.basic_info.description, DESCRIPTION_NOT_FOUND);
        assert_eq!(result.technical.server_info.server, UNKNOWN_VALUE);
        assert!(result.technical.server_info.technologies.is_empty());
        assert!(!result.technical.security.ssl);
        assert!(!result.technical.mobile.viewport);
        assert_eq!(result.performance.lighthouse.performance, 0.85);
        assert_eq!(result.performance.core_web_vitals.fid_ms, 0.0);
        assert_eq!(stats.get_warning_count(WarningType::MissingTitle), 1);
        assert_eq!(stats.get_warning_count(WarningType::MissingViewport), 1);
        assert_eq!(stats.get_fallback_count(FallbackType::CategoryScore), 4);
    }

    #[tokio::test]
    async fn test_analyze_rejects_invalid_url() {
        let analyzer = Analyzer::new(&Config::default()).expect("analyzer");
        let err = analyzer.analyze("   ").await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
        assert_eq!(analyzer.stats().total_fallbacks(), 0);
    }
}
