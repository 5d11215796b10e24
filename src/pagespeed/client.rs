//! PageSpeed Insights client.

use std::sync::Arc;

use log::debug;
use strum::IntoEnumIterator;
use url::Url;

use super::types::{Category, PageSpeedResponse, ScoreReport, Strategy};
use crate::error_handling::ScoreError;

/// Requests score reports from the PageSpeed Insights API.
///
/// Holds no per-request state; one client serves any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    api_key: Option<String>,
}

impl PageSpeedClient {
    /// Creates a client for `endpoint`. An empty or whitespace-only key counts as absent.
    pub fn new(client: Arc<reqwest::Client>, endpoint: &str, api_key: Option<&str>) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from),
        }
    }

    /// Whether real calls will be made.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetches the score report for `target` under `strategy`.
    ///
    /// Requests the four categories explicitly; the service otherwise returns only
    /// performance.
    ///
    /// # Errors
    ///
    /// - `ScoreError::MissingApiKey` when no key is configured (no request is sent)
    /// - `ScoreError::Request` on transport failure, non-2xx status, or an
    ///   undecodable body
    pub async fn fetch(&self, target: &Url, strategy: Strategy) -> Result<ScoreReport, ScoreError> {
        let api_key = self.api_key.as_deref().ok_or(ScoreError::MissingApiKey)?;

        let mut query: Vec<(&str, &str)> = vec![
            ("url", target.as_str()),
            ("strategy", strategy.key()),
            ("key", api_key),
        ];
        query.extend(Category::iter().map(|category| ("category", category.key())));

        debug!("Fetching PageSpeed data for {strategy} strategy: {target}");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        let body: PageSpeedResponse = response.json().await?;
        let report = ScoreReport::from(body);

        debug!(
            "PageSpeed {strategy} report for {target}: performance={:?} accessibility={:?} best-practices={:?} seo={:?}",
            report.performance, report.accessibility, report.best_practices, report.seo
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(api_key: Option<&str>) -> PageSpeedClient {
        PageSpeedClient::new(
            Arc::new(reqwest::Client::new()),
            "http://127.0.0.1:1/runPagespeed",
            api_key,
        )
    }

    #[test]
    fn test_empty_key_is_absent() {
        assert!(!test_client(None).has_api_key());
        assert!(!test_client(Some("")).has_api_key());
        assert!(!test_client(Some("  ")).has_api_key());
        assert!(test_client(Some("key")).has_api_key());
    }

    #[tokio::test]
    async fn test_fetch_without_key_skips_request() {
        let target = Url::parse("https://example.com").unwrap();
        let result = test_client(None).fetch(&target, Strategy::Mobile).await;
        assert!(matches!(result, Err(ScoreError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_endpoint_is_request_error() {
        let target = Url::parse("https://example.com").unwrap();
        let result = test_client(Some("key"))
            .fetch(&target, Strategy::Desktop)
            .await;
        assert!(matches!(result, Err(ScoreError::Request(_))));
    }
}
