//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout equal to the per-call timeout
/// - Redirect following (up to `MAX_REDIRECT_HOPS` hops)
///
/// The same client serves the scoring calls and the content fetch; its connection
/// pool is safe to share across concurrent analyses.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(config.call_timeout())
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}
