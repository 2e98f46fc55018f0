//! Query-id discovery from the provider's JS bundle.
//!
//! The current query id for every GraphQL operation is embedded in the
//! provider's main web bundle as `queryId:"...",operationName:"..."`
//! pairs. Discovery fetches the home page to find the bundle URL, then the
//! bundle itself, and scrapes the pair for the requested operation.
//!
//! Discovery failures are soft: the resolver falls back to the static
//! query-id tables and the failure only matters if those are stale too.

use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use magpie_fetch::{ApiRequest, FetchError, QueryIdSource, Transport};

/// Page whose script tags reference the main bundle.
const HOME_URL: &str = "https://x.com/home";

/// Matches the main bundle URL in the home page HTML.
const BUNDLE_URL_PATTERN: &str =
    r#"https://abs\.twimg\.com/responsive-web/client-web(?:-legacy)?/main\.[0-9a-f]+\.js"#;

/// Resolves query ids by scraping the provider's web bundle.
pub struct BundleQueryIdSource {
    transport: Arc<dyn Transport>,
}

impl BundleQueryIdSource {
    /// Creates a discovery source over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url)
            .map_err(|e| FetchError::Provider(format!("Invalid discovery URL {url}: {e}")))?;
        let response = self.transport.send(&ApiRequest::get(url)).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                detail: "discovery fetch failed".to_string(),
            });
        }

        Ok(response.body)
    }
}

#[async_trait]
impl QueryIdSource for BundleQueryIdSource {
    async fn resolve(&self, operation: &str) -> Result<String, FetchError> {
        let html = self.fetch_text(HOME_URL).await?;
        let bundle_url = bundle_url_from_html(&html).ok_or_else(|| {
            FetchError::Provider("No main bundle URL in home page".to_string())
        })?;

        debug!(operation, bundle_url = %bundle_url, "Fetching bundle for query id");

        let bundle = self.fetch_text(&bundle_url).await?;
        query_id_from_bundle(&bundle, operation).ok_or_else(|| {
            FetchError::Provider(format!("Operation {operation} not found in bundle"))
        })
    }
}

/// Finds the main bundle URL in the home page HTML.
pub fn bundle_url_from_html(html: &str) -> Option<String> {
    let pattern = Regex::new(BUNDLE_URL_PATTERN).ok()?;
    pattern.find(html).map(|m| m.as_str().to_string())
}

/// Finds the query id for an operation inside the bundle text.
pub fn query_id_from_bundle(bundle: &str, operation: &str) -> Option<String> {
    let pattern = Regex::new(&format!(
        r#"queryId:"([A-Za-z0-9_-]+)",operationName:"{}""#,
        regex::escape(operation)
    ))
    .ok()?;

    pattern
        .captures(bundle)
        .map(|caps| caps[1].to_string())
}
