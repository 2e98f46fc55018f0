//! Single-page fetching across candidate query ids.
//!
//! One logical page request tries every candidate query id in order until
//! one yields a usable page. A full set of 404s marks the operation's query
//! ids as stale, which the refresh wrapper recovers from exactly once per
//! page request.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use magpie_core::Identified;

use crate::auth::SessionAuth;
use crate::client::{ApiRequest, Transport};
use crate::error::FetchError;
use crate::resolver::QueryIdResolver;
use crate::retry::{send_with_retry, RetryPolicy};

/// GraphQL variable carrying the requested page size.
const COUNT_PARAM: &str = "count";

/// GraphQL variable carrying the continuation cursor.
const CURSOR_PARAM: &str = "cursor";

/// Longest error detail kept from a response body.
const MAX_ERROR_DETAIL: usize = 200;

// ============================================================================
// Page types
// ============================================================================

/// Pagination parameters for one page request.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    /// Requested page size; omitted entirely when `None`.
    pub count: Option<u32>,
    /// Continuation cursor from the previous page, if any.
    pub cursor: Option<String>,
}

/// One extracted page: items in provider order plus the continuation
/// cursor, `None` meaning end of collection.
#[derive(Debug, Clone)]
pub struct RawPage<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Opaque continuation cursor for the next page.
    pub next_cursor: Option<String>,
}

// ============================================================================
// Collection source
// ============================================================================

/// The provider-specific half of a page fetch.
///
/// One implementation per collection supplies the request shape and the
/// payload walk; the fetcher and driver are shared. This is the seam that
/// keeps the engine free of per-collection subclassing.
pub trait CollectionSource: Send + Sync {
    /// The record type this collection yields.
    type Item: Identified + Send;

    /// The GraphQL operation name, used for query-id resolution.
    fn operation(&self) -> &'static str;

    /// Builds the page request for one candidate query id.
    fn build_request(&self, query_id: &str, params: &PageParams)
        -> Result<ApiRequest, FetchError>;

    /// Extracts the page from a raw payload.
    ///
    /// Returns `None` when the payload carries no recognizable page
    /// structure for this collection (the candidate is considered failed).
    /// A present-but-empty instruction tree is a valid empty page and
    /// returns `Some` with no items.
    fn extract(&self, payload: &Value) -> Option<RawPage<Self::Item>>;
}

// ============================================================================
// Page fetcher
// ============================================================================

/// Fetches single pages for one collection, trying candidate query ids in
/// order and recovering from stale ids with one forced refresh.
pub struct PageFetcher<S: CollectionSource> {
    transport: Arc<dyn Transport>,
    auth: SessionAuth,
    resolver: Arc<QueryIdResolver>,
    source: S,
    retry: RetryPolicy,
}

impl<S: CollectionSource> PageFetcher<S> {
    /// Creates a page fetcher for one collection.
    pub fn new(
        transport: Arc<dyn Transport>,
        auth: SessionAuth,
        resolver: Arc<QueryIdResolver>,
        source: S,
    ) -> Self {
        Self {
            transport,
            auth,
            resolver,
            source,
            retry: RetryPolicy::default(),
        }
    }

    /// Overrides the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetches one page, refreshing stale query ids at most once.
    ///
    /// On a not-found failure the resolver's cached primary is invalidated
    /// and the whole candidate cycle runs exactly one more time; any other
    /// failure, including a second not-found, is returned as-is.
    pub async fn fetch_page(
        &self,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<RawPage<S::Item>, FetchError> {
        let params = PageParams {
            count: Some(page_size),
            cursor: cursor.map(str::to_string),
        };

        match self.run_cycle(&params).await {
            Err(error) if error.is_stale_query_ids() => {
                info!(
                    operation = self.source.operation(),
                    "All query ids returned 404, forcing refresh"
                );
                self.resolver.force_refresh(self.source.operation()).await;
                self.run_cycle(&params).await
            }
            outcome => outcome,
        }
    }

    /// Runs one candidate cycle, reshaping the request once if the server
    /// variant rejects the page-size parameter by name.
    ///
    /// A rejection naming the cursor parameter is permanent: silently
    /// dropping the cursor would restart the collection from page one.
    async fn run_cycle(&self, params: &PageParams) -> Result<RawPage<S::Item>, FetchError> {
        match self.try_candidates(params).await {
            Err(FetchError::Provider(message)) => {
                if params.cursor.is_some() && mentions_parameter(&message, CURSOR_PARAM) {
                    return Err(FetchError::CursorRejected {
                        operation: self.source.operation().to_string(),
                    });
                }
                if params.count.is_some() && mentions_parameter(&message, COUNT_PARAM) {
                    debug!(
                        operation = self.source.operation(),
                        "Server rejected the page size parameter, retrying without it"
                    );
                    let stripped = PageParams {
                        count: None,
                        cursor: params.cursor.clone(),
                    };
                    return self.try_candidates(&stripped).await;
                }
                Err(FetchError::Provider(message))
            }
            outcome => outcome,
        }
    }

    /// Tries each candidate query id in order until one yields a page.
    async fn try_candidates(&self, params: &PageParams) -> Result<RawPage<S::Item>, FetchError> {
        let operation = self.source.operation();
        let candidates = self.resolver.candidates(operation).await;

        if candidates.is_empty() {
            return Err(FetchError::Provider(format!(
                "No candidate query ids for {operation}"
            )));
        }

        let mut saw_not_found = false;
        let mut last_error: Option<String> = None;

        for query_id in &candidates {
            let headers = self.auth.headers()?;
            let request = self
                .source
                .build_request(query_id, params)?
                .with_headers(headers);

            let response = send_with_retry(self.transport.as_ref(), &request, &self.retry).await?;

            if response.is_not_found() {
                debug!(operation, query_id = %query_id, "Query id rejected as unknown");
                saw_not_found = true;
                continue;
            }

            if !response.is_success() {
                return Err(FetchError::Status {
                    status: response.status,
                    detail: truncate(&response.body),
                });
            }

            let payload: Value = match serde_json::from_str(&response.body) {
                Ok(value) => value,
                Err(error) => {
                    last_error = Some(format!("Invalid JSON: {error}"));
                    continue;
                }
            };

            let provider_errors = joined_errors(&payload);

            if let Some(page) = self.source.extract(&payload) {
                if let Some(errors) = &provider_errors {
                    // Non-fatal: a usable page arrived alongside the errors.
                    warn!(operation, errors = %errors, "Provider reported errors with a usable page");
                }
                debug!(
                    operation,
                    query_id = %query_id,
                    items = page.items.len(),
                    has_cursor = page.next_cursor.is_some(),
                    "Page extracted"
                );
                return Ok(page);
            }

            last_error =
                Some(provider_errors.unwrap_or_else(|| "Unrecognized response shape".to_string()));
        }

        if saw_not_found {
            Err(FetchError::StaleQueryIds {
                operation: operation.to_string(),
            })
        } else {
            Err(FetchError::Provider(last_error.unwrap_or_else(|| {
                format!("All query ids failed for {operation}")
            })))
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Joins a GraphQL-style top-level error list into one message.
fn joined_errors(payload: &Value) -> Option<String> {
    let errors = payload.get("errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }

    let joined = errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
        })
        .collect::<Vec<_>>()
        .join("; ");

    Some(joined)
}

/// Returns true if a provider error message names the given GraphQL
/// variable.
fn mentions_parameter(message: &str, name: &str) -> bool {
    message.contains(&format!("${name}"))
        || message.contains(&format!("'{name}'"))
        || message.contains(&format!("\"{name}\""))
}

/// Truncates a response body for error reporting.
fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_DETAIL {
        body.to_string()
    } else {
        body.chars().take(MAX_ERROR_DETAIL).collect::<String>() + "..."
    }
}

// ============================================================================
// Tests
// ============================================================================
