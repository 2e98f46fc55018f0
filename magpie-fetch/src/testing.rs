//! Shared test doubles for the fetch engine.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

use magpie_core::Tweet;

use crate::auth::SessionAuth;
use crate::client::{ApiRequest, HttpResponse, Transport};
use crate::error::FetchError;
use crate::page::{CollectionSource, PageFetcher, PageParams, RawPage};
use crate::resolver::{QueryIdResolver, QueryIdSource};

/// Body the provider sends with a 404 on an unknown query id.
pub const NOT_FOUND_BODY: &str = r#"{"errors":[{"message":"unknown queryId"}]}"#;

/// Fallback query ids wired into [`test_fetcher`].
pub const TEST_FALLBACKS: &[&str] = &["old1", "old2"];

// ============================================================================
// Mock transport
// ============================================================================

/// Transport that replays a scripted list of responses and records the
/// requested URLs.
pub struct MockTransport {
    script: Mutex<VecDeque<Result<HttpResponse, FetchError>>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn with_responses(responses: Vec<Result<HttpResponse, FetchError>>) -> Self {
        Self {
            script: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(request.url.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock transport script exhausted")
    }
}

/// Builds a response with the given status and body.
pub fn response_with_status(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: HeaderMap::new(),
        body: body.to_string(),
    }
}

/// Builds a 200 response around a JSON body.
pub fn json_response(body: &str) -> HttpResponse {
    response_with_status(200, body)
}

/// Builds the simple page payload [`TestSource`] understands.
pub fn page_body(ids: &[&str], next_cursor: Option<&str>) -> String {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| serde_json::json!({ "id": id }))
        .collect();
    serde_json::json!({
        "page": {
            "items": items,
            "next_cursor": next_cursor,
        }
    })
    .to_string()
}

// ============================================================================
// Scripted query id discovery
// ============================================================================

/// Query id source returning a fixed id (or a fixed failure) and counting
/// resolve calls.
pub struct ScriptedQueryIds {
    primary: Option<String>,
    resolves: Arc<AtomicUsize>,
}

impl ScriptedQueryIds {
    pub fn ok(id: &str) -> Self {
        Self {
            primary: Some(id.to_string()),
            resolves: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            primary: None,
            resolves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared counter of resolve calls, usable after the source is moved.
    pub fn resolve_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.resolves)
    }
}

#[async_trait]
impl QueryIdSource for ScriptedQueryIds {
    async fn resolve(&self, _operation: &str) -> Result<String, FetchError> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        self.primary
            .clone()
            .ok_or_else(|| FetchError::Provider("discovery unavailable".to_string()))
    }
}

// ============================================================================
// Test collection source
// ============================================================================

/// Minimal collection over the `{"page": {"items": [...], "next_cursor"}}`
/// shape; items are tweets with only an id.
pub struct TestSource;

impl CollectionSource for TestSource {
    type Item = Tweet;

    fn operation(&self) -> &'static str {
        "Bookmarks"
    }

    fn build_request(
        &self,
        query_id: &str,
        params: &PageParams,
    ) -> Result<ApiRequest, FetchError> {
        let mut url = Url::parse(&format!("https://x.com/i/api/graphql/{query_id}/Bookmarks"))
            .map_err(|e| FetchError::Provider(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(count) = params.count {
                pairs.append_pair("count", &count.to_string());
            }
            if let Some(cursor) = &params.cursor {
                pairs.append_pair("cursor", cursor);
            }
        }
        Ok(ApiRequest::get(url))
    }

    fn extract(&self, payload: &Value) -> Option<RawPage<Tweet>> {
        let page = payload.get("page")?;
        let items = page
            .get("items")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|e| e.get("id").and_then(Value::as_str))
                    .map(Tweet::with_id)
                    .collect()
            })
            .unwrap_or_default();
        let next_cursor = page
            .get("next_cursor")
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(RawPage { items, next_cursor })
    }
}

/// Wires a [`PageFetcher`] over [`TestSource`] with a scripted transport
/// and the standard fallback table.
pub fn test_fetcher(
    source: ScriptedQueryIds,
    responses: Vec<Result<HttpResponse, FetchError>>,
) -> (PageFetcher<TestSource>, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::with_responses(responses));
    let resolver = Arc::new(QueryIdResolver::new(
        Arc::new(source),
        [("Bookmarks", TEST_FALLBACKS)],
    ));
    let auth = SessionAuth::new("bearer", "auth_token=a; ct0=b", "b");
    let fetcher = PageFetcher::new(
        Arc::clone(&transport) as Arc<dyn Transport>,
        auth,
        resolver,
        TestSource,
    );
    (fetcher, transport)
}
