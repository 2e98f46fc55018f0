//! HTTP transport abstraction.
//!
//! The engine never talks to `reqwest` directly; it sends [`ApiRequest`]s
//! through the [`Transport`] trait so tests can script responses. One call
//! to [`Transport::send`] is one logical HTTP request with an enforced
//! timeout; all retrying happens above this layer.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Request / Response
// ============================================================================

/// One logical HTTP request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Fully built URL, query string included.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
}

impl ApiRequest {
    /// Creates a GET request for the given URL.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Replaces the request headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// The observable parts of an HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true for 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

// ============================================================================
// Transport
// ============================================================================

/// A single logical HTTP call with an enforced timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the response.
    ///
    /// Any status code is an `Ok` response; `Err` is reserved for transport
    /// failures (connect errors, timeouts, TLS).
    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, FetchError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a transport with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("magpie/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, FetchError> {
        debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self
            .inner
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(e.to_string())
                } else {
                    FetchError::Http(e)
                }
            })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!(status, body_len = body.len(), "Received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let url = Url::parse("https://x.com/i/api/graphql/abc/Bookmarks").unwrap();
        let request = ApiRequest::get(url);
        assert_eq!(request.method, Method::GET);
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_response_status_helpers() {
        let response = HttpResponse {
            status: 204,
            headers: HeaderMap::new(),
            body: String::new(),
        };
        assert!(response.is_success());
        assert!(!response.is_not_found());

        let missing = HttpResponse {
            status: 404,
            headers: HeaderMap::new(),
            body: String::new(),
        };
        assert!(!missing.is_success());
        assert!(missing.is_not_found());
    }
}
