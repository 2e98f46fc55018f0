//! Per-request authentication headers.
//!
//! Credentials arrive as opaque, pre-validated tokens; how they were
//! obtained is not this crate's concern.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, COOKIE};

use crate::error::FetchError;

/// Header name for the CSRF token.
const CSRF_HEADER: &str = "x-csrf-token";

/// Authenticated session material for the provider's private API.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    bearer: String,
    cookie: String,
    csrf: String,
}

impl SessionAuth {
    /// Creates session auth from pre-validated tokens.
    pub fn new(
        bearer: impl Into<String>,
        cookie: impl Into<String>,
        csrf: impl Into<String>,
    ) -> Self {
        Self {
            bearer: bearer.into(),
            cookie: cookie.into(),
            csrf: csrf.into(),
        }
    }

    /// Returns the raw cookie header value.
    pub fn cookie(&self) -> &str {
        &self.cookie
    }

    /// Builds the header set attached to every API request.
    pub fn headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.bearer))
                .map_err(|e| FetchError::Credentials(format!("Invalid bearer token: {e}")))?,
        );
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&self.cookie)
                .map_err(|e| FetchError::Credentials(format!("Invalid cookie: {e}")))?,
        );
        headers.insert(
            CSRF_HEADER,
            HeaderValue::from_str(&self.csrf)
                .map_err(|e| FetchError::Credentials(format!("Invalid csrf token: {e}")))?,
        );

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_all_headers() {
        let auth = SessionAuth::new("AAAA", "auth_token=abc; ct0=def", "def");
        let headers = auth.headers().unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer AAAA");
        assert_eq!(headers.get(COOKIE).unwrap(), "auth_token=abc; ct0=def");
        assert_eq!(headers.get(CSRF_HEADER).unwrap(), "def");
    }

    #[test]
    fn test_rejects_non_ascii_cookie() {
        let auth = SessionAuth::new("AAAA", "bad\ncookie", "def");
        let err = auth.headers().unwrap_err();
        assert!(matches!(err, FetchError::Credentials(_)));
    }
}
