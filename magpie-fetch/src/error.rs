//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed at the transport layer.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The provider answered with an unexpected HTTP status.
    #[error("HTTP {status}: {detail}")]
    Status {
        /// The response status code.
        status: u16,
        /// Truncated response body.
        detail: String,
    },

    /// Every candidate query id for an operation was rejected as unknown.
    ///
    /// This is the only failure eligible for a forced query-id refresh.
    #[error("All query ids for {operation} returned 404")]
    StaleQueryIds {
        /// The GraphQL operation name.
        operation: String,
    },

    /// The provider reported application-level errors and no usable page.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider rejected the continuation cursor.
    ///
    /// Dropping the cursor would silently restart the collection from page
    /// one, so this is not retried.
    #[error("Cursor rejected by {operation}; refusing to restart from page one")]
    CursorRejected {
        /// The GraphQL operation name.
        operation: String,
    },

    /// A credential could not be turned into a request header.
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns true if this failure means every candidate returned 404,
    /// making it eligible for a forced query-id refresh.
    pub fn is_stale_query_ids(&self) -> bool {
        matches!(self, Self::StaleQueryIds { .. })
    }

    /// Returns true if the transport layer considers this transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
