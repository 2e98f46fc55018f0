//! Candidate query-id resolution.
//!
//! The provider rotates the query id embedded in its GraphQL endpoint
//! paths. For each logical operation the resolver yields an ordered,
//! deduplicated candidate list: the freshly resolved primary id first,
//! followed by static known-good fallbacks. The cached primary can be
//! invalidated with [`QueryIdResolver::force_refresh`] after an operation
//! reports not-found on every candidate.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Discovery mechanism for the current primary query id of an operation.
#[async_trait]
pub trait QueryIdSource: Send + Sync {
    /// Resolves the current query id for the operation name.
    async fn resolve(&self, operation: &str) -> Result<String, FetchError>;
}

/// Ordered candidate query ids per operation, with a cached primary.
///
/// The cache is scoped to this resolver instance. A forced refresh from one
/// collection run is visible to concurrent runs sharing the instance;
/// refresh only re-resolves, it never removes fallbacks, so last-refresh
/// wins without synchronization beyond the lock.
pub struct QueryIdResolver {
    source: Arc<dyn QueryIdSource>,
    fallbacks: HashMap<&'static str, &'static [&'static str]>,
    cache: RwLock<HashMap<String, String>>,
}

impl QueryIdResolver {
    /// Creates a resolver over a discovery source and a static fallback
    /// table (operation name -> known historical query ids).
    pub fn new(
        source: Arc<dyn QueryIdSource>,
        fallbacks: impl IntoIterator<Item = (&'static str, &'static [&'static str])>,
    ) -> Self {
        Self {
            source,
            fallbacks: fallbacks.into_iter().collect(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the candidate query ids for an operation, primary first,
    /// duplicates removed while preserving first-seen order.
    ///
    /// Discovery failure is not an error here: the primary is simply
    /// unavailable and only fallbacks are returned. The failure surfaces
    /// later, when every candidate is rejected.
    pub async fn candidates(&self, operation: &str) -> Vec<String> {
        let cached = self.cache.read().await.get(operation).cloned();

        let primary = match cached {
            Some(id) => Some(id),
            None => match self.source.resolve(operation).await {
                Ok(id) => {
                    debug!(operation, query_id = %id, "Resolved primary query id");
                    self.cache
                        .write()
                        .await
                        .insert(operation.to_string(), id.clone());
                    Some(id)
                }
                Err(error) => {
                    warn!(operation, error = %error, "Query id discovery failed, using fallbacks only");
                    None
                }
            },
        };

        let mut ordered = Vec::new();
        if let Some(id) = primary {
            ordered.push(id);
        }
        for id in self.fallbacks.get(operation).copied().unwrap_or(&[]) {
            if !ordered.iter().any(|seen| seen == id) {
                ordered.push((*id).to_string());
            }
        }

        ordered
    }

    /// Invalidates the cached primary id for the operation.
    ///
    /// The next [`Self::candidates`] call re-resolves it from the discovery
    /// source. Fallbacks are never removed.
    pub async fn force_refresh(&self, operation: &str) {
        debug!(operation, "Invalidating cached query id");
        self.cache.write().await.remove(operation);
    }
}

impl std::fmt::Debug for QueryIdResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryIdResolver")
            .field("operations", &self.fallbacks.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
