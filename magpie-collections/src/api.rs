//! Public collection entry points.

use std::sync::Arc;
use tracing::instrument;

use magpie_core::{BookmarkFolder, PageBudget, Tweet};
use magpie_fetch::{
    CollectionSource, FetchError, PageFetcher, PaginationDriver, QueryIdResolver,
    ReqwestTransport, SessionAuth, Transport,
};

use crate::bookmarks::{BookmarksSource, FolderTimelineSource};
use crate::discovery::BundleQueryIdSource;
use crate::folders::FoldersSource;
use crate::likes::LikesSource;
use crate::operations::fallback_table;
use crate::user::user_id_from_cookie;

/// An authenticated session against the provider's private API.
///
/// The query-id resolver is shared across all collection runs on one
/// session, so a forced refresh triggered by one run benefits concurrent
/// runs as well. Runs themselves share no mutable state and may proceed
/// concurrently.
pub struct Session {
    transport: Arc<dyn Transport>,
    auth: SessionAuth,
    resolver: Arc<QueryIdResolver>,
}

impl Session {
    /// Creates a session with the production transport.
    pub fn new(auth: SessionAuth) -> Result<Self, FetchError> {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_transport(transport, auth))
    }

    /// Creates a session over a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>, auth: SessionAuth) -> Self {
        let discovery = Arc::new(BundleQueryIdSource::new(Arc::clone(&transport)));
        let resolver = Arc::new(QueryIdResolver::new(discovery, fallback_table()));

        Self {
            transport,
            auth,
            resolver,
        }
    }

    /// Fetches the user's bookmarks.
    #[instrument(skip(self))]
    pub async fn fetch_bookmarks(&self, budget: PageBudget) -> Result<Vec<Tweet>, FetchError> {
        self.collect(BookmarksSource, budget).await
    }

    /// Fetches the user's bookmark folders.
    #[instrument(skip(self))]
    pub async fn fetch_bookmark_folders(
        &self,
        budget: PageBudget,
    ) -> Result<Vec<BookmarkFolder>, FetchError> {
        self.collect(FoldersSource, budget).await
    }

    /// Fetches the contents of one bookmark folder.
    #[instrument(skip(self))]
    pub async fn fetch_folder(
        &self,
        folder_id: &str,
        budget: PageBudget,
    ) -> Result<Vec<Tweet>, FetchError> {
        self.collect(FolderTimelineSource::new(folder_id), budget)
            .await
    }

    /// Fetches the user's likes.
    ///
    /// The numeric user id is taken from `user_id` when given, otherwise
    /// derived from the session cookie's `twid` value.
    #[instrument(skip(self))]
    pub async fn fetch_likes(
        &self,
        user_id: Option<&str>,
        budget: PageBudget,
    ) -> Result<Vec<Tweet>, FetchError> {
        let user_id = match user_id {
            Some(id) => id.to_string(),
            None => user_id_from_cookie(self.auth.cookie()).ok_or_else(|| {
                FetchError::Credentials(
                    "No user id given and none found in the session cookie".to_string(),
                )
            })?,
        };

        self.collect(LikesSource::new(user_id), budget).await
    }

    /// Runs the shared pagination driver over one collection source.
    async fn collect<S: CollectionSource>(
        &self,
        source: S,
        budget: PageBudget,
    ) -> Result<Vec<S::Item>, FetchError> {
        let fetcher = PageFetcher::new(
            Arc::clone(&self.transport),
            self.auth.clone(),
            Arc::clone(&self.resolver),
            source,
        );
        PaginationDriver::new(fetcher).collect(budget).await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_likes_without_user_id_or_twid_fails() {
        let auth = SessionAuth::new("bearer", "auth_token=abc; ct0=def", "def");
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new().unwrap());
        let session = Session::with_transport(transport, auth);

        let err = session
            .fetch_likes(None, PageBudget::count(1))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Credentials(_)));
    }
}
