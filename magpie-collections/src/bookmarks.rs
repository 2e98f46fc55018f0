//! Bookmark collection sources.

use serde_json::{json, Value};

use magpie_core::{CollectionKind, Tweet};
use magpie_fetch::{ApiRequest, CollectionSource, FetchError, PageParams, RawPage};

use crate::request::{graphql_get, page_variables};
use crate::timeline::extract_timeline;

/// Timeline root for the bookmarks operation.
const BOOKMARKS_PATH: &[&str] = &["data", "bookmark_timeline_v2", "timeline"];

/// Timeline root for a folder timeline.
const FOLDER_PATH: &[&str] = &["data", "bookmark_collection_timeline", "timeline"];

/// The user's bookmarks timeline.
pub struct BookmarksSource;

impl CollectionSource for BookmarksSource {
    type Item = Tweet;

    fn operation(&self) -> &'static str {
        CollectionKind::Bookmarks.operation_name()
    }

    fn build_request(
        &self,
        query_id: &str,
        params: &PageParams,
    ) -> Result<ApiRequest, FetchError> {
        let base = json!({"includePromotedContent": false});
        let variables = page_variables(&base, params);
        graphql_get(query_id, self.operation(), &variables)
    }

    fn extract(&self, payload: &Value) -> Option<RawPage<Tweet>> {
        extract_timeline(payload, BOOKMARKS_PATH)
    }
}

/// The contents of one bookmark folder.
pub struct FolderTimelineSource {
    folder_id: String,
}

impl FolderTimelineSource {
    /// Creates a source for the given folder id.
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
        }
    }
}

impl CollectionSource for FolderTimelineSource {
    type Item = Tweet;

    fn operation(&self) -> &'static str {
        CollectionKind::FolderTimeline.operation_name()
    }

    fn build_request(
        &self,
        query_id: &str,
        params: &PageParams,
    ) -> Result<ApiRequest, FetchError> {
        let base = json!({"bookmark_collection_id": self.folder_id});
        let variables = page_variables(&base, params);
        graphql_get(query_id, self.operation(), &variables)
    }

    fn extract(&self, payload: &Value) -> Option<RawPage<Tweet>> {
        extract_timeline(payload, FOLDER_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmarks_request_shape() {
        let params = PageParams {
            count: Some(20),
            cursor: Some("c1".to_string()),
        };
        let request = BookmarksSource.build_request("qid", &params).unwrap();

        let url = request.url.as_str();
        assert!(url.starts_with("https://x.com/i/api/graphql/qid/Bookmarks?"));
        assert!(url.contains("count"));
        assert!(url.contains("cursor"));
    }

    #[test]
    fn test_folder_request_carries_folder_id() {
        let source = FolderTimelineSource::new("folder-42");
        let request = source.build_request("qid", &PageParams::default()).unwrap();

        assert!(request
            .url
            .as_str()
            .starts_with("https://x.com/i/api/graphql/qid/BookmarkFolderTimeline?"));
        assert!(request.url.query().unwrap().contains("folder-42"));
    }

    #[test]
    fn test_extract_uses_folder_root() {
        let payload = serde_json::json!({
            "data": {"bookmark_collection_timeline": {"timeline": {"instructions": []}}}
        });
        let source = FolderTimelineSource::new("folder-42");
        assert!(source.extract(&payload).is_some());
        assert!(BookmarksSource.extract(&payload).is_none());
    }
}
