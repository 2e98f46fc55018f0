//! Bookmark folder listing.

use serde_json::{json, Value};

use magpie_core::{BookmarkFolder, CollectionKind};
use magpie_fetch::{ApiRequest, CollectionSource, FetchError, PageParams, RawPage};

use crate::request::{graphql_get, page_variables};

/// The user's bookmark folder list.
///
/// The folders slice is not a timeline: items sit directly under
/// `data.bookmark_collections_slice.items` with a `slice_info` cursor.
pub struct FoldersSource;

impl CollectionSource for FoldersSource {
    type Item = BookmarkFolder;

    fn operation(&self) -> &'static str {
        CollectionKind::BookmarkFolders.operation_name()
    }

    fn build_request(
        &self,
        query_id: &str,
        params: &PageParams,
    ) -> Result<ApiRequest, FetchError> {
        let variables = page_variables(&json!({}), params);
        graphql_get(query_id, self.operation(), &variables)
    }

    fn extract(&self, payload: &Value) -> Option<RawPage<BookmarkFolder>> {
        let slice = payload.get("data")?.get("bookmark_collections_slice")?;

        let items = slice
            .get("items")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        Some(BookmarkFolder {
                            id: entry.get("id").and_then(Value::as_str)?.to_string(),
                            name: entry
                                .get("name")
                                .and_then(Value::as_str)
                                .unwrap_or_default()
                                .to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let next_cursor = slice
            .get("slice_info")
            .and_then(|info| info.get("next_cursor"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(RawPage { items, next_cursor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magpie_core::Identified;

    #[test]
    fn test_extracts_folders_and_cursor() {
        let payload = json!({
            "data": {
                "bookmark_collections_slice": {
                    "items": [
                        {"id": "100", "name": "reading"},
                        {"id": "101", "name": "rust"}
                    ],
                    "slice_info": {"next_cursor": "s1"}
                }
            }
        });

        let page = FoldersSource.extract(&payload).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].identity(), "100");
        assert_eq!(page.items[1].name, "rust");
        assert_eq!(page.next_cursor.as_deref(), Some("s1"));
    }

    #[test]
    fn test_missing_slice_is_unrecognizable() {
        let payload = json!({"data": {}});
        assert!(FoldersSource.extract(&payload).is_none());
    }

    #[test]
    fn test_final_slice_has_no_cursor() {
        let payload = json!({
            "data": {
                "bookmark_collections_slice": {
                    "items": [{"id": "100", "name": "reading"}]
                }
            }
        });

        let page = FoldersSource.extract(&payload).unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.next_cursor.is_none());
    }
}
