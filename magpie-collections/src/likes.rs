//! Likes timeline source.

use serde_json::{json, Value};

use magpie_core::{CollectionKind, Tweet};
use magpie_fetch::{ApiRequest, CollectionSource, FetchError, PageParams, RawPage};

use crate::request::{graphql_get, page_variables};
use crate::timeline::extract_timeline;

/// Timeline root for the likes operation.
const LIKES_PATH: &[&str] = &["data", "user", "result", "timeline_v2", "timeline"];

/// The user's likes timeline.
///
/// Unlike bookmarks, likes are scoped to a numeric user id, which must be
/// known up front (see [`crate::user::user_id_from_cookie`]).
pub struct LikesSource {
    user_id: String,
}

impl LikesSource {
    /// Creates a source for the given numeric user id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl CollectionSource for LikesSource {
    type Item = Tweet;

    fn operation(&self) -> &'static str {
        CollectionKind::Likes.operation_name()
    }

    fn build_request(
        &self,
        query_id: &str,
        params: &PageParams,
    ) -> Result<ApiRequest, FetchError> {
        let base = json!({
            "userId": self.user_id,
            "includePromotedContent": false,
            "withClientEventToken": false,
            "withVoice": true,
        });
        let variables = page_variables(&base, params);
        graphql_get(query_id, self.operation(), &variables)
    }

    fn extract(&self, payload: &Value) -> Option<RawPage<Tweet>> {
        extract_timeline(payload, LIKES_PATH)
    }
}
