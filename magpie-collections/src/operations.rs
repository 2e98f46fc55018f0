//! GraphQL operation tables.
//!
//! Query ids rotate with provider deploys. For each operation the table
//! below lists ids observed in past deploys, tried in order after the
//! freshly discovered primary. Adding a newly observed id here is the only
//! change a rotation requires.

use serde_json::{json, Value};

use magpie_core::CollectionKind;

/// Base URL for the provider's GraphQL endpoints.
pub const GRAPHQL_BASE: &str = "https://x.com/i/api/graphql";

/// Known historical query ids for the bookmarks timeline.
pub const BOOKMARKS_FALLBACKS: &[&str] = &["tmd4ifV8RHltzn8ymGg1aw", "j5KExFXtSWj8HjRui17ydA"];

/// Known historical query ids for the bookmark folders slice.
pub const BOOKMARK_FOLDERS_FALLBACKS: &[&str] = &["i78YDd0Tza-dV4SYs58kRg"];

/// Known historical query ids for a bookmark folder timeline.
pub const FOLDER_TIMELINE_FALLBACKS: &[&str] = &["13H7EUATwethsj-XxX5DYA"];

/// Known historical query ids for the likes timeline.
pub const LIKES_FALLBACKS: &[&str] = &["9s8V6sUI8fZLDiN-REkAxA", "B8I_QCljDBVfin21TTWMqA"];

/// The fallback table handed to the query-id resolver.
pub fn fallback_table() -> [(&'static str, &'static [&'static str]); 4] {
    [
        (
            CollectionKind::Bookmarks.operation_name(),
            BOOKMARKS_FALLBACKS,
        ),
        (
            CollectionKind::BookmarkFolders.operation_name(),
            BOOKMARK_FOLDERS_FALLBACKS,
        ),
        (
            CollectionKind::FolderTimeline.operation_name(),
            FOLDER_TIMELINE_FALLBACKS,
        ),
        (CollectionKind::Likes.operation_name(), LIKES_FALLBACKS),
    ]
}

/// Feature switches the provider requires on every GraphQL call.
///
/// The server rejects requests missing flags it knows about; unknown extra
/// flags are ignored, so this set errs on the side of inclusion.
pub fn feature_switches() -> Value {
    json!({
        "graphql_timeline_v2_bookmark_timeline": true,
        "rweb_lists_timeline_redesign_enabled": true,
        "responsive_web_graphql_exclude_directive_enabled": true,
        "verified_phone_label_enabled": false,
        "creator_subscriptions_tweet_preview_api_enabled": true,
        "responsive_web_graphql_timeline_navigation_enabled": true,
        "responsive_web_graphql_skip_user_profile_image_extensions_enabled": false,
        "tweetypie_unmention_optimization_enabled": true,
        "responsive_web_edit_tweet_api_enabled": true,
        "graphql_is_translatable_rweb_tweet_is_translatable_enabled": true,
        "view_counts_everywhere_api_enabled": true,
        "longform_notetweets_consumption_enabled": true,
        "responsive_web_twitter_article_tweet_consumption_enabled": false,
        "tweet_awards_web_tipping_enabled": false,
        "freedom_of_speech_not_reach_fetch_enabled": true,
        "standardized_nudges_misinfo": true,
        "tweet_with_visibility_results_prefer_gql_limited_actions_policy_enabled": true,
        "longform_notetweets_rich_text_read_enabled": true,
        "longform_notetweets_inline_media_enabled": true,
        "responsive_web_media_download_video_enabled": false,
        "responsive_web_enhance_cards_enabled": false
    })
}
