//! Timeline payload extraction.
//!
//! Bookmarks, folder timelines, and likes all come back as the provider's
//! timeline-instruction tree. The walk tolerates a missing or partial
//! instruction tree by yielding an empty page; only a payload with no
//! timeline root at all is treated as unrecognizable.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::trace;

use magpie_core::Tweet;
use magpie_fetch::RawPage;

/// The provider's timestamp format, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Extracts one timeline page from a raw payload.
///
/// `path` locates the timeline root (it differs per collection, e.g.
/// `data.bookmark_timeline_v2.timeline`). Returns `None` when that root is
/// absent; a root without instructions is a valid empty page.
pub fn extract_timeline(payload: &Value, path: &[&str]) -> Option<RawPage<Tweet>> {
    let mut node = payload;
    for key in path {
        node = node.get(key)?;
    }

    let mut items = Vec::new();
    let mut next_cursor = None;

    let instructions = node
        .get("instructions")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    for instruction in instructions {
        let Some(entries) = instruction.get("entries").and_then(Value::as_array) else {
            continue;
        };

        for entry in entries {
            let Some(content) = entry.get("content") else {
                continue;
            };

            match content.get("entryType").and_then(Value::as_str) {
                Some("TimelineTimelineItem") => {
                    let Some(item_content) = content.get("itemContent") else {
                        continue;
                    };
                    // Promoted entries are ads, not part of the collection.
                    if item_content.get("promotedMetadata").is_some() {
                        trace!("Skipping promoted entry");
                        continue;
                    }
                    if let Some(tweet) = item_content
                        .get("tweet_results")
                        .and_then(|r| r.get("result"))
                        .and_then(parse_tweet)
                    {
                        items.push(tweet);
                    }
                }
                Some("TimelineTimelineCursor") => {
                    if content.get("cursorType").and_then(Value::as_str) == Some("Bottom") {
                        next_cursor = content
                            .get("value")
                            .and_then(Value::as_str)
                            .map(str::to_string);
                    }
                }
                _ => {}
            }
        }
    }

    Some(RawPage { items, next_cursor })
}

/// Parses one `tweet_results.result` node.
///
/// Tombstones and other non-tweet results are skipped by returning `None`.
fn parse_tweet(result: &Value) -> Option<Tweet> {
    // Limited-visibility tweets arrive wrapped one level deeper.
    let result = if result.get("__typename").and_then(Value::as_str)
        == Some("TweetWithVisibilityResults")
    {
        result.get("tweet")?
    } else {
        result
    };

    let id = result.get("rest_id").and_then(Value::as_str)?.to_string();
    let legacy = result.get("legacy").cloned().unwrap_or(Value::Null);

    let user_legacy = result
        .get("core")
        .and_then(|c| c.get("user_results"))
        .and_then(|u| u.get("result"))
        .and_then(|r| r.get("legacy"))
        .cloned()
        .unwrap_or(Value::Null);

    let created_at = legacy
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_str(s, CREATED_AT_FORMAT).ok())
        .map(|dt| dt.with_timezone(&Utc));

    let urls = legacy
        .get("entities")
        .and_then(|e| e.get("urls"))
        .and_then(Value::as_array)
        .map(|urls| {
            urls.iter()
                .filter_map(|u| u.get("expanded_url").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Tweet {
        id,
        text: legacy
            .get("full_text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        author_handle: user_legacy
            .get("screen_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        author_name: user_legacy
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        created_at,
        like_count: legacy
            .get("favorite_count")
            .and_then(Value::as_u64)
            .unwrap_or_default(),
        retweet_count: legacy
            .get("retweet_count")
            .and_then(Value::as_u64)
            .unwrap_or_default(),
        urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BOOKMARKS_PATH: &[&str] = &["data", "bookmark_timeline_v2", "timeline"];

    fn tweet_entry(id: &str) -> Value {
        json!({
            "entryId": format!("tweet-{id}"),
            "content": {
                "entryType": "TimelineTimelineItem",
                "itemContent": {
                    "itemType": "TimelineTweet",
                    "tweet_results": {
                        "result": {
                            "rest_id": id,
                            "legacy": {
                                "full_text": format!("tweet {id}"),
                                "created_at": "Wed Oct 10 20:19:24 +0000 2018",
                                "favorite_count": 3,
                                "retweet_count": 1,
                                "entities": {
                                    "urls": [{"expanded_url": "https://example.com"}]
                                }
                            },
                            "core": {
                                "user_results": {
                                    "result": {
                                        "legacy": {
                                            "screen_name": "someone",
                                            "name": "Some One"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })
    }

    fn cursor_entry(value: &str) -> Value {
        json!({
            "entryId": format!("cursor-bottom-{value}"),
            "content": {
                "entryType": "TimelineTimelineCursor",
                "cursorType": "Bottom",
                "value": value
            }
        })
    }

    fn timeline_payload(entries: Vec<Value>) -> Value {
        json!({
            "data": {
                "bookmark_timeline_v2": {
                    "timeline": {
                        "instructions": [
                            {"type": "TimelineAddEntries", "entries": entries}
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn test_extracts_tweets_and_bottom_cursor() {
        let payload =
            timeline_payload(vec![tweet_entry("1"), tweet_entry("2"), cursor_entry("c1")]);

        let page = extract_timeline(&payload, BOOKMARKS_PATH).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor.as_deref(), Some("c1"));

        let first = &page.items[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.text, "tweet 1");
        assert_eq!(first.author_handle, "someone");
        assert_eq!(first.like_count, 3);
        assert_eq!(first.urls, vec!["https://example.com"]);
        assert!(first.created_at.is_some());
    }

    #[test]
    fn test_missing_timeline_root_is_unrecognizable() {
        let payload = json!({"data": {}});
        assert!(extract_timeline(&payload, BOOKMARKS_PATH).is_none());
    }

    #[test]
    fn test_missing_instructions_is_empty_page() {
        let payload = json!({
            "data": {"bookmark_timeline_v2": {"timeline": {}}}
        });

        let page = extract_timeline(&payload, BOOKMARKS_PATH).unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_visibility_wrapped_tweet() {
        let mut entry = tweet_entry("9");
        let result = entry["content"]["itemContent"]["tweet_results"]["result"].take();
        entry["content"]["itemContent"]["tweet_results"]["result"] = json!({
            "__typename": "TweetWithVisibilityResults",
            "tweet": result
        });

        let payload = timeline_payload(vec![entry]);
        let page = extract_timeline(&payload, BOOKMARKS_PATH).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "9");
    }

    #[test]
    fn test_promoted_entries_are_skipped() {
        let mut entry = tweet_entry("7");
        entry["content"]["itemContent"]["promotedMetadata"] = json!({"impressionId": "x"});

        let payload = timeline_payload(vec![entry, tweet_entry("8")]);
        let page = extract_timeline(&payload, BOOKMARKS_PATH).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "8");
    }

    #[test]
    fn test_tombstone_results_are_skipped() {
        let mut entry = tweet_entry("5");
        entry["content"]["itemContent"]["tweet_results"]["result"] =
            json!({"__typename": "TweetTombstone"});

        let payload = timeline_payload(vec![entry]);
        let page = extract_timeline(&payload, BOOKMARKS_PATH).unwrap();
        assert!(page.items.is_empty());
    }
}
