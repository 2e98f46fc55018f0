//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use magpie_core::{BookmarkFolder, Tweet};
use serde::{Serialize, Serializer};

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for a single tweet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetOutput {
    pub id: String,
    pub text: String,
    pub author_handle: String,
    pub author_name: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_datetime_opt"
    )]
    pub created_at: Option<DateTime<Utc>>,
    pub like_count: u64,
    pub retweet_count: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    pub url: String,
}

/// JSON output for a single bookmark folder.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderOutput {
    pub id: String,
    pub name: String,
}

impl From<&Tweet> for TweetOutput {
    fn from(tweet: &Tweet) -> Self {
        Self {
            id: tweet.id.clone(),
            text: tweet.text.clone(),
            author_handle: tweet.author_handle.clone(),
            author_name: tweet.author_name.clone(),
            created_at: tweet.created_at,
            like_count: tweet.like_count,
            retweet_count: tweet.retweet_count,
            urls: tweet.urls.clone(),
            url: tweet.url(),
        }
    }
}

impl From<&BookmarkFolder> for FolderOutput {
    fn from(folder: &BookmarkFolder) -> Self {
        Self {
            id: folder.id.clone(),
            name: folder.name.clone(),
        }
    }
}

// ============================================================================
// Serialization helpers
// ============================================================================

fn serialize_datetime_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => s.serialize_str(&dt.to_rfc3339()),
        None => s.serialize_none(),
    }
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats a tweet list.
    pub fn format_tweets(&self, tweets: &[Tweet]) -> Result<String> {
        let outputs: Vec<TweetOutput> = tweets.iter().map(TweetOutput::from).collect();
        self.format(&outputs)
    }

    /// Formats a folder list.
    pub fn format_folders(&self, folders: &[BookmarkFolder]) -> Result<String> {
        let outputs: Vec<FolderOutput> = folders.iter().map(FolderOutput::from).collect();
        self.format(&outputs)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_tweet_output_includes_canonical_url() {
        let mut tweet = Tweet::with_id("7");
        tweet.author_handle = "somebody".to_string();

        let formatter = JsonFormatter::new(false);
        let output = formatter.format_tweets(&[tweet]).unwrap();
        assert!(output.contains(r#""url":"https://x.com/somebody/status/7""#));
        assert!(output.contains(r#""authorHandle":"somebody""#));
    }

    #[test]
    fn test_folder_output() {
        let folders = vec![BookmarkFolder {
            id: "42".to_string(),
            name: "Rust".to_string(),
        }];
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_folders(&folders).unwrap();
        assert_eq!(output, r#"[{"id":"42","name":"Rust"}]"#);
    }
}
