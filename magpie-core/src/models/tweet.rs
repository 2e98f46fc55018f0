//! Tweet records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Identified;

/// A single tweet as returned by a timeline page.
///
/// Both bookmarks and likes are timelines of tweets; the identity is the
/// provider's rest id, which is stable across pages and retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    /// Opaque provider identity (rest id).
    pub id: String,
    /// Full tweet text.
    pub text: String,
    /// Author handle (screen name, without the leading `@`).
    pub author_handle: String,
    /// Author display name.
    pub author_name: String,
    /// When the tweet was posted, if the provider supplied a parseable
    /// timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Like count at fetch time.
    #[serde(default)]
    pub like_count: u64,
    /// Retweet count at fetch time.
    #[serde(default)]
    pub retweet_count: u64,
    /// Expanded URLs mentioned in the tweet.
    #[serde(default)]
    pub urls: Vec<String>,
}

impl Tweet {
    /// Creates a tweet with just an identity, for tests and defaults.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            author_handle: String::new(),
            author_name: String::new(),
            created_at: None,
            like_count: 0,
            retweet_count: 0,
            urls: Vec::new(),
        }
    }

    /// The canonical web URL of this tweet.
    pub fn url(&self) -> String {
        format!("https://x.com/{}/status/{}", self.author_handle, self.id)
    }
}

impl Identified for Tweet {
    fn identity(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_rest_id() {
        let tweet = Tweet::with_id("1234");
        assert_eq!(tweet.identity(), "1234");
    }

    #[test]
    fn test_canonical_url() {
        let mut tweet = Tweet::with_id("99");
        tweet.author_handle = "somebody".to_string();
        assert_eq!(tweet.url(), "https://x.com/somebody/status/99");
    }
}
