//! Text output formatting with colors.

use chrono::Local;
use magpie_core::{BookmarkFolder, Tweet};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const BLUE: &str = "\x1b[34m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a tweet list.
    pub fn format_tweets(&self, tweets: &[Tweet]) -> String {
        if tweets.is_empty() {
            return "No tweets found.".to_string();
        }

        let mut lines = Vec::new();
        for tweet in tweets {
            if !lines.is_empty() {
                lines.push(String::new()); // Blank line between tweets
            }

            // Header: "Display Name (@handle) · 2026-03-01 14:02"
            let mut header = format!(
                "{} ({})",
                self.bold(&tweet.author_name),
                self.cyan(&format!("@{}", tweet.author_handle))
            );
            if let Some(posted) = tweet.created_at {
                let local = posted.with_timezone(&Local);
                header.push_str(&self.dim(&format!(
                    "  {}",
                    local.format("%Y-%m-%d %H:%M")
                )));
            }
            lines.push(header);

            for text_line in tweet.text.lines() {
                lines.push(format!("  {text_line}"));
            }

            lines.push(self.dim(&format!(
                "  ♥ {}  ↻ {}",
                tweet.like_count, tweet.retweet_count
            )));
            lines.push(format!("  {}", self.blue(&tweet.url())));
        }

        lines.push(String::new());
        lines.push(self.dim(&format!("{} tweets", tweets.len())));
        lines.join("\n")
    }

    /// Formats a folder list.
    pub fn format_folders(&self, folders: &[BookmarkFolder]) -> String {
        if folders.is_empty() {
            return "No bookmark folders found.".to_string();
        }

        let mut lines = Vec::new();
        for folder in folders {
            lines.push(format!(
                "{:<22} {}",
                self.dim(&folder.id),
                self.bold(&folder.name)
            ));
        }
        lines.join("\n")
    }

    fn bold(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    fn cyan(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    fn blue(&self, s: &str) -> String {
        self.wrap(s, BLUE)
    }

    fn wrap(&self, s: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
