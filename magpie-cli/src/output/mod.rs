//! Output formatting.

pub mod json;
pub mod text;

use anyhow::Result;
use magpie_core::{BookmarkFolder, Tweet};

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::{Cli, OutputFormat};

/// Prints a tweet list in the selected format.
pub fn print_tweets(tweets: &[Tweet], cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_tweets(tweets));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_tweets(tweets)?);
        }
    }
    Ok(())
}

/// Prints a folder list in the selected format.
pub fn print_folders(folders: &[BookmarkFolder], cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_folders(folders));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_folders(folders)?);
        }
    }
    Ok(())
}
