//! Bookmarks command - fetch the bookmarks timeline.

use anyhow::Result;
use tracing::info;

use crate::commands::{session, FetchArgs};
use crate::output;
use crate::Cli;

/// Runs the bookmarks command.
pub async fn run(args: &FetchArgs, cli: &Cli) -> Result<()> {
    let budget = args.budget()?;
    let session = session(cli)?;

    info!(?budget, "Fetching bookmarks");
    let tweets = session.fetch_bookmarks(budget).await?;

    output::print_tweets(&tweets, cli)
}
