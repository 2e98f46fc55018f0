//! Likes command - fetch the likes timeline.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::{session, FetchArgs};
use crate::output;
use crate::Cli;

/// Arguments for the likes command.
#[derive(Args, Default)]
pub struct LikesArgs {
    /// Numeric user id; defaults to the account the cookie belongs to.
    #[arg(long)]
    pub user_id: Option<String>,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Runs the likes command.
pub async fn run(args: &LikesArgs, cli: &Cli) -> Result<()> {
    let budget = args.fetch.budget()?;
    let session = session(cli)?;

    info!(?budget, "Fetching likes");
    let tweets = session.fetch_likes(args.user_id.as_deref(), budget).await?;

    output::print_tweets(&tweets, cli)
}
