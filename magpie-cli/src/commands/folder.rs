//! Folder command - fetch the contents of one bookmark folder.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::{session, FetchArgs};
use crate::output;
use crate::Cli;

/// Arguments for the folder command.
#[derive(Args)]
pub struct FolderArgs {
    /// Folder id (from `magpie folders`).
    pub id: String,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Runs the folder command.
pub async fn run(args: &FolderArgs, cli: &Cli) -> Result<()> {
    let budget = args.fetch.budget()?;
    let session = session(cli)?;

    info!(folder = %args.id, ?budget, "Fetching folder contents");
    let tweets = session.fetch_folder(&args.id, budget).await?;

    output::print_tweets(&tweets, cli)
}
