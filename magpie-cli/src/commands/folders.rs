//! Folders command - list bookmark folders.

use anyhow::Result;
use magpie_core::PageBudget;
use tracing::info;

use crate::commands::session;
use crate::output;
use crate::Cli;

/// Runs the folders command.
pub async fn run(cli: &Cli) -> Result<()> {
    let session = session(cli)?;

    info!("Fetching bookmark folders");
    let found = session.fetch_bookmark_folders(PageBudget::unbounded()).await?;

    output::print_folders(&found, cli)
}
