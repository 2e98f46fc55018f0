//! CLI command implementations.

pub mod bookmarks;
pub mod folder;
pub mod folders;
pub mod likes;

use anyhow::{bail, Result};
use clap::Args;
use magpie_collections::Session;
use magpie_core::PageBudget;

use crate::{credentials, Cli};

/// Shared fetch sizing arguments.
#[derive(Args, Default)]
pub struct FetchArgs {
    /// Number of items to fetch.
    #[arg(long, short = 'n', conflicts_with = "all")]
    pub count: Option<usize>,

    /// Fetch the entire collection.
    #[arg(long)]
    pub all: bool,

    /// Stop after this many pages regardless of item count.
    #[arg(long)]
    pub max_pages: Option<usize>,
}

/// Default item target when neither --count nor --all is given.
const DEFAULT_COUNT: usize = 20;

impl FetchArgs {
    /// Turns the sizing flags into a page budget.
    pub fn budget(&self) -> Result<PageBudget> {
        if let Some(0) = self.count {
            bail!("--count must be at least 1");
        }
        if let Some(0) = self.max_pages {
            bail!("--max-pages must be at least 1");
        }

        let mut budget = if self.all {
            PageBudget::unbounded()
        } else {
            PageBudget::count(self.count.unwrap_or(DEFAULT_COUNT))
        };

        if let Some(pages) = self.max_pages {
            budget = budget.with_max_pages(pages);
        }

        Ok(budget)
    }
}

/// Builds an authenticated session from CLI flags and the environment.
pub fn session(cli: &Cli) -> Result<Session> {
    let auth = credentials::session_auth(cli)?;
    Ok(Session::new(auth)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_default_count() {
        let args = FetchArgs::default();
        let budget = args.budget().unwrap();
        assert_eq!(budget.remaining(0), Some(DEFAULT_COUNT));
    }

    #[test]
    fn test_budget_all_is_unbounded() {
        let args = FetchArgs {
            all: true,
            ..FetchArgs::default()
        };
        let budget = args.budget().unwrap();
        assert_eq!(budget.remaining(0), None);
    }

    #[test]
    fn test_budget_rejects_zero_count() {
        let args = FetchArgs {
            count: Some(0),
            ..FetchArgs::default()
        };
        assert!(args.budget().is_err());
    }

    #[test]
    fn test_budget_max_pages() {
        let args = FetchArgs {
            all: true,
            max_pages: Some(3),
            ..FetchArgs::default()
        };
        let budget = args.budget().unwrap();
        assert_eq!(budget.max_pages, Some(3));
        assert_eq!(budget.target, None);
    }
}
