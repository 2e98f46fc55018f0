//! Cursor-driven pagination across pages.
//!
//! Page requests are strictly sequential: the continuation cursor is a
//! sequential dependency, so each request is issued only after the previous
//! page's outcome is known. Each run owns its own identity set, item list,
//! and cursor; independent runs can proceed concurrently without shared
//! state.

use std::collections::HashSet;
use tracing::{debug, instrument};

use magpie_core::{Identified, PageBudget};

use crate::error::FetchError;
use crate::page::{CollectionSource, PageFetcher};

/// Fixed page size requested from the provider.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Drives a [`PageFetcher`] until a budget is satisfied or the collection
/// is exhausted.
pub struct PaginationDriver<S: CollectionSource> {
    fetcher: PageFetcher<S>,
}

impl<S: CollectionSource> PaginationDriver<S> {
    /// Creates a driver over a page fetcher.
    pub fn new(fetcher: PageFetcher<S>) -> Self {
        Self { fetcher }
    }

    /// Collects items until the budget is met or the collection ends.
    ///
    /// Items are deduplicated by identity in first-seen order; cursor APIs
    /// overlap pages under concurrent mutation, so duplicates are expected.
    /// The loop stops successfully when the provider returns no cursor, an
    /// unchanged cursor (no forward progress), an empty page, or the page
    /// ceiling is reached; a ceiling or empty-page stop yields a partial
    /// but successful result. A failing page fails the whole run with no
    /// items.
    #[instrument(skip(self), fields(budget = ?budget))]
    pub async fn collect(&self, budget: PageBudget) -> Result<Vec<S::Item>, FetchError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut items: Vec<S::Item> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages_fetched = 0usize;

        while !budget.is_met(items.len()) {
            let page_size = match budget.remaining(items.len()) {
                Some(remaining) => {
                    u32::try_from(remaining).map_or(DEFAULT_PAGE_SIZE, |r| DEFAULT_PAGE_SIZE.min(r))
                }
                None => DEFAULT_PAGE_SIZE,
            };

            let page = self.fetcher.fetch_page(page_size, cursor.as_deref()).await?;
            let fetched = page.items.len();

            for item in page.items {
                if budget.is_met(items.len()) {
                    // The rest of this page is discarded.
                    break;
                }
                if seen.insert(item.identity().to_string()) {
                    items.push(item);
                }
            }

            pages_fetched += 1;

            debug!(
                page = pages_fetched,
                fetched,
                collected = items.len(),
                "Processed page"
            );

            // An echoed cursor means no forward progress; treating it as
            // end-of-collection prevents an infinite loop.
            let stalled = page.next_cursor.is_some() && page.next_cursor == cursor;
            let ceiling_hit = budget.max_pages.is_some_and(|max| pages_fetched >= max);

            if page.next_cursor.is_none() || stalled || fetched == 0 || ceiling_hit {
                break;
            }

            cursor = page.next_cursor;
        }

        Ok(items)
    }
}
