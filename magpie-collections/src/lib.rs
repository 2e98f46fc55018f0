// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Magpie Collections
//!
//! The provider-specific surface over the fetch engine: GraphQL request
//! shapes, response extractors, static query-id fallback tables, and
//! query-id discovery for X/Twitter bookmarks, bookmark folders, and likes.
//!
//! Each collection is a small [`magpie_fetch::CollectionSource`]
//! implementation (a request builder plus an extraction function); the
//! shared driver in `magpie-fetch` does everything else.
//!
//! The public entry points live on [`Session`]:
//!
//! ```ignore
//! let session = Session::new(SessionAuth::new(bearer, cookie, csrf))?;
//! let tweets = session.fetch_bookmarks(PageBudget::count(100)).await?;
//! ```

pub mod api;
pub mod bookmarks;
pub mod discovery;
pub mod folders;
pub mod likes;
pub mod operations;
pub mod request;
pub mod timeline;
pub mod user;

pub use api::Session;
pub use bookmarks::{BookmarksSource, FolderTimelineSource};
pub use discovery::BundleQueryIdSource;
pub use folders::FoldersSource;
pub use likes::LikesSource;
