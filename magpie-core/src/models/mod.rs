//! Domain models for magpie.
//!
//! The records the engine collects and the collection kinds it knows about.
//!
//! ## Submodules
//!
//! - [`tweet`] - Tweet records (bookmarks and likes are both tweets)
//! - [`folder`] - Bookmark folder records
//! - [`collection`] - The logical collection kinds

mod collection;
mod folder;
mod tweet;

pub use collection::CollectionKind;
pub use folder::BookmarkFolder;
pub use tweet::Tweet;
