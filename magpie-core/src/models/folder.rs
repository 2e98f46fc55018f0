//! Bookmark folder records.

use serde::{Deserialize, Serialize};

use crate::traits::Identified;

/// A bookmark folder as returned by the folders slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkFolder {
    /// Opaque provider identity.
    pub id: String,
    /// User-visible folder name.
    pub name: String,
}

impl Identified for BookmarkFolder {
    fn identity(&self) -> &str {
        &self.id
    }
}
