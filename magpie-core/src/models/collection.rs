//! Logical collection kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The timeline-shaped collections magpie can retrieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// The user's bookmarks timeline.
    Bookmarks,
    /// The user's bookmark folders (the folder list, not their contents).
    BookmarkFolders,
    /// The contents of one bookmark folder.
    FolderTimeline,
    /// The user's likes timeline.
    Likes,
}

impl CollectionKind {
    /// Returns the display name for this collection.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bookmarks => "Bookmarks",
            Self::BookmarkFolders => "Bookmark Folders",
            Self::FolderTimeline => "Bookmark Folder",
            Self::Likes => "Likes",
        }
    }

    /// The provider's GraphQL operation name for this collection.
    pub fn operation_name(&self) -> &'static str {
        match self {
            Self::Bookmarks => "Bookmarks",
            Self::BookmarkFolders => "BookmarkFoldersSlice",
            Self::FolderTimeline => "BookmarkFolderTimeline",
            Self::Likes => "Likes",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(CollectionKind::Bookmarks.operation_name(), "Bookmarks");
        assert_eq!(
            CollectionKind::BookmarkFolders.operation_name(),
            "BookmarkFoldersSlice"
        );
    }
}
