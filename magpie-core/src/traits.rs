//! Trait definitions for magpie.
//!
//! This module defines the seams between the domain models and the
//! pagination engine.

/// A record with a stable, opaque string identity.
///
/// The pagination driver deduplicates items by this identity, so it must be
/// stable across pages and across retries of the same logical page. For
/// tweets this is the rest id; for bookmark folders the folder id.
pub trait Identified {
    /// Returns the opaque identity of this record.
    fn identity(&self) -> &str;
}
