// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Magpie Fetch
//!
//! The resilient paginated fetch engine.
//!
//! The provider's API contract is unstable: GraphQL query ids rotate, pages
//! are cursor-linked, and individual requests fail transiently. This crate
//! turns "give me up to N items, or all of them" into a sequence of
//! authenticated page requests, handling:
//!
//! - cursor continuation ([`driver::PaginationDriver`])
//! - duplicate suppression by item identity
//! - transient-failure retry with backoff ([`retry`])
//! - silent recovery from stale query ids ([`resolver::QueryIdResolver`])
//!
//! Layering, outermost first:
//!
//! ```text
//! PaginationDriver -> PageFetcher -> send_with_retry -> Transport
//! ```
//!
//! The [`page::CollectionSource`] trait is the seam to the provider-specific
//! layer: it builds one page request from a query id and extracts items plus
//! a continuation cursor from the raw payload. One driver serves every
//! collection; no per-collection subclassing.

pub mod auth;
pub mod client;
pub mod driver;
pub mod error;
pub mod page;
pub mod resolver;
pub mod retry;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::SessionAuth;
pub use client::{ApiRequest, HttpResponse, ReqwestTransport, Transport};
pub use driver::{PaginationDriver, DEFAULT_PAGE_SIZE};
pub use error::FetchError;
pub use page::{CollectionSource, PageFetcher, PageParams, RawPage};
pub use resolver::{QueryIdResolver, QueryIdSource};
pub use retry::{send_with_retry, RetryPolicy};
