// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Magpie Core
//!
//! Core types, models, and traits for magpie.
//!
//! This crate provides the foundational abstractions used across the other
//! magpie crates:
//!
//! - Domain models ([`Tweet`], [`BookmarkFolder`], [`CollectionKind`])
//! - The [`Identified`] trait that pagination dedup keys on
//! - The caller-facing [`PageBudget`]

pub mod budget;
pub mod models;
pub mod traits;

pub use budget::PageBudget;
pub use models::{BookmarkFolder, CollectionKind, Tweet};
pub use traits::Identified;
