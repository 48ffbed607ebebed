//! shirt-core — faceted shirt search core library.
//!
//! This crate exposes the query engine, the catalog sources that feed it, and
//! the shared types used across both.
//!
//! # Architecture
//!
//! ```text
//! Catalog (JSON file | sample) ──► SearchEngine ──► SearchResults
//!                                       ▲               (shirts + facet counts)
//!                                 SearchOptions
//! ```
//!
//! Everything is synchronous. The engine holds its catalog behind an `Arc`
//! and never mutates it, so one engine can be shared between threads.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod types;

pub use error::{CatalogError, ParseFacetError, SearchError};
pub use search::{ColorCount, Criteria, SearchEngine, SearchOptions, SearchResults, SizeCount};
pub use types::{Color, Shirt, Size};
