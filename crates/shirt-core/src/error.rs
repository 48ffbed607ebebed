//! Error types for shirt-core.

use std::path::PathBuf;
use thiserror::Error;

/// Contract violations reported by [`SearchEngine::search`](crate::SearchEngine::search).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A required argument was absent. Carries the argument's path, e.g.
    /// `"options.colors"`.
    #[error("invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),
}

/// Returned when a string names no value of a facet domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {facet}: {value:?}")]
pub struct ParseFacetError {
    pub facet: &'static str,
    pub value: String,
}

/// Errors raised while reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
