//! shirt-search — faceted search over a shirt catalog.
//!
//! Re-exports the [`shirt_core`] API so integration tests and benches can
//! import everything from one place, and adds the terminal rendering used by
//! the `shirt-search` binary.
//!
//! ```text
//! catalog ──► SearchEngine::search(options) ──► render::table / render::json
//! ```

pub mod render;

pub use shirt_core::{
    catalog, config, CatalogError, Color, ColorCount, Criteria, SearchEngine, SearchError,
    SearchOptions, SearchResults, Shirt, Size, SizeCount,
};
