//! Search layer — linear-scan query engine with facet counts.
//!
//! [`SearchEngine`] owns a read-only catalog and answers [`SearchOptions`]
//! with the matching shirts plus one count per [`Size`] and per [`Color`] in
//! the domain, computed over the matches.
//!
//! Matching policy:
//!
//! | sizes     | colors    | an item matches when          |
//! |-----------|-----------|-------------------------------|
//! | empty     | empty     | never                         |
//! | non-empty | empty     | its size is listed            |
//! | empty     | non-empty | its color is listed           |
//! | non-empty | non-empty | both its size and color are   |

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::{Color, Shirt, Size};

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Caller-supplied filter for one search.
///
/// A `None` set is a caller error; an empty set is legal. The default value
/// holds two present, empty sets and therefore matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub sizes: Option<BTreeSet<Size>>,
    #[serde(default)]
    pub colors: Option<BTreeSet<Color>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sizes: Some(BTreeSet::new()),
            colors: Some(BTreeSet::new()),
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes = Some(sizes.into_iter().collect());
        self
    }

    pub fn colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = Some(colors.into_iter().collect());
        self
    }

    /// Check that both filter sets are present.
    pub fn validate(&self) -> Result<Criteria, SearchError> {
        let sizes = self
            .sizes
            .clone()
            .ok_or(SearchError::InvalidArgument("options.sizes"))?;
        let colors = self
            .colors
            .clone()
            .ok_or(SearchError::InvalidArgument("options.colors"))?;
        Ok(Criteria { sizes, colors })
    }
}

/// Validated filter with both sets present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub sizes: BTreeSet<Size>,
    pub colors: BTreeSet<Color>,
}

impl Criteria {
    pub fn matches(&self, shirt: &Shirt) -> bool {
        if self.sizes.is_empty() && self.colors.is_empty() {
            return false;
        }
        (self.sizes.is_empty() || self.sizes.contains(&shirt.size))
            && (self.colors.is_empty() || self.colors.contains(&shirt.color))
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeCount {
    pub size: Size,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorCount {
    pub color: Color,
    pub count: usize,
}

/// Outcome of one search. `size_counts` and `color_counts` always list the
/// whole domain in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub shirts: Vec<Shirt>,
    pub size_counts: Vec<SizeCount>,
    pub color_counts: Vec<ColorCount>,
}

impl SearchResults {
    pub fn size_count(&self, size: Size) -> usize {
        self.size_counts
            .iter()
            .find(|c| c.size == size)
            .map_or(0, |c| c.count)
    }

    pub fn color_count(&self, color: Color) -> usize {
        self.color_counts
            .iter()
            .find(|c| c.color == color)
            .map_or(0, |c| c.count)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Faceted search over a fixed catalog.
///
/// The catalog is shared and never mutated, so a single engine may serve
/// concurrent callers. A changed catalog needs a new engine.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    shirts: Arc<[Shirt]>,
}

impl SearchEngine {
    pub fn new(shirts: impl Into<Arc<[Shirt]>>) -> Self {
        Self {
            shirts: shirts.into(),
        }
    }

    /// Read-only view of the catalog, in insertion order.
    pub fn shirts(&self) -> &[Shirt] {
        &self.shirts
    }

    pub fn len(&self) -> usize {
        self.shirts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shirts.is_empty()
    }

    /// Run a search.
    ///
    /// Fails with [`SearchError::InvalidArgument`] when `options` is `None`
    /// or either of its filter sets is missing. Every other input, including
    /// empty sets, yields a (possibly empty) result.
    pub fn search(&self, options: Option<&SearchOptions>) -> Result<SearchResults, SearchError> {
        let criteria = options
            .ok_or(SearchError::InvalidArgument("options"))?
            .validate()?;
        Ok(self.search_criteria(&criteria))
    }

    /// Run a search with criteria that are already known to be complete.
    pub fn search_criteria(&self, criteria: &Criteria) -> SearchResults {
        let shirts: Vec<Shirt> = self
            .shirts
            .iter()
            .filter(|shirt| criteria.matches(shirt))
            .cloned()
            .collect();

        let size_counts = Size::ALL
            .into_iter()
            .map(|size| SizeCount {
                size,
                count: shirts.iter().filter(|s| s.size == size).count(),
            })
            .collect();

        let color_counts = Color::ALL
            .into_iter()
            .map(|color| ColorCount {
                color,
                count: shirts.iter().filter(|s| s.color == color).count(),
            })
            .collect();

        tracing::debug!(
            catalog = self.shirts.len(),
            matched = shirts.len(),
            sizes = criteria.sizes.len(),
            colors = criteria.colors.len(),
            "search complete"
        );

        SearchResults {
            shirts,
            size_counts,
            color_counts,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
