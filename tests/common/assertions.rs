//! Domain-specific assertions for shirt-search harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* search invariant was violated.

use shirt_search::{Color, Criteria, SearchResults, Shirt, Size};

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that every shirt in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results.shirts, |s| s.color == Color::Red);
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[shirt_search::Shirt] = &$results;
        let pred = $pred;
        let failing: Vec<_> = results.iter().filter(|s| !pred(s)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} shirts did not satisfy predicate.\n  first: {:?}",
                failing.len(),
                results.len(),
                failing[0]
            );
        }
    }};
}

/// Assert that the result shirts are exactly the catalog shirts accepted by
/// `criteria`, in catalog order.
pub fn assert_matches_criteria(catalog: &[Shirt], criteria: &Criteria, results: &SearchResults) {
    let expected: Vec<&Shirt> = catalog.iter().filter(|s| criteria.matches(s)).collect();
    let actual: Vec<&Shirt> = results.shirts.iter().collect();
    pretty_assertions::assert_eq!(
        actual,
        expected,
        "result shirts differ from catalog shirts matching {criteria:?}"
    );
}

// ---------------------------------------------------------------------------
// Facet assertions
// ---------------------------------------------------------------------------

/// Assert that every domain size and color appears exactly once, in
/// canonical order.
pub fn assert_counts_cover_domain(results: &SearchResults) {
    let sizes: Vec<Size> = results.size_counts.iter().map(|c| c.size).collect();
    let colors: Vec<Color> = results.color_counts.iter().map(|c| c.color).collect();
    pretty_assertions::assert_eq!(sizes, Size::ALL.to_vec(), "size facets must list the whole domain");
    pretty_assertions::assert_eq!(colors, Color::ALL.to_vec(), "color facets must list the whole domain");
}

/// Assert that each facet count equals the number of *result* shirts with
/// that value.
pub fn assert_counts_match_results(results: &SearchResults) {
    for c in &results.size_counts {
        let expected = results.shirts.iter().filter(|s| s.size == c.size).count();
        assert_eq!(
            c.count, expected,
            "size count for {} is {}, but {} matching shirts have that size",
            c.size, c.count, expected
        );
    }
    for c in &results.color_counts {
        let expected = results.shirts.iter().filter(|s| s.color == c.color).count();
        assert_eq!(
            c.count, expected,
            "color count for {} is {}, but {} matching shirts have that color",
            c.color, c.count, expected
        );
    }
}

/// Assert that both facet lists sum to zero.
pub fn assert_all_counts_zero(results: &SearchResults) {
    assert!(
        results.size_counts.iter().all(|c| c.count == 0),
        "expected all size counts to be zero: {:?}",
        results.size_counts
    );
    assert!(
        results.color_counts.iter().all(|c| c.count == 0),
        "expected all color counts to be zero: {:?}",
        results.color_counts
    );
}
