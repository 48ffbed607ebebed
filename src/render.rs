//! Plain-text and JSON rendering of [`SearchResults`].

use std::fmt::Write as _;

use shirt_core::SearchResults;

/// Render results as a human-readable report: matching shirts followed by
/// the size and color facets.
pub fn table(
    results: &SearchResults,
    hide_empty_facets: bool,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{} matching shirt(s)", results.shirts.len())?;
    for shirt in &results.shirts {
        writeln!(
            out,
            "  {:<16} {:<6} {:<6} {}",
            shirt.name, shirt.size, shirt.color, shirt.id
        )?;
    }

    writeln!(out, "\nSizes")?;
    for c in &results.size_counts {
        if hide_empty_facets && c.count == 0 {
            continue;
        }
        writeln!(out, "  {:<8} {:>5}", c.size, c.count)?;
    }

    writeln!(out, "\nColors")?;
    for c in &results.color_counts {
        if hide_empty_facets && c.count == 0 {
            continue;
        }
        writeln!(out, "  {:<8} {:>5}", c.color, c.count)?;
    }

    Ok(out)
}

/// Render results as pretty-printed JSON.
pub fn json(results: &SearchResults) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
