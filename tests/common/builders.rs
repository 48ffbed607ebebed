//! Test builders — ergonomic constructors for `Shirt` values and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use shirt_search::{Color, Shirt, Size};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ShirtBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Shirt`] test fixtures.
///
/// # Example
///
/// ```rust
/// let shirt = ShirtBuilder::new(Size::Small, Color::Red)
///     .name("Red - Small")
///     .build();
/// ```
pub struct ShirtBuilder {
    id: Uuid,
    name: Option<String>,
    size: Size,
    color: Color,
}

impl ShirtBuilder {
    pub fn new(size: Size, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            size,
            color,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Shirt {
        let name = self
            .name
            .unwrap_or_else(|| format!("{} - {}", self.color, self.size));
        Shirt::new(self.id, name, self.size, self.color)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a shirt with a fresh id and the conventional `"<Color> - <Size>"` label.
pub fn shirt(size: Size, color: Color) -> Shirt {
    ShirtBuilder::new(size, color).build()
}

/// Build `n` distinct shirts sharing one size and color.
pub fn shirts(n: usize, size: Size, color: Color) -> Vec<Shirt> {
    (0..n).map(|_| shirt(size, color)).collect()
}

/// Build one shirt for every size/color pair, sizes outermost.
pub fn every_combination() -> Vec<Shirt> {
    Size::ALL
        .into_iter()
        .flat_map(|size| Color::ALL.into_iter().map(move |color| shirt(size, color)))
        .collect()
}
