//! Core types for shirt-core.
//!
//! This module defines the catalog item [`Shirt`] and the two facet domains,
//! [`Size`] and [`Color`]. Each domain enum carries an `ALL` listing in
//! canonical order; the search layer walks it to emit zero-filled facet counts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ParseFacetError;

/// A catalog item. Immutable once handed to the engine.
///
/// Equality and hashing go by `id` only: two shirts with the same label, size
/// and color are still distinct items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shirt {
    /// Unique identity of the item.
    pub id: Uuid,
    /// Display label, e.g. `"Red - Small"`.
    pub name: String,
    pub size: Size,
    pub color: Color,
}

impl Shirt {
    pub fn new(id: Uuid, name: impl Into<String>, size: Size, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            color,
        }
    }
}

impl PartialEq for Shirt {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shirt {}

impl std::hash::Hash for Shirt {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Shirt size facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Every size, in canonical order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::Small => f.pad("Small"),
            Size::Medium => f.pad("Medium"),
            Size::Large => f.pad("Large"),
        }
    }
}

impl FromStr for Size {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFacetError {
                facet: "size",
                value: s.to_string(),
            })
    }
}

/// Shirt color facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    White,
    Black,
}

impl Color {
    /// Every color, in canonical order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Black,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => f.pad("Red"),
            Color::Blue => f.pad("Blue"),
            Color::Yellow => f.pad("Yellow"),
            Color::White => f.pad("White"),
            Color::Black => f.pad("Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFacetError {
                facet: "color",
                value: s.to_string(),
            })
    }
}
