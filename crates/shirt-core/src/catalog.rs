//! Catalog sources — JSON catalog files and generated sample catalogs.
//!
//! A catalog file is a JSON array of shirts:
//!
//! ```json
//! [
//!   { "id": "0b6d…", "name": "Red - Small", "size": "small", "color": "red" },
//!   { "name": "Blue - Large", "size": "large", "color": "blue" }
//! ]
//! ```
//!
//! `id` may be omitted. A missing id is derived as a v5 uuid from the
//! shirt's position in the array and its name, so loading the same file twice
//! yields the same ids. Reordering or renaming entries changes them.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use uuid::{Builder, Uuid};

use crate::error::CatalogError;
use crate::types::{Color, Shirt, Size};

/// Read a catalog from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Shirt>, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let shirts = from_json(&raw)?;
    tracing::info!(path = %path.display(), shirts = shirts.len(), "catalog loaded");
    Ok(shirts)
}

/// One entry of a catalog file; `id` is optional on disk.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    size: Size,
    color: Color,
}

/// Parse a catalog from an in-memory JSON document.
pub fn from_json(raw: &str) -> Result<Vec<Shirt>, CatalogError> {
    let records: Vec<CatalogRecord> = serde_json::from_str(raw)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .id
                .unwrap_or_else(|| derived_id(index, &record.name));
            Shirt::new(id, record.name, record.size, record.color)
        })
        .collect())
}

fn derived_id(index: usize, name: &str) -> Uuid {
    let key = format!("shirt-search:catalog/{index}/{name}");
    Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes())
}

/// Build `count` shirts spread uniformly over every size/color pair.
///
/// The same `seed` always produces the same catalog, ids included.
pub fn sample(count: usize, seed: u64) -> Vec<Shirt> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let size = Size::ALL[rng.gen_range(0..Size::ALL.len())];
            let color = Color::ALL[rng.gen_range(0..Color::ALL.len())];
            let id = Builder::from_random_bytes(rng.gen()).into_uuid();
            Shirt::new(id, format!("{color} - {size}"), size, color)
        })
        .collect()
}
