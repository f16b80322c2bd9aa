//! The precomputed neighbor table.
//!
//! The table is built offline by the similarity model and shipped as a
//! JSON artifact: an array with one entry per catalog position, where
//! entry `i` is an array of `{"index", "score"}` objects describing the
//! movies similar to the movie at position `i`. Construction of the table
//! is out of scope here; it is loaded once and treated as read-only.

use crate::error::Result;
use catalog::MovieIndex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// One `(index, score)` pair from the similarity model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Catalog position of the similar movie.
    pub index: MovieIndex,
    /// Similarity to the source movie; higher is more similar. Typically
    /// in `[0, 1]` but passed through without validation.
    pub score: f32,
}

/// Per-movie neighbor lists, positionally aligned with the catalog.
///
/// Entry `i` lists the movies similar to the movie at catalog position
/// `i`, in whatever order the offline model emitted them — no pre-sorting
/// is assumed. Never mutated after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighborTable {
    entries: Vec<Vec<Neighbor>>,
}

impl NeighborTable {
    /// Build a table directly from per-movie entries (fixtures, tests).
    pub fn from_entries(entries: Vec<Vec<Neighbor>>) -> Self {
        Self { entries }
    }

    /// Load the table from its JSON export.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let table: NeighborTable = serde_json::from_reader(reader)?;

        info!(
            "Loaded neighbor table with {} entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Number of entries; must equal the catalog length.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The neighbor list for a catalog position.
    pub fn neighbors(&self, index: MovieIndex) -> Option<&[Neighbor]> {
        self.entries.get(index).map(|entry| entry.as_slice())
    }
}
