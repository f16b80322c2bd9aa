//! Ranked similar-movie lookup over the precomputed neighbor table.
//!
//! ## Algorithm
//! 1. Resolve the source title to its catalog position
//! 2. Fetch that position's neighbor list from the table
//! 3. Map each neighbor's position back to a title
//! 4. Sort by score descending (stable, so ties keep list order)
//! 5. Truncate to the requested top_k

use crate::error::{RecommendError, Result};
use crate::neighbors::NeighborTable;
use catalog::Catalog;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// One ranked entry returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    /// Raw similarity score from the model, unclamped. Presentation-layer
    /// transforms (percentages, bounded bars) are the caller's concern.
    pub score: f32,
}

/// Produces ranked similar-movie recommendations for a title.
///
/// Holds the session's immutable state: the catalog and the neighbor
/// table, bound once at construction. `recommend` is a pure function of
/// that state, so a single instance is safe to share across any number of
/// concurrent readers without locking.
#[derive(Debug)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    neighbors: NeighborTable,
}

impl Recommender {
    /// Bind a catalog and its neighbor table.
    ///
    /// Fails fast with [`RecommendError::LengthMismatch`] when the two are
    /// not positionally aligned.
    pub fn new(catalog: Arc<Catalog>, neighbors: NeighborTable) -> Result<Self> {
        if catalog.len() != neighbors.len() {
            return Err(RecommendError::LengthMismatch {
                catalog: catalog.len(),
                neighbors: neighbors.len(),
            });
        }
        Ok(Self { catalog, neighbors })
    }

    /// The catalog this recommender was built over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Top `top_k` movies most similar to `title`, best first.
    ///
    /// The neighbor list is taken as-is: duplicate indices and the source
    /// movie itself are not filtered out, and scores are not clamped.
    /// Equal scores keep their neighbor-list order. Fewer than `top_k`
    /// neighbors returns all of them.
    ///
    /// A neighbor index outside the catalog means the table does not match
    /// the catalog; it is surfaced as [`RecommendError::NeighborOutOfRange`]
    /// rather than skipped.
    #[instrument(skip(self))]
    pub fn recommend(&self, title: &str, top_k: usize) -> Result<Vec<Recommendation>> {
        if top_k == 0 {
            return Err(RecommendError::InvalidTopK { top_k });
        }

        let source_index = self
            .catalog
            .find_title(title)
            .ok_or_else(|| RecommendError::TitleNotFound {
                title: title.to_string(),
            })?;

        // new() guarantees the table is as long as the catalog
        let row = self.neighbors.neighbors(source_index).unwrap_or(&[]);
        debug!(
            "Movie {} ({:?}) has {} recorded neighbors",
            source_index,
            title,
            row.len()
        );

        let mut ranked = Vec::with_capacity(row.len());
        for neighbor in row {
            let record =
                self.catalog
                    .get(neighbor.index)
                    .ok_or(RecommendError::NeighborOutOfRange {
                        index: neighbor.index,
                        len: self.catalog.len(),
                    })?;
            ranked.push(Recommendation {
                title: record.title.clone(),
                score: neighbor.score,
            });
        }

        // Stable sort: equal scores keep their neighbor-list order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_k);

        debug!("Returning {} recommendations for {:?}", ranked.len(), title);
        Ok(ranked)
    }
}
