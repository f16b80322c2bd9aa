//! Error types for the similarity crate.

use thiserror::Error;

/// Errors that can occur while loading the model or computing
/// recommendations.
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The requested title has no catalog entry.
    ///
    /// Recoverable: callers pre-check membership and show a user-facing
    /// message instead of invoking the recommender.
    #[error("movie title not found: {title}")]
    TitleNotFound { title: String },

    /// A neighbor table entry references a position outside the catalog.
    ///
    /// Fatal: the table is corrupt or was built against a different
    /// catalog. Surfaced rather than skipped, since dropping neighbors
    /// would silently shorten the result without signaling why.
    #[error("neighbor index {index} out of range for catalog of {len} movies")]
    NeighborOutOfRange { index: usize, len: usize },

    /// `top_k` must be a positive integer.
    #[error("top_k must be positive, got {top_k}")]
    InvalidTopK { top_k: usize },

    /// The catalog and the neighbor table are not positionally aligned.
    #[error("catalog has {catalog} movies but neighbor table has {neighbors} entries")]
    LengthMismatch { catalog: usize, neighbors: usize },

    /// I/O error occurred while reading the model artifact
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The model artifact couldn't be deserialized
    #[error("Malformed neighbor table: {0}")]
    MalformedTable(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
