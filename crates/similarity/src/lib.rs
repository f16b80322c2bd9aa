//! # Similarity Crate
//!
//! This crate implements ranked similar-movie lookup over a precomputed
//! similarity model.
//!
//! ## Components
//!
//! ### NeighborTable
//! The model artifact: one unordered list of `(index, score)` pairs per
//! catalog position, loaded from JSON and held read-only.
//!
//! ### Recommender
//! Binds a [`catalog::Catalog`] and a [`NeighborTable`] at construction
//! and answers `recommend(title, top_k)` with a ranked, truncated list of
//! `(title, score)` entries.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use similarity::{NeighborTable, Recommender};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_csv(Path::new("data/wiki_movie_plots_deduped.csv"))?);
//! let table = NeighborTable::from_json_file(Path::new("data/movie_top_k.json"))?;
//!
//! let recommender = Recommender::new(catalog, table)?;
//! for rec in recommender.recommend("The Matrix", 10)? {
//!     println!("{}: {:.0}%", rec.title, rec.score * 100.0);
//! }
//! ```

// Public modules
pub mod error;
pub mod neighbors;
pub mod recommender;

// Re-export commonly used types
pub use error::{RecommendError, Result};
pub use neighbors::{Neighbor, NeighborTable};
pub use recommender::{Recommendation, Recommender};
