//! # Catalog Crate
//!
//! This crate owns the movie catalog: the ordered collection of movie
//! records loaded from the Wikipedia movie plots CSV, plus title and
//! positional lookups over it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Catalog)
//! - **parser**: Quote-aware CSV reading into a Catalog
//! - **error**: Error types for loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_csv(Path::new("data/wiki_movie_plots_deduped.csv"))?;
//!
//! let index = catalog.resolve_title("The Matrix")?;
//! let record = catalog.record(index)?;
//! println!("{} ({})", record.title, record.release_year);
//! ```
//!
//! Catalog order is fixed at load time: a record's position is the same
//! position the similarity model's neighbor table uses, so the catalog and
//! the model must come from positionally aligned artifacts.

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, MovieIndex, MovieRecord};
