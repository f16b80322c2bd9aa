//! Core domain types for the movie catalog.
//!
//! This module defines the catalog rows and the ordered collection that
//! owns them. A record's position in the collection doubles as its key
//! into the precomputed similarity model, so catalog order is fixed at
//! load time and never mutated afterwards.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of a record in the catalog, `0..N`.
///
/// The same position indexes the similarity model's neighbor table; the
/// two structures must be loaded from positionally aligned artifacts.
pub type MovieIndex = usize;

/// One row of the movie catalog.
///
/// Immutable after load. The catalog owns all records; downstream
/// components hold positional references ([`MovieIndex`]) only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Primary lookup key. Not guaranteed unique in the source data.
    pub title: String,
    pub release_year: u16,
    /// The dataset's "Origin/Ethnicity" column (e.g. "American", "Bollywood").
    pub origin: String,
    pub director: String,
    /// Empty in the source data for some early films.
    pub cast: Option<String>,
    pub genre: String,
    pub wiki_page: String,
    pub plot: String,
}

/// The fixed, ordered collection of movie records.
///
/// Provides positional access and exact-title resolution. Titles are not
/// unique, so the title index retains the first occurrence only: duplicate
/// titles resolve to the lowest index carrying them.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    /// Exact title -> lowest index carrying it.
    title_index: HashMap<String, MovieIndex>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            title_index: HashMap::new(),
        }
    }

    /// Build a catalog from records in their load order.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.push(record);
        }
        catalog
    }

    /// Append a record, keeping the title index consistent.
    ///
    /// A title already present keeps its existing (lower) index.
    pub fn push(&mut self, record: MovieRecord) {
        let index = self.records.len();
        if !self.title_index.contains_key(&record.title) {
            self.title_index.insert(record.title.clone(), index);
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the first record whose title equals `title` exactly.
    ///
    /// Case-sensitive; no normalization.
    pub fn find_title(&self, title: &str) -> Option<MovieIndex> {
        self.title_index.get(title).copied()
    }

    /// Like [`Catalog::find_title`], but with a typed failure for callers
    /// that need one.
    pub fn resolve_title(&self, title: &str) -> Result<MovieIndex> {
        self.find_title(title)
            .ok_or_else(|| CatalogError::TitleNotFound {
                title: title.to_string(),
            })
    }

    /// Get a record by position
    pub fn get(&self, index: MovieIndex) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    /// Like [`Catalog::get`], but fails with
    /// [`CatalogError::IndexOutOfRange`].
    pub fn record(&self, index: MovieIndex) -> Result<&MovieRecord> {
        self.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.iter()
    }

    /// Iterate over titles in catalog order (duplicates included).
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.title.as_str())
    }
}
