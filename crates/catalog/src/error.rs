//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No record carries the requested title (exact, case-sensitive match).
    ///
    /// Recoverable: callers are expected to pre-check membership and show a
    /// user-facing message instead of propagating this.
    #[error("movie title not found: {title}")]
    TitleNotFound { title: String },

    /// A positional lookup fell outside the catalog's bounds.
    #[error("record index {index} out of range for catalog of {len} movies")]
    IndexOutOfRange { index: usize, len: usize },

    /// I/O error occurred while reading the source file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A row in the source file couldn't be decoded
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The source file's header lacks a required column
    #[error("Missing column {column:?} in {file}")]
    MissingColumn { file: String, column: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
