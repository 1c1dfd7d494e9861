//! Error types for the data-loader crate.
//!
//! Only loading the dataset can fail. Everything downstream of a loaded
//! `Catalog` works on well-typed records and has no error cases.

use thiserror::Error;

/// Errors that can occur while loading and validating the movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not a JSON array of movie objects
    #[error("Malformed JSON in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed but broke a dataset invariant (e.g. empty title)
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
