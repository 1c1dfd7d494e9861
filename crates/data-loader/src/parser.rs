//! Parser for the movie dataset file.
//!
//! The dataset is a JSON array of objects:
//!
//! ```json
//! [
//!   { "title": "Arrival", "category": "Sci-Fi", "releaseYear": 2016,
//!     "rating": 7.9, "isFeatured": true }
//! ]
//! ```
//!
//! Parsing is two steps: serde_json turns the text into `Vec<Movie>`, then
//! every record is checked for the invariants serde cannot express.

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse a dataset file.
pub fn parse_movies_file(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_movies(&content, &path.display().to_string())
}

/// Parse dataset text. `source` names the input in error messages.
pub fn parse_movies(json: &str, source: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> =
        serde_json::from_str(json).map_err(|e| DataLoadError::JsonError {
            file: source.to_string(),
            source: e,
        })?;

    for (idx, movie) in movies.iter().enumerate() {
        validate_movie(idx, movie)?;
    }

    Ok(movies)
}

/// Titles are the display identifier, so a blank one is rejected.
/// Ratings are not range-checked.
fn validate_movie(idx: usize, movie: &Movie) -> Result<()> {
    if movie.title.trim().is_empty() {
        return Err(DataLoadError::ValidationError(format!(
            "movie at index {} has an empty title",
            idx
        )));
    }
    Ok(())
}
