//! Core domain types for the movie dataset.
//!
//! `Movie` is the record every transform works on. `Catalog` owns the
//! loaded records in file order and never hands out mutable access, so the
//! dataset stays fixed for the whole session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single movie record as stored in the dataset file.
///
/// Field names are camelCase on the wire (`releaseYear`, `isFeatured`).
/// `rating` is expected to lie in [0, 10] but is not range-checked: any
/// finite or non-finite number is accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub category: String,
    pub release_year: i32,
    pub rating: f32,
    pub is_featured: bool,
}

impl Movie {
    /// Convenience constructor, mostly used by tests and benchmarks.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        release_year: i32,
        rating: f32,
        is_featured: bool,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            release_year,
            rating,
            is_featured,
        }
    }
}

// =============================================================================
// Catalog - the immutable, in-memory dataset
// =============================================================================

/// The loaded dataset plus a derived category index.
///
/// Movies keep the order they had in the source file. The category index
/// maps each label to the positions of its movies; being a `BTreeMap`, its
/// keys are already the deduplicated, lexicographically sorted category
/// options.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) category_index: BTreeMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog from records that have already been parsed.
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut catalog = Self {
            movies,
            category_index: BTreeMap::new(),
        };
        catalog.build_category_index();
        catalog
    }

    /// All movies, in dataset order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Distinct category labels, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        self.category_index.keys().cloned().collect()
    }

    /// Number of movies carrying `category` (exact match).
    pub fn category_count(&self, category: &str) -> usize {
        self.category_index
            .get(category)
            .map(|positions| positions.len())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
