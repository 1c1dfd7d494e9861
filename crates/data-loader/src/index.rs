//! Catalog loading and category indexing.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the dataset from a JSON file.
    ///
    /// Steps:
    /// 1. Parse and validate every record
    /// 2. Build the category index
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);

        let movies = parser::parse_movies_file(path)?;
        let catalog = Catalog::new(movies);

        info!(
            "Loaded {} movies across {} categories",
            catalog.len(),
            catalog.category_index.len()
        );
        Ok(catalog)
    }

    /// Group movie positions by category label.
    pub(crate) fn build_category_index(&mut self) {
        self.category_index.clear();
        for (position, movie) in self.movies.iter().enumerate() {
            self.category_index
                .entry(movie.category.clone())
                .or_default()
                .push(position);
        }
    }
}

/// Distinct categories of an arbitrary movie slice, sorted ascending.
///
/// Same result as `Catalog::categories` for a catalog built from `movies`.
pub fn all_categories(movies: &[Movie]) -> Vec<String> {
    let mut categories: Vec<String> = movies.iter().map(|m| m.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}
