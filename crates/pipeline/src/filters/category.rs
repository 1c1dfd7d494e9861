//! Filter to a single category.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies whose category equals the selected one exactly.
///
/// Matching is case-sensitive: "drama" does not select "Drama".
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.category == self.category
    }
}

pub fn filter_by_category(movies: &[Movie], category: &str) -> Vec<Movie> {
    CategoryFilter::new(category).select(movies)
}
