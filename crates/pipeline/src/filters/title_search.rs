//! Case-insensitive title search.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies whose title contains the search term, ignoring case.
///
/// The term is lowercased once at construction. Matching uses Unicode
/// lowercasing with no locale rules.
pub struct TitleSearchFilter {
    needle: String,
}

impl TitleSearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }
}

impl Filter for TitleSearchFilter {
    fn name(&self) -> &str {
        "TitleSearchFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.title.to_lowercase().contains(&self.needle)
    }
}

/// Movies whose title contains `term` (case-insensitive), in input order.
///
/// Meant to be called with a non-blank term; an empty term matches every
/// title.
pub fn search_by_title(movies: &[Movie], term: &str) -> Vec<Movie> {
    TitleSearchFilter::new(term).select(movies)
}
