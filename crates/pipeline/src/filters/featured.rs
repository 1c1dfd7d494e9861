//! Filter to featured movies only.

use crate::traits::Filter;
use data_loader::Movie;

pub struct FeaturedFilter;

impl Filter for FeaturedFilter {
    fn name(&self) -> &str {
        "FeaturedFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.is_featured
    }
}

/// Featured movies, in input order.
pub fn featured(movies: &[Movie]) -> Vec<Movie> {
    FeaturedFilter.select(movies)
}
