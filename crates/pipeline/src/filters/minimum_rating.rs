//! Filter to ensure a minimum rating threshold.
//!
//! Removes movies rated below the threshold. The bound is inclusive, so a
//! movie rated exactly at the threshold is kept.

use crate::traits::Filter;
use data_loader::Movie;

/// Removes movies rated below `min_rating`.
///
/// The threshold is used as given. Deciding that 0 means "no filter" is the
/// pipeline's job, not this filter's.
pub struct MinRatingFilter {
    min_rating: f32,
}

impl MinRatingFilter {
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinRatingFilter {
    fn name(&self) -> &str {
        "MinRatingFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.rating >= self.min_rating
    }
}

pub fn filter_by_min_rating(movies: &[Movie], min_rating: f32) -> Vec<Movie> {
    MinRatingFilter::new(min_rating).select(movies)
}
