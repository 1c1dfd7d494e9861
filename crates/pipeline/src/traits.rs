//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets independent movie
//! predicates be chained by a FilterPipeline or called on their own.

use data_loader::Movie;

/// A single keep/drop predicate over movies.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Implementors only decide `matches`; both ways of applying the
///   predicate come for free and always preserve relative order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` survives this filter.
    fn matches(&self, movie: &Movie) -> bool;

    /// Filter an owned sequence, reusing its allocation.
    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        movies.into_iter().filter(|movie| self.matches(movie)).collect()
    }

    /// Filter a borrowed sequence into a new one; `movies` is untouched.
    fn select(&self, movies: &[Movie]) -> Vec<Movie> {
        movies
            .iter()
            .filter(|movie| self.matches(movie))
            .cloned()
            .collect()
    }
}
