//! Filter implementations for the movie list.
//!
//! Each module holds one predicate as a `Filter` type plus the free
//! function that applies it to a borrowed slice.

pub mod category;
pub mod featured;
pub mod minimum_rating;
pub mod title_search;

// Re-export for convenience
pub use category::{CategoryFilter, filter_by_category};
pub use featured::{FeaturedFilter, featured};
pub use minimum_rating::{MinRatingFilter, filter_by_min_rating};
pub use title_search::{TitleSearchFilter, search_by_title};
