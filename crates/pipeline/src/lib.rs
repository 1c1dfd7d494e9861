//! Pipeline for filtering and ordering the movie list.
//!
//! This crate provides:
//! - Pure list transforms (search, category, rating, featured, sort, average)
//! - Filter trait and one implementation per predicate
//! - FilterCriteria built from raw control values
//! - FilterPipeline for composing the active filters and the final sort
//! - Renderer, the callback through which results reach a display
//!
//! ## Architecture
//! Every call recomputes from scratch:
//! 1. The front-end turns control values into a `FilterCriteria`
//! 2. `FilterPipeline::from_criteria` keeps only the active filters
//! 3. Filters run in a fixed order, then the sort
//! 4. The list and its average rating go to the `Renderer`
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, refresh};
//!
//! let criteria = FilterCriteria::from_inputs("", "Drama", "5", false, "desc");
//! refresh(catalog.movies(), &criteria, &mut |list: &[Movie], avg: Option<f32>| {
//!     println!("{} movies, average {:?}", list.len(), avg);
//! });
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod criteria;
pub mod sort;
pub mod stats;
pub mod view;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::{FilterPipeline, filter_movies};
pub use criteria::{CriteriaUpdate, FilterCriteria, coerce_min_rating};
pub use filters::{featured, filter_by_category, filter_by_min_rating, search_by_title};
pub use sort::{SortOrder, sort_by_rating};
pub use stats::average_rating;
pub use view::{Renderer, refresh};
pub use data_loader::{Movie, all_categories};
