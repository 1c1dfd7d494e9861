//! The FilterPipeline orchestrates filters and the final sort.
//!
//! Filters are chained with the builder pattern; the sort always runs last
//! so it only orders the surviving movies.

use crate::criteria::FilterCriteria;
use crate::filters::{CategoryFilter, FeaturedFilter, MinRatingFilter, TitleSearchFilter};
use crate::sort::{SortOrder, sort_owned};
use crate::traits::Filter;
use data_loader::Movie;

/// Chains filters together and sorts the result.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter::new("Drama"))
///     .add_filter(MinRatingFilter::new(5.0))
///     .with_sort_order(SortOrder::Descending);
///
/// let visible = pipeline.apply(catalog.movies().to_vec());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
    sort_order: SortOrder,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline that leaves order unchanged.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort_order: SortOrder::Unsorted,
        }
    }

    /// Build the pipeline for the current criteria.
    ///
    /// Stages are added in a fixed order and only when active:
    /// 1. Title search (trimmed term is non-empty)
    /// 2. Category (non-empty)
    /// 3. Minimum rating (greater than 0)
    /// 4. Featured only
    ///
    /// The sort order is always taken over.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new().with_sort_order(criteria.sort_order);

        if let Some(term) = criteria.active_search_term() {
            pipeline = pipeline.add_filter(TitleSearchFilter::new(term));
        }
        if let Some(category) = criteria.active_category() {
            pipeline = pipeline.add_filter(CategoryFilter::new(category));
        }
        if let Some(min_rating) = criteria.active_min_rating() {
            pipeline = pipeline.add_filter(MinRatingFilter::new(min_rating));
        }
        if criteria.featured_only {
            pipeline = pipeline.add_filter(FeaturedFilter);
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Names of the filter stages, in application order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence, then sort.
    ///
    /// ## Algorithm
    /// 1. Start with the input movies
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Sort by rating with the configured order
    pub fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }

        tracing::debug!("Sorting {} movies ({})", current.len(), self.sort_order);
        sort_owned(current, self.sort_order)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the pipeline for `criteria` over a borrowed dataset.
///
/// The dataset itself is never modified; the result is a fresh vector.
pub fn filter_movies(movies: &[Movie], criteria: &FilterCriteria) -> Vec<Movie> {
    FilterPipeline::from_criteria(criteria).apply(movies.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriteriaUpdate;

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new("Alpha", "Drama", 2001, 6.0, false),
            Movie::new("Beta", "Comedy", 2002, 9.0, true),
            Movie::new("Gamma", "Drama", 2003, 8.0, true),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(movies());
        assert_eq!(filtered, movies());
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(FeaturedFilter);

        let filtered = pipeline.apply(movies());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Beta");
    }

    #[test]
    fn test_default_criteria_add_no_stages() {
        let pipeline = FilterPipeline::from_criteria(&FilterCriteria::default());
        assert!(pipeline.stage_names().is_empty());
    }

    #[test]
    fn test_stages_follow_fixed_order() {
        let criteria = FilterCriteria::from_inputs("a", "Drama", "5", true, "desc");
        let pipeline = FilterPipeline::from_criteria(&criteria);

        assert_eq!(
            pipeline.stage_names(),
            vec![
                "TitleSearchFilter",
                "CategoryFilter",
                "MinRatingFilter",
                "FeaturedFilter"
            ]
        );
    }

    #[test]
    fn test_inactive_criteria_are_skipped() {
        let mut criteria = FilterCriteria::default();
        criteria.apply_update(CriteriaUpdate::Search("   ".to_string()));
        criteria.apply_update(CriteriaUpdate::MinRating("0".to_string()));
        criteria.apply_update(CriteriaUpdate::FeaturedOnly(true));

        let pipeline = FilterPipeline::from_criteria(&criteria);
        assert_eq!(pipeline.stage_names(), vec!["FeaturedFilter"]);
    }

    #[test]
    fn test_sort_runs_after_filters() {
        let criteria = FilterCriteria::from_inputs("", "Drama", "", false, "desc");
        let result = filter_movies(&movies(), &criteria);

        let titles: Vec<&str> = result.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Gamma", "Alpha"]);
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let criteria = FilterCriteria::from_inputs("  gam  ", "", "", false, "");
        let result = filter_movies(&movies(), &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Gamma");
    }
}
