//! User-selected filter and sort criteria.
//!
//! `FilterCriteria` is built at the boundary from raw control values (text
//! fields, a checkbox, a sort selector). All coercion happens here, so the
//! filters themselves only ever see clean, typed values.

use crate::sort::SortOrder;
use serde::{Deserialize, Serialize};

/// Current selections. The default value has every criterion inactive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Raw search text; trimmed before use.
    pub search_term: String,
    /// Exact category label, or empty for all categories.
    pub category: String,
    /// Inclusive lower bound; 0 means no rating filter.
    pub min_rating: f32,
    pub featured_only: bool,
    pub sort_order: SortOrder,
}

/// One control change from the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaUpdate {
    Search(String),
    Category(String),
    /// Raw text from the rating field, coerced like `from_inputs` does.
    MinRating(String),
    FeaturedOnly(bool),
    /// Raw sort token, parsed leniently.
    Sort(String),
    Reset,
}

impl FilterCriteria {
    /// Build criteria from raw control values.
    ///
    /// # Arguments
    /// * `search` - Search box text, stored as typed
    /// * `category` - Selected category, empty for all
    /// * `min_rating` - Rating field text; anything that is not a positive
    ///   finite number becomes 0
    /// * `featured_only` - Featured checkbox state
    /// * `sort` - Sort selector token (`asc`, `desc`, anything else = none)
    pub fn from_inputs(
        search: &str,
        category: &str,
        min_rating: &str,
        featured_only: bool,
        sort: &str,
    ) -> Self {
        Self {
            search_term: search.to_string(),
            category: category.to_string(),
            min_rating: coerce_min_rating(min_rating),
            featured_only,
            sort_order: SortOrder::from_token(sort),
        }
    }

    /// Apply a single control change.
    pub fn apply_update(&mut self, update: CriteriaUpdate) {
        match update {
            CriteriaUpdate::Search(term) => self.search_term = term,
            CriteriaUpdate::Category(category) => self.category = category,
            CriteriaUpdate::MinRating(raw) => self.min_rating = coerce_min_rating(&raw),
            CriteriaUpdate::FeaturedOnly(on) => self.featured_only = on,
            CriteriaUpdate::Sort(token) => self.sort_order = SortOrder::from_token(&token),
            CriteriaUpdate::Reset => *self = Self::default(),
        }
    }

    /// Trimmed search term, if there is anything left to search for.
    pub fn active_search_term(&self) -> Option<&str> {
        let term = self.search_term.trim();
        (!term.is_empty()).then_some(term)
    }

    pub fn active_category(&self) -> Option<&str> {
        (!self.category.is_empty()).then_some(self.category.as_str())
    }

    /// Threshold to filter on, if any. NaN and non-positive values are
    /// inactive even when set directly on the struct.
    pub fn active_min_rating(&self) -> Option<f32> {
        (self.min_rating > 0.0).then_some(self.min_rating)
    }

    /// True when no filter stage would run.
    pub fn is_unfiltered(&self) -> bool {
        self.active_search_term().is_none()
            && self.active_category().is_none()
            && self.active_min_rating().is_none()
            && !self.featured_only
    }
}

/// Rating text to threshold. Empty, unparsable, non-finite and negative
/// input all mean "no filter".
pub fn coerce_min_rating(raw: &str) -> f32 {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|rating| rating.is_finite() && *rating > 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unfiltered() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unfiltered());
        assert_eq!(criteria.sort_order, SortOrder::Unsorted);
    }

    #[test]
    fn test_coerce_min_rating() {
        assert_eq!(coerce_min_rating("7.5"), 7.5);
        assert_eq!(coerce_min_rating(" 5 "), 5.0);
        assert_eq!(coerce_min_rating(""), 0.0);
        assert_eq!(coerce_min_rating("abc"), 0.0);
        assert_eq!(coerce_min_rating("-3"), 0.0);
        assert_eq!(coerce_min_rating("NaN"), 0.0);
        assert_eq!(coerce_min_rating("inf"), 0.0);
        assert_eq!(coerce_min_rating("Infinity"), 0.0);
    }

    #[test]
    fn test_from_inputs() {
        let criteria = FilterCriteria::from_inputs("  dark ", "Drama", "oops", true, "desc");

        assert_eq!(criteria.search_term, "  dark ");
        assert_eq!(criteria.active_search_term(), Some("dark"));
        assert_eq!(criteria.active_category(), Some("Drama"));
        assert_eq!(criteria.active_min_rating(), None);
        assert!(criteria.featured_only);
        assert_eq!(criteria.sort_order, SortOrder::Descending);
    }

    #[test]
    fn test_blank_search_is_inactive() {
        let criteria = FilterCriteria::from_inputs("   ", "", "0", false, "");
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_nan_min_rating_set_directly_is_inactive() {
        let criteria = FilterCriteria {
            min_rating: f32::NAN,
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.active_min_rating(), None);
    }

    #[test]
    fn test_apply_update() {
        let mut criteria = FilterCriteria::default();

        criteria.apply_update(CriteriaUpdate::Category("Comedy".to_string()));
        criteria.apply_update(CriteriaUpdate::MinRating("6".to_string()));
        criteria.apply_update(CriteriaUpdate::Sort("asc".to_string()));
        criteria.apply_update(CriteriaUpdate::FeaturedOnly(true));

        assert_eq!(criteria.category, "Comedy");
        assert_eq!(criteria.min_rating, 6.0);
        assert_eq!(criteria.sort_order, SortOrder::Ascending);
        assert!(criteria.featured_only);

        criteria.apply_update(CriteriaUpdate::MinRating("not a number".to_string()));
        assert_eq!(criteria.min_rating, 0.0);

        criteria.apply_update(CriteriaUpdate::Reset);
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_deserialize_partial_criteria() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"category": "Drama", "sort_order": "descending"}"#).unwrap();

        assert_eq!(criteria.category, "Drama");
        assert_eq!(criteria.sort_order, SortOrder::Descending);
        assert!(!criteria.featured_only);
    }
}
