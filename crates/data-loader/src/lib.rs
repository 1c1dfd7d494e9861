//! # Data Loader Crate
//!
//! Loads the static movie dataset and holds it, unchanged, for the session.
//!
//! ## Main Components
//!
//! - **types**: `Movie` record and the immutable `Catalog`
//! - **parser**: JSON dataset parsing and record validation
//! - **index**: catalog loading and the category index
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.json"))?;
//!
//! println!("{} movies", catalog.len());
//! for category in catalog.categories() {
//!     println!("{}", category);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::all_categories;
pub use types::{Catalog, Movie};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new());

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            Movie::new("Zodiac", "Crime", 2007, 7.7, false),
            Movie::new("Amelie", "Comedy", 2001, 8.3, true),
        ]);

        let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Zodiac", "Amelie"]);
    }

    #[test]
    fn test_movie_serde_uses_camel_case() {
        let movie = Movie::new("Up", "Animation", 2009, 8.2, true);
        let json = serde_json::to_value(&movie).unwrap();

        assert_eq!(json["releaseYear"], 2009);
        assert_eq!(json["isFeatured"], true);
    }
}
