//! Ordering movies by rating.

use data_loader::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Requested order of the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
    /// Keep the order the movies arrived in.
    #[default]
    #[serde(rename = "none")]
    Unsorted,
}

impl SortOrder {
    /// Lenient token parsing: unknown tokens mean `Unsorted`.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => SortOrder::Ascending,
            "desc" | "descending" => SortOrder::Descending,
            _ => SortOrder::Unsorted,
        }
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortOrder::from_token(s))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
            SortOrder::Unsorted => "none",
        };
        f.write_str(token)
    }
}

/// A new sequence ordered by rating; `movies` is left as it was.
///
/// The sort is stable, so equal ratings keep their input order. NaN
/// ratings go after every number in both directions.
pub fn sort_by_rating(movies: &[Movie], order: SortOrder) -> Vec<Movie> {
    sort_owned(movies.to_vec(), order)
}

/// In-place variant used by the pipeline on its own intermediate vector.
pub(crate) fn sort_owned(mut movies: Vec<Movie>, order: SortOrder) -> Vec<Movie> {
    match order {
        SortOrder::Ascending | SortOrder::Descending => {
            movies.sort_by(|a, b| compare_ratings(a.rating, b.rating, order))
        }
        SortOrder::Unsorted => {}
    }
    movies
}

// Total order: numbers by value in the requested direction, then every NaN.
fn compare_ratings(a: f32, b: f32, order: SortOrder) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            // Never None once NaN is ruled out
            let by_value = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Descending => by_value.reverse(),
                _ => by_value,
            }
        }
    }
}
