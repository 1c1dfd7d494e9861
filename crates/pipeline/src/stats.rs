//! Aggregate statistics over the visible list.

use data_loader::Movie;

/// Arithmetic mean of the ratings, or `None` when there is nothing to
/// average. An empty list never produces NaN.
pub fn average_rating(movies: &[Movie]) -> Option<f32> {
    if movies.is_empty() {
        return None;
    }
    let total: f32 = movies.iter().map(|m| m.rating).sum();
    Some(total / movies.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating() {
        let movies = vec![
            Movie::new("A", "Drama", 2000, 8.0, false),
            Movie::new("B", "Drama", 2000, 6.0, false),
        ];
        assert_eq!(average_rating(&movies), Some(7.0));
    }

    #[test]
    fn test_single_movie() {
        let movies = vec![Movie::new("A", "Drama", 2000, 3.5, false)];
        assert_eq!(average_rating(&movies), Some(3.5));
    }

    #[test]
    fn test_empty_is_not_applicable() {
        assert_eq!(average_rating(&[]), None);
    }
}
