//! The seam between the pipeline and whatever displays its output.
//!
//! The core never touches a display. A front-end implements `Renderer` (or
//! passes a closure) and `refresh` hands it the visible list together with
//! the average rating, which is `None` when nothing matched.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::filter_movies;
use crate::stats::average_rating;
use data_loader::Movie;

/// Receives each recomputed result.
pub trait Renderer {
    fn render(&mut self, movies: &[Movie], average: Option<f32>);
}

impl<F> Renderer for F
where
    F: FnMut(&[Movie], Option<f32>),
{
    fn render(&mut self, movies: &[Movie], average: Option<f32>) {
        self(movies, average)
    }
}

/// Recompute the visible list for `criteria` and render it.
///
/// Returns the number of movies shown.
pub fn refresh<R>(movies: &[Movie], criteria: &FilterCriteria, renderer: &mut R) -> usize
where
    R: Renderer + ?Sized,
{
    let visible = filter_movies(movies, criteria);
    let average = average_rating(&visible);

    tracing::debug!(
        "Rendering {} of {} movies (average: {:?})",
        visible.len(),
        movies.len(),
        average
    );
    renderer.render(&visible, average);
    visible.len()
}
