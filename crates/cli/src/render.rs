//! Terminal output for the movie list.

use colored::Colorize;
use data_loader::Movie;
use pipeline::Renderer;

pub const EMPTY_MESSAGE: &str = "No movies match your filters.";

/// Prints each recomputed list to stdout.
#[derive(Default)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&mut self, movies: &[Movie], average: Option<f32>) {
        if movies.is_empty() {
            println!("{}", EMPTY_MESSAGE.yellow());
        }
        for movie in movies {
            println!("{}", format_movie_line(movie));
        }
        println!("{}", format_average(average).bold());
    }
}

/// `<title> (<year>) – <category> – ⭐ <rating>`, plus a badge when featured.
pub fn format_movie_line(movie: &Movie) -> String {
    let mut line = format!(
        "{} ({}) – {} – ⭐ {:.1}",
        movie.title.bold(),
        movie.release_year,
        movie.category,
        movie.rating
    );
    if movie.is_featured {
        line.push_str(&format!(" – {}", "Featured".green()));
    }
    line
}

pub fn format_average(average: Option<f32>) -> String {
    match average {
        Some(avg) => format!("Average Rating: {:.2}", avg),
        None => "Average Rating: N/A".to_string(),
    }
}
