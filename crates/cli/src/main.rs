use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use pipeline::{FilterCriteria, refresh};
use std::path::PathBuf;

mod interactive;
mod render;

use render::TerminalRenderer;

/// movie-list - browse a movie catalog by search, category, rating and featured flag
#[derive(Parser)]
#[command(name = "movie-list")]
#[command(about = "Filter and sort a movie catalog", long_about = None)]
struct Cli {
    /// Path to the JSON movie dataset
    #[arg(short, long, default_value = "data/movies.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the movies matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the category options
    Categories,

    /// Read filter changes from stdin and redraw after each one
    Interactive {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Raw control values. Kept as text so bad input degrades the same way it
/// would from a form field instead of aborting argument parsing.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Case-insensitive title substring
    #[arg(long, default_value = "")]
    search: String,

    /// Exact category name
    #[arg(long, default_value = "")]
    category: String,

    /// Minimum rating; non-numeric or non-positive values disable the filter
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    min_rating: String,

    /// Only featured movies
    #[arg(long)]
    featured_only: bool,

    /// Rating order: asc, desc or none
    #[arg(long, default_value = "none")]
    sort: String,
}

impl FilterArgs {
    fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_inputs(
            &self.search,
            &self.category,
            &self.min_rating,
            self.featured_only,
            &self.sort,
        )
    }
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays the list itself
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load movie dataset from {}", cli.data.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { filters } => handle_list(&catalog, &filters),
        Commands::Categories => handle_categories(&catalog),
        Commands::Interactive { filters } => handle_interactive(&catalog, &filters)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, filters: &FilterArgs) {
    let criteria = filters.to_criteria();
    tracing::debug!("Criteria: {:?}", criteria);

    println!("{}", "Movies:".bold().blue());
    refresh(catalog.movies(), &criteria, &mut TerminalRenderer);
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("{}", "Categories:".bold().blue());
    println!("{}All Categories ({})", "• ".green(), catalog.len());
    for category in catalog.categories() {
        println!(
            "{}{} ({})",
            "• ".green(),
            category,
            catalog.category_count(&category)
        );
    }
}

/// Handle the 'interactive' command
fn handle_interactive(catalog: &Catalog, filters: &FilterArgs) -> Result<()> {
    let stdin = std::io::stdin();
    interactive::run(catalog, filters.to_criteria(), stdin.lock(), &mut TerminalRenderer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::SortOrder;

    #[test]
    fn test_list_args_to_criteria() {
        let cli = Cli::parse_from([
            "movie-list",
            "--data",
            "x.json",
            "list",
            "--category",
            "Drama",
            "--min-rating",
            "abc",
            "--sort",
            "desc",
        ]);

        let Commands::List { filters } = cli.command else {
            panic!("expected list command");
        };
        let criteria = filters.to_criteria();

        assert_eq!(criteria.category, "Drama");
        assert_eq!(criteria.min_rating, 0.0);
        assert_eq!(criteria.sort_order, SortOrder::Descending);
        assert!(!criteria.featured_only);
    }

    #[test]
    fn test_default_filter_args_are_inactive() {
        assert!(FilterArgs::default().to_criteria().is_unfiltered());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
