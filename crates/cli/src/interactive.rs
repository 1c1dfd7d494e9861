//! Line-driven session: every input line changes one criterion and the list
//! is recomputed and redrawn.

use anyhow::{Result, anyhow, bail};
use colored::Colorize;
use data_loader::Catalog;
use pipeline::{CriteriaUpdate, FilterCriteria, Renderer, refresh};
use std::io::BufRead;
use tracing::warn;

pub const HELP: &str = "\
Commands:
  search <text>       filter by title (empty clears)
  category <name>     exact category (empty clears)
  min-rating <n>      minimum rating (0 or invalid clears)
  featured on|off     featured movies only
  sort asc|desc|none  order by rating
  reset               clear every filter
  help                show this text
  quit                leave";

/// A parsed input line.
#[derive(Debug, PartialEq)]
pub enum SessionCommand {
    Update(CriteriaUpdate),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "search" => SessionCommand::Update(CriteriaUpdate::Search(rest.to_string())),
        "category" => SessionCommand::Update(CriteriaUpdate::Category(rest.to_string())),
        "min-rating" | "min" => {
            SessionCommand::Update(CriteriaUpdate::MinRating(rest.to_string()))
        }
        "featured" => {
            SessionCommand::Update(CriteriaUpdate::FeaturedOnly(parse_toggle(rest)?))
        }
        "sort" => SessionCommand::Update(CriteriaUpdate::Sort(rest.to_string())),
        "reset" => SessionCommand::Update(CriteriaUpdate::Reset),
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("unknown command '{}' (try 'help')", other),
    };
    Ok(Some(command))
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(anyhow!("expected on/off, got '{}'", other)),
    }
}

/// Render once for `criteria`, then once more after every update read from
/// `input`, until `quit` or end of input.
pub fn run<B, R>(
    catalog: &Catalog,
    mut criteria: FilterCriteria,
    input: B,
    renderer: &mut R,
) -> Result<()>
where
    B: BufRead,
    R: Renderer,
{
    println!("{}", "Type 'help' for commands.".dimmed());
    refresh(catalog.movies(), &criteria, renderer);

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(SessionCommand::Help)) => println!("{}", HELP),
            Ok(Some(SessionCommand::Update(update))) => {
                criteria.apply_update(update);
                println!();
                refresh(catalog.movies(), &criteria, renderer);
            }
            Err(e) => warn!("{}", e),
        }
    }
    Ok(())
}
