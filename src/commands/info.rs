use super::{load, write_report, Result};
use crate::config::ElectionConfig;
use crate::report::ElectionSummary;
use colored::Colorize;
use std::path::Path;

pub fn info(path: &Path, config: &ElectionConfig, output: Option<&Path>) -> Result<()> {
    let election = load(path, config)?;
    let summary = ElectionSummary::new(&election, config.total());

    println!(
        "🗳  {} states, {} electoral votes",
        election.len().to_string().bright_yellow(),
        election.total_electoral_votes().to_string().bright_yellow()
    );
    println!(
        "Winner: {} ({} EC)",
        summary.winner.to_string().bright_green().bold(),
        summary.winner_electoral_votes
    );
    println!(
        "Loser: {} ({} EC)",
        summary.loser.to_string().bright_red(),
        summary.loser_electoral_votes
    );
    println!("States won by the winner: {}", summary.states_won.join(", "));
    println!(
        "EC votes needed to flip: {}",
        summary.ec_votes_needed.to_string().bright_cyan().bold()
    );

    write_report(output, &summary)
}
