use super::{load, write_report, Result};
use crate::config::ElectionConfig;
use crate::optimize::{max_voters_moved, SwingMethod};
use crate::report::SwingReport;
use colored::Colorize;
use std::path::Path;

pub fn swing(
    path: &Path,
    config: &ElectionConfig,
    method: SwingMethod,
    output: Option<&Path>,
) -> Result<()> {
    let election = load(path, config)?;
    let needed = election.ec_votes_to_flip(config.total());
    let selection = method.find(&election.won_states(), needed)?;
    let report = SwingReport::new(method, &selection);

    println!(
        "🔍 Swing states ({}) for {} EC votes",
        method.to_string().bright_cyan(),
        needed
    );
    if report.states.is_empty() {
        println!("{}", "No combination of states flips the election".yellow());
    } else {
        println!("Swing states: {}", report.states.join(", ").bright_green());
    }
    println!(
        "Voters displaced: {} for a total of {} EC votes",
        report.voters.to_string().bright_yellow().bold(),
        report.electoral_votes
    );

    write_report(output, &report)
}

/// The states the loser can afford to leave alone.
pub fn non_swing(path: &Path, config: &ElectionConfig, output: Option<&Path>) -> Result<()> {
    let election = load(path, config)?;
    let won_states = election.won_states();
    let winner_ec: u32 = won_states.iter().map(|s| s.electoral_votes()).sum();
    let budget = winner_ec.saturating_sub(election.ec_votes_to_flip(config.total()));

    let selection = max_voters_moved(&won_states, budget);
    let report = SwingReport::new(SwingMethod::Knapsack, &selection);

    println!(
        "📦 Largest-margin states within {} EC votes",
        budget.to_string().bright_cyan()
    );
    println!("Non-swing states: {}", report.states.join(", ").bright_green());
    println!(
        "Max voters displaced: {} for a total of {} EC votes",
        report.voters.to_string().bright_yellow().bold(),
        report.electoral_votes
    );

    write_report(output, &report)
}
