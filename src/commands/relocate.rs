use super::{load, write_report, Result};
use crate::config::ElectionConfig;
use crate::optimize::SwingMethod;
use crate::relocate::{relocate_voters, RelocationOutcome};
use crate::report::{RelocationReport, SwingReport};
use colored::Colorize;
use itertools::Itertools;
use std::path::Path;

pub fn relocate(
    path: &Path,
    config: &ElectionConfig,
    method: SwingMethod,
    output: Option<&Path>,
) -> Result<()> {
    let mut election = load(path, config)?;
    let needed = election.ec_votes_to_flip(config.total());
    let swing = {
        let selection = method.find(&election.won_states(), needed)?;
        SwingReport::new(method, &selection)
    };

    println!(
        "🚚 Relocating voters into {} (protected: {})",
        swing.states.join(", ").bright_cyan(),
        config.protected_states.join(", ")
    );

    let outcome = relocate_voters(
        &mut election,
        &swing.states,
        &config.protected_states,
        config.total(),
    )?;

    match &outcome {
        RelocationOutcome::Relocated(relocation) => {
            for ((from, to), voters) in relocation
                .moves
                .iter()
                .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
            {
                println!("  {} -> {}: {}", from, to, voters.to_string().bright_white());
            }
            println!(
                "✅ Moved {} voters, gaining {} EC votes",
                relocation.voters_moved.to_string().bright_green().bold(),
                relocation.ec_votes_gained.to_string().bright_green().bold()
            );
        }
        RelocationOutcome::Infeasible {
            required,
            available,
        } => {
            println!(
                "❌ Not enough voters to flip the election: {} required, {} available",
                required.to_string().bright_red(),
                available.to_string().bright_red()
            );
        }
    }

    write_report(output, &RelocationReport::new(swing, &outcome))
}
