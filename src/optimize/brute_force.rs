use super::{combinations, flip_cost, Result, Selection};
use crate::model::StateRecord;

/// Cheapest subset of `winner_states` worth at least `ec_votes_needed`
/// electoral votes, found by checking every subset.
///
/// Ties keep the subset enumerated first. Returns an empty selection costing
/// zero voters when no subset reaches the threshold.
pub fn brute_force_swing_states<'a>(
    winner_states: &[&'a StateRecord],
    ec_votes_needed: u32,
) -> Result<Selection<'a>> {
    let mut best: Option<Selection<'a>> = None;

    for combo in combinations(winner_states)? {
        let ec_votes: u32 = combo.iter().map(|s| s.electoral_votes()).sum();
        if ec_votes < ec_votes_needed {
            continue;
        }

        let voters: u64 = combo.iter().map(|s| flip_cost(s)).sum();
        let improves = match &best {
            Some(current) => voters < current.voters,
            None => true,
        };
        if improves {
            best = Some(Selection {
                states: combo,
                voters,
            });
        }
    }

    match best {
        Some(best) => {
            log::debug!(
                "brute force: {} swing states, {} voters",
                best.states.len(),
                best.voters
            );
            Ok(best)
        }
        None => {
            log::debug!("brute force: no subset reaches {} EC votes", ec_votes_needed);
            Ok(Selection::empty())
        }
    }
}
