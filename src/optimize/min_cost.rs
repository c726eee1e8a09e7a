use super::{flip_cost, max_voters_moved, Selection};
use crate::model::StateRecord;
use std::ptr;

/// Cheapest set of swing states worth at least `ec_votes_needed` electoral
/// votes, derived from the complementary knapsack.
///
/// Flipping the cheapest states that reach the threshold is the same as
/// keeping the most expensive states whose electoral votes stay within
/// `winner EC - ec_votes_needed`. The swing states are whatever the
/// knapsack leaves behind, and their cost is the total flip cost minus the
/// value kept.
///
/// Returns an empty selection costing zero voters when even every state
/// together falls short of the threshold.
pub fn min_voters_moved<'a>(winner_states: &[&'a StateRecord], ec_votes_needed: u32) -> Selection<'a> {
    let winner_ec_votes: u32 = winner_states.iter().map(|s| s.electoral_votes()).sum();

    let budget = match winner_ec_votes.checked_sub(ec_votes_needed) {
        Some(budget) => budget,
        None => {
            log::debug!(
                "min cost: {} EC available, {} needed",
                winner_ec_votes,
                ec_votes_needed
            );
            return Selection::empty();
        }
    };

    let non_swing = max_voters_moved(winner_states, budget);

    let total_voters: u64 = winner_states.iter().map(|s| flip_cost(s)).sum();
    let states: Vec<&'a StateRecord> = winner_states
        .iter()
        .copied()
        .filter(|s| !non_swing.states.iter().any(|k| ptr::eq(*k, *s)))
        .collect();

    Selection {
        states,
        voters: total_voters - non_swing.voters,
    }
}
