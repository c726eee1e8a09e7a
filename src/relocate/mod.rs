//! Greedy voter relocation into swing states.

use crate::model::{Election, ElectionError, Party};
use crate::optimize::min_voters_moved;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RelocationError {
    #[error("Election error: {0}")]
    Election(#[from] ElectionError),
    #[error("Swing state {state} is not held by the election winner ({winner})")]
    NotWinnerState { state: String, winner: Party },
}

pub type Result<T> = std::result::Result<T, RelocationError>;

/// Voters moved per `(donor, swing state)` pair. Pairs that never
/// exchanged voters are absent.
pub type MoveMap = BTreeMap<(String, String), u64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub voters_moved: u64,
    pub ec_votes_gained: u32,
    pub moves: MoveMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationOutcome {
    Relocated(Relocation),
    /// Donor states cannot spare enough voters, whatever the allocation.
    Infeasible { required: u64, available: u64 },
}

impl RelocationOutcome {
    pub fn relocation(&self) -> Option<&Relocation> {
        match self {
            RelocationOutcome::Relocated(relocation) => Some(relocation),
            RelocationOutcome::Infeasible { .. } => None,
        }
    }
}

/// Move voters from states the loser carried into each of `swing_states`
/// until it flips.
///
/// Donors are the loser's states outside `protected`. A donor gives at most
/// `margin - 1` voters, so it stays with the loser. Swing states are filled
/// in the order given, drawing from donors in election order. A swing state
/// only counts toward `ec_votes_gained` once it has actually flipped.
///
/// Nothing is mutated when the donors' combined surplus falls short of the
/// cheapest swing set for `total_ec_votes`. Otherwise vote counts in
/// `election` are updated in place, so a second call compounds the first.
pub fn relocate_voters(
    election: &mut Election,
    swing_states: &[String],
    protected: &[String],
    total_ec_votes: u32,
) -> Result<RelocationOutcome> {
    let (winner, loser) = election.winner();
    let protected: HashSet<&str> = protected.iter().map(String::as_str).collect();

    let donors: Vec<usize> = election
        .states()
        .iter()
        .enumerate()
        .filter(|(_, state)| state.winner() == loser && !protected.contains(state.name()))
        .map(|(index, _)| index)
        .collect();

    let ec_votes_needed = election.ec_votes_to_flip(total_ec_votes);
    let required = min_voters_moved(&election.won_states(), ec_votes_needed).voters;
    let available: u64 = donors
        .iter()
        .map(|&index| election.states()[index].margin().saturating_sub(1))
        .sum();

    if available < required {
        log::warn!(
            "cannot flip election: {} voters required, {} available in {} donor states",
            required,
            available,
            donors.len()
        );
        return Ok(RelocationOutcome::Infeasible {
            required,
            available,
        });
    }

    let mut targets = Vec::with_capacity(swing_states.len());
    for name in swing_states {
        let index = election.position(name)?;
        if election.states()[index].winner() != winner {
            return Err(RelocationError::NotWinnerState {
                state: name.clone(),
                winner,
            });
        }
        targets.push(index);
    }

    let mut relocation = Relocation {
        voters_moved: 0,
        ec_votes_gained: 0,
        moves: MoveMap::new(),
    };

    for swing in targets {
        let mut votes_needed = election.states()[swing].votes_to_flip();

        for &donor in &donors {
            let spare = election.states()[donor].margin().saturating_sub(1);
            let moved = votes_needed.min(spare);
            if moved == 0 {
                continue;
            }

            election.transfer(donor, swing, moved)?;
            votes_needed -= moved;
            relocation.voters_moved += moved;

            let key = (
                election.states()[donor].name().to_string(),
                election.states()[swing].name().to_string(),
            );
            *relocation.moves.entry(key).or_insert(0) += moved;

            if votes_needed == 0 {
                break;
            }
        }

        let state = &election.states()[swing];
        if votes_needed == 0 && state.winner() == loser {
            relocation.ec_votes_gained += state.electoral_votes();
            log::debug!("flipped {} ({} EC)", state.name(), state.electoral_votes());
        } else {
            log::debug!("{} still {} voters short of flipping", state.name(), votes_needed);
        }
    }

    Ok(RelocationOutcome::Relocated(relocation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StateRecord;

    fn election() -> Election {
        Election::new(vec![
            StateRecord::new("A", 60, 40, 10),
            StateRecord::new("B", 45, 55, 8),
            StateRecord::new("C", 30, 70, 6),
        ])
        .unwrap()
    }

    #[test]
    fn flips_swing_state_from_donor() {
        let mut election = election();
        let outcome = relocate_voters(&mut election, &["B".to_string()], &[], 24).unwrap();

        let relocation = outcome.relocation().unwrap();
        assert_eq!(relocation.voters_moved, 11);
        assert_eq!(relocation.ec_votes_gained, 8);
        assert_eq!(
            relocation.moves.get(&("A".to_string(), "B".to_string())),
            Some(&11)
        );

        assert_eq!(election.state("B").unwrap().winner(), Party::Democratic);
        assert_eq!(election.state("A").unwrap().winner(), Party::Democratic);
        assert_eq!(election.state("A").unwrap().margin(), 9);
        assert_eq!(election.winner().0, Party::Democratic);
    }

    #[test]
    fn protected_donor_makes_it_infeasible() {
        let mut election = election();
        let before = election.clone();
        let outcome =
            relocate_voters(&mut election, &["B".to_string()], &["A".to_string()], 24).unwrap();

        assert_eq!(
            outcome,
            RelocationOutcome::Infeasible {
                required: 11,
                available: 0
            }
        );
        assert_eq!(election, before);
    }

    #[test]
    fn spreads_across_donors() {
        let mut election = Election::new(vec![
            StateRecord::new("D1", 55, 50, 3),
            StateRecord::new("D2", 70, 50, 3),
            StateRecord::new("W", 40, 55, 7),
        ])
        .unwrap();

        let outcome = relocate_voters(&mut election, &["W".to_string()], &[], 13).unwrap();
        let relocation = outcome.relocation().unwrap();

        assert_eq!(relocation.voters_moved, 16);
        assert_eq!(relocation.ec_votes_gained, 7);
        assert_eq!(relocation.moves.get(&("D1".to_string(), "W".to_string())), Some(&4));
        assert_eq!(relocation.moves.get(&("D2".to_string(), "W".to_string())), Some(&12));
        for name in ["D1", "D2"] {
            let donor = election.state(name).unwrap();
            assert_eq!(donor.winner(), Party::Democratic);
            assert!(donor.margin() >= 1);
        }
    }

    #[test]
    fn multi_donor_fill_flips_through_a_tie() {
        // D1 alone brings W to 55-55, which the default tie-break gives to
        // dem, the election loser. The last voter must still go to dem.
        let mut election = Election::new(vec![
            StateRecord::new("D1", 61, 50, 3),
            StateRecord::new("D2", 70, 50, 3),
            StateRecord::new("W", 45, 55, 7),
        ])
        .unwrap();

        let outcome = relocate_voters(&mut election, &["W".to_string()], &[], 13).unwrap();
        let relocation = outcome.relocation().unwrap();

        let w = election.state("W").unwrap();
        assert_eq!(w.votes_for(Party::Democratic), 56);
        assert_eq!(w.votes_for(Party::Republican), 55);
        assert_eq!(w.winner(), Party::Democratic);
        assert_eq!(relocation.voters_moved, 11);
        assert_eq!(relocation.ec_votes_gained, 7);
        assert_eq!(election.winner().0, Party::Democratic);
    }

    #[test]
    fn multi_donor_fill_with_republican_tie_break() {
        let mut election = Election::new(vec![
            StateRecord::new("D1", 50, 61, 3),
            StateRecord::new("D2", 50, 70, 3),
            StateRecord::new("W", 55, 45, 7),
        ])
        .unwrap()
        .with_tie_break(Party::Republican);

        let outcome = relocate_voters(&mut election, &["W".to_string()], &[], 13).unwrap();
        let relocation = outcome.relocation().unwrap();

        let w = election.state("W").unwrap();
        assert_eq!(w.winner(), Party::Republican);
        assert_eq!(w.margin(), 1);
        assert_eq!(relocation.ec_votes_gained, 7);
        for name in ["D1", "D2"] {
            assert_eq!(election.state(name).unwrap().winner(), Party::Republican);
        }
    }

    #[test]
    fn unknown_swing_state_is_an_error() {
        let mut election = election();
        let err = relocate_voters(&mut election, &["ZZ".to_string()], &[], 24).unwrap_err();
        assert_eq!(
            err,
            RelocationError::Election(ElectionError::UnknownState("ZZ".to_string()))
        );
    }
}
