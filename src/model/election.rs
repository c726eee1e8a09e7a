use super::state::{Party, StateError, StateRecord};
use std::collections::HashSet;

/// Electoral votes in a full U.S. presidential election.
pub const DEFAULT_TOTAL_ELECTORAL_VOTES: u32 = 538;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ElectionError {
    #[error("Duplicate state: {0}")]
    DuplicateState(String),
    #[error("Unknown state: {0}")]
    UnknownState(String),
    #[error("Moving {requested} voters out of {donor} would leave a margin of {remaining}; donors must keep a margin of at least 1")]
    DonorWouldFlip {
        donor: String,
        requested: u64,
        remaining: u64,
    },
    #[error("State error: {0}")]
    State(#[from] StateError),
}

pub type Result<T> = std::result::Result<T, ElectionError>;

/// An ordered list of states with unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Election {
    states: Vec<StateRecord>,
    tie_break: Party,
}

impl Election {
    pub fn new(states: Vec<StateRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for state in &states {
            if !seen.insert(state.name()) {
                return Err(ElectionError::DuplicateState(state.name().to_string()));
            }
        }

        Ok(Election {
            states,
            tie_break: Party::default(),
        })
    }

    /// Resolve state-level and electoral-vote ties toward `tie_break`.
    pub fn with_tie_break(mut self, tie_break: Party) -> Self {
        self.tie_break = tie_break;
        self.states = self
            .states
            .into_iter()
            .map(|state| state.with_tie_break(tie_break))
            .collect();
        self
    }

    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn tie_break(&self) -> Party {
        self.tie_break
    }

    pub fn position(&self, name: &str) -> Result<usize> {
        self.states
            .iter()
            .position(|state| state.name() == name)
            .ok_or_else(|| ElectionError::UnknownState(name.to_string()))
    }

    pub fn state(&self, name: &str) -> Result<&StateRecord> {
        self.position(name).map(|index| &self.states[index])
    }

    pub fn total_electoral_votes(&self) -> u32 {
        self.states.iter().map(StateRecord::electoral_votes).sum()
    }

    pub fn electoral_votes_for(&self, party: Party) -> u32 {
        self.states
            .iter()
            .filter(|state| state.winner() == party)
            .map(StateRecord::electoral_votes)
            .sum()
    }

    /// Returns `(winner, loser)` by electoral votes.
    pub fn winner(&self) -> (Party, Party) {
        let dem = self.electoral_votes_for(Party::Democratic);
        let rep = self.electoral_votes_for(Party::Republican);

        let winner = if dem > rep {
            Party::Democratic
        } else if rep > dem {
            Party::Republican
        } else {
            self.tie_break
        };

        (winner, winner.opponent())
    }

    /// States carried by the election winner, in input order.
    pub fn won_states(&self) -> Vec<&StateRecord> {
        let (winner, _) = self.winner();
        self.states_won_by(winner)
    }

    pub fn states_won_by(&self, party: Party) -> Vec<&StateRecord> {
        self.states
            .iter()
            .filter(|state| state.winner() == party)
            .collect()
    }

    /// Additional electoral votes the loser needs to win outright, given
    /// `total` electoral votes in play.
    pub fn ec_votes_to_flip(&self, total: u32) -> u32 {
        let (winner, _) = self.winner();
        let winner_votes = i64::from(self.electoral_votes_for(winner));
        let loser_votes = i64::from(total) - winner_votes;
        let needed = i64::from(total / 2) + 1 - loser_votes;

        needed.max(0) as u32
    }

    /// Relocate `voters` of the party carrying `donor` into `recipient`.
    ///
    /// The voters keep their party, so a recipient that passes through a
    /// tie on the way keeps receiving votes for the same side.
    pub fn transfer(&mut self, donor: usize, recipient: usize, voters: u64) -> Result<()> {
        let donor_state = &self.states[donor];
        let margin = donor_state.margin();
        if voters >= margin {
            return Err(ElectionError::DonorWouldFlip {
                donor: donor_state.name().to_string(),
                requested: voters,
                remaining: margin.saturating_sub(voters),
            });
        }

        let party = donor_state.winner();
        self.states[donor].subtract_votes_for_winning_party(voters)?;
        self.states[recipient].add_votes_for(party, voters);

        log::trace!(
            "moved {} voters {} -> {}",
            voters,
            self.states[donor].name(),
            self.states[recipient].name()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_states() -> Election {
        Election::new(vec![
            StateRecord::new("A", 60, 40, 10),
            StateRecord::new("B", 45, 55, 8),
            StateRecord::new("C", 30, 70, 6),
        ])
        .unwrap()
    }

    #[test]
    fn aggregates() {
        let election = three_states();
        assert_eq!(election.total_electoral_votes(), 24);
        assert_eq!(election.electoral_votes_for(Party::Democratic), 10);
        assert_eq!(election.electoral_votes_for(Party::Republican), 14);
        assert_eq!(election.winner(), (Party::Republican, Party::Democratic));

        let names: Vec<_> = election.won_states().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(election.ec_votes_to_flip(24), 3);
    }

    #[test]
    fn flip_threshold_with_odd_total() {
        let election = Election::new(vec![
            StateRecord::new("A", 60, 40, 10),
            StateRecord::new("B", 45, 55, 15),
        ])
        .unwrap();
        assert_eq!(election.ec_votes_to_flip(25), 3);
    }

    #[test]
    fn electoral_tie_goes_to_tie_break() {
        let election = Election::new(vec![
            StateRecord::new("A", 60, 40, 5),
            StateRecord::new("B", 40, 60, 5),
        ])
        .unwrap();
        assert_eq!(election.winner().0, Party::Democratic);
        assert_eq!(election.ec_votes_to_flip(10), 1);

        let election = election.with_tie_break(Party::Republican);
        assert_eq!(election.winner().0, Party::Republican);
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = Election::new(vec![
            StateRecord::new("A", 1, 2, 3),
            StateRecord::new("A", 4, 5, 6),
        ])
        .unwrap_err();
        assert_eq!(err, ElectionError::DuplicateState("A".to_string()));
    }

    #[test]
    fn transfer_guards_donor_margin() {
        let mut election = three_states();
        let donor = election.position("A").unwrap();
        let recipient = election.position("B").unwrap();

        let err = election.transfer(donor, recipient, 20).unwrap_err();
        assert!(matches!(err, ElectionError::DonorWouldFlip { .. }));
        assert_eq!(election, three_states());

        election.transfer(donor, recipient, 11).unwrap();
        assert_eq!(election.state("A").unwrap().margin(), 9);
        assert_eq!(election.state("B").unwrap().winner(), Party::Democratic);
    }

    #[test]
    fn transfer_through_a_tie_keeps_the_donor_party() {
        let mut election = Election::new(vec![
            StateRecord::new("D1", 61, 50, 3),
            StateRecord::new("D2", 70, 50, 3),
            StateRecord::new("W", 45, 55, 7),
        ])
        .unwrap();
        let w = election.position("W").unwrap();

        // The first transfer ties W, which the tie-break hands to dem.
        election.transfer(0, w, 10).unwrap();
        assert_eq!(election.state("W").unwrap().margin(), 0);

        election.transfer(1, w, 1).unwrap();
        let state = election.state("W").unwrap();
        assert_eq!(state.votes_for(Party::Democratic), 56);
        assert_eq!(state.votes_for(Party::Republican), 55);
        assert_eq!(state.winner(), Party::Democratic);
    }
}
