use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{state}: cannot take {requested} votes from {party}, only {available} cast")]
    InsufficientVotes {
        state: String,
        party: Party,
        requested: u64,
        available: u64,
    },
    #[error("Unknown party: {0}")]
    UnknownParty(String),
}

pub type Result<T> = std::result::Result<T, StateError>;

/// One of the two parties contesting the election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Party {
    #[serde(rename = "dem")]
    Democratic,
    #[serde(rename = "rep")]
    Republican,
}

impl Party {
    pub fn opponent(self) -> Party {
        match self {
            Party::Democratic => Party::Republican,
            Party::Republican => Party::Democratic,
        }
    }
}

impl Default for Party {
    fn default() -> Self {
        Party::Democratic
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Democratic => write!(f, "dem"),
            Party::Republican => write!(f, "rep"),
        }
    }
}

impl FromStr for Party {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dem" | "democratic" | "d" => Ok(Party::Democratic),
            "rep" | "republican" | "r" => Ok(Party::Republican),
            _ => Err(StateError::UnknownParty(s.to_string())),
        }
    }
}

/// Vote tallies and electoral weight of a single state.
///
/// Electoral votes are fixed at construction. Vote counts only move through
/// [`StateRecord::add_votes_for`], [`StateRecord::add_votes_for_losing_party`]
/// and [`StateRecord::subtract_votes_for_winning_party`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    name: String,
    democratic_votes: u64,
    republican_votes: u64,
    electoral_votes: u32,
    tie_break: Party,
}

impl StateRecord {
    pub fn new(
        name: impl Into<String>,
        democratic_votes: u64,
        republican_votes: u64,
        electoral_votes: u32,
    ) -> Self {
        StateRecord {
            name: name.into(),
            democratic_votes,
            republican_votes,
            electoral_votes,
            tie_break: Party::default(),
        }
    }

    /// Party credited with the state when both vote counts are equal.
    pub fn with_tie_break(mut self, tie_break: Party) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn electoral_votes(&self) -> u32 {
        self.electoral_votes
    }

    pub fn votes_for(&self, party: Party) -> u64 {
        match party {
            Party::Democratic => self.democratic_votes,
            Party::Republican => self.republican_votes,
        }
    }

    pub fn tie_break(&self) -> Party {
        self.tie_break
    }

    pub fn winner(&self) -> Party {
        if self.democratic_votes > self.republican_votes {
            Party::Democratic
        } else if self.republican_votes > self.democratic_votes {
            Party::Republican
        } else {
            self.tie_break
        }
    }

    pub fn loser(&self) -> Party {
        self.winner().opponent()
    }

    pub fn margin(&self) -> u64 {
        if self.democratic_votes > self.republican_votes {
            self.democratic_votes - self.republican_votes
        } else {
            self.republican_votes - self.democratic_votes
        }
    }

    /// Voters the state loser needs to take the state outright.
    pub fn votes_to_flip(&self) -> u64 {
        self.margin() + 1
    }

    pub fn add_votes_for(&mut self, party: Party, n: u64) {
        match party {
            Party::Democratic => self.democratic_votes = self.democratic_votes.saturating_add(n),
            Party::Republican => self.republican_votes = self.republican_votes.saturating_add(n),
        }
    }

    /// Adds to whichever party currently trails. On a tied state that is
    /// the opponent of the tie-break party.
    pub fn add_votes_for_losing_party(&mut self, n: u64) {
        self.add_votes_for(self.loser(), n);
    }

    pub fn subtract_votes_for_winning_party(&mut self, n: u64) -> Result<()> {
        let party = self.winner();
        let votes = match party {
            Party::Democratic => &mut self.democratic_votes,
            Party::Republican => &mut self.republican_votes,
        };
        if n > *votes {
            return Err(StateError::InsufficientVotes {
                state: self.name.clone(),
                party,
                requested: n,
                available: *votes,
            });
        }
        *votes -= n;
        Ok(())
    }
}

impl fmt::Display for StateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: dem {}, rep {}, {} EC",
            self.name, self.democratic_votes, self.republican_votes, self.electoral_votes
        )
    }
}
