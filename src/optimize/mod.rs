//! Swing-state search.
//!
//! Two independent solvers answer the same question: which states won by
//! the election winner should the loser flip, at the lowest voter cost, to
//! collect at least a given number of electoral votes?
//!
//! * [`brute_force_swing_states`] checks every subset. Exponential, kept as
//!   the reference answer for small inputs.
//! * [`min_voters_moved`] solves the complementary 0/1 knapsack with
//!   [`max_voters_moved`] and reads the swing states off what is left over.

pub mod brute_force;
pub mod knapsack;
pub mod min_cost;
pub mod powerset;

pub use brute_force::brute_force_swing_states;
pub use knapsack::max_voters_moved;
pub use min_cost::min_voters_moved;
pub use powerset::{combinations, MAX_POWERSET_ITEMS};

use crate::model::StateRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptimizeError {
    #[error("{value} needs more than {digits} binary digits")]
    InvalidSubsetDigits { value: u64, digits: usize },
    #[error("Refusing to enumerate subsets of {0} items")]
    TooManyItems(usize),
    #[error("Unknown swing method: {0}")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, OptimizeError>;

/// Voters needed to flip a single state: its margin plus one.
pub(crate) fn flip_cost(state: &StateRecord) -> u64 {
    state.votes_to_flip()
}

/// A set of states together with the voters associated with it.
///
/// For swing sets the voter count is the number of relocated voters needed
/// to flip every state in the set; for knapsack keep-sets it is the value
/// packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub states: Vec<&'a StateRecord>,
    pub voters: u64,
}

impl<'a> Selection<'a> {
    pub fn empty() -> Self {
        Selection {
            states: Vec::new(),
            voters: 0,
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.states.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn electoral_votes(&self) -> u32 {
        self.states.iter().map(|s| s.electoral_votes()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Which solver to use when looking for swing states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwingMethod {
    BruteForce,
    Knapsack,
}

impl SwingMethod {
    pub fn find<'a>(
        self,
        winner_states: &[&'a StateRecord],
        ec_votes_needed: u32,
    ) -> Result<Selection<'a>> {
        match self {
            SwingMethod::BruteForce => brute_force_swing_states(winner_states, ec_votes_needed),
            SwingMethod::Knapsack => Ok(min_voters_moved(winner_states, ec_votes_needed)),
        }
    }
}

impl Default for SwingMethod {
    fn default() -> Self {
        SwingMethod::Knapsack
    }
}

impl fmt::Display for SwingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwingMethod::BruteForce => write!(f, "brute-force"),
            SwingMethod::Knapsack => write!(f, "knapsack"),
        }
    }
}

impl FromStr for SwingMethod {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "brute" | "brute-force" => Ok(SwingMethod::BruteForce),
            "knapsack" | "dp" => Ok(SwingMethod::Knapsack),
            _ => Err(OptimizeError::UnknownMethod(s.to_string())),
        }
    }
}
