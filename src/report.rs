use crate::model::{Election, Party};
use crate::optimize::{Selection, SwingMethod};
use crate::relocate::RelocationOutcome;
use serde::{Deserialize, Serialize};

/// Who won, and by how much the loser falls short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSummary {
    pub winner: Party,
    pub loser: Party,
    pub winner_electoral_votes: u32,
    pub loser_electoral_votes: u32,
    pub states_won: Vec<String>,
    pub ec_votes_needed: u32,
}

impl ElectionSummary {
    pub fn new(election: &Election, total: u32) -> Self {
        let (winner, loser) = election.winner();
        ElectionSummary {
            winner,
            loser,
            winner_electoral_votes: election.electoral_votes_for(winner),
            loser_electoral_votes: election.electoral_votes_for(loser),
            states_won: election
                .won_states()
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            ec_votes_needed: election.ec_votes_to_flip(total),
        }
    }
}

/// A set of states found by one of the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingReport {
    pub method: SwingMethod,
    pub states: Vec<String>,
    pub electoral_votes: u32,
    pub voters: u64,
}

impl SwingReport {
    pub fn new(method: SwingMethod, selection: &Selection<'_>) -> Self {
        SwingReport {
            method,
            states: selection.names(),
            electoral_votes: selection.electoral_votes(),
            voters: selection.voters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: String,
    pub to: String,
    pub voters: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RelocationReport {
    #[serde(rename_all = "camelCase")]
    Relocated {
        swing: SwingReport,
        voters_moved: u64,
        ec_votes_gained: u32,
        moves: Vec<Move>,
    },
    #[serde(rename_all = "camelCase")]
    Infeasible {
        swing: SwingReport,
        voters_required: u64,
        voters_available: u64,
    },
}

impl RelocationReport {
    pub fn new(swing: SwingReport, outcome: &RelocationOutcome) -> Self {
        match outcome {
            RelocationOutcome::Relocated(relocation) => RelocationReport::Relocated {
                swing,
                voters_moved: relocation.voters_moved,
                ec_votes_gained: relocation.ec_votes_gained,
                moves: relocation
                    .moves
                    .iter()
                    .map(|((from, to), voters)| Move {
                        from: from.clone(),
                        to: to.clone(),
                        voters: *voters,
                    })
                    .collect(),
            },
            RelocationOutcome::Infeasible {
                required,
                available,
            } => RelocationReport::Infeasible {
                swing,
                voters_required: *required,
                voters_available: *available,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StateRecord;
    use crate::relocate::relocate_voters;

    fn election() -> Election {
        Election::new(vec![
            StateRecord::new("A", 60, 40, 10),
            StateRecord::new("B", 45, 55, 8),
            StateRecord::new("C", 30, 70, 6),
        ])
        .unwrap()
    }

    #[test]
    fn summary_serializes() {
        let summary = ElectionSummary::new(&election(), 24);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["winner"], "rep");
        assert_eq!(json["statesWon"], serde_json::json!(["B", "C"]));
        assert_eq!(json["ecVotesNeeded"], 3);
    }

    #[test]
    fn relocation_report_lists_moves() {
        let mut election = election();
        let swing = SwingReport {
            method: SwingMethod::Knapsack,
            states: vec!["B".to_string()],
            electoral_votes: 8,
            voters: 11,
        };
        let outcome = relocate_voters(&mut election, &swing.states, &[], 24).unwrap();
        let report = RelocationReport::new(swing, &outcome);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "relocated");
        assert_eq!(json["votersMoved"], 11);
        assert_eq!(json["swing"]["method"], "knapsack");
        assert_eq!(
            json["moves"],
            serde_json::json!([{"from": "A", "to": "B", "voters": 11}])
        );
    }
}
