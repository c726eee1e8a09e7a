use super::{flip_cost, Selection};
use crate::model::StateRecord;
use std::collections::HashMap;

/// Top-down 0/1 knapsack over a fixed item order.
///
/// Weight is a state's electoral votes, value is the voters needed to flip
/// it. Subproblems are always suffixes of `items`, so the memo is keyed by
/// (items remaining, capacity remaining). That key is only sound for one
/// item list, which is why the memo lives and dies with the solver.
struct Knapsack<'s, 'a> {
    items: &'s [&'a StateRecord],
    memo: HashMap<(usize, u32), u64>,
}

impl<'s, 'a> Knapsack<'s, 'a> {
    fn new(items: &'s [&'a StateRecord]) -> Self {
        Knapsack {
            items,
            memo: HashMap::new(),
        }
    }

    /// Best value packable from `items[start..]` within `capacity`.
    fn best(&mut self, start: usize, capacity: u32) -> u64 {
        let remaining = self.items.len() - start;
        if remaining == 0 || capacity == 0 {
            return 0;
        }
        if let Some(&value) = self.memo.get(&(remaining, capacity)) {
            return value;
        }

        let value = match self.branches(start, capacity) {
            Some((take, skip)) => take.max(skip),
            None => self.best(start + 1, capacity),
        };
        self.memo.insert((remaining, capacity), value);
        value
    }

    /// `(take, skip)` values for the item at `start`, or `None` when it
    /// does not fit.
    fn branches(&mut self, start: usize, capacity: u32) -> Option<(u64, u64)> {
        let item = self.items[start];
        let weight = item.electoral_votes();
        if weight > capacity {
            return None;
        }

        let take = self.best(start + 1, capacity - weight) + flip_cost(item);
        let skip = self.best(start + 1, capacity);
        Some((take, skip))
    }

    /// Walk the memoized decisions forward to recover the chosen items.
    /// An item is taken only when taking is strictly better than skipping.
    fn solve(mut self, capacity: u32) -> Selection<'a> {
        let voters = self.best(0, capacity);
        let mut states = Vec::new();
        let mut remaining_capacity = capacity;

        for start in 0..self.items.len() {
            if remaining_capacity == 0 {
                break;
            }
            if let Some((take, skip)) = self.branches(start, remaining_capacity) {
                if take > skip {
                    let item = self.items[start];
                    remaining_capacity -= item.electoral_votes();
                    states.push(item);
                }
            }
        }

        log::trace!("knapsack memo held {} subproblems", self.memo.len());
        Selection { states, voters }
    }
}

/// States to leave alone: the subset of `winner_states` holding the most
/// voters while totalling at most `max_ec_votes` electoral votes.
///
/// Returns an empty selection worth zero when nothing fits.
pub fn max_voters_moved<'a>(winner_states: &[&'a StateRecord], max_ec_votes: u32) -> Selection<'a> {
    let selection = Knapsack::new(winner_states).solve(max_ec_votes);
    log::debug!(
        "knapsack: kept {} of {} states ({} EC, {} voters) under {} EC",
        selection.states.len(),
        winner_states.len(),
        selection.electoral_votes(),
        selection.voters,
        max_ec_votes
    );
    selection
}
