//! Aggregate statistics over a visible grid.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::automaton::Cell;

/// Snapshot of an automaton's progress: how many steps have completed and how
/// many visible cells are in each state.
///
/// Counts form a multiset, so the order in which cells are fed in never
/// affects the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats<S> {
    iteration: u64,
    counts: BTreeMap<S, usize>,
}

impl<S: Ord + Copy> Stats<S> {
    pub fn new(iteration: u64, counts: BTreeMap<S, usize>) -> Self {
        Self { iteration, counts }
    }

    pub fn from_cells<'a, C>(iteration: u64, cells: impl IntoIterator<Item = &'a C>) -> Self
    where
        C: Cell<State = S> + 'a,
    {
        Self::from_states(iteration, cells.into_iter().map(Cell::state))
    }

    pub fn from_states(iteration: u64, states: impl IntoIterator<Item = S>) -> Self {
        let mut counts = BTreeMap::new();
        for state in states {
            *counts.entry(state).or_insert(0) += 1;
        }
        Self { iteration, counts }
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn counts(&self) -> &BTreeMap<S, usize> {
        &self.counts
    }

    /// Number of cells in `state`; zero when the state is absent.
    pub fn count(&self, state: S) -> usize {
        self.counts.get(&state).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl<S: fmt::Debug> fmt::Display for Stats<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iteration: {}", self.iteration)?;
        for (state, count) in &self.counts {
            write!(f, "\n{state:?}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Kind {
        Blank,
        Neuron,
    }

    impl Cell for Kind {
        type State = Kind;

        fn state(&self) -> Kind {
            *self
        }
    }

    #[test]
    fn test_counts_distinct_states() {
        let cells = [Kind::Neuron, Kind::Neuron, Kind::Blank];
        let stats = Stats::from_cells(3, cells.iter());
        assert_eq!(stats.iteration(), 3);
        assert_eq!(stats.count(Kind::Neuron), 2);
        assert_eq!(stats.count(Kind::Blank), 1);
        assert_eq!(stats.counts().len(), 2);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_order_independent() {
        let cells = [Kind::Blank, Kind::Neuron, Kind::Blank, Kind::Neuron, Kind::Neuron];
        let forward = Stats::from_cells(0, cells.iter());
        let backward = Stats::from_cells(0, cells.iter().rev());
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_missing_state_counts_zero() {
        let stats = Stats::from_states(0, [Kind::Blank]);
        assert_eq!(stats.count(Kind::Neuron), 0);
    }

    #[test]
    fn test_display() {
        let stats = Stats::from_states(7, [Kind::Neuron, Kind::Blank, Kind::Neuron]);
        assert_eq!(stats.to_string(), "Iteration: 7\nBlank: 1\nNeuron: 2");
    }
}
