//! The automaton iteration contract.
//!
//! An automaton owns its current grid and an iteration counter. Each
//! [`Automaton::step`] computes an entirely new grid, replaces the old one,
//! bumps the counter exactly once and hands back an independently owned 2D
//! projection. Nothing a caller holds ever aliases the automaton's state.

use casim_data::Grid2D;
use std::fmt;
use std::hash::Hash;

use crate::stats::Stats;

/// A lattice site with an observable state.
pub trait Cell {
    type State: Copy + Eq + Ord + Hash + fmt::Debug;

    fn state(&self) -> Self::State;
}

pub trait Automaton {
    type Cell: Cell;

    /// Whether another step can be taken.
    fn has_next(&self) -> bool;

    /// Advances one step and returns the new visible grid.
    fn step(&mut self) -> Grid2D<Self::Cell>;

    /// The visible grid, without advancing.
    fn grid(&self) -> Grid2D<Self::Cell>;

    /// Number of completed steps.
    fn iteration(&self) -> u64;

    /// Iteration count plus a frequency table of visible states.
    fn stats(&self) -> Stats<<Self::Cell as Cell>::State> {
        Stats::from_cells(self.iteration(), self.grid().values())
    }
}
