//! Drives an automaton on behalf of a front end.
//!
//! Front ends only care about visible states, so every grid handed out here
//! has already been mapped from cells to their states.

use casim_core::codi::{CoDi, GrowthRule};
use casim_core::{Automaton, Cell, Stats};
use casim_data::Grid2D;

type StateOf<A> = <<A as Automaton>::Cell as Cell>::State;

pub struct AutomatonController<A> {
    automaton: A,
}

impl<A: Automaton> AutomatonController<A> {
    pub fn new(automaton: A) -> Self {
        Self { automaton }
    }

    pub fn has_next(&self) -> bool {
        self.automaton.has_next()
    }

    /// Advances one step and returns the new visible states.
    pub fn next(&mut self) -> Grid2D<StateOf<A>> {
        self.automaton.step().map(Cell::state)
    }

    pub fn grid(&self) -> Grid2D<StateOf<A>> {
        self.automaton.grid().map(Cell::state)
    }

    pub fn stats(&self) -> Stats<StateOf<A>> {
        self.automaton.stats()
    }

    pub fn automaton(&self) -> &A {
        &self.automaton
    }

    pub fn into_inner(self) -> A {
        self.automaton
    }
}

impl<G: GrowthRule> AutomatonController<CoDi<G>> {
    pub fn shift_layer_left(&mut self) -> Grid2D<StateOf<CoDi<G>>> {
        self.automaton.shift_layer_left().map(Cell::state)
    }

    pub fn shift_layer_right(&mut self) -> Grid2D<StateOf<CoDi<G>>> {
        self.automaton.shift_layer_right().map(Cell::state)
    }
}
