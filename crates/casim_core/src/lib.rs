//! # Casim Core
//!
//! The simulation engine: a generic cellular-automaton framework and the CoDi
//! growth-and-signaling automaton built on top of it.
//!
//! This crate contains:
//! - Update rules parameterized by a neighbor-lookup strategy
//! - The automaton iteration contract and aggregate statistics
//! - CoDi cells, growth, signaling and the kicking pass
//! - Configuration, seeded lattice generation and structured logging
//!
//! ## Architecture
//!
//! Every step is a pure function of the previous grid: a rule maps each
//! cell and its neighbors to a next cell, and the automaton replaces its
//! grid wholesale. The only randomness is the one-time signaling setup, which
//! draws from an injected seeded generator.
//!
//! ## Example
//!
//! ```
//! use casim_core::automaton::Automaton;
//! use casim_core::codi::{CellSeed, CoDi, CoDiCellState};
//! use casim_data::{Coord3D, Dim3, Direction, Grid};
//!
//! let mut seeds = Grid::filled(Dim3::new(1, 1, 3), CellSeed::blank());
//! seeds
//!     .set(Coord3D::new(0, 0, 1), CellSeed::neuron(Direction::North))
//!     .unwrap();
//!
//! let mut codi = CoDi::seeded(&seeds, 42).unwrap();
//! codi.step();
//! assert_eq!(codi.stats().count(CoDiCellState::Axon), 2);
//! ```

/// Automaton and cell traits
pub mod automaton;
/// The CoDi automaton
pub mod codi;
/// Configuration management for CoDi runs
pub mod config;
/// Error types for simulation construction and access
pub mod error;
/// Random generation of initial lattices
pub mod lattice;
/// Step metrics and structured logging setup
pub mod metrics;
/// Neighbor-lookup strategies
pub mod neighbors;
/// Update rules and pluggable transitions
pub mod rule;
/// Aggregate statistics over visible grids
pub mod stats;

pub use automaton::{Automaton, Cell};
pub use error::{Result, SimError};
pub use stats::Stats;
