//! The CoDi 3D growth-and-signaling automaton.

pub mod automaton;
pub mod cell;
pub mod growth;
pub mod kicking;
pub mod signaling;

pub use automaton::{CoDi, DisplayCell, Phase, ACTIVATION_DRAW_LIMIT};
pub use cell::{CellKind, CellSeed, Chromosome, CoDiCell, CoDiCellState};
pub use growth::{ChromosomeGrowth, GrowthRule};
pub use kicking::kick;
pub use signaling::{SignalingRule, DENDRITE_SIGNAL_LIMIT, NEURON_FIRING_THRESHOLD};
