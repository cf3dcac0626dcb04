//! Error types for the simulation core.

use casim_data::{Coord3D, Direction, GridError};
use thiserror::Error;

use crate::codi::CoDiCellState;

/// Why a seed cannot become a lattice cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedDefect {
    #[error("{0:?} cell has no gate direction")]
    MissingGate(CoDiCellState),

    #[error("blank cell carries gate {0}")]
    UnexpectedGate(Direction),

    #[error("blank cell is wired to observe neighbors")]
    WiredBlank,

    #[error("{0:?} is a display-only state and cannot be seeded")]
    DisplayOnlyState(CoDiCellState),

    #[error("{state:?} cell is not wired to observe its gate {gate}")]
    GateNotWired {
        state: CoDiCellState,
        gate: Direction,
    },
}

/// Main error type for casim_core operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Grid access errors
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// A seed cell in the initial lattice is malformed
    #[error("Invalid cell at {coord}: {defect}")]
    InvalidCell {
        coord: Coord3D,
        #[source]
        defect: SeedDefect,
    },

    /// The initial lattice has no cells
    #[error("Lattice must have at least one cell on every axis")]
    EmptyLattice,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for casim_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn invalid_cell(coord: Coord3D, defect: SeedDefect) -> Self {
        Self::InvalidCell { coord, defect }
    }

    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
