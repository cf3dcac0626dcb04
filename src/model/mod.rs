pub use casim_core::{Automaton, Cell, Result, SimError, Stats};
pub use casim_data::{
    Coord2D, Coord3D, Direction, DirectionMap, DirectionSet, Grid, Grid2D, Grid3D, GridError,
};

pub mod codi {
    pub use casim_core::codi::*;
}
pub mod config {
    pub use casim_core::config::*;
}
pub mod grid {
    pub use casim_data::grid::*;
}
pub mod lattice {
    pub use casim_core::lattice::*;
}
pub mod metrics {
    pub use casim_core::metrics::*;
}
pub mod neighbors {
    pub use casim_core::neighbors::*;
}
pub mod rule {
    pub use casim_core::rule::*;
}
