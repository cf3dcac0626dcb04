//! # Casim Data
//!
//! Plain data types shared by every automaton in the simulator.
//!
//! - Integer coordinates in two and three dimensions
//! - The six axis directions of the 3D lattice, plus dense per-direction storage
//! - Dense, fixed-shape grids with bounds-checked access
//!
//! Nothing in this crate knows about update rules or phases; it only stores
//! values and answers questions about shape.

/// 2D and 3D integer coordinates
pub mod coord;
/// Axis directions, direction sets and per-direction maps
pub mod direction;
/// Error types for grid access
pub mod error;
/// Dense grids over 2D and 3D shapes
pub mod grid;

pub use coord::{Coord2D, Coord3D};
pub use direction::{Direction, DirectionMap, DirectionSet};
pub use error::{GridCoord, GridError, Result};
pub use grid::{Coordinates, Dim2, Dim3, Grid, Grid2D, Grid3D, Shape};
