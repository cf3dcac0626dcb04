//! Error types for casim_data.
//!
//! Grid access outside the grid's shape is recoverable: callers get an
//! explicit error value instead of a panic.

use std::fmt;
use thiserror::Error;

use crate::coord::{Coord2D, Coord3D};

/// The coordinate that caused an error, in whichever dimension the grid has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCoord {
    Planar(Coord2D),
    Spatial(Coord3D),
}

impl From<Coord2D> for GridCoord {
    fn from(coord: Coord2D) -> Self {
        GridCoord::Planar(coord)
    }
}

impl From<Coord3D> for GridCoord {
    fn from(coord: Coord3D) -> Self {
        GridCoord::Spatial(coord)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridCoord::Planar(c) => c.fmt(f),
            GridCoord::Spatial(c) => c.fmt(f),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside `[0, dimension)` on at least one axis
    #[error("Coordinate {coord} is out of bounds")]
    OutOfBounds { coord: GridCoord },

    /// A slice index is not below the extent of the sliced axis
    #[error("Slice x = {x} is outside width {width}")]
    SliceOutOfRange { x: usize, width: usize },

    /// A value buffer does not match the number of cells in the shape
    #[error("Shape mismatch: expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    #[must_use]
    pub fn out_of_bounds(coord: impl Into<GridCoord>) -> Self {
        Self::OutOfBounds {
            coord: coord.into(),
        }
    }

    #[must_use]
    pub fn slice_out_of_range(x: usize, width: usize) -> Self {
        Self::SliceOutOfRange { x, width }
    }

    #[must_use]
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}
