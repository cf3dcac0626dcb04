//! Neighbor lookup strategies.
//!
//! A strategy resolves the in-bounds orthogonal neighbors of a coordinate.
//! Neighbors that would fall outside the grid are dropped, never wrapped.
//! Strategies are plain functions so they can be handed to an
//! [`crate::rule::UpdateRule`] as a [`crate::rule::NeighborsFn`].

use casim_data::{Coord2D, Coord3D, Grid2D, Grid3D};

/// The up to four orthogonal neighbors on a 2D grid (+x, +y, -y, -x).
pub fn von_neumann_2d<V>(coord: Coord2D, grid: &Grid2D<V>) -> Vec<(Coord2D, &V)> {
    coord
        .neighbors()
        .into_iter()
        .filter_map(|n| grid.get(n).ok().map(|cell| (n, cell)))
        .collect()
}

/// The up to six face neighbors in a 3D lattice (+x, -x, +y, -y, +z, -z).
pub fn von_neumann_3d<V>(coord: Coord3D, grid: &Grid3D<V>) -> Vec<(Coord3D, &V)> {
    coord
        .neighbors()
        .into_iter()
        .filter_map(|n| grid.get(n).ok().map(|cell| (n, cell)))
        .collect()
}
