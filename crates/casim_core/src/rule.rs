//! The update-rule protocol.
//!
//! An update rule computes a cell's next value in two stages: a neighbor
//! strategy resolves the cell's neighborhood from the current grid, then a
//! [`Transition`] maps the cell and that neighborhood to the next cell. The
//! transition sees nothing else, so identical inputs always give identical
//! outputs.

use casim_data::{Grid, Shape};

/// Strategy that resolves the in-bounds neighbors of a coordinate.
pub type NeighborsFn<D, V> = for<'g> fn(
    <D as Shape>::Coord,
    &'g Grid<D, V>,
) -> Vec<(<D as Shape>::Coord, &'g V)>;

/// The rule-specific part of an update: a pure function of a cell and its
/// neighborhood.
pub trait Transition<C, V> {
    fn next_cell(&self, coord: C, cell: &V, neighbors: &[(C, &V)]) -> V;
}

/// A [`Transition`] paired with the neighbor strategy it is evaluated with.
pub struct UpdateRule<D: Shape, V, T> {
    neighbors: NeighborsFn<D, V>,
    transition: T,
}

impl<D: Shape, V, T: Transition<D::Coord, V>> UpdateRule<D, V, T> {
    pub fn new(neighbors: NeighborsFn<D, V>, transition: T) -> Self {
        Self {
            neighbors,
            transition,
        }
    }

    pub fn transition(&self) -> &T {
        &self.transition
    }

    /// Next value of `cell`, which lives at `coord` in `grid`.
    pub fn next_cell(&self, coord: D::Coord, cell: &V, grid: &Grid<D, V>) -> V {
        let neighbors = (self.neighbors)(coord, grid);
        self.transition.next_cell(coord, cell, &neighbors)
    }

    /// Applies the rule to every cell, producing a brand-new grid.
    pub fn apply(&self, grid: &Grid<D, V>) -> Grid<D, V> {
        grid.map_with_coords(|coord, cell| self.next_cell(coord, cell, grid))
    }
}
