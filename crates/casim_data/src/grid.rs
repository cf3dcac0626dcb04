//! Dense grids with a fixed shape.
//!
//! A [`Grid`] owns exactly one value per in-range coordinate. Its cells are
//! stored in a flat `Vec` laid out in enumeration order, so
//! [`Grid::coordinates`] and the underlying storage always agree:
//!
//! - 2D: rows outer, columns inner (`y`, then `x`)
//! - 3D: layers outer, then rows, then columns (`z`, `y`, `x`)
//!
//! Update passes that sweep the grid forward and backward rely on this order.

use crate::coord::{Coord2D, Coord3D};
use crate::error::{GridCoord, GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The extent of a grid and the mapping between coordinates and flat indices.
pub trait Shape: Copy + Eq + fmt::Debug {
    type Coord: Copy + Eq + fmt::Debug + fmt::Display + Into<GridCoord>;

    /// Number of cells covered by the shape.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of `coord`, or `None` when any axis is outside `[0, dimension)`.
    fn index_of(&self, coord: Self::Coord) -> Option<usize>;

    /// Inverse of [`Shape::index_of`]. `index` must be below [`Shape::len`].
    fn coord_at(&self, index: usize) -> Self::Coord;

    fn coordinates(self) -> Coordinates<Self> {
        Coordinates {
            shape: self,
            range: 0..self.len(),
        }
    }
}

#[inline]
fn axis(value: i32, extent: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| *v < extent)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dim2 {
    width: usize,
    height: usize,
}

impl Dim2 {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }
}

impl Shape for Dim2 {
    type Coord = Coord2D;

    fn len(&self) -> usize {
        self.width * self.height
    }

    fn index_of(&self, coord: Coord2D) -> Option<usize> {
        let x = axis(coord.x(), self.width)?;
        let y = axis(coord.y(), self.height)?;
        Some(y * self.width + x)
    }

    fn coord_at(&self, index: usize) -> Coord2D {
        Coord2D::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dim3 {
    width: usize,
    height: usize,
    depth: usize,
}

impl Dim3 {
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline(always)]
    fn flat(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.height + y) * self.width + x
    }
}

impl Shape for Dim3 {
    type Coord = Coord3D;

    fn len(&self) -> usize {
        self.width * self.height * self.depth
    }

    fn index_of(&self, coord: Coord3D) -> Option<usize> {
        let x = axis(coord.x(), self.width)?;
        let y = axis(coord.y(), self.height)?;
        let z = axis(coord.z(), self.depth)?;
        Some(self.flat(x, y, z))
    }

    fn coord_at(&self, index: usize) -> Coord3D {
        let x = index % self.width;
        let y = (index / self.width) % self.height;
        let z = index / (self.width * self.height);
        Coord3D::new(x as i32, y as i32, z as i32)
    }
}

/// Iterator over every coordinate of a shape in storage order.
///
/// Reversible, so a backward sweep visits exactly the forward sequence in
/// reverse.
#[derive(Debug, Clone)]
pub struct Coordinates<D> {
    shape: D,
    range: Range<usize>,
}

impl<D: Shape> Iterator for Coordinates<D> {
    type Item = D::Coord;

    fn next(&mut self) -> Option<D::Coord> {
        self.range.next().map(|i| self.shape.coord_at(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<D: Shape> DoubleEndedIterator for Coordinates<D> {
    fn next_back(&mut self) -> Option<D::Coord> {
        self.range.next_back().map(|i| self.shape.coord_at(i))
    }
}

impl<D: Shape> ExactSizeIterator for Coordinates<D> {}

#[derive(Deserialize)]
struct GridParts<D, V> {
    shape: D,
    cells: Vec<V>,
}

impl<D: Shape, V> TryFrom<GridParts<D, V>> for Grid<D, V> {
    type Error = GridError;

    fn try_from(parts: GridParts<D, V>) -> Result<Self> {
        Grid::new(parts.shape, parts.cells)
    }
}

/// A dense mapping from every coordinate of a shape to a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "GridParts<D, V>",
    bound(deserialize = "D: Shape + Deserialize<'de>, V: Deserialize<'de>")
)]
pub struct Grid<D, V> {
    shape: D,
    cells: Vec<V>,
}

pub type Grid2D<V> = Grid<Dim2, V>;
pub type Grid3D<V> = Grid<Dim3, V>;

impl<D: Shape, V> Grid<D, V> {
    /// Builds a grid from values listed in enumeration order.
    pub fn new(shape: D, cells: Vec<V>) -> Result<Self> {
        if cells.len() != shape.len() {
            return Err(GridError::shape_mismatch(shape.len(), cells.len()));
        }
        Ok(Self { shape, cells })
    }

    pub fn filled(shape: D, value: V) -> Self
    where
        V: Clone,
    {
        Self {
            shape,
            cells: vec![value; shape.len()],
        }
    }

    pub fn from_fn(shape: D, f: impl FnMut(D::Coord) -> V) -> Self {
        Self {
            shape,
            cells: shape.coordinates().map(f).collect(),
        }
    }

    #[inline]
    pub fn shape(&self) -> D {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn is_valid(&self, coord: D::Coord) -> bool {
        self.shape.index_of(coord).is_some()
    }

    pub fn get(&self, coord: D::Coord) -> Result<&V> {
        self.shape
            .index_of(coord)
            .map(|idx| &self.cells[idx])
            .ok_or_else(|| GridError::out_of_bounds(coord))
    }

    pub fn get_mut(&mut self, coord: D::Coord) -> Result<&mut V> {
        match self.shape.index_of(coord) {
            Some(idx) => Ok(&mut self.cells[idx]),
            None => Err(GridError::out_of_bounds(coord)),
        }
    }

    pub fn set(&mut self, coord: D::Coord, value: V) -> Result<()> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// A new grid of the same shape; the source is left untouched.
    pub fn map<U>(&self, f: impl FnMut(&V) -> U) -> Grid<D, U> {
        Grid {
            shape: self.shape,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Like [`Grid::map`], with each value's coordinate passed alongside it.
    pub fn map_with_coords<U>(&self, mut f: impl FnMut(D::Coord, &V) -> U) -> Grid<D, U> {
        Grid {
            shape: self.shape,
            cells: self.iter().map(|(coord, value)| f(coord, value)).collect(),
        }
    }

    /// Every in-range coordinate in storage order.
    ///
    /// The iterator does not borrow the grid, so a pass may mutate cells
    /// while walking it.
    pub fn coordinates(&self) -> Coordinates<D> {
        self.shape.coordinates()
    }

    pub fn iter(&self) -> impl Iterator<Item = (D::Coord, &V)> + '_ {
        self.coordinates().zip(self.cells.iter())
    }

    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.cells.iter()
    }

    pub fn values_mut(&mut self) -> std::slice::IterMut<'_, V> {
        self.cells.iter_mut()
    }
}

impl<V> Grid<Dim2, V> {
    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }
}

impl<V> Grid<Dim3, V> {
    pub fn width(&self) -> usize {
        self.shape.width
    }

    pub fn height(&self) -> usize {
        self.shape.height
    }

    pub fn depth(&self) -> usize {
        self.shape.depth
    }

    /// Projects the plane at column `x` into a 2D grid.
    ///
    /// The 2D coordinate `(a, b)` reads the lattice site `(x, a, b)`, so the
    /// result is `height` wide and `depth` tall.
    pub fn slice_x<U>(&self, x: usize, mut f: impl FnMut(&V) -> U) -> Result<Grid2D<U>> {
        let shape = self.shape;
        if x >= shape.width {
            return Err(GridError::slice_out_of_range(x, shape.width));
        }
        let plane = Dim2::new(shape.height, shape.depth);
        let cells = plane
            .coordinates()
            .map(|c| f(&self.cells[shape.flat(x, c.x() as usize, c.y() as usize)]))
            .collect();
        Ok(Grid {
            shape: plane,
            cells,
        })
    }
}
