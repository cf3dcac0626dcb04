//! Axis directions of the 3D lattice.
//!
//! The lattice is addressed as `(x, y, z)`. Directions name the six faces of a
//! site: EAST/WEST along x, TOP/BOTTOM along y, NORTH/SOUTH along z.

use crate::coord::Coord3D;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    Top,
    Bottom,
    East,
    West,
}

impl Direction {
    /// Every direction, in the order used for iteration and tie-breaking.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::Top,
        Direction::Bottom,
        Direction::East,
        Direction::West,
    ];

    /// Directions pointing along a positive axis (+z, +y, +x).
    pub const POSITIVE: [Direction; 3] = [Direction::North, Direction::Top, Direction::East];

    /// Directions pointing along a negative axis (-z, -y, -x).
    pub const NEGATIVE: [Direction; 3] = [Direction::South, Direction::Bottom, Direction::West];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit step from a site to its neighbor in this direction.
    pub const fn offset(self) -> Coord3D {
        match self {
            Direction::North => Coord3D::new(0, 0, 1),
            Direction::South => Coord3D::new(0, 0, -1),
            Direction::Top => Coord3D::new(0, 1, 0),
            Direction::Bottom => Coord3D::new(0, -1, 0),
            Direction::East => Coord3D::new(1, 0, 0),
            Direction::West => Coord3D::new(-1, 0, 0),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction that leads from `from` to the adjacent site `to`, if the
    /// two sites share a face.
    pub fn between(from: Coord3D, to: Coord3D) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| from + d.offset() == to)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// A subset of the six directions, packed into a bitmask.
///
/// Serialized as a list of direction names so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Direction>", into = "Vec<Direction>")]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);
    pub const ALL: DirectionSet = DirectionSet(0b11_1111);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11_1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn single(direction: Direction) -> Self {
        Self(1 << direction.index())
    }

    #[inline]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | (1 << direction.index()))
    }

    #[must_use]
    pub const fn without(self, direction: Direction) -> Self {
        Self(self.0 & !(1 << direction.index()))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(DirectionSet::EMPTY, DirectionSet::with)
    }
}

impl From<Vec<Direction>> for DirectionSet {
    fn from(directions: Vec<Direction>) -> Self {
        directions.into_iter().collect()
    }
}

impl From<DirectionSet> for Vec<Direction> {
    fn from(set: DirectionSet) -> Self {
        set.iter().collect()
    }
}

/// One value per direction, stored densely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DirectionMap<T> {
    values: [T; 6],
}

impl<T: Copy> DirectionMap<T> {
    pub const fn filled(value: T) -> Self {
        Self { values: [value; 6] }
    }
}

impl<T> DirectionMap<T> {
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Self {
            values: Direction::ALL.map(&mut f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().zip(self.values.iter())
    }
}

impl<T> Index<Direction> for DirectionMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, direction: Direction) -> &T {
        &self.values[direction.index()]
    }
}

impl<T> IndexMut<Direction> for DirectionMap<T> {
    #[inline]
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        &mut self.values[direction.index()]
    }
}
