use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

const OFFSETS_2D: [(i32, i32); 4] = [(1, 0), (0, 1), (0, -1), (-1, 0)];

const OFFSETS_3D: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// An immutable point on a 2D grid.
///
/// Coordinates carry no identity: two coordinates with the same axes are the
/// same coordinate. Axes are signed so that neighbor offsets can step outside
/// a grid and be rejected by [`crate::Grid::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord2D {
    x: i32,
    y: i32,
}

impl Coord2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The four orthogonal neighbors, in the order +x, +y, -y, -x.
    ///
    /// No bounds checking happens here; callers filter against a grid.
    pub fn neighbors(self) -> [Coord2D; 4] {
        OFFSETS_2D.map(|(dx, dy)| self + Coord2D::new(dx, dy))
    }
}

impl Add for Coord2D {
    type Output = Coord2D;

    fn add(self, rhs: Coord2D) -> Coord2D {
        Coord2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coord2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An immutable point in a 3D lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord3D {
    x: i32,
    y: i32,
    z: i32,
}

impl Coord3D {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// The six face neighbors, in the order +x, -x, +y, -y, +z, -z.
    pub fn neighbors(self) -> [Coord3D; 6] {
        OFFSETS_3D.map(|(dx, dy, dz)| self + Coord3D::new(dx, dy, dz))
    }
}

impl Add for Coord3D {
    type Output = Coord3D;

    fn add(self, rhs: Coord3D) -> Coord3D {
        Coord3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for Coord3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord2d_accessors_and_equality() {
        let coord = Coord2D::new(5, 10);
        assert_eq!(coord.x(), 5);
        assert_eq!(coord.y(), 10);
        assert_eq!(coord, Coord2D::new(5, 10));
        assert_ne!(coord, Coord2D::new(10, 5));
    }

    #[test]
    fn test_coord3d_accessors_and_equality() {
        let coord = Coord3D::new(5, 10, 15);
        assert_eq!(coord.x(), 5);
        assert_eq!(coord.y(), 10);
        assert_eq!(coord.z(), 15);
        assert_eq!(coord, Coord3D::new(5, 10, 15));
        assert_ne!(coord, Coord3D::new(10, 5, 15));
    }

    #[test]
    fn test_sum() {
        assert_eq!(Coord2D::new(10, 5) + Coord2D::new(15, 10), Coord2D::new(25, 15));
        assert_eq!(
            Coord3D::new(10, 5, 12) + Coord3D::new(15, 10, 20),
            Coord3D::new(25, 15, 32)
        );
    }

    #[test]
    fn test_neighbor_order() {
        let c = Coord2D::new(10, 5);
        assert_eq!(
            c.neighbors(),
            [
                Coord2D::new(11, 5),
                Coord2D::new(10, 6),
                Coord2D::new(10, 4),
                Coord2D::new(9, 5),
            ]
        );

        let c = Coord3D::new(10, 5, 12);
        assert_eq!(
            c.neighbors(),
            [
                Coord3D::new(11, 5, 12),
                Coord3D::new(9, 5, 12),
                Coord3D::new(10, 6, 12),
                Coord3D::new(10, 4, 12),
                Coord3D::new(10, 5, 13),
                Coord3D::new(10, 5, 11),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord3D::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }
}
