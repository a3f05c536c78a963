//! Directions between adjacent hexagons.
//!
//! The six directions are indexed `0..6` in counterclockwise order (with the
//! cartesian `y` axis pointing up), starting east. Direction `d` and
//! direction `d + 3` are exact opposites.

use either::Either;
use num_traits::cast::FromPrimitive;

use crate::geo::Rotation;
use super::Hex;

/// Axial displacements `[q, r]` to the adjacent hexagon in each direction.
const DIR_VECTORS: [[i32; 2]; 6] =
    [ [ 1, 0], [ 0, 1], [-1, 1]
    , [-1, 0], [ 0,-1], [ 1,-1]
    ];

/// Directions for adjacent neighbours.
#[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
#[derive(FromPrimitive, Debug)]
pub enum Direction {
    East      = 0,
    NorthEast = 1,
    NorthWest = 2,
    West      = 3,
    SouthWest = 4,
    SouthEast = 5
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 6] =
        [ Direction::East, Direction::NorthEast, Direction::NorthWest
        , Direction::West, Direction::SouthWest, Direction::SouthEast
        ];

    /// The direction for an arbitrary index, taken modulo 6.
    /// Negative indices wrap, i.e. `-1` is `SouthEast`.
    pub fn from_index(i: i32) -> Direction {
        // rem_euclid keeps the index in 0..6.
        Direction::from_i32(i.rem_euclid(6)).unwrap_or(Direction::East)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Iterate over all directions in index order.
    pub fn iter() -> impl DoubleEndedIterator<Item=Direction> + Clone {
        Self::ALL.into_iter()
    }

    /// The unit step towards the adjacent hexagon in this direction.
    pub fn vector(self) -> Hex {
        let [q, r] = DIR_VECTORS[self.index()];
        Hex::new(q, r)
    }

    pub fn opposite(self) -> Direction {
        Self::from_index(self as i32 + 3)
    }

    /// Rotate the direction `n` times by 60 degrees.
    pub fn rotate(self, r: Rotation, n: i32) -> Direction {
        match r {
            Rotation::CCW => Self::from_index(self as i32 + n.rem_euclid(6)),
            Rotation::CW  => Self::from_index(self as i32 - n.rem_euclid(6)),
        }
    }

    /// The directions of the six sides walked when circling a ring
    /// that starts at the corner in this direction, in the order
    /// they are walked for the given rotation.
    pub fn walk(self, r: Rotation) -> impl Iterator<Item=Direction> {
        let dirs = Self::iter();
        match r {
            Rotation::CCW => Either::Left(
                dirs.cycle().skip((self.index() + 2) % 6).take(6)
            ),
            Rotation::CW => Either::Right(
                dirs.rev().cycle().skip(5 - (self.index() + 4) % 6).take(6)
            )
        }
    }
}

impl From<i32> for Direction {
    fn from(i: i32) -> Direction {
        Direction::from_index(i)
    }
}

/// The unit step vector for the direction index `d mod 6`.
pub fn direction(d: i32) -> Hex {
    Direction::from_index(d).vector()
}
