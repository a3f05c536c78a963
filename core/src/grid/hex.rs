//! Axial coordinates for hexagonal grids.

use std::fmt;
use std::ops::{ Add, Sub, Mul, Neg };

use crate::error::{ Error, Result };
use crate::geo::{ self, Frac1, HexFractional, Rotation };
use crate::search::{ self, Path, Pather };
use super::*;

/// Axial coordinates `(q, r)` of a hexagon, with the implicit third
/// cube coordinate `s = -q - r`.
///
/// The axial pair is the projection of cube coordinates, i.e. of points
/// `(q, r, s)` on the plane `q + r + s = 0`, onto two of the three axes.
/// Since `s` is always derived, every `Hex` satisfies the cube constraint.
///
/// Guide: [Axial Coordinates]
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    /// The origin of the grid.
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Hex {
        Hex { q, r }
    }

    pub const fn origin() -> Hex {
        Self::ORIGIN
    }

    /// The implicit third cube coordinate. It is widened to `i64`, since
    /// `-q - r` need not fit into an `i32`.
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - self.r as i64
    }

    /// The distance to another hexagon, i.e. the minimum number of steps
    /// between adjacent hexagons needed to reach it.
    pub fn distance(&self, other: Hex) -> u64 {
        let dq = self.q as i64 - other.q as i64;
        let dr = self.r as i64 - other.r as i64;
        // |ds| = |dq + dr|
        ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2) as u64
    }

    /// The distance to the origin.
    pub fn length(&self) -> u64 {
        self.distance(Self::ORIGIN)
    }

    /// The adjacent hexagon in the given direction. Integer directions
    /// are taken modulo 6.
    pub fn neighbor<D: Into<Direction>>(&self, d: D) -> Hex {
        *self + d.into().vector()
    }

    /// The adjacent hexagon in the given direction, or `None` at the edge
    /// of the range of `i32` coordinates.
    pub fn checked_neighbor<D: Into<Direction>>(&self, d: D) -> Option<Hex> {
        self.checked_add(d.into().vector())
    }

    /// Component-wise addition, `None` on overflow.
    pub fn checked_add(&self, other: Hex) -> Option<Hex> {
        Some(Hex::new(self.q.checked_add(other.q)?, self.r.checked_add(other.r)?))
    }

    /// All six adjacent hexagons, in direction order.
    pub fn neighbors(&self) -> [Hex; 6] {
        Direction::ALL.map(|d| self.neighbor(d))
    }

    /// The direction in which `other` is adjacent to `self`, if it is.
    pub fn direction_to(&self, other: Hex) -> Option<Direction> {
        Direction::iter().find(|d| self.neighbor(*d) == other)
    }

    /// Rotate around the given center `n` times by 60 degrees.
    pub fn rotate(&self, center: Hex, r: Rotation, n: i32) -> Hex {
        let steps = match r {
            Rotation::CCW => n.rem_euclid(6),
            Rotation::CW  => (-n).rem_euclid(6),
        };
        let mut v = *self - center;
        for _ in 0 .. steps {
            // (q, r, s) -> (-r, -s, -q)
            v = Hex::new(-v.r, v.q + v.r);
        }
        center + v
    }

    /// The exact fractional coordinates of this hexagon.
    pub fn to_fractional(&self) -> HexFractional {
        HexFractional::new(self.q as f64, self.r as f64)
    }

    /// The hexagon at the fraction `t` of the straight line to `other`.
    pub fn lerp(&self, other: Hex, t: Frac1) -> Hex {
        geo::lerp(self.to_fractional(), other.to_fractional(), t.into()).to_hex()
    }

    /// The hexagons along a straight line to another hexagon, including
    /// both endpoints.
    pub fn line_to(&self, other: Hex) -> LineIterator {
        LineIterator {
            distance: self.distance(other),
            start: *self,
            end: other,
            current: 0,
        }
    }

    /// The hexagons within `radius` steps of `self`. A negative radius
    /// yields nothing.
    pub fn area(&self, cancel: &Cancel, radius: i32) -> Area {
        Area::new(*self, radius, cancel.clone())
    }

    /// The hexagons exactly `radius` steps away from `self`, walked
    /// counterclockwise from the eastern corner. A negative radius
    /// yields nothing.
    pub fn ring(&self, cancel: &Cancel, radius: i32) -> Ring {
        self.walk_ring(cancel, Direction::East, radius, Rotation::CCW)
    }

    /// Walk the ring at the given radius, beginning at the corner
    /// `radius` steps away in direction `start` and continuing in
    /// the given rotation.
    pub fn walk_ring(&self, cancel: &Cancel, start: Direction, radius: i32, rot: Rotation) -> Ring {
        Ring::new(*self, start, radius, rot, cancel.clone())
    }

    /// Like `area`, but rejecting a negative radius.
    pub fn try_area(&self, cancel: &Cancel, radius: i32) -> Result<Area> {
        check_radius(radius).map(|r| self.area(cancel, r))
    }

    /// Like `ring`, but rejecting a negative radius.
    pub fn try_ring(&self, cancel: &Cancel, radius: i32) -> Result<Ring> {
        check_radius(radius).map(|r| self.ring(cancel, r))
    }

    /// Find a cheapest path from `self` to `target`, with edge costs
    /// and estimates given by `pather`. See [`search::path_to`].
    ///
    /// [`search::path_to`]: ../search/fn.path_to.html
    pub fn path_to<P: Pather + ?Sized>(&self, target: Hex, pather: &mut P) -> Option<Path> {
        search::path_to(*self, target, pather)
    }
}

fn check_radius(radius: i32) -> Result<i32> {
    if radius < 0 {
        Err(Error::InvalidRadius(radius))
    } else {
        Ok(radius)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

impl Add<Hex> for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub<Hex> for Hex {
    type Output = Hex;

    fn sub(self, other: Hex) -> Hex {
        Hex::new(self.q - other.q, self.r - other.r)
    }
}

impl Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        Hex::new(-self.q, -self.r)
    }
}

impl Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, k: i32) -> Hex {
        Hex::new(self.q * k, self.r * k)
    }
}

impl From<Direction> for Hex {
    fn from(d: Direction) -> Hex {
        d.vector()
    }
}

const LINE_NUDGE: HexFractional = HexFractional::new(1e-6, 2e-6);

/// Iterator over the hexagons on a straight line.
#[derive(Clone, Debug)]
pub struct LineIterator {
    distance: u64,
    current: u64,
    start: Hex,
    end: Hex,
}

impl Iterator for LineIterator {
    type Item = Hex;

    fn next(&mut self) -> Option<Hex> {
        if self.current > self.distance {
            return None
        }
        let frac = Frac1::new(self.current as f64, self.distance as f64)
            .unwrap_or_else(Frac1::zero);
        self.current += 1;
        // Nudge both ends off the hexagon edges so that rounding
        // never lands on a tie.
        let a = self.start.to_fractional() + LINE_NUDGE;
        let b = self.end.to_fractional() + LINE_NUDGE;
        Some(geo::lerp(a, b, frac.into()).to_hex())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.distance + 1).saturating_sub(self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineIterator {}
