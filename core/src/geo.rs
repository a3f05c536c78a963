//! Continuous geometry on the hexagonal lattice.
//!
//! Fractional hex coordinates and their conversion to and from 2d
//! cartesian space, as used when turning discrete hexagons into positions
//! for drawing.
pub mod curve;

use nalgebra::{ Point2, Rotation2, Vector2 };
use num_traits::bounds::Bounded;

use std::ops::{ Add, Sub, Mul, Neg };

use crate::grid::Hex;

/// The angle (in radians) between two adjacent directions on the
/// lattice, i.e. 60 degrees in radians.
pub const ANGLE_RADIANS: f64 = std::f64::consts::FRAC_PI_3;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Tolerance of `HexFractional::almost_equals`.
const EPSILON: f64 = 1e-10;

/// The sense of a rotation by multiples of 60 degrees, with the
/// cartesian `y` axis pointing up.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Rotation {
    CW,
    CCW,
}

/// A fraction in the unit interval `[0,1]`.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Frac1(f64);

impl Frac1 {
    /// Create a new fraction in the unit interval [0,1]. `None` if the
    /// result would lie outside of it or the denominator is zero.
    pub fn new(numer: f64, denom: f64) -> Option<Frac1> {
        if denom == 0. || numer > denom || numer < 0. {
            return None
        }
        Some(Frac1(numer / denom))
    }

    /// Clamp an arbitrary value into the unit interval.
    pub fn clamp(f: f64) -> Frac1 {
        if f.is_nan() {
            return Frac1::zero()
        }
        Frac1(f.max(0.).min(1.))
    }

    pub fn zero() -> Frac1 {
        Frac1::min_value()
    }
}

impl Bounded for Frac1 {
    fn min_value() -> Frac1 {
        Frac1(0.)
    }
    fn max_value() -> Frac1 {
        Frac1(1.)
    }
}

impl From<Frac1> for f64 {
    fn from(Frac1(f): Frac1) -> f64 { f }
}

/// Fractional cube coordinates `(q, r)` with the implicit third
/// coordinate `s = -q - r`. Every `Hex` has an exact fractional
/// counterpart, and every fractional coordinate rounds to a nearest `Hex`.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct HexFractional {
    pub q: f64,
    pub r: f64,
}

impl HexFractional {
    pub const fn new(q: f64, r: f64) -> HexFractional {
        HexFractional { q, r }
    }

    pub fn s(&self) -> f64 {
        -self.q - self.r
    }

    /// Round to the nearest hexagon.
    ///
    /// Each cube coordinate is rounded independently, after which the one
    /// with the largest rounding error is recomputed from the other two,
    /// restoring `q + r + s = 0`.
    pub fn to_hex(&self) -> Hex {
        let (q, r, s) = (self.q, self.r, self.s());
        let (rq, rr, rs) = (q.round(), r.round(), s.round());
        let (dq, dr, ds) = ((q - rq).abs(), (r - rr).abs(), (s - rs).abs());
        if dq > dr && dq > ds {
            Hex::new((-rr - rs) as i32, rr as i32)
        }
        else if dr > ds {
            Hex::new(rq as i32, (-rq - rs) as i32)
        }
        else {
            Hex::new(rq as i32, rr as i32)
        }
    }

    /// Whether two coordinates are equal up to floating point noise.
    pub fn almost_equals(&self, other: HexFractional) -> bool {
        close_enough(self.q, other.q) && close_enough(self.r, other.r)
    }

    /// The euclidean distance to the origin, in units of the distance
    /// between adjacent hexagon centers.
    pub fn length(&self) -> f64 {
        (self.q * self.q + self.r * self.r + self.q * self.r).sqrt()
    }

    /// The euclidean distance to another coordinate.
    pub fn distance(&self, other: HexFractional) -> f64 {
        (*self - other).length()
    }

    /// The vector of length 1 pointing in the same direction, or the
    /// zero vector for the zero vector.
    pub fn normalize(&self) -> HexFractional {
        let len = self.length();
        if len == 0. {
            return *self
        }
        *self * (1. / len)
    }

    pub fn dot(&self, other: HexFractional) -> f64 {
        let a = self.to_cartesian().coords;
        let b = other.to_cartesian().coords;
        a.dot(&b) / 3.
    }

    /// The projection onto `x`, i.e. the component parallel to `x`. Zero
    /// if `x` is the zero vector.
    pub fn project_on(&self, x: HexFractional) -> HexFractional {
        let xx = x.dot(x);
        if xx == 0. {
            return HexFractional::default()
        }
        x * (self.dot(x) / xx)
    }

    /// The position in cartesian space, with adjacent hexagon centers
    /// `sqrt(3)` apart and the `q` axis along `x`.
    pub fn to_cartesian(&self) -> Point2<f64> {
        Point2::new(SQRT_3 * self.q + SQRT_3 * self.r / 2., 1.5 * self.r)
    }

    pub fn from_cartesian(p: Point2<f64>) -> HexFractional {
        HexFractional::new(p.x * SQRT_3 / 3. - p.y / 3., 2. / 3. * p.y)
    }

    /// Rotate counterclockwise around `center` by the given angle.
    pub fn rotate(&self, center: HexFractional, radians: f64) -> HexFractional {
        let v: Vector2<f64> = (*self - center).to_cartesian().coords;
        let rotated = Rotation2::new(radians) * v;
        Self::from_cartesian(Point2::from(rotated)) + center
    }
}

impl From<Hex> for HexFractional {
    fn from(h: Hex) -> HexFractional {
        h.to_fractional()
    }
}

impl Add<HexFractional> for HexFractional {
    type Output = HexFractional;

    fn add(self, other: HexFractional) -> HexFractional {
        HexFractional::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub<HexFractional> for HexFractional {
    type Output = HexFractional;

    fn sub(self, other: HexFractional) -> HexFractional {
        HexFractional::new(self.q - other.q, self.r - other.r)
    }
}

impl Neg for HexFractional {
    type Output = HexFractional;

    fn neg(self) -> HexFractional {
        HexFractional::new(-self.q, -self.r)
    }
}

impl Mul<f64> for HexFractional {
    type Output = HexFractional;

    fn mul(self, k: f64) -> HexFractional {
        HexFractional::new(self.q * k, self.r * k)
    }
}

/// Linear interpolation.
pub fn lerp(a: HexFractional, b: HexFractional, t: f64) -> HexFractional {
    a + (b - a) * t
}

fn close_enough(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < EPSILON
}
