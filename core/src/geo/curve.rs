//! Curves through fractional hex coordinates.
//!
//! A path of hexagons is drawn by sampling curve segments between the
//! hexagon centers.

use super::*;

/// A point sampled from a curve.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Sample {
    pub position: HexFractional,
    /// Unit tangent in the direction of travel.
    pub tangent: HexFractional,
    pub curvature: HexFractional,
}

/// A continuous curve segment.
pub trait CurveSegment {
    /// Sample the curve at `t`, where `t = 0` is the start of the
    /// segment and `t = 1` its end.
    fn sample(&self, t: Frac1) -> Sample;

    /// The (euclidean) length of the curve.
    fn length(&self) -> f64;
}

/// A straight line segment.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct LineSegment {
    start: HexFractional,
    end: HexFractional,
    tangent: HexFractional,
}

impl LineSegment {
    pub fn new(start: HexFractional, end: HexFractional) -> LineSegment {
        LineSegment { start, end, tangent: (end - start).normalize() }
    }

    /// The segment between the centers of two hexagons.
    pub fn between(a: Hex, b: Hex) -> LineSegment {
        Self::new(a.to_fractional(), b.to_fractional())
    }

    /// The segment from `start` to `end`, provided it leaves `start` in
    /// the direction of `tangent`. Otherwise the two points are joined by
    /// an arc, which is not a line.
    pub fn through(start: HexFractional, tangent: HexFractional, end: HexFractional) -> Option<LineSegment> {
        let cos = (end - start).normalize().dot(tangent.normalize());
        if close_enough(cos, 1.) {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl CurveSegment for LineSegment {
    fn sample(&self, t: Frac1) -> Sample {
        Sample {
            position: lerp(self.start, self.end, t.into()),
            tangent: self.tangent,
            curvature: HexFractional::default(),
        }
    }

    fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Consecutive curve segments sampled as a single curve, with `t`
/// distributed over the segments in proportion to their lengths.
pub struct Joined {
    segments: Vec<Box<dyn CurveSegment>>,
    length: f64,
}

/// Join curve segments into one. A single segment is returned unwrapped.
pub fn join_segments(mut segments: Vec<Box<dyn CurveSegment>>) -> Box<dyn CurveSegment> {
    if segments.len() == 1 {
        if let Some(s) = segments.pop() {
            return s
        }
    }
    let length = segments.iter().map(|s| s.length()).sum();
    Box::new(Joined { segments, length })
}

impl CurveSegment for Joined {
    fn sample(&self, t: Frac1) -> Sample {
        let target = f64::from(t) * self.length;
        let last = self.segments.len().saturating_sub(1);
        let mut start = 0.;
        for (i, seg) in self.segments.iter().enumerate() {
            let len = seg.length();
            // Rounding may leave `target` just past the sum at t = 1.
            if target <= start + len || i == last {
                let local = if len > 0. { (target - start) / len } else { 0. };
                return seg.sample(Frac1::clamp(local))
            }
            start += len;
        }
        Sample::default()
    }

    fn length(&self) -> f64 {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: f64, d: f64) -> Frac1 {
        Frac1::new(n, d).unwrap()
    }

    #[test]
    fn test_line_segment() {
        let line = LineSegment::between(Hex::ORIGIN, Hex::new(2, 0));
        assert_eq!(line.length(), 2.);
        let mid = line.sample(Frac1::clamp(0.5));
        assert!(mid.position.almost_equals(HexFractional::new(1., 0.)));
        assert!(mid.tangent.almost_equals(HexFractional::new(1., 0.)));
        assert_eq!(mid.curvature, HexFractional::default());
        assert_eq!(line.sample(Frac1::max_value()).position.to_hex(), Hex::new(2, 0));
    }

    #[test]
    fn test_degenerate_line_segment() {
        let line = LineSegment::between(Hex::new(1, 1), Hex::new(1, 1));
        assert_eq!(line.length(), 0.);
        assert_eq!(line.sample(Frac1::zero()).tangent, HexFractional::default());
    }

    #[test]
    fn test_line_through() {
        let (a, b) = (HexFractional::new(0., 0.), HexFractional::new(3., -1.));
        let line = LineSegment::through(a, (b - a) * 0.2, b).unwrap();
        assert_eq!(line, LineSegment::new(a, b));
        assert!(LineSegment::through(a, HexFractional::new(0., 1.), b).is_none());
        assert!(LineSegment::through(a, a - b, b).is_none());
    }

    #[test]
    fn test_joined_samples_by_length() {
        let joined = join_segments(vec![
            Box::new(LineSegment::between(Hex::ORIGIN, Hex::new(2, 0))),
            Box::new(LineSegment::between(Hex::new(2, 0), Hex::new(2, 1))),
        ]);
        assert_eq!(joined.length(), 3.);
        assert!(joined.sample(Frac1::zero()).position.almost_equals(HexFractional::new(0., 0.)));
        assert!(joined.sample(frac(1., 2.)).position.almost_equals(HexFractional::new(1.5, 0.)));
        // Halfway along the second segment.
        let s = joined.sample(frac(5., 6.));
        assert!(s.position.almost_equals(HexFractional::new(2., 0.5)), "{:?}", s);
        assert!(s.tangent.almost_equals(HexFractional::new(0., 1.)));
        assert!(joined.sample(Frac1::max_value()).position.almost_equals(HexFractional::new(2., 1.)));
    }

    #[test]
    fn test_joined_covers_unit_interval() {
        let cancel = crate::grid::Cancel::new();
        let hexes = Hex::ORIGIN.ring(&cancel, 3).collect::<Vec<_>>();
        let segments = hexes.windows(2)
            .map(|w| Box::new(LineSegment::between(w[0], w[1])) as Box<dyn CurveSegment>)
            .collect();
        let joined = join_segments(segments);
        assert!((joined.length() - 17.).abs() < 1e-9);
        for i in 0 ..= 1000 {
            let p = joined.sample(frac(i as f64, 1000.)).position;
            assert!((p.to_hex().length() as i64 - 3).abs() <= 1, "t = {} at {:?}", i, p);
        }
        assert!(joined.sample(Frac1::max_value()).position.almost_equals(hexes[17].to_fractional()));
    }

    #[test]
    fn test_join_degenerate() {
        let empty = join_segments(Vec::new());
        assert_eq!(empty.length(), 0.);
        assert_eq!(empty.sample(Frac1::max_value()), Sample::default());

        let line = LineSegment::between(Hex::ORIGIN, Hex::new(0, 4));
        let single = join_segments(vec![Box::new(line)]);
        assert_eq!(single.sample(frac(1., 4.)), line.sample(frac(1., 4.)));

        let point = LineSegment::between(Hex::new(1, 1), Hex::new(1, 1));
        let joined = join_segments(vec![Box::new(point), Box::new(point)]);
        assert_eq!(joined.sample(frac(1., 2.)).position, HexFractional::new(1., 1.));
    }
}
