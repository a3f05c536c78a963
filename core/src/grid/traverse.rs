//! Lazy enumeration of rings and areas of hexagons.
//!
//! Both [`Ring`] and [`Area`] compute one hexagon per call to `next`, so
//! nothing is buffered and nothing runs in the background. They observe a
//! shared [`Cancel`] token before producing each hexagon: once the token is
//! cancelled, possibly from another thread, the iterator ends and stays
//! ended.
//!
//! [`Ring`]: struct.Ring.html
//! [`Area`]: struct.Area.html
//! [`Cancel`]: struct.Cancel.html

use log::{ debug, error };

use std::sync::Arc;
use std::sync::atomic::{ AtomicBool, Ordering };

use crate::error::Error;
use crate::geo::Rotation;
use super::*;

/// A cancellation token shared between the consumer of a traversal and
/// whoever decides to stop it.
#[derive(Clone, Debug, Default)]
pub struct Cancel(Arc<AtomicBool>);

impl Cancel {
    pub fn new() -> Cancel {
        Cancel::default()
    }

    /// Signal cancellation to every iterator holding a clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// The number of hexagons in the ring of a given radius.
pub fn num_in_ring(radius: i32) -> usize {
    match radius {
        r if r < 0 => 0,
        0          => 1,
        r          => 6 * r as usize,
    }
}

/// The number of hexagons within a given radius.
pub fn num_in_area(radius: i32) -> usize {
    if radius < 0 {
        return 0
    }
    let r = radius as usize;
    3 * r * (r + 1) + 1
}

/// Iterator over the ring of hexagons at a fixed distance from a center.
///
/// The walk begins at the corner `radius` steps away from the center in
/// the start direction and follows the six sides of the ring in the
/// chosen rotation, each side being `radius` steps long. A walk that
/// would leave the range of `i32` coordinates ends at that edge.
#[derive(Clone, Debug)]
pub struct Ring {
    center: Hex,
    radius: i32,
    /// `None` once the walk has run off the lattice.
    pos: Option<Hex>,
    sides: [Direction; 6],
    side: usize,
    side_steps: i32,
    done: bool,
    fault: Option<Error>,
    cancel: Cancel,
}

impl Ring {
    pub(crate) fn new(center: Hex, start: Direction, radius: i32, rot: Rotation, cancel: Cancel) -> Ring {
        let mut sides = [start; 6];
        for (side, dir) in sides.iter_mut().zip(start.walk(rot)) {
            *side = dir;
        }
        let pos = center.checked_add(start.vector() * radius.max(0));
        Ring {
            center,
            radius,
            pos,
            sides,
            side: 0,
            side_steps: 0,
            done: radius < 0,
            fault: None,
            cancel,
        }
    }

    pub fn center(&self) -> Hex {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The internal error that ended the walk prematurely, if any.
    /// Cancellation is not a fault.
    pub fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else if self.radius == 0 {
            1
        } else {
            (6 - self.side) * self.radius as usize - self.side_steps as usize
        }
    }
}

impl Iterator for Ring {
    type Item = Hex;

    fn next(&mut self) -> Option<Hex> {
        if self.done || self.cancel.is_cancelled() {
            self.done = true;
            return None
        }
        if self.radius == 0 {
            self.done = true;
            return Some(self.center)
        }
        if self.side >= self.sides.len() {
            self.done = true;
            return None
        }
        let pos = match self.pos {
            Some(pos) => pos,
            None => {
                debug!("Ring walk around {} at radius {} ran off the lattice", self.center, self.radius);
                self.done = true;
                return None
            }
        };
        if pos.distance(self.center) != self.radius as u64 {
            error!("Ring walk around {} left radius {} at {}", self.center, self.radius, pos);
            self.fault = Some(Error::OffRing { hex: pos, center: self.center, radius: self.radius });
            self.done = true;
            return None
        }
        self.pos = pos.checked_neighbor(self.sides[self.side]);
        self.side_steps += 1;
        if self.side_steps == self.radius {
            self.side += 1;
            self.side_steps = 0;
        }
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Cancellation may end the walk early.
        (0, Some(self.remaining()))
    }
}

impl std::iter::FusedIterator for Ring {}

/// Iterator over all hexagons within a given distance from a center,
/// emitted as the center followed by the rings of radius `1 ..= radius`.
#[derive(Clone, Debug)]
pub struct Area {
    center: Hex,
    radius: i32,
    ring: Ring,
    cancel: Cancel,
}

impl Area {
    pub(crate) fn new(center: Hex, radius: i32, cancel: Cancel) -> Area {
        let mut ring = Ring::new(center, Direction::East, 0, Rotation::CCW, cancel.clone());
        ring.done = radius < 0;
        Area { center, radius, ring, cancel }
    }

    pub fn center(&self) -> Hex {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// The internal error that ended the traversal prematurely, if any.
    pub fn fault(&self) -> Option<&Error> {
        self.ring.fault()
    }
}

impl Iterator for Area {
    type Item = Hex;

    fn next(&mut self) -> Option<Hex> {
        loop {
            if let Some(h) = self.ring.next() {
                return Some(h)
            }
            if self.ring.fault.is_some()
                || self.cancel.is_cancelled()
                || self.ring.radius >= self.radius
            {
                return None
            }
            let radius = self.ring.radius + 1;
            self.ring = Ring::new(self.center, Direction::East, radius, Rotation::CCW, self.cancel.clone());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upcoming = if self.ring.fault.is_some() {
            0
        } else {
            num_in_area(self.radius).saturating_sub(num_in_area(self.ring.radius))
        };
        (0, Some(self.ring.remaining() + upcoming))
    }
}

impl std::iter::FusedIterator for Area {}
