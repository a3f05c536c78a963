//! Cheapest-path search on the (unbounded) hexagonal lattice.
pub mod astar;

use crate::grid::{ Direction, Hex };

use std::collections::{ HashMap, HashSet };

/// The costs of moving across the lattice, as seen by a search.
///
/// Costs are non-negative by construction. For searches to return
/// cheapest paths, `estimated_cost` must be admissible, i.e. never exceed
/// the true cost of the cheapest path between its arguments. In particular
/// it should be `0` when both arguments are equal. Neither property is
/// checked by the search; an estimate of `0` everywhere is always
/// admissible and turns the search into Dijkstra's algorithm.
pub trait Pather {
    /// The cost of the edge from `from` to its neighbour in direction `dir`.
    fn cost(&mut self, from: Hex, dir: Direction) -> u64;

    /// An estimate of the cost of the cheapest path from `from` to `to`.
    fn estimated_cost(&mut self, from: Hex, to: Hex) -> u64;
}

impl<P: Pather + ?Sized> Pather for &mut P {
    fn cost(&mut self, from: Hex, dir: Direction) -> u64 {
        (**self).cost(from, dir)
    }
    fn estimated_cost(&mut self, from: Hex, to: Hex) -> u64 {
        (**self).estimated_cost(from, to)
    }
}

/// Every edge costs 1 and the estimate is the lattice distance, which is
/// exact in the absence of other costs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uniform;

impl Pather for Uniform {
    fn cost(&mut self, _from: Hex, _dir: Direction) -> u64 {
        1
    }
    fn estimated_cost(&mut self, from: Hex, to: Hex) -> u64 {
        from.distance(to)
    }
}

/// A `Pather` made from a cost function and an estimate function.
pub struct FnPather<C, E> {
    cost: C,
    estimate: E,
}

impl<C, E> FnPather<C, E>
where C: FnMut(Hex, Direction) -> u64,
      E: FnMut(Hex, Hex) -> u64
{
    pub fn new(cost: C, estimate: E) -> FnPather<C, E> {
        FnPather { cost, estimate }
    }
}

impl<C, E> Pather for FnPather<C, E>
where C: FnMut(Hex, Direction) -> u64,
      E: FnMut(Hex, Hex) -> u64
{
    fn cost(&mut self, from: Hex, dir: Direction) -> u64 {
        (self.cost)(from, dir)
    }
    fn estimated_cost(&mut self, from: Hex, to: Hex) -> u64 {
        (self.estimate)(from, to)
    }
}

/// Bounds on the search space.
///
/// The lattice is unbounded, so a search for an unreachable goal only
/// terminates if the reachable region is finite. Setting either bound
/// makes it so: edges leading to a hexagon beyond the bounds are ignored
/// and the search reports no path once everything within is explored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// The maximum total cost of a path.
    pub max_cost: Option<u64>,
    /// The maximum distance of any hexagon on a path from the start.
    pub max_distance: Option<u64>,
}

impl SearchOptions {
    pub fn with_max_cost(self, max_cost: u64) -> SearchOptions {
        SearchOptions { max_cost: Some(max_cost), ..self }
    }

    pub fn with_max_distance(self, max_distance: u64) -> SearchOptions {
        SearchOptions { max_distance: Some(max_distance), ..self }
    }

    /// Whether the search space is finite.
    pub fn is_bounded(&self) -> bool {
        self.max_cost.is_some() || self.max_distance.is_some()
    }
}

/// A path across the lattice, from start to goal (both inclusive),
/// together with its total cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    hexes: Vec<Hex>,
    cost: u64,
}

impl Path {
    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    pub fn into_hexes(self) -> Vec<Hex> {
        self.hexes
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// The number of hexagons on the path, i.e. one more than the
    /// number of steps.
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Paths always contain at least the start.
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    pub fn start(&self) -> Hex {
        self.hexes[0]
    }

    pub fn goal(&self) -> Hex {
        self.hexes[self.hexes.len() - 1]
    }
}

impl IntoIterator for Path {
    type Item = Hex;
    type IntoIter = std::vec::IntoIter<Hex>;

    fn into_iter(self) -> Self::IntoIter {
        self.hexes.into_iter()
    }
}

/// A tree is constructed as the result of a search. The root of the
/// tree is the start of the search and the paths to the settled
/// hexagons are cheapest paths from the start.
#[derive(Clone, Debug)]
pub struct Tree {
    root: Hex,
    parents: HashMap<Hex, Hex>,
    costs: HashMap<Hex, u64>,
    settled: HashSet<Hex>,
}

impl Tree {
    pub fn root(&self) -> Hex {
        self.root
    }

    /// Whether the cheapest path to the given hexagon is known.
    pub fn is_settled(&self, c: Hex) -> bool {
        self.settled.contains(&c)
    }

    /// The number of settled hexagons.
    pub fn num_settled(&self) -> usize {
        self.settled.len()
    }

    /// The settled hexagons, in no particular order.
    pub fn settled(&self) -> impl Iterator<Item=Hex> + '_ {
        self.settled.iter().copied()
    }

    /// The cost of the cheapest path to a settled hexagon.
    pub fn cost(&self, c: Hex) -> Option<u64> {
        if self.is_settled(c) {
            self.costs.get(&c).copied()
        } else {
            None
        }
    }

    /// Trace the path from the root of the tree to the given goal, which
    /// is only possible if the goal has been settled by the search.
    pub fn path(&self, goal: Hex) -> Option<Path> {
        let cost = self.cost(goal)?;
        let mut hexes = Vec::with_capacity(self.root.distance(goal) as usize + 1);
        let mut current = goal;
        hexes.push(current);
        while current != self.root {
            current = *self.parents.get(&current)?;
            hexes.push(current);
        }
        hexes.reverse();
        Some(Path { hexes, cost })
    }
}

/// Find a cheapest path from `start` to `goal`, where the cost of every
/// step is given by the `pather`, which also guides the search through
/// its estimates. Returns `None` if there is no path.
///
/// The search is unbounded: if `goal` cannot be reached for a finite
/// cost, it does not terminate. See [`path_to_within`] for a bounded
/// search.
///
/// [`path_to_within`]: fn.path_to_within.html
pub fn path_to<P: Pather + ?Sized>(start: Hex, goal: Hex, pather: &mut P) -> Option<Path> {
    path_to_within(start, goal, pather, &SearchOptions::default())
}

/// Like [`path_to`], but restricted to the search space given by the options.
///
/// [`path_to`]: fn.path_to.html
pub fn path_to_within<P: Pather + ?Sized>(
    start: Hex,
    goal: Hex,
    pather: &mut P,
    opts: &SearchOptions
) -> Option<Path> {
    if start == goal {
        return Some(Path { hexes: vec![start], cost: 0 })
    }
    astar::tree(start, Some(goal), pather, opts).path(goal)
}
