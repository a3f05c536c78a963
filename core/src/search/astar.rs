
use log::{ debug, trace, warn };

use std::cmp::Ordering;
use std::collections::{ BinaryHeap, HashMap, HashSet };

use crate::grid::{ Direction, Hex };

use super::{ Pather, SearchOptions, Tree };

/// A node in the "open" list of the A* algorithm to prioritise the search.
///
/// Nodes are ordered by estimated total cost. Ties go to the node with
/// the smaller estimate of the remaining cost, i.e. the one deeper into
/// the search, and then to the node that was discovered first.
struct Open {
    coords: Hex,
    cost: u64,
    estimate: u64,
    priority: u64,
    seq: u64,
}

impl Open {
    fn key(&self) -> (u64, u64, u64) {
        (self.priority, self.estimate, self.seq)
    }
}

impl PartialEq for Open {
    fn eq(&self, other: &Open) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Open) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Open) -> Ordering {
        // Lower keys are considered "greater" for the binary heap.
        other.key().cmp(&self.key())
    }
}

/// Beginning at the given start coordinates, perform a cost-aware search
/// across the lattice, subject to the bounds of the given options,
/// returning the resulting search tree from which paths may be extracted.
///
/// The search stops when any of the following conditions is met:
///
///   * Goal coordinates are given and settled.
///   * The search space has been exhaustively searched.
///
/// Without a goal, the search explores the whole search space, which is
/// only possible if the options bound it. An unbounded search without a
/// goal returns a tree containing only the start.
///
/// Hexagons are expanded in direction order, and an edge replaces the
/// known path to a hexagon only if it is strictly cheaper, so for a
/// deterministic `pather` the resulting tree is deterministic as well.
pub fn tree<P: Pather + ?Sized>(
    start: Hex,
    goal: Option<Hex>,
    pather: &mut P,
    opts: &SearchOptions
) -> Tree {
    let mut parents = HashMap::new();
    let mut costs   = HashMap::new();
    let mut settled = HashSet::new();
    let mut open    = BinaryHeap::new();
    let mut seq     = 0;
    costs.insert(start, 0);

    if goal.is_none() && !opts.is_bounded() {
        warn!("Refusing unbounded search from {} without a goal", start);
        settled.insert(start);
        return Tree { root: start, parents, costs, settled }
    }
    if let Some(g) = goal {
        if cfg!(debug_assertions) && pather.estimated_cost(g, g) != 0 {
            warn!("Estimated cost from {} to itself is not zero", g);
        }
    }

    let estimate = goal.map_or(0, |g| pather.estimated_cost(start, g));
    open.push(Open { coords: start, cost: 0, estimate, priority: estimate, seq });
    debug!("Searching from {} to {:?} within {:?}", start, goal, opts);

    while let Some(parent) = open.pop() {
        let pc = parent.coords;
        if settled.contains(&pc) {
            // Superseded by a cheaper entry.
            continue
        }
        settled.insert(pc);
        if goal == Some(pc) {
            debug!("Reached {} at cost {} after settling {} hexes", pc, parent.cost, settled.len());
            return Tree { root: start, parents, costs, settled }
        }
        trace!("Expanding {} at cost {}", pc, parent.cost);
        for dir in Direction::iter() {
            let child = match pc.checked_neighbor(dir) {
                Some(c) => c,
                // Off the edge of the lattice.
                None => continue
            };
            if settled.contains(&child) {
                continue
            }
            if opts.max_distance.map_or(false, |d| start.distance(child) > d) {
                continue
            }
            let new_cost = parent.cost.saturating_add(pather.cost(pc, dir));
            if opts.max_cost.map_or(false, |c| new_cost > c) {
                continue
            }
            if costs.get(&child).map_or(false, |old| new_cost >= *old) {
                continue
            }
            parents.insert(child, pc);
            costs.insert(child, new_cost);
            let estimate = goal.map_or(0, |g| pather.estimated_cost(child, g));
            seq += 1;
            open.push(Open {
                coords: child,
                cost: new_cost,
                estimate,
                priority: new_cost.saturating_add(estimate),
                seq,
            });
        }
    }

    debug!("Search from {} exhausted after settling {} hexes", start, settled.len());
    Tree { root: start, parents, costs, settled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ path_to, path_to_within, FnPather, Uniform };
    use crate::grid::Cancel;
    use quickcheck::*;

    fn zero_estimate() -> FnPather<impl FnMut(Hex, Direction) -> u64, impl FnMut(Hex, Hex) -> u64> {
        FnPather::new(|_, _| 1, |_, _| 0)
    }

    #[test]
    fn test_scenario_two_steps() {
        let goal = Hex::new(2, -1);
        let path = Hex::ORIGIN.path_to(goal, &mut Uniform).unwrap();
        assert_eq!(path.cost(), 2);
        assert_eq!(path.len(), 3);
        assert_eq!(path.hexes()[0], Hex::ORIGIN);
        assert_eq!(path.hexes()[2], goal);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // Two cheapest paths from the origin to (1,1): via (1,0) or (0,1).
        let goal = Hex::new(1, 1);
        let first = path_to(Hex::ORIGIN, goal, &mut Uniform).unwrap();
        for _ in 0 .. 10 {
            assert_eq!(path_to(Hex::ORIGIN, goal, &mut Uniform).as_ref(), Some(&first));
        }
        // East is expanded first and improvements must be strictly cheaper.
        assert_eq!(first.hexes(), &[Hex::ORIGIN, Hex::new(1, 0), goal]);
    }

    #[test]
    fn test_bounded_unreachable() {
        // A closed wall around the origin at radius 3.
        let cancel = Cancel::new();
        let wall = Hex::ORIGIN.ring(&cancel, 3).collect::<HashSet<_>>();
        let mut pather = FnPather::new(
            |h: Hex, d| if wall.contains(&h.neighbor(d)) { 900_000 } else { 1 },
            |a: Hex, b| a.distance(b));
        let opts = SearchOptions::default().with_max_cost(1_000);
        let goal = Hex::new(6, -2);
        assert!(path_to_within(Hex::ORIGIN, goal, &mut pather, &opts).is_none());
        let tree = tree(Hex::ORIGIN, Some(goal), &mut pather, &opts);
        assert_eq!(tree.num_settled(), Hex::ORIGIN.area(&cancel, 2).count());
        // Without the bound the wall is crossed at its price.
        let path = path_to(Hex::ORIGIN, goal, &mut pather).unwrap();
        assert_eq!(path.cost(), 900_000 + 5);
    }

    #[test]
    fn test_max_distance() {
        let opts = SearchOptions::default().with_max_distance(3);
        assert!(path_to_within(Hex::ORIGIN, Hex::new(4, 0), &mut Uniform, &opts).is_none());
        let path = path_to_within(Hex::ORIGIN, Hex::new(3, 0), &mut Uniform, &opts).unwrap();
        assert_eq!(path.cost(), 3);
    }

    #[test]
    fn test_range_tree() {
        let opts = SearchOptions::default().with_max_cost(2);
        let tree = tree(Hex::new(5, 5), None, &mut Uniform, &opts);
        assert_eq!(tree.num_settled(), 19);
        assert!(tree.settled().all(|h| h.distance(Hex::new(5, 5)) <= 2));
        assert_eq!(tree.cost(Hex::new(7, 4)), Some(2));
    }

    #[test]
    fn test_unbounded_tree_without_goal() {
        let tree = tree(Hex::ORIGIN, None, &mut Uniform, &SearchOptions::default());
        assert_eq!(tree.num_settled(), 1);
        assert_eq!(tree.path(Hex::ORIGIN).map(|p| p.cost()), Some(0));
    }

    #[test]
    fn test_saturating_costs() {
        let mut pather = FnPather::new(|_, _| u64::MAX, |_, _| 0);
        let path = path_to(Hex::ORIGIN, Hex::new(-2, 0), &mut pather).unwrap();
        assert_eq!(path.cost(), u64::MAX);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_zero_cost_edges() {
        let mut pather = FnPather::new(|_, _| 0, |_, _| 0);
        let path = path_to(Hex::ORIGIN, Hex::new(0, 4), &mut pather).unwrap();
        assert_eq!(path.cost(), 0);
        assert!(path.hexes().windows(2).all(|w| w[0].distance(w[1]) == 1));
    }

    #[test]
    fn test_lattice_edge() {
        let (min, max) = (i32::MIN, i32::MAX);
        let path = Hex::new(max, 0).path_to(Hex::new(max - 1, 0), &mut Uniform).unwrap();
        assert_eq!(path.hexes(), &[Hex::new(max, 0), Hex::new(max - 1, 0)]);

        let (corner, goal) = (Hex::new(min, max), Hex::new(min + 2, max - 1));
        let path = path_to(corner, goal, &mut Uniform).unwrap();
        assert_eq!(path.cost(), 2);
        assert_eq!(path.goal(), goal);

        // Only the hexes (max - a, max - b) with a + b <= 3 are representable.
        let opts = SearchOptions::default().with_max_cost(3);
        let tree = tree(Hex::new(max, max), None, &mut Uniform, &opts);
        assert_eq!(tree.num_settled(), 10);
        assert_eq!(tree.cost(Hex::new(max - 2, max - 1)), Some(3));
    }

    #[test]
    fn prop_uniform_path() {
        fn prop(q: i8, r: i8, guided: bool) -> bool {
            let goal = Hex::new(q as i32 / 4, r as i32 / 4);
            let path = if guided {
                path_to(Hex::ORIGIN, goal, &mut Uniform)
            } else {
                path_to(Hex::ORIGIN, goal, &mut zero_estimate())
            };
            match path {
                None => false,
                Some(p) => {
                    let hs = p.hexes();
                    let unique = hs.iter().collect::<HashSet<_>>();
                    p.cost() == Hex::ORIGIN.distance(goal)
                        && p.len() as u64 == p.cost() + 1
                        && hs[0] == Hex::ORIGIN
                        && hs[hs.len() - 1] == goal
                        && unique.len() == hs.len()
                        && hs.windows(2).all(|w| w[0].direction_to(w[1]).is_some())
                }
            }
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }
}
