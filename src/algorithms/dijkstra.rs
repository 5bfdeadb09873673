// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::data_structures::binary_heap::BinaryHeap;

/// A simple trait encapsulating what other traits are needed
/// for a type to be usable in Dijkstra's Algorithm.
pub trait DijkstraNode: Eq + Hash + Copy {}
impl<T> DijkstraNode for T where T: Eq + Hash + Copy {}

#[derive(Debug)]
pub struct DijkstraSearchResults<T>
where
    T: DijkstraNode,
{
    ops_used: u32,
    cost: f64,
    incomplete: bool,
    path: Vec<T>,
}

impl<T: DijkstraNode> DijkstraSearchResults<T> {
    pub fn ops(&self) -> u32 {
        self.ops_used
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn incomplete(&self) -> bool {
        self.incomplete
    }

    /// A shortest path from the start node to the goal node, including both
    pub fn path(&self) -> &[T] {
        &self.path
    }
}

#[derive(Copy, Clone)]
struct State<T> {
    cost: f64,
    position: T,
}

fn cheapest_first<T>(a: &State<T>, b: &State<T>) -> Ordering {
    a.cost.total_cmp(&b.cost)
}

/// Calculates a shortest path from `start` to `goal` using Dijkstra's Algorithm.
///
/// The algorithm itself doesn't care what type the nodes are, as long as you
/// provide a neighbors function that yields each reachable neighbor of a
/// node along with the (positive) cost of moving there.
///
/// Stops after expanding `max_ops` nodes.
///
/// # Example
/// ```rust
/// use grid_pathfinding::{GridMap, Point, Scale};
/// use grid_pathfinding::algorithms::dijkstra::shortest_path_generic;
/// use grid_pathfinding::utils::{walkable_neighbors, MoveCosts};
///
/// let grid = GridMap::from_ascii(
///     "
///     ...
///     .#.
///     ...
///     ",
/// );
/// let neighbors = walkable_neighbors(&grid, Scale::UNIT, MoveCosts::default());
/// let search_results = shortest_path_generic(Point::new(0, 1), Point::new(2, 1), &neighbors, 2000);
///
/// assert!(!search_results.incomplete());
/// assert!((search_results.cost() - 2.8).abs() < 1e-9);
/// assert_eq!(search_results.path().len(), 3);
/// ```
///
/// Reference: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
pub fn shortest_path_generic<T: DijkstraNode, N, I>(
    start: T,
    goal: T,
    neighbors: N,
    max_ops: u32,
) -> DijkstraSearchResults<T>
where
    N: Fn(T) -> I,
    I: IntoIterator<Item = (T, f64)>,
{
    // This implementation isn't memory-efficient as it may leave duplicate
    // nodes in the queue. Stale entries are skipped when popped.

    let mut ops_used: u32 = 0;
    let mut last_examined_cost = 0.0;

    // dist[node] = current shortest distance from `start` to `node`
    let mut dist: HashMap<T, f64> = HashMap::new();
    let mut parents: HashMap<T, T> = HashMap::new();

    let mut heap = BinaryHeap::new(cheapest_first::<T>);

    // We're at `start`, with a zero cost
    dist.insert(start, 0.0);
    heap.insert(State {
        cost: 0.0,
        position: start,
    });

    // Examine the frontier with lower cost nodes first (min-heap)
    while let Ok(State { cost, position }) = heap.delete_root() {
        // We found the goal state, return the search results
        if position == goal {
            let path_opt = get_path_from_parents(&parents, start, position);
            debug!("dijkstra reached goal with cost {} in {} ops", cost, ops_used);
            return DijkstraSearchResults {
                ops_used,
                cost,
                incomplete: path_opt.is_none(),
                path: path_opt.unwrap_or_default(),
            };
        }

        // Important as we may have already found a better way
        if cost > dist.get(&position).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        // Stop searching if we've run out of remaining ops we're allowed to perform
        if ops_used >= max_ops {
            break;
        }
        ops_used += 1;
        last_examined_cost = cost;

        // For each node we can reach, see if we can find a way with
        // a lower cost going through this node
        for (next_position, move_cost) in neighbors(position) {
            let next_cost = cost + move_cost;
            let current_next_cost = dist.get(&next_position).copied().unwrap_or(f64::INFINITY);

            if next_cost < current_next_cost {
                // Relaxation, we have now found a better way
                heap.insert(State {
                    cost: next_cost,
                    position: next_position,
                });
                dist.insert(next_position, next_cost);
                parents.insert(next_position, position);
            }
        }
    }

    // Goal not reachable
    debug!("dijkstra gave up after {} ops", ops_used);
    DijkstraSearchResults {
        ops_used,
        cost: last_examined_cost,
        incomplete: true,
        path: Vec::new(),
    }
}

fn get_path_from_parents<T: DijkstraNode>(
    parents: &HashMap<T, T>,
    origin: T,
    end: T,
) -> Option<Vec<T>> {
    let mut path = Vec::new();

    let mut current_pos = end;

    path.push(end);

    while current_pos != origin {
        let parent = parents.get(&current_pos)?;
        path.push(*parent);
        current_pos = *parent;
    }

    Some(path.into_iter().rev().collect())
}
