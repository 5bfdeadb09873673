// https://en.wikipedia.org/wiki/A*_search_algorithm

use std::cmp::Ordering;
use std::collections::HashMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;
use crate::common::point::{Point, Scale};
use crate::common::traits::Walkable;
use crate::data_structures::binary_heap::BinaryHeap;
use crate::utils::heuristics::{Heuristic, Manhattan};
use crate::utils::movement_costs::MoveCosts;
use crate::utils::neighbors::grid_neighbors;

/// Settings shared by every search an [AStar] runs.
///
/// Missing fields take their default values when deserializing, so game
/// data files only need to mention what they change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// The movement grid. Raw coordinates are snapped onto it before searching.
    pub scale: Scale,
    /// The cost of one grid cell of movement in each kind of direction.
    pub move_costs: MoveCosts,
    /// The maximum number of nodes to expand before giving up, if any.
    pub max_ops: Option<u32>,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.move_costs.validate()?;
        if self.max_ops == Some(0) {
            return Err(ConfigError::ZeroMaxOps);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scale: Scale::UNIT,
            move_costs: MoveCosts::default(),
            max_ops: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AStarSearchResults {
    ops_used: u32,
    cost: f64,
    incomplete: bool,
    path: Vec<Point>,
    partial_path: Vec<Point>,
}

impl AStarSearchResults {
    fn blocked() -> Self {
        Self {
            ops_used: 0,
            cost: 0.0,
            incomplete: true,
            path: Vec::new(),
            partial_path: Vec::new(),
        }
    }

    /// The number of expand node operations used
    pub fn ops(&self) -> u32 {
        self.ops_used
    }

    /// The movement cost of the result path, or of the partial path if the
    /// search was incomplete
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether the search failed to reach the destination
    pub fn incomplete(&self) -> bool {
        self.incomplete
    }

    /// A lowest-cost path from the source to the destination, excluding the
    /// source. Empty if the search was incomplete.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// When the search was incomplete, the path toward the node that got
    /// closest to the destination. Empty otherwise.
    pub fn partial_path(&self) -> &[Point] {
        &self.partial_path
    }

    pub fn into_path(self) -> Vec<Point> {
        self.path
    }
}

/// Implements the [A* pathfinding algorithm](http://en.wikipedia.org/wiki/A*_search_algorithm)
/// on a 2-dimensional, 8-connected grid.
///
/// Use this to find a path between a source and destination coordinate
/// while avoiding obstacles. The walkability oracle, heuristic and
/// configuration live on this value; everything else is rebuilt by each
/// search, so one instance can serve any number of searches, from any
/// number of threads if the oracle allows it.
///
/// # Example
/// ```rust
/// use grid_pathfinding::{AStar, GridMap, Point};
///
/// let grid = GridMap::from_ascii(
///     "
///     .....
///     ..#..
///     ..#..
///     .....
///     ",
/// );
/// let astar = AStar::new(grid);
///
/// let path = astar.search(0, 1, 4, 1);
/// assert_eq!(path.last(), Some(&Point::new(4, 1)));
/// assert!(!path.contains(&Point::new(2, 1)));
///
/// // A blocked destination is not an error, there's simply no path
/// assert!(astar.search(0, 1, 2, 2).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AStar<W, H = Manhattan> {
    walkable: W,
    heuristic: H,
    config: SearchConfig,
}

impl<W: Walkable> AStar<W, Manhattan> {
    /// Creates a pathfinder over `walkable` with the default configuration
    /// and the Manhattan heuristic.
    pub fn new(walkable: W) -> Self {
        Self {
            walkable,
            heuristic: Manhattan,
            config: SearchConfig::default(),
        }
    }
}

impl<W: Walkable, H: Heuristic> AStar<W, H> {
    /// Replaces the heuristic used to estimate the remaining cost.
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> AStar<W, H2> {
        AStar {
            walkable: self.walkable,
            heuristic,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Result<Self, ConfigError> {
        self.set_config(config)?;
        Ok(self)
    }

    /// Replaces the configuration. On error the previous configuration is kept.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Sets the movement grid. On error the previous scale is kept.
    pub fn set_scale(&mut self, x: i32, y: i32) -> Result<(), ConfigError> {
        self.config.scale = Scale::new(x, y)?;
        Ok(())
    }

    pub fn set_max_ops(&mut self, max_ops: Option<u32>) -> Result<(), ConfigError> {
        if max_ops == Some(0) {
            return Err(ConfigError::ZeroMaxOps);
        }
        self.config.max_ops = max_ops;
        Ok(())
    }

    pub fn scale(&self) -> Scale {
        self.config.scale
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn walkable(&self) -> &W {
        &self.walkable
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Search for an optimal path from `(src_x, src_y)` to `(dest_x, dest_y)`,
    /// avoiding obstacles.
    ///
    /// Both points are snapped onto the movement grid first. The returned
    /// path moves one unit at a time, excludes the source and ends at the
    /// destination. It is empty when the destination is not walkable or
    /// can't be reached.
    pub fn search(&self, src_x: i32, src_y: i32, dest_x: i32, dest_y: i32) -> Vec<Point> {
        self.search_with_results(src_x, src_y, dest_x, dest_y)
            .into_path()
    }

    /// Same as [search](Self::search), also reporting the search effort, the
    /// path cost and a partial path when the destination wasn't reached.
    pub fn search_with_results(
        &self,
        src_x: i32,
        src_y: i32,
        dest_x: i32,
        dest_y: i32,
    ) -> AStarSearchResults {
        let scale = self.config.scale;
        let src = scale.quantize(Point::new(src_x, src_y));
        let dest = scale.quantize(Point::new(dest_x, dest_y));

        if !self.walkable.is_point_walkable(dest) {
            debug!("destination {:?} is not walkable, skipping search", dest);
            return AStarSearchResults::blocked();
        }

        SearchContext::new(self, dest).run(src)
    }
}

/// One grid cell visited during a single search.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    position: Point,
    /// Index of the node this one was reached from
    parent: Option<usize>,
    g: f64,
    h: f64,
    f: f64,
}

/// A heap entry for a node on the open list.
///
/// Entries compare equal by node alone, so a node can be found in the heap
/// after its priority has changed.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    node: usize,
    f: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

// Lowest f first. Ties keep whatever order the heap leaves them in.
fn open_entry_order(a: &OpenEntry, b: &OpenEntry) -> Ordering {
    a.f.total_cmp(&b.f)
}

type OpenHeap = BinaryHeap<OpenEntry, fn(&OpenEntry, &OpenEntry) -> Ordering>;

/// The state of one search. Nodes live in an arena and refer to their
/// parents by index.
struct SearchContext<'a, W, H> {
    walkable: &'a W,
    heuristic: &'a H,
    config: SearchConfig,
    dest: Point,
    nodes: Vec<SearchNode>,
    open_nodes: HashMap<Point, usize>,
    closed_nodes: HashMap<Point, usize>,
    open_heap: OpenHeap,
}

impl<'a, W: Walkable, H: Heuristic> SearchContext<'a, W, H> {
    fn new(astar: &'a AStar<W, H>, dest: Point) -> Self {
        Self {
            walkable: &astar.walkable,
            heuristic: &astar.heuristic,
            config: astar.config,
            dest,
            nodes: Vec::new(),
            open_nodes: HashMap::new(),
            closed_nodes: HashMap::new(),
            open_heap: OpenHeap::new(open_entry_order),
        }
    }

    fn run(mut self, src: Point) -> AStarSearchResults {
        let src_node = self.insert_node(src, None, 0.0);
        let mut closest = src_node;
        let mut ops_used: u32 = 0;

        while let Ok(OpenEntry { node, .. }) = self.open_heap.delete_root() {
            let position = self.nodes[node].position;
            self.open_nodes.remove(&position);
            self.closed_nodes.insert(position, node);

            if position == self.dest {
                let mut path = self.generate_path(node);
                if path.is_empty() {
                    // The source is the destination
                    path.push(position);
                }
                debug!(
                    "found path from {:?} to {:?}: {} steps, cost {}, {} ops",
                    src,
                    self.dest,
                    path.len(),
                    self.nodes[node].g,
                    ops_used
                );
                return AStarSearchResults {
                    ops_used,
                    cost: self.nodes[node].g,
                    incomplete: false,
                    path,
                    partial_path: Vec::new(),
                };
            }

            // Track the most promising node, in case we have to return incomplete
            if self.nodes[node].h < self.nodes[closest].h {
                closest = node;
            }

            if self.config.max_ops.is_some_and(|max| ops_used >= max) {
                debug!("search from {:?} to {:?} ran out of ops", src, self.dest);
                return self.incomplete(closest, ops_used);
            }

            ops_used += 1;
            self.expand(node);
        }

        debug!("no path from {:?} to {:?} after {} ops", src, self.dest, ops_used);
        self.incomplete(closest, ops_used)
    }

    fn incomplete(&self, closest: usize, ops_used: u32) -> AStarSearchResults {
        AStarSearchResults {
            ops_used,
            cost: self.nodes[closest].g,
            incomplete: true,
            path: Vec::new(),
            partial_path: self.generate_path(closest),
        }
    }

    /// Tries each of the 8 neighbors of a node, opening new nodes and
    /// lowering the cost of open ones.
    fn expand(&mut self, parent: usize) {
        let SearchNode { position, g, .. } = self.nodes[parent];
        trace!("expanding {:?} (g = {})", position, g);

        for (neighbor, direction) in grid_neighbors(position, self.config.scale) {
            if self.closed_nodes.contains_key(&neighbor) {
                continue;
            }
            if !self.walkable.is_point_walkable(neighbor) {
                continue;
            }

            let new_g = g + self.config.move_costs.cost(direction);
            match self.open_nodes.get(&neighbor).copied() {
                Some(open) => self.update_open_node(open, parent, new_g),
                None => {
                    self.insert_node(neighbor, Some(parent), new_g);
                }
            }
        }
    }

    /// Re-parents an open node if `new_g` is a cheaper way to reach it, then
    /// moves it up the heap to match its lower priority.
    fn update_open_node(&mut self, open: usize, parent: usize, new_g: f64) {
        let node = &mut self.nodes[open];
        if new_g >= node.g {
            return;
        }

        node.parent = Some(parent);
        node.g = new_g;
        node.f = new_g + node.h;
        let entry = OpenEntry {
            node: open,
            f: node.f,
        };

        if let Some(pos) = self.open_heap.index_of(&entry) {
            if let Some(queued) = self.open_heap.get_mut(pos) {
                *queued = entry;
            }
            self.open_heap.bubble_up(pos);
        }
    }

    /// Adds a node to the arena and the open list, returning its index.
    fn insert_node(&mut self, position: Point, parent: Option<usize>, g: f64) -> usize {
        let h = self
            .heuristic
            .estimate(position, self.dest, self.config.scale);
        let index = self.nodes.len();
        self.nodes.push(SearchNode {
            position,
            parent,
            g,
            h,
            f: g + h,
        });
        self.open_nodes.insert(position, index);
        self.open_heap.insert(OpenEntry {
            node: index,
            f: g + h,
        });
        index
    }

    /// Walks the parent chain back from `node`, emitting every unit step
    /// between grid cells. The source itself is left out.
    fn generate_path(&self, node: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut current = &self.nodes[node];

        while let Some(parent_index) = current.parent {
            let parent = &self.nodes[parent_index];
            let mut step = current.position;
            while let Some(direction) = step.direction_to(parent.position) {
                path.push(step);
                let (dx, dy) = direction.delta();
                step = step.offset(dx, dy);
            }
            current = parent;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::algorithms::dijkstra;
    use crate::common::data::GridMap;
    use crate::utils::heuristics::{Octile, Zero};
    use crate::utils::neighbors::walkable_neighbors;

    // Helper Functions

    fn open_grid(_x: i32, _y: i32) -> bool {
        true
    }

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    // Sums the cost of a unit-step path, checking every step along the way
    fn unit_path_cost<W: Walkable>(walkable: &W, src: Point, path: &[Point]) -> f64 {
        let costs = MoveCosts::default();
        let mut cost = 0.0;
        let mut previous = src;
        for &step in path {
            assert!(walkable.is_point_walkable(step), "{:?} is not walkable", step);
            let direction = previous
                .direction_to(step)
                .expect("path repeats a point");
            assert_eq!(
                (step.x - previous.x).abs().max((step.y - previous.y).abs()),
                1,
                "{:?} -> {:?} is not a unit step",
                previous,
                step
            );
            cost += costs.cost(direction);
            previous = step;
        }
        cost
    }

    fn random_grid(rng: &mut StdRng, width: i32, height: i32, wall_chance: f64) -> GridMap {
        let mut grid = GridMap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(wall_chance) {
                    grid.set_walkable(x, y, false);
                }
            }
        }
        grid
    }

    // Test Cases

    #[test]
    fn blocked_destination_returns_empty_path() {
        let blocked = |x: i32, y: i32| !(x == 3 && y == 3);
        let astar = AStar::new(blocked);

        for (sx, sy) in [(0, 0), (3, 3), (10, -4)] {
            let results = astar.search_with_results(sx, sy, 3, 3);
            assert!(results.path().is_empty());
            assert!(results.incomplete());
            assert_eq!(results.ops(), 0);
        }
    }

    #[test]
    fn source_equal_to_destination() {
        let astar = AStar::new(open_grid);
        let results = astar.search_with_results(4, 4, 4, 4);

        assert_eq!(results.path(), &[Point::new(4, 4)]);
        assert_eq!(results.incomplete(), false);
        assert_eq!(results.ops(), 0);
        assert_eq!(results.cost(), 0.0);
    }

    #[test]
    fn straight_line_path() {
        let astar = AStar::new(open_grid);
        let path = astar.search(0, 0, 5, 0);

        assert_eq!(path, points(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn diagonal_shortcut() {
        let astar = AStar::new(open_grid);
        let results = astar.search_with_results(0, 0, 3, 3);

        assert_eq!(results.path(), points(&[(1, 1), (2, 2), (3, 3)]).as_slice());
        assert!((results.cost() - 4.2).abs() < 1e-9);
    }

    #[test]
    fn routes_around_a_wall() {
        let grid = GridMap::from_ascii(
            "
            .......
            ...#...
            ...#...
            ...#...
            .......
            ",
        );
        let astar = AStar::new(grid.clone());
        let src = Point::new(1, 2);
        let results = astar.search_with_results(src.x, src.y, 5, 2);
        let path = results.path();

        assert_eq!(results.incomplete(), false);
        assert_eq!(path.last(), Some(&Point::new(5, 2)));
        assert!(!path.contains(&Point::new(3, 2)));

        let cost = unit_path_cost(&grid, src, path);
        assert!((cost - results.cost()).abs() < 1e-9);

        let unobstructed = AStar::new(open_grid).search_with_results(1, 2, 5, 2);
        assert!(results.cost() >= unobstructed.cost());
    }

    #[test]
    fn unreachable_destination_exhausts_the_grid() {
        let grid = GridMap::from_ascii(
            "
            .....
            .###.
            .#.#.
            .###.
            .....
            ",
        );
        let astar = AStar::new(grid);
        let results = astar.search_with_results(0, 0, 2, 2);

        assert!(results.path().is_empty());
        assert_eq!(results.incomplete(), true);
        // Every cell of the outer ring is expanded exactly once
        assert_eq!(results.ops(), 16);

        let closest = results.partial_path().last().copied();
        let distance = closest.map(|p| (p.x - 2).abs() + (p.y - 2).abs());
        assert_eq!(distance, Some(2));
    }

    #[test]
    fn equal_f_nodes_are_not_reordered_by_heuristic() {
        let grid = GridMap::from_ascii(
            "
            .....
            .##..
            .....
            ",
        );

        // (1,0) and (0,1) both open with f = 6. The heap expands (1,0) first,
        // then (0,1), whose diagonal toward the bottom row wins from there on
        let results = AStar::new(grid.clone()).search_with_results(0, 0, 4, 2);
        assert_eq!(
            results.path(),
            points(&[(0, 1), (1, 2), (2, 2), (3, 2), (4, 2)]).as_slice()
        );
        assert!((results.cost() - 5.4).abs() < 1e-9);
        assert_eq!(results.ops(), 6);

        // Manhattan overestimates here, the top route is cheaper
        let octile = AStar::new(grid).with_heuristic(Octile::default());
        let optimal = octile.search_with_results(0, 0, 4, 2);
        assert!((optimal.cost() - 4.8).abs() < 1e-9);
    }

    #[test]
    fn search_at_the_edge_of_the_coordinate_range() {
        let astar = AStar::new(open_grid);

        let results = astar.search_with_results(i32::MAX, 0, i32::MAX, 3);
        assert_eq!(
            results.path(),
            points(&[(i32::MAX, 1), (i32::MAX, 2), (i32::MAX, 3)]).as_slice()
        );
        assert!((results.cost() - 3.0).abs() < 1e-9);

        let path = astar.search(i32::MIN, i32::MIN, i32::MIN + 2, i32::MIN);
        assert_eq!(
            path,
            points(&[(i32::MIN + 1, i32::MIN), (i32::MIN + 2, i32::MIN)])
        );
    }

    #[test]
    fn scaled_search_at_the_edge_of_the_coordinate_range() {
        let mut astar = AStar::new(open_grid);
        astar.set_scale(3, 3).unwrap();

        // i32::MIN snaps up to the lowest multiple of 3 that fits
        let low = i32::MIN + 2;
        let path = astar.search(i32::MIN, i32::MIN, i32::MIN + 5, i32::MIN);
        assert_eq!(
            path,
            points(&[(low + 1, low), (low + 2, low), (low + 3, low)])
        );
    }

    #[test]
    fn max_ops_halt() {
        let mut astar = AStar::new(open_grid);

        // Failure case
        astar.set_max_ops(Some(5)).unwrap();
        let results = astar.search_with_results(10, 10, 40, 40);
        assert_eq!(results.incomplete(), true);
        assert_eq!(results.ops(), 5);
        assert!(results.path().is_empty());
        assert_eq!(results.partial_path().len(), 5);
        assert!(results.cost() > 0.0);

        // Success case
        astar.set_max_ops(Some(100)).unwrap();
        let results = astar.search_with_results(10, 10, 40, 40);
        assert_eq!(results.incomplete(), false);
        assert!(results.ops() < 100);
        assert_eq!(results.path().len(), 30);
    }

    #[test]
    fn scaled_search_quantizes_and_steps_by_one() {
        let mut astar = AStar::new(open_grid);
        astar.set_scale(2, 2).unwrap();

        let path = astar.search(1, 1, 9, 5);

        assert_eq!(
            path,
            points(&[
                (1, 1),
                (2, 2),
                (3, 3),
                (4, 4),
                (5, 4),
                (6, 4),
                (7, 4),
                (8, 4)
            ])
        );
    }

    #[test]
    fn scaled_search_only_visits_grid_cells() {
        let visited = std::sync::Mutex::new(Vec::new());
        let walkable = |x: i32, y: i32| {
            visited.lock().unwrap().push(Point::new(x, y));
            true
        };
        let mut astar = AStar::new(walkable);
        astar.set_scale(3, 2).unwrap();

        let path = astar.search(-2, 7, 10, 1);

        assert_eq!(path.last(), Some(&Point::new(9, 0)));
        for p in visited.lock().unwrap().iter() {
            assert_eq!(p.x.rem_euclid(3), 0, "{:?} is off the grid", p);
            assert_eq!(p.y.rem_euclid(2), 0, "{:?} is off the grid", p);
        }
    }

    #[test]
    fn matches_dijkstra_with_admissible_heuristics() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..40 {
            let grid = random_grid(&mut rng, 12, 12, 0.3);
            let cells: Vec<Point> = grid.walkable_points().collect();
            if cells.len() < 2 {
                continue;
            }

            let octile = AStar::new(grid.clone()).with_heuristic(Octile::default());
            let zero = AStar::new(grid.clone()).with_heuristic(Zero);
            let neighbors = walkable_neighbors(&grid, Scale::UNIT, MoveCosts::default());

            for _ in 0..10 {
                let src = cells[rng.random_range(0..cells.len())];
                let dest = cells[rng.random_range(0..cells.len())];

                let expected = dijkstra::shortest_path_generic(src, dest, &neighbors, u32::MAX);

                for results in [
                    octile.search_with_results(src.x, src.y, dest.x, dest.y),
                    zero.search_with_results(src.x, src.y, dest.x, dest.y),
                ] {
                    assert_eq!(results.incomplete(), expected.incomplete());
                    if expected.incomplete() {
                        assert!(results.path().is_empty());
                        continue;
                    }

                    assert!(
                        (results.cost() - expected.cost()).abs() < 1e-6,
                        "{:?} -> {:?}: A* cost {} but shortest is {}",
                        src,
                        dest,
                        results.cost(),
                        expected.cost()
                    );
                    if src != dest {
                        let cost = unit_path_cost(&grid, src, results.path());
                        assert!((cost - results.cost()).abs() < 1e-6);
                    }
                    assert_eq!(results.path().last(), Some(&dest));
                }
            }
        }
    }

    #[test]
    fn manhattan_paths_are_valid_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..30 {
            let grid = random_grid(&mut rng, 15, 10, 0.25);
            let cells: Vec<Point> = grid.walkable_points().collect();
            if cells.len() < 2 {
                continue;
            }
            let astar = AStar::new(grid.clone());

            for _ in 0..10 {
                let src = cells[rng.random_range(0..cells.len())];
                let dest = cells[rng.random_range(0..cells.len())];
                let results = astar.search_with_results(src.x, src.y, dest.x, dest.y);
                if results.incomplete() || src == dest {
                    continue;
                }

                let cost = unit_path_cost(&grid, src, results.path());
                assert!((cost - results.cost()).abs() < 1e-6);
                assert_eq!(results.path().last(), Some(&dest));
            }
        }
    }

    #[test]
    fn custom_move_costs_change_the_route() {
        // With diagonals costing more than two straight moves, the path
        // never moves diagonally
        let config = SearchConfig {
            move_costs: MoveCosts::new(1.0, 3.0).unwrap(),
            ..SearchConfig::default()
        };
        let astar = AStar::new(open_grid).with_config(config).unwrap();
        let results = astar.search_with_results(0, 0, 2, 2);

        assert_eq!(results.path().len(), 4);
        assert!((results.cost() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_config_is_rejected_and_previous_kept() {
        let mut astar = AStar::new(open_grid);
        astar.set_scale(2, 3).unwrap();

        assert_eq!(
            astar.set_scale(0, 1),
            Err(ConfigError::InvalidScale { x: 0, y: 1 })
        );
        assert_eq!(astar.set_max_ops(Some(0)), Err(ConfigError::ZeroMaxOps));
        assert_eq!(astar.scale(), Scale::new(2, 3).unwrap());

        let bad_costs = SearchConfig {
            move_costs: MoveCosts {
                straight: -1.0,
                diagonal: 1.4,
            },
            ..SearchConfig::default()
        };
        assert!(astar.set_config(bad_costs).is_err());
        assert_eq!(astar.config().move_costs, MoveCosts::default());
    }

    #[test]
    fn config_from_json() {
        let config: SearchConfig =
            serde_json::from_str(r#"{ "scale": { "x": 2, "y": 2 }, "max_ops": 500 }"#).unwrap();

        assert_eq!(config.scale, Scale::new(2, 2).unwrap());
        assert_eq!(config.max_ops, Some(500));
        assert_eq!(config.move_costs, MoveCosts::default());

        let astar = AStar::new(open_grid).with_config(config).unwrap();
        assert_eq!(astar.search(0, 0, 2, 0), points(&[(1, 0), (2, 0)]));
    }

    #[test]
    fn searches_share_one_instance_across_threads() {
        let grid = GridMap::from_ascii(
            "
            ..........
            .########.
            ..........
            ",
        );
        let astar = AStar::new(grid);
        let expected = astar.search(0, 0, 9, 2);
        assert!(!expected.is_empty());

        thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| astar.search(0, 0, 9, 2)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
