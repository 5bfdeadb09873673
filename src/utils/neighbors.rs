use crate::common::point::{Direction, Point, Scale};
use crate::common::traits::Walkable;

use super::movement_costs::MoveCosts;

/// The grid cells around `node`, one grid cell away on each axis, with the
/// direction taken to reach each of them.
///
/// Cells past the edge of the `i32` range are left out, so a node there has
/// fewer than eight neighbors.
pub fn grid_neighbors(node: Point, scale: Scale) -> impl Iterator<Item = (Point, Direction)> {
    Direction::iter().filter_map(move |direction| Some((scale.step(node, direction)?, direction)))
}

/// Builds a neighbors closure for the 8-connected grid model, yielding each
/// walkable neighbor with the cost of moving there.
///
/// Usable directly with [dijkstra::shortest_path_generic](crate::algorithms::dijkstra::shortest_path_generic).
pub fn walkable_neighbors<W: Walkable>(
    walkable: &W,
    scale: Scale,
    costs: MoveCosts,
) -> impl Fn(Point) -> Vec<(Point, f64)> + '_ {
    move |node: Point| {
        grid_neighbors(node, scale)
            .filter(|(p, _)| walkable.is_point_walkable(*p))
            .map(|(p, direction)| (p, costs.cost(direction)))
            .collect()
    }
}
