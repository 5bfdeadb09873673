/// Caches for walkability queries and computed paths
pub mod cache;

/// Heuristic strategies for A*
pub mod heuristics;

/// Per-direction movement costs
pub mod movement_costs;

/// Neighbor enumeration on the 8-connected grid
pub mod neighbors;

/// Helpers for following a computed path
pub mod pathing;

pub use heuristics::{Heuristic, Manhattan, Octile, Zero};
pub use movement_costs::MoveCosts;
pub use neighbors::{grid_neighbors, walkable_neighbors};
pub use pathing::next_step_direction;
