/// Provides grid pathfinding using the A* algorithm.
///
/// You most likely want to start with [AStar](crate::algorithms::astar::AStar).
pub mod astar;

/// Provides methods for pathfinding using Dijkstra's Shortest Paths algorithm
pub mod dijkstra;
