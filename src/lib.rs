/// Provides common definitions used across the crate
pub mod common;

/// Provides the data structures the algorithms are built on
pub mod data_structures;

/// Provides individual algorithm implementations
pub mod algorithms;

/// Provides helper methods to simplify using algorithms
pub mod utils;

pub use algorithms::astar::{AStar, AStarSearchResults, SearchConfig};
pub use common::{Direction, GridMap, Point, Scale, Walkable};
pub use data_structures::binary_heap::BinaryHeap;
