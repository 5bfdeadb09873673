/// Ready-made walkability grids
pub mod data;

/// Error types returned by the crate
pub mod error;

/// Grid coordinate types
pub mod point;

/// Traits shared by the algorithms
pub mod traits;

pub use data::GridMap;
pub use error::{ConfigError, EmptyHeapError};
pub use point::{Direction, Point, Scale};
pub use traits::Walkable;
