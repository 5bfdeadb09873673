/// Implementation of the CachedWalkability structure.
pub mod walkability_cache_struct;

/// Implementation of the PathCache structure.
pub mod path_cache_struct;

pub use path_cache_struct::PathCache;
pub use walkability_cache_struct::CachedWalkability;
