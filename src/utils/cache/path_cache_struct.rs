use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::common::point::Point;

/// A simple cache for path data.
///
/// Paths on a static map never change, so entities that repeatedly travel
/// between the same places can reuse a single search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathCache<K>
where
    K: PartialEq + Eq + Hash,
{
    cache: HashMap<K, Vec<Point>>,
}

impl<K> PathCache<K>
where
    K: PartialEq + Eq + Hash + Clone,
{
    /// Initializes a new, empty path cache.
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Returns the cached path, if it exists. Returns None if the path isn't cached.
    ///
    /// # Examples
    /// ```rust
    /// use grid_pathfinding::Point;
    /// use grid_pathfinding::utils::cache::PathCache;
    ///
    /// // Create a new path cache that uses String as the key type
    /// let mut cache: PathCache<String> = PathCache::new();
    ///
    /// let path = vec![Point::new(1, 0), Point::new(2, 0)];
    /// let existing_key = "existing_key".to_string();
    ///
    /// // Actually store the path in the cache
    /// assert_eq!(cache.is_path_cached(&existing_key), false);
    /// cache.update_cached_path(&existing_key, path.into_iter());
    /// assert_eq!(cache.is_path_cached(&existing_key), true);
    ///
    /// // Pull the cached copy of the path
    /// let path_slice = cache.get_cached_path(&existing_key).unwrap();
    /// assert_eq!(path_slice, &[Point::new(1, 0), Point::new(2, 0)]);
    ///
    /// // Attempt to pull a non-existent path entry
    /// let nonexisting_key = "nonexisting_key".to_string();
    /// assert!(cache.get_cached_path(&nonexisting_key).is_none());
    /// ```
    pub fn get_cached_path(&self, path_key: &K) -> Option<&[Point]> {
        self.cache.get(path_key).map(|v| &**v)
    }

    /// Returns whether a path is cached with the provided path key.
    pub fn is_path_cached(&self, path_key: &K) -> bool {
        self.cache.contains_key(path_key)
    }

    /// Returns the path, generating and caching it if it's not already cached.
    ///
    /// Returns None only if the path is not cached and the generation function
    /// returns None. An empty path from a search means "no path"; generators
    /// should map it to None so a failed search isn't cached.
    ///
    /// # Examples
    /// ```rust
    /// use grid_pathfinding::{AStar, Point};
    /// use grid_pathfinding::utils::cache::PathCache;
    ///
    /// let astar = AStar::new(|_x: i32, _y: i32| true);
    /// let mut cache: PathCache<(Point, Point)> = PathCache::new();
    ///
    /// let key = (Point::new(0, 0), Point::new(3, 0));
    /// let path = cache.get_path(&key, |(src, dest)| {
    ///     let path = astar.search(src.x, src.y, dest.x, dest.y);
    ///     (!path.is_empty()).then_some(path)
    /// });
    /// assert_eq!(path.map(|p| p.len()), Some(3));
    /// assert!(cache.is_path_cached(&key));
    /// ```
    pub fn get_path<G>(&mut self, path_key: &K, generator_fn: G) -> Option<&[Point]>
    where
        G: FnOnce(&K) -> Option<Vec<Point>>,
    {
        if !self.is_path_cached(path_key) {
            // We don't have a cached copy of the path, generate and cache it
            let path = generator_fn(path_key)?;
            let _ = self.cache.insert(path_key.clone(), path);
        }

        self.get_cached_path(path_key)
    }

    /// Updates the path cache for a specific key.
    ///
    /// This allows for pre-loading the cache with any existing
    /// path data you might already have available.
    pub fn update_cached_path(&mut self, path_key: &K, path_iter: impl Iterator<Item = Point>) {
        let path: Vec<Point> = path_iter.collect();
        let _ = self.cache.insert(path_key.clone(), path);
    }

    /// Removes the path cached for a specific key.
    pub fn remove_cached_path(&mut self, path_key: &K) {
        self.cache.remove(path_key);
    }

    /// Removes every cached path.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<K> Default for PathCache<K>
where
    K: PartialEq + Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
