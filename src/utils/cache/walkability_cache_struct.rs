use std::cell::RefCell;
use std::collections::HashMap;

use crate::common::point::Point;
use crate::common::traits::Walkable;

/// A simple passthrough cache that preferentially returns cached
/// walkability data, dynamically querying the wrapped oracle as-needed
/// and caching the answer before returning it.
///
/// Searches ask about the same cells many times, so wrapping an expensive
/// oracle in this cache means each cell is only computed once.
///
/// The cache assumes walkability doesn't change while it is in use; call
/// [invalidate](Self::invalidate) or [clear](Self::clear) when the map does change.
///
/// # Example
/// ```rust
/// use std::cell::Cell;
/// use grid_pathfinding::{Point, Walkable};
/// use grid_pathfinding::utils::cache::CachedWalkability;
///
/// let calls = Cell::new(0);
/// let oracle = |x: i32, _y: i32| {
///     calls.set(calls.get() + 1);
///     x >= 0
/// };
/// let cached = CachedWalkability::new(oracle);
///
/// assert!(cached.is_walkable(3, 4));
/// assert!(cached.is_walkable(3, 4));
/// assert_eq!(calls.get(), 1);
/// assert!(cached.is_cached(Point::new(3, 4)));
/// ```
#[derive(Debug)]
pub struct CachedWalkability<W> {
    inner: W,
    cache: RefCell<HashMap<Point, bool>>,
}

impl<W: Walkable> CachedWalkability<W> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the cached walkability of a cell, if it exists.
    ///
    /// Returns None if the cell hasn't been queried yet.
    pub fn get_cached(&self, point: Point) -> Option<bool> {
        self.cache.borrow().get(&point).copied()
    }

    /// Returns whether the walkability of a cell is cached.
    pub fn is_cached(&self, point: Point) -> bool {
        self.cache.borrow().contains_key(&point)
    }

    /// Updates the cache for a specific cell.
    ///
    /// This allows for pre-loading the cache with any walkability data you
    /// might already have available, or overriding the oracle for a cell.
    pub fn update_cached(&self, point: Point, walkable: bool) {
        let _ = self.cache.borrow_mut().insert(point, walkable);
    }

    /// Forgets the cached answer for a single cell.
    pub fn invalidate(&self, point: Point) {
        self.cache.borrow_mut().remove(&point);
    }

    /// Forgets every cached answer.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// The number of cells currently cached.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Unwraps the cache, returning the wrapped oracle.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Walkable> Walkable for CachedWalkability<W> {
    fn is_walkable(&self, x: i32, y: i32) -> bool {
        let point = Point::new(x, y);
        if let Some(walkable) = self.get_cached(point) {
            return walkable;
        }

        // We don't have a cached answer, ask the oracle and cache it
        let walkable = self.inner.is_walkable(x, y);
        self.update_cached(point, walkable);
        walkable
    }
}
