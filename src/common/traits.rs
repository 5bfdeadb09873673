use super::point::Point;

/// Trait that encapsulates answering whether a grid coordinate can be
/// stepped on.
///
/// The algorithms call this repeatedly for the same coordinates without
/// caching, so implementations should be cheap, or be wrapped in a
/// [CachedWalkability](crate::utils::cache::CachedWalkability).
///
/// Any `Fn(i32, i32) -> bool` closure implements this trait.
pub trait Walkable {
    fn is_walkable(&self, x: i32, y: i32) -> bool;

    fn is_point_walkable(&self, point: Point) -> bool {
        self.is_walkable(point.x, point.y)
    }
}

impl<F> Walkable for F
where
    F: Fn(i32, i32) -> bool,
{
    fn is_walkable(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}
