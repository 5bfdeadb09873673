use crate::common::point::{Direction, Point};

/// Utility function for converting a position and a path
/// into a direction for the next movement on the path.
///
/// If the position is not on the path, it will return
/// a direction that moves towards the first position
/// of the path.
///
/// Returns None if the current position is the final
/// position in the path, or if the path is empty.
///
/// # Example
/// ```rust
/// use grid_pathfinding::{Direction, Point};
/// use grid_pathfinding::utils::pathing::next_step_direction;
///
/// let path = [Point::new(1, 0), Point::new(2, 1)];
/// assert_eq!(next_step_direction(Point::new(1, 0), &path), Some(Direction::BottomRight));
/// assert_eq!(next_step_direction(Point::new(2, 1), &path), None);
/// ```
pub fn next_step_direction(current_pos: Point, path: &[Point]) -> Option<Direction> {
    match path.iter().position(|p| *p == current_pos) {
        // No next step if we're at the last entry
        Some(i) => path.get(i + 1).and_then(|next| current_pos.direction_to(*next)),
        None => path.first().and_then(|start| current_pos.direction_to(*start)),
    }
}
