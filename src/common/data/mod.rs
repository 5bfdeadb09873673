use serde::{Deserialize, Serialize};

use super::point::Point;
use super::traits::Walkable;

const WALL: char = '#';

/// A bounded walkability grid.
///
/// Cells outside the grid are never walkable, which keeps searches on it
/// finite.
///
/// # Example
/// ```rust
/// use grid_pathfinding::{GridMap, Walkable};
///
/// let grid = GridMap::from_ascii(
///     "..#\n\
///      ..#\n\
///      ...",
/// );
/// assert_eq!((grid.width(), grid.height()), (3, 3));
/// assert!(grid.is_walkable(0, 0));
/// assert!(!grid.is_walkable(2, 0));
/// assert!(!grid.is_walkable(-1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl GridMap {
    /// Creates a grid of the given size with every cell walkable.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![true; (width as usize) * (height as usize)],
        }
    }

    /// Parses a grid from lines of text, where `#` marks a wall and any other
    /// character is walkable.
    ///
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines. Short lines are padded with walls up to the widest line.
    pub fn from_ascii(map: &str) -> Self {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(rows.len()).unwrap_or(i32::MAX);

        let mut grid = GridMap::new(width, height);
        for (y, row) in (0..height).zip(&rows) {
            let mut chars = row.chars();
            for x in 0..width {
                let walkable = chars.next().is_some_and(|c| c != WALL);
                grid.set_walkable(x, y, walkable);
            }
        }

        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Marks a cell as walkable or blocked. Coordinates outside the grid are ignored.
    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) {
        if let Some(cell) = self.index(x, y).and_then(|i| self.cells.get_mut(i)) {
            *cell = walkable;
        }
    }

    /// Returns every walkable cell, row by row.
    pub fn walkable_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
            .filter(|p| self.is_walkable(p.x, p.y))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y, width) = (
            usize::try_from(x).ok()?,
            usize::try_from(y).ok()?,
            usize::try_from(self.width).ok()?,
        );
        y.checked_mul(width)?.checked_add(x)
    }
}

impl Walkable for GridMap {
    fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(false)
    }
}
