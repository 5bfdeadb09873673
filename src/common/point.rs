use serde::{Deserialize, Deserializer, Serialize};

use super::error::ConfigError;

/// An integer grid coordinate.
///
/// The y axis grows downward, matching screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point shifted by `dx`, `dy`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the point shifted by `dx`, `dy`, or None if either coordinate
    /// would leave the `i32` range.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Returns the compass direction of a single step from `self` toward `other`.
    ///
    /// The step moves at most one unit on each axis, so points that are not
    /// adjacent still produce the direction of the first unit step.
    ///
    /// Returns None if both points are the same.
    pub fn direction_to(self, other: Point) -> Option<Direction> {
        Direction::from_delta(other.x.cmp(&self.x) as i32, other.y.cmp(&self.y) as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The eight directions of movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    /// Every direction, in the order neighbors are expanded.
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// Returns an iterator over [Direction::ALL].
    pub fn iter() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }

    /// The unit step for this direction, as `(dx, dy)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::BottomLeft => (-1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomRight => (1, 1),
        }
    }

    /// Builds a direction from the signs of `dx` and `dy`.
    ///
    /// Returns None when both are zero.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx.signum(), dy.signum()) {
            (-1, -1) => Some(Direction::TopLeft),
            (0, -1) => Some(Direction::Top),
            (1, -1) => Some(Direction::TopRight),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (-1, 1) => Some(Direction::BottomLeft),
            (0, 1) => Some(Direction::Bottom),
            (1, 1) => Some(Direction::BottomRight),
            _ => None,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::TopLeft | Direction::TopRight | Direction::BottomLeft | Direction::BottomRight
        )
    }
}

/// Scale factors mapping raw coordinates onto a coarser movement grid.
///
/// Both factors are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Scale {
    x: i32,
    y: i32,
}

#[derive(Deserialize)]
struct ScaleRepr {
    x: i32,
    y: i32,
}

impl Scale {
    /// The identity scale, where every raw coordinate is its own grid cell.
    pub const UNIT: Scale = Scale { x: 1, y: 1 };

    /// Create a [Scale], returning an error if either factor is below 1.
    pub fn new(x: i32, y: i32) -> Result<Self, ConfigError> {
        if x < 1 || y < 1 {
            return Err(ConfigError::InvalidScale { x, y });
        }
        Ok(Self { x, y })
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    /// Snaps a raw coordinate down onto the grid: `floor(c / s) * s` on each axis.
    ///
    /// Near `i32::MIN` the multiple below may not exist, in which case the
    /// coordinate snaps up to the lowest multiple that does.
    pub fn quantize(self, point: Point) -> Point {
        Point::new(snap(point.x, self.x), snap(point.y, self.y))
    }

    /// Returns the neighbor of `point` one grid cell away in `direction`, or
    /// None if that cell lies outside the `i32` range.
    pub fn step(self, point: Point, direction: Direction) -> Option<Point> {
        let (dx, dy) = direction.delta();
        point.checked_offset(dx.checked_mul(self.x)?, dy.checked_mul(self.y)?)
    }
}

fn snap(c: i32, s: i32) -> i32 {
    let rem = c.rem_euclid(s);
    c.checked_sub(rem).unwrap_or_else(|| c + (s - rem))
}

impl Default for Scale {
    fn default() -> Self {
        Self::UNIT
    }
}

// Deserialized scales go through the same validation as Scale::new
impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ScaleRepr { x, y } = ScaleRepr::deserialize(deserializer)?;
        Scale::new(x, y).map_err(serde::de::Error::custom)
    }
}
