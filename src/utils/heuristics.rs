use crate::common::point::{Point, Scale};

use super::movement_costs::MoveCosts;

/// An estimate of the remaining cost from a grid cell to the destination,
/// commonly called h(x).
///
/// For A* to return optimal paths the estimate must never exceed the real
/// cost (admissible). For closed nodes to never need reopening it must also
/// be consistent: the estimate can't drop by more than the cost of a move.
///
/// Any `Fn(Point, Point, Scale) -> f64` closure implements this trait.
pub trait Heuristic {
    /// Estimates the cost from `from` to `dest`. Both points are already
    /// quantized to `scale`.
    fn estimate(&self, from: Point, dest: Point, scale: Scale) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point, Scale) -> f64,
{
    fn estimate(&self, from: Point, dest: Point, scale: Scale) -> f64 {
        self(from, dest, scale)
    }
}

/// Distance along each axis to `dest`, in grid cells.
fn cell_distance(from: Point, dest: Point, scale: Scale) -> (f64, f64) {
    let dx = (i64::from(from.x) - i64::from(dest.x)).abs() as f64 / f64::from(scale.x());
    let dy = (i64::from(from.y) - i64::from(dest.y)).abs() as f64 / f64::from(scale.y());
    (dx, dy)
}

/// The [Manhattan method](http://theory.stanford.edu/~amitp/GameProgramming/Heuristics.html#manhattan-distance),
/// counted in grid cells.
///
/// This is the default. It suits entities that mostly travel in four
/// directions, and it overestimates diagonal travel, so paths are not always
/// optimal when diagonal moves are cheaper than two straight moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Point, dest: Point, scale: Scale) -> f64 {
        let (dx, dy) = cell_distance(from, dest, scale);
        dx + dy
    }
}

/// Octile distance: diagonal moves while both axes differ, straight moves
/// for the rest.
///
/// Admissible and consistent for the move costs it was built with, as long
/// as a diagonal move costs no more than two straight moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Octile {
    costs: MoveCosts,
}

impl Octile {
    pub fn new(costs: MoveCosts) -> Self {
        Self { costs }
    }
}

impl Heuristic for Octile {
    fn estimate(&self, from: Point, dest: Point, scale: Scale) -> f64 {
        let (dx, dy) = cell_distance(from, dest, scale);
        let diagonal_steps = dx.min(dy);
        let straight_steps = dx.max(dy) - diagonal_steps;
        diagonal_steps * self.costs.diagonal + straight_steps * self.costs.straight
    }
}

/// Always estimates zero, turning A* into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _from: Point, _dest: Point, _scale: Scale) -> f64 {
        0.0
    }
}
