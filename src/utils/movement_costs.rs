use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;
use crate::common::point::Direction;

/// Default cost of a horizontal or vertical move.
pub const STRAIGHT_COST: f64 = 1.0;

/// Default cost of a diagonal move, an approximation of the square root of 2.
pub const DIAGONAL_COST: f64 = 1.4;

/// The cost of moving one grid cell in each kind of direction.
///
/// Costs are per grid cell, so they don't change with the search scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveCosts {
    pub straight: f64,
    pub diagonal: f64,
}

impl MoveCosts {
    pub fn new(straight: f64, diagonal: f64) -> Result<Self, ConfigError> {
        let costs = Self { straight, diagonal };
        costs.validate()?;
        Ok(costs)
    }

    /// Checks that both costs are finite and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |c: f64| c.is_finite() && c > 0.0;
        if valid(self.straight) && valid(self.diagonal) {
            Ok(())
        } else {
            Err(ConfigError::InvalidMoveCosts {
                straight: self.straight,
                diagonal: self.diagonal,
            })
        }
    }

    /// Returns the cost of a single move in `direction`.
    pub fn cost(&self, direction: Direction) -> f64 {
        if direction.is_diagonal() {
            self.diagonal
        } else {
            self.straight
        }
    }
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self {
            straight: STRAIGHT_COST,
            diagonal: DIAGONAL_COST,
        }
    }
}
