use thiserror::Error;

/// Returned when removing the root of a heap that holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot delete the root of an empty heap")]
pub struct EmptyHeapError;

/// Validation errors returned when building a search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("scale factors must be at least 1, got ({x}, {y})")]
    InvalidScale { x: i32, y: i32 },

    #[error("move costs must be finite and positive, got straight={straight}, diagonal={diagonal}")]
    InvalidMoveCosts { straight: f64, diagonal: f64 },

    #[error("max_ops must be greater than zero")]
    ZeroMaxOps,
}
