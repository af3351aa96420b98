//! Engine error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A lock targeted a cell that already holds a settled block.
    #[error("lock into occupied cell (row {row}, col {col})")]
    LockOccupied { row: i8, col: i8 },

    /// A lock targeted a cell outside the board.
    #[error("lock outside the board (row {row}, col {col})")]
    LockOutOfBounds { row: i8, col: i8 },

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

impl EngineError {
    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::LockOccupied { .. } => "lock_occupied",
            EngineError::LockOutOfBounds { .. } => "lock_out_of_bounds",
            EngineError::Config { .. } => "invalid_config",
        }
    }
}
