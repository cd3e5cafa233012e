//! Grid-subsystem error type.

use thiserror::Error;

use gn_core::Cell;

/// Errors produced by `gn-grid`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("no route from {from} to {to}")]
    Unreachable { from: Cell, to: Cell },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("grid resolution must be at least 1, got {0}")]
    InvalidResolution(u32),
}

pub type GridResult<T> = Result<T, GridError>;
