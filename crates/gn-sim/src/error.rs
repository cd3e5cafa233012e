use gn_core::{Cell, GnError};
use gn_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("no path from {start} to {goal}")]
    NoPath { start: Cell, goal: Cell },

    #[error("path steps from {from} to {to}, which are not neighbours")]
    InvalidPath { from: Cell, to: Cell },

    #[error("{which} cell {cell} is an obstacle")]
    ObstacleEndpoint { cell: Cell, which: &'static str },

    #[error("{which} cell {cell} is outside the grid")]
    OutOfBounds { cell: Cell, which: &'static str },

    #[error("grid resolution {grid} does not match configured resolution {config}")]
    ResolutionMismatch { config: u32, grid: u32 },

    #[error(transparent)]
    Config(#[from] GnError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
