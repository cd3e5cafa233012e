use gn_core::Cell;
use gn_grid::GridError;
use thiserror::Error;

/// Why an evasion attempt left the agent without a path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvasionError {
    #[error("no free evasion waypoint around {from}")]
    NoWaypoint { from: Cell },

    #[error("evasion route failed: {0}")]
    Unreachable(#[from] GridError),
}

pub type EvasionResult<T> = Result<T, EvasionError>;
