//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `GnError` as one variant
//! where they need to surface configuration problems.

use thiserror::Error;

use crate::{AgentId, Cell};

/// The top-level error type for `gn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GnError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `gn-*` crates.
pub type GnResult<T> = Result<T, GnError>;
