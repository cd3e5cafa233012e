//! Planner outcomes.

use gn_core::{AgentId, Cell, Delta};

use crate::{Detour, EvasionError};

/// What an eligible agent does this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Step by the given unit offset; the path front has been consumed and
    /// the intention set to the new cell.
    Advance(Delta),

    /// Blocked this tick.  An evasion attempt has already rewritten (or
    /// cleared) the path.
    Wait,

    /// Nothing left to walk: either at the goal, or idle with an empty path.
    Arrived,
}

impl MoveResult {
    /// The movement offset; zero unless advancing.
    pub fn delta(self) -> Delta {
        match self {
            MoveResult::Advance(d) => d,
            MoveResult::Wait | MoveResult::Arrived => Delta::ZERO,
        }
    }
}

/// Why the next step was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// Another agent stands on the cell.
    Occupied(AgentId),
    /// Another agent has claimed the cell in the intention table.
    Claimed(AgentId),
    /// The cell is a wall or off the grid (grid edited under the path).
    Impassable,
}

/// Record of one evasion, for the tick report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvasionAttempt {
    /// The step that was refused.
    pub blocked:  Cell,
    pub conflict: Conflict,
    /// The detour taken, or why none was found.
    pub outcome:  Result<Detour, EvasionError>,
}

impl EvasionAttempt {
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Full planner output: the move plus the evasion it triggered, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub result:  MoveResult,
    pub evasion: Option<EvasionAttempt>,
}

impl Plan {
    pub(crate) fn simple(result: MoveResult) -> Self {
        Self { result, evasion: None }
    }
}
