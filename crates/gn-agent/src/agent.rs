//! The navigating agent record.

use std::collections::VecDeque;

use gn_core::{AgentId, Cell};

use crate::MoveTimer;

// ── Health ────────────────────────────────────────────────────────────────────

/// Hit points.  Only ever decreases.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health(pub i32);

impl Health {
    /// Subtract `amount` (negative amounts are ignored) and return the new
    /// value.
    #[inline]
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.0 = self.0.saturating_sub(amount.max(0));
        self.0
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self.0 > 0
    }
}

// ── AgentStatus ───────────────────────────────────────────────────────────────

/// Outcome of the agent's most recent tick.
///
/// ```text
/// Planning ─┬─> Advancing ─┐
///           ├─> Evading  ──┼─> Planning (next eligible tick)
///           ├─> Waiting  ──┘   (idle: no path, holds its cell)
///           ├─> Arrived        (terminal)
///           └─> Dead           (terminal)
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentStatus {
    /// Spawned, not yet planned.
    #[default]
    Planning,
    /// Moved one cell this tick.
    Advancing,
    /// Blocked and rerouted through an evasion waypoint.
    Evading,
    /// No usable route; idles on its cell until the grid changes.
    Waiting,
    /// Reached its goal.
    Arrived,
    /// Health dropped to zero.
    Dead,
}

impl AgentStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, AgentStatus::Arrived | AgentStatus::Dead)
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Navigation state for one mobile unit.
///
/// `path` never starts with `cell`: its front is the next cell to enter.
/// `intention` is the cell the agent currently claims: its own cell while
/// idle or blocked, the cell it just entered after a move.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id:        AgentId,
    pub cell:      Cell,
    pub goal:      Cell,
    pub path:      VecDeque<Cell>,
    pub intention: Cell,
    pub timer:     MoveTimer,
    pub health:    Health,
    pub status:    AgentStatus,
}

impl Agent {
    /// New agent standing on `start`, claiming its own cell.
    ///
    /// A leading `start` in `path` is dropped so callers can hand over an
    /// oracle route unchanged.
    pub fn new(
        id:     AgentId,
        start:  Cell,
        goal:   Cell,
        path:   impl IntoIterator<Item = Cell>,
        health: i32,
        timer:  MoveTimer,
    ) -> Self {
        let mut path: VecDeque<Cell> = path.into_iter().collect();
        if path.front() == Some(&start) {
            path.pop_front();
        }
        Self {
            id,
            cell: start,
            goal,
            path,
            intention: start,
            timer,
            health: Health(health),
            status: AgentStatus::Planning,
        }
    }

    /// The next cell on the path, if any.
    #[inline]
    pub fn next_step(&self) -> Option<Cell> {
        self.path.front().copied()
    }

    #[inline]
    pub fn is_at_goal(&self) -> bool {
        self.cell == self.goal
    }

    #[inline]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Replace the remaining path.
    pub fn replace_path(&mut self, path: impl IntoIterator<Item = Cell>) {
        self.path = path.into_iter().collect();
    }

    /// Drop the remaining path; the agent idles where it stands.
    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    /// Claim the agent's own cell instead of a next step.
    #[inline]
    pub fn hold_position(&mut self) {
        self.intention = self.cell;
    }
}
