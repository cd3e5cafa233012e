//! Per-tick event record handed back to the caller.
//!
//! A renderer redraws the agents listed in `moves`, flashes the cells in
//! `damage`, and drops the agents in `arrivals`/`deaths`.  The report holds
//! only copies; it borrows nothing from the coordinator.

use gn_core::{AgentId, Cell, Delta, Timestamp};
use gn_motion::Conflict;

/// One agent stepped to a neighbouring cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveEvent {
    pub agent: AgentId,
    pub from:  Cell,
    pub to:    Cell,
    pub delta: Delta,
}

/// One agent found its next step blocked and tried to detour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvasionEvent {
    pub agent:    AgentId,
    pub cell:     Cell,
    pub blocked:  Cell,
    pub conflict: Conflict,
    /// `None` when no detour was found and the agent is now idle.
    pub waypoint: Option<Cell>,
}

/// One agent entered a hazard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DamageEvent {
    pub agent:        AgentId,
    pub cell:         Cell,
    pub damage:       i32,
    pub health_after: i32,
}

/// Everything that happened during one `advance_simulation` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub now: Timestamp,
    /// Agents whose timer had elapsed and were planned this tick.
    pub planned:  usize,
    pub moves:    Vec<MoveEvent>,
    pub evasions: Vec<EvasionEvent>,
    pub damage:   Vec<DamageEvent>,
    pub arrivals: Vec<AgentId>,
    pub deaths:   Vec<AgentId>,
    /// Agents idle off their goal with nothing left to walk.
    pub stranded: Vec<AgentId>,
}

impl TickReport {
    pub fn new(now: Timestamp) -> Self {
        Self { now, ..Self::default() }
    }

    /// `true` when no agent moved, evaded, arrived, or died.
    pub fn is_quiet(&self) -> bool {
        self.moves.is_empty()
            && self.evasions.is_empty()
            && self.arrivals.is_empty()
            && self.deaths.is_empty()
    }

    pub fn moved(&self, agent: AgentId) -> Option<&MoveEvent> {
        self.moves.iter().find(|m| m.agent == agent)
    }

    pub fn evaded(&self, agent: AgentId) -> Option<&EvasionEvent> {
        self.evasions.iter().find(|e| e.agent == agent)
    }
}
