//! Agent identifiers.
//!
//! Ids are handed out monotonically by the coordinator and never reused
//! within a run, so ascending `AgentId` order is also spawn order.  The
//! conflict tie-break ("lowest id wins") is defined on this ordering.

use std::fmt;

/// Identity of one navigating agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    pub const FIRST: AgentId = AgentId(0);

    /// The id allocated after `self`.
    #[inline]
    pub fn next(self) -> AgentId {
        AgentId(self.0 + 1)
    }

    /// Cast to `usize` (e.g. for colour palettes in a renderer).
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}
