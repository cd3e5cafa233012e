//! Per-tick cell reservations: the intention table and the occupancy index.
//!
//! Both structures are rebuilt from the active agents at the start of every
//! tick and patched in place as agents move, so an agent evaluated later in
//! the same tick sees the moves of the agents evaluated before it.

use std::collections::HashMap;

use gn_agent::Agent;
use gn_core::{AgentId, Cell};

#[cfg(not(feature = "fx-hash"))]
type CellMap<V> = HashMap<Cell, V>;

#[cfg(feature = "fx-hash")]
type CellMap<V> = rustc_hash::FxHashMap<Cell, V>;

// ── IntentionTable ────────────────────────────────────────────────────────────

/// Cell → owning agent.  At most one owner per cell and at most one cell per
/// agent.
///
/// Duplicate claims on rebuild resolve first-write-wins (lowest id), the
/// same tie-break the coordinator applies when evaluating agents.
#[derive(Default, Debug, Clone)]
pub struct IntentionTable {
    owners: CellMap<AgentId>,
    claims: HashMap<AgentId, Cell>,
}

impl IntentionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the agents' intention cells.
    ///
    /// Agents must arrive in ascending id order.  When two agents name the
    /// same cell the first (lowest id) keeps it; the loser is left without a
    /// claim until it moves or the next rebuild.  Returns the number of
    /// collisions.
    pub fn rebuild<'a>(&mut self, agents: impl IntoIterator<Item = &'a Agent>) -> usize {
        self.owners.clear();
        self.claims.clear();

        let mut collisions = 0;
        for agent in agents {
            match self.owners.get(&agent.intention) {
                Some(&owner) => {
                    tracing::warn!(
                        cell  = %agent.intention,
                        owner = %owner,
                        agent = %agent.id,
                        "intention collision on rebuild; lower id keeps the cell"
                    );
                    collisions += 1;
                }
                None => {
                    self.owners.insert(agent.intention, agent.id);
                    self.claims.insert(agent.id, agent.intention);
                }
            }
        }
        collisions
    }

    /// The agent claiming `cell`, if any.
    #[inline]
    pub fn owner(&self, cell: Cell) -> Option<AgentId> {
        self.owners.get(&cell).copied()
    }

    /// The owner of `cell` when it is someone other than `agent`.
    #[inline]
    pub fn claimed_by_other(&self, cell: Cell, agent: AgentId) -> Option<AgentId> {
        self.owner(cell).filter(|&owner| owner != agent)
    }

    /// The cell `agent` currently claims.
    #[inline]
    pub fn claim_of(&self, agent: AgentId) -> Option<Cell> {
        self.claims.get(&agent).copied()
    }

    /// Move `agent`'s claim to `cell`, releasing its previous cell.
    ///
    /// Refused (returns `false`, nothing changes) when another agent already
    /// owns `cell`.
    pub fn claim(&mut self, agent: AgentId, cell: Cell) -> bool {
        if self.claimed_by_other(cell, agent).is_some() {
            return false;
        }
        self.release_agent(agent);
        self.owners.insert(cell, agent);
        self.claims.insert(agent, cell);
        true
    }

    /// Drop whatever `agent` claims.  Returns the released cell.
    pub fn release_agent(&mut self, agent: AgentId) -> Option<Cell> {
        let cell = self.claims.remove(&agent)?;
        self.owners.remove(&cell);
        Some(cell)
    }

    pub fn clear(&mut self) {
        self.owners.clear();
        self.claims.clear();
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// All `(cell, owner)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, AgentId)> + '_ {
        self.owners.iter().map(|(&cell, &agent)| (cell, agent))
    }
}

// ── OccupancyIndex ────────────────────────────────────────────────────────────

/// Cell → agents physically standing on it.
///
/// Several agents may share a cell (spawning is not exclusive), so each
/// entry is a small list kept in ascending id order.
#[derive(Default, Debug, Clone)]
pub struct OccupancyIndex {
    cells: CellMap<Vec<AgentId>>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild<'a>(&mut self, agents: impl IntoIterator<Item = &'a Agent>) {
        self.cells.clear();
        for agent in agents {
            self.insert(agent.id, agent.cell);
        }
    }

    /// Some agent other than `agent` standing on `cell`.
    pub fn occupant_other_than(&self, cell: Cell, agent: AgentId) -> Option<AgentId> {
        self.cells
            .get(&cell)?
            .iter()
            .copied()
            .find(|&other| other != agent)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.get(&cell).is_some_and(|v| !v.is_empty())
    }

    pub fn insert(&mut self, agent: AgentId, cell: Cell) {
        let occupants = self.cells.entry(cell).or_default();
        if let Err(pos) = occupants.binary_search(&agent) {
            occupants.insert(pos, agent);
        }
    }

    pub fn remove(&mut self, agent: AgentId, cell: Cell) {
        if let Some(occupants) = self.cells.get_mut(&cell) {
            occupants.retain(|&a| a != agent);
            if occupants.is_empty() {
                self.cells.remove(&cell);
            }
        }
    }

    /// Record that `agent` stepped from `from` to `to`.
    pub fn relocate(&mut self, agent: AgentId, from: Cell, to: Cell) {
        self.remove(agent, from);
        self.insert(agent, to);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
