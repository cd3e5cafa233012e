//! Active-agent storage: `AgentStore` (navigation state) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The planner needs `&mut Agent` and `&mut AgentRng` for the same agent at
//! once (evasion shuffles directions, the timer draws delays).  Keeping the
//! RNGs in a separate map lets the coordinator borrow both fields of the
//! store disjointly:
//!
//! ```ignore
//! let (agent, rng) = store.agent_and_rng_mut(id)?;
//! planner.plan(agent, rng);
//! ```
//!
//! # Ordering
//!
//! Agents live in a `BTreeMap` keyed by `AgentId`, so iteration is always
//! ascending id order.  The coordinator relies on this for its documented
//! tie-break (lowest id claims a contested cell).

use std::collections::{BTreeMap, HashMap};

use gn_core::{AgentId, AgentRng, Cell, Timestamp};

use crate::{Agent, MoveTimer};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNGs, keyed by id.
pub struct AgentRngs {
    run_seed: u64,
    inner:    HashMap<AgentId, AgentRng>,
}

impl AgentRngs {
    pub fn new(run_seed: u64) -> Self {
        Self { run_seed, inner: HashMap::new() }
    }

    /// Mutable reference to one agent's RNG, seeding it on first use.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        let seed = self.run_seed;
        self.inner
            .entry(agent)
            .or_insert_with(|| AgentRng::new(seed, agent))
    }

    pub fn remove(&mut self, agent: AgentId) {
        self.inner.remove(&agent);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// The active set: every agent that has neither arrived nor died.
///
/// Ids are allocated monotonically and never reused within a store, even
/// after [`AgentStore::clear`].
pub struct AgentStore {
    agents:   BTreeMap<AgentId, Agent>,
    pub rngs: AgentRngs,
    next_id:  AgentId,
}

impl AgentStore {
    /// Empty store whose agents derive their RNGs from `run_seed`.
    pub fn new(run_seed: u64) -> Self {
        Self {
            agents:  BTreeMap::new(),
            rngs:    AgentRngs::new(run_seed),
            next_id: AgentId::FIRST,
        }
    }

    /// Allocate an id and insert a new agent standing on `start`.
    ///
    /// The agent's timer is scheduled one random delay after `now`.
    pub fn spawn(
        &mut self,
        start:     Cell,
        goal:      Cell,
        path:      impl IntoIterator<Item = Cell>,
        health:    i32,
        now:       Timestamp,
        delays_ms: &[u64],
    ) -> AgentId {
        let id = self.next_id;
        self.next_id = id.next();
        let timer = MoveTimer::scheduled(now, self.rngs.get_mut(id), delays_ms);
        self.agents.insert(id, Agent::new(id, start, goal, path, health, timer));
        id
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(&agent)
    }

    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&agent)
    }

    /// Disjoint mutable borrows of an agent and its RNG.
    pub fn agent_and_rng_mut(&mut self, agent: AgentId) -> Option<(&mut Agent, &mut AgentRng)> {
        let a = self.agents.get_mut(&agent)?;
        Some((a, self.rngs.get_mut(agent)))
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.agents.contains_key(&agent)
    }

    /// Agents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    /// Snapshot of active ids in ascending order.
    pub fn ids(&self) -> Vec<AgentId> {
        self.agents.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Remove an agent from the active set, returning its final state.
    pub fn remove(&mut self, agent: AgentId) -> Option<Agent> {
        self.rngs.remove(agent);
        self.agents.remove(&agent)
    }

    /// Remove every agent.  Id allocation continues from where it was.
    pub fn clear(&mut self) {
        self.agents.clear();
        self.rngs.clear();
    }
}
