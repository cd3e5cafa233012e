//! Deterministic per-agent and run-level RNG wrappers.
//!
//! # Seeding
//!
//! The coordinator is constructed with a [`SimRng`] and draws one run seed
//! from it.  Each agent's stream is then keyed by its id:
//!
//!   seed = run_seed XOR (agent_id * GOLDEN_GAMMA)
//!
//! so an agent's delay draws and evasion shuffles are the same no matter how
//! many other agents are active or in which order they were spawned.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::AgentId;

/// Odd 64-bit constant (2^64 / φ); consecutive ids land far apart.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

#[inline]
fn mix(base: u64, key: u64) -> u64 {
    base ^ key.wrapping_mul(GOLDEN_GAMMA)
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// One agent's random stream: move-delay draws and evasion direction order.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        AgentRng(SmallRng::seed_from_u64(mix(run_seed, agent.0 as u64)))
    }

    /// Uniform pick from `options`; `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.0)
    }

    /// Random permutation in place.
    #[inline]
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// The injected randomness of a run: seeds agent streams and drives
/// scenario generation (wall and hazard placement).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Independent generator for a sub-task, e.g. scatter on one stream and
    /// the coordinator on another.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let base = self.0.next_u64();
        SimRng(SmallRng::seed_from_u64(mix(base, offset)))
    }

    /// Fresh seed for a family of per-agent streams.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.next_u64()
    }

    /// Uniform coordinate in `0..bound`.  `bound` must be positive.
    #[inline]
    pub fn coord_below(&mut self, bound: i32) -> i32 {
        self.0.gen_range(0..bound)
    }
}
