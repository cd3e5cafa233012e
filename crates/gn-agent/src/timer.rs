//! Per-agent move timer.
//!
//! Every move attempt draws a fresh delay uniformly from the configured set
//! (250 ms or 500 ms by default) and pushes the agent's deadline to
//! `now + delay`.  Agents are only eligible to plan once `now >= deadline`,
//! so neighbouring agents reach a shared cell at staggered times instead of
//! in lock-step with the driver's frame rate.

use gn_core::{AgentRng, Timestamp};

/// Deadline of an agent's next planning attempt.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveTimer {
    deadline:      Timestamp,
    last_delay_ms: u64,
}

impl MoveTimer {
    /// A timer that is due at exactly `deadline`.
    pub fn due_at(deadline: Timestamp) -> Self {
        Self { deadline, last_delay_ms: 0 }
    }

    /// A timer scheduled one random delay after `now`.
    pub fn scheduled(now: Timestamp, rng: &mut AgentRng, delays_ms: &[u64]) -> Self {
        let mut timer = Self::due_at(now);
        timer.reschedule(now, rng, delays_ms);
        timer
    }

    /// `true` once `now` has reached the deadline.
    #[inline]
    pub fn is_due(&self, now: Timestamp) -> bool {
        now >= self.deadline
    }

    /// Draw a new delay and set the deadline to `now + delay`.
    ///
    /// An empty delay set (rejected by `NavConfig::validate`) degrades to a
    /// zero delay.
    pub fn reschedule(&mut self, now: Timestamp, rng: &mut AgentRng, delays_ms: &[u64]) -> Timestamp {
        let delay = rng.choose(delays_ms).copied().unwrap_or(0);
        self.last_delay_ms = delay;
        self.deadline = now + delay;
        self.deadline
    }

    #[inline]
    pub fn deadline(&self) -> Timestamp {
        self.deadline
    }

    /// The delay drawn by the most recent reschedule.
    #[inline]
    pub fn last_delay_ms(&self) -> u64 {
        self.last_delay_ms
    }
}
