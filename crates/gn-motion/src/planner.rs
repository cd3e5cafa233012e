//! Per-agent move decision.

use gn_agent::{Agent, AgentStatus};
use gn_core::{AgentRng, Cell, Timestamp};
use gn_grid::{Grid, PathOracle};

use crate::{
    Conflict, EvasionAttempt, EvasionStrategy, IntentionTable, MoveResult, OccupancyIndex, Plan,
};

/// Decides what one eligible agent does this tick.
///
/// The planner borrows the grid and its collaborators for the length of a
/// tick; it mutates only the agent it is planning (path, intention, status).
/// Timers and the shared reservation structures are the coordinator's job.
///
/// # Type parameters
///
/// `O` is the [`PathOracle`] used for evasion legs, `E` the
/// [`EvasionStrategy`].  Both are resolved at compile time.
pub struct MotionPlanner<'a, O: PathOracle, E: EvasionStrategy + ?Sized> {
    pub grid:    &'a Grid,
    pub oracle:  &'a O,
    pub evasion: &'a E,
}

impl<'a, O: PathOracle, E: EvasionStrategy + ?Sized> MotionPlanner<'a, O, E> {
    pub fn new(grid: &'a Grid, oracle: &'a O, evasion: &'a E) -> Self {
        Self { grid, oracle, evasion }
    }

    /// Plan only if the agent's timer has elapsed.
    ///
    /// Returns `None` without touching the agent otherwise.
    pub fn plan_if_due(
        &self,
        now:        Timestamp,
        agent:      &mut Agent,
        rng:        &mut AgentRng,
        occupancy:  &OccupancyIndex,
        intentions: &IntentionTable,
    ) -> Option<Plan> {
        agent
            .timer
            .is_due(now)
            .then(|| self.plan(agent, rng, occupancy, intentions))
    }

    /// Decide the agent's move.
    ///
    /// Order of checks: empty path or goal reached, then traversability of
    /// the next step, then physical occupancy, then foreign claims.
    pub fn plan(
        &self,
        agent:      &mut Agent,
        rng:        &mut AgentRng,
        occupancy:  &OccupancyIndex,
        intentions: &IntentionTable,
    ) -> Plan {
        let target = match agent.next_step() {
            Some(target) if !agent.is_at_goal() => target,
            _ => {
                // Path and position are untouched.  `intention` already
                // equals `cell` here, and `status` is reporting only.
                agent.hold_position();
                agent.status = if agent.is_at_goal() {
                    AgentStatus::Arrived
                } else {
                    AgentStatus::Waiting
                };
                return Plan::simple(MoveResult::Arrived);
            }
        };

        if let Some(conflict) = self.conflict_at(agent, target, occupancy, intentions) {
            return self.evade(agent, rng, target, conflict);
        }

        let delta = agent.cell.delta_to(target);
        agent.path.pop_front();
        agent.intention = target;
        agent.status = AgentStatus::Advancing;
        Plan::simple(MoveResult::Advance(delta))
    }

    fn conflict_at(
        &self,
        agent:      &Agent,
        target:     Cell,
        occupancy:  &OccupancyIndex,
        intentions: &IntentionTable,
    ) -> Option<Conflict> {
        if !self.grid.is_traversable(target) {
            return Some(Conflict::Impassable);
        }
        if let Some(other) = occupancy.occupant_other_than(target, agent.id) {
            return Some(Conflict::Occupied(other));
        }
        intentions
            .claimed_by_other(target, agent.id)
            .map(Conflict::Claimed)
    }

    fn evade(&self, agent: &mut Agent, rng: &mut AgentRng, blocked: Cell, conflict: Conflict) -> Plan {
        let outcome = self.evasion.evade(agent, rng, self.grid, self.oracle);

        match &outcome {
            Ok(detour) => {
                tracing::debug!(
                    agent    = %agent.id,
                    cell     = %agent.cell,
                    blocked  = %blocked,
                    waypoint = %detour.waypoint,
                    ?conflict,
                    "evading"
                );
                agent.replace_path(detour.path.iter().copied());
                agent.status = AgentStatus::Evading;
            }
            Err(err) => {
                tracing::debug!(
                    agent   = %agent.id,
                    cell    = %agent.cell,
                    blocked = %blocked,
                    ?conflict,
                    error   = %err,
                    "evasion failed; agent idles"
                );
                agent.clear_path();
                agent.status = AgentStatus::Waiting;
            }
        }
        agent.hold_position();

        Plan {
            result:  MoveResult::Wait,
            evasion: Some(EvasionAttempt { blocked, conflict, outcome }),
        }
    }
}
