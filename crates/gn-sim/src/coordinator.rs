//! The `Coordinator` struct and its tick loop.

use gn_agent::{Agent, AgentStatus, AgentStore};
use gn_core::{AgentId, Cell, NavConfig, Timestamp};
use gn_grid::{BfsOracle, Grid, GridError, PathOracle};
use gn_motion::{
    EvasionStrategy, IntentionTable, LookaheadEvasion, MotionPlanner, MoveResult, OccupancyIndex,
};

use crate::{DamageEvent, EvasionEvent, MoveEvent, SimError, SimResult, TickReport};

/// What happens to an agent after its plan has been committed.
enum Fate {
    Stays,
    Arrived,
    Died,
}

/// Take an agent out of the active set and release everything it holds.
///
/// A free function so the tick loop can call it while the planner still
/// borrows the grid.
fn retire(
    agents:     &mut AgentStore,
    intentions: &mut IntentionTable,
    occupancy:  &mut OccupancyIndex,
    id:         AgentId,
) {
    intentions.release_agent(id);
    if let Some(agent) = agents.remove(id) {
        occupancy.remove(id, agent.cell);
    }
}

/// Owns the grid, the active agents, and the per-tick reservation state, and
/// advances them one tick at a time.
///
/// Create via [`CoordinatorBuilder`][crate::CoordinatorBuilder].
pub struct Coordinator<O: PathOracle = BfsOracle, E: EvasionStrategy = LookaheadEvasion> {
    pub config: NavConfig,

    pub(crate) grid:       Grid,
    pub(crate) agents:     AgentStore,
    pub(crate) intentions: IntentionTable,
    pub(crate) occupancy:  OccupancyIndex,
    pub(crate) oracle:     O,
    pub(crate) evasion:    E,

    /// Time passed to the most recent `advance_simulation`; spawn timers
    /// count from here.
    pub(crate) now: Timestamp,
}

impl<O: PathOracle, E: EvasionStrategy> Coordinator<O, E> {
    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one tick at simulation time `now`.
    ///
    /// Only agents whose timer has elapsed act.  `now` should not go
    /// backwards between calls; if it does, agents simply wait longer.
    pub fn advance_simulation(&mut self, now: Timestamp) -> TickReport {
        self.now = now;
        let mut report = TickReport::new(now);

        let collisions = self.intentions.rebuild(self.agents.iter());
        self.occupancy.rebuild(self.agents.iter());
        if collisions > 0 {
            tracing::debug!(%now, collisions, "intention table rebuilt with collisions");
        }

        let planner = MotionPlanner::new(&self.grid, &self.oracle, &self.evasion);
        let delays = &self.config.move_delays_ms;

        for id in self.agents.ids() {
            let Some((agent, rng)) = self.agents.agent_and_rng_mut(id) else {
                continue;
            };
            let Some(plan) = planner.plan_if_due(now, agent, rng, &self.occupancy, &self.intentions)
            else {
                continue;
            };
            report.planned += 1;

            let fate = match plan.result {
                MoveResult::Advance(delta) => {
                    let from = agent.cell;
                    let to = from + delta;

                    let damage = self.grid.hazard_damage(to);
                    if damage > 0 {
                        let health_after = agent.health.take_damage(damage);
                        report.damage.push(DamageEvent { agent: id, cell: to, damage, health_after });
                        tracing::debug!(agent = %id, cell = %to, damage, health_after, "hazard");
                    }

                    agent.cell = to;
                    if !self.intentions.claim(id, to) {
                        tracing::warn!(agent = %id, cell = %to, "moved onto a cell claimed by another agent");
                    }
                    self.occupancy.relocate(id, from, to);
                    report.moves.push(MoveEvent { agent: id, from, to, delta });
                    tracing::trace!(agent = %id, %from, %to, "move");

                    if agent.health.is_alive() {
                        Fate::Stays
                    } else {
                        agent.status = AgentStatus::Dead;
                        Fate::Died
                    }
                }

                MoveResult::Wait => {
                    if let Some(attempt) = &plan.evasion {
                        report.evasions.push(EvasionEvent {
                            agent:    id,
                            cell:     agent.cell,
                            blocked:  attempt.blocked,
                            conflict: attempt.conflict,
                            waypoint: attempt.outcome.as_ref().ok().map(|d| d.waypoint),
                        });
                    }
                    Fate::Stays
                }

                MoveResult::Arrived if agent.is_at_goal() => Fate::Arrived,

                MoveResult::Arrived => {
                    report.stranded.push(id);
                    Fate::Stays
                }
            };

            match fate {
                Fate::Stays => {
                    agent.timer.reschedule(now, rng, delays);
                }
                Fate::Arrived => {
                    tracing::info!(agent = %id, cell = %agent.cell, %now, "arrived");
                    report.arrivals.push(id);
                    retire(&mut self.agents, &mut self.intentions, &mut self.occupancy, id);
                }
                Fate::Died => {
                    tracing::info!(agent = %id, cell = %agent.cell, %now, "died");
                    report.deaths.push(id);
                    retire(&mut self.agents, &mut self.intentions, &mut self.occupancy, id);
                }
            }
        }

        report
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Add an agent at `start` heading for `goal` along `initial_path`.
    ///
    /// The path may include `start` as its first cell.  Each step must be a
    /// neighbour of the one before it (`InvalidPath` otherwise); walls on
    /// the path are allowed and trigger evasion when reached.  Its first move is
    /// scheduled one random delay after the current simulation time.
    pub fn spawn_agent(
        &mut self,
        start:        Cell,
        goal:         Cell,
        initial_path: impl IntoIterator<Item = Cell>,
    ) -> SimResult<AgentId> {
        self.check_endpoint(start, "start")?;
        self.check_endpoint(goal, "goal")?;

        let mut path: Vec<Cell> = initial_path.into_iter().collect();
        if path.first() == Some(&start) {
            path.remove(0);
        }
        if path.is_empty() && start != goal {
            return Err(SimError::NoPath { start, goal });
        }
        self.check_contiguous(start, &path)?;

        let id = self.agents.spawn(
            start,
            goal,
            path,
            self.config.initial_health,
            self.now,
            &self.config.move_delays_ms,
        );
        self.intentions.claim(id, start);
        self.occupancy.insert(id, start);

        tracing::info!(agent = %id, %start, %goal, "spawned");
        Ok(id)
    }

    /// Add an agent whose initial path comes from the path oracle.
    pub fn spawn_routed(&mut self, start: Cell, goal: Cell) -> SimResult<AgentId> {
        self.check_endpoint(start, "start")?;
        self.check_endpoint(goal, "goal")?;

        let route = self
            .oracle
            .find_path(&self.grid, start, goal)
            .map_err(|e| match e {
                GridError::Unreachable { .. } => SimError::NoPath { start, goal },
                other => SimError::Grid(other),
            })?;
        self.spawn_agent(start, goal, route.cells)
    }

    /// Every step must enter a neighbour of the previous cell.
    fn check_contiguous(&self, start: Cell, path: &[Cell]) -> SimResult<()> {
        let mut prev = start;
        for &next in path {
            if !self.grid.neighbors(prev).contains(&next) {
                return Err(SimError::InvalidPath { from: prev, to: next });
            }
            prev = next;
        }
        Ok(())
    }

    fn check_endpoint(&self, cell: Cell, which: &'static str) -> SimResult<()> {
        if !self.grid.contains(cell) {
            return Err(SimError::OutOfBounds { cell, which });
        }
        if !self.grid.is_free(cell) {
            return Err(SimError::ObstacleEndpoint { cell, which });
        }
        Ok(())
    }

    /// Drop every active agent.  Ids keep counting from where they were.
    pub fn remove_all_agents(&mut self) -> usize {
        let removed = self.agents.len();
        self.agents.clear();
        self.intentions.clear();
        self.occupancy.clear();
        if removed > 0 {
            tracing::info!(removed, "removed all agents");
        }
        removed
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Active agents in ascending id order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    pub fn active_count(&self) -> usize {
        self.agents.len()
    }

    pub fn intentions(&self) -> &IntentionTable {
        &self.intentions
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for editing between runs.
    ///
    /// Agents standing on a cell that becomes a wall are not moved; remove
    /// them first if that matters.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Time of the most recent tick.
    pub fn now(&self) -> Timestamp {
        self.now
    }
}
