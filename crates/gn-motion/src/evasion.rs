//! The `EvasionStrategy` trait and the default lookahead detour.

use gn_agent::Agent;
use gn_core::{AgentRng, Cell, CARDINALS};
use gn_grid::{Grid, PathOracle};

use crate::{EvasionError, EvasionResult};

/// A replacement path through an intermediate waypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detour {
    pub waypoint: Cell,
    /// Cells to walk, current cell excluded, ending at the agent's goal.
    pub path:     Vec<Cell>,
}

/// How a blocked agent reroutes.
///
/// Called by the [`MotionPlanner`][crate::MotionPlanner] when the next step
/// is occupied or claimed.  Implementations see the obstacle grid only;
/// other agents are deliberately invisible to them.  Randomness must come
/// from `rng` so runs stay reproducible.
pub trait EvasionStrategy: Send + Sync {
    fn evade(
        &self,
        agent:  &Agent,
        rng:    &mut AgentRng,
        grid:   &Grid,
        oracle: &dyn PathOracle,
    ) -> EvasionResult<Detour>;
}

/// Step sideways through a waypoint `reach` cells away in a random cardinal
/// direction, then continue to the goal.
///
/// Directions are tried in a per-agent shuffled order.  In each direction
/// the far cell is preferred; the adjacent cell is the fallback.  The first
/// in-bounds, obstacle-free candidate wins, and both legs are routed through
/// the oracle.  No second waypoint is tried if a leg is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadEvasion {
    pub reach: i32,
}

impl LookaheadEvasion {
    pub const DEFAULT_REACH: i32 = 2;

    pub fn new(reach: i32) -> Self {
        Self { reach: reach.max(1) }
    }

    /// First free waypoint around `from`, trying directions in random order.
    pub fn pick_waypoint(&self, from: Cell, rng: &mut AgentRng, grid: &Grid) -> Option<Cell> {
        let mut dirs = CARDINALS;
        rng.shuffle(&mut dirs);

        dirs.into_iter().find_map(|dir| {
            let far = from.step(dir, self.reach);
            if grid.is_free(far) {
                return Some(far);
            }
            let near = from + dir;
            grid.is_free(near).then_some(near)
        })
    }
}

impl Default for LookaheadEvasion {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REACH)
    }
}

impl EvasionStrategy for LookaheadEvasion {
    fn evade(
        &self,
        agent:  &Agent,
        rng:    &mut AgentRng,
        grid:   &Grid,
        oracle: &dyn PathOracle,
    ) -> EvasionResult<Detour> {
        let waypoint = self
            .pick_waypoint(agent.cell, rng, grid)
            .ok_or(EvasionError::NoWaypoint { from: agent.cell })?;

        let to_waypoint = oracle.find_path(grid, agent.cell, waypoint)?;
        let to_goal     = oracle.find_path(grid, waypoint, agent.goal)?;

        // Both routes include their start cell; skipping it drops the current
        // cell from the first leg and the duplicated waypoint from the second.
        let path = to_waypoint
            .steps()
            .iter()
            .chain(to_goal.steps())
            .copied()
            .collect();

        Ok(Detour { waypoint, path })
    }
}
