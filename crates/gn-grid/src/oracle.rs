//! Path oracle trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! The coordinator and the evasion strategy only see [`PathOracle`], so
//! applications can swap in A*, weighted search, or a precomputed table
//! without touching the navigation core.  [`BfsOracle`] is the default.
//!
//! # Obstacles
//!
//! Every obstacle cell (walls *and* hazards) is impassable to the oracle:
//! planned routes never step on a hazard.  Agents only take hazard damage
//! when they follow a path handed to them from outside, or when the grid
//! was edited after the path was planned.

use std::collections::{HashMap, VecDeque};

use gn_core::Cell;

use crate::{Grid, GridError, GridResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a path query: cells from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<Cell>,
}

impl Route {
    /// First cell of the route.  Routes are never empty.
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Last cell of the route.
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Cells after the start, i.e. the moves an agent standing on `start` makes.
    pub fn steps(&self) -> &[Cell] {
        &self.cells[1..]
    }

    /// Number of moves.
    pub fn step_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// `true` if start and goal coincide.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }
}

// ── PathOracle trait ──────────────────────────────────────────────────────────

/// Shortest-path provider over a [`Grid`].
///
/// Implementations must be `Send + Sync` so one oracle can be shared by
/// several coordinators (e.g. batch scenario runs on worker threads).
pub trait PathOracle: Send + Sync {
    /// Compute a route from `start` to `goal` avoiding obstacle cells.
    ///
    /// `start == goal` yields a single-cell route.  Returns
    /// [`GridError::Unreachable`] when no route exists and
    /// [`GridError::OutOfBounds`] for off-grid endpoints.
    fn find_path(&self, grid: &Grid, start: Cell, goal: Cell) -> GridResult<Route>;
}

// ── BfsOracle ─────────────────────────────────────────────────────────────────

/// Breadth-first search over the grid's topology.  Every move costs the same,
/// so BFS yields a shortest route; ties are broken by the topology's fixed
/// neighbour order, which makes results deterministic.
pub struct BfsOracle;

impl PathOracle for BfsOracle {
    fn find_path(&self, grid: &Grid, start: Cell, goal: Cell) -> GridResult<Route> {
        bfs(grid, start, goal)
    }
}

fn bfs(grid: &Grid, start: Cell, goal: Cell) -> GridResult<Route> {
    for endpoint in [start, goal] {
        if !grid.contains(endpoint) {
            return Err(GridError::OutOfBounds(endpoint));
        }
    }
    if start == goal {
        return Ok(Route { cells: vec![start] });
    }

    // parent[c] = cell from which `c` was first reached.
    let mut parent: HashMap<Cell, Cell> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    parent.insert(start, start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Ok(reconstruct(&parent, start, goal));
        }
        for next in grid.neighbors(current) {
            if parent.contains_key(&next) || grid.obstacle(next).is_some() {
                continue;
            }
            parent.insert(next, current);
            queue.push_back(next);
        }
    }

    Err(GridError::Unreachable { from: start, to: goal })
}

fn reconstruct(parent: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Route {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = parent[&cur];
        cells.push(cur);
    }
    cells.reverse();
    Route { cells }
}
