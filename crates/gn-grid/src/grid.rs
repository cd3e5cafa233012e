//! The obstacle grid.
//!
//! An obstacle is a plain record carrying the damage it inflicts on entry:
//!
//! | `damage` | Meaning                                                    |
//! |----------|------------------------------------------------------------|
//! | `0`      | wall — never occupiable                                    |
//! | `> 0`    | hazard — traversable, damages the agent that enters it     |
//!
//! Both kinds count as "obstacle-occupied" for [`Grid::is_free`] (and so for
//! the path oracle and evasion waypoint search); only walls fail
//! [`Grid::is_traversable`].

use std::collections::HashMap;

use gn_core::{Cell, Geometry, NavConfig};

use crate::topology::{Topology, in_bounds};
use crate::{GridError, GridResult};

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// An obstacle occupying one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub damage: i32,
}

impl Obstacle {
    pub const WALL: Obstacle = Obstacle { damage: 0 };

    /// A hazard dealing `damage` (clamped to at least 1) on entry.
    #[inline]
    pub fn hazard(damage: i32) -> Self {
        Obstacle { damage: damage.max(1) }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self.damage <= 0
    }

    #[inline]
    pub fn is_hazard(self) -> bool {
        self.damage > 0
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Square grid of `resolution`×`resolution` cells plus its obstacle map.
///
/// Owned by the coordinator for the lifetime of a run.  Read-only while a
/// tick is in progress; editing methods are meant for the scenario setup
/// between runs.
#[derive(Clone, Debug)]
pub struct Grid {
    resolution:           u32,
    geometry:             Geometry,
    pub(crate) obstacles: HashMap<Cell, Obstacle>,
}

impl Grid {
    /// Empty grid with the given size and adjacency model.
    pub fn new(resolution: u32, geometry: Geometry) -> GridResult<Self> {
        if resolution == 0 {
            return Err(GridError::InvalidResolution(resolution));
        }
        Ok(Self { resolution, geometry, obstacles: HashMap::new() })
    }

    /// Empty grid sized and shaped from `config`.
    pub fn from_config(config: &NavConfig) -> GridResult<Self> {
        Self::new(config.resolution, config.geometry)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        (self.resolution as usize).pow(2)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let r = self.resolution as i32;
        (0..r).flat_map(move |row| (0..r).map(move |col| Cell::new(row, col)))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        in_bounds(cell, self.resolution)
    }

    #[inline]
    pub fn obstacle(&self, cell: Cell) -> Option<Obstacle> {
        self.obstacles.get(&cell).copied()
    }

    /// In bounds and holding no obstacle of any kind.  Agents are never
    /// consulted.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.obstacles.contains_key(&cell)
    }

    /// In bounds and not a wall; hazards are traversable.
    #[inline]
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.obstacle(cell).is_some_and(Obstacle::is_wall)
    }

    /// Damage dealt on entering `cell`; `0` for walls, free and
    /// out-of-bounds cells.
    #[inline]
    pub fn hazard_damage(&self, cell: Cell) -> i32 {
        self.obstacle(cell)
            .filter(|o| o.is_hazard())
            .map_or(0, |o| o.damage)
    }

    /// In-bounds neighbours of `cell` for this grid's geometry.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        self.geometry.neighbors(cell, self.resolution)
    }

    /// Iterator over all obstacle cells and their records.
    pub fn obstacles(&self) -> impl Iterator<Item = (Cell, Obstacle)> + '_ {
        self.obstacles.iter().map(|(&c, &o)| (c, o))
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    // ── Editing ───────────────────────────────────────────────────────────

    /// Place (or replace) an obstacle.
    pub fn set_obstacle(&mut self, cell: Cell, obstacle: Obstacle) -> GridResult<()> {
        if !self.contains(cell) {
            return Err(GridError::OutOfBounds(cell));
        }
        self.obstacles.insert(cell, obstacle);
        Ok(())
    }

    pub fn add_wall(&mut self, cell: Cell) -> GridResult<()> {
        self.set_obstacle(cell, Obstacle::WALL)
    }

    pub fn set_hazard(&mut self, cell: Cell, damage: i32) -> GridResult<()> {
        self.set_obstacle(cell, Obstacle::hazard(damage))
    }

    /// Remove whatever obstacle sits on `cell` if there is one, otherwise
    /// place a wall.  Returns `true` if the cell holds an obstacle afterwards.
    pub fn toggle_wall(&mut self, cell: Cell) -> GridResult<bool> {
        if self.obstacles.remove(&cell).is_some() {
            return Ok(false);
        }
        self.add_wall(cell)?;
        Ok(true)
    }

    pub fn remove_obstacle(&mut self, cell: Cell) -> Option<Obstacle> {
        self.obstacles.remove(&cell)
    }

    /// Remove every obstacle.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }
}
