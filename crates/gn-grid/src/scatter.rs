//! Random scenario generation: walls and hazards sprinkled over a grid.

use std::collections::HashSet;

use gn_core::{Cell, SimRng};

use crate::{Grid, Obstacle};

/// How many walls and hazards [`Grid::scatter`] places.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterSpec {
    /// Fraction of all cells turned into walls.
    pub wall_fraction: f32,
    /// Number of hazard cells placed after the walls.
    pub hazard_count: usize,
    /// Damage of each hazard.
    pub hazard_damage: i32,
}

impl Default for ScatterSpec {
    fn default() -> Self {
        Self { wall_fraction: 0.2, hazard_count: 5, hazard_damage: 1 }
    }
}

impl Grid {
    /// Clear the grid and place random walls and hazards.
    ///
    /// Cells in `reserved` (e.g. spawn points) are never covered.  Counts
    /// are capped by the number of available cells, so the call always
    /// terminates.  Returns `(walls, hazards)` actually placed.
    pub fn scatter(
        &mut self,
        spec:     &ScatterSpec,
        reserved: &[Cell],
        rng:      &mut SimRng,
    ) -> (usize, usize) {
        self.clear();

        let reserved: HashSet<Cell> = reserved.iter().copied().collect();
        let r = self.resolution() as i32;
        let available = self.cells().filter(|c| !reserved.contains(c)).count();

        let wanted_walls = (self.cell_count() as f32 * spec.wall_fraction.clamp(0.0, 1.0)) as usize;
        let walls = wanted_walls.min(available);
        let hazards = spec.hazard_count.min(available - walls);

        let mut place = |grid: &mut Grid, count: usize, obstacle: Obstacle| {
            let mut placed = 0;
            while placed < count {
                let cell = Cell::new(rng.coord_below(r), rng.coord_below(r));
                if reserved.contains(&cell) || grid.obstacle(cell).is_some() {
                    continue;
                }
                grid.obstacles.insert(cell, obstacle);
                placed += 1;
            }
        };

        place(self, walls, Obstacle::WALL);
        place(self, hazards, Obstacle::hazard(spec.hazard_damage));
        (walls, hazards)
    }
}
