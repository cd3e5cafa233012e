//! Unit tests for gn-grid.
//!
//! All tests use small hand-built grids.

#[cfg(test)]
mod helpers {
    use gn_core::{Cell, Geometry};
    use crate::Grid;

    /// 5×5 rectangular grid with a vertical wall in column 2, rows 0..=3:
    ///
    /// ```text
    ///   . . # . .
    ///   . . # . .
    ///   . . # . .
    ///   . . # . .
    ///   . . . . .
    /// ```
    pub fn walled_grid() -> Grid {
        let mut g = Grid::new(5, Geometry::Rectangular).unwrap();
        for row in 0..4 {
            g.add_wall(Cell::new(row, 2)).unwrap();
        }
        g
    }
}

// ── Grid queries & editing ────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use gn_core::{Cell, Geometry, NavConfig};
    use crate::{Grid, GridError, Obstacle};

    #[test]
    fn zero_resolution_rejected() {
        assert_eq!(
            Grid::new(0, Geometry::Rectangular).unwrap_err(),
            GridError::InvalidResolution(0)
        );
    }

    #[test]
    fn from_config_uses_resolution_and_geometry() {
        let cfg = NavConfig { resolution: 7, geometry: Geometry::Hexagonal, ..NavConfig::default() };
        let g = Grid::from_config(&cfg).unwrap();
        assert_eq!(g.resolution(), 7);
        assert_eq!(g.geometry(), Geometry::Hexagonal);
        assert_eq!(g.cell_count(), 49);
        assert_eq!(g.cells().count(), 49);
    }

    #[test]
    fn bounds() {
        let g = Grid::new(3, Geometry::Rectangular).unwrap();
        assert!(g.contains(Cell::new(0, 0)));
        assert!(g.contains(Cell::new(2, 2)));
        assert!(!g.contains(Cell::new(3, 0)));
        assert!(!g.contains(Cell::new(0, -1)));
    }

    #[test]
    fn walls_and_hazards() {
        let mut g = Grid::new(4, Geometry::Rectangular).unwrap();
        let wall = Cell::new(1, 1);
        let fire = Cell::new(2, 2);
        g.add_wall(wall).unwrap();
        g.set_hazard(fire, 3).unwrap();

        assert!(!g.is_free(wall));
        assert!(!g.is_traversable(wall));
        assert_eq!(g.hazard_damage(wall), 0);

        assert!(!g.is_free(fire), "hazards count as obstacles for lookups");
        assert!(g.is_traversable(fire), "hazards never block entry");
        assert_eq!(g.hazard_damage(fire), 3);

        assert!(g.is_free(Cell::new(0, 0)));
        assert_eq!(g.hazard_damage(Cell::new(0, 0)), 0);
        assert_eq!(g.obstacle_count(), 2);
    }

    #[test]
    fn hazard_damage_clamped_positive() {
        assert!(Obstacle::hazard(0).is_hazard());
        assert_eq!(Obstacle::hazard(-5).damage, 1);
        assert!(Obstacle::WALL.is_wall());
    }

    #[test]
    fn out_of_bounds_edit_rejected() {
        let mut g = Grid::new(2, Geometry::Rectangular).unwrap();
        let off = Cell::new(5, 5);
        assert_eq!(g.add_wall(off).unwrap_err(), GridError::OutOfBounds(off));
        assert_eq!(g.obstacle_count(), 0);
    }

    #[test]
    fn toggle_wall_flips() {
        let mut g = Grid::new(3, Geometry::Rectangular).unwrap();
        let c = Cell::new(1, 1);
        assert!(g.toggle_wall(c).unwrap());
        assert!(!g.is_free(c));
        assert!(!g.toggle_wall(c).unwrap());
        assert!(g.is_free(c));
    }

    #[test]
    fn clear_removes_everything() {
        let mut g = super::helpers::walled_grid();
        assert_eq!(g.obstacle_count(), 4);
        g.clear();
        assert_eq!(g.obstacle_count(), 0);
    }
}

// ── Topology ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use gn_core::{Cell, Geometry};
    use crate::Topology;

    #[test]
    fn rectangular_interior_has_four() {
        let n = Geometry::Rectangular.neighbors(Cell::new(2, 2), 5);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Cell::new(1, 2)));
        assert!(n.contains(&Cell::new(3, 2)));
        assert!(n.contains(&Cell::new(2, 1)));
        assert!(n.contains(&Cell::new(2, 3)));
    }

    #[test]
    fn rectangular_corner_clipped() {
        let n = Geometry::Rectangular.neighbors(Cell::new(0, 0), 5);
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn hexagonal_even_row_leans_left() {
        let n = Geometry::Hexagonal.neighbors(Cell::new(2, 2), 5);
        assert_eq!(n.len(), 6);
        assert!(n.contains(&Cell::new(1, 1)));
        assert!(n.contains(&Cell::new(3, 1)));
        assert!(!n.contains(&Cell::new(1, 3)));
    }

    #[test]
    fn hexagonal_odd_row_leans_right() {
        let n = Geometry::Hexagonal.neighbors(Cell::new(1, 2), 5);
        assert_eq!(n.len(), 6);
        assert!(n.contains(&Cell::new(0, 3)));
        assert!(n.contains(&Cell::new(2, 3)));
        assert!(!n.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn hexagonal_includes_cardinals() {
        // The evasion strategy moves along cardinal offsets on both
        // geometries; all four must be adjacent on a hex grid too.
        for row in [1, 2] {
            let c = Cell::new(row, 2);
            let n = Geometry::Hexagonal.neighbors(c, 5);
            for d in gn_core::CARDINALS {
                assert!(n.contains(&(c + d)), "{c} missing {d}");
            }
        }
    }
}

// ── BFS oracle ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod oracle {
    use gn_core::{Cell, Geometry};
    use crate::{BfsOracle, Grid, GridError, PathOracle};

    use super::helpers::walled_grid;

    #[test]
    fn trivial_route() {
        let g = Grid::new(3, Geometry::Rectangular).unwrap();
        let r = BfsOracle.find_path(&g, Cell::new(1, 1), Cell::new(1, 1)).unwrap();
        assert!(r.is_trivial());
        assert!(r.steps().is_empty());
    }

    #[test]
    fn straight_line_is_shortest() {
        let g = Grid::new(5, Geometry::Rectangular).unwrap();
        let r = BfsOracle.find_path(&g, Cell::new(0, 0), Cell::new(0, 4)).unwrap();
        assert_eq!(r.step_count(), 4);
        assert_eq!(r.start(), Cell::new(0, 0));
        assert_eq!(r.goal(), Cell::new(0, 4));
        assert_eq!(r.steps()[0], Cell::new(0, 1));
    }

    #[test]
    fn detours_around_wall() {
        let g = walled_grid();
        let r = BfsOracle.find_path(&g, Cell::new(0, 0), Cell::new(0, 4)).unwrap();
        // Down 4, across 4, up 4.
        assert_eq!(r.step_count(), 12);
        assert!(r.cells.iter().all(|&c| g.is_free(c)));
        for pair in r.cells.windows(2) {
            assert!(g.neighbors(pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn hazards_are_avoided() {
        let mut g = Grid::new(3, Geometry::Rectangular).unwrap();
        g.set_hazard(Cell::new(0, 1), 1).unwrap();
        let r = BfsOracle.find_path(&g, Cell::new(0, 0), Cell::new(0, 2)).unwrap();
        assert!(!r.cells.contains(&Cell::new(0, 1)));
        assert_eq!(r.step_count(), 4);
    }

    #[test]
    fn enclosed_goal_unreachable() {
        let mut g = Grid::new(3, Geometry::Rectangular).unwrap();
        g.add_wall(Cell::new(0, 1)).unwrap();
        g.add_wall(Cell::new(1, 0)).unwrap();
        let err = BfsOracle.find_path(&g, Cell::new(2, 2), Cell::new(0, 0)).unwrap_err();
        assert_eq!(err, GridError::Unreachable { from: Cell::new(2, 2), to: Cell::new(0, 0) });
    }

    #[test]
    fn off_grid_endpoint_rejected() {
        let g = Grid::new(3, Geometry::Rectangular).unwrap();
        let err = BfsOracle.find_path(&g, Cell::new(0, 0), Cell::new(0, 3)).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(Cell::new(0, 3)));
    }

    #[test]
    fn hexagonal_route_uses_diagonals() {
        let g = Grid::new(5, Geometry::Hexagonal).unwrap();
        // (0,0) → (2,1): even row 0 has (1,0)/(1,-1) below; odd row 1 has (2,1).
        let r = BfsOracle.find_path(&g, Cell::new(0, 0), Cell::new(2, 1)).unwrap();
        assert_eq!(r.step_count(), 2);
    }
}

// ── Scatter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scatter {
    use gn_core::{Cell, Geometry, SimRng};
    use crate::{Grid, ScatterSpec};

    #[test]
    fn places_requested_counts() {
        let mut g = Grid::new(20, Geometry::Rectangular).unwrap();
        let (walls, hazards) = g.scatter(&ScatterSpec::default(), &[], &mut SimRng::new(1));
        assert_eq!(walls, 80);
        assert_eq!(hazards, 5);
        assert_eq!(g.obstacle_count(), 85);
        let fires = g.obstacles().filter(|(_, o)| o.is_hazard()).count();
        assert_eq!(fires, 5);
    }

    #[test]
    fn reserved_cells_stay_free() {
        let reserved = [Cell::new(0, 1), Cell::new(1, 1)];
        for seed in 0..20 {
            let mut g = Grid::new(6, Geometry::Rectangular).unwrap();
            g.scatter(&ScatterSpec::default(), &reserved, &mut SimRng::new(seed));
            for c in reserved {
                assert!(g.is_free(c), "seed {seed}: {c} covered");
            }
        }
    }

    #[test]
    fn counts_capped_by_space() {
        let mut g = Grid::new(2, Geometry::Rectangular).unwrap();
        let spec = ScatterSpec { wall_fraction: 1.0, hazard_count: 10, hazard_damage: 2 };
        let (walls, hazards) = g.scatter(&spec, &[Cell::new(0, 0)], &mut SimRng::new(3));
        assert_eq!(walls, 3);
        assert_eq!(hazards, 0);
        assert!(g.is_free(Cell::new(0, 0)));
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Grid::new(10, Geometry::Rectangular).unwrap();
        let mut b = Grid::new(10, Geometry::Rectangular).unwrap();
        a.scatter(&ScatterSpec::default(), &[], &mut SimRng::new(7));
        b.scatter(&ScatterSpec::default(), &[], &mut SimRng::new(7));
        let mut ca: Vec<_> = a.obstacles().collect();
        let mut cb: Vec<_> = b.obstacles().collect();
        ca.sort_by_key(|(c, _)| *c);
        cb.sort_by_key(|(c, _)| *c);
        assert_eq!(ca, cb);
    }
}
