//! Neighbour enumeration for each grid geometry.
//!
//! Hexagonal grids use offset rows: odd rows are shifted half a cell to the
//! right, so the diagonal neighbours of a cell depend on its row parity.

use gn_core::{Cell, Delta, Geometry};

const RECT_OFFSETS: [Delta; 4] = [
    Delta::new(1, 0),
    Delta::new(-1, 0),
    Delta::new(0, 1),
    Delta::new(0, -1),
];

const HEX_EVEN_ROW: [Delta; 6] = [
    Delta::new(-1, 0),
    Delta::new(-1, -1),
    Delta::new(0, -1),
    Delta::new(1, 0),
    Delta::new(1, -1),
    Delta::new(0, 1),
];

const HEX_ODD_ROW: [Delta; 6] = [
    Delta::new(-1, 0),
    Delta::new(-1, 1),
    Delta::new(0, 1),
    Delta::new(1, 0),
    Delta::new(1, 1),
    Delta::new(0, -1),
];

/// Adjacency provider used by the path oracle.
pub trait Topology {
    /// In-bounds cells adjacent to `cell` on an `resolution`×`resolution`
    /// grid, in a fixed order.
    fn neighbors(&self, cell: Cell, resolution: u32) -> Vec<Cell>;
}

impl Topology for Geometry {
    fn neighbors(&self, cell: Cell, resolution: u32) -> Vec<Cell> {
        let offsets: &[Delta] = match self {
            Geometry::Rectangular => &RECT_OFFSETS,
            Geometry::Hexagonal if cell.row.rem_euclid(2) == 0 => &HEX_EVEN_ROW,
            Geometry::Hexagonal => &HEX_ODD_ROW,
        };
        offsets
            .iter()
            .map(|&d| cell + d)
            .filter(|c| in_bounds(*c, resolution))
            .collect()
    }
}

/// `true` if `cell` lies on an `resolution`×`resolution` grid.
#[inline]
pub fn in_bounds(cell: Cell, resolution: u32) -> bool {
    let r = resolution as i64;
    (0..r).contains(&(cell.row as i64)) && (0..r).contains(&(cell.col as i64))
}
