//! Grid geometry variant shared across crates.
//!
//! The enum only names the geometry; neighbour enumeration lives in
//! `gn-grid::topology`.

/// Cell adjacency model of the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Geometry {
    /// Square cells, 4-neighbourhood.
    #[default]
    Rectangular,
    /// Offset-row hexagons, 6-neighbourhood.
    Hexagonal,
}

impl Geometry {
    pub fn as_str(self) -> &'static str {
        match self {
            Geometry::Rectangular => "rectangular",
            Geometry::Hexagonal   => "hexagonal",
        }
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
