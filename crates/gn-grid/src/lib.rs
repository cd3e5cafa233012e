//! `gn-grid` — obstacle grid, topology, and path oracle.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`grid`]     | `Grid`, `Obstacle`                                          |
//! | [`topology`] | `Topology` trait, neighbour tables for each `Geometry`      |
//! | [`oracle`]   | `PathOracle` trait, `Route`, `BfsOracle`                    |
//! | [`scatter`]  | `ScatterSpec` — random wall / hazard placement              |
//! | [`error`]    | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod oracle;
pub mod scatter;
pub mod topology;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{Grid, Obstacle};
pub use oracle::{BfsOracle, PathOracle, Route};
pub use scatter::ScatterSpec;
pub use topology::Topology;
