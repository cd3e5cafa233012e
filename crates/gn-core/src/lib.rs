//! `gn-core` — foundational types for the `rust_gridnav` coordinator.
//!
//! This crate is a dependency of every other `gn-*` crate.  It has no `gn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`cell`]        | `Cell`, `Delta`, `CARDINALS`                          |
//! | [`geometry`]    | `Geometry` enum (rectangular / hexagonal)             |
//! | [`time`]        | `Timestamp`, `SimClock`                               |
//! | [`config`]      | `NavConfig`                                           |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `GnError`, `GnResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{CARDINALS, Cell, Delta};
pub use config::NavConfig;
pub use error::{GnError, GnResult};
pub use geometry::Geometry;
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Timestamp};
