//! `gn-sim` — the coordinator that drives a run one tick at a time.
//!
//! # Tick loop
//!
//! ```text
//! advance_simulation(now):
//!   ① Rebuild   — intention table and occupancy index from every active
//!                 agent, ascending AgentId (lowest id keeps a contested cell).
//!   ② Plan      — for each active agent in ascending AgentId order whose
//!                 timer has elapsed, ask the MotionPlanner for a MoveResult.
//!   ③ Commit    — Advance(δ) → apply hazard damage, move, re-claim the new
//!                               cell, redraw the timer
//!                 Wait         → redraw the timer (evasion already applied)
//!                 Arrived      → at goal: remove; otherwise stay idle
//!   ④ Remove    — agents that arrived or whose health reached zero leave the
//!                 active set and release their claims.
//! ```
//!
//! Everything that happened is returned as a [`TickReport`] for the
//! rendering layer; nothing inside a tick fails.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gn_core::{Cell, NavConfig, Timestamp};
//! use gn_grid::BfsOracle;
//! use gn_sim::CoordinatorBuilder;
//!
//! let mut coord = CoordinatorBuilder::new(NavConfig::default(), BfsOracle).build()?;
//! coord.spawn_routed(Cell::new(0, 0), Cell::new(19, 19))?;
//! let mut clock = coord.config.make_clock();
//! while coord.active_count() > 0 {
//!     let report = coord.advance_simulation(clock.advance());
//!     render(&report);
//! }
//! ```

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod report;


pub use builder::CoordinatorBuilder;
pub use coordinator::Coordinator;
pub use error::{SimError, SimResult};
pub use report::{DamageEvent, EvasionEvent, MoveEvent, TickReport};
