//! `gn-motion` — per-agent motion planning and conflict avoidance.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`outcome`]     | `MoveResult`, `Conflict`, `Plan`, `EvasionAttempt`          |
//! | [`reservation`] | `IntentionTable`, `OccupancyIndex`                          |
//! | [`evasion`]     | `EvasionStrategy` trait, `LookaheadEvasion`, `Detour`       |
//! | [`planner`]     | `MotionPlanner` — advance / wait / arrived decision         |
//! | [`error`]       | `EvasionError`, `EvasionResult<T>`                          |
//!
//! # Conflict model
//!
//! An agent about to step onto `target` yields when either
//!
//! 1. another agent physically stands on `target` (occupancy index), or
//! 2. another agent has claimed `target` in the intention table.
//!
//! Yielding means evading: the [`EvasionStrategy`] replaces the agent's path
//! with a detour (or clears it), the agent claims its own cell, and the
//! planner returns [`MoveResult::Wait`].  Neither structure is written by the
//! planner; the coordinator owns and updates both.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the per-tick cell maps.    |

pub mod error;
pub mod evasion;
pub mod outcome;
pub mod planner;
pub mod reservation;


pub use error::{EvasionError, EvasionResult};
pub use evasion::{Detour, EvasionStrategy, LookaheadEvasion};
pub use outcome::{Conflict, EvasionAttempt, MoveResult, Plan};
pub use planner::MotionPlanner;
pub use reservation::{IntentionTable, OccupancyIndex};
