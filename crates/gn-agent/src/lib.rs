//! `gn-agent` — per-agent navigation state and storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`agent`]   | `Agent`, `Health`, `AgentStatus`                          |
//! | [`timer`]   | `MoveTimer` — staggered per-agent move deadlines          |
//! | [`store`]   | `AgentStore` (id-ordered active set), `AgentRngs`         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on value types.          |

pub mod agent;
pub mod store;
pub mod timer;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentStatus, Health};
pub use store::{AgentRngs, AgentStore};
pub use timer::MoveTimer;
