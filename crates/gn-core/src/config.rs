//! Run configuration.

use crate::{Geometry, GnError, GnResult, SimClock};

/// Top-level navigation configuration.
///
/// Typically built in code or loaded from a TOML/JSON file by the driver
/// (enable the `serde` feature) and handed to the coordinator builder.
/// `Default` reproduces the constants of the interactive front-end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Cells per grid side.
    pub resolution: u32,

    /// Adjacency model used by the default topology and path oracle.
    pub geometry: Geometry,

    /// Health every agent spawns with.
    pub initial_health: i32,

    /// Candidate delays (ms) between move attempts; one is drawn uniformly
    /// after every attempt.
    pub move_delays_ms: Vec<u64>,

    /// How many cells away the evasion strategy looks for a waypoint before
    /// falling back to the adjacent cell.
    pub evasion_reach: i32,

    /// Frame length for drivers that use [`SimClock`].
    pub frame_ms: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            resolution:     20,
            geometry:       Geometry::Rectangular,
            initial_health: 4,
            move_delays_ms: vec![250, 500],
            evasion_reach:  2,
            frame_ms:       33,
            seed:           0,
        }
    }
}

impl NavConfig {
    /// Reject configurations the coordinator cannot run with.
    pub fn validate(&self) -> GnResult<()> {
        if self.resolution == 0 {
            return Err(GnError::Config("resolution must be at least 1".into()));
        }
        if self.move_delays_ms.is_empty() {
            return Err(GnError::Config("move_delays_ms must not be empty".into()));
        }
        if self.initial_health <= 0 {
            return Err(GnError::Config(format!(
                "initial_health must be positive, got {}",
                self.initial_health
            )));
        }
        if self.evasion_reach < 1 || i64::from(self.evasion_reach) > i64::from(self.resolution) {
            return Err(GnError::Config(format!(
                "evasion_reach must be in 1..={}, got {}",
                self.resolution, self.evasion_reach
            )));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.frame_ms)
    }
}
