//! Fluent builder for constructing a [`Coordinator`].

use gn_agent::AgentStore;
use gn_core::{NavConfig, SimRng, Timestamp};
use gn_grid::{Grid, PathOracle};
use gn_motion::{EvasionStrategy, IntentionTable, LookaheadEvasion, OccupancyIndex};

use crate::{Coordinator, SimError, SimResult};

/// Fluent builder for [`Coordinator<O, E>`].
///
/// # Required inputs
///
/// - [`NavConfig`] — resolution, geometry, health, delays, seed, …
/// - `O: PathOracle` — the routing algorithm (e.g. [`gn_grid::BfsOracle`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                         |
/// |-----------------|-------------------------------------------------|
/// | `.grid(g)`      | Empty grid from `config.resolution`/`geometry`  |
/// | `.rng(r)`       | `SimRng::new(config.seed)`                      |
/// | `.evasion(e)`   | `LookaheadEvasion::new(config.evasion_reach)`   |
pub struct CoordinatorBuilder<O: PathOracle, E: EvasionStrategy = LookaheadEvasion> {
    config:  NavConfig,
    grid:    Option<Grid>,
    rng:     Option<SimRng>,
    oracle:  O,
    evasion: E,
}

impl<O: PathOracle> CoordinatorBuilder<O, LookaheadEvasion> {
    pub fn new(config: NavConfig, oracle: O) -> Self {
        let evasion = LookaheadEvasion::new(config.evasion_reach);
        Self { config, grid: None, rng: None, oracle, evasion }
    }
}

impl<O: PathOracle, E: EvasionStrategy> CoordinatorBuilder<O, E> {
    /// Supply a prepared grid (walls, hazards).  Its resolution must match
    /// the configuration.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Inject the run's randomness source.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Swap the evasion strategy.
    pub fn evasion<E2: EvasionStrategy>(self, evasion: E2) -> CoordinatorBuilder<O, E2> {
        CoordinatorBuilder {
            config:  self.config,
            grid:    self.grid,
            rng:     self.rng,
            oracle:  self.oracle,
            evasion,
        }
    }

    /// Validate the configuration and return an empty coordinator at t = 0.
    pub fn build(self) -> SimResult<Coordinator<O, E>> {
        self.config.validate()?;

        let grid = match self.grid {
            Some(g) if g.resolution() != self.config.resolution => {
                return Err(SimError::ResolutionMismatch {
                    config: self.config.resolution,
                    grid:   g.resolution(),
                });
            }
            Some(g) => g,
            None => Grid::from_config(&self.config)?,
        };

        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let run_seed = rng.next_seed();

        Ok(Coordinator {
            config:     self.config,
            grid,
            agents:     AgentStore::new(run_seed),
            intentions: IntentionTable::new(),
            occupancy:  OccupancyIndex::new(),
            oracle:     self.oracle,
            evasion:    self.evasion,
            now:        Timestamp::ZERO,
        })
    }
}
