//! Match-3 grid engine.
//!
//! `MatchEngine` owns a grid and keeps it settled between calls:
//!
//! - no run of three or more anywhere
//! - no empty cells
//! - at least one swap that produces a match
//!
//! ## Example
//!
//! ```
//! use arena_match::core::GridConfig;
//! use arena_match::engine::{MatchEngine, SwapResult};
//!
//! let mut engine = MatchEngine::new(GridConfig::default(), 42).unwrap();
//!
//! // Every settled grid has a hint.
//! let (a, b) = engine.find_possible_move().unwrap();
//! let result = engine.attempt_swap(a, b).unwrap();
//!
//! if let SwapResult::Accepted(chain) = result {
//!     assert!(chain.total_points >= 3);
//! }
//! assert!(engine.is_settled());
//! ```

mod chain;
mod generator;
mod snapshot;

pub use chain::{ResolutionChain, ResolutionStep, SwapResult};
pub use snapshot::EngineSnapshot;

use log::{debug, trace, warn};

use crate::core::{GameRng, GridConfig, GridError, GridResult, InvalidMove, Position, TileSource};
use crate::grid::{self, Grid, MatchSet};

/// Match-3 engine over a single grid.
///
/// Generic over the tile source so replays and tests can script draws;
/// production code uses the seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct MatchEngine<S: TileSource = GameRng> {
    config: GridConfig,
    grid: Grid,
    source: S,
}

impl MatchEngine<GameRng> {
    /// Create an engine with a freshly generated grid.
    pub fn new(config: GridConfig, seed: u64) -> GridResult<Self> {
        Self::with_source(config, GameRng::new(seed))
    }

    /// Capture the grid and the tile stream position.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            grid: self.grid.clone(),
            rng: self.source.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Refills continue exactly where the snapshotted engine would have
    /// drawn next.
    pub fn resume(config: GridConfig, snapshot: &EngineSnapshot) -> GridResult<Self> {
        Self::from_grid(
            config,
            snapshot.grid.clone(),
            GameRng::from_state(&snapshot.rng),
        )
    }
}

impl<S: TileSource> MatchEngine<S> {
    /// Create an engine drawing tiles from `source`.
    pub fn with_source(config: GridConfig, mut source: S) -> GridResult<Self> {
        config.validate()?;
        let grid = generator::generate(&config, &mut source)?;
        Ok(Self {
            config,
            grid,
            source,
        })
    }

    /// Create an engine around an existing full grid.
    ///
    /// The grid must match the configured shape and palette. It is not
    /// required to be settled: a grid holding matches can be handed to
    /// [`resolve_chain`](Self::resolve_chain) directly.
    pub fn from_grid(config: GridConfig, grid: Grid, source: S) -> GridResult<Self> {
        config.validate()?;
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(GridError::InvalidGrid(format!(
                "grid is {}x{}, config expects {}x{}",
                grid.rows(),
                grid.cols(),
                config.rows,
                config.cols
            )));
        }
        for pos in grid.positions() {
            match grid[pos] {
                None => {
                    return Err(GridError::InvalidGrid(format!("cell {} is empty", pos)));
                }
                Some(kind) if kind.raw() >= config.tile_types => {
                    return Err(GridError::InvalidGrid(format!(
                        "cell {} holds {}, palette has {} kinds",
                        pos, kind, config.tile_types
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            config,
            grid,
            source,
        })
    }

    /// Replace the grid with a freshly generated one.
    pub fn initialize(&mut self) -> GridResult<&Grid> {
        self.grid = generator::generate(&self.config, &mut self.source)?;
        Ok(&self.grid)
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current grid state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells currently part of a match. Empty on a settled grid.
    #[must_use]
    pub fn find_matches(&self) -> MatchSet {
        grid::find_matches(&self.grid)
    }

    /// Check whether any adjacent swap produces a match.
    #[must_use]
    pub fn has_possible_moves(&self) -> bool {
        grid::has_possible_moves(&self.grid)
    }

    /// First adjacent swap that produces a match, if any.
    #[must_use]
    pub fn find_possible_move(&self) -> Option<(Position, Position)> {
        grid::find_possible_move(&self.grid)
    }

    /// Full, match-free, and playable.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.grid.is_full() && self.find_matches().is_empty() && self.has_possible_moves()
    }

    /// Swap two adjacent cells and resolve the result.
    ///
    /// Malformed requests fail with [`GridError::InvalidMove`] and leave the
    /// grid untouched. A swap that matches nothing is reverted and reported
    /// as [`SwapResult::Rejected`].
    ///
    /// If the cascade leaves a dead board and regeneration hits the board
    /// attempt cap, the error is returned and the grid is restored to its
    /// state before the swap. The tile source has still advanced.
    pub fn attempt_swap(&mut self, a: Position, b: Position) -> GridResult<SwapResult> {
        for pos in [a, b] {
            if !self.grid.contains(pos) {
                return Err(InvalidMove::OutOfBounds(pos).into());
            }
        }
        if !a.is_adjacent(b) {
            return Err(InvalidMove::NotAdjacent(a, b).into());
        }

        self.grid.swap(a, b);
        if self.find_matches().is_empty() {
            self.grid.swap(a, b);
            trace!("swap {} <-> {} rejected", a, b);
            return Ok(SwapResult::Rejected);
        }

        let mut before = self.grid.clone();
        before.swap(a, b);
        match self.resolve_chain() {
            Ok(chain) => Ok(SwapResult::Accepted(chain)),
            Err(err) => {
                warn!("swap {} <-> {} left no playable grid, reverting: {}", a, b, err);
                self.grid = before;
                Err(err)
            }
        }
    }

    /// Clear, drop, and refill until no match remains.
    ///
    /// If the settled grid has no possible move it is regenerated in full and
    /// the chain is marked `regenerated`. Fails only if regeneration hits the
    /// board attempt cap, in which case the dead grid is left in place.
    pub fn resolve_chain(&mut self) -> GridResult<ResolutionChain> {
        let mut chain = ResolutionChain::default();
        let mut matches = self.find_matches();
        let mut combo_depth = 0;

        while !matches.is_empty() {
            let cleared = matches.sorted();
            for &pos in &cleared {
                self.grid[pos] = None;
            }
            let falls = grid::apply_gravity(&mut self.grid);
            let refills = grid::refill(&mut self.grid, &mut self.source, self.config.tile_types);

            let points = cleared.len() as u32;
            let bonus = self.config.combo_bonus.bonus(combo_depth);
            trace!(
                "step {}: cleared {}, {} falls, {} refills, {}+{} points",
                combo_depth,
                cleared.len(),
                falls.len(),
                refills.len(),
                points,
                bonus
            );
            chain.push(ResolutionStep {
                combo_depth,
                cleared,
                falls,
                refills,
                points,
                bonus,
            });

            matches = self.find_matches();
            if !matches.is_empty() {
                combo_depth += 1;
            }
        }

        if !chain.is_empty() && !self.has_possible_moves() {
            debug!("grid has no possible moves after chain, regenerating");
            self.initialize()?;
            chain.regenerated = true;
        }

        Ok(chain)
    }
}
