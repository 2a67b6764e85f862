//! Battle session: the caller-side state around one engine.
//!
//! A session accumulates taps into swaps, adds chain points to the score,
//! and runs a timer that the caller advances. It never touches the grid
//! directly; everything goes through [`MatchEngine`].
//!
//! ```
//! use std::time::Duration;
//! use arena_match::core::SessionConfig;
//! use arena_match::session::{BattleSession, SessionStatus};
//!
//! let mut session = BattleSession::new(SessionConfig::default(), 42).unwrap();
//!
//! let (a, b) = session.engine().find_possible_move().unwrap();
//! session.tap(a).unwrap();
//! session.tap(b).unwrap();
//! assert!(session.score() >= 3);
//!
//! assert_eq!(session.advance(Duration::from_secs(60)), SessionStatus::TimedOut);
//! let outcome = session.finish();
//! assert_eq!(outcome.won, outcome.score > outcome.opponent_score);
//! ```

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{
    GameRng, GridError, GridResult, InvalidMove, Position, SessionConfig, TileSource,
};
use crate::engine::{MatchEngine, SwapResult};

/// What a single tap did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The cell is now selected, waiting for a second tap.
    Selected(Position),
    /// The selected cell was tapped again and released.
    Deselected,
    /// The second tap completed a swap.
    Swapped(SwapResult),
}

/// Timer state after advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running { remaining: Duration },
    TimedOut,
}

/// Final result of a battle, for the reward layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub score: u32,
    pub opponent_score: u32,
    pub won: bool,
    /// Accepted swaps.
    pub moves: u32,
    /// Deepest cascade of the session.
    pub best_combo: u32,
}

/// One timed battle over a single grid.
#[derive(Clone, Debug)]
pub struct BattleSession<S: TileSource = GameRng> {
    config: SessionConfig,
    engine: MatchEngine<S>,
    opponent_rng: GameRng,
    selected: Option<Position>,
    score: u32,
    moves: u32,
    last_combo: u32,
    best_combo: u32,
    elapsed: Duration,
}

impl BattleSession<GameRng> {
    /// Start a session with a fresh grid.
    ///
    /// Tiles and the opponent score draw from separate streams of `seed`.
    pub fn new(config: SessionConfig, seed: u64) -> GridResult<Self> {
        let rng = GameRng::new(seed);
        Self::with_source(config, rng.for_context("tiles"), rng.for_context("opponent"))
    }
}

impl<S: TileSource> BattleSession<S> {
    /// Start a session drawing tiles from `source`.
    pub fn with_source(config: SessionConfig, source: S, opponent_rng: GameRng) -> GridResult<Self> {
        config.validate()?;
        let engine = MatchEngine::with_source(config.grid.clone(), source)?;
        Self::from_engine(config, engine, opponent_rng)
    }

    /// Start a session around an existing engine.
    ///
    /// The engine's own config wins over `config.grid`.
    pub fn from_engine(
        mut config: SessionConfig,
        engine: MatchEngine<S>,
        opponent_rng: GameRng,
    ) -> GridResult<Self> {
        config.grid = engine.config().clone();
        config.validate()?;
        Ok(Self {
            config,
            engine,
            opponent_rng,
            selected: None,
            score: 0,
            moves: 0,
            last_combo: 0,
            best_combo: 0,
            elapsed: Duration::ZERO,
        })
    }

    /// The engine, for rendering and hints.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine<S> {
        &self.engine
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Accumulated points.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Cell waiting for a second tap.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Cascade depth reached by the most recent accepted swap.
    #[must_use]
    pub fn last_combo(&self) -> u32 {
        self.last_combo
    }

    /// Deepest cascade seen this session.
    #[must_use]
    pub fn best_combo(&self) -> u32 {
        self.best_combo
    }

    /// Accepted swaps so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Time played so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// True once the timer has run out.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.elapsed >= self.config.duration
    }

    /// Handle a tap on a cell.
    ///
    /// The first tap selects. Tapping the selection again releases it. A tap
    /// next to the selection swaps the two; any other tap moves the
    /// selection to the new cell.
    pub fn tap(&mut self, pos: Position) -> GridResult<TapOutcome> {
        self.ensure_running()?;
        if !self.engine.grid().contains(pos) {
            return Err(InvalidMove::OutOfBounds(pos).into());
        }

        match self.selected {
            None => {
                self.selected = Some(pos);
                Ok(TapOutcome::Selected(pos))
            }
            Some(prev) if prev == pos => {
                self.selected = None;
                Ok(TapOutcome::Deselected)
            }
            Some(prev) if prev.is_adjacent(pos) => {
                self.selected = None;
                let result = self.swap(prev, pos)?;
                Ok(TapOutcome::Swapped(result))
            }
            Some(_) => {
                self.selected = Some(pos);
                Ok(TapOutcome::Selected(pos))
            }
        }
    }

    /// Swap two cells directly (drag gesture).
    pub fn swap(&mut self, a: Position, b: Position) -> GridResult<SwapResult> {
        self.ensure_running()?;
        let result = self.engine.attempt_swap(a, b)?;
        if let SwapResult::Accepted(chain) = &result {
            self.score += chain.total_points;
            self.moves += 1;
            self.last_combo = chain.final_combo_depth;
            self.best_combo = self.best_combo.max(chain.final_combo_depth);
        }
        Ok(result)
    }

    /// Advance the session clock.
    pub fn advance(&mut self, elapsed: Duration) -> SessionStatus {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        match self.config.duration.checked_sub(self.elapsed) {
            Some(remaining) if !remaining.is_zero() => SessionStatus::Running { remaining },
            _ => {
                self.selected = None;
                SessionStatus::TimedOut
            }
        }
    }

    /// End the session and draw the opponent's score.
    pub fn finish(mut self) -> BattleOutcome {
        let opponent_score = self
            .opponent_rng
            .gen_range_inclusive(self.config.opponent_score.clone());
        let outcome = BattleOutcome {
            score: self.score,
            opponent_score,
            won: self.score > opponent_score,
            moves: self.moves,
            best_combo: self.best_combo,
        };
        debug!(
            "session finished: {} vs {} after {} moves",
            outcome.score, outcome.opponent_score, outcome.moves
        );
        outcome
    }

    fn ensure_running(&self) -> GridResult<()> {
        if self.is_over() {
            Err(GridError::SessionOver)
        } else {
            Ok(())
        }
    }
}
