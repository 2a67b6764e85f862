//! Engine and session configuration.
//!
//! - `GridConfig`: grid shape, palette size, scoring and retry policy
//! - `RetryPolicy`: bounds on the generation loops
//! - `ComboBonus`: whether cascade depth adds points
//! - `SessionConfig`: battle duration and opponent score range
//!
//! All configs follow the same pattern: `Default` gives the arena defaults,
//! `with_*` builders override single fields, `validate()` rejects values the
//! engine cannot work with.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GridError, GridResult};

/// Bonus points awarded per resolution step based on cascade depth.
///
/// The first clear of a chain has depth 0, each cascade after it adds one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComboBonus {
    /// One point per cleared cell, nothing else.
    #[default]
    Omit,
    /// Adds `min(depth * per_level, cap)` to each step.
    Capped { per_level: u32, cap: u32 },
}

impl ComboBonus {
    /// The arena's capped bonus: two points per level, at most ten.
    #[must_use]
    pub const fn arena() -> Self {
        ComboBonus::Capped {
            per_level: 2,
            cap: 10,
        }
    }

    /// Bonus for a step at the given cascade depth.
    #[must_use]
    pub fn bonus(self, depth: u32) -> u32 {
        match self {
            ComboBonus::Omit => 0,
            ComboBonus::Capped { per_level, cap } => depth.saturating_mul(per_level).min(cap),
        }
    }
}

/// Bounds on the generator's retry loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Redraws per cell before falling back to a palette scan.
    pub max_cell_redraws: u32,

    /// Whole boards generated before giving up on finding a playable one.
    pub max_board_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_cell_redraws: 64,
            max_board_attempts: 1_000,
        }
    }
}

/// Grid shape and rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (default 9).
    pub rows: usize,

    /// Number of columns (default 6).
    pub cols: usize,

    /// Palette size (default 6). At least 3, so a cell can always avoid
    /// completing both a horizontal and a vertical run.
    pub tile_types: u8,

    /// Cascade scoring.
    pub combo_bonus: ComboBonus,

    /// Generation retry bounds.
    pub retry: RetryPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 6,
            tile_types: 6,
            combo_bonus: ComboBonus::Omit,
            retry: RetryPolicy::default(),
        }
    }
}

impl GridConfig {
    /// Create a config with the given shape and palette.
    pub fn new(rows: usize, cols: usize, tile_types: u8) -> Self {
        Self {
            rows,
            cols,
            tile_types,
            ..Self::default()
        }
    }

    /// Set the combo bonus policy.
    #[must_use]
    pub fn with_combo_bonus(mut self, combo_bonus: ComboBonus) -> Self {
        self.combo_bonus = combo_bonus;
        self
    }

    /// Set the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the config is usable.
    pub fn validate(&self) -> GridResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.tile_types < 3 {
            return Err(GridError::InvalidConfig(format!(
                "need at least 3 tile types, got {}",
                self.tile_types
            )));
        }
        if self.retry.max_board_attempts == 0 {
            return Err(GridError::InvalidConfig(
                "max_board_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Battle session settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Grid rules.
    pub grid: GridConfig,

    /// Length of a battle.
    pub duration: Duration,

    /// Inclusive range the opponent's score is drawn from.
    pub opponent_score: RangeInclusive<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            duration: Duration::from_secs(60),
            opponent_score: 10..=30,
        }
    }
}

impl SessionConfig {
    /// Set the grid config.
    #[must_use]
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    /// Set the battle duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the opponent score range.
    #[must_use]
    pub fn with_opponent_score(mut self, range: RangeInclusive<u32>) -> Self {
        self.opponent_score = range;
        self
    }

    /// Check the config is usable.
    pub fn validate(&self) -> GridResult<()> {
        self.grid.validate()?;
        if self.duration.is_zero() {
            return Err(GridError::InvalidConfig(
                "session duration must be positive".to_string(),
            ));
        }
        if self.opponent_score.is_empty() {
            return Err(GridError::InvalidConfig(format!(
                "opponent score range {:?} is empty",
                self.opponent_score
            )));
        }
        Ok(())
    }
}
