//! # arena-match
//!
//! Match-3 grid engine for the arena battle mini-game.
//!
//! ## Design Principles
//!
//! 1. **Always settled**: Between calls the grid holds no match, no empty
//!    cell, and at least one matching swap. Dead boards are regenerated.
//!
//! 2. **Synchronous chains**: A swap resolves its entire cascade in one
//!    call. Presentation code replays the returned steps at its own pace.
//!
//! 3. **Deterministic**: All tiles come from a seeded [`TileSource`], so a
//!    seed reproduces a whole session.
//!
//! ## Modules
//!
//! - `core`: Positions, tiles, RNG, configuration, errors
//! - `grid`: Grid storage, match scan, gravity, move search
//! - `engine`: `MatchEngine`, swap and cascade resolution
//! - `session`: Tap input, score, and timer around one engine

pub mod core;
pub mod grid;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cell, TileKind, Position,
    GameRng, GameRngState, ScriptedTiles, TileSource,
    GridConfig, RetryPolicy, ComboBonus, SessionConfig,
    GridError, GridResult, InvalidMove,
};

pub use crate::grid::{Grid, MatchSet, TileFall, Refill};

pub use crate::engine::{MatchEngine, EngineSnapshot, SwapResult, ResolutionChain, ResolutionStep};

pub use crate::session::{BattleSession, BattleOutcome, SessionStatus, TapOutcome};
