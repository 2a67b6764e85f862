//! Core types: positions, tiles, RNG, configuration, errors.
//!
//! These are shared by the grid algorithms, the engine, and the session.

pub mod position;
pub mod tile;
pub mod rng;
pub mod config;
pub mod error;

pub use position::Position;
pub use tile::{Cell, TileKind};
pub use rng::{GameRng, GameRngState, ScriptedTiles, TileSource};
pub use config::{ComboBonus, GridConfig, RetryPolicy, SessionConfig};
pub use error::{GridError, GridResult, InvalidMove};
