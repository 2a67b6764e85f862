//! Error types for grid and session operations.

use thiserror::Error;

use super::Position;

/// Why a swap request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// The position lies outside the grid.
    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    /// The two positions do not share an edge.
    #[error("positions {0} and {1} are not adjacent")]
    NotAdjacent(Position, Position),
}

/// Errors surfaced by the engine and session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A swap request was malformed. The grid is unchanged.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied grid does not fit the configuration.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// No playable board was found within the attempt cap.
    #[error("no playable grid after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    /// The session timer has run out.
    #[error("session is over")]
    SessionOver,
}

/// Result type used throughout the crate.
pub type GridResult<T> = Result<T, GridError>;
