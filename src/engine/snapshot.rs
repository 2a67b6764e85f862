//! Saved engine state for resuming a battle.

use serde::{Deserialize, Serialize};

use crate::core::GameRngState;
use crate::grid::Grid;

/// Grid plus tile stream position.
///
/// Restoring with [`MatchEngine::resume`](super::MatchEngine::resume) and
/// replaying the same swaps reproduces every refill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub grid: Grid,
    pub rng: GameRngState,
}
