//! Deterministic random number generation for tile draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards and refills
//! - **Context streams**: Independent sequences for tiles vs opponent score
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use arena_match::core::{GameRng, TileSource};
//!
//! let rng = GameRng::new(42);
//! let mut tiles = rng.for_context("tiles");
//! let mut opponent = rng.for_context("opponent");
//!
//! // Streams are independent but reproducible from the same seed.
//! let mut tiles2 = GameRng::new(42).for_context("tiles");
//! assert_eq!(tiles.next_tile(6), tiles2.next_tile(6));
//! let _ = opponent.gen_range_inclusive(10..=30);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use super::tile::TileKind;

/// Source of fresh tile kinds for generation and refill.
///
/// The engine draws every tile through this trait. [`GameRng`] is the
/// production source; tests can script exact refill sequences.
pub trait TileSource {
    /// Draw a kind uniformly from `[0, tile_types)`.
    fn next_tile(&mut self, tile_types: u8) -> TileKind;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random u32 in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Get the current state for checkpointing (see `MatchEngine::snapshot`).
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl TileSource for GameRng {
    fn next_tile(&mut self, tile_types: u8) -> TileKind {
        TileKind::new(self.inner.gen_range(0..tile_types))
    }
}

/// Tile source that replays a fixed sequence, then falls back to a seeded RNG.
///
/// Used to reproduce a recorded chain exactly (feed it the refills from a
/// `ResolutionChain`), and by tests that need a specific cascade.
#[derive(Clone, Debug)]
pub struct ScriptedTiles {
    queue: VecDeque<TileKind>,
    fallback: GameRng,
}

impl ScriptedTiles {
    /// Create a source that yields `kinds` in order before drawing from `fallback`.
    pub fn new(kinds: impl IntoIterator<Item = u8>, fallback: GameRng) -> Self {
        Self {
            queue: kinds.into_iter().map(TileKind::new).collect(),
            fallback,
        }
    }

    /// Scripted tiles not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl TileSource for ScriptedTiles {
    fn next_tile(&mut self, tile_types: u8) -> TileKind {
        match self.queue.pop_front() {
            Some(kind) => kind,
            None => self.fallback.next_tile(tile_types),
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many tiles have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
