//! Tile kinds and grid cells.

use serde::{Deserialize, Serialize};

/// One kind from the tile palette.
///
/// Kinds are opaque indices in `[0, tile_types)`. The presentation layer maps
/// them to icons; the engine only compares them for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Create a new tile kind.
    #[must_use]
    pub const fn new(kind: u8) -> Self {
        Self(kind)
    }

    /// Get the raw kind value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the kind as a palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A grid cell: a tile, or `None` while a chain is mid-resolution.
pub type Cell = Option<TileKind>;
