//! Grid coordinates.
//!
//! Row 0 is the top of the grid. Gravity pulls tiles toward higher rows.

use serde::{Deserialize, Serialize};

/// A cell coordinate.
///
/// Ordering is row-major, which is also the order [`crate::grid::MatchSet`]
/// reports cells in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether two positions share an edge.
    ///
    /// Diagonal neighbours are not adjacent.
    ///
    /// ```
    /// use arena_match::core::Position;
    ///
    /// let p = Position::new(4, 2);
    /// assert!(p.is_adjacent(Position::new(4, 3)));
    /// assert!(p.is_adjacent(Position::new(3, 2)));
    /// assert!(!p.is_adjacent(Position::new(5, 3)));
    /// assert!(!p.is_adjacent(p));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// The neighbour to the right, if it exists in a grid with `cols` columns.
    #[must_use]
    pub fn right(self, cols: usize) -> Option<Position> {
        (self.col + 1 < cols).then(|| Position::new(self.row, self.col + 1))
    }

    /// The neighbour below, if it exists in a grid with `rows` rows.
    #[must_use]
    pub fn below(self, rows: usize) -> Option<Position> {
        (self.row + 1 < rows).then(|| Position::new(self.row + 1, self.col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
