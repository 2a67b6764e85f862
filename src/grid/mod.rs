//! Tile grid storage and the pure algorithms over it.
//!
//! ## Layout
//!
//! `Grid` stores cells row-major. Row 0 is the top; gravity pulls toward
//! row `rows - 1`. A cell is `Some(TileKind)` or `None` (empty). Empty cells
//! only exist while a chain is resolving.
//!
//! ## Algorithms
//!
//! - [`find_matches`]: every cell in a horizontal or vertical run of 3+
//! - [`apply_gravity`] / [`refill`]: column compaction and top-up
//! - [`find_possible_move`]: exhaustive swap-and-check for a matching swap

mod gravity;
mod matches;
mod moves;

pub use gravity::{apply_gravity, is_compacted, refill, Refill, TileFall};
pub use matches::{find_matches, MatchSet, MIN_RUN};
pub use moves::{find_possible_move, has_possible_moves};

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::core::{Cell, GridError, GridResult, Position, TileKind};

/// A `rows × cols` grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty.
    #[must_use]
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a full grid from rows of raw kind values (top row first).
    ///
    /// ```
    /// use arena_match::grid::Grid;
    ///
    /// let grid = Grid::from_kinds(&[[0u8, 1, 2], [1, 2, 0]]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 3);
    /// ```
    pub fn from_kinds<R: AsRef<[u8]>>(rows: &[R]) -> GridResult<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(GridError::InvalidGrid("grid has no cells".to_string()));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            cells.extend(row.iter().map(|&k| Some(TileKind::new(k))));
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a position lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get a cell, or `None` if the position is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.offset(pos)])
    }

    /// Swap the contents of two cells.
    ///
    /// # Panics
    ///
    /// If either position is outside the grid.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (a, b) = (self.offset(a), self.offset(b));
        self.cells.swap(a, b);
    }

    /// Cells of one row, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Position::new(i / cols, i % cols))
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Flat index of `pos`.
    ///
    /// # Panics
    ///
    /// If `pos` is outside the grid. A column past the edge would otherwise
    /// alias a cell in the next row.
    fn offset(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "{} outside {}x{} grid", pos, self.rows, self.cols);
        pos.row * self.cols + pos.col
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}

impl std::fmt::Display for Grid {
    /// One line per row; kinds as numbers, empty cells as `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for (c, cell) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(kind) => write!(f, "{}", kind.raw())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(9, 6);
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.empty_count(), 54);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_from_kinds() {
        let grid = Grid::from_kinds(&[[0u8, 1], [2, 3], [4, 5]]).unwrap();
        assert!(grid.is_full());
        assert_eq!(grid[Position::new(2, 1)], Some(TileKind::new(5)));
        assert_eq!(grid.row(1), &[Some(TileKind::new(2)), Some(TileKind::new(3))]);
    }

    #[test]
    fn test_from_kinds_rejects_ragged() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 1, 2], vec![0, 1]];
        assert!(matches!(Grid::from_kinds(&rows), Err(GridError::InvalidGrid(_))));

        let none: Vec<Vec<u8>> = Vec::new();
        assert!(Grid::from_kinds(&none).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::empty(2, 2);
        assert_eq!(grid.get(Position::new(1, 1)), Some(None));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(0, 2)), None);
    }

    #[test]
    fn test_swap() {
        let mut grid = Grid::from_kinds(&[[0u8, 1]]).unwrap();
        grid.swap(Position::new(0, 0), Position::new(0, 1));
        assert_eq!(grid.row(0), &[Some(TileKind::new(1)), Some(TileKind::new(0))]);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::empty(2, 3);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[3], Position::new(1, 0));
        assert_eq!(positions[5], Position::new(1, 2));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::from_kinds(&[[0u8, 1], [2, 3]]).unwrap();
        grid[Position::new(0, 1)] = None;
        assert_eq!(grid.to_string(), "0 .\n2 3\n");
    }

    #[test]
    fn test_serde() {
        let grid = Grid::from_kinds(&[[0u8, 1, 2], [3, 4, 5]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, restored);
    }

    #[test]
    fn test_get_past_last_column() {
        let grid = Grid::from_kinds(&[[0u8, 1, 2], [3, 4, 5]]).unwrap();
        assert_eq!(grid.get(Position::new(0, 4)), None);
        assert_eq!(grid.get(Position::new(2, 0)), None);
    }

    #[test]
    #[should_panic(expected = "(0, 4) outside 2x3 grid")]
    fn test_index_past_last_column_panics() {
        let grid = Grid::from_kinds(&[[0u8, 1, 2], [3, 4, 5]]).unwrap();
        let _ = grid[Position::new(0, 4)];
    }

    #[test]
    #[should_panic(expected = "(0, 3) outside 2x3 grid")]
    fn test_swap_past_last_column_panics() {
        let mut grid = Grid::from_kinds(&[[0u8, 1, 2], [3, 4, 5]]).unwrap();
        grid.swap(Position::new(0, 0), Position::new(0, 3));
    }
}
