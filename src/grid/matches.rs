//! Match detection.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::Grid;
use crate::core::{Cell, Position};

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

/// Deduplicated set of matched cells.
///
/// A cell where a horizontal and a vertical run cross appears once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    cells: FxHashSet<Position>,
}

impl MatchSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matched cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a cell is part of a match.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Matched cells in row-major order.
    #[must_use]
    pub fn sorted(&self) -> SmallVec<[Position; 8]> {
        let mut out: SmallVec<[Position; 8]> = self.cells.iter().copied().collect();
        out.sort_unstable();
        out
    }

    fn extend_run(&mut self, run: &[Position]) {
        if run.len() >= MIN_RUN {
            self.cells.extend(run.iter().copied());
        }
    }
}

/// Find every cell that belongs to a run of [`MIN_RUN`] or more.
///
/// Rows are scanned left to right, then columns top to bottom. Empty cells
/// never match.
#[must_use]
pub fn find_matches(grid: &Grid) -> MatchSet {
    let mut matches = MatchSet::new();

    for r in 0..grid.rows() {
        let line = (0..grid.cols()).map(|c| Position::new(r, c));
        collect_runs(grid, line, &mut matches);
    }
    for c in 0..grid.cols() {
        let line = (0..grid.rows()).map(|r| Position::new(r, c));
        collect_runs(grid, line, &mut matches);
    }

    matches
}

fn collect_runs(grid: &Grid, line: impl Iterator<Item = Position>, out: &mut MatchSet) {
    let mut run: SmallVec<[Position; 8]> = SmallVec::new();
    let mut run_cell: Cell = None;

    for pos in line {
        let cell = grid[pos];
        if cell.is_some() && cell == run_cell {
            run.push(pos);
            continue;
        }
        out.extend_run(&run);
        run.clear();
        run.push(pos);
        run_cell = cell;
    }
    out.extend_run(&run);
}
