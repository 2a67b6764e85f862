//! Column compaction and refill.

use serde::{Deserialize, Serialize};

use super::Grid;
use crate::core::{Position, TileKind, TileSource};

/// One tile moved down by gravity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileFall {
    pub from: Position,
    pub to: Position,
    pub kind: TileKind,
}

/// One empty cell filled with a fresh tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refill {
    pub pos: Position,
    pub kind: TileKind,
}

/// Let tiles fall into the empty cells below them.
///
/// Each column is walked bottom-up; every empty cell takes the nearest tile
/// above it. Relative order within a column is preserved and afterwards all
/// empty cells sit at the top of their column.
pub fn apply_gravity(grid: &mut Grid) -> Vec<TileFall> {
    let mut falls = Vec::new();

    for col in 0..grid.cols() {
        for row in (0..grid.rows()).rev() {
            let to = Position::new(row, col);
            if grid[to].is_some() {
                continue;
            }
            let source = (0..row)
                .rev()
                .map(|r| Position::new(r, col))
                .find(|&p| grid[p].is_some());
            // Nothing left above: the rest of the column is empty.
            let Some(from) = source else { break };
            if let Some(kind) = grid[from].take() {
                grid[to] = Some(kind);
                falls.push(TileFall { from, to, kind });
            }
        }
    }

    debug_assert!(is_compacted(grid));
    falls
}

/// True when no column has an empty cell below a tile.
#[must_use]
pub fn is_compacted(grid: &Grid) -> bool {
    (0..grid.cols()).all(|col| {
        let mut seen_tile = false;
        (0..grid.rows()).all(|row| {
            let filled = grid[Position::new(row, col)].is_some();
            let ok = filled || !seen_tile;
            seen_tile |= filled;
            ok
        })
    })
}

/// Fill every empty cell with a fresh tile.
///
/// Columns are filled left to right, each top to bottom. No match
/// avoidance is applied; new runs are picked up by the next scan.
pub fn refill<S: TileSource>(grid: &mut Grid, source: &mut S, tile_types: u8) -> Vec<Refill> {
    let mut refills = Vec::new();

    for col in 0..grid.cols() {
        for row in 0..grid.rows() {
            let pos = Position::new(row, col);
            if grid[pos].is_none() {
                let kind = source.next_tile(tile_types);
                grid[pos] = Some(kind);
                refills.push(Refill { pos, kind });
            }
        }
    }

    refills
}
