//! Initial grid generation.
//!
//! Cells are filled row-major. A draw that would complete a run of three
//! with the two cells to its left, or the two cells above it, is redrawn.
//! Finished boards with no possible move are discarded whole.

use log::{debug, warn};

use crate::core::{GridConfig, GridError, GridResult, Position, TileKind, TileSource};
use crate::grid::{has_possible_moves, Grid};

/// Generate a settled, playable grid.
///
/// Gives up with [`GridError::GenerationExhausted`] once
/// `config.retry.max_board_attempts` boards have all been dead.
pub(crate) fn generate<S: TileSource>(config: &GridConfig, source: &mut S) -> GridResult<Grid> {
    let attempts = config.retry.max_board_attempts;

    for attempt in 1..=attempts {
        let grid = fill(config, source);
        if has_possible_moves(&grid) {
            if attempt > 1 {
                debug!("playable grid found on attempt {}", attempt);
            }
            return Ok(grid);
        }
        debug!("generated grid {} has no possible moves, regenerating", attempt);
    }

    Err(GridError::GenerationExhausted { attempts })
}

fn fill<S: TileSource>(config: &GridConfig, source: &mut S) -> Grid {
    let mut grid = Grid::empty(config.rows, config.cols);
    for row in 0..config.rows {
        for col in 0..config.cols {
            let pos = Position::new(row, col);
            grid[pos] = Some(draw_cell(&grid, pos, config, source));
        }
    }
    grid
}

fn draw_cell<S: TileSource>(
    grid: &Grid,
    pos: Position,
    config: &GridConfig,
    source: &mut S,
) -> TileKind {
    let mut kind = source.next_tile(config.tile_types);
    for _ in 0..config.retry.max_cell_redraws {
        if !completes_run(grid, pos, kind) {
            return kind;
        }
        kind = source.next_tile(config.tile_types);
    }
    if !completes_run(grid, pos, kind) {
        return kind;
    }

    // At most two kinds are blocked at any cell, so with three or more
    // kinds the scan always finds one.
    warn!("cell {} hit the redraw cap, scanning palette", pos);
    (0..config.tile_types)
        .map(TileKind::new)
        .find(|&k| !completes_run(grid, pos, k))
        .unwrap_or(kind)
}

/// Would placing `kind` at `pos` complete a run with the already-filled
/// cells to the left or above?
fn completes_run(grid: &Grid, pos: Position, kind: TileKind) -> bool {
    let same = |row: usize, col: usize| grid[Position::new(row, col)] == Some(kind);

    let left = pos.col >= 2 && same(pos.row, pos.col - 1) && same(pos.row, pos.col - 2);
    let above = pos.row >= 2 && same(pos.row - 1, pos.col) && same(pos.row - 2, pos.col);
    left || above
}
