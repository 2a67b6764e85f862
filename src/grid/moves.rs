//! Possible-move search.

use super::{find_matches, Grid};
use crate::core::Position;

/// Find the first adjacent swap that would produce a match.
///
/// Every cell is tentatively swapped with its right neighbour, then its
/// bottom neighbour, and the whole grid is rescanned after each swap.
/// Cells are visited row-major. The grid itself is not touched.
#[must_use]
pub fn find_possible_move(grid: &Grid) -> Option<(Position, Position)> {
    let mut scratch = grid.clone();

    for pos in grid.positions() {
        let neighbours = [pos.right(grid.cols()), pos.below(grid.rows())];
        for other in neighbours.into_iter().flatten() {
            scratch.swap(pos, other);
            let matched = !find_matches(&scratch).is_empty();
            scratch.swap(pos, other);
            if matched {
                return Some((pos, other));
            }
        }
    }

    None
}

/// True when at least one adjacent swap produces a match.
#[must_use]
pub fn has_possible_moves(grid: &Grid) -> bool {
    find_possible_move(grid).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_board() {
        // Checkerboard-like stripes: no swap can line up three.
        let grid = Grid::from_kinds(&[
            [0u8, 1, 2, 0],
            [1, 2, 0, 1],
            [2, 0, 1, 2],
        ])
        .unwrap();
        assert!(!has_possible_moves(&grid));
        assert_eq!(find_possible_move(&grid), None);
    }

    #[test]
    fn test_horizontal_move() {
        let grid = Grid::from_kinds(&[
            [0u8, 0, 1, 0],
            [1, 2, 3, 4],
        ])
        .unwrap();
        assert_eq!(
            find_possible_move(&grid),
            Some((Position::new(0, 2), Position::new(0, 3)))
        );
    }

    #[test]
    fn test_vertical_swap_completes_row() {
        let grid = Grid::from_kinds(&[
            [1u8, 2, 3],
            [4, 4, 5],
            [2, 3, 4],
        ])
        .unwrap();
        assert_eq!(
            find_possible_move(&grid),
            Some((Position::new(1, 2), Position::new(2, 2)))
        );
    }

    #[test]
    fn test_horizontal_swap_completes_column() {
        let grid = Grid::from_kinds(&[
            [1u8, 5, 2],
            [3, 5, 4],
            [5, 0, 1],
        ])
        .unwrap();
        assert_eq!(
            find_possible_move(&grid),
            Some((Position::new(2, 0), Position::new(2, 1)))
        );
    }

    #[test]
    fn test_search_leaves_grid_untouched() {
        let grid = Grid::from_kinds(&[
            [0u8, 0, 1, 0],
            [1, 2, 3, 4],
        ])
        .unwrap();
        let before = grid.clone();
        let _ = has_possible_moves(&grid);
        assert_eq!(grid, before);
    }
}
