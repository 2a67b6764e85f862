//! Property tests for the settled-grid invariants.
//!
//! Seeds, grid shapes, palette sizes, and move sequences are generated; after
//! every engine call the grid must be full, match-free, and playable.

use proptest::prelude::*;

use arena_match::core::{GridConfig, Position};
use arena_match::engine::{MatchEngine, SwapResult};
use arena_match::grid;

fn assert_settled(engine: &MatchEngine) {
    let g = engine.grid();
    assert!(g.is_full());
    assert!(grid::find_matches(g).is_empty());
    assert!(grid::has_possible_moves(g));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_grids_are_settled(
        seed in any::<u64>(),
        rows in 3usize..10,
        cols in 3usize..10,
        tile_types in 4u8..8,
    ) {
        let engine = MatchEngine::new(GridConfig::new(rows, cols, tile_types), seed).unwrap();
        assert_settled(&engine);
    }

    #[test]
    fn swaps_keep_grid_settled(
        seed in any::<u64>(),
        rows in 4usize..9,
        cols in 4usize..9,
        tile_types in 4u8..7,
        moves in proptest::collection::vec((0usize..64, any::<bool>(), any::<bool>()), 1..30),
    ) {
        let mut engine = MatchEngine::new(GridConfig::new(rows, cols, tile_types), seed).unwrap();

        for (cell, vertical, use_hint) in moves {
            let (a, b) = if use_hint {
                engine.find_possible_move().unwrap()
            } else {
                let a = Position::new((cell / cols) % rows, cell % cols);
                let b = if vertical {
                    a.below(rows).unwrap_or_else(|| Position::new(a.row - 1, a.col))
                } else {
                    a.right(cols).unwrap_or_else(|| Position::new(a.row, a.col - 1))
                };
                (a, b)
            };

            let before = engine.grid().clone();
            match engine.attempt_swap(a, b).unwrap() {
                SwapResult::Rejected => {
                    prop_assert!(!use_hint);
                    prop_assert_eq!(engine.grid(), &before);
                }
                SwapResult::Accepted(chain) => {
                    prop_assert!(!chain.steps.is_empty());
                    prop_assert!(chain.total_points >= 3);
                    prop_assert_eq!(chain.final_combo_depth as usize, chain.steps.len() - 1);
                    let cleared: usize = chain.steps.iter().map(|s| s.cleared.len()).sum();
                    prop_assert_eq!(chain.total_points as usize, cleared);
                }
            }
            assert_settled(&engine);
        }
    }
}
