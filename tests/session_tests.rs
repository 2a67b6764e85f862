//! Battle session integration tests.

use std::time::Duration;

use arena_match::core::{GridConfig, GridError, Position, SessionConfig};
use arena_match::engine::SwapResult;
use arena_match::session::{BattleSession, SessionStatus, TapOutcome};

/// Two taps on a hinted pair swap, score, and clear the selection.
#[test]
fn test_two_taps_make_a_move() {
    let mut session = BattleSession::new(SessionConfig::default(), 42).unwrap();
    let (a, b) = session.engine().find_possible_move().unwrap();

    assert_eq!(session.tap(a).unwrap(), TapOutcome::Selected(a));
    let outcome = session.tap(b).unwrap();

    match outcome {
        TapOutcome::Swapped(result) => {
            assert!(result.is_accepted());
            assert_eq!(session.score(), result.total_points());
        }
        other => panic!("expected a swap, got {:?}", other),
    }
    assert_eq!(session.selected(), None);
    assert_eq!(session.moves(), 1);
    assert!(session.engine().is_settled());
}

/// Score is the sum of every accepted chain's points.
#[test]
fn test_score_accumulates_over_session() {
    let mut session = BattleSession::new(SessionConfig::default(), 8).unwrap();
    let mut expected = 0;
    let mut deepest = 0;
    let mut last = 0;

    for _ in 0..50 {
        let (a, b) = session.engine().find_possible_move().unwrap();
        let result = session.swap(a, b).unwrap();
        let chain = result.chain().unwrap();
        expected += chain.total_points;
        deepest = deepest.max(chain.final_combo_depth);
        last = chain.final_combo_depth;
        session.advance(Duration::from_millis(500));
    }

    assert_eq!(session.score(), expected);
    assert_eq!(session.moves(), 50);
    assert_eq!(session.best_combo(), deepest);
    assert_eq!(session.last_combo(), last);
}

#[test]
fn test_rejected_tap_swap_keeps_score() {
    let mut session = BattleSession::new(SessionConfig::default(), 3).unwrap();
    let grid = session.engine().grid().clone();

    // Find an adjacent pair whose swap matches nothing.
    let (a, b) = grid
        .positions()
        .filter_map(|p| p.right(grid.cols()).map(|q| (p, q)))
        .find(|&(p, q)| {
            let mut probe = grid.clone();
            probe.swap(p, q);
            arena_match::grid::find_matches(&probe).is_empty()
        })
        .unwrap();

    session.tap(a).unwrap();
    let outcome = session.tap(b).unwrap();

    assert_eq!(outcome, TapOutcome::Swapped(SwapResult::Rejected));
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.engine().grid(), &grid);
}

#[test]
fn test_session_times_out() {
    let config = SessionConfig::default().with_duration(Duration::from_secs(30));
    let mut session = BattleSession::new(config, 1).unwrap();

    assert_eq!(
        session.advance(Duration::from_secs(10)),
        SessionStatus::Running {
            remaining: Duration::from_secs(20)
        }
    );
    assert_eq!(session.advance(Duration::from_secs(25)), SessionStatus::TimedOut);
    assert!(session.is_over());
    assert_eq!(session.elapsed(), Duration::from_secs(35));
    assert_eq!(session.tap(Position::new(0, 0)), Err(GridError::SessionOver));
}

#[test]
fn test_outcome_compares_scores() {
    // Opponent always scores exactly 3; one hinted move always beats or ties it.
    let config = SessionConfig::default().with_opponent_score(3..=3);
    let mut session = BattleSession::new(config, 12).unwrap();
    let (a, b) = session.engine().find_possible_move().unwrap();
    session.swap(a, b).unwrap();

    let score = session.score();
    let outcome = session.finish();

    assert_eq!(outcome.opponent_score, 3);
    assert_eq!(outcome.score, score);
    assert_eq!(outcome.won, score > 3);
}

#[test]
fn test_zero_score_loses() {
    let session = BattleSession::new(SessionConfig::default(), 4).unwrap();
    let outcome = session.finish();

    assert_eq!(outcome.score, 0);
    assert!(!outcome.won);
    assert!((10..=30).contains(&outcome.opponent_score));
}

#[test]
fn test_invalid_session_config() {
    let config = SessionConfig::default().with_grid(GridConfig::new(9, 6, 1));
    assert!(matches!(
        BattleSession::new(config, 0),
        Err(GridError::InvalidConfig(_))
    ));
}
