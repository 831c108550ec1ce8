//! Tests for the capture-only quiescence extension.

mod common;

use common::{positions, stack_from_fen};
use osprey::search::{quiescence_search, HistoryTable, INFINITY};
use osprey::{BoardStack, Difficulty, EngineConfig, Evaluator};

fn setup() -> (Evaluator, HistoryTable) {
    (Evaluator::new(), HistoryTable::new())
}

#[test]
fn disabled_quiescence_is_the_static_evaluation() {
    let (evaluator, history) = setup();
    let config = EngineConfig::for_difficulty(Difficulty::Easy);
    let mut stack = stack_from_fen(positions::FREE_QUEEN);

    let score = quiescence_search(
        &mut stack, &evaluator, &config, &history, -INFINITY, INFINITY, -4,
    );
    assert_eq!(score, evaluator.evaluate(stack.current()));
}

#[test]
fn exhausted_budget_returns_stand_pat() {
    let (evaluator, history) = setup();
    let mut config = EngineConfig::for_difficulty(Difficulty::Medium);
    config.max_quiescence_depth = 0;
    let mut stack = stack_from_fen(positions::FREE_QUEEN);

    // Depth counter already at zero: no captures are searched even though
    // the rook could win the queen.
    let score = quiescence_search(
        &mut stack, &evaluator, &config, &history, -INFINITY, INFINITY, 0,
    );
    assert_eq!(score, evaluator.evaluate(stack.current()));
}

#[test]
fn stand_pat_fails_high_against_a_low_beta() {
    let (evaluator, history) = setup();
    let config = EngineConfig::for_difficulty(Difficulty::Medium);
    let mut stack = stack_from_fen(positions::FREE_QUEEN);

    let score = quiescence_search(
        &mut stack, &evaluator, &config, &history, -INFINITY, -1_000, -4,
    );
    assert_eq!(score, -1_000, "stand-pat above beta returns beta");
}

#[test]
fn winning_capture_is_resolved() {
    let (evaluator, history) = setup();
    let config = EngineConfig::for_difficulty(Difficulty::Medium);
    let mut stack = stack_from_fen(positions::FREE_QUEEN);

    let stand_pat = evaluator.evaluate(stack.current());
    let score = quiescence_search(
        &mut stack, &evaluator, &config, &history, -INFINITY, INFINITY, -4,
    );

    assert!(
        score > stand_pat,
        "winning the queen must beat standing pat: {score} vs {stand_pat}"
    );
    // Rook takes queen, and Black has no recapture: rook 550 plus the
    // opposition term for the side then on move.
    assert_eq!(score, 620);
}

#[test]
fn quiet_position_stands_pat() {
    let (evaluator, history) = setup();
    let config = EngineConfig::for_difficulty(Difficulty::Medium);
    let mut stack = BoardStack::new();

    let score = quiescence_search(
        &mut stack, &evaluator, &config, &history, -INFINITY, INFINITY, -4,
    );
    assert_eq!(score, evaluator.evaluate(stack.current()));
}

#[test]
fn position_is_restored_after_search() {
    let (evaluator, history) = setup();
    let config = EngineConfig::for_difficulty(Difficulty::Hard);
    let mut stack = stack_from_fen(positions::KNIGHT_EN_PRISE);
    let before = stack.key();

    quiescence_search(
        &mut stack, &evaluator, &config, &history, -INFINITY, INFINITY, -6,
    );
    assert_eq!(stack.key(), before);
}
