//! Quiescence search.
//!
//! A fixed-depth search that stops in the middle of a capture sequence
//! misjudges the position (the horizon effect). Instead of trusting the
//! static evaluation at depth zero, the search keeps following captures
//! until the position is quiet or the quiescence ply budget runs out.
//!
//! Negamax form: the stand-pat evaluation bounds the score from below for
//! the side to move, captures are tried in heuristic order, and each
//! recursion flips and negates the window. The depth counter starts at the
//! negated tier budget and counts up to zero.

use crate::board_stack::BoardStack;
use crate::config::EngineConfig;
use crate::eval::Evaluator;
use crate::search::history::HistoryTable;
use crate::search::ordering::order_moves;

/// Capture-only extension search. Returns a mover-relative score.
///
/// With quiescence disabled in the configuration this is exactly the
/// static evaluation, with no recursion.
pub fn quiescence_search(
    board: &mut BoardStack,
    evaluator: &Evaluator,
    config: &EngineConfig,
    history: &HistoryTable,
    mut alpha: i32,
    beta: i32,
    depth: i32,
) -> i32 {
    if !config.use_quiescence {
        return evaluator.evaluate(board.current());
    }

    let stand_pat = evaluator.evaluate(board.current());

    if depth == 0 {
        return stand_pat;
    }

    if stand_pat >= beta {
        return beta;
    }
    alpha = alpha.max(stand_pat);

    let legal = board.legal_moves();
    let moves = order_moves(board, history, config, legal);
    for mv in moves {
        if !board.is_capture(mv) {
            continue;
        }

        board.push(mv);
        let score = -quiescence_search(board, evaluator, config, history, -beta, -alpha, depth + 1);
        board.pop();

        if score >= beta {
            return beta;
        }
        alpha = alpha.max(score);
    }

    alpha
}
