//! Heuristic move ordering.
//!
//! Good moves searched first make alpha-beta cutoffs happen sooner, so
//! legal moves are reordered by a cheap score before the search visits
//! them:
//!
//! - captures score ten times the victim's value minus the mover's value
//!   (most valuable victim, least valuable attacker);
//! - promotions add the promoted piece's value;
//! - the history table's bonus for the (from, to) pair is added when the
//!   history flag is on;
//! - moves that give check, found by a trial apply/undo, add 100.
//!
//! The sort is stable, so equally scored moves keep their legal-move
//! generation order. With ordering disabled the input comes back untouched.

use crate::board_stack::BoardStack;
use crate::config::EngineConfig;
use crate::eval::piece_value;
use crate::search::history::HistoryTable;
use chess::ChessMove;

/// Reorder legal moves, best heuristic score first.
pub fn order_moves(
    board: &mut BoardStack,
    history: &HistoryTable,
    config: &EngineConfig,
    moves: Vec<ChessMove>,
) -> Vec<ChessMove> {
    if !config.use_move_ordering {
        return moves;
    }

    let mut scored: Vec<(ChessMove, i32)> = moves
        .into_iter()
        .map(|mv| {
            let score = score_move(board, history, config, mv);
            (mv, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(mv, _)| mv).collect()
}

/// Heuristic ordering score for one move.
pub fn score_move(
    board: &mut BoardStack,
    history: &HistoryTable,
    config: &EngineConfig,
    mv: ChessMove,
) -> i32 {
    let mut score = 0;

    // En-passant captures land on an empty square and get no victim score.
    if let (Some(victim), Some(attacker)) = (
        board.current().piece_on(mv.get_dest()),
        board.current().piece_on(mv.get_source()),
    ) {
        score = 10 * piece_value(victim) - piece_value(attacker);
    }

    if let Some(promotion) = mv.get_promotion() {
        score += piece_value(promotion);
    }

    if config.use_history {
        score += history.score(mv);
    }

    board.push(mv);
    if board.is_check() {
        score += 100;
    }
    board.pop();

    score
}
