//! Depth-limited minimax search with alpha-beta pruning.

use crate::board_stack::BoardStack;
use crate::config::EngineConfig;
use crate::eval::Evaluator;
use crate::search::history::HistoryTable;
use crate::search::ordering::order_moves;
use crate::search::quiescence::quiescence_search;
use crate::search::INFINITY;
use crate::transposition::TranspositionTable;
use chess::ChessMove;

/// Search the position to the given depth and return the score together
/// with the best move found, if any.
///
/// The maximizing flag selects which side of the (alpha, beta) window this
/// node tightens; callers start with `true` at the root. Leaf nodes (depth
/// zero or game over) are scored by the quiescence extension, or by the
/// static evaluator when quiescence is off, and carry no move.
///
/// When transposition caching is on, any position already in the table is
/// answered from it verbatim. Entries are not depth-tagged, so a hit may
/// reflect a shallower search than requested; that staleness is an accepted
/// property of the cache.
///
/// `nodes` counts every node visited, for diagnostics.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta_search(
    board: &mut BoardStack,
    evaluator: &Evaluator,
    config: &EngineConfig,
    tt: &mut TranspositionTable,
    history: &HistoryTable,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> (i32, Option<ChessMove>) {
    *nodes += 1;

    let key = board.key();
    if config.use_transposition && depth > 0 {
        if let Some(entry) = tt.probe(key) {
            return (entry.score, entry.best_move);
        }
    }

    if depth == 0 || board.is_game_over() {
        let score = quiescence_search(
            board,
            evaluator,
            config,
            history,
            alpha,
            beta,
            -(config.max_quiescence_depth as i32),
        );
        return (score, None);
    }

    let legal = board.legal_moves();
    let moves = order_moves(board, history, config, legal);
    let mut best_move = None;

    let best_score = if maximizing {
        let mut best_score = -INFINITY;
        for mv in moves {
            board.push(mv);
            let (score, _) = alpha_beta_search(
                board, evaluator, config, tt, history, depth - 1, alpha, beta, false, nodes,
            );
            board.pop();

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = INFINITY;
        for mv in moves {
            board.push(mv);
            let (score, _) = alpha_beta_search(
                board, evaluator, config, tt, history, depth - 1, alpha, beta, true, nodes,
            );
            board.pop();

            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    };

    if config.use_transposition {
        tt.store(key, best_score, best_move);
    }

    (best_score, best_move)
}
