//! Iterative deepening driver.
//!
//! Re-runs the alpha-beta search at depth 1, 2, and so on up to the
//! configured maximum, keeping the best move of the deepest iteration that
//! produced one. The clock is checked only between iterations: a deep
//! iteration that has started runs to completion, and the loop stops once
//! the elapsed time exceeds the budget.

use crate::board_stack::BoardStack;
use crate::config::EngineConfig;
use crate::eval::Evaluator;
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::history::HistoryTable;
use crate::search::INFINITY;
use crate::transposition::TranspositionTable;
use chess::ChessMove;
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of an iterative deepening run.
#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    /// Best move of the deepest completed iteration that produced a move.
    pub best_move: Option<ChessMove>,
    /// Score attached to `best_move`.
    pub score: i32,
    /// Depth of the iteration that produced `best_move`.
    pub depth: u32,
    /// Nodes visited across all iterations.
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Run the search at increasing depths under a wall-clock budget.
pub fn iterative_deepening_search(
    board: &mut BoardStack,
    evaluator: &Evaluator,
    config: &EngineConfig,
    tt: &mut TranspositionTable,
    history: &HistoryTable,
    time_limit: Duration,
) -> SearchReport {
    let start = Instant::now();
    let mut nodes: u64 = 0;
    let mut best_move = None;
    let mut best_score = 0;
    let mut best_depth = 0;

    for depth in 1..=config.max_depth {
        let (score, iteration_move) = alpha_beta_search(
            board, evaluator, config, tt, history, depth, -INFINITY, INFINITY, true, &mut nodes,
        );

        // An iteration can come back without a move, for example when the
        // root position is answered from the cache; the previous
        // iteration's move is kept in that case.
        if let Some(mv) = iteration_move {
            best_move = Some(mv);
            best_score = score;
            best_depth = depth;
        }

        debug!(
            depth,
            score,
            nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search iteration complete"
        );

        if start.elapsed() > time_limit {
            debug!(depth, "time budget exhausted, stopping deepening");
            break;
        }
    }

    SearchReport {
        best_move,
        score: best_score,
        depth: best_depth,
        nodes,
        elapsed: start.elapsed(),
    }
}
