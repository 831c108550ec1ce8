//! Engine boundary: difficulty-configured search with a hard "always move"
//! contract.

use crate::board_stack::BoardStack;
use crate::config::{Difficulty, EngineConfig};
use crate::eval::Evaluator;
use crate::search::history::HistoryTable;
use crate::search::iterative_deepening::iterative_deepening_search;
use crate::transposition::TranspositionTable;
use chess::{ChessMove, Piece, Rank};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Wall-clock budget for a single move decision.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Errors surfaced by [`Engine::get_best_move`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The position offers no legal move. Callers are expected to check
    /// game-over state before asking for a move.
    #[error("position has no legal moves")]
    NoLegalMoves,
}

/// A difficulty-configured search engine.
///
/// The transposition table and history table are created with the engine
/// and live for its entire lifetime; successive calls to
/// [`Engine::get_best_move`] share them.
pub struct Engine {
    config: EngineConfig,
    evaluator: Evaluator,
    transposition: TranspositionTable,
    history: HistoryTable,
    time_limit: Duration,
    nodes_searched: u64,
}

impl Engine {
    /// Engine fixed to a difficulty tier's configuration.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_config(EngineConfig::for_difficulty(difficulty))
    }

    /// Engine with an explicit configuration and the default evaluator.
    pub fn from_config(config: EngineConfig) -> Self {
        Self::from_parts(config, Evaluator::new())
    }

    /// Engine with an explicit configuration and evaluator.
    pub fn from_parts(config: EngineConfig, evaluator: Evaluator) -> Self {
        Engine {
            config,
            evaluator,
            transposition: TranspositionTable::new(),
            history: HistoryTable::new(),
            time_limit: DEFAULT_TIME_LIMIT,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nodes visited by the most recent [`Engine::get_best_move`] call.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Entries currently held by the transposition table.
    pub fn cached_positions(&self) -> usize {
        self.transposition.len()
    }

    /// Override the wall-clock budget for subsequent searches.
    pub fn set_time_limit(&mut self, time_limit: Duration) {
        self.time_limit = time_limit;
    }

    /// Pick a move for the side to move.
    ///
    /// Always returns a legal move when one exists: if the search comes
    /// back empty-handed, the first legal move in generation order is
    /// returned instead. A pawn push to the first or eighth rank is always
    /// rewritten to promote to a queen, whatever promotion the search
    /// chose. The position is left exactly as it was received.
    pub fn get_best_move(&mut self, board: &mut BoardStack) -> Result<ChessMove, EngineError> {
        let fallback = board
            .legal_moves()
            .into_iter()
            .next()
            .ok_or(EngineError::NoLegalMoves)?;

        let report = iterative_deepening_search(
            board,
            &self.evaluator,
            &self.config,
            &mut self.transposition,
            &self.history,
            self.time_limit,
        );
        self.nodes_searched = report.nodes;

        let chosen = match report.best_move {
            Some(mv) => mv,
            None => {
                warn!("search returned no move, falling back to first legal move");
                fallback
            }
        };

        Ok(force_queen_promotion(board, chosen))
    }
}

/// Rewrite a pawn push onto a final rank to a queen promotion.
fn force_queen_promotion(board: &BoardStack, mv: ChessMove) -> ChessMove {
    let moves_pawn = board.current().piece_on(mv.get_source()) == Some(Piece::Pawn);
    let final_rank = matches!(mv.get_dest().get_rank(), Rank::First | Rank::Eighth);
    if moves_pawn && final_rank {
        ChessMove::new(mv.get_source(), mv.get_dest(), Some(Piece::Queen))
    } else {
        mv
    }
}
