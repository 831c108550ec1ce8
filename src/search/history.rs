//! History table for move ordering.
//!
//! A 64x64 accumulator indexed by (from square, to square). The move
//! orderer adds a move's accumulated bonus to its heuristic score when the
//! history flag is enabled.
//!
//! The search itself never writes to the table: ordering reads it, but no
//! code path feeds cutoffs back in, so its contribution stays zero over an
//! engine's lifetime. [`HistoryTable::update`] implements the usual
//! depth-squared reward and is the hook for a caller that wants the
//! heuristic live.

use chess::ChessMove;

/// Cumulative per-(from, to) ordering bonuses.
pub struct HistoryTable {
    table: [[i32; 64]; 64],
}

impl Default for HistoryTable {
    fn default() -> Self {
        HistoryTable {
            table: [[0; 64]; 64],
        }
    }
}

impl HistoryTable {
    /// Table with every bonus at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reward a move, weighted quadratically by the depth it was found at.
    pub fn update(&mut self, mv: ChessMove, depth: u32) {
        let bonus = (depth * depth) as i32;
        let from = mv.get_source().to_index();
        let to = mv.get_dest().to_index();
        self.table[from][to] = self.table[from][to].saturating_add(bonus);
    }

    /// Accumulated bonus for a move.
    pub fn score(&self, mv: ChessMove) -> i32 {
        self.table[mv.get_source().to_index()][mv.get_dest().to_index()]
    }

    /// Accumulated bonus for a (from, to) square pair.
    pub fn score_for_squares(&self, from: usize, to: usize) -> i32 {
        self.table[from][to]
    }

    /// Reset every bonus to zero.
    pub fn clear(&mut self) {
        self.table = [[0; 64]; 64];
    }
}
