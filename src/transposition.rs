//! Transposition cache for completed search results.
//!
//! Maps a canonical position key (the rules engine's Zobrist hash, covering
//! piece placement, side to move, castling rights, and en-passant target)
//! to the most recently computed score and best move for that position.
//!
//! Entries carry no depth tag and the table has no replacement policy: a
//! probe can return a result that was computed at a shallower depth than
//! the current request, and the table grows for as long as the engine
//! lives. Both behaviors are deliberate and pinned by tests; a search never
//! clears the table, though [`TranspositionTable::clear`] is available to
//! callers that want a fresh cache.

use chess::ChessMove;
use std::collections::HashMap;

/// Cached outcome of a completed search of one position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranspositionEntry {
    pub score: i32,
    pub best_move: Option<ChessMove>,
}

/// Position-keyed cache of search results.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    table: HashMap<u64, TranspositionEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached result for a position key.
    pub fn probe(&self, key: u64) -> Option<TranspositionEntry> {
        self.table.get(&key).copied()
    }

    /// Record the result for a position key, replacing any prior entry.
    pub fn store(&mut self, key: u64, score: i32, best_move: Option<ChessMove>) {
        self.table.insert(key, TranspositionEntry { score, best_move });
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{ChessMove, Square};
    use std::str::FromStr;

    fn mv(from: &str, to: &str) -> ChessMove {
        ChessMove::new(
            Square::from_str(from).unwrap(),
            Square::from_str(to).unwrap(),
            None,
        )
    }

    #[test]
    fn store_then_probe_round_trips() {
        let mut tt = TranspositionTable::new();
        tt.store(42, 150, Some(mv("e2", "e4")));

        let entry = tt.probe(42).expect("entry should be present");
        assert_eq!(entry.score, 150);
        assert_eq!(entry.best_move, Some(mv("e2", "e4")));
    }

    #[test]
    fn probe_misses_unknown_key() {
        let tt = TranspositionTable::new();
        assert!(tt.probe(7).is_none());
    }

    #[test]
    fn store_replaces_existing_entry() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 10, Some(mv("e2", "e4")));
        tt.store(1, -25, None);

        let entry = tt.probe(1).unwrap();
        assert_eq!(entry.score, -25);
        assert_eq!(entry.best_move, None);
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn entries_are_never_evicted() {
        let mut tt = TranspositionTable::new();
        for key in 0..10_000u64 {
            tt.store(key, key as i32, None);
        }
        assert_eq!(tt.len(), 10_000);
        assert!(tt.probe(0).is_some(), "oldest entry must survive");
    }

    #[test]
    fn clear_empties_the_table() {
        let mut tt = TranspositionTable::new();
        tt.store(9, 1, None);
        tt.clear();
        assert!(tt.is_empty());
    }
}
