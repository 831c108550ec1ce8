//! Stack of board states used as the search's scratch position.
//!
//! The search mutates a single exclusively-owned position via nested
//! push/pop pairs. Every `push` derives the successor state with the
//! [`chess`] crate's copy-make move application, so the matching `pop`
//! restores the previous state exactly; a position's hash before and after
//! any balanced sequence of operations is identical.
//!
//! All chess legality lives in the [`chess`] crate. This type only layers
//! the undo stack and a few lookups the search needs on top of it.

use chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square,
};
use std::str::FromStr;

/// Exclusively-owned search position with apply/undo discipline.
#[derive(Clone, Debug)]
pub struct BoardStack {
    stack: Vec<Board>,
}

impl Default for BoardStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStack {
    /// Stack holding the standard starting position.
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// Stack holding the given position.
    pub fn with_board(board: Board) -> Self {
        BoardStack { stack: vec![board] }
    }

    /// Stack holding the position described by a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, chess::Error> {
        Ok(Self::with_board(Board::from_str(fen)?))
    }

    /// The current position.
    pub fn current(&self) -> &Board {
        // The stack is never empty: construction seeds one board and pop
        // refuses to remove the root.
        &self.stack[self.stack.len() - 1]
    }

    /// Apply a move, pushing the successor position.
    pub fn push(&mut self, mv: ChessMove) {
        let next = self.current().make_move_new(mv);
        self.stack.push(next);
    }

    /// Undo the most recent `push`.
    pub fn pop(&mut self) {
        debug_assert!(self.stack.len() > 1, "pop without matching push");
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Canonical key for the current position, usable as a cache key.
    ///
    /// Delegates to the rules engine's Zobrist hash, which covers piece
    /// placement, side to move, castling rights, and the en-passant target.
    pub fn key(&self) -> u64 {
        self.current().get_hash()
    }

    pub fn side_to_move(&self) -> Color {
        self.current().side_to_move()
    }

    /// All legal moves for the current position, in generation order.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(self.current()).collect()
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.current().checkers().popcnt() > 0
    }

    pub fn is_checkmate(&self) -> bool {
        self.current().status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.current().status() == BoardStatus::Stalemate
    }

    /// Neither side retains enough material to mate (bare kings, or a lone
    /// minor piece against a bare king).
    pub fn is_insufficient_material(&self) -> bool {
        let board = self.current();
        let non_kings = *board.combined() ^ *board.pieces(Piece::King);
        match non_kings.popcnt() {
            0 => true,
            1 => {
                let minors = *board.pieces(Piece::Knight) | *board.pieces(Piece::Bishop);
                non_kings & minors == non_kings
            }
            _ => false,
        }
    }

    /// Terminal-state query: checkmate, stalemate, or a dead draw.
    pub fn is_game_over(&self) -> bool {
        self.current().status() != BoardStatus::Ongoing || self.is_insufficient_material()
    }

    /// Whether the move captures, including en passant (a pawn changing
    /// file onto an empty square).
    pub fn is_capture(&self, mv: ChessMove) -> bool {
        let board = self.current();
        if board.piece_on(mv.get_dest()).is_some() {
            return true;
        }
        board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
    }
}

/// Pieces of `by` that attack `sq` on the given board.
pub fn attackers(board: &Board, sq: Square, by: Color) -> BitBoard {
    let occupied = *board.combined();
    let rooks_queens = *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    let bishops_queens = *board.pieces(Piece::Bishop) | *board.pieces(Piece::Queen);

    // A pawn of `by` attacks sq exactly when a pawn of the other color on
    // sq would attack the pawn's square.
    let attacks = (get_knight_moves(sq) & *board.pieces(Piece::Knight))
        | (get_king_moves(sq) & *board.pieces(Piece::King))
        | (get_rook_moves(sq, occupied) & rooks_queens)
        | (get_bishop_moves(sq, occupied) & bishops_queens)
        | get_pawn_attacks(sq, !by, *board.pieces(Piece::Pawn));

    attacks & *board.color_combined(by)
}
