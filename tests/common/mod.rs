//! Shared test utilities.

#![allow(dead_code)]

use chess::{Board, ChessMove, Square};
use osprey::BoardStack;
use std::collections::HashSet;
use std::str::FromStr;

/// Build a board from FEN, panicking on bad test data.
pub fn board_from_fen(fen: &str) -> Board {
    Board::from_str(fen).expect("test FEN should parse")
}

/// Build a board stack from FEN.
pub fn stack_from_fen(fen: &str) -> BoardStack {
    BoardStack::from_fen(fen).expect("test FEN should parse")
}

/// A move from coordinate names, for assertions.
pub fn mv(from: &str, to: &str) -> ChessMove {
    ChessMove::new(
        Square::from_str(from).unwrap(),
        Square::from_str(to).unwrap(),
        None,
    )
}

/// All legal moves of a position as a set.
pub fn legal_moves_set(stack: &BoardStack) -> HashSet<ChessMove> {
    stack.legal_moves().into_iter().collect()
}

/// Mirror a FEN: swap piece colors, flip ranks, flip the side to move, and
/// mirror castling rights and the en-passant rank.
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();

    let board = fields[0]
        .split('/')
        .rev()
        .map(|rank| rank.chars().map(swap_case).collect::<String>())
        .collect::<Vec<_>>()
        .join("/");

    let side = if fields[1] == "w" { "b" } else { "w" };

    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let mut rights: Vec<char> = fields[2].chars().map(swap_case).collect();
        rights.sort_by_key(|c| match c {
            'K' => 0,
            'Q' => 1,
            'k' => 2,
            _ => 3,
        });
        rights.into_iter().collect()
    };

    let ep = if fields[3] == "-" {
        "-".to_string()
    } else {
        let file = &fields[3][..1];
        let rank = if &fields[3][1..] == "3" { "6" } else { "3" };
        format!("{file}{rank}")
    };

    format!(
        "{} {} {} {} {} {}",
        board,
        side,
        castling,
        ep,
        fields.get(4).unwrap_or(&"0"),
        fields.get(5).unwrap_or(&"1"),
    )
}

fn swap_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

/// Standard test positions with known properties.
pub mod positions {
    pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    /// White mates with Re8.
    pub const MATE_IN_1_WHITE: &str = "6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1";
    /// White has been mated by the fool's mate queen on h4.
    pub const WHITE_CHECKMATED: &str =
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    /// Black has been mated on the back rank.
    pub const BLACK_CHECKMATED: &str = "4R1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1";
    /// Black to move is stalemated.
    pub const STALEMATE: &str = "k7/1R6/K7/8/8/8/8/8 b - - 0 1";
    /// Middlegame tactic: the g5 knight hangs to the h6 pawn.
    pub const KNIGHT_EN_PRISE: &str =
        "r1bqkb1r/ppp1n1p1/7p/3Pp1N1/2P5/8/PP3PPP/RNBQK2R w KQkq - 0 11";
    /// Same position with Black to move, so hxg5 is available.
    pub const KNIGHT_EN_PRISE_BLACK: &str =
        "r1bqkb1r/ppp1n1p1/7p/3Pp1N1/2P5/8/PP3PPP/RNBQK2R b KQkq - 0 11";
    /// White rook can win the undefended queen on d5.
    pub const FREE_QUEEN: &str = "k7/8/8/3q4/8/8/3R4/K7 w - - 0 1";
    /// White's only legal moves are promotions on h8.
    pub const FORCED_PROMOTION: &str = "4k3/7P/8/8/8/1q6/8/K7 w - - 0 1";
}
