//! Static position evaluation.
//!
//! The evaluator returns a score relative to the side to move (positive is
//! good for the mover). Internally the score is accumulated White-positive
//! and negated at the end when Black is on move. Checkmated positions short
//! circuit to an absolute score of plus or minus [`MATE_SCORE`] for the
//! winner, bypassing that final negation.
//!
//! Scoring is material with a two-phase value table: once the combined
//! non-pawn, non-king material on the board drops to the endgame threshold,
//! pawns and rooks are re-valued and three endgame terms switch on (king
//! centralization, pawn advancement, king opposition).
//!
//! Beyond the default, [`EvalOptions`] can enable extra additive terms:
//! pawn structure, king safety, piece coordination, and piece-square
//! tables. All four are off in [`Evaluator::default`] and do not affect
//! the default score.

use crate::board_stack::attackers;
use chess::{get_king_moves, BitBoard, Board, BoardStatus, Color, Piece, Square, ALL_SQUARES};

/// Score for a delivered checkmate, positive for the winner.
pub const MATE_SCORE: i32 = 10_000;

/// Combined minor and major piece material at or below which a position
/// counts as an endgame.
const ENDGAME_MATERIAL_THRESHOLD: i32 = 2_600;

/// Standard centipawn piece values.
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 20_000,
    }
}

/// Endgame piece values: pawns and rooks gain, the rest keep their
/// standard value.
fn endgame_piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 150,
        Piece::Rook => 550,
        other => piece_value(other),
    }
}

/// Optional additive evaluation terms. All default to off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Doubled and isolated pawn penalties.
    pub pawn_structure: bool,
    /// King attacker penalty and close-defender bonus.
    pub king_safety: bool,
    /// Bishop pair and connected rook bonuses.
    pub piece_coordination: bool,
    /// Positional piece-square table bonuses.
    pub piece_square_tables: bool,
}

/// Static evaluator over a rules-engine board.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    /// Evaluator with every optional term disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator with the given optional terms enabled.
    pub fn with_options(options: EvalOptions) -> Self {
        Evaluator { options }
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    /// Score the position from the perspective of the side to move.
    pub fn evaluate(&self, board: &Board) -> i32 {
        if board.status() == BoardStatus::Checkmate {
            // Absolute score for the winner; not negated below.
            return if board.side_to_move() == Color::White {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
        }

        let endgame = is_endgame(board);
        let mut score = 0;

        for sq in ALL_SQUARES {
            let (piece, color) = match (board.piece_on(sq), board.color_on(sq)) {
                (Some(piece), Some(color)) => (piece, color),
                _ => continue,
            };

            let mut value = if endgame {
                endgame_piece_value(piece)
            } else {
                piece_value(piece)
            };

            if endgame {
                let rank = sq.get_rank().to_index() as i32;
                match piece {
                    Piece::King => value -= center_distance(sq) * 10,
                    Piece::Pawn => {
                        value += if color == Color::White {
                            rank * 20
                        } else {
                            (7 - rank) * 20
                        };
                    }
                    _ => {}
                }
            }

            if self.options.piece_square_tables {
                value += piece_square_bonus(piece, color, sq);
            }

            score += if color == Color::White { value } else { -value };
        }

        if endgame {
            // Reward the side to move for closing the distance between the
            // kings; shepherding the enemy king matters once material is low.
            let mover = board.side_to_move();
            let ours = board.king_square(mover);
            let theirs = board.king_square(!mover);
            let distance = manhattan(ours, theirs);
            score += if mover == Color::White {
                -distance * 10
            } else {
                distance * 10
            };
        }

        if self.options.pawn_structure {
            score += pawn_structure(board);
        }
        if self.options.king_safety {
            score += king_safety(board);
        }
        if self.options.piece_coordination {
            score += piece_coordination(board);
        }

        if board.side_to_move() == Color::White {
            score
        } else {
            -score
        }
    }
}

/// Whether the combined non-pawn, non-king material is at or below the
/// endgame threshold.
pub fn is_endgame(board: &Board) -> bool {
    let mut material = 0;
    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
        material += board.pieces(piece).popcnt() as i32 * piece_value(piece);
    }
    material <= ENDGAME_MATERIAL_THRESHOLD
}

/// Manhattan distance from the center of the board.
fn center_distance(sq: Square) -> i32 {
    let file = sq.get_file().to_index() as i32;
    let rank = sq.get_rank().to_index() as i32;
    ((2 * file - 7).abs() + (2 * rank - 7).abs()) / 2
}

fn manhattan(a: Square, b: Square) -> i32 {
    let df = a.get_file().to_index() as i32 - b.get_file().to_index() as i32;
    let dr = a.get_rank().to_index() as i32 - b.get_rank().to_index() as i32;
    df.abs() + dr.abs()
}

/// Doubled and isolated pawn penalties, White-positive.
pub fn pawn_structure(board: &Board) -> i32 {
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { -1 } else { 1 };
        let pawns = *board.pieces(Piece::Pawn) & *board.color_combined(color);

        let mut per_file = [0i32; 8];
        for sq in pawns {
            per_file[sq.get_file().to_index()] += 1;
        }

        let doubled: i32 = per_file.iter().map(|&n| (n - 1).max(0)).sum();
        score += sign * 20 * doubled;

        for (file, &n) in per_file.iter().enumerate() {
            if n == 0 {
                continue;
            }
            let left = file.checked_sub(1).map_or(0, |f| per_file[f]);
            let right = if file + 1 < 8 { per_file[file + 1] } else { 0 };
            if left == 0 && right == 0 {
                score += sign * 15 * n;
            }
        }
    }

    score
}

/// King attacker penalty plus a defender bonus over the king's 3x3 zone,
/// White-positive.
pub fn king_safety(board: &Board) -> i32 {
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        let king_sq = board.king_square(color);

        let attacker_count = attackers(board, king_sq, !color).popcnt() as i32;
        score -= sign * 50 * attacker_count;

        // The zone includes the king's own square, so the count is always
        // at least one.
        let zone = get_king_moves(king_sq) | BitBoard::from_square(king_sq);
        let defenders = (zone & *board.color_combined(color)).popcnt() as i32;
        score += sign * 20 * defenders;
    }

    score
}

/// Bishop pair and connected rook bonuses, White-positive.
pub fn piece_coordination(board: &Board) -> i32 {
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };

        let bishops = *board.pieces(Piece::Bishop) & *board.color_combined(color);
        if bishops.popcnt() >= 2 {
            score += sign * 50;
        }

        let rooks = *board.pieces(Piece::Rook) & *board.color_combined(color);
        let files: Vec<usize> = rooks.map(|sq| sq.get_file().to_index()).collect();
        if files.len() >= 2 && files.windows(2).any(|pair| pair[0] == pair[1]) {
            score += sign * 30;
        }
    }

    score
}

/// Positional bonus for a piece on a square, read from that piece's own
/// side of the board.
pub fn piece_square_bonus(piece: Piece, color: Color, sq: Square) -> i32 {
    let table: &[i32; 64] = match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_TABLE,
    };
    let rank = sq.get_rank().to_index();
    let file = sq.get_file().to_index();
    // Tables are written from White's point of view with the eighth rank
    // first; Black reads them mirrored.
    let index = match color {
        Color::White => (7 - rank) * 8 + file,
        Color::Black => rank * 8 + file,
    };
    table[index]
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];
