//! Rule constants for this engine's simplified rule set.
//!
//! There is no check detection, castling, en passant or promotion; the game
//! ends when a king is captured or the side to move has no candidate move.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank order from column 0 to column 7.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_HOME_RANK: u8 = 6;
pub const BLACK_HOME_RANK: u8 = 1;

pub const HUMAN_COLOR: Color = Color::White;
pub const ENGINE_COLOR: Color = Color::Black;
pub const HINT_COLOR: Color = HUMAN_COLOR;

/// Row from which a pawn of `color` may double step.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => WHITE_HOME_RANK,
        Color::Black => BLACK_HOME_RANK,
    }
}

/// Row delta of a pawn step toward the opposing back rank.
#[inline]
pub const fn pawn_forward(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Material value in pawns.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
