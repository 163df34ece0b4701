//! Move notation.
//!
//! Pawn moves show only the destination; other pieces are prefixed with their
//! Unicode glyph. Captures add `x`. There is no disambiguation and no check,
//! castling or promotion markers.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

pub fn piece_glyph(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

pub fn move_notation(piece: Piece, _from: Square, to: Square, captured: Option<Piece>) -> String {
    let mut out = String::with_capacity(8);
    if piece.kind != PieceKind::Pawn {
        out.push(piece_glyph(piece.color, piece.kind));
    }
    if captured.is_some() {
        out.push('x');
    }
    out.push_str(&square_to_algebraic(to));
    out
}
