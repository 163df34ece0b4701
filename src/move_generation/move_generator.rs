//! Candidate move generation.
//!
//! A candidate move is any destination produced by the piece's movement rule
//! that is not occupied by a piece of the mover's own color. No check-safety
//! filtering happens anywhere in the engine.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// A fully described candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl CandidateMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Destinations for the piece on `square`; empty when the square is empty.
pub fn candidate_moves(square: Square, board: &Board) -> Vec<Square> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, square, piece.color, &mut out),
        PieceKind::Knight => knight_moves(board, square, piece.color, &mut out),
        PieceKind::Bishop => bishop_moves(board, square, piece.color, &mut out),
        PieceKind::Rook => rook_moves(board, square, piece.color, &mut out),
        PieceKind::Queen => queen_moves(board, square, piece.color, &mut out),
        PieceKind::King => king_moves(board, square, piece.color, &mut out),
    }

    out.retain(|to| board.piece_at(*to).is_none_or(|p| p.color != piece.color));
    out
}

/// Every candidate move of `color`, origins scanned in row-major order.
pub fn all_valid_moves(color: Color, board: &Board) -> Vec<CandidateMove> {
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in board.pieces().filter(|(_, p)| p.color == color) {
        for to in candidate_moves(from, board) {
            moves.push(CandidateMove {
                from,
                to,
                piece,
                captured: board.piece_at(to),
            });
        }
    }
    moves
}

#[inline]
pub fn has_any_move(color: Color, board: &Board) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(from, _)| !candidate_moves(from, board).is_empty())
}
