//! Raw move application on a board.
//!
//! Legality is the caller's concern; this only moves the piece, marks it as
//! moved and reports what was taken.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: Piece,
    pub captured: Option<Piece>,
}

pub fn apply_move_to_board(board: &mut Board, from: Square, to: Square) -> ChessResult<AppliedMove> {
    let piece = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    let captured = board.piece_at(to);

    board.set(to, Some(piece.moved()));
    board.set(from, None);

    Ok(AppliedMove { piece, captured })
}
