use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    rook_moves(board, from, color, out);
    bishop_moves(board, from, color, out);
}
