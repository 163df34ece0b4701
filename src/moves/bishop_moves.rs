use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::{slide, DIAGONAL_RAYS};

#[inline]
pub fn bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(board, from, color, &DIAGONAL_RAYS, out);
}
