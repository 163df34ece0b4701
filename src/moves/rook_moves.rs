use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::{slide, ORTHOGONAL_RAYS};

#[inline]
pub fn rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(board, from, color, &ORTHOGONAL_RAYS, out);
}
