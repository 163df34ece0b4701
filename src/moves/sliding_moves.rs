//! Ray tracing shared by the sliding pieces.
//!
//! A ray includes an enemy-occupied square and stops there; it stops before a
//! square holding a piece of the mover's own color.

use crate::game_state::chess_types::{Board, Color, Square};

pub const ORTHOGONAL_RAYS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_RAYS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    (d_row, d_col): (i32, i32),
    out: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        match board.piece_at(next) {
            None => out.push(next),
            Some(piece) => {
                if piece.color != color {
                    out.push(next);
                }
                break;
            }
        }
        current = next;
    }
}

pub fn slide(
    board: &Board,
    from: Square,
    color: Color,
    rays: &[(i32, i32)],
    out: &mut Vec<Square>,
) {
    for ray in rays {
        trace_ray(board, from, color, *ray, out);
    }
}
