use crate::game_state::chess_types::{Board, Color, Square};

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One step in every direction. Attacked squares are not filtered: a king may
/// step next to an enemy piece and be captured on the following move.
pub fn king_moves(_board: &Board, from: Square, _color: Color, out: &mut Vec<Square>) {
    out.extend(
        KING_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col)),
    );
}
