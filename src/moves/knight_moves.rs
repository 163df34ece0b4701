use crate::game_state::chess_types::{Board, Color, Square};

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knights jump; only board bounds limit them here. Same-color targets are
/// removed by the generator's post-filter.
pub fn knight_moves(_board: &Board, from: Square, _color: Color, out: &mut Vec<Square>) {
    out.extend(
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col)),
    );
}
