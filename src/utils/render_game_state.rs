//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (Black's back rank, rank 8) is printed first so White sits at the
//! bottom, as on a physical board.

use crate::game_state::chess_types::{Board, GameState, Piece, Square};
use crate::utils::notation::piece_glyph;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_glyph(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus captured pieces and the side to move.
pub fn render_game_state(state: &GameState) -> String {
    let glyphs = |pieces: &[Piece]| -> String {
        pieces
            .iter()
            .map(|p| piece_glyph(p.color, p.kind))
            .collect()
    };

    let mut out = render_board(&state.board);
    out.push('\n');
    out.push_str(&format!("captured white: {}\n", glyphs(state.captured_white())));
    out.push_str(&format!("captured black: {}\n", glyphs(state.captured_black())));
    match state.terminal {
        Some(outcome) => out.push_str(&format!("result: {outcome}")),
        None => out.push_str(&format!("{} to move", state.active_color)),
    }
    out
}
