//! Game-over detection.
//!
//! There is no check detection. A game ends when a king has been captured or
//! when the side about to move has no candidate move at all.

use crate::game_state::chess_types::{Board, Color, Outcome};
use crate::move_generation::move_generator::has_any_move;

/// Evaluate the position with `player` about to move.
pub fn detect_outcome(board: &Board, player: Color) -> Option<Outcome> {
    if board.find_king(Color::White).is_none() {
        return Some(Outcome::BlackWins);
    }
    if board.find_king(Color::Black).is_none() {
        return Some(Outcome::WhiteWins);
    }
    if !has_any_move(player, board) {
        return Some(Outcome::Stalemate);
    }
    None
}
