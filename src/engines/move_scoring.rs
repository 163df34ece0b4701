//! One-ply positional scoring used by the hard tier and the hint advisor.
//!
//! score = 10 * captured value + 2 * (7 - distance to center) + 5 for a
//! moving knight or bishop. The center is (3.5, 3.5), so the Manhattan
//! distance of any square is a whole number in `1..=7`.

use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::move_generator::CandidateMove;

pub const CAPTURE_WEIGHT: i32 = 10;
pub const CENTRALITY_WEIGHT: i32 = 2;
pub const MAX_CENTER_DISTANCE: i32 = 7;
pub const MINOR_PIECE_BONUS: i32 = 5;

#[inline]
pub fn center_distance(square: Square) -> i32 {
    let row = 2 * i32::from(square.row) - 7;
    let col = 2 * i32::from(square.col) - 7;
    (row.abs() + col.abs()) / 2
}

pub fn score_move(mv: &CandidateMove) -> i32 {
    let material = mv.captured.map_or(0, |p| piece_value(p.kind));
    let centrality = MAX_CENTER_DISTANCE - center_distance(mv.to);
    let minor = match mv.piece.kind {
        PieceKind::Knight | PieceKind::Bishop => MINOR_PIECE_BONUS,
        _ => 0,
    };
    CAPTURE_WEIGHT * material + CENTRALITY_WEIGHT * centrality + minor
}

/// All moves sharing the maximum score, in input order, with that score.
pub fn best_scoring_moves(moves: &[CandidateMove]) -> Option<(i32, Vec<CandidateMove>)> {
    let mut best_value = i32::MIN;
    let mut best_moves = Vec::new();

    for mv in moves {
        let value = score_move(mv);
        if value > best_value {
            best_value = value;
            best_moves.clear();
            best_moves.push(*mv);
        } else if value == best_value {
            best_moves.push(*mv);
        }
    }

    if best_moves.is_empty() {
        None
    } else {
        Some((best_value, best_moves))
    }
}
