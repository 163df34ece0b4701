//! Node counting over the candidate-move tree.
//!
//! Positions where a king has just been captured are counted as leaves but not
//! expanded, matching the engine's game-over rule.

use crate::game_state::chess_types::{Board, Color, PieceKind};
use crate::move_generation::move_generator::all_valid_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub king_captures: u64,
}

pub fn perft(board: &Board, side: Color, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    for mv in all_valid_moves(side, board) {
        let king_taken = mv.captured.is_some_and(|p| p.kind == PieceKind::King);

        if depth == 1 || king_taken {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            if king_taken {
                counts.king_captures += 1;
            }
            continue;
        }

        let mut next = *board;
        next.set(mv.to, Some(mv.piece.moved()));
        next.set(mv.from, None);

        let child = perft(&next, side.opposite(), depth - 1);
        counts.nodes += child.nodes;
        counts.captures += child.captures;
        counts.king_captures += child.king_captures;
    }

    counts
}
