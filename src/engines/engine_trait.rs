//! Opponent policy abstraction.
//!
//! Every tier implements [`Engine`] so the turn controller, the hint advisor
//! and the match harness can drive any of them through one interface.
//! Engines only read the board; they never mutate game state.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::move_generator::CandidateMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` only when the side has no candidate move.
    pub best_move: Option<CandidateMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, side: Color) -> ChessResult<EngineOutput>;
}

/// Uniform pick from a non-empty slice.
pub(crate) fn choose_uniform<R: Rng + ?Sized>(
    moves: &[CandidateMove],
    rng: &mut R,
    engine: &str,
) -> ChessResult<CandidateMove> {
    moves
        .choose(rng)
        .copied()
        .ok_or_else(|| ChessError::EngineFailure(format!("{engine} had nothing to choose from")))
}
