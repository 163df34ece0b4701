//! Medium tier: prefers captures with a fixed probability, otherwise plays
//! a uniformly random candidate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{choose_uniform, Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::move_generator::{all_valid_moves, CandidateMove};

/// Chance of restricting the draw to captures when any exist.
pub const CAPTURE_PREFERENCE: f64 = 0.7;

pub struct CaptureBiasedEngine<R = StdRng> {
    rng: R,
}

impl<R: Rng + Send> CaptureBiasedEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl CaptureBiasedEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Engine for CaptureBiasedEngine<R> {
    fn name(&self) -> &str {
        "Capture-biased (medium)"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> ChessResult<EngineOutput> {
        let moves = all_valid_moves(side, board);
        let captures: Vec<CandidateMove> =
            moves.iter().copied().filter(CandidateMove::is_capture).collect();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string capture_biased_engine candidates {} captures {}",
            moves.len(),
            captures.len()
        ));

        if moves.is_empty() {
            return Ok(out);
        }

        let prefer_capture = self.rng.random_bool(CAPTURE_PREFERENCE);
        let pool = if prefer_capture && !captures.is_empty() {
            &captures
        } else {
            &moves
        };

        out.best_move = Some(choose_uniform(pool, &mut self.rng, "capture_biased_engine")?);
        Ok(out)
    }
}
