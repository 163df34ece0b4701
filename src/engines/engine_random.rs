//! Easy tier: uniform random choice over all candidate moves.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{choose_uniform, Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::move_generator::all_valid_moves;

pub struct RandomEngine<R = StdRng> {
    rng: R,
}

impl<R: Rng + Send> RandomEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "Random (easy)"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> ChessResult<EngineOutput> {
        let moves = all_valid_moves(side, board);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine candidates {}",
            moves.len()
        ));

        if moves.is_empty() {
            return Ok(out);
        }

        out.best_move = Some(choose_uniform(&moves, &mut self.rng, "random_engine")?);
        Ok(out)
    }
}
