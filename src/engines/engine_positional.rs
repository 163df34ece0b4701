//! Hard tier: greedy one-ply positional scoring with random tie-breaking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{choose_uniform, Engine, EngineOutput};
use crate::engines::move_scoring::best_scoring_moves;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::move_generator::all_valid_moves;

pub struct PositionalEngine<R = StdRng> {
    rng: R,
}

impl<R: Rng + Send> PositionalEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl PositionalEngine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Engine for PositionalEngine<R> {
    fn name(&self) -> &str {
        "Positional (hard)"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> ChessResult<EngineOutput> {
        let moves = all_valid_moves(side, board);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string positional_engine candidates {}",
            moves.len()
        ));

        let Some((best_value, best_moves)) = best_scoring_moves(&moves) else {
            return Ok(out);
        };

        out.info_lines.push(format!(
            "info string positional_engine score {} ties {}",
            best_value,
            best_moves.len()
        ));
        out.best_move = Some(choose_uniform(&best_moves, &mut self.rng, "positional_engine")?);
        Ok(out)
    }
}
