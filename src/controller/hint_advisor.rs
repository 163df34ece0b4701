//! Move suggestions for the human side.
//!
//! A hint is the hard tier's choice for the human's color. Computing one never
//! touches the game state. Once shown, a hint stays visible for a fixed window
//! and then disappears; later moves or requests do not extend that window.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;

use crate::engines::engine_trait::choose_uniform;
use crate::engines::move_scoring::best_scoring_moves;
use crate::game_state::chess_rules::HINT_COLOR;
use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::move_generator::all_valid_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub from: Square,
    pub to: Square,
}

/// Best-scoring move for the human side, ties broken by `rng`.
pub fn hint<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<Hint> {
    if state.is_over() {
        return None;
    }

    let moves = all_valid_moves(HINT_COLOR, &state.board);
    let (score, best) = best_scoring_moves(&moves)?;
    let chosen = choose_uniform(&best, rng, "hint_advisor").ok()?;
    tracing::debug!(score, ties = best.len(), "hint computed");

    Some(Hint {
        from: chosen.from,
        to: chosen.to,
    })
}

#[derive(Debug, Clone, Copy)]
struct ShownHint {
    hint: Hint,
    shown_at: Instant,
}

pub struct HintAdvisor {
    rng: StdRng,
    window: Duration,
    shown: Option<ShownHint>,
}

impl HintAdvisor {
    pub fn new(rng: StdRng, window: Duration) -> Self {
        Self {
            rng,
            window,
            shown: None,
        }
    }

    /// Compute a hint and start its display window at `now`.
    pub fn request(&mut self, state: &GameState, now: Instant) -> Option<Hint> {
        let computed = hint(state, &mut self.rng);
        self.shown = computed.map(|hint| ShownHint {
            hint,
            shown_at: now,
        });
        computed
    }

    /// The highlighted hint at `now`, if its window has not elapsed.
    pub fn visible(&self, now: Instant) -> Option<Hint> {
        self.shown
            .filter(|shown| now.saturating_duration_since(shown.shown_at) < self.window)
            .map(|shown| shown.hint)
    }

    pub fn clear(&mut self) {
        self.shown = None;
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
