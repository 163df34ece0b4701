//! Turn orchestration for a human-vs-engine game.
//!
//! The controller exclusively owns the [`GameState`], the opponent engine and
//! the hint advisor. A human move hands the turn to the engine; the engine's
//! reply is applied in one synchronous step whenever the caller asks for it,
//! typically after waiting out the configured cosmetic delay.

use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::controller::game_api;
use crate::controller::hint_advisor::{Hint, HintAdvisor};
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::ENGINE_COLOR;
use crate::game_state::chess_types::{GameState, Outcome, Square, TurnState};
use crate::move_generation::move_generator::CandidateMove;

/// What happened during one [`TurnController::play_turn`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub human_move_applied: bool,
    pub engine_move: Option<CandidateMove>,
    pub outcome: Option<Outcome>,
}

pub struct TurnController {
    state: GameState,
    engine: Box<dyn Engine>,
    hints: HintAdvisor,
    config: GameConfig,
}

impl TurnController {
    pub fn new(config: GameConfig) -> Self {
        let engine = config.tier.build_engine(config.engine_rng());
        Self::with_engine(config, engine)
    }

    /// Use a caller-supplied opponent instead of the configured tier.
    pub fn with_engine(config: GameConfig, engine: Box<dyn Engine>) -> Self {
        let hints = HintAdvisor::new(config.hint_rng(), config.hint_window);
        Self {
            state: game_api::new_game(),
            engine,
            hints,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    #[inline]
    pub fn turn_state(&self) -> TurnState {
        self.state.turn_state()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        game_api::outcome(&self.state)
    }

    /// Cosmetic pause a UI should show before calling [`Self::engine_reply`].
    #[inline]
    pub fn engine_reply_delay(&self) -> Duration {
        self.config.engine_reply_delay
    }

    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        game_api::legal_destinations(&self.state, square)
    }

    pub fn engine_to_move(&self) -> bool {
        self.state.terminal.is_none() && self.state.active_color == ENGINE_COLOR
    }

    /// Apply a human move. Returns `false` and leaves the game untouched when
    /// the move is rejected.
    pub fn human_move(&mut self, from: Square, to: Square) -> bool {
        match game_api::try_apply_human_move(&mut self.state, from, to) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "human move ignored");
                false
            }
        }
    }

    /// Apply exactly one engine move if it is the engine's turn.
    pub fn engine_reply(&mut self) -> ChessResult<Option<CandidateMove>> {
        if !self.engine_to_move() {
            return Ok(None);
        }
        game_api::try_apply_engine_move(&mut self.state, self.engine.as_mut())
    }

    /// Human move followed immediately by the engine's reply.
    pub fn play_turn(&mut self, from: Square, to: Square) -> ChessResult<TurnReport> {
        let human_move_applied = self.human_move(from, to);
        let engine_move = if human_move_applied {
            self.engine_reply()?
        } else {
            None
        };
        Ok(TurnReport {
            human_move_applied,
            engine_move,
            outcome: self.outcome(),
        })
    }

    pub fn request_hint(&mut self, now: Instant) -> Option<Hint> {
        self.hints.request(&self.state, now)
    }

    pub fn visible_hint(&self, now: Instant) -> Option<Hint> {
        self.hints.visible(now)
    }

    /// Discard the current game and start over with the same opponent.
    pub fn new_game(&mut self) {
        self.state = game_api::new_game();
        self.engine.new_game();
        self.hints.clear();
    }

    /// Take back the last full turn. Falls back to a fresh game if the
    /// recorded history cannot be replayed.
    pub fn undo(&mut self) {
        self.state = match game_api::undo(&self.state) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(%err, "undo replay failed; starting a new game");
                game_api::new_game()
            }
        };
        self.hints.clear();
    }

    /// Replace the game with an arbitrary position, e.g. for puzzles or tests.
    pub fn load_state(&mut self, state: GameState) -> ChessResult<()> {
        if state.board.find_king(state.active_color).is_none() && state.terminal.is_none() {
            return Err(ChessError::InvalidPosition(
                "the side to move has no king".to_owned(),
            ));
        }
        self.state = state;
        self.hints.clear();
        Ok(())
    }
}
