//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type of the crate. Illegal input from the
//! board UI is routine, so the public move API turns the move-rejection
//! variants into silent no-ops; the variants stay available to callers of the
//! `try_*` functions that want to know why a move was refused.
//!
//! Running out of moves and losing a king are not errors. They surface as an
//! [`Outcome`] from terminal detection.

use crate::game_state::chess_types::{Color, Outcome, Square};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Destination is not among the origin piece's candidate moves.
    #[error("illegal move from {from:?} to {to:?}")]
    IllegalMove { from: Square, to: Square },

    /// A move was attempted for the side that is not on turn.
    #[error("it is {actual}'s turn, not {expected}'s")]
    WrongTurn { expected: Color, actual: Color },

    /// The game already ended.
    #[error("game is over: {0}")]
    GameOver(Outcome),

    /// No piece stands on the origin square.
    #[error("no piece on {0:?}")]
    EmptySquare(Square),

    /// Coordinate text could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Opponent tier name could not be parsed.
    #[error("invalid tier: {0} (expected easy, medium or hard)")]
    InvalidTier(String),

    /// A command-line flag is missing its value or the value does not parse.
    #[error("invalid argument {flag}: {value:?}")]
    InvalidArgument { flag: String, value: String },

    /// A supplied position cannot be played from.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// An engine produced no usable move.
    #[error("engine failure: {0}")]
    EngineFailure(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

impl ChessError {
    /// True for the rejections a UI click can trigger.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            ChessError::IllegalMove { .. }
                | ChessError::WrongTurn { .. }
                | ChessError::GameOver(_)
                | ChessError::EmptySquare(_)
        )
    }
}
