//! Session game state.
//!
//! `GameState` is the single owned record of a game in progress: the board,
//! whose turn it is, move bookkeeping and the terminal outcome. It is mutated
//! only by the turn controller's move application and replaced wholesale on
//! new game or undo.

use crate::game_state::board::Board;
use crate::game_state::capture_ledger::CaptureLedger;
use crate::game_state::chess_types::{Color, Outcome, Piece, Square, TurnState};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// 1-based ply number.
    pub number: u32,
    pub player: Color,
    pub notation: String,
    pub from: Square,
    pub to: Square,
}

/// Origin and destination of the most recent move, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub active_color: Color,
    pub move_count: u32,
    pub captures: CaptureLedger,
    pub move_history: Vec<MoveRecord>,
    pub last_move: Option<LastMove>,
    pub terminal: Option<Outcome>,
    /// Position the history is replayed from.
    pub initial_board: Board,
    pub initial_color: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position with White to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// Arbitrary position with empty history. Terminal detection is not run.
    pub fn from_board(board: Board, active_color: Color) -> Self {
        Self {
            board,
            active_color,
            move_count: 0,
            captures: CaptureLedger::default(),
            move_history: Vec::new(),
            last_move: None,
            terminal: None,
            initial_board: board,
            initial_color: active_color,
        }
    }

    /// Fresh copy of the position this game started from.
    pub fn restart(&self) -> Self {
        Self::from_board(self.initial_board, self.initial_color)
    }

    #[inline]
    pub fn captured_white(&self) -> &[Piece] {
        &self.captures.captured_white
    }

    #[inline]
    pub fn captured_black(&self) -> &[Piece] {
        &self.captures.captured_black
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.terminal.is_some()
    }

    pub fn turn_state(&self) -> TurnState {
        match (self.terminal, self.active_color) {
            (Some(outcome), _) => TurnState::Terminal(outcome),
            (None, Color::White) => TurnState::WhiteToMove,
            (None, Color::Black) => TurnState::BlackToMove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, Outcome, TurnState};

    #[test]
    fn new_game_starts_with_white_and_clean_books() {
        let state = GameState::new_game();
        assert_eq!(state.active_color, Color::White);
        assert_eq!(state.move_count, 0);
        assert!(state.move_history.is_empty());
        assert!(state.captured_white().is_empty());
        assert!(state.captured_black().is_empty());
        assert_eq!(state.last_move, None);
        assert_eq!(state.turn_state(), TurnState::WhiteToMove);
    }

    #[test]
    fn terminal_outcome_wins_over_active_color() {
        let mut state = GameState::new_game();
        state.active_color = Color::Black;
        assert_eq!(state.turn_state(), TurnState::BlackToMove);
        state.terminal = Some(Outcome::Stalemate);
        assert_eq!(state.turn_state(), TurnState::Terminal(Outcome::Stalemate));
        assert!(state.is_over());
    }
}
