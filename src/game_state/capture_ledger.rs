//! Captured-piece bookkeeping.
//!
//! Each list is keyed by the color of the piece that was removed, not by the
//! side that captured it: a captured white piece always lands in
//! `captured_white`.

use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::{Color, Piece};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureLedger {
    /// White pieces removed from the board.
    pub captured_white: Vec<Piece>,
    /// Black pieces removed from the board.
    pub captured_black: Vec<Piece>,
}

impl CaptureLedger {
    pub fn record(&mut self, captured: Piece) {
        match captured.color {
            Color::White => self.captured_white.push(captured),
            Color::Black => self.captured_black.push(captured),
        }
    }

    pub fn captured(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_white,
            Color::Black => &self.captured_black,
        }
    }

    pub fn total(&self) -> usize {
        self.captured_white.len() + self.captured_black.len()
    }

    /// Positive when White has taken more material than Black.
    pub fn material_balance(&self) -> i32 {
        let taken_by_white: i32 = self
            .captured_black
            .iter()
            .map(|p| piece_value(p.kind))
            .sum();
        let taken_by_black: i32 = self
            .captured_white
            .iter()
            .map(|p| piece_value(p.kind))
            .sum();
        taken_by_white - taken_by_black
    }
}
