//! Core value types shared by every layer of the engine.
//!
//! Colors, piece kinds, squares and game outcomes are small `Copy` values so
//! the board, move generator and engines can pass them around freely.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side of a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind. Move generation dispatches on this with an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece standing on the board.
///
/// `has_moved` is written every time the piece moves but no rule reads it;
/// the pawn double step is derived from the home rank instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// A `(row, col)` board coordinate, both in `0..=7`.
///
/// Row 0 is Black's back rank, row 7 is White's. Fields are closed to other
/// crates so a square can only be built through the range-checked
/// constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub(crate) row: u8,
    pub(crate) col: u8,
}

impl Square {
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Build a square from in-range coordinates.
    ///
    /// Panics if either coordinate is outside `0..=7`; use [`Square::try_new`]
    /// for untrusted input.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates must be in 0..=7");
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step by `(d_row, d_col)`, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::try_new(i32::from(self.row) + d_row, i32::from(self.col) + d_col)
    }

    /// Iterate all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WhiteWins => write!(f, "White wins"),
            Outcome::BlackWins => write!(f, "Black wins"),
            Outcome::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// State-machine view of a [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    WhiteToMove,
    BlackToMove,
    Terminal(Outcome),
}

#[cfg(test)]
mod tests {
    use super::{Color, Square};

    #[test]
    fn offset_stays_on_board() {
        let a8 = Square::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn only_on_board_coordinates_become_squares() {
        assert_eq!(Square::try_new(8, 0), None);
        assert_eq!(Square::try_new(0, -1), None);
        let h1 = Square::try_new(7, 7).expect("h1 is on the board");
        assert_eq!((h1.row(), h1.col()), (7, 7));
        assert!(Square::all().all(|sq| sq.row() < 8 && sq.col() < 8));
    }

    #[test]
    #[should_panic(expected = "square coordinates must be in 0..=7")]
    fn new_rejects_off_board_rows() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[9], Square::new(1, 1));
        assert_eq!(squares[63], Square::new(7, 7));
    }

    #[test]
    fn opposite_color_flips() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    }
}
