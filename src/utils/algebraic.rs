//! Square coordinate text conversions.
//!
//! Files `a..h` are columns 0..7; ranks `8..1` are rows 0..7, so White's
//! back rank (row 7) reads as rank 1.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Parse a coordinate such as `"e4"`.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    format!("{file_char}{rank_char}")
}

/// Parse a move typed as `"e2e4"`, `"e2 e4"` or `"e2-e4"`.
pub fn parse_move_text(text: &str) -> ChessResult<(Square, Square)> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidSquare(text.trim().to_owned()));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok((from, to))
}
