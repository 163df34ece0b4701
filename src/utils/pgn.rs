//! PGN-style export of a game's move list.
//!
//! Movetext uses this engine's own notation (piece glyphs, no
//! disambiguation), so the output is meant for reading and archiving rather
//! than for import into strict PGN parsers.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_types::{Color, GameState, Outcome};

pub fn result_token(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        Some(Outcome::WhiteWins) => "1-0",
        Some(Outcome::BlackWins) => "0-1",
        Some(Outcome::Stalemate) => "1/2-1/2",
        None => "*",
    }
}

/// Seven-tag roster with today's date.
pub fn default_headers(state: &GameState) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "Human".to_owned());
    headers.insert("Black".to_owned(), "Computer".to_owned());
    headers.insert("Result".to_owned(), result_token(state.terminal).to_owned());
    headers
}

pub fn write_pgn(state: &GameState) -> String {
    write_pgn_with_headers(state, &default_headers(state))
}

pub fn write_pgn_with_headers(state: &GameState, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    // A game that opens with Black's move starts half a move in.
    let ply_offset = match state.initial_color {
        Color::White => 0,
        Color::Black => 1,
    };

    let mut movetext_parts = Vec::<String>::with_capacity(state.move_history.len() + 1);
    for (ply, record) in state.move_history.iter().enumerate() {
        let full_move = (ply + ply_offset) / 2 + 1;
        match record.player {
            Color::White => movetext_parts.push(format!("{full_move}. {}", record.notation)),
            Color::Black if ply == 0 => {
                movetext_parts.push(format!("{full_move}... {}", record.notation))
            }
            Color::Black => movetext_parts.push(record.notation.clone()),
        }
    }

    movetext_parts.push(result_token(state.terminal).to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
