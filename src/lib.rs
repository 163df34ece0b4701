//! Crate root module declarations for the casual chess engine.
//!
//! This file exposes the board model, candidate move generation, opponent
//! engines, the turn controller and utility helpers so binaries, benches and
//! the board UI can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod capture_ledger;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_capture_biased;
    pub mod engine_positional;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod move_scoring;
    pub mod tier;
}

pub mod controller {
    pub mod game_api;
    pub mod hint_advisor;
    pub mod terminal;
    pub mod turn_controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod notation;
    pub mod pgn;
    pub mod render_game_state;
}
