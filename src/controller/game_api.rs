//! In-process game API consumed by the board UI.
//!
//! The plain functions (`apply_human_move`, `apply_engine_move`) take a state
//! and hand back the next one; rejected input leaves it unchanged. The
//! `try_*` variants report why a move was refused.

use crate::controller::terminal::detect_outcome;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{ENGINE_COLOR, HUMAN_COLOR};
use crate::game_state::chess_types::{Color, GameState, Outcome, Square};
use crate::game_state::game_state::{LastMove, MoveRecord};
use crate::move_generation::move_apply::apply_move_to_board;
use crate::move_generation::move_generator::{candidate_moves, CandidateMove};
use crate::utils::notation::move_notation;

pub use crate::controller::hint_advisor::{hint, Hint};

pub fn new_game() -> GameState {
    tracing::info!("new game");
    GameState::new_game()
}

/// Destinations to highlight for the piece on `square`.
///
/// Only the human's own pieces on the human's turn have destinations, so
/// every highlighted square is accepted by [`apply_human_move`].
pub fn legal_destinations(state: &GameState, square: Square) -> Vec<Square> {
    if state.is_over() || state.active_color != HUMAN_COLOR {
        return Vec::new();
    }
    match state.board.piece_at(square) {
        Some(piece) if piece.color == HUMAN_COLOR => candidate_moves(square, &state.board),
        _ => Vec::new(),
    }
}

#[inline]
pub fn outcome(state: &GameState) -> Option<Outcome> {
    state.terminal
}

/// Validate and apply a move for the side on turn.
pub fn try_apply_move(state: &mut GameState, from: Square, to: Square) -> ChessResult<&MoveRecord> {
    if let Some(outcome) = state.terminal {
        return Err(ChessError::GameOver(outcome));
    }

    let piece = state
        .board
        .piece_at(from)
        .ok_or(ChessError::EmptySquare(from))?;
    if piece.color != state.active_color {
        return Err(ChessError::WrongTurn {
            expected: piece.color,
            actual: state.active_color,
        });
    }
    if !candidate_moves(from, &state.board).contains(&to) {
        return Err(ChessError::IllegalMove { from, to });
    }

    commit_move(state, from, to)
}

fn commit_move(state: &mut GameState, from: Square, to: Square) -> ChessResult<&MoveRecord> {
    let mover = state.active_color;
    let notation = {
        let piece = state
            .board
            .piece_at(from)
            .ok_or(ChessError::EmptySquare(from))?;
        move_notation(piece, from, to, state.board.piece_at(to))
    };

    let applied = apply_move_to_board(&mut state.board, from, to)?;
    if let Some(captured) = applied.captured {
        state.captures.record(captured);
    }

    state.move_count += 1;
    state.last_move = Some(LastMove { from, to });
    state.active_color = mover.opposite();
    state.terminal = detect_outcome(&state.board, state.active_color);

    tracing::debug!(ply = state.move_count, player = %mover, notation = %notation, "move applied");
    if let Some(outcome) = state.terminal {
        tracing::info!(%outcome, plies = state.move_count, "game over");
    }

    state.move_history.push(MoveRecord {
        number: state.move_count,
        player: mover,
        notation,
        from,
        to,
    });
    state
        .move_history
        .last()
        .ok_or_else(|| ChessError::EngineFailure("move history is empty".to_owned()))
}

pub fn try_apply_human_move(state: &mut GameState, from: Square, to: Square) -> ChessResult<()> {
    if let Some(outcome) = state.terminal {
        return Err(ChessError::GameOver(outcome));
    }
    if state.active_color != HUMAN_COLOR {
        return Err(ChessError::WrongTurn {
            expected: HUMAN_COLOR,
            actual: state.active_color,
        });
    }
    try_apply_move(state, from, to).map(|_| ())
}

/// Apply a human move, or return the state unchanged if it is rejected.
pub fn apply_human_move(mut state: GameState, from: Square, to: Square) -> GameState {
    if let Err(err) = try_apply_human_move(&mut state, from, to) {
        tracing::debug!(%err, "human move ignored");
    }
    state
}

/// Let `engine` choose and apply one move for whichever side is on turn.
///
/// When the side has no candidate move the game is marked terminal and
/// `Ok(None)` is returned.
pub fn play_engine_turn(
    state: &mut GameState,
    engine: &mut dyn Engine,
) -> ChessResult<Option<CandidateMove>> {
    if let Some(outcome) = state.terminal {
        return Err(ChessError::GameOver(outcome));
    }

    let side = state.active_color;
    let output = engine.choose_move(&state.board, side)?;
    for line in &output.info_lines {
        tracing::trace!(engine = engine.name(), "{line}");
    }

    let Some(chosen) = output.best_move else {
        let outcome = detect_outcome(&state.board, side).unwrap_or(Outcome::Stalemate);
        tracing::info!(%outcome, "engine has no move");
        state.terminal = Some(outcome);
        return Ok(None);
    };

    try_apply_move(state, chosen.from, chosen.to).map_err(|err| {
        ChessError::EngineFailure(format!("{} proposed a rejected move: {err}", engine.name()))
    })?;
    Ok(Some(chosen))
}

pub fn try_apply_engine_move(
    state: &mut GameState,
    engine: &mut dyn Engine,
) -> ChessResult<Option<CandidateMove>> {
    if state.terminal.is_none() && state.active_color != ENGINE_COLOR {
        return Err(ChessError::WrongTurn {
            expected: ENGINE_COLOR,
            actual: state.active_color,
        });
    }
    play_engine_turn(state, engine)
}

/// Apply the engine's reply, or return the state unchanged when it is not
/// the engine's turn or the game is over.
pub fn apply_engine_move(mut state: GameState, engine: &mut dyn Engine) -> GameState {
    if let Err(err) = try_apply_engine_move(&mut state, engine) {
        if err.is_rejected_input() {
            tracing::debug!(%err, "engine move skipped");
        } else {
            tracing::warn!(%err, "engine move failed");
        }
    }
    state
}

/// Rebuild a game from the start by replaying `(from, to)` pairs.
pub fn replay<I>(moves: I) -> ChessResult<GameState>
where
    I: IntoIterator<Item = (Square, Square)>,
{
    replay_from(GameState::new_game(), moves)
}

/// Replay `(from, to)` pairs on top of `state`.
pub fn replay_from<I>(mut state: GameState, moves: I) -> ChessResult<GameState>
where
    I: IntoIterator<Item = (Square, Square)>,
{
    for (from, to) in moves {
        try_apply_move(&mut state, from, to)?;
    }
    Ok(state)
}

/// Take back the last full turn by replaying the earlier moves from the
/// game's starting position.
///
/// If the last move was the engine's reply, the human move before it is
/// removed too. An empty history is returned unchanged.
pub fn undo(state: &GameState) -> ChessResult<GameState> {
    let history = &state.move_history;
    let Some(last) = history.last() else {
        return Ok(state.clone());
    };

    let mut keep = history.len() - 1;
    if last.player == ENGINE_COLOR && keep > 0 && history[keep - 1].player == HUMAN_COLOR {
        keep -= 1;
    }

    tracing::info!(from_plies = history.len(), to_plies = keep, "undo");
    replay_from(
        state.restart(),
        history[..keep].iter().map(|record| (record.from, record.to)),
    )
}

/// Side whose turn it is, or `None` once the game has ended.
pub fn side_to_move(state: &GameState) -> Option<Color> {
    state.terminal.is_none().then_some(state.active_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_positional::PositionalEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::tier::Tier;
    use crate::game_state::chess_types::{Board, Piece, PieceKind, TurnState};
    use crate::move_generation::move_generator::all_valid_moves;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn e2_e4_then_engine_reply_for_every_tier() {
        for tier in Tier::ALL {
            let state = new_game();
            let state = apply_human_move(state, sq(6, 4), sq(4, 4));

            assert_eq!(
                state.board.piece_at(sq(4, 4)),
                Some(Piece::new(Color::White, PieceKind::Pawn).moved())
            );
            assert_eq!(state.board.piece_at(sq(6, 4)), None);
            assert_eq!(state.move_history[0].notation, "e4");
            assert_eq!(state.move_history[0].number, 1);
            assert_eq!(state.active_color, Color::Black);

            let black_moves = all_valid_moves(Color::Black, &state.board);
            let mut engine = tier.build_engine(StdRng::seed_from_u64(17));
            let after = apply_engine_move(state, engine.as_mut());

            assert_eq!(after.move_count, 2);
            assert_eq!(after.active_color, Color::White);
            let reply = after.move_history[1].clone();
            assert_eq!(reply.player, Color::Black);
            assert!(black_moves
                .iter()
                .any(|m| m.from == reply.from && m.to == reply.to));
            assert_eq!(after.turn_state(), TurnState::WhiteToMove);
        }
    }

    #[test]
    fn illegal_human_move_is_a_no_op() {
        let state = new_game();
        let before = state.clone();
        let after = apply_human_move(state, sq(6, 4), sq(3, 4));
        assert_eq!(after, before);

        let err = try_apply_human_move(&mut after.clone(), sq(6, 4), sq(3, 4))
            .expect_err("triple pawn push");
        assert_eq!(
            err,
            ChessError::IllegalMove {
                from: sq(6, 4),
                to: sq(3, 4)
            }
        );
    }

    #[test]
    fn human_cannot_move_black_or_out_of_turn() {
        let state = new_game();
        let before = state.clone();
        assert_eq!(apply_human_move(state, sq(1, 4), sq(3, 4)), before);

        let mut black_to_move = apply_human_move(before, sq(6, 4), sq(4, 4));
        let snapshot = black_to_move.clone();
        let err = try_apply_human_move(&mut black_to_move, sq(6, 3), sq(4, 3))
            .expect_err("not white's turn");
        assert!(matches!(err, ChessError::WrongTurn { .. }));
        assert_eq!(black_to_move, snapshot);
    }

    #[test]
    fn engine_does_not_move_on_human_turn() {
        let state = new_game();
        let before = state.clone();
        let mut engine = RandomEngine::seeded(1);
        assert_eq!(apply_engine_move(state, &mut engine), before);
    }

    #[test]
    fn empty_square_click_is_ignored() {
        let state = new_game();
        let before = state.clone();
        assert!(legal_destinations(&state, sq(4, 4)).is_empty());
        assert_eq!(apply_human_move(state, sq(4, 4), sq(3, 4)), before);
    }

    #[test]
    fn highlighted_destinations_are_always_playable() {
        let state = new_game();
        assert!(legal_destinations(&state, sq(1, 4)).is_empty());
        assert!(legal_destinations(&state, sq(0, 1)).is_empty());

        let mut highlighted = 0;
        for square in Square::all() {
            for to in legal_destinations(&state, square) {
                highlighted += 1;
                let after = apply_human_move(state.clone(), square, to);
                assert_eq!(after.move_count, 1, "{square:?} -> {to:?} was highlighted");
            }
        }
        assert_eq!(highlighted, 20);

        let black_to_move = apply_human_move(state, sq(6, 4), sq(4, 4));
        for square in Square::all() {
            assert!(legal_destinations(&black_to_move, square).is_empty());
        }
    }

    #[test]
    fn captures_go_to_the_ledger_of_the_captured_color() {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq(0, 4), Some(Piece::new(Color::Black, PieceKind::King)));
        board.set(sq(4, 4), Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(sq(4, 0), Some(Piece::new(Color::Black, PieceKind::Knight)));
        board.set(sq(3, 0), Some(Piece::new(Color::Black, PieceKind::Rook)));
        let mut state = GameState::from_board(board, Color::White);

        try_apply_human_move(&mut state, sq(4, 4), sq(4, 0)).expect("rook takes knight");
        assert_eq!(state.captured_black().len(), 1);
        assert!(state.captured_white().is_empty());
        assert_eq!(state.move_history[0].notation, "♖xa4");

        try_apply_move(&mut state, sq(3, 0), sq(4, 0)).expect("rook takes rook");
        assert_eq!(state.captured_white().len(), 1);
        assert_eq!(state.captured_white()[0].kind, PieceKind::Rook);
        assert_eq!(state.captured_black().len(), 1);
        assert_eq!(state.last_move, Some(LastMove { from: sq(3, 0), to: sq(4, 0) }));
    }

    #[test]
    fn capturing_the_king_ends_the_game_and_freezes_it() {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq(4, 4), Some(Piece::new(Color::White, PieceKind::Queen)));
        board.set(sq(0, 4), Some(Piece::new(Color::Black, PieceKind::King)));
        board.set(sq(0, 0), Some(Piece::new(Color::Black, PieceKind::Rook)));
        let state = GameState::from_board(board, Color::White);

        let state = apply_human_move(state, sq(4, 4), sq(0, 4));
        assert_eq!(outcome(&state), Some(Outcome::WhiteWins));
        assert_eq!(state.turn_state(), TurnState::Terminal(Outcome::WhiteWins));
        assert_eq!(side_to_move(&state), None);
        assert!(legal_destinations(&state, sq(0, 0)).is_empty());

        let frozen = state.clone();
        let mut engine = PositionalEngine::seeded(3);
        let state = apply_engine_move(state, &mut engine);
        let state = apply_human_move(state, sq(7, 4), sq(6, 4));
        assert_eq!(state, frozen);
    }

    #[test]
    fn engine_without_moves_marks_stalemate() {
        let mut board = Board::empty();
        board.set(sq(7, 7), Some(Piece::new(Color::Black, PieceKind::King)));
        board.set(sq(7, 6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set(sq(6, 6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set(sq(6, 7), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set(sq(0, 0), Some(Piece::new(Color::White, PieceKind::King)));
        let mut state = GameState::from_board(board, Color::Black);

        let mut engine = RandomEngine::seeded(8);
        let played = try_apply_engine_move(&mut state, &mut engine).expect("no failure");
        assert_eq!(played, None);
        assert_eq!(outcome(&state), Some(Outcome::Stalemate));
        assert_eq!(state.move_count, 0);
    }

    #[test]
    fn turns_alternate_until_terminal() {
        let mut state = new_game();
        let mut white = RandomEngine::seeded(21);
        let mut black = RandomEngine::seeded(22);
        let mut expected = Color::White;

        for _ in 0..400 {
            if state.is_over() {
                break;
            }
            assert_eq!(state.active_color, expected);
            let before = state.move_count;
            let engine: &mut dyn Engine = match expected {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            play_engine_turn(&mut state, engine).expect("engine turn");
            if state.move_count > before {
                assert_eq!(state.move_history.last().map(|r| r.player), Some(expected));
            }
            expected = expected.opposite();
        }
    }

    #[test]
    fn every_vanished_piece_is_in_exactly_one_ledger() {
        let mut state = new_game();
        let mut white = RandomEngine::seeded(5);
        let mut black = RandomEngine::seeded(6);

        for _ in 0..300 {
            if state.is_over() {
                break;
            }
            let engine: &mut dyn Engine = match state.active_color {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            play_engine_turn(&mut state, engine).expect("engine turn");

            let white_on_board = state.board.count_pieces(Color::White);
            let black_on_board = state.board.count_pieces(Color::Black);
            assert_eq!(white_on_board + state.captured_white().len(), 16);
            assert_eq!(black_on_board + state.captured_black().len(), 16);
            assert!(state.captured_white().iter().all(|p| p.color == Color::White));
            assert!(state.captured_black().iter().all(|p| p.color == Color::Black));
        }
    }

    #[test]
    fn undo_removes_the_last_full_turn() {
        let state = new_game();
        let state = apply_human_move(state, sq(6, 4), sq(4, 4));
        let mut engine = RandomEngine::seeded(2);
        let state = apply_engine_move(state, &mut engine);
        let after_first_turn = state.clone();

        let state = apply_human_move(state, sq(7, 6), sq(5, 5));
        let state = apply_engine_move(state, &mut engine);
        assert_eq!(state.move_count, 4);

        let undone = undo(&state).expect("replay succeeds");
        assert_eq!(undone, after_first_turn);

        let undone = undo(&undone).expect("replay succeeds");
        assert_eq!(undone, GameState::new_game());
        assert_eq!(undo(&undone).expect("empty history"), GameState::new_game());
    }

    #[test]
    fn undo_of_a_lone_human_move_keeps_earlier_turns() {
        let state = apply_human_move(new_game(), sq(6, 0), sq(5, 0));
        let undone = undo(&state).expect("replay succeeds");
        assert_eq!(undone, GameState::new_game());
    }

    #[test]
    fn undo_replays_from_a_loaded_position() {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(sq(6, 0), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set(sq(0, 4), Some(Piece::new(Color::Black, PieceKind::King)));
        let start = GameState::from_board(board, Color::White);

        let state = apply_human_move(start.clone(), sq(6, 0), sq(4, 0));
        let mut engine = RandomEngine::seeded(9);
        let state = apply_engine_move(state, &mut engine);
        assert_eq!(state.move_count, 2);

        assert_eq!(undo(&state).expect("replay succeeds"), start);
    }

    #[test]
    fn replay_rejects_an_illegal_sequence() {
        let err = replay([(sq(6, 4), sq(4, 4)), (sq(6, 3), sq(4, 3))]).expect_err("white twice");
        assert!(matches!(err, ChessError::WrongTurn { .. }));
    }
}
