//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through the same
//! move-application path the turn controller uses, with an optional seeded
//! random opening prefix.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::controller::game_api::{play_engine_turn, try_apply_move};
use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, GameState, Outcome};
use crate::move_generation::move_generator::all_valid_moves;

/// Mixed into the series seed for the per-game color draw.
pub(crate) const SERIES_COLOR_SEED_SALT: u64 = 0x3C6E_F372_FE94_F82B;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    DrawMaxPlies,
}

impl From<Outcome> for MatchOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::WhiteWins => MatchOutcome::WhiteWins,
            Outcome::BlackWins => MatchOutcome::BlackWins,
            Outcome::Stalemate => MatchOutcome::Stalemate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Stalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u32,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_plies: u32,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.4} p2_avg_ms={:.4}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play a single seeded match from the standard start.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut state = GameState::new_game();
    let opening_plies = apply_seeded_random_opening(&mut state, seed, config)?;

    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    while state.terminal.is_none() && state.move_count < config.max_plies {
        let mover = state.active_color;
        let started = Instant::now();
        let played = match mover {
            Color::White => play_engine_turn(&mut state, engine_white)?,
            Color::Black => play_engine_turn(&mut state, engine_black)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();
        if played.is_none() {
            break;
        }

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }
    }

    let outcome = state
        .terminal
        .map_or(MatchOutcome::DrawMaxPlies, MatchOutcome::from);

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_plies,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<u32> {
    let min = config.opening_min_plies.min(config.opening_max_plies);
    let max = config.opening_max_plies.max(min);
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = rng.random_range(min..=max);

    let mut applied = 0u32;
    for _ in 0..plies {
        if state.terminal.is_some() {
            break;
        }
        let moves = all_valid_moves(state.active_color, &state.board);
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        try_apply_move(state, mv.from, mv.to)?;
        applied += 1;
    }
    Ok(applied)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Factories receive a per-game seed so engine randomness is reproducible.
/// Colors are assigned deterministically from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ SERIES_COLOR_SEED_SALT);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed.wrapping_mul(2));
        let mut player2 = player2_factory(seed.wrapping_mul(2).wrapping_add(1));

        if config.verbose {
            let (white, black) = if player1_is_white {
                (player1.name().to_owned(), player2.name().to_owned())
            } else {
                (player2.name().to_owned(), player1.name().to_owned())
            };
            println!(
                "[series] game {}/{} seed={} white={} black={}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_time, p2_moves, p2_time) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_time);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_time);

        let series_outcome = match result.outcome {
            MatchOutcome::WhiteWins | MatchOutcome::BlackWins => {
                let color = if result.outcome == MatchOutcome::WhiteWins {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            MatchOutcome::Stalemate => {
                stats.draws += 1;
                SeriesOutcome::Stalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };

        if config.verbose {
            println!(
                "[series] game {} result={:?} plies={}",
                i + 1,
                series_outcome,
                result.final_state.move_count
            );
        }
        stats.outcomes.push(series_outcome);
    }

    stats.player1_avg_move_time_ms = average_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = average_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}
