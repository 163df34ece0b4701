//! Standalone tier-vs-tier series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- hard easy --games 20`
//! `cargo run --release --bin engine_match_series -- medium hard --verbose`

use casual_chess::config::parse_flag;
use casual_chess::engines::tier::Tier;
use casual_chess::errors::ChessError;
use casual_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let player1: Tier = args.get(1).map_or(Ok(Tier::Hard), |s| s.parse())?;
    let player2: Tier = args.get(2).map_or(Ok(Tier::Easy), |s| s.parse())?;

    let stats = play_engine_match_series(
        |seed| player1.build_engine(StdRng::seed_from_u64(seed)),
        |seed| player2.build_engine(StdRng::seed_from_u64(seed)),
        MatchSeriesConfig {
            games: parse_flag(&args, "--games")?.unwrap_or(10u16),
            base_seed: parse_flag(&args, "--seed")?.unwrap_or(1234u64),
            per_game: MatchConfig {
                max_plies: parse_flag(&args, "--max-plies")?.unwrap_or(200u32),
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("player1={player1} player2={player2}");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
