//! Terminal front end: the human plays White against the engine.
//!
//! Run with:
//! `cargo run --release -- --tier hard --seed 7`

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use casual_chess::config::GameConfig;
use casual_chess::controller::turn_controller::TurnController;
use casual_chess::errors::ChessError;
use casual_chess::utils::algebraic::{algebraic_to_square, parse_move_text, square_to_algebraic};
use casual_chess::utils::pgn::write_pgn;
use casual_chess::utils::render_game_state::render_game_state;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("commands: <from><to> (e.g. e2e4), moves <square>, hint, undo, new, pgn, quit");
}

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = GameConfig::from_args(&args)?;
    let mut controller = TurnController::new(config);

    println!("You are White. Opponent: {}", controller.engine_name());
    print_help();
    println!("{}", render_game_state(controller.state()));

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let command = input.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "new" => {
                controller.new_game();
                println!("{}", render_game_state(controller.state()));
            }
            "undo" => {
                controller.undo();
                println!("{}", render_game_state(controller.state()));
            }
            "pgn" => print!("{}", write_pgn(controller.state())),
            "hint" => match controller.request_hint(Instant::now()) {
                Some(hint) => println!(
                    "hint: {}{} (shown for {:?})",
                    square_to_algebraic(hint.from),
                    square_to_algebraic(hint.to),
                    controller.config().hint_window
                ),
                None => println!("no hint available"),
            },
            _ if command.starts_with("moves ") => {
                match algebraic_to_square(command["moves ".len()..].trim()) {
                    Ok(square) => {
                        let targets: Vec<String> = controller
                            .legal_destinations(square)
                            .into_iter()
                            .map(square_to_algebraic)
                            .collect();
                        println!("{}", targets.join(" "));
                    }
                    Err(err) => println!("{err}"),
                }
            }
            _ => {
                let Ok((from, to)) = parse_move_text(command) else {
                    println!("unrecognised input; type `help`");
                    continue;
                };
                if !controller.human_move(from, to) {
                    println!("move ignored");
                    continue;
                }
                println!("{}", render_game_state(controller.state()));

                if controller.engine_to_move() {
                    thread::sleep(controller.engine_reply_delay());
                    controller.engine_reply()?;
                    if let Some(last) = controller.state().move_history.last() {
                        println!("computer plays {}", last.notation);
                    }
                    println!("{}", render_game_state(controller.state()));
                }

                if let Some(outcome) = controller.outcome() {
                    println!("game over: {outcome}. Type `new` to play again.");
                }
            }
        }
    }

    Ok(())
}
