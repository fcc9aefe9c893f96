//! Pyramid / TriPeaks Solitaire solver
//!
//! Reads a 52-card deal and reports a shortest sequence of moves that
//! clears the tableau, or that none exists.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod bench;
mod cli_error;
mod deck_io;

use std::path::PathBuf;
use std::process::ExitCode;

use cli_error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Game {
    Pyramid,
    TriPeaks,
}

impl std::str::FromStr for Game {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Game, CliError> {
        match s {
            "pyramid" => Ok(Game::Pyramid),
            "tripeaks" => Ok(Game::TriPeaks),
            other => Err(CliError::UnknownGame(other.to_string())),
        }
    }
}

fn run() -> Result<(), CliError> {
    let mut args = std::env::args().skip(1);
    let command = args.next().ok_or(CliError::MissingCommand)?;

    if command == "bench" {
        let game: Game = args.next().ok_or(CliError::MissingCommand)?.parse()?;
        let fixtures_dir = PathBuf::from(args.next().ok_or(CliError::MissingCommand)?);
        let results_path = PathBuf::from(
            args.next()
                .unwrap_or_else(|| "benchmark_summary.json".to_string()),
        );
        return bench::run(game, &fixtures_dir, &results_path);
    }

    let game: Game = command.parse()?;
    let deck = match args.next() {
        Some(path) => deck_io::read_deck_from_path(&PathBuf::from(path))?,
        None => deck_io::read_deck_from_stdin()?,
    };

    match game {
        Game::Pyramid => {
            let moves = solitaire_engine::pyramid::solve(&deck);
            report(&moves, |label| label.clone());
        }
        Game::TriPeaks => {
            let moves = solitaire_engine::tripeaks::solve(&deck)?;
            report(&moves, |card| card.to_string());
        }
    }
    Ok(())
}

fn report<T>(moves: &[T], label: impl Fn(&T) -> String) {
    if moves.is_empty() {
        println!("No solution.");
        return;
    }
    for m in moves {
        println!("{}", label(m));
    }
    println!("{} moves", moves.len());
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
