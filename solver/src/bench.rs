//! Benchmark harness: run a solver over every deck in a fixtures
//! directory and write a JSON summary, in the idiom of the original
//! solver's own seed benchmark.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use solitaire_engine::deck::Deck;
use solitaire_engine::{pyramid, tripeaks};

use crate::cli_error::CliError;
use crate::deck_io::read_deck_from_path;
use crate::Game;

#[derive(Serialize, Deserialize, Debug, Clone)]
struct GameResult {
    deck_file: String,
    solved: bool,
    execution_time_ms: u64,
    timestamp: String,
    move_count: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug)]
struct BenchmarkResults {
    results: Vec<GameResult>,
    summary: BenchmarkSummary,
}

#[derive(Serialize, Deserialize, Debug)]
struct BenchmarkSummary {
    game: String,
    total_decks: usize,
    solved_decks: usize,
    failed_decks: usize,
    average_time_ms: f64,
}

/// An empty move list means unsolvable for a standard 52-card deal: a
/// solved-in-zero-moves deck would require an already-empty tableau,
/// which `is_standard_deck` rules out.
fn solve_one(game: Game, deck: &Deck) -> (bool, Option<usize>) {
    match game {
        Game::Pyramid => {
            let moves = pyramid::solve(deck);
            (!moves.is_empty(), Some(moves.len()))
        }
        Game::TriPeaks => match tripeaks::solve(deck) {
            Ok(moves) => (!moves.is_empty(), Some(moves.len())),
            Err(_) => (false, None),
        },
    }
}

pub fn run(game: Game, fixtures_dir: &Path, results_path: &Path) -> Result<(), CliError> {
    let entries = fs::read_dir(fixtures_dir).map_err(|source| CliError::ReadFixturesDir {
        path: fixtures_dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut results = Vec::new();
    for path in &paths {
        let deck = match read_deck_from_path(path) {
            Ok(deck) => deck,
            Err(e) => {
                println!("skipping {}: {e}", path.display());
                continue;
            }
        };
        let start = Instant::now();
        let (solved, move_count) = solve_one(game, &deck);
        let execution_time_ms = start.elapsed().as_millis() as u64;
        let deck_file = path.file_name().unwrap().to_string_lossy().to_string();
        println!(
            "{} {deck_file} in {execution_time_ms}ms{}",
            if solved { "solved" } else { "failed" },
            move_count.map(|n| format!(" ({n} moves)")).unwrap_or_default(),
        );
        results.push(GameResult {
            deck_file,
            solved,
            execution_time_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
            move_count,
        });
    }

    let solved_count = results.iter().filter(|r| r.solved).count();
    let average_time_ms = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.execution_time_ms as f64).sum::<f64>() / results.len() as f64
    };
    let summary = BenchmarkSummary {
        game: match game {
            Game::Pyramid => "pyramid".to_string(),
            Game::TriPeaks => "tripeaks".to_string(),
        },
        total_decks: results.len(),
        solved_decks: solved_count,
        failed_decks: results.len() - solved_count,
        average_time_ms,
    };

    let json = serde_json::to_string_pretty(&BenchmarkResults { results, summary }).unwrap();
    fs::write(results_path, json).map_err(|source| CliError::WriteResults {
        path: results_path.to_path_buf(),
        source,
    })?;
    println!("Summary saved to {}", results_path.display());
    Ok(())
}
