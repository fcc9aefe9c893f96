//! Errors surfaced at the CLI boundary. The engine crate itself never
//! needs `thiserror` (its error types are plain enums with manual
//! `Display` impls); this binary is the one place in the repository where
//! that derive pulls its weight, same as it did for the old solver's
//! `StrategyError`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown game {0:?}: expected \"pyramid\" or \"tripeaks\"")]
    UnknownGame(String),

    #[error("missing command: usage is `solver <pyramid|tripeaks> [deck-file]` or `solver bench <pyramid|tripeaks> <fixtures-dir> [results.json]`")]
    MissingCommand,

    #[error("couldn't read deck file {path:?}: {source}")]
    ReadDeckFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't read deck from stdin: {0}")]
    ReadStdin(#[source] std::io::Error),

    #[error("deck has {found} tokens, expected 52")]
    WrongTokenCount { found: usize },

    #[error(transparent)]
    InvalidDeck(#[from] solitaire_engine::deck::DeckParseError),

    #[error(transparent)]
    NotStandardDeck(#[from] solitaire_engine::TriPeaksError),

    #[error("couldn't read fixtures directory {path:?}: {source}")]
    ReadFixturesDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't write results to {path:?}: {source}")]
    WriteResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
