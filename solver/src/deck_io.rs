//! Reading a deck of whitespace-separated card tokens from a file or
//! stdin, in the style of the pack's own fixture decks.

use std::fs;
use std::io::Read;
use std::path::Path;

use solitaire_engine::deck::{parse_deck, Deck};

use crate::cli_error::CliError;

pub fn read_deck_from_path(path: &Path) -> Result<Deck, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::ReadDeckFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tokens(&contents)
}

pub fn read_deck_from_stdin() -> Result<Deck, CliError> {
    let mut contents = String::new();
    std::io::stdin()
        .read_to_string(&mut contents)
        .map_err(CliError::ReadStdin)?;
    parse_tokens(&contents)
}

fn parse_tokens(contents: &str) -> Result<Deck, CliError> {
    let tokens: Vec<&str> = contents.split_whitespace().collect();
    if tokens.len() != 52 {
        return Err(CliError::WrongTokenCount { found: tokens.len() });
    }
    Ok(parse_deck(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solitaire_engine::deck::all_cards;

    fn canonical_deck_text() -> String {
        all_cards()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn parse_tokens_accepts_a_well_formed_deck() {
        let deck = parse_tokens(&canonical_deck_text()).unwrap();
        assert_eq!(deck[0].to_string(), "Ac");
        assert_eq!(deck[51].to_string(), "Ks");
    }

    #[test]
    fn parse_tokens_rejects_the_wrong_token_count() {
        let truncated: Vec<&str> = canonical_deck_text().split_whitespace().take(51).collect();
        let err = parse_tokens(&truncated.join(" ")).unwrap_err();
        assert!(matches!(err, CliError::WrongTokenCount { found: 51 }));
    }

    #[test]
    fn parse_tokens_rejects_malformed_cards() {
        let mut tokens: Vec<&str> = canonical_deck_text().split_whitespace().collect();
        tokens[0] = "??";
        let err = parse_tokens(&tokens.join(" ")).unwrap_err();
        assert!(matches!(err, CliError::InvalidDeck(_)));
    }

    #[test]
    fn read_deck_from_path_reads_a_fixture_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("solitaire-solver-deck-io-test-{}.txt", std::process::id()));
        fs::write(&path, canonical_deck_text()).unwrap();

        let deck = read_deck_from_path(&path).unwrap();
        assert_eq!(deck[0].to_string(), "Ac");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_deck_from_path_reports_a_missing_file() {
        let mut path = std::env::temp_dir();
        path.push("solitaire-solver-deck-io-test-missing-file-does-not-exist.txt");
        assert!(matches!(
            read_deck_from_path(&path),
            Err(CliError::ReadDeckFile { .. })
        ));
    }
}
