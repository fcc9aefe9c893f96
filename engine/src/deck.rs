//! The standard 52-card deck and diagnostics for validating a deal.
//!
//! A [`Deck`] fixes the index each card occupies for the lifetime of a
//! solve: the same deck must be threaded through state construction,
//! successor generation, and move labeling, or results are meaningless.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Deref, Index};
use std::str::FromStr;

use crate::card::{Card, CardParseError, Rank, Suit};

/// An ordered sequence of exactly 52 cards, not necessarily distinct.
/// Standardness is a runtime property checked by [`is_standard_deck`], not
/// enforced by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(pub [Card; 52]);

impl Deck {
    pub fn cards(&self) -> &[Card; 52] {
        &self.0
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.0
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

/// All 52 standard cards, suit-major (c,d,h,s) and rank-minor (A..K).
/// This fixes the order `missing_cards` reports gaps in.
pub fn all_cards() -> [Card; 52] {
    let mut cards = [Card::new(Rank::ACE, Suit::Clubs); 52];
    let mut i = 0;
    for suit in Suit::ALL {
        for rank_ordinal in 0..13u8 {
            cards[i] = Card::new(Rank::from_ordinal(rank_ordinal).unwrap(), suit);
            i += 1;
        }
    }
    cards
}

/// True iff every card is distinct, which for a 52-card [`Deck`] is
/// equivalent to containing every standard card exactly once.
pub fn is_standard_deck(deck: &Deck) -> bool {
    let mut seen = HashSet::with_capacity(52);
    deck.iter().all(|card| seen.insert(*card))
}

/// Tokens in `tokens` that do not parse as a card, preserving input order.
pub fn malformed_cards(tokens: &[&str]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| Card::from_str(token).is_err())
        .map(|token| token.to_string())
        .collect()
}

/// Standard cards missing from `tokens`, in suit-major/rank-minor order.
///
/// Tokens that fail to parse are simply not present in the returned set's
/// complement and so have no bearing on which standard cards are "missing".
pub fn missing_cards(tokens: &[&str]) -> Vec<Card> {
    let present: HashSet<Card> = tokens.iter().filter_map(|t| Card::from_str(t).ok()).collect();
    all_cards()
        .into_iter()
        .filter(|card| !present.contains(card))
        .collect()
}

/// Tokens that appear more than once in `tokens`, each repeated as many
/// times as it occurs, in input order.
pub fn duplicate_cards(tokens: &[&str]) -> Vec<String> {
    let mut counts = std::collections::HashMap::new();
    for token in tokens {
        *counts.entry(*token).or_insert(0usize) += 1;
    }
    tokens
        .iter()
        .filter(|token| counts[*token] > 1)
        .map(|token| token.to_string())
        .collect()
}

/// Error building a [`Deck`] from raw tokens: carries the malformed,
/// missing, and duplicate diagnostics so the caller can report all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckParseError {
    pub malformed: Vec<String>,
    pub missing: Vec<Card>,
    pub duplicates: Vec<String>,
}

impl fmt::Display for DeckParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a standard 52-card deck")?;
        if !self.malformed.is_empty() {
            write!(f, "; malformed: {:?}", self.malformed)?;
        }
        if !self.missing.is_empty() {
            write!(
                f,
                "; missing: {}",
                self.missing
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            )?;
        }
        if !self.duplicates.is_empty() {
            write!(f, "; duplicated: {:?}", self.duplicates)?;
        }
        Ok(())
    }
}

impl std::error::Error for DeckParseError {}

/// Parse exactly 52 whitespace-tokenized cards into a [`Deck`], or describe
/// everything wrong with the input via [`DeckParseError`].
pub fn parse_deck(tokens: &[&str]) -> Result<Deck, DeckParseError> {
    let malformed = malformed_cards(tokens);
    let missing = missing_cards(tokens);
    let duplicates = duplicate_cards(tokens);
    if tokens.len() != 52 || !malformed.is_empty() || !missing.is_empty() || !duplicates.is_empty() {
        return Err(DeckParseError {
            malformed,
            missing,
            duplicates,
        });
    }
    let mut cards = [Card::new(Rank::ACE, Suit::Clubs); 52];
    for (i, token) in tokens.iter().enumerate() {
        cards[i] = Card::from_str(token).expect("malformed tokens already rejected above");
    }
    Ok(Deck(cards))
}
