//! The TriPeaks Solitaire position: three peaks of cards over a four-row
//! tableau, a stock pile, and a waste pile.
//!
//! ```text
//!        0           1           2
//!      3   4       5   6       7   8
//!    9  10  11  12  13  14  15  16  17
//! 18  19  20  21  22  23  24  25  26  27
//! ```

use crate::card::{is_one_rank_apart, Card};
use crate::deck::Deck;
use crate::error::TriPeaksError;

/// The tableau indexes directly under each position; empty for the
/// bottom row, which nothing else rests on.
pub const CHILD_INDEXES: [&[usize]; 28] = [
    &[3, 4],
    &[5, 6],
    &[7, 8],
    &[9, 10],
    &[10, 11],
    &[12, 13],
    &[13, 14],
    &[15, 16],
    &[16, 17],
    &[18, 19],
    &[19, 20],
    &[20, 21],
    &[21, 22],
    &[22, 23],
    &[23, 24],
    &[24, 25],
    &[25, 26],
    &[26, 27],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
];

/// A TriPeaks position. Immutable and hashable so it can be a predecessor
/// map key directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    pub tableau: [Option<Card>; 28],
    pub stock_pile: Vec<Card>,
    pub waste_card: Card,
}

impl State {
    /// Build the initial state from a 52-card deck: cards 0..28 form the
    /// tableau, card 28 starts the waste pile, and cards 29..52 form the
    /// stock (card 29 on top).
    pub fn initial(deck: &Deck) -> Result<State, TriPeaksError> {
        if !crate::deck::is_standard_deck(deck) {
            return Err(TriPeaksError::NotStandardDeck(Box::new(*deck)));
        }
        let mut tableau = [None; 28];
        for (i, slot) in tableau.iter_mut().enumerate() {
            *slot = Some(deck[i]);
        }
        let waste_card = deck[28];
        let stock_pile = deck[29..52].to_vec();
        Ok(State {
            tableau,
            stock_pile,
            waste_card,
        })
    }

    /// True if the tableau card at `index` is present and nothing
    /// remains on top of it.
    pub fn is_face_up(&self, index: usize) -> bool {
        self.tableau[index].is_some() && CHILD_INDEXES[index].iter().all(|&i| self.tableau[i].is_none())
    }

    /// True if `card` can be played onto the waste pile from here: its
    /// rank must be one above or below the current waste card, wrapping
    /// King to Ace.
    pub fn can_be_moved(&self, card: Card) -> bool {
        is_one_rank_apart(self.waste_card.rank, card.rank)
    }

    pub fn is_tableau_empty(&self) -> bool {
        self.tableau.iter().all(Option::is_none)
    }

    /// Every legal successor: drawing from the stock, or playing any
    /// face-up, movable tableau card to the waste pile.
    pub fn successors(&self) -> Vec<State> {
        let mut next_states = Vec::new();

        if let Some((&drawn, rest)) = self.stock_pile.split_first() {
            next_states.push(State {
                tableau: self.tableau,
                stock_pile: rest.to_vec(),
                waste_card: drawn,
            });
        }

        for i in 0..28 {
            let Some(card) = self.tableau[i] else { continue };
            if self.is_face_up(i) && self.can_be_moved(card) {
                let mut tableau = self.tableau;
                tableau[i] = None;
                next_states.push(State {
                    tableau,
                    stock_pile: self.stock_pile.clone(),
                    waste_card: card,
                });
            }
        }

        next_states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::deck::all_cards;

    fn deck() -> Deck {
        Deck(all_cards())
    }

    #[test]
    fn initial_state_splits_the_deck_into_tableau_waste_and_stock() {
        let deck = deck();
        let state = State::initial(&deck).unwrap();
        assert_eq!(state.tableau[0], Some(deck[0]));
        assert_eq!(state.tableau[27], Some(deck[27]));
        assert_eq!(state.waste_card, deck[28]);
        assert_eq!(state.stock_pile.len(), 23);
        assert_eq!(state.stock_pile[0], deck[29]);
    }

    #[test]
    fn initial_state_rejects_a_nonstandard_deck() {
        let mut cards = all_cards();
        cards[1] = cards[0];
        let deck = Deck(cards);
        assert!(State::initial(&deck).is_err());
    }

    #[test]
    fn bottom_row_is_face_up_as_soon_as_present() {
        let state = State::initial(&deck()).unwrap();
        let expected: Vec<bool> = (0..28).map(|i| i >= 18).collect();
        let actual: Vec<bool> = (0..28).map(|i| state.is_face_up(i)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn face_up_requires_both_children_gone() {
        let mut state = State::initial(&deck()).unwrap();
        state.tableau[3] = None; // only one of position 0's two children
        assert!(!state.is_face_up(0));
        state.tableau[4] = None;
        assert!(state.is_face_up(0));
    }

    #[test]
    fn can_be_moved_wraps_king_to_ace() {
        let mut state = State::initial(&deck()).unwrap();
        state.waste_card = Card::new(Rank::KING, Suit::Clubs);
        assert!(state.can_be_moved(Card::new(Rank::ACE, Suit::Hearts)));
        assert!(!state.can_be_moved(Card::new(Rank::from_ordinal(5).unwrap(), Suit::Hearts)));
    }

    #[test]
    fn successors_include_draw_and_playable_bottom_row_cards() {
        let deck = deck();
        let state = State::initial(&deck).unwrap();
        let successors = state.successors();
        // drawing is always legal while the stock has cards
        assert!(successors
            .iter()
            .any(|s| s.waste_card == deck[29] && s.stock_pile.len() == 22));
    }
}
