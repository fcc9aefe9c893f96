//! Pyramid Solitaire: state encoding, move generation, and solving.

mod moves;
mod state;

pub use moves::successors;
pub use state::{State, EMPTY_STOCK, EMPTY_WASTE, UNCOVERED_MASKS};

use crate::bfs;
use crate::deck::Deck;

/// Label the transition from `from` to `to` as it would be reported to a
/// player: a recycle, a draw, or which card(s) were removed.
fn describe_move(from: State, to: State, deck: &Deck) -> String {
    let diff_cycle = from.cycle() ^ to.cycle();
    let diff_deck = from.deck_flags() ^ to.deck_flags();
    if diff_cycle != 0 {
        return "Recycle".to_string();
    }
    if diff_deck != 0 {
        let cards: Vec<String> = (0usize..52)
            .filter(|i| diff_deck & (1 << i) != 0)
            .map(|i| deck[i].to_string())
            .collect();
        return format!("Remove {}", cards.join(" and "));
    }
    "Draw".to_string()
}

/// Find a shortest sequence of moves that clears the Pyramid tableau, or
/// an empty vector if no sequence does. `deck` is not validated: an
/// irregular deck simply yields whatever the bit-packed math computes.
pub fn solve(deck: &Deck) -> Vec<String> {
    let path = bfs::shortest_path(
        State::INITIAL,
        |state| successors(*state, deck),
        |state| state.is_tableau_empty(),
    );
    match path {
        Some(states) => states
            .windows(2)
            .map(|pair| describe_move(pair[0], pair[1], deck))
            .collect(),
        None => Vec::new(),
    }
}
