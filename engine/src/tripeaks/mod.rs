//! TriPeaks Solitaire: state model and solving.

mod state;

pub use state::{State, CHILD_INDEXES};

use crate::bfs;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::TriPeaksError;

/// Find a shortest sequence of cards played to the waste pile that clears
/// the TriPeaks tableau, or an empty vector if no sequence does.
///
/// Unlike [`crate::pyramid::solve`], this validates its input: an
/// irregular deck has no well-defined initial state to search from.
pub fn solve(deck: &Deck) -> Result<Vec<Card>, TriPeaksError> {
    let initial = State::initial(deck)?;
    let path = bfs::shortest_path(
        initial,
        |state| state.successors(),
        |state| state.is_tableau_empty(),
    );
    Ok(match path {
        Some(states) => states
            .into_iter()
            .skip(1) // the initial state has no waste_card move of its own
            .map(|state| state.waste_card)
            .collect(),
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::all_cards;

    #[test]
    fn solves_the_canonical_deck_by_reversing_the_first_peak() {
        let deck = Deck(all_cards());
        let solution = solve(&deck).unwrap();
        let expected: Vec<Card> = all_cards()[0..28].iter().rev().copied().collect();
        assert_eq!(solution, expected);
    }

    #[test]
    fn rejects_a_nonstandard_deck() {
        let mut cards = all_cards();
        cards[1] = cards[0];
        let deck = Deck(cards);
        assert!(solve(&deck).is_err());
    }

    /// Reported as impossible by a player; no sequence of plays clears it.
    #[test]
    #[ignore = "exhaustive BFS over tens of millions of states; slow in debug builds"]
    fn deal_with_no_solution_returns_an_empty_sequence() {
        let tokens: Vec<&str> = "
            Kc 9d 7s
            7h 6s 2c Kd 9c 2s
            3d Ah 6d 6c Ad As 7c Js 7d
            Jd Td Qc 2h 4s 8d Th 4h Qd 5c
            3s
            Jh Qs 2d 5d Ts 6h Qh Ac 8c Tc Jc Ks 8s 8h Kh 4c 3h 9h 3c 9s 4d 5h 5s
        "
        .split_whitespace()
        .collect();
        let deck = crate::deck::parse_deck(&tokens).expect("fixture deck should be a standard deck");
        assert_eq!(solve(&deck).unwrap(), Vec::<Card>::new());
    }
}
