//! Successor generation for Pyramid Solitaire.

use crate::card::cards_are_removable;
use crate::deck::Deck;

use super::state::State;

fn remove(deck_flags: u64, indexes: &[u64]) -> u64 {
    indexes.iter().fold(deck_flags, |flags, &i| flags ^ (1 << i))
}

/// Every legal successor state reachable from `state` in one move. Actions,
/// when applicable: recycle the waste; draw from the stock; remove a lone
/// King from the tableau, stock, or waste; remove a pair summing to 13
/// from the tableau, or across tableau/stock, tableau/waste, or
/// stock/waste.
pub fn successors(state: State, deck: &Deck) -> Vec<State> {
    let mut results = Vec::new();

    let deck_flags = state.deck_flags();
    let uncovered = state.uncovered_indexes();
    let stock_index = state.stock_index();
    let waste_index = state.waste_index();
    let cycle = state.cycle();

    let stock_card = state.stock_card(deck);
    let waste_card = state.waste_card(deck);

    if stock_card.is_none() && cycle < 2 {
        results.push(State::build(deck_flags, 28, cycle + 1));
    }
    if stock_card.is_some() {
        results.push(State::build(deck_flags, stock_index + 1, cycle));
    }
    if let Some(card) = stock_card {
        if cards_are_removable(card, None) {
            results.push(State::build(
                remove(deck_flags, &[stock_index]),
                stock_index,
                cycle,
            ));
        }
    }
    if let Some(card) = waste_card {
        if cards_are_removable(card, None) {
            results.push(State::build(
                remove(deck_flags, &[waste_index]),
                stock_index,
                cycle,
            ));
        }
    }
    if let (Some(sc), Some(wc)) = (stock_card, waste_card) {
        if cards_are_removable(sc, Some(wc)) {
            results.push(State::build(
                remove(deck_flags, &[stock_index, waste_index]),
                stock_index,
                cycle,
            ));
        }
    }
    for &i in &uncovered {
        let i = i as u64;
        let card = deck[i as usize];
        if cards_are_removable(card, None) {
            results.push(State::build(remove(deck_flags, &[i]), stock_index, cycle));
            continue;
        }
        if let Some(sc) = stock_card {
            if cards_are_removable(card, Some(sc)) {
                results.push(State::build(
                    remove(deck_flags, &[i, stock_index]),
                    stock_index,
                    cycle,
                ));
            }
        }
        if let Some(wc) = waste_card {
            if cards_are_removable(card, Some(wc)) {
                results.push(State::build(
                    remove(deck_flags, &[i, waste_index]),
                    stock_index,
                    cycle,
                ));
            }
        }
        for &j in &uncovered {
            let j = j as u64;
            if j <= i {
                continue;
            }
            let other = deck[j as usize];
            if cards_are_removable(card, Some(other)) {
                results.push(State::build(remove(deck_flags, &[i, j]), stock_index, cycle));
            }
        }
    }

    results
}
