//! A pure, fast implementation of the Pyramid and TriPeaks Solitaire state
//! spaces, and the shortest-path solvers built on top of them.
//!
//! This crate provides the core building blocks for a solitaire solver or
//! other related application. It is designed to be:
//!
//! - **Pure**: game logic and search only, with no I/O, CLI, or
//!   benchmarking concerns (those live in the `solver` binary crate).
//! - **Compact**: Pyramid positions are packed into a single 64-bit word
//!   so that the predecessor maps driving the search stay as small as
//!   possible; the reachable state space for a hard deal runs into the
//!   tens of millions of positions.
//! - **Exhaustive but simple**: both solvers do a plain breadth-first
//!   search with no unwinnable-state pruning. That keeps the code easy to
//!   trust at the cost of memory: the worst case can run into the
//!   gigabytes.
//!
//! ## What are Pyramid and TriPeaks Solitaire?
//!
//! Both are single-deck solitaire games played against a 28-card tableau
//! laid out in overlapping rows, with the remaining 24 cards split
//! between a stock pile (drawn from) and a waste pile (played to). The
//! goal is to clear every tableau card. This crate answers, for a given
//! fully-known deal: is there a sequence of legal moves that clears the
//! tableau, and if so, what is the shortest one?
//!
//! - **Pyramid**: tableau cards are removed alone (Kings) or in pairs
//!   summing to 13 (Ace=1 .. King=13), drawn from the tableau, the top of
//!   the stock, or the top of the waste. The waste pile can be recycled
//!   back into the stock up to twice.
//! - **TriPeaks**: tableau cards are played one at a time onto the waste
//!   pile, and are only playable once uncovered and one rank away
//!   (cyclically, King wraps to Ace) from the current waste card.
//!
//! # Getting Started
//!
//! ```rust
//! use solitaire_engine::deck::{all_cards, Deck};
//! use solitaire_engine::pyramid;
//!
//! let deck = Deck(all_cards());
//! let solution = pyramid::solve(&deck);
//! println!("{} moves", solution.len());
//! ```

pub mod bfs;
pub mod card;
pub mod deck;
pub mod error;
pub mod pyramid;
pub mod tripeaks;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::TriPeaksError;
