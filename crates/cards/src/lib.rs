// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker cards types.
//!
//! This crate defines the [Card], [Rank], and [Suit] value types:
//!
//! ```
//! # use felt_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_ne!(ah, kd);
//! ```
//!
//! and a [Deck] type holding the 52 unique cards, shuffled with a uniform
//! permutation and dealt sequentially without replacement:
//!
//! ```
//! # use felt_cards::Deck;
//! let mut rng = rand::rng();
//! let mut deck = Deck::shuffled(&mut rng);
//! let card = deck.deal().unwrap();
//! assert_eq!(deck.len(), 51);
//! ```
//!
//! Dealing from an empty deck is an error, never a sentinel card.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};
