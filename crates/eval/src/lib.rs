// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker hand evaluator.
//!
//! Evaluates the best 5-card Poker hand out of a player's hole cards and up
//! to five community cards. The evaluator scans categories from the highest
//! down and produces a [HandValue], a hand category plus tie-break ranks,
//! with a total ordering so two hands compare directly:
//!
//! ```
//! # use felt_eval::{Card, HandValue, Rank, Suit};
//! let hole = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//! let board = [
//!     Card::new(Rank::Ace, Suit::Clubs),
//!     Card::new(Rank::Ten, Suit::Diamonds),
//!     Card::new(Rank::Four, Suit::Spades),
//! ];
//! let v1 = HandValue::eval_hand(hole, &board);
//! let v2 = HandValue::eval(&board);
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
pub use eval::{HandCategory, HandValue};

// Reexport cards types.
pub use felt_cards::{Card, Deck, DeckError, Rank, Suit};
