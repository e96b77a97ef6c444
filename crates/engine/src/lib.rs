// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker betting engine.
//!
//! This crate drives a full Texas Hold'em game for 2 to 8 seats: blinds,
//! hole and community card dealing, one betting round per street, showdown,
//! and the dealer button rotation between hands.
//!
//! The engine has no I/O of its own. Automated seats resolve their actions
//! immediately through their [agent::ThresholdAgent] policy; a human seat
//! suspends the hand, [game::Game] returns
//! [GameStatus::AwaitingAction](game::GameStatus) to its caller and resumes
//! when the caller supplies the action through
//! [Game::submit_action](game::Game::submit_action). The presentation layer
//! renders the [GameEvent](event::GameEvent) stream the engine emits.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod agent;
pub mod betting;
pub mod chips;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod player;

pub use chips::Chips;
pub use config::{GameConfig, SeatKind};
pub use error::{GameError, Result};
pub use event::{DealTarget, GameEvent, Street};
pub use game::{Game, GameStatus};
pub use player::{ActionProvider, HandSnapshot, Player, PlayerAction, SeatId};

// Reexport the cards and evaluator types used in the public API.
pub use felt_eval::{Card, Deck, DeckError, HandCategory, HandValue, Rank, Suit};
