// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Engine error types.
use thiserror::Error;

use felt_eval::DeckError;

use crate::{chips::Chips, player::SeatId};

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// The game was created with a seat count outside 2 to 8.
    #[error("invalid seat count {0}, a table seats 2 to 8 players")]
    InvalidSeatCount(usize),
    /// The deck ran out of cards mid hand.
    ///
    /// Unreachable with a valid seat count, at most 8 * 2 + 5 = 21 cards are
    /// dealt per hand. Aborts the hand if it occurs.
    #[error(transparent)]
    DeckExhausted(#[from] DeckError),
    /// A malformed or out of turn action, rejected without mutating state.
    #[error("invalid action from seat {seat}: {reason}")]
    InvalidAction {
        /// The seat the action referenced.
        seat: SeatId,
        /// Why the action was rejected.
        reason: &'static str,
    },
    /// A bet overdrew a stack.
    ///
    /// The all-in coercion rule caps every bet to the seat's stack so this is
    /// an invariant violation, fatal to the hand.
    #[error("seat {seat} cannot cover {amount}")]
    InsufficientFunds {
        /// The seat whose stack was overdrawn.
        seat: SeatId,
        /// The amount that could not be covered.
        amount: Chips,
    },
}

/// The engine result type.
pub type Result<T> = std::result::Result<T, GameError>;
