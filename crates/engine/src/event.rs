// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Outbound events for the presentation layer.
use serde::{Deserialize, Serialize};
use std::fmt;

use felt_eval::{Card, HandCategory};

use crate::{chips::Chips, player::SeatId};

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no community cards.
    Preflop,
    /// The first three community cards.
    Flop,
    /// The fourth community card.
    Turn,
    /// The fifth community card.
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{street}")
    }
}

/// Where dealt cards went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealTarget {
    /// Hole cards for a seat.
    Seat(SeatId),
    /// Community cards on the board.
    Community,
}

/// What the presentation layer renders.
///
/// Events accumulate on the game's internal queue and are drained with
/// [Game::poll_event](crate::game::Game::poll_event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cards were dealt to a seat or to the board.
    CardsDealt {
        /// The seat or the board.
        target: DealTarget,
        /// The dealt cards.
        cards: Vec<Card>,
    },
    /// A seat moved chips into the pot, blinds included.
    BetPlaced {
        /// The betting seat.
        seat: SeatId,
        /// The seat's total commitment for the street.
        amount: Chips,
        /// The pot after the bet.
        pot: Chips,
    },
    /// A seat folded.
    SeatFolded(SeatId),
    /// A new street began.
    StreetAdvanced(Street),
    /// The hand ended and the pot was paid out.
    HandResolved {
        /// The winning seat, or the seats splitting a tied pot.
        winners: Vec<SeatId>,
        /// The chips paid out, an odd remainder of a split is dropped.
        pot: Chips,
        /// The winning hand category, `None` when everyone else folded.
        category: Option<HandCategory>,
    },
    /// The game ended, one seat holds all the chips.
    GameOver(SeatId),
}
