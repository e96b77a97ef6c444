// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Game configuration.
use serde::{Deserialize, Serialize};

use crate::{
    chips::Chips,
    error::{GameError, Result},
};

/// How a seat is controlled, chosen once at game creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatKind {
    /// The seat suspends the hand and waits for an external action.
    Human,
    /// The seat is played by the automated agent policy.
    Agent,
}

/// The table settings, immutable for the lifetime of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Controller kind for each seat, one entry per seat.
    pub seat_kinds: Vec<SeatKind>,
    /// The stack every seat starts with.
    pub starting_stack: Chips,
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
}

impl GameConfig {
    /// A table of automated seats with the default stakes.
    pub fn agents(seats: usize) -> Self {
        Self {
            seat_kinds: vec![SeatKind::Agent; seats],
            ..Self::default()
        }
    }

    /// A table of human driven seats with the default stakes.
    pub fn humans(seats: usize) -> Self {
        Self {
            seat_kinds: vec![SeatKind::Human; seats],
            ..Self::default()
        }
    }

    /// The number of seats at the table.
    pub fn seats(&self) -> usize {
        self.seat_kinds.len()
    }

    /// Checks the seat count bounds.
    pub fn validate(&self) -> Result<()> {
        if !(2..=8).contains(&self.seats()) {
            return Err(GameError::InvalidSeatCount(self.seats()));
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seat_kinds: vec![SeatKind::Human; 2],
            starting_stack: Chips::new(1000),
            small_blind: Chips::new(10),
            big_blind: Chips::new(20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_count_bounds() {
        assert!(GameConfig::agents(1).validate().is_err());
        assert!(GameConfig::agents(2).validate().is_ok());
        assert!(GameConfig::agents(8).validate().is_ok());
        assert!(GameConfig::agents(9).validate().is_err());
    }
}
