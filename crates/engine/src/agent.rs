// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Seat controllers: the human suspension point and the automated agent.
use crate::{
    chips::Chips,
    player::{ActionProvider, HandSnapshot, PlayerAction},
};

use felt_eval::{HandCategory, HandValue};

/// A human controlled seat.
///
/// Never decides on its own, the betting round suspends and the surrounding
/// application supplies the action through
/// [Game::submit_action](crate::game::Game::submit_action).
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanSeat;

impl ActionProvider for HumanSeat {
    fn decide(&mut self, _snapshot: &HandSnapshot) -> Option<PlayerAction> {
        None
    }
}

/// The reference automated policy, deterministic for reproducible games.
///
/// Folds below a pair, calls with exactly a pair, and raises the bet to match
/// by a fixed step with two pair or better. Any [ActionProvider] can replace
/// it for a seat.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdAgent {
    /// How much a raise adds on top of the bet to match.
    pub raise_step: Chips,
}

impl Default for ThresholdAgent {
    fn default() -> Self {
        Self {
            raise_step: Chips::new(20),
        }
    }
}

impl ActionProvider for ThresholdAgent {
    fn decide(&mut self, snapshot: &HandSnapshot) -> Option<PlayerAction> {
        let Some(hole) = snapshot.hole_cards else {
            return Some(PlayerAction::Fold);
        };

        let value = HandValue::eval_hand(hole, &snapshot.community);
        let action = if value.category() >= HandCategory::TwoPair {
            PlayerAction::RaiseTo(snapshot.to_match + self.raise_step)
        } else if value.category() == HandCategory::OnePair {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        };

        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::SeatId;
    use felt_eval::{Card, Rank, Suit};

    fn snapshot(hole: [Card; 2], community: Vec<Card>) -> HandSnapshot {
        HandSnapshot {
            seat: SeatId::new(0),
            hole_cards: Some(hole),
            community,
            stack: Chips::new(1000),
            street_bet: Chips::ZERO,
            pot: Chips::new(30),
            to_match: Chips::new(20),
        }
    }

    #[test]
    fn agent_folds_below_a_pair() {
        let hole = [
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Hearts),
        ];
        let action = ThresholdAgent::default().decide(&snapshot(hole, vec![]));
        assert_eq!(action, Some(PlayerAction::Fold));
    }

    #[test]
    fn agent_calls_with_a_pair() {
        let hole = [
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Hearts),
        ];
        let action = ThresholdAgent::default().decide(&snapshot(hole, vec![]));
        assert_eq!(action, Some(PlayerAction::Call));
    }

    #[test]
    fn agent_raises_with_two_pair_or_better() {
        let hole = [
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Five, Suit::Hearts),
        ];
        let community = vec![
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::King, Suit::Clubs),
        ];
        let action = ThresholdAgent::default().decide(&snapshot(hole, community));
        assert_eq!(action, Some(PlayerAction::RaiseTo(Chips::new(40))));
    }

    #[test]
    fn human_seat_suspends() {
        let hole = [
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Hearts),
        ];
        assert_eq!(HumanSeat.decide(&snapshot(hole, vec![])), None);
    }
}
