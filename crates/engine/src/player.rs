// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Seat state and the action provider contract.
use serde::{Deserialize, Serialize};
use std::fmt;

use felt_eval::Card;

use crate::chips::Chips;

/// A seat position at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SeatId(u8);

impl SeatId {
    /// Creates a seat id from a table position.
    pub fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// The seat position as an index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An action a seat takes when it is its turn to bet.
///
/// There is no separate check action, a call at a matched bet moves no chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Give up the hand, no chips move.
    Fold,
    /// Match the current bet, all-in if the stack is short.
    Call,
    /// Raise the street commitment to the given total.
    RaiseTo(Chips),
}

/// What a seat's controller sees when asked to act.
#[derive(Debug, Clone)]
pub struct HandSnapshot {
    /// The acting seat.
    pub seat: SeatId,
    /// The acting seat's hole cards.
    pub hole_cards: Option<[Card; 2]>,
    /// The community cards dealt so far.
    pub community: Vec<Card>,
    /// The acting seat's remaining stack.
    pub stack: Chips,
    /// Chips the acting seat has committed this street.
    pub street_bet: Chips,
    /// The pot.
    pub pot: Chips,
    /// The bet the seat has to match to stay in the hand.
    pub to_match: Chips,
}

/// Decides a seat's actions.
///
/// Implementations are chosen at seat creation. An automated agent returns
/// `Some` action immediately; a human controlled seat returns `None`, which
/// suspends the betting round until the action arrives through
/// [Game::submit_action](crate::game::Game::submit_action).
pub trait ActionProvider: fmt::Debug + Send {
    /// Decides the next action for this seat, or `None` to suspend.
    fn decide(&mut self, snapshot: &HandSnapshot) -> Option<PlayerAction>;
}

/// A seat's state for the current hand.
#[derive(Debug)]
pub struct Player {
    seat: SeatId,
    stack: Chips,
    hole_cards: Option<[Card; 2]>,
    has_folded: bool,
    has_acted: bool,
    street_bet: Chips,
    provider: Box<dyn ActionProvider>,
}

impl Player {
    /// Creates a player with a starting stack and its action provider.
    pub fn new(seat: SeatId, stack: Chips, provider: Box<dyn ActionProvider>) -> Self {
        Self {
            seat,
            stack,
            hole_cards: None,
            has_folded: false,
            has_acted: false,
            street_bet: Chips::ZERO,
            provider,
        }
    }

    /// This player's seat.
    pub fn seat(&self) -> SeatId {
        self.seat
    }

    /// The remaining stack.
    pub fn stack(&self) -> Chips {
        self.stack
    }

    /// The hole cards, dealt for the current hand.
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole_cards
    }

    /// Whether this player has folded the current hand.
    ///
    /// A seat that busted sits out and counts as folded for the whole hand.
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }

    /// Whether this player has acted in the current betting round.
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }

    /// Chips committed in the current street.
    pub fn street_bet(&self) -> Chips {
        self.street_bet
    }

    /// Whether this player can still win chips this hand.
    pub fn in_hand(&self) -> bool {
        !self.has_folded
    }

    /// Asks this seat's provider for an action.
    pub(crate) fn decide(&mut self, snapshot: &HandSnapshot) -> Option<PlayerAction> {
        self.provider.decide(snapshot)
    }

    /// Raises this player's street commitment to `amount`.
    ///
    /// A short stack is coerced to all-in for the full remaining stack.
    /// Returns the chips moved from the stack, owed to the pot.
    pub(crate) fn bet_to(&mut self, amount: Chips) -> Chips {
        let due = amount - self.street_bet;
        let paid = due.min(self.stack);
        self.stack -= paid;
        self.street_bet += paid;
        paid
    }

    /// Marks this player folded for the rest of the hand.
    pub(crate) fn fold(&mut self) {
        self.has_folded = true;
        self.has_acted = true;
    }

    pub(crate) fn set_acted(&mut self, acted: bool) {
        self.has_acted = acted;
    }

    pub(crate) fn set_hole_cards(&mut self, cards: [Card; 2]) {
        self.hole_cards = Some(cards);
    }

    pub(crate) fn add_chips(&mut self, chips: Chips) {
        self.stack += chips;
    }

    /// Resets the per-hand state, a seat with no chips sits the hand out.
    pub(crate) fn start_hand(&mut self) {
        self.has_folded = self.stack == Chips::ZERO;
        self.has_acted = false;
        self.street_bet = Chips::ZERO;
        self.hole_cards = None;
    }

    /// Resets the per-street state at the start of flop, turn, and river.
    pub(crate) fn start_street(&mut self) {
        self.has_acted = false;
        self.street_bet = Chips::ZERO;
    }

    /// Clears cards when the hand is resolved.
    pub(crate) fn end_hand(&mut self) {
        self.hole_cards = None;
        self.street_bet = Chips::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::HumanSeat;

    fn player(stack: u32) -> Player {
        Player::new(SeatId::new(0), Chips::new(stack), Box::new(HumanSeat))
    }

    #[test]
    fn bet_to_moves_the_difference() {
        let mut p = player(1000);

        assert_eq!(p.bet_to(Chips::new(20)), Chips::new(20));
        assert_eq!(p.stack(), Chips::new(980));
        assert_eq!(p.street_bet(), Chips::new(20));

        // Raising to 50 only moves the 30 on top of the 20 committed.
        assert_eq!(p.bet_to(Chips::new(50)), Chips::new(30));
        assert_eq!(p.stack(), Chips::new(950));
        assert_eq!(p.street_bet(), Chips::new(50));
    }

    #[test]
    fn short_stack_is_coerced_all_in() {
        let mut p = player(15);

        assert_eq!(p.bet_to(Chips::new(40)), Chips::new(15));
        assert_eq!(p.stack(), Chips::ZERO);
        assert_eq!(p.street_bet(), Chips::new(15));
    }

    #[test]
    fn busted_seat_sits_out() {
        let mut p = player(0);
        p.start_hand();
        assert!(p.has_folded());
    }
}
