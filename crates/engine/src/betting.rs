// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! The single street betting round state machine.
use crate::{
    chips::Chips,
    error::{GameError, Result},
    player::{Player, PlayerAction, SeatId},
};

/// Where a betting round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// The given seat has to act before the round can settle.
    AwaitingAction(SeatId),
    /// Every seat still in with chips has acted and matched the bet.
    Settled,
    /// All but one seat folded, the remaining seat wins the hand outright.
    HandOver(SeatId),
}

/// One street of betting.
///
/// The round owns the bet to match and a cursor into the seat order; the
/// players it bets over are passed in by the orchestrator. Seats that folded
/// or are all-in are skipped. A raise above the bet to match reopens the
/// action for every seat whose commitment is now short.
#[derive(Debug, Clone)]
pub struct BettingRound {
    to_match: Chips,
    current: usize,
}

impl BettingRound {
    /// Starts a round at the given seat with an initial bet to match, the
    /// big blind preflop and zero on later streets.
    pub fn new(start: usize, to_match: Chips) -> Self {
        Self {
            to_match,
            current: start,
        }
    }

    /// The bet a seat has to match to stay in.
    pub fn to_match(&self) -> Chips {
        self.to_match
    }

    /// Computes the round state: the next seat to act, or how it ended.
    pub fn state(&self, players: &[Player]) -> RoundState {
        let alive = players.iter().filter(|p| p.in_hand()).collect::<Vec<_>>();
        if let [winner] = alive[..] {
            return RoundState::HandOver(winner.seat());
        }

        let n = players.len();
        for k in 0..n {
            let player = &players[(self.current + k) % n];
            if player.in_hand() && player.stack() > Chips::ZERO && !player.has_acted() {
                return RoundState::AwaitingAction(player.seat());
            }
        }

        RoundState::Settled
    }

    /// Applies the awaited seat's action and returns the chips moved to the
    /// pot. A rejected action leaves every seat untouched.
    pub fn apply(
        &mut self,
        players: &mut [Player],
        seat: SeatId,
        action: PlayerAction,
    ) -> Result<Chips> {
        match self.state(players) {
            RoundState::AwaitingAction(acting) if acting == seat => {}
            _ => {
                return Err(GameError::InvalidAction {
                    seat,
                    reason: "not this seat's turn",
                });
            }
        }

        let paid = match action {
            PlayerAction::Fold => {
                players[seat.index()].fold();
                Chips::ZERO
            }
            PlayerAction::Call => {
                let player = &mut players[seat.index()];
                let paid = player.bet_to(self.to_match);
                player.set_acted(true);
                paid
            }
            PlayerAction::RaiseTo(amount) => {
                if amount < self.to_match {
                    return Err(GameError::InvalidAction {
                        seat,
                        reason: "raise below the bet to match",
                    });
                }

                let player = &mut players[seat.index()];
                let paid = player.bet_to(amount);
                player.set_acted(true);

                // A short stack raise may land below the bet to match, that
                // is an all-in call and reopens nothing.
                let bet = players[seat.index()].street_bet();
                if bet > self.to_match {
                    self.to_match = bet;
                    for player in players.iter_mut() {
                        if player.seat() != seat
                            && player.in_hand()
                            && player.stack() > Chips::ZERO
                            && player.street_bet() < bet
                        {
                            player.set_acted(false);
                        }
                    }
                }

                paid
            }
        };

        self.current = (seat.index() + 1) % players.len();
        Ok(paid)
    }

    /// Folds a seat out of turn, the disconnect and timeout path.
    pub fn force_fold(&mut self, players: &mut [Player], seat: SeatId) -> Result<()> {
        let player = players
            .get_mut(seat.index())
            .ok_or(GameError::InvalidAction {
                seat,
                reason: "no such seat",
            })?;

        if player.has_folded() {
            return Err(GameError::InvalidAction {
                seat,
                reason: "seat already folded",
            });
        }

        player.fold();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::HumanSeat;

    fn players(stacks: &[u32]) -> Vec<Player> {
        stacks
            .iter()
            .enumerate()
            .map(|(i, &stack)| {
                Player::new(SeatId::new(i as u8), Chips::new(stack), Box::new(HumanSeat))
            })
            .collect()
    }

    fn seat(i: u8) -> SeatId {
        SeatId::new(i)
    }

    fn total(players: &[Player]) -> Chips {
        players
            .iter()
            .fold(Chips::ZERO, |acc, p| acc + p.stack() + p.street_bet())
    }

    #[test]
    fn checks_settle_the_round() {
        let mut players = players(&[1000, 1000, 1000]);
        let mut round = BettingRound::new(0, Chips::ZERO);

        for i in 0..3 {
            assert_eq!(round.state(&players), RoundState::AwaitingAction(seat(i)));
            round.apply(&mut players, seat(i), PlayerAction::Call).unwrap();
        }

        assert_eq!(round.state(&players), RoundState::Settled);
    }

    #[test]
    fn folded_to_one_ends_the_hand() {
        let mut players = players(&[1000, 1000, 1000]);
        let mut round = BettingRound::new(0, Chips::ZERO);

        round.apply(&mut players, seat(0), PlayerAction::Fold).unwrap();
        round.apply(&mut players, seat(1), PlayerAction::Fold).unwrap();

        assert_eq!(round.state(&players), RoundState::HandOver(seat(2)));
    }

    #[test]
    fn raise_reopens_action() {
        let mut players = players(&[1000, 1000, 1000]);
        let mut round = BettingRound::new(0, Chips::ZERO);

        round.apply(&mut players, seat(0), PlayerAction::Call).unwrap();
        round
            .apply(&mut players, seat(1), PlayerAction::RaiseTo(Chips::new(50)))
            .unwrap();
        assert_eq!(round.to_match(), Chips::new(50));

        // Seat 2 still to act, then seat 0 again since its check is short.
        round.apply(&mut players, seat(2), PlayerAction::Fold).unwrap();
        assert_eq!(round.state(&players), RoundState::AwaitingAction(seat(0)));

        round.apply(&mut players, seat(0), PlayerAction::Call).unwrap();
        assert_eq!(round.state(&players), RoundState::Settled);
        assert_eq!(players[0].street_bet(), Chips::new(50));
    }

    #[test]
    fn invalid_raise_is_rejected_without_mutation() {
        let mut players = players(&[1000, 1000]);

        // Blinds posted outside the round.
        players[0].bet_to(Chips::new(10));
        players[1].bet_to(Chips::new(20));
        let mut round = BettingRound::new(0, Chips::new(20));

        let before = total(&players);
        let err = round
            .apply(&mut players, seat(0), PlayerAction::RaiseTo(Chips::new(5)))
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidAction { .. }));

        assert_eq!(total(&players), before);
        assert!(!players[0].has_acted());
        assert_eq!(round.state(&players), RoundState::AwaitingAction(seat(0)));
    }

    #[test]
    fn acting_out_of_turn_is_rejected() {
        let mut players = players(&[1000, 1000, 1000]);
        let mut round = BettingRound::new(0, Chips::ZERO);

        let err = round
            .apply(&mut players, seat(2), PlayerAction::Call)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidAction { .. }));
    }

    #[test]
    fn short_stack_call_goes_all_in() {
        let mut players = players(&[1000, 30]);
        let mut round = BettingRound::new(0, Chips::ZERO);

        round
            .apply(&mut players, seat(0), PlayerAction::RaiseTo(Chips::new(100)))
            .unwrap();
        let paid = round.apply(&mut players, seat(1), PlayerAction::Call).unwrap();

        assert_eq!(paid, Chips::new(30));
        assert_eq!(players[1].stack(), Chips::ZERO);
        assert_eq!(players[1].street_bet(), Chips::new(30));

        // The all-in seat is short of the bet but cannot act again.
        assert_eq!(round.state(&players), RoundState::Settled);
    }

    #[test]
    fn short_all_in_raise_does_not_reopen() {
        let mut players = players(&[1000, 40, 1000]);
        let mut round = BettingRound::new(0, Chips::ZERO);

        round
            .apply(&mut players, seat(0), PlayerAction::RaiseTo(Chips::new(50)))
            .unwrap();

        // Seat 1 raises to 60 but holds 40: an all-in call short of the bet,
        // the bet to match stays at 50 and seat 0 is not reopened.
        round
            .apply(&mut players, seat(1), PlayerAction::RaiseTo(Chips::new(60)))
            .unwrap();
        assert_eq!(round.to_match(), Chips::new(50));
        assert_eq!(players[1].street_bet(), Chips::new(40));

        round.apply(&mut players, seat(2), PlayerAction::Call).unwrap();
        assert_eq!(round.state(&players), RoundState::Settled);
    }

    #[test]
    fn force_fold_any_seat() {
        let mut players = players(&[1000, 1000, 1000]);
        let mut round = BettingRound::new(0, Chips::ZERO);

        // Seat 2 disconnects while seat 0 is acting.
        round.force_fold(&mut players, seat(2)).unwrap();
        assert!(players[2].has_folded());
        assert!(round.force_fold(&mut players, seat(2)).is_err());

        assert_eq!(round.state(&players), RoundState::AwaitingAction(seat(0)));
        round.apply(&mut players, seat(0), PlayerAction::Fold).unwrap();
        assert_eq!(round.state(&players), RoundState::HandOver(seat(1)));
    }

    #[test]
    fn big_blind_keeps_the_option() {
        let mut players = players(&[1000, 1000]);

        // Heads-up, seat 0 small blind, seat 1 big blind.
        players[0].bet_to(Chips::new(10));
        players[1].bet_to(Chips::new(20));
        let mut round = BettingRound::new(0, Chips::new(20));

        round.apply(&mut players, seat(0), PlayerAction::Call).unwrap();

        // The big blind already matches but has not acted.
        assert_eq!(round.state(&players), RoundState::AwaitingAction(seat(1)));
        round.apply(&mut players, seat(1), PlayerAction::Call).unwrap();
        assert_eq!(round.state(&players), RoundState::Settled);
    }
}
