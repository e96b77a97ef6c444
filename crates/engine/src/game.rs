// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! The hand orchestrator.
//!
//! [Game] owns the seats, the pot, and the board, and drives a full hand:
//! blinds, hole cards, one betting round per street, showdown, and the
//! button rotation. It runs until a human seat has to act, then returns
//! [GameStatus::AwaitingAction] and resumes from [Game::submit_action].
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

use felt_eval::{Card, Deck, HandValue};

use crate::{
    agent::{HumanSeat, ThresholdAgent},
    betting::{BettingRound, RoundState},
    chips::Chips,
    config::{GameConfig, SeatKind},
    error::{GameError, Result},
    event::{DealTarget, GameEvent, Street},
    player::{ActionProvider, HandSnapshot, Player, PlayerAction, SeatId},
};

/// What the caller does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// A human seat has to act, resume with
    /// [submit_action](Game::submit_action) or [force_fold](Game::force_fold).
    AwaitingAction {
        /// The seat that has to act.
        seat: SeatId,
        /// The bet the seat has to match.
        to_match: Chips,
    },
    /// The hand was resolved, start the next one with
    /// [start_hand](Game::start_hand).
    HandComplete,
    /// One seat holds all the chips, the game is over.
    GameOver(SeatId),
}

/// A Poker game session.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    pot: Chips,
    dealer: usize,
    street: Street,
    round: Option<BettingRound>,
    events: VecDeque<GameEvent>,
    rng: StdRng,
}

impl Game {
    /// Creates a game from a configuration, seats are seeded from
    /// [GameConfig::seat_kinds] in order.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a game with caller initialized randomness.
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;

        let players = config
            .seat_kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let provider: Box<dyn ActionProvider> = match kind {
                    SeatKind::Human => Box::new(HumanSeat),
                    SeatKind::Agent => Box::new(ThresholdAgent::default()),
                };
                Player::new(SeatId::new(i as u8), config.starting_stack, provider)
            })
            .collect();

        Ok(Self {
            config,
            players,
            deck: Deck::ordered(),
            board: Vec::new(),
            pot: Chips::ZERO,
            dealer: 0,
            street: Street::Preflop,
            round: None,
            events: VecDeque::new(),
            rng,
        })
    }

    /// The seats in table order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// A seat's state.
    pub fn player(&self, seat: SeatId) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// The pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The community cards dealt so far.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The seat holding the dealer button.
    pub fn dealer(&self) -> SeatId {
        SeatId::new(self.dealer as u8)
    }

    /// Takes the next event for the presentation layer.
    pub fn poll_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    /// Starts a new hand with a freshly shuffled deck.
    pub fn start_hand(&mut self) -> Result<GameStatus> {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_hand_with_deck(deck)
    }

    /// Starts a new hand from a prepared deck, for replays and tests.
    pub fn start_hand_with_deck(&mut self, deck: Deck) -> Result<GameStatus> {
        if self.round.is_some() {
            return Err(GameError::InvalidAction {
                seat: self.dealer(),
                reason: "hand in progress",
            });
        }

        if self.funded_count() < 2 {
            return Ok(self.game_over_status());
        }

        self.deck = deck;
        self.board.clear();
        self.pot = Chips::ZERO;
        self.street = Street::Preflop;
        for player in &mut self.players {
            player.start_hand();
        }

        // The button moves over busted seats.
        if !self.players[self.dealer].in_hand() {
            self.dealer = self.next_in_hand(self.dealer);
        }

        info!("starting hand, dealer seat {}", self.dealer);
        self.events.push_back(GameEvent::StreetAdvanced(Street::Preflop));

        // Heads-up the dealer posts the small blind.
        let small_blind = if self.in_hand_count() == 2 {
            self.dealer
        } else {
            self.next_in_hand(self.dealer)
        };
        let big_blind = self.next_in_hand(small_blind);

        self.post_blind(small_blind, self.config.small_blind);
        self.post_blind(big_blind, self.config.big_blind);

        self.deal_hole_cards()?;

        // Preflop action starts after the big blind and has to match the
        // full big blind even when a short stack posted it all-in.
        let start = self.next_in_hand(big_blind);
        self.round = Some(BettingRound::new(start, self.config.big_blind));

        self.run()
    }

    /// Applies a waited-for action from a human driven seat.
    pub fn submit_action(&mut self, seat: SeatId, action: PlayerAction) -> Result<GameStatus> {
        self.apply_action(seat, action)?;
        self.run()
    }

    /// Folds a seat from outside the normal turn order.
    ///
    /// This is the disconnect and decision-timeout path, a hand never stalls
    /// on a seat that went away.
    pub fn force_fold(&mut self, seat: SeatId) -> Result<GameStatus> {
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::InvalidAction {
                seat,
                reason: "no hand in progress",
            });
        };

        round.force_fold(&mut self.players, seat)?;
        info!("seat {seat} forced to fold");
        self.events.push_back(GameEvent::SeatFolded(seat));
        self.run()
    }

    /// Drives the hand until a human seat has to act or the hand resolves.
    fn run(&mut self) -> Result<GameStatus> {
        loop {
            let Some(round) = &self.round else {
                return Ok(GameStatus::HandComplete);
            };
            let to_match = round.to_match();

            match round.state(&self.players) {
                RoundState::AwaitingAction(seat) => {
                    let snapshot = self.snapshot(seat, to_match);
                    match self.players[seat.index()].decide(&snapshot) {
                        Some(action) => self.apply_action(seat, action)?,
                        None => return Ok(GameStatus::AwaitingAction { seat, to_match }),
                    }
                }
                RoundState::HandOver(winner) => return self.award_uncontested(winner),
                RoundState::Settled => {
                    // Once fewer than two seats can still bet there is no
                    // more betting, the hand goes straight to showdown.
                    if self.street == Street::River || self.in_hand_funded_count() < 2 {
                        return self.showdown();
                    }

                    self.deal_next_street()?;
                }
            }
        }
    }

    fn apply_action(&mut self, seat: SeatId, action: PlayerAction) -> Result<()> {
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::InvalidAction {
                seat,
                reason: "no betting round in progress",
            });
        };

        let paid = round.apply(&mut self.players, seat, action)?;
        self.pot += paid;

        match action {
            PlayerAction::Fold => {
                debug!("seat {seat} folds");
                self.events.push_back(GameEvent::SeatFolded(seat));
            }
            _ => {
                let amount = self.players[seat.index()].street_bet();
                debug!("seat {seat} bets to {amount}, pot {}", self.pot);
                self.events.push_back(GameEvent::BetPlaced {
                    seat,
                    amount,
                    pot: self.pot,
                });
            }
        }

        Ok(())
    }

    /// Deals two cards to every seat in the hand, one at a time around the
    /// table starting left of the dealer, twice.
    fn deal_hole_cards(&mut self) -> Result<()> {
        let first = self.next_in_hand(self.dealer);
        let mut order = vec![first];
        loop {
            let next = self.next_in_hand(*order.last().unwrap_or(&first));
            if next == first {
                break;
            }
            order.push(next);
        }

        let mut dealt = vec![Vec::new(); self.players.len()];
        for _ in 0..2 {
            for &s in &order {
                dealt[s].push(self.deck.deal()?);
            }
        }

        for &s in &order {
            let cards = [dealt[s][0], dealt[s][1]];
            self.players[s].set_hole_cards(cards);
            self.events.push_back(GameEvent::CardsDealt {
                target: DealTarget::Seat(SeatId::new(s as u8)),
                cards: cards.to_vec(),
            });
        }

        Ok(())
    }

    fn deal_next_street(&mut self) -> Result<()> {
        let (street, count) = match self.street {
            Street::Preflop => (Street::Flop, 3),
            Street::Flop => (Street::Turn, 1),
            Street::Turn => (Street::River, 1),
            // Guarded by the caller, after the river comes the showdown.
            Street::River => return Ok(()),
        };

        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            cards.push(self.deck.deal()?);
        }
        self.board.extend_from_slice(&cards);
        self.street = street;

        debug!("dealing {street} {cards:?}");
        self.events.push_back(GameEvent::StreetAdvanced(street));
        self.events.push_back(GameEvent::CardsDealt {
            target: DealTarget::Community,
            cards,
        });

        for player in &mut self.players {
            player.start_street();
        }

        // Post-flop action starts left of the dealer with nothing to match.
        let start = self.next_in_hand(self.dealer);
        self.round = Some(BettingRound::new(start, Chips::ZERO));
        Ok(())
    }

    /// Pays the whole pot to the last seat standing.
    fn award_uncontested(&mut self, winner: SeatId) -> Result<GameStatus> {
        let pot = self.pot;
        self.players[winner.index()].add_chips(pot);

        info!("seat {winner} wins {pot} uncontested");
        self.events.push_back(GameEvent::HandResolved {
            winners: vec![winner],
            pot,
            category: None,
        });

        Ok(self.finish_hand())
    }

    /// Compares the hands still in and splits the pot between the best.
    fn showdown(&mut self) -> Result<GameStatus> {
        let values = self
            .players
            .iter()
            .filter(|p| p.in_hand())
            .filter_map(|p| {
                p.hole_cards()
                    .map(|hole| (p.seat(), HandValue::eval_hand(hole, &self.board)))
            })
            .collect::<Vec<_>>();

        let Some(best) = values.iter().map(|(_, v)| *v).max() else {
            // Unreachable, the fold-to-one path pays out before showdown.
            return Ok(self.finish_hand());
        };

        let winners = values
            .iter()
            .filter(|(_, v)| *v == best)
            .map(|(seat, _)| *seat)
            .collect::<Vec<_>>();

        // A tie splits the pot evenly, the odd remainder is dropped.
        let share = self.pot / winners.len() as u32;
        for &winner in &winners {
            self.players[winner.index()].add_chips(share);
        }
        let awarded = share * winners.len() as u32;

        info!(
            "showdown: seats {winners:?} win {awarded} with {}",
            best.category()
        );
        self.events.push_back(GameEvent::HandResolved {
            winners,
            pot: awarded,
            category: Some(best.category()),
        });

        Ok(self.finish_hand())
    }

    /// Resets the hand state, moves the button, and reports whether the
    /// game continues.
    fn finish_hand(&mut self) -> GameStatus {
        self.pot = Chips::ZERO;
        self.board.clear();
        self.round = None;
        for player in &mut self.players {
            player.end_hand();
        }
        self.dealer = (self.dealer + 1) % self.players.len();

        if self.funded_count() < 2 {
            let status = self.game_over_status();
            if let GameStatus::GameOver(winner) = status {
                info!("game over, seat {winner} wins");
                self.events.push_back(GameEvent::GameOver(winner));
            }
            status
        } else {
            GameStatus::HandComplete
        }
    }

    fn game_over_status(&self) -> GameStatus {
        let winner = self
            .players
            .iter()
            .find(|p| p.stack() > Chips::ZERO)
            .map(|p| p.seat())
            .unwrap_or(SeatId::new(0));
        GameStatus::GameOver(winner)
    }

    fn post_blind(&mut self, seat: usize, blind: Chips) {
        let paid = self.players[seat].bet_to(blind);
        self.pot += paid;

        let amount = self.players[seat].street_bet();
        debug!("seat {seat} posts blind {amount}");
        self.events.push_back(GameEvent::BetPlaced {
            seat: SeatId::new(seat as u8),
            amount,
            pot: self.pot,
        });
    }

    fn snapshot(&self, seat: SeatId, to_match: Chips) -> HandSnapshot {
        let player = &self.players[seat.index()];
        HandSnapshot {
            seat,
            hole_cards: player.hole_cards(),
            community: self.board.clone(),
            stack: player.stack(),
            street_bet: player.street_bet(),
            pot: self.pot,
            to_match,
        }
    }

    /// The next seat after `from` still in the hand.
    fn next_in_hand(&self, from: usize) -> usize {
        let n = self.players.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&i| self.players[i].in_hand())
            .unwrap_or(from)
    }

    fn in_hand_count(&self) -> usize {
        self.players.iter().filter(|p| p.in_hand()).count()
    }

    fn in_hand_funded_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.in_hand() && p.stack() > Chips::ZERO)
            .count()
    }

    fn funded_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.stack() > Chips::ZERO)
            .count()
    }
}
