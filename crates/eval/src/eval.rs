// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation by category scan.
//!
//! The evaluator examines the rank and suit groups of a 2 to 7 cards hand and
//! tests categories from the strongest down, so the first match is the best
//! 5-card hand the cards can make. Each category fills a tie-break vector of
//! rank values compared lexicographically, which is equivalent to ranking all
//! C(7,5) subsets and keeping the maximum.
use serde::{Deserialize, Serialize};
use std::fmt;

use felt_cards::{Card, Suit};

/// The hand category, ordered from weakest to strongest.
///
/// A royal flush is the ace-high [HandCategory::StraightFlush].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandCategory {
    /// No pair, nothing.
    HighCard,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks, ace high or low.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandCategory {
    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The value of an evaluated hand.
///
/// Values compare by category first then by the tie-break ranks pairwise, the
/// first difference wins. Two fully equal values are an exact tie. The
/// tie-break vector holds ace-high rank values (an ace playing low in a
/// 5-high straight counts as part of a 5-high run) padded with zeros, so the
/// derived array ordering matches the variable-length comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandValue {
    category: HandCategory,
    tiebreaks: [u8; 5],
}

impl HandValue {
    /// Evaluates a hand of 2 to 7 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        debug_assert!(!cards.is_empty() && cards.len() <= 7, "2 to 7 cards");

        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        // Straight flush, including the royal. Only one suit can hold five of
        // seven cards so the first suited run found is the best.
        for suit in Suit::suits() {
            let mut suited = cards
                .iter()
                .filter(|c| c.suit() == suit)
                .map(|c| c.rank().value())
                .collect::<Vec<_>>();

            if suited.len() >= 5 {
                suited.sort_unstable_by(|a, b| b.cmp(a));
                if let Some(high) = straight_high(&with_ace_low(&suited)) {
                    return Self::new(HandCategory::StraightFlush, &[high]);
                }
            }
        }

        // Distinct rank values high to low.
        let values = (2..=14u8)
            .rev()
            .filter(|&v| counts[v as usize] > 0)
            .collect::<Vec<_>>();

        // Four of a kind with the best remaining kicker.
        if let Some(&quad) = values.iter().find(|&&v| counts[v as usize] == 4) {
            let kicker = values.iter().find(|&&v| v != quad).copied().unwrap_or(0);
            return Self::new(HandCategory::FourOfAKind, &[quad, kicker]);
        }

        // Full house, the highest trips plus the next group of two or more.
        // Two sets of trips use the higher as trips and the lower as the pair.
        if let Some(&trips) = values.iter().find(|&&v| counts[v as usize] >= 3) {
            let pair = values
                .iter()
                .find(|&&v| v != trips && counts[v as usize] >= 2);
            if let Some(&pair) = pair {
                return Self::new(HandCategory::FullHouse, &[trips, pair]);
            }
        }

        // Flush, top five of the suit.
        for suit in Suit::suits() {
            let mut suited = cards
                .iter()
                .filter(|c| c.suit() == suit)
                .map(|c| c.rank().value())
                .collect::<Vec<_>>();

            if suited.len() >= 5 {
                suited.sort_unstable_by(|a, b| b.cmp(a));
                return Self::new(HandCategory::Flush, &suited[..5]);
            }
        }

        // Straight, the ace counts both high and as 1 for the wheel.
        if let Some(high) = straight_high(&with_ace_low(&values)) {
            return Self::new(HandCategory::Straight, &[high]);
        }

        // Three of a kind with the top two kickers.
        if let Some(&trips) = values.iter().find(|&&v| counts[v as usize] == 3) {
            let mut tb = vec![trips];
            tb.extend(values.iter().filter(|&&v| v != trips).take(2));
            return Self::new(HandCategory::ThreeOfAKind, &tb);
        }

        let pairs = values
            .iter()
            .filter(|&&v| counts[v as usize] == 2)
            .copied()
            .collect::<Vec<_>>();

        // Two pair, the top two pairs with the best remaining kicker, which
        // with seven cards may come from a third pair.
        if pairs.len() >= 2 {
            let kicker = values
                .iter()
                .find(|&&v| v != pairs[0] && v != pairs[1])
                .copied()
                .unwrap_or(0);
            return Self::new(HandCategory::TwoPair, &[pairs[0], pairs[1], kicker]);
        }

        // One pair with the top three kickers.
        if let Some(&pair) = pairs.first() {
            let mut tb = vec![pair];
            tb.extend(values.iter().filter(|&&v| v != pair).take(3));
            return Self::new(HandCategory::OnePair, &tb);
        }

        // High card, top five ranks.
        let top = values.len().min(5);
        Self::new(HandCategory::HighCard, &values[..top])
    }

    /// Evaluates a player's hole cards combined with the community cards.
    pub fn eval_hand(hole: [Card; 2], community: &[Card]) -> HandValue {
        debug_assert!(community.len() <= 5, "at most 5 community cards");

        let mut cards = Vec::with_capacity(7);
        cards.extend_from_slice(&hole);
        cards.extend_from_slice(community);
        Self::eval(&cards)
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break rank values, strongest first, zero padded.
    pub fn tiebreaks(&self) -> [u8; 5] {
        self.tiebreaks
    }

    fn new(category: HandCategory, tb: &[u8]) -> HandValue {
        let mut tiebreaks = [0u8; 5];
        tiebreaks[..tb.len()].copy_from_slice(tb);
        Self {
            category,
            tiebreaks,
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Appends a low ace to a descending distinct values list.
fn with_ace_low(values: &[u8]) -> Vec<u8> {
    let mut values = values.to_vec();
    values.dedup();
    if values.first() == Some(&14) {
        values.push(1);
    }
    values
}

/// Finds the top card of a 5-run in a descending distinct values list.
fn straight_high(values: &[u8]) -> Option<u8> {
    for w in 0..values.len().saturating_sub(4) {
        if (1..5).all(|j| values[w + j] == values[w] - j as u8) {
            return Some(values[w]);
        }
    }
    None
}
