// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Runs the table loop and renders the game event stream.
use anyhow::Result;
use std::io::{BufRead, Write};

use felt_engine::{
    Card, Chips, DealTarget, Game, GameConfig, GameEvent, GameStatus, PlayerAction, SeatId,
};

/// Plays hands until one seat has all the chips or the hand limit is hit.
pub fn run(config: GameConfig, hands: Option<usize>) -> Result<()> {
    let mut game = Game::new(config)?;
    let limit = hands.unwrap_or(usize::MAX);

    for hand in 1..=limit {
        println!("--- hand {hand}, seat {} deals ---", game.dealer());

        let mut status = game.start_hand()?;
        loop {
            render_events(&mut game);
            match status {
                GameStatus::AwaitingAction { seat, to_match } => {
                    let action = prompt_action(&game, seat, to_match)?;
                    status = match action {
                        // A rejected action, like a raise below the bet to
                        // match, folds the seat like malformed input does.
                        Some(action) => match game.submit_action(seat, action) {
                            Ok(status) => status,
                            Err(err) => {
                                println!("{err}");
                                game.force_fold(seat)?
                            }
                        },
                        None => game.force_fold(seat)?,
                    };
                }
                GameStatus::HandComplete => break,
                GameStatus::GameOver(winner) => {
                    println!("seat {winner} wins the game");
                    return Ok(());
                }
            }
        }

        render_stacks(&game);
    }

    Ok(())
}

fn render_events(game: &mut Game) {
    while let Some(event) = game.poll_event() {
        match event {
            GameEvent::CardsDealt { target, cards } => match target {
                // Only the board is public, hole cards show at the prompt.
                DealTarget::Community => println!("board: {}", fmt_cards(&cards)),
                DealTarget::Seat(_) => {}
            },
            GameEvent::BetPlaced { seat, amount, pot } => {
                println!("seat {seat} bets {amount}, pot {pot}");
            }
            GameEvent::SeatFolded(seat) => println!("seat {seat} folds"),
            GameEvent::StreetAdvanced(street) => println!("* {street}"),
            GameEvent::HandResolved {
                winners,
                pot,
                category,
            } => {
                let winners = winners
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                match category {
                    Some(category) => {
                        println!("seats [{winners}] win {pot} with {category}");
                    }
                    None => println!("seats [{winners}] win {pot} uncontested"),
                }
            }
            GameEvent::GameOver(_) => {}
        }
    }
}

fn render_stacks(game: &Game) {
    for player in game.players() {
        println!("seat {}: {}", player.seat(), player.stack());
    }
}

/// Prompts the acting seat on stdin.
///
/// Accepts `f`, `c`, or `r <total>`; anything else, or a closed stdin, folds
/// the seat so the hand never stalls.
fn prompt_action(game: &Game, seat: SeatId, to_match: Chips) -> Result<Option<PlayerAction>> {
    let player = game
        .player(seat)
        .ok_or_else(|| anyhow::anyhow!("no seat {seat}"))?;

    let hole = match player.hole_cards() {
        Some(cards) => fmt_cards(&cards),
        None => "--".to_string(),
    };
    print!(
        "seat {seat} [{hole}] stack {} pot {} to match {to_match}, (f)old (c)all (r)aise <total>: ",
        player.stack(),
        game.pot(),
    );
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let action = match (words.next(), words.next()) {
        (Some("f"), None) => Some(PlayerAction::Fold),
        (Some("c"), None) => Some(PlayerAction::Call),
        (Some("r"), Some(total)) => total
            .parse::<u32>()
            .ok()
            .map(|t| PlayerAction::RaiseTo(Chips::new(t))),
        _ => None,
    };

    Ok(action)
}

fn fmt_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
