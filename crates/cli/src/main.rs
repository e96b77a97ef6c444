// Copyright (C) 2025 Felt Poker developers
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker terminal table.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

use felt_engine::{Chips, GameConfig, SeatKind};

pub mod table;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of seats at the table.
    #[clap(long, short, default_value_t = 4)]
    seats: usize,
    /// The stack every seat starts with.
    #[clap(long, default_value_t = 1000)]
    stack: u32,
    /// The small blind.
    #[clap(long, default_value_t = 10)]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 20)]
    big_blind: u32,
    /// Play seat 0 yourself instead of watching the agents.
    #[clap(long)]
    human: bool,
    /// Stop after this many hands, play to a winner by default.
    #[clap(long)]
    hands: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut seat_kinds = vec![SeatKind::Agent; cli.seats];
    if cli.human {
        if let Some(kind) = seat_kinds.first_mut() {
            *kind = SeatKind::Human;
        }
    }

    let config = GameConfig {
        seat_kinds,
        starting_stack: Chips::new(cli.stack),
        small_blind: Chips::new(cli.small_blind),
        big_blind: Chips::new(cli.big_blind),
    };

    table::run(config, cli.hands)
}
