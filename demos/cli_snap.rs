//! Runs a few reference games and prints each outcome.
//!
//! Set `RUST_LOG=debug` to follow every round.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use snaprs::{Game, GameOptions};

const GAMES: [(&str, &str); 4] = [
    ("2", "values"),
    ("2000", "values"),
    ("20000", "both"),
    ("20000", "suits"),
];

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    for (offset, (decks, rule)) in GAMES.into_iter().enumerate() {
        let options = match GameOptions::from_raw(decks, rule) {
            Ok(options) => options,
            Err(err) => {
                println!("Config error for {decks} deck(s), {rule}: {err}");
                continue;
            }
        };

        let mut game = match Game::new(options, seed.wrapping_add(offset as u64)) {
            Ok(game) => game,
            Err(err) => {
                println!("Game error: {err}");
                continue;
            }
        };

        println!("{}", game.play());
    }
}
