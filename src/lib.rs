//! A Snap-style matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a shared deck, a pile and the
//! players' scores. Each round every player draws a card onto the pile; when
//! the drawn cards satisfy the configured [`MatchRule`], a random player takes
//! the pile. The player with the most cards once the deck is exhausted wins.
//!
//! # Example
//!
//! ```
//! use snaprs::{Game, GameOptions, MatchRule};
//!
//! let options = GameOptions::default()
//!     .with_decks(2)
//!     .with_match_rule(MatchRule::Values);
//! let mut game = Game::new(options, 42).unwrap();
//! println!("{}", game.play());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod random;
pub mod result;
pub mod rule;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, MatchError, PileError};
pub use game::{Game, GameState};
pub use options::{GameOptions, deck_count, deck_count_from_f64, parse_deck_count};
pub use random::RandomSource;
pub use result::{GameOutcome, RoundResult};
pub use rule::MatchRule;
