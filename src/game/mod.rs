//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{ConfigError, MatchError, PileError};
use crate::options::GameOptions;
use crate::random::{RandomSource, pick_index};
use crate::rule::MatchRule;

mod round;
pub mod state;

pub use state::GameState;

/// A Snap game engine that owns the deck, the pile and the players' scores.
///
/// Every round each player draws one card onto the pile. When the drawn cards
/// satisfy the [`MatchRule`], a random player takes the whole pile. The game
/// ends once the deck is exhausted.
///
/// `deck` and `pile` are public and scores can be replaced with
/// [`Game::set_scores`], so scenarios can be staged directly.
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    /// Cards left to draw.
    pub deck: Deck,
    /// Number of unclaimed cards in the center.
    pub pile: usize,
    /// Score per player, in roster order. Always one entry per player.
    scores: Vec<usize>,
    /// Player names, in turn order.
    players: Vec<String>,
    /// Rule deciding when a round claims the pile.
    rule: MatchRule,
    /// Number of decks the game started with.
    decks: u32,
    /// Cards moved from the deck to the pile by rounds so far.
    cards_drawn: usize,
    /// Rounds played so far.
    rounds_played: usize,
    /// Random source for draws and round winners.
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default().with_decks(2), 42).unwrap();
    /// game.play();
    /// assert_eq!(game.cards_drawn(), 104);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new game drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    pub fn with_source(options: GameOptions, rng: R) -> Result<Self, ConfigError> {
        options.validate()?;

        let GameOptions {
            decks,
            match_rule,
            players,
        } = options;

        log::debug!(
            "new game: {decks} deck(s), rule {match_rule}, {} players",
            players.len()
        );

        Ok(Self {
            deck: Deck::new(decks as usize),
            pile: 0,
            scores: alloc::vec![0; players.len()],
            players,
            rule: match_rule,
            decks,
            cards_drawn: 0,
            rounds_played: 0,
            rng,
        })
    }

    /// Picks a card type uniformly among the distinct types left in the deck.
    ///
    /// The card stays in the deck until passed to [`Game::add_to_pile`].
    /// Returns `None` if the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.deck.sample(&mut self.rng)
    }

    /// Moves one copy of `card` from the deck onto the pile.
    ///
    /// Cards no longer in the deck are ignored. Returns whether the pile grew.
    pub fn add_to_pile(&mut self, card: Card) -> bool {
        if self.deck.remove_one(&card) {
            self.pile += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether `cards` satisfy the game's match rule.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyInput`] if `cards` is empty.
    pub fn evaluate_match(&self, cards: &[Card]) -> Result<bool, MatchError> {
        self.rule.matches(cards)
    }

    /// Picks a roster index uniformly at random.
    ///
    /// An out-of-range answer from the random source is clamped to the last
    /// player.
    pub fn pick_player(&mut self) -> usize {
        pick_index(&mut self.rng, self.players.len())
    }

    /// Gives the whole pile to the named player and empties it.
    ///
    /// Returns the number of cards transferred.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::PlayerNotFound`] if no player has that name.
    pub fn take_pile(&mut self, player: &str) -> Result<usize, PileError> {
        let index = self
            .players
            .iter()
            .position(|name| name == player)
            .ok_or(PileError::PlayerNotFound)?;
        Ok(self.award_pile(index))
    }

    /// Moves the pile onto the score at `index`, which must be a roster index.
    fn award_pile(&mut self, index: usize) -> usize {
        let taken = self.pile;
        self.scores[index] += taken;
        self.pile = 0;
        taken
    }
}

impl<R> Game<R> {
    /// Returns the player names, in turn order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the match rule.
    pub const fn match_rule(&self) -> MatchRule {
        self.rule
    }

    /// Returns the scores, in roster order.
    pub fn scores(&self) -> &[usize] {
        &self.scores
    }

    /// Replaces the scores.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ScoreCountMismatch`] unless there is exactly one
    /// score per player.
    pub fn set_scores(&mut self, scores: Vec<usize>) -> Result<(), ConfigError> {
        if scores.len() != self.players.len() {
            return Err(ConfigError::ScoreCountMismatch);
        }
        self.scores = scores;
        Ok(())
    }

    /// Returns the number of unclaimed cards in the center.
    pub const fn pile(&self) -> usize {
        self.pile
    }

    /// Returns the remaining deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards moved from the deck to the pile by rounds.
    pub const fn cards_drawn(&self) -> usize {
        self.cards_drawn
    }

    /// Returns the number of rounds played.
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the number of cards the game started with.
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the cards currently in the deck, the pile and the scores.
    ///
    /// Equals [`Game::total_cards`] for any state reached through play.
    pub fn cards_accounted(&self) -> usize {
        self.deck.len() + self.pile + self.scores.iter().sum::<usize>()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        if self.deck.is_empty() {
            GameState::Finished
        } else {
            GameState::Running
        }
    }
}
