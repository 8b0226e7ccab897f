//! Game configuration options.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::rule::MatchRule;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use snaprs::{GameOptions, MatchRule};
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_match_rule(MatchRule::Suits);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of 52-card decks merged into the shared deck.
    pub decks: u32,
    /// Rule deciding when a round claims the pile.
    pub match_rule: MatchRule,
    /// Player names, in turn order.
    pub players: Vec<String>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            match_rule: MatchRule::Values,
            players: alloc::vec!["A".to_owned(), "B".to_owned()],
        }
    }
}

impl GameOptions {
    /// Builds options from untyped input with the default roster.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeckCount`] if `decks` is not a positive
    /// integer and [`ConfigError::UnknownMatchRule`] if `rule` is not a known
    /// rule name.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{ConfigError, GameOptions, MatchRule};
    ///
    /// let options = GameOptions::from_raw("2", "values").unwrap();
    /// assert_eq!(options.decks, 2);
    /// assert_eq!(options.match_rule, MatchRule::Values);
    ///
    /// assert_eq!(
    ///     GameOptions::from_raw("1.5", "values").unwrap_err(),
    ///     ConfigError::InvalidDeckCount
    /// );
    /// ```
    pub fn from_raw(decks: &str, rule: &str) -> Result<Self, ConfigError> {
        Ok(Self::default()
            .with_decks(parse_deck_count(decks)?)
            .with_match_rule(rule.parse()?))
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u32) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the match rule.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{GameOptions, MatchRule};
    ///
    /// let options = GameOptions::default().with_match_rule(MatchRule::Both);
    /// assert_eq!(options.match_rule, MatchRule::Both);
    /// ```
    #[must_use]
    pub const fn with_match_rule(mut self, rule: MatchRule) -> Self {
        self.match_rule = rule;
        self
    }

    /// Sets the player roster.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(["north", "east", "south"]);
    /// assert_eq!(options.players.len(), 3);
    /// ```
    #[must_use]
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks, fewer than two players, or a
    /// repeated player name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::InvalidDeckCount);
        }
        if self.players.len() < 2 {
            return Err(ConfigError::TooFewPlayers);
        }
        for (index, name) in self.players.iter().enumerate() {
            if self.players[..index].contains(name) {
                return Err(ConfigError::DuplicatePlayer);
            }
        }
        Ok(())
    }
}

/// Validates a signed deck count.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDeckCount`] for zero, negative values and values
/// that do not fit in a `u32`.
pub fn deck_count(raw: i64) -> Result<u32, ConfigError> {
    u32::try_from(raw)
        .ok()
        .filter(|&count| count > 0)
        .ok_or(ConfigError::InvalidDeckCount)
}

/// Validates a floating point deck count.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDeckCount`] unless `raw` is a whole number in
/// `1..=u32::MAX`.
pub fn deck_count_from_f64(raw: f64) -> Result<u32, ConfigError> {
    if raw.is_nan() || raw < 1.0 || raw > f64::from(u32::MAX) {
        return Err(ConfigError::InvalidDeckCount);
    }

    let count = raw as u32;
    #[expect(
        clippy::float_cmp,
        reason = "exact comparison detects a fractional part"
    )]
    let whole = f64::from(count) == raw;
    if whole {
        Ok(count)
    } else {
        Err(ConfigError::InvalidDeckCount)
    }
}

/// Parses a deck count from text.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDeckCount`] if `raw` is not a positive integer
/// (`"0"`, `"-1"`, `"1.5"` and `"two"` are all rejected).
pub fn parse_deck_count(raw: &str) -> Result<u32, ConfigError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidDeckCount)?;
    deck_count(value)
}
