//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count is not a positive integer.
    #[error("deck count must be a positive integer")]
    InvalidDeckCount,
    /// Match rule name is not recognized.
    #[error("unknown match rule")]
    UnknownMatchRule,
    /// Fewer than two players in the roster.
    #[error("at least two players are required")]
    TooFewPlayers,
    /// The same player name appears twice in the roster.
    #[error("duplicate player name")]
    DuplicatePlayer,
    /// Staged scores do not have one entry per player.
    #[error("expected one score per player")]
    ScoreCountMismatch,
}

/// Errors that can occur when evaluating a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No cards were given to compare.
    #[error("no cards to match")]
    EmptyInput,
}

/// Errors that can occur when transferring the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}
