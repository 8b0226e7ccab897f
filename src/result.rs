//! Round and game result types.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Cards drawn this round, in roster order.
    pub cards: Vec<Card>,
    /// Whether the cards satisfied the match rule.
    pub matched: bool,
    /// Roster index of the player who took the pile, if any.
    pub winner: Option<usize>,
    /// Number of cards the winner took (0 if nobody did).
    pub pile_taken: usize,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// A single player holds the highest score.
    Winner(String),
    /// Every player finished on the same score.
    Draw,
}

impl GameOutcome {
    /// Returns the winning player's name, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Winner(name) => Some(name),
            Self::Draw => None,
        }
    }

    /// Returns whether the game ended in a draw.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self, Self::Draw)
    }
}

/// Renders the winner's name, or `DRAW`.
impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(name) => f.write_str(name),
            Self::Draw => f.write_str("DRAW"),
        }
    }
}
