//! Match rules.

use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{ConfigError, MatchError};

/// Condition the cards drawn in a round must satisfy to claim the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchRule {
    /// All cards share a suit.
    Suits,
    /// All cards share a rank.
    #[default]
    Values,
    /// All cards share both suit and rank.
    Both,
}

impl MatchRule {
    /// Returns the short name of the rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Suits => "suits",
            Self::Values => "values",
            Self::Both => "both",
        }
    }

    /// Returns whether every card satisfies the rule relative to the first one.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyInput`] if `cards` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use snaprs::{Card, MatchRule, Rank, Suit};
    ///
    /// let cards = [
    ///     Card::new(Rank::King, Suit::Hearts),
    ///     Card::new(Rank::Three, Suit::Hearts),
    /// ];
    /// assert_eq!(MatchRule::Suits.matches(&cards), Ok(true));
    /// assert_eq!(MatchRule::Values.matches(&cards), Ok(false));
    /// ```
    pub fn matches(self, cards: &[Card]) -> Result<bool, MatchError> {
        let (first, rest) = cards.split_first().ok_or(MatchError::EmptyInput)?;

        let same_suit = || rest.iter().all(|card| card.suit == first.suit);
        let same_rank = || rest.iter().all(|card| card.rank == first.rank);

        Ok(match self {
            Self::Suits => same_suit(),
            Self::Values => same_rank(),
            Self::Both => same_suit() && same_rank(),
        })
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchRule {
    type Err = ConfigError;

    /// Parses `"suits"`, `"values"` or `"both"`. The long label
    /// `"Both suits and values"` is accepted as an alias for `"both"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suits" => Ok(Self::Suits),
            "values" => Ok(Self::Values),
            "both" | "Both suits and values" => Ok(Self::Both),
            _ => Err(ConfigError::UnknownMatchRule),
        }
    }
}
