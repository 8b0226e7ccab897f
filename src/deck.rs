//! The shared deck, stored as a multiset of card types.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;

use crate::card::{Card, Rank, Suit};
use crate::random::{RandomSource, pick_index};

/// Remaining cards, keyed by card type.
///
/// Every stored count is at least one; a card type is removed as soon as its
/// last copy leaves the deck. The deck only ever shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    counts: BTreeMap<Card, usize>,
}

impl Deck {
    /// Creates a deck holding `copies` of every rank and suit combination.
    #[must_use]
    pub fn new(copies: usize) -> Self {
        let mut counts = BTreeMap::new();
        if copies > 0 {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    counts.insert(Card::new(rank, suit), copies);
                }
            }
        }
        Self { counts }
    }

    /// Creates a deck from explicit `(card, count)` entries.
    ///
    /// Entries with a zero count are skipped and repeated cards are summed.
    #[must_use]
    pub fn from_counts<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Card, usize)>,
    {
        let mut counts = BTreeMap::new();
        for (card, count) in entries {
            if count > 0 {
                *counts.entry(card).or_insert(0) += count;
            }
        }
        Self { counts }
    }

    /// Returns the number of copies of `card` left.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.counts.get(card).copied().unwrap_or(0)
    }

    /// Returns whether at least one copy of `card` is left.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.counts.contains_key(card)
    }

    /// Returns the number of distinct card types left.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over the remaining card types and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&Card, &usize)> {
        self.counts.iter()
    }

    /// Picks a card type uniformly among the distinct types left.
    ///
    /// Selection is not weighted by how many copies of a type remain. The card
    /// is not removed; see [`Deck::remove_one`].
    #[must_use]
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<Card> {
        if self.counts.is_empty() {
            return None;
        }
        let index = pick_index(rng, self.counts.len());
        self.counts.keys().nth(index).copied()
    }

    /// Removes one copy of `card`.
    ///
    /// Returns `false` and leaves the deck untouched if the card is absent.
    pub fn remove_one(&mut self, card: &Card) -> bool {
        let Some(count) = self.counts.get_mut(card) else {
            return false;
        };

        if *count > 1 {
            *count -= 1;
        } else {
            self.counts.remove(card);
        }
        true
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = (&'a Card, &'a usize);
    type IntoIter = btree_map::Iter<'a, Card, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
