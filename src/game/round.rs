use alloc::vec::Vec;

use crate::card::Card;
use crate::error::MatchError;
use crate::random::RandomSource;
use crate::result::{GameOutcome, RoundResult};

use super::Game;

impl<R: RandomSource> Game<R> {
    /// Has every player draw one card onto the pile, in roster order.
    ///
    /// Returns the drawn cards. If the deck runs out partway through, the
    /// remaining players draw nothing.
    pub fn play_round(&mut self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.players.len());

        for _ in 0..self.players.len() {
            let Some(card) = self.draw_card() else {
                break;
            };
            self.add_to_pile(card);
            self.cards_drawn += 1;
            log::trace!("drew {card}");
            cards.push(card);
        }

        self.rounds_played += 1;
        cards
    }

    /// Awards the pile to a random player if `cards` match.
    ///
    /// The winner is drawn from the whole roster, not only from the players
    /// whose cards matched. Returns the winner's roster index, or `None` when
    /// the cards do not match and the pile carries over.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyInput`] if `cards` is empty.
    pub fn resolve_round(&mut self, cards: &[Card]) -> Result<Option<usize>, MatchError> {
        if !self.evaluate_match(cards)? {
            log::debug!("no match, pile stays at {}", self.pile);
            return Ok(None);
        }

        let winner = self.pick_player();
        let taken = self.award_pile(winner);
        log::debug!(
            "match under {}: {} takes {taken} card(s)",
            self.rule,
            self.players[winner]
        );
        Ok(Some(winner))
    }

    /// Plays one round and resolves it.
    ///
    /// A short final round with fewer than two cards never matches, even
    /// though a lone card trivially shares its own suit and rank. Awarding the
    /// pile for a single leftover card is deliberately not done here.
    pub fn step(&mut self) -> RoundResult {
        let cards = self.play_round();
        let pile = self.pile;

        let winner = if cards.len() < 2 {
            None
        } else {
            // cards is non-empty here, so resolution cannot fail.
            self.resolve_round(&cards).ok().flatten()
        };

        RoundResult {
            matched: winner.is_some(),
            pile_taken: if winner.is_some() { pile } else { 0 },
            winner,
            cards,
        }
    }

    /// Plays rounds until the deck is exhausted and returns the outcome.
    ///
    /// The deck is only checked between rounds, so the last round always
    /// completes.
    pub fn play(&mut self) -> GameOutcome {
        while !self.deck.is_empty() {
            self.step();
        }

        let outcome = self.outcome();
        log::info!(
            "game over after {} round(s): scores {:?}, outcome {outcome}",
            self.rounds_played,
            self.scores
        );
        outcome
    }
}

impl<R> Game<R> {
    /// Returns the outcome implied by the current scores.
    ///
    /// All-equal scores (including all zero) are a [`GameOutcome::Draw`].
    /// Otherwise the first player in roster order holding the maximum wins,
    /// even if another player shares that maximum.
    pub fn outcome(&self) -> GameOutcome {
        let Some((&first, rest)) = self.scores.split_first() else {
            return GameOutcome::Draw;
        };
        if rest.iter().all(|&score| score == first) {
            return GameOutcome::Draw;
        }

        let mut best = 0;
        for (index, &score) in self.scores.iter().enumerate() {
            if score > self.scores[best] {
                best = index;
            }
        }

        self.players
            .get(best)
            .map_or(GameOutcome::Draw, |name| GameOutcome::Winner(name.clone()))
    }
}
