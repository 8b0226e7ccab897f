//! Property tests over whole games.

use proptest::prelude::*;
use snaprs::{DECK_SIZE, Game, GameOptions, GameState, MatchRule};

fn rules() -> impl Strategy<Value = MatchRule> {
    prop_oneof![
        Just(MatchRule::Suits),
        Just(MatchRule::Values),
        Just(MatchRule::Both),
    ]
}

fn new_game(seed: u64, decks: u32, rule: MatchRule, players: usize) -> Game {
    let options = GameOptions::default()
        .with_decks(decks)
        .with_match_rule(rule)
        .with_players((0..players).map(|i| format!("P{i}")));
    Game::new(options, seed).unwrap()
}

proptest! {
    #[test]
    fn cards_are_conserved_every_round(
        seed in any::<u64>(),
        decks in 1u32..=3,
        rule in rules(),
        players in 2usize..=4
    ) {
        let mut game = new_game(seed, decks, rule, players);
        let total = decks as usize * DECK_SIZE;
        prop_assert_eq!(game.cards_accounted(), total);

        while game.state() == GameState::Running {
            let deck_before = game.deck.len();
            let round = game.step();
            prop_assert_eq!(game.deck.len() + round.cards.len(), deck_before);
            prop_assert_eq!(game.cards_accounted(), total);
        }
    }

    #[test]
    fn game_draws_each_card_once(
        seed in any::<u64>(),
        decks in 1u32..=3,
        rule in rules(),
        players in 2usize..=4
    ) {
        let mut game = new_game(seed, decks, rule, players);
        let outcome = game.play();
        let total = decks as usize * DECK_SIZE;

        prop_assert!(game.deck.is_empty());
        prop_assert_eq!(game.cards_drawn(), total);
        prop_assert_eq!(game.rounds_played(), total.div_ceil(players));

        let scores = game.scores();
        match outcome.winner() {
            None => prop_assert!(scores.iter().all(|&s| s == scores[0])),
            Some(name) => {
                let index = game.players().iter().position(|p| p == name).unwrap();
                prop_assert_eq!(Some(&scores[index]), scores.iter().max());
            }
        }
    }
}
