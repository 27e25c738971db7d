//! Match setup: character assignment, dealing and opening hands.
//!
//! Characters and the deck shuffle draw from separate `GameRng` context
//! streams of the configured seed, so a given seed always deals the same
//! match. Both stacks are disjoint slices of one shuffled numeric deck.

use log::info;

use super::turn::Match;
use crate::cards::{face_cards, numeric_deck, Character, Suit};
use crate::core::{ConfigError, GameRng, MatchConfig, PlayerState};

/// Builds a dealt `Match` from a validated `MatchConfig`.
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    config: MatchConfig,
}

impl MatchBuilder {
    /// Accept `config` if it can produce a legal match.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Characters for Player 1 and Player 2.
    ///
    /// Uses the configured pair if present, otherwise draws two distinct
    /// face cards.
    #[must_use]
    pub fn assign_characters(&self) -> (Character, Character) {
        if let Some(pair) = self.config.characters {
            return pair;
        }

        let mut pool: Vec<Character> = face_cards()
            .into_iter()
            .filter_map(Character::from_card)
            .collect();
        GameRng::new(self.config.seed)
            .for_context("characters")
            .shuffle(&mut pool);
        (pool[0], pool[1])
    }

    /// Create both players with shuffled stacks and opening hands.
    pub fn deal(&self) -> (PlayerState, PlayerState, Vec<String>) {
        let (first, second) = self.assign_characters();

        let mut deck = numeric_deck();
        GameRng::new(self.config.seed)
            .for_context("deck")
            .shuffle(&mut deck);

        let (one_stack, rest) = deck.split_at(first.stack_size);
        let two_stack = &rest[..second.stack_size];

        let health = self.config.starting_health;
        let mut one = PlayerState::new("Player 1", first, one_stack.iter().copied(), health);
        let mut two = PlayerState::new("Player 2", second, two_stack.iter().copied(), health);

        let mut lines = vec![
            "Characters assigned:".to_string(),
            format!("{}: {}", one.name, one.character),
            format!("{}: {}", two.name, two.character),
        ];
        for state in [&mut one, &mut two] {
            let drawn = state.draw_cards(state.character.hand_size).len();
            if state.character.suit == Suit::Coins {
                lines.push(format!("{} draws {} cards (Coins bonus)", state.name, drawn));
            } else {
                lines.push(format!("{} draws {} cards", state.name, drawn));
            }
        }

        info!(
            "Dealt match with seed {}: {} vs {}",
            self.config.seed, one.character, two.character
        );
        (one, two, lines)
    }

    /// Deal and wrap the players in a `Match` at Player 1's pre-shield.
    pub fn build(self) -> (Match, Vec<String>) {
        let (one, two, lines) = self.deal();
        (Match::assemble(self.config, one, two), lines)
    }
}

impl Match {
    /// Deal a new match from `config`, returning the setup lines.
    pub fn new(config: MatchConfig) -> Result<(Self, Vec<String>), ConfigError> {
        Ok(MatchBuilder::new(config)?.build())
    }
}
