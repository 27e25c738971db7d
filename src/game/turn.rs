//! The turn engine.
//!
//! `Match` exclusively owns both players and the current `Phase`, and is
//! the only way to change them once a match has been dealt.
//!
//! ## Atomicity
//!
//! A main-phase move is resolved against a clone of both players (O(1)
//! thanks to `im::Vector`) and committed only when every card has
//! resolved. A rejected move leaves the match exactly as it was.
//!
//! ## Sequencing
//!
//! After every accepted main-phase move, including a skip:
//!
//! 1. The mover's `turns_played` goes up by one.
//! 2. The mover draws back to hand size.
//! 3. Knockouts are checked for both players at once.
//! 4. If no one is out, the turn limit is checked and may end the match.
//! 5. Otherwise the other seat becomes active.
//!
//! ```
//! use disfida::cards::{Character, Face, Suit};
//! use disfida::core::{MatchConfig, PlayerId};
//! use disfida::game::{Match, Phase};
//!
//! let config = MatchConfig::builder()
//!     .seed(7)
//!     .characters(
//!         Character::new(Face::King, Suit::Coins),
//!         Character::new(Face::Knight, Suit::Swords),
//!     )
//!     .build();
//! let (mut game, _lines) = Match::new(config).unwrap();
//!
//! game.submit_pre_shield(PlayerId::One, "0").unwrap();
//! game.submit_pre_shield(PlayerId::Two, "0").unwrap();
//! assert_eq!(game.phase(), Phase::Main { active: PlayerId::One });
//!
//! game.submit_main(PlayerId::One, "0").unwrap();
//! assert_eq!(game.active_player(), Some(PlayerId::Two));
//! assert_eq!(game.total_turns(), 1);
//! ```

use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::cards::{Card, Suit};
use crate::core::{
    ClubsStance, ConfigError, MatchConfig, MoveSpec, ParseError, PlayerId, PlayerMap, PlayerState,
    RuleError, Selection,
};
use crate::effects::{Effect, EffectResolver};
use crate::rules::{self, MatchOutcome};

/// A broken conservation or health invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// The same card is held twice across both players.
    DuplicateCard(Card),
    /// Cards were created or lost since the deal.
    CardCount { expected: usize, found: usize },
    HealthAboveMax { player: PlayerId, health: i32 },
}

impl std::fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityError::DuplicateCard(card) => write!(f, "{} is held twice", card),
            IntegrityError::CardCount { expected, found } => {
                write!(f, "Expected {} cards in play, found {}", expected, found)
            }
            IntegrityError::HealthAboveMax { player, health } => {
                write!(f, "{} has {} HP, above the maximum", player, health)
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

/// Why a match could not be assembled from the given players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    Config(ConfigError),
    Integrity(IntegrityError),
}

impl From<ConfigError> for SetupError {
    fn from(error: ConfigError) -> Self {
        SetupError::Config(error)
    }
}

impl From<IntegrityError> for SetupError {
    fn from(error: IntegrityError) -> Self {
        SetupError::Integrity(error)
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Config(error) => write!(f, "Invalid configuration: {}", error),
            SetupError::Integrity(error) => write!(f, "Invalid deal: {}", error),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Config(error) => Some(error),
            SetupError::Integrity(error) => Some(error),
        }
    }
}

/// A two-player match in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    config: MatchConfig,
    players: PlayerMap<PlayerState>,
    phase: Phase,
    /// Cards held across both players at the deal.
    dealt: usize,
}

impl Match {
    /// Start a match from already dealt players, at Player 1's pre-shield.
    ///
    /// Rejects an invalid configuration, a card held twice across the
    /// players, and health above the configured maximum.
    pub fn from_players(
        config: MatchConfig,
        one: PlayerState,
        two: PlayerState,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let game = Self::assemble(config, one, two);
        game.integrity_check()?;
        Ok(game)
    }

    /// Wrap players whose deal is already known to be sound.
    pub(crate) fn assemble(config: MatchConfig, one: PlayerState, two: PlayerState) -> Self {
        let dealt = one.card_count() + two.card_count();
        Self {
            config,
            players: PlayerMap::from_pair(one, two),
            phase: Phase::PreShield(PlayerId::One),
            dealt,
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    /// The seat due to move, or `None` once the match has ended.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.phase.to_act()
    }

    /// The final outcome, once the match has ended.
    #[must_use]
    pub fn result(&self) -> Option<MatchOutcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Main-phase turns played by both seats together.
    #[must_use]
    pub fn total_turns(&self) -> u32 {
        self.players.iter().map(|(_, p)| p.turns_played).sum()
    }

    // === Pre-shield ===

    /// Parse and play a pre-shield move: `"0"` or a single position.
    pub fn submit_pre_shield(
        &mut self,
        player: PlayerId,
        text: &str,
    ) -> Result<Vec<String>, RuleError> {
        let spec: MoveSpec = text
            .parse()
            .map_err(|e: ParseError| self.rejected(player, e.into()))?;
        self.play_pre_shield(player, &spec)
    }

    /// Play a pre-shield move: skip, or place one card as a shield.
    ///
    /// Coins may always be placed. Clubs may be placed only by a Clubs
    /// character using the special, and not with an explicit attack
    /// stance. The player then draws back to hand size.
    pub fn play_pre_shield(
        &mut self,
        player: PlayerId,
        spec: &MoveSpec,
    ) -> Result<Vec<String>, RuleError> {
        self.resolve_pre_shield(player, spec)
            .map_err(|e| self.rejected(player, e))
    }

    fn resolve_pre_shield(
        &mut self,
        player: PlayerId,
        spec: &MoveSpec,
    ) -> Result<Vec<String>, RuleError> {
        self.expect_pre_shield(player)?;

        let state = &self.players[player];
        spec.check_hand(state.hand.len())?;
        let selections = spec.selections();
        if selections.len() > 1 {
            return Err(ParseError::TooManyCards {
                allowed: 1,
                found: selections.len(),
            }
            .into());
        }

        let shield = match selections.first() {
            Some(selection) => {
                let card = state.hand[selection.index];
                if !shield_allowed(state.character.suit, card, selection) {
                    return Err(RuleError::IllegalShieldCard { card });
                }
                Some((selection.index, card))
            }
            None => None,
        };

        let resolver = EffectResolver::new(self.config.max_health);
        let (me, them) = self.players.pair_mut(player);
        let mut lines = Vec::new();
        match shield {
            Some((index, card)) => {
                me.hand.remove(index);
                lines.push(format!("{} plays starting shield {}", me.name, card));
                let outcome = resolver.apply_effect(me, card, them, Effect::Shield);
                lines.extend(outcome.summary_lines());
            }
            None => lines.push(format!("{} skips pre-shield", me.name)),
        }
        lines.extend(me.refill_hand());

        self.phase = Phase::after_pre_shield(player);
        info!("{} finished pre-shield, now {}", player, self.phase);
        Ok(lines)
    }

    // === Main phase ===

    /// Parse and play a main-phase move, e.g. `"0"` or `"2,5s"`.
    pub fn submit_main(&mut self, player: PlayerId, text: &str) -> Result<Vec<String>, RuleError> {
        let spec: MoveSpec = text
            .parse()
            .map_err(|e: ParseError| self.rejected(player, e.into()))?;
        self.play_main(player, &spec)
    }

    /// Play a main-phase move: a skip, one card, or a combo.
    ///
    /// Cards resolve in selection order. Non-shield cards cycle to the
    /// bottom of the mover's stack after the whole combo has resolved.
    pub fn play_main(&mut self, player: PlayerId, spec: &MoveSpec) -> Result<Vec<String>, RuleError> {
        self.resolve_main(player, spec)
            .map_err(|e| self.rejected(player, e))
    }

    fn resolve_main(&mut self, player: PlayerId, spec: &MoveSpec) -> Result<Vec<String>, RuleError> {
        self.expect_main(player)?;

        let actor = &self.players[player];
        spec.check_hand(actor.hand.len())?;
        let selections = spec.selections();
        let cards: Vec<Card> = selections.iter().map(|s| actor.hand[s.index]).collect();

        let mut lines = Vec::new();
        let mut players = self.players.clone();

        if spec.is_skip() {
            lines.push(format!("{} skips turn", actor.name));
        } else {
            rules::check_combo(&cards, actor.character.suit)?;
            lines.push(format!("{} plays {}", actor.name, spec));

            let resolver = EffectResolver::new(self.config.max_health);
            let (me, them) = players.pair_mut(player);
            me.hand = me
                .hand
                .iter()
                .enumerate()
                .filter(|(i, _)| selections.iter().all(|s| s.index != *i))
                .map(|(_, card)| *card)
                .collect();

            let mut cycled = Vec::with_capacity(cards.len());
            for (selection, &card) in selections.iter().zip(&cards) {
                let outcome =
                    resolver.apply_card(me, card, them, selection.special, selection.stance)?;
                if outcome.cycles() {
                    cycled.push(card);
                }
                lines.extend(outcome.summary_lines());
            }
            for card in cycled {
                me.cycle_to_bottom(card);
            }
        }

        let me = &mut players[player];
        me.turns_played += 1;
        lines.extend(me.refill_hand());

        self.players = players;
        lines.extend(self.advance(player));
        Ok(lines)
    }

    /// Check for a finished match after `player` moved, or pass the turn.
    fn advance(&mut self, player: PlayerId) -> Vec<String> {
        let (outcome, mut lines) = self.check_victory();
        let outcome = match outcome {
            Some(outcome) => Some(outcome),
            None if self.check_turn_limit() => {
                let (outcome, end_lines) = self.resolve_tournament_end();
                lines.extend(end_lines);
                Some(outcome)
            }
            None => None,
        };

        match outcome {
            Some(outcome) => {
                self.phase = Phase::Ended(outcome);
                info!(
                    "Match over after {} turns: {}",
                    self.total_turns(),
                    outcome
                );
            }
            None => {
                self.phase = Phase::Main {
                    active: player.opponent(),
                };
                debug!("{} to act", player.opponent());
            }
        }
        lines
    }

    // === Victory ===

    /// Knockout check on the current state.
    #[must_use]
    pub fn check_victory(&self) -> (Option<MatchOutcome>, Vec<String>) {
        rules::check_victory(&self.players[PlayerId::One], &self.players[PlayerId::Two])
    }

    /// Whether both seats have used all their turns.
    #[must_use]
    pub fn check_turn_limit(&self) -> bool {
        rules::check_turn_limit(
            &self.players[PlayerId::One],
            &self.players[PlayerId::Two],
            self.config.turn_limit,
        )
    }

    /// Survival comparison with the Player 2 tiebreak.
    #[must_use]
    pub fn resolve_tournament_end(&self) -> (MatchOutcome, Vec<String>) {
        rules::resolve_tournament_end(&self.players[PlayerId::One], &self.players[PlayerId::Two])
    }

    /// Draw `player` back to hand size outside the normal turn flow.
    ///
    /// Only allowed during the main phase, for either seat.
    pub fn refill_hand(&mut self, player: PlayerId) -> Result<Vec<String>, RuleError> {
        if self.phase.is_ended() {
            return Err(self.rejected(player, RuleError::MatchEnded));
        }
        if let Phase::PreShield(_) = self.phase {
            let error = RuleError::WrongPhase {
                expected: "main",
                actual: self.phase,
            };
            return Err(self.rejected(player, error));
        }
        Ok(self.players[player].refill_hand())
    }

    // === Invariants ===

    /// Verify card conservation and the health ceiling.
    pub fn integrity_check(&self) -> Result<(), IntegrityError> {
        let mut seen: FxHashSet<Card> = FxHashSet::default();
        let mut found = 0;

        for (id, state) in self.players.iter() {
            if state.health > self.config.max_health {
                return Err(IntegrityError::HealthAboveMax {
                    player: id,
                    health: state.health,
                });
            }
            for &card in state.cards() {
                found += 1;
                if !seen.insert(card) {
                    return Err(IntegrityError::DuplicateCard(card));
                }
            }
        }

        if found != self.dealt {
            return Err(IntegrityError::CardCount {
                expected: self.dealt,
                found,
            });
        }
        Ok(())
    }

    // === Guards ===

    fn expect_pre_shield(&self, player: PlayerId) -> Result<(), RuleError> {
        match self.phase {
            Phase::PreShield(expected) if expected == player => Ok(()),
            Phase::PreShield(expected) => Err(RuleError::NotActivePlayer {
                expected,
                actual: player,
            }),
            Phase::Ended(_) => Err(RuleError::MatchEnded),
            actual => Err(RuleError::WrongPhase {
                expected: "pre-shield",
                actual,
            }),
        }
    }

    fn expect_main(&self, player: PlayerId) -> Result<(), RuleError> {
        match self.phase {
            Phase::Main { active } if active == player => Ok(()),
            Phase::Main { active } => Err(RuleError::NotActivePlayer {
                expected: active,
                actual: player,
            }),
            Phase::Ended(_) => Err(RuleError::MatchEnded),
            actual => Err(RuleError::WrongPhase {
                expected: "main",
                actual,
            }),
        }
    }

    fn rejected(&self, player: PlayerId, error: RuleError) -> RuleError {
        warn!("Rejected move from {} during {}: {}", player, self.phase, error);
        error
    }
}

/// Whether `card` may be placed as a starting shield.
fn shield_allowed(character_suit: Suit, card: Card, selection: &Selection) -> bool {
    match card.suit {
        Suit::Coins => true,
        Suit::Clubs => {
            character_suit == Suit::Clubs
                && selection.special
                && selection.stance != Some(ClubsStance::Attack)
        }
        Suit::Cups | Suit::Swords => false,
    }
}
