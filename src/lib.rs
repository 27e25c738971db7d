//! # disfida
//!
//! Rules engine for a two-player card duel played with a 40-card regional
//! deck.
//!
//! Each player is assigned a face card as their character, which grants a
//! passive bonus and a suit special. Players draw from private stacks and
//! play single cards or combos to attack, heal or raise shields. A match
//! ends by knockout or, once both players have used their turns, by
//! comparing health.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering or input handling. Callers submit move
//!    text and read back summary lines and player state.
//!
//! 2. **All-or-nothing moves**: A rejected move returns a `RuleError` and
//!    leaves the match untouched.
//!
//! 3. **Deterministic**: A `MatchConfig` seed fixes characters and deals.
//!
//! ## Modules
//!
//! - `cards`: Suits, ranks, cards, characters and the deck
//! - `core`: Players, player state, moves, RNG, configuration, errors
//! - `rules`: Combo validation, the role table, victory and summary text
//! - `effects`: Per-card combat resolution and shield absorption
//! - `game`: Phases, setup and the turn engine
//!
//! ## Example
//!
//! ```
//! use disfida::{Match, MatchConfig, PlayerId};
//!
//! let (mut game, setup_lines) = Match::new(MatchConfig::builder().seed(42).build()).unwrap();
//! assert_eq!(setup_lines[0], "Characters assigned:");
//!
//! game.submit_pre_shield(PlayerId::One, "0").unwrap();
//! game.submit_pre_shield(PlayerId::Two, "0").unwrap();
//!
//! let lines = game.submit_main(PlayerId::One, "1").unwrap();
//! assert!(!lines.is_empty());
//! assert_eq!(game.player(PlayerId::One).turns_played, 1);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Character, Face, Rank, Suit};

pub use crate::core::{
    ClubsStance, ConfigError, GameRng, MatchConfig, MatchConfigBuilder, MoveSpec, ParseError, PlayerId,
    PlayerMap, PlayerState, RuleError, Selection,
};

pub use crate::rules::{GameResult, MatchOutcome, Role, VictoryReason};

pub use crate::effects::{Effect, EffectOutcome, EffectResolver};

pub use crate::game::{IntegrityError, Match, MatchBuilder, Phase, SetupError};
