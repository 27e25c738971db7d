//! Match configuration.
//!
//! Hosts configure a match at startup through `MatchConfig`, usually via
//! `MatchConfigBuilder`. Every field has a serde default so a partial JSON
//! document is a valid configuration. Deserialized configurations go
//! through the same `validate` as the builder, so a document with e.g.
//! `starting_health` above `max_health` fails to load.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Character;

/// Health each player starts with.
pub const STARTING_HEALTH: i32 = 40;
/// Healing never raises health above this.
pub const MAX_HEALTH: i32 = 40;
/// Turns each player may take before the tournament ends.
pub const MAX_PLAYER_TURNS: u32 = 20;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    /// Seed for the deck shuffle and character draw.
    pub seed: u64,
    pub starting_health: i32,
    pub max_health: i32,
    /// Per-player turn cap.
    pub turn_limit: u32,
    /// Fixed characters for Player 1 and Player 2. `None` draws them at random.
    pub characters: Option<(Character, Character)>,
}

/// Wire shape of `MatchConfig`, before validation.
#[derive(Deserialize)]
struct RawMatchConfig {
    #[serde(default)]
    seed: u64,

    #[serde(default = "default_starting_health")]
    starting_health: i32,

    #[serde(default = "default_max_health")]
    max_health: i32,

    #[serde(default = "default_turn_limit")]
    turn_limit: u32,

    #[serde(default)]
    characters: Option<(Character, Character)>,
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        let config = MatchConfig {
            seed: raw.seed,
            starting_health: raw.starting_health,
            max_health: raw.max_health,
            turn_limit: raw.turn_limit,
            characters: raw.characters,
        };
        config.validate()?;
        Ok(config)
    }
}

fn default_starting_health() -> i32 {
    STARTING_HEALTH
}

fn default_max_health() -> i32 {
    MAX_HEALTH
}

fn default_turn_limit() -> u32 {
    MAX_PLAYER_TURNS
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_health: STARTING_HEALTH,
            max_health: MAX_HEALTH,
            turn_limit: MAX_PLAYER_TURNS,
            characters: None,
        }
    }
}

impl MatchConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Check that the configuration can produce a legal match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("Starting health", self.starting_health),
            ("Max health", self.max_health),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveHealth { field, value });
            }
        }
        if self.starting_health > self.max_health {
            return Err(ConfigError::StartingAboveMax {
                starting: self.starting_health,
                max: self.max_health,
            });
        }
        if self.turn_limit == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }
        if let Some((one, two)) = self.characters {
            if one.card() == two.card() {
                return Err(ConfigError::SharedCharacter(one.card()));
            }
        }
        Ok(())
    }
}

/// Builder for `MatchConfig`.
#[derive(Clone, Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn starting_health(mut self, health: i32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        self.config.starting_health = health;
        self
    }

    pub fn max_health(mut self, health: i32) -> Self {
        assert!(health > 0, "Max health must be positive");
        self.config.max_health = health;
        self
    }

    pub fn turn_limit(mut self, turns: u32) -> Self {
        assert!(turns > 0, "Turn limit must be at least 1");
        self.config.turn_limit = turns;
        self
    }

    /// Assign fixed characters instead of drawing them.
    pub fn characters(mut self, one: Character, two: Character) -> Self {
        assert!(
            one.card() != two.card(),
            "Players cannot share a character card"
        );
        self.config.characters = Some((one, two));
        self
    }

    pub fn build(self) -> MatchConfig {
        if let Err(error) = self.config.validate() {
            panic!("{}", error);
        }
        self.config
    }
}
