//! Core engine types: players, state, moves, RNG, configuration, errors.
//!
//! Everything here is independent of turn sequencing; the `game` module
//! drives these types through a match.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ClubsStance, MoveSpec, Selection};
pub use config::{MatchConfig, MatchConfigBuilder, MAX_HEALTH, MAX_PLAYER_TURNS, STARTING_HEALTH};
pub use error::{ConfigError, ParseError, RuleError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::PlayerState;
