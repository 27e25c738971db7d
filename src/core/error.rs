//! Move rejection errors.
//!
//! Every rejection is recoverable: the match is left exactly as it was
//! and the caller is expected to solicit a new move.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, Suit};
use crate::game::Phase;

/// Malformed move text or an index that does not name a hand card.
///
/// Positions are 1-based, as typed by the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseError {
    /// Nothing to parse. Skips are spelled `"0"`.
    Empty,
    /// A token that is not a position with optional suffixes.
    MalformedToken(String),
    /// A position outside `1..=hand_size`.
    IndexOutOfRange { position: usize, hand_size: usize },
    /// The same position selected twice in one move.
    DuplicateIndex(usize),
    /// More cards than the phase accepts.
    TooManyCards { allowed: usize, found: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty move; enter '0' to skip"),
            ParseError::MalformedToken(token) => write!(f, "Invalid input: '{}'", token),
            ParseError::IndexOutOfRange {
                position,
                hand_size,
            } => write!(
                f,
                "Invalid card index {}. Must be 1-{}",
                position, hand_size
            ),
            ParseError::DuplicateIndex(position) => {
                write!(f, "Card {} selected more than once", position)
            }
            ParseError::TooManyCards { allowed, found } => write!(
                f,
                "Must be at most {} card(s), got {}",
                allowed, found
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Why a submitted move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RuleError {
    /// The move text could not be parsed against the current hand.
    Parse(ParseError),
    /// A card before the last position is off-suit, or more than one card is.
    ComboRuleViolation { position: usize },
    /// The special flag was set on a pairing with no special ability.
    SpecialNotAllowed { character_suit: Suit, card: Card },
    /// Pre-shield only: the card cannot be played as a shield.
    IllegalShieldCard { card: Card },
    /// The move does not belong to the current phase.
    WrongPhase { expected: &'static str, actual: Phase },
    /// The other seat is due to act.
    NotActivePlayer { expected: PlayerId, actual: PlayerId },
    /// The match already has a result.
    MatchEnded,
}

impl From<ParseError> for RuleError {
    fn from(error: ParseError) -> Self {
        RuleError::Parse(error)
    }
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleError::Parse(error) => write!(f, "{}", error),
            RuleError::ComboRuleViolation { position } => write!(
                f,
                "Invalid combo at card {}: must be character-suit cards + optional 1 non-suit card",
                position
            ),
            RuleError::SpecialNotAllowed {
                character_suit,
                card,
            } => write!(
                f,
                "{} has no special play for a {} character",
                card, character_suit
            ),
            RuleError::IllegalShieldCard { card } => {
                write!(f, "{} cannot be played as a shield", card)
            }
            RuleError::WrongPhase { expected, actual } => {
                write!(f, "Expected {} phase, match is in {}", expected, actual)
            }
            RuleError::NotActivePlayer { expected, actual } => {
                write!(f, "It is {}'s turn, not {}'s", expected, actual)
            }
            RuleError::MatchEnded => write!(f, "The match has already ended"),
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuleError::Parse(error) => Some(error),
            _ => None,
        }
    }
}

/// A match configuration that cannot produce a legal match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ConfigError {
    NonPositiveHealth { field: &'static str, value: i32 },
    StartingAboveMax { starting: i32, max: i32 },
    ZeroTurnLimit,
    SharedCharacter(Card),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveHealth { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::StartingAboveMax { starting, max } => write!(
                f,
                "Starting health cannot exceed max health ({} > {})",
                starting, max
            ),
            ConfigError::ZeroTurnLimit => write!(f, "Turn limit must be at least 1"),
            ConfigError::SharedCharacter(card) => {
                write!(f, "Players cannot share a character card ({})", card)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
