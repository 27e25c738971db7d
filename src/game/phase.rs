//! Match phases.
//!
//! ```text
//! PreShield(One) -> PreShield(Two) -> Main { active } -> Ended(outcome)
//! ```
//!
//! Each pre-shield phase takes exactly one shield-or-skip from its seat.
//! Main alternates seats after every accepted move, starting with Player 1.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::MatchOutcome;

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The given seat may place one starting shield.
    PreShield(PlayerId),
    /// Regular turns.
    Main { active: PlayerId },
    /// Terminal.
    Ended(MatchOutcome),
}

impl Phase {
    /// The seat expected to submit the next move, if any.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        match self {
            Phase::PreShield(player) | Phase::Main { active: player } => Some(*player),
            Phase::Ended(_) => None,
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, Phase::Ended(_))
    }

    /// The phase that follows an accepted pre-shield move.
    pub(crate) fn after_pre_shield(player: PlayerId) -> Phase {
        match player {
            PlayerId::One => Phase::PreShield(PlayerId::Two),
            PlayerId::Two => Phase::Main {
                active: PlayerId::One,
            },
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::PreShield(player) => write!(f, "pre-shield ({})", player),
            Phase::Main { active } => write!(f, "main ({} to act)", active),
            Phase::Ended(outcome) => write!(f, "ended ({})", outcome),
        }
    }
}
