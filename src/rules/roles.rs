//! The role table: what a card does when played.
//!
//! A card's role is a pure function of the acting character's suit, the
//! card's suit and whether the special ability was requested. Every
//! combination is enumerated here, so legal and illegal specials can be
//! tested exhaustively.
//!
//! | Character | Card   | Special | Role                 |
//! |-----------|--------|---------|----------------------|
//! | any       | Coins  | no      | `Shield`             |
//! | any       | Cups   | no      | `Heal`               |
//! | any       | Swords | no      | `Attack`             |
//! | any       | Clubs  | no      | `Attack`             |
//! | Swords    | Cups   | yes     | `IgnoreShieldAttack` |
//! | Cups      | Swords | yes     | `SharedHeal`         |
//! | Clubs     | Clubs  | yes     | `ChoiceRequired`     |
//! | otherwise |        | yes     | rejected             |

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::RuleError;

/// The effect family a played card falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Shield,
    Heal,
    Attack,
    /// Swords character playing Cups: damage bypasses shields, with self-damage.
    IgnoreShieldAttack,
    /// Cups character playing Swords: heal self, opponent heals half.
    SharedHeal,
    /// Clubs character playing Clubs: attack or shield, per the move's stance.
    ChoiceRequired,
}

/// Look up the role for a pairing. `None` means the special is not allowed.
#[must_use]
pub const fn role_for(character_suit: Suit, card_suit: Suit, special: bool) -> Option<Role> {
    use Suit::*;

    match (character_suit, card_suit, special) {
        (_, Coins, false) => Some(Role::Shield),
        (_, Cups, false) => Some(Role::Heal),
        (_, Swords | Clubs, false) => Some(Role::Attack),
        (Swords, Cups, true) => Some(Role::IgnoreShieldAttack),
        (Cups, Swords, true) => Some(Role::SharedHeal),
        (Clubs, Clubs, true) => Some(Role::ChoiceRequired),
        (_, _, true) => None,
    }
}

/// Look up the role for `card`, rejecting a disallowed special.
pub fn resolve_role(character_suit: Suit, card: Card, special: bool) -> Result<Role, RuleError> {
    role_for(character_suit, card.suit, special).ok_or(RuleError::SpecialNotAllowed {
        character_suit,
        card,
    })
}
