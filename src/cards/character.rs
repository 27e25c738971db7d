//! Characters: the face card each player is assigned at setup.
//!
//! The face decides the passive bonus, the suit decides the special
//! ability and, for Coins, the larger stack and hand.

use serde::{Deserialize, Serialize};

use super::card::{Card, Face, Suit};

/// A player's character, derived once from a face card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    pub face: Face,
    pub suit: Suit,
    /// +1 per attacking card for a Knight.
    pub attack_bonus: i32,
    /// +2 per shield for a King.
    pub defense_bonus: i32,
    /// +2 per healing card for a Page.
    pub heal_bonus: i32,
    /// Cards dealt into the stack (13 for Coins, else 12).
    pub stack_size: usize,
    /// Target hand size (5 for Coins, else 4).
    pub hand_size: usize,
}

impl Character {
    /// Derive a character from its face and suit.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        let coins = matches!(suit, Suit::Coins);
        Self {
            face,
            suit,
            attack_bonus: if matches!(face, Face::Knight) { 1 } else { 0 },
            defense_bonus: if matches!(face, Face::King) { 2 } else { 0 },
            heal_bonus: if matches!(face, Face::Page) { 2 } else { 0 },
            stack_size: if coins { 13 } else { 12 },
            hand_size: if coins { 5 } else { 4 },
        }
    }

    /// Derive a character from a face card. Returns `None` for numerals.
    #[must_use]
    pub fn from_card(card: Card) -> Option<Self> {
        match card.rank {
            super::Rank::Face(face) => Some(Self::new(face, card.suit)),
            _ => None,
        }
    }

    /// The face card this character was derived from.
    #[must_use]
    pub fn card(&self) -> Card {
        Card::new(self.suit, self.face.into())
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}
