//! Card values: suits, ranks and the immutable `Card` pair.
//!
//! A `Card` is identified purely by its `(suit, rank)` pair. The regional
//! deck contains each pair exactly once, so two equal cards can only be the
//! same physical card; zones track membership by position, never by
//! comparing identities.

use serde::{Deserialize, Serialize};

/// One of the four regional suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    /// Default role: shield.
    Coins,
    /// Default role: heal.
    Cups,
    /// Default role: attack.
    Swords,
    /// Default role: attack.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Coins, Suit::Cups, Suit::Swords, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Coins => "Coins",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Clubs => "Clubs",
        };
        f.write_str(name)
    }
}

/// The three face ranks. Face cards are never dealt into stacks; they
/// become characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Page,
    Knight,
    King,
}

impl Face {
    /// All faces in rank order.
    pub const ALL: [Face; 3] = [Face::Page, Face::Knight, Face::King];
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Page => "Page",
            Face::Knight => "Knight",
            Face::King => "King",
        };
        f.write_str(name)
    }
}

/// Card rank: ace, numerals two through seven, or a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Face(Face),
}

impl Rank {
    /// The seven non-face ranks, ace first.
    pub const NUMERIC: [Rank; 7] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
    ];

    /// Combat value: ace 11, numerals their number, faces 10.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Face(_) => 10,
        }
    }

    /// Check if this is a face rank.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Face(_))
    }
}

impl From<Face> for Rank {
    fn from(face: Face) -> Self {
        Rank::Face(face)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => f.write_str("A"),
            Rank::Face(face) => write!(f, "{}", face),
            numeral => write!(f, "{}", numeral.value()),
        }
    }
}

/// An immutable playing card.
///
/// ```
/// use disfida::cards::{Card, Rank, Suit};
///
/// let ace = Card::new(Suit::Cups, Rank::Ace);
/// assert_eq!(ace.value(), 11);
/// assert_eq!(ace.to_string(), "A of Cups");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Combat value derived from the rank.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.rank.value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
