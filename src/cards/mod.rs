//! Card model: suits, ranks, cards, characters and the deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `(suit, rank)` value with a derived combat value
//! - `Character`: Bonuses and sizes derived from an assigned face card
//!
//! Cards carry no mutable state. Choices a player makes about a card
//! (such as the Clubs attack-or-shield stance) live in the submitted move.

pub mod card;
pub mod character;
pub mod deck;

pub use card::{Card, Face, Rank, Suit};
pub use character::Character;
pub use deck::{face_cards, numeric_deck, DECK_SIZE};
