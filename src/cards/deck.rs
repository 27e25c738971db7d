//! Deck construction for the 40-card regional deck.
//!
//! The deck splits into 28 numeric cards (ace through seven in each suit),
//! which are shuffled and dealt into stacks, and 12 face cards, from which
//! characters are drawn.

use super::card::{Card, Face, Rank, Suit};

/// Total cards in the regional deck.
pub const DECK_SIZE: usize = 40;

/// Build the 28 numeric cards, suit by suit.
#[must_use]
pub fn numeric_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::NUMERIC.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Build the 12 face cards, suit by suit.
#[must_use]
pub fn face_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Face::ALL.iter().map(move |&face| Card::new(suit, face.into())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_deck_sizes() {
        assert_eq!(numeric_deck().len(), 28);
        assert_eq!(face_cards().len(), 12);
        assert_eq!(numeric_deck().len() + face_cards().len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_is_unique() {
        let all: FxHashSet<Card> = numeric_deck().into_iter().chain(face_cards()).collect();
        assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn test_numeric_has_no_faces() {
        assert!(numeric_deck().iter().all(|card| !card.rank.is_face()));
        assert!(face_cards().iter().all(|card| card.rank.is_face()));
    }
}
