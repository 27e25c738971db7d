//! Combo validation.
//!
//! A combo is an ordered selection in which every card but the last
//! shares the acting character's suit; the last card may be off-suit.
//! Whether each card may use its special ability is decided separately
//! by the role table.

use crate::cards::{Card, Suit};
use crate::core::{ParseError, PlayerState, RuleError, Selection};

/// Check the suit rule for cards in play order.
///
/// Returns the first offending 1-based position on failure.
pub fn check_combo(cards: &[Card], character_suit: Suit) -> Result<(), RuleError> {
    let Some((_, leading)) = cards.split_last() else {
        return Err(ParseError::Empty.into());
    };

    // A single card has no leading cards, so it always passes.
    match leading.iter().position(|card| card.suit != character_suit) {
        Some(i) => Err(RuleError::ComboRuleViolation { position: i + 1 }),
        None => Ok(()),
    }
}

/// Decide whether `selections` is a structurally legal play for `player`.
///
/// Out-of-range indices make the selection invalid.
#[must_use]
pub fn validate(selections: &[Selection], player: &PlayerState) -> bool {
    let cards: Option<Vec<Card>> = selections
        .iter()
        .map(|s| player.hand.get(s.index).copied())
        .collect();

    match cards {
        Some(cards) => check_combo(&cards, player.character.suit).is_ok(),
        None => false,
    }
}
