//! Player state: the mutable aggregate behind each seat.
//!
//! ## Zones
//!
//! - `stack`: private draw queue. Front is the draw end, back is where
//!   cycled cards are inserted.
//! - `hand`: ordered; players reference cards by 1-based position.
//! - `shields`: face-up defending cards, in the order they were played.
//!
//! Zones use `im::Vector` so a whole match clones in O(1). The turn engine
//! relies on that to resolve a move on a copy and commit it only once the
//! move has fully succeeded.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Character};

/// One player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub character: Character,
    pub stack: Vector<Card>,
    pub hand: Vector<Card>,
    pub shields: Vector<Card>,
    /// Clamped above on heal, never clamped below; `<= 0` is a knockout.
    pub health: i32,
    pub turns_played: u32,
}

impl PlayerState {
    /// Create a player with an empty hand and no shields.
    pub fn new(
        name: impl Into<String>,
        character: Character,
        stack: impl IntoIterator<Item = Card>,
        health: i32,
    ) -> Self {
        Self {
            name: name.into(),
            character,
            stack: stack.into_iter().collect(),
            hand: Vector::new(),
            shields: Vector::new(),
            health,
            turns_played: 0,
        }
    }

    /// Draw up to `count` cards from the front of the stack.
    ///
    /// Stops short without error when the stack runs out.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.stack.pop_front() {
                Some(card) => {
                    self.hand.push_back(card);
                    drawn.push(card);
                }
                None => break,
            }
        }
        drawn
    }

    /// Cards missing from a full hand.
    #[must_use]
    pub fn cards_needed(&self) -> usize {
        self.character.hand_size.saturating_sub(self.hand.len())
    }

    /// Draw until the hand reaches the character's hand size.
    pub fn refill_hand(&mut self) -> Vec<String> {
        let needed = self.cards_needed();
        if needed == 0 {
            return Vec::new();
        }

        let drawn = self.draw_cards(needed);
        debug!(
            "{} draws {} of {} needed card(s), {} left in stack",
            self.name,
            drawn.len(),
            needed,
            self.stack.len()
        );

        if drawn.is_empty() {
            Vec::new()
        } else {
            vec![format!(
                "{} draws {} card(s) to reach full hand size",
                self.name,
                drawn.len()
            )]
        }
    }

    /// Append a card to the bottom of the stack.
    pub fn cycle_to_bottom(&mut self, card: Card) {
        self.stack.push_back(card);
    }

    /// Heal, clamping at `max_health`. Returns the health actually gained.
    pub fn heal(&mut self, amount: i32, max_health: i32) -> i32 {
        let before = self.health;
        self.health = max_health.min(self.health + amount).max(before);
        self.health - before
    }

    /// Lose health. Never clamped, so knockouts stay visible.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Check if health has dropped to zero or below.
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.health <= 0
    }

    /// Every card this player holds, in hand, stack and shields.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().chain(self.stack.iter()).chain(self.shields.iter())
    }

    /// Number of cards held across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.stack.len() + self.shields.len()
    }
}
