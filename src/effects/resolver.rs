//! Effect resolution: applying one card to the two players.
//!
//! The resolver owns the combat arithmetic: bonuses, heal clamping,
//! unclamped damage and shield absorption. It does not remove cards from
//! hands or cycle played cards; the turn engine does that once a whole
//! combo has resolved.

use log::debug;

use super::{Effect, EffectOutcome};
use crate::cards::Card;
use crate::core::{ClubsStance, PlayerState, RuleError, MAX_HEALTH};
use crate::rules::resolve_role;

/// Resolves single cards against an acting player and their opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectResolver {
    max_health: i32,
}

impl Default for EffectResolver {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}

impl EffectResolver {
    /// Create a resolver that clamps healing at `max_health`.
    #[must_use]
    pub const fn new(max_health: i32) -> Self {
        Self { max_health }
    }

    /// Apply one card played by `actor` against `opponent`.
    ///
    /// Fails without touching either player if the special is not allowed
    /// for this pairing.
    pub fn apply_card(
        &self,
        actor: &mut PlayerState,
        card: Card,
        opponent: &mut PlayerState,
        special: bool,
        stance: Option<ClubsStance>,
    ) -> Result<EffectOutcome, RuleError> {
        let role = resolve_role(actor.character.suit, card, special)?;
        let effect = Effect::from_role(role, stance);
        Ok(self.apply_effect(actor, card, opponent, effect))
    }

    /// Apply an already decided effect.
    pub fn apply_effect(
        &self,
        actor: &mut PlayerState,
        card: Card,
        opponent: &mut PlayerState,
        effect: Effect,
    ) -> EffectOutcome {
        let outcome = match effect {
            Effect::Shield => {
                actor.shields.push_back(card);
                EffectOutcome::Shielded {
                    card,
                    defense: card.value() + actor.character.defense_bonus,
                }
            }

            Effect::Heal => {
                let amount = card.value() + actor.character.heal_bonus;
                let gained = actor.heal(amount, self.max_health);
                EffectOutcome::Healed {
                    card,
                    amount,
                    gained,
                }
            }

            Effect::SharedHeal => {
                let amount = card.value() + actor.character.heal_bonus;
                let gained = actor.heal(amount, self.max_health);
                let opponent_amount = card.value() / 2;
                let opponent_gained = opponent.heal(opponent_amount, self.max_health);
                EffectOutcome::SharedHeal {
                    card,
                    amount,
                    gained,
                    opponent_amount,
                    opponent_gained,
                }
            }

            Effect::Attack => {
                let total = card.value() + actor.character.attack_bonus;
                let (damage, absorbed) = Self::absorb(opponent, total);
                opponent.take_damage(damage);
                EffectOutcome::Attacked {
                    card,
                    total,
                    absorbed,
                    damage,
                }
            }

            Effect::IgnoreShieldAttack => {
                let total = card.value() + actor.character.attack_bonus;
                opponent.take_damage(total);
                // Self-damage lands after the opponent's
                let self_damage = card.value() / 2;
                actor.take_damage(self_damage);
                EffectOutcome::BloodPrice {
                    card,
                    total,
                    self_damage,
                }
            }
        };

        debug!(
            "{} resolves {:?} with {}: {} now {} HP, {} now {} HP",
            actor.name, effect, card, actor.name, actor.health, opponent.name, opponent.health
        );
        outcome
    }

    /// Run `attack` through the defender's shields.
    ///
    /// Shields are consumed smallest raw value first (equal values in play
    /// order), each absorbing its value plus the defender's defense bonus,
    /// until the attack is spent or no shields remain. A shield that brings
    /// the attack to exactly zero is still consumed. Consumed shields go to
    /// the bottom of the defender's stack.
    ///
    /// Returns the damage left over and the consumed shields.
    pub fn absorb(defender: &mut PlayerState, attack: i32) -> (i32, Vec<Card>) {
        if defender.shields.is_empty() {
            return (attack, Vec::new());
        }

        let mut order: Vec<usize> = (0..defender.shields.len()).collect();
        order.sort_by_key(|&i| defender.shields[i].value());

        let bonus = defender.character.defense_bonus;
        let mut remaining = attack;
        let mut consumed = Vec::new();
        for i in order {
            remaining -= defender.shields[i].value() + bonus;
            consumed.push(i);
            if remaining <= 0 {
                break;
            }
        }

        let absorbed: Vec<Card> = consumed.iter().map(|&i| defender.shields[i]).collect();
        defender.shields = defender
            .shields
            .iter()
            .enumerate()
            .filter(|(i, _)| !consumed.contains(i))
            .map(|(_, card)| *card)
            .collect();
        for &card in &absorbed {
            defender.cycle_to_bottom(card);
        }

        (remaining.max(0), absorbed)
    }
}
