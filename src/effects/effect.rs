//! Effect definitions.
//!
//! An `Effect` is a role with every choice settled: a Clubs special has
//! become either an attack or a shield. An `EffectOutcome` records what
//! resolving one card actually did, and renders the summary lines shown
//! to players.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ClubsStance;
use crate::rules::Role;

/// A fully decided card effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Shield,
    Heal,
    Attack,
    IgnoreShieldAttack,
    SharedHeal,
}

impl Effect {
    /// Settle a role, using `stance` for `ChoiceRequired`.
    ///
    /// A missing stance plays the card as an attack.
    #[must_use]
    pub fn from_role(role: Role, stance: Option<ClubsStance>) -> Self {
        match role {
            Role::Shield => Effect::Shield,
            Role::Heal => Effect::Heal,
            Role::Attack => Effect::Attack,
            Role::IgnoreShieldAttack => Effect::IgnoreShieldAttack,
            Role::SharedHeal => Effect::SharedHeal,
            Role::ChoiceRequired => match stance {
                Some(ClubsStance::Shield) => Effect::Shield,
                Some(ClubsStance::Attack) | None => Effect::Attack,
            },
        }
    }
}

/// What resolving one card did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    Shielded {
        card: Card,
        /// Card value plus the owner's defense bonus.
        defense: i32,
    },
    Healed {
        card: Card,
        amount: i32,
        /// Health actually gained after clamping.
        gained: i32,
    },
    SharedHeal {
        card: Card,
        amount: i32,
        gained: i32,
        opponent_amount: i32,
        opponent_gained: i32,
    },
    Attacked {
        card: Card,
        total: i32,
        /// Shields consumed, smallest first.
        absorbed: Vec<Card>,
        damage: i32,
    },
    BloodPrice {
        card: Card,
        total: i32,
        self_damage: i32,
    },
}

impl EffectOutcome {
    /// Whether the card goes back to its owner's stack after the turn.
    #[must_use]
    pub fn cycles(&self) -> bool {
        !matches!(self, EffectOutcome::Shielded { .. })
    }

    /// Damage dealt to the opponent's health.
    #[must_use]
    pub fn damage_dealt(&self) -> i32 {
        match self {
            EffectOutcome::Attacked { damage, .. } => *damage,
            EffectOutcome::BloodPrice { total, .. } => *total,
            _ => 0,
        }
    }

    /// Player-facing summary lines.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            EffectOutcome::Shielded { card, defense } => {
                vec![format!("Shield {}: +{} defense", card, defense)]
            }
            EffectOutcome::Healed { card, amount, .. } => {
                vec![format!("Heal {}: +{} HP", card, amount)]
            }
            EffectOutcome::SharedHeal {
                card,
                amount,
                opponent_amount,
                ..
            } => vec![format!(
                "Heal {}: +{} HP, +{} to opponent",
                card, amount, opponent_amount
            )],
            EffectOutcome::Attacked {
                card,
                total,
                absorbed,
                damage,
            } => {
                let mut lines = Vec::new();
                if !absorbed.is_empty() {
                    let names: Vec<String> = absorbed.iter().map(Card::to_string).collect();
                    lines.push(format!(
                        "Shields {} absorbed attack, sent to bottom of deck",
                        names.join(", ")
                    ));
                }
                if *damage > 0 {
                    lines.push(format!("Attack {}: {} -> {} damage", card, total, damage));
                } else {
                    lines.push(format!("Attack {}: {} blocked by shields", card, total));
                }
                lines
            }
            EffectOutcome::BloodPrice {
                card,
                total,
                self_damage,
            } => vec![
                format!("Blood Price {}: {} damage (ignores shields)", card, total),
                format!("Blood Price self-damage: -{} HP", self_damage),
            ],
        }
    }
}
