//! Combat resolution for individual cards.
//!
//! - `Effect`: a role with the Clubs stance settled
//! - `EffectOutcome`: what one card did, with its summary lines
//! - `EffectResolver`: applies a card and runs shield absorption

mod effect;
mod resolver;

pub use effect::{Effect, EffectOutcome};
pub use resolver::EffectResolver;
