//! Match lifecycle: setup, phases and the turn engine.
//!
//! - `phase`: the explicit phase state
//! - `turn`: `Match`, which owns both players and accepts moves
//! - `setup`: `MatchBuilder`, which assigns characters and deals

pub mod phase;
pub mod setup;
pub mod turn;

pub use phase::Phase;
pub use setup::MatchBuilder;
pub use turn::{IntegrityError, Match, SetupError};
