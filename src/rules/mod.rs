//! Game rules that do not mutate state.
//!
//! - `combo`: which multi-card selections are legal
//! - `roles`: what each card does for a given character and special flag
//! - `outcome`: knockout, turn limit and tournament-end decisions
//! - `summary`: the rules text shown to players
//!
//! State changes live in `effects` (one card) and `game` (whole turns).

pub mod combo;
pub mod outcome;
pub mod roles;
pub mod summary;

pub use combo::{check_combo, validate};
pub use outcome::{
    check_turn_limit, check_victory, resolve_tournament_end, GameResult, MatchOutcome,
    VictoryReason,
};
pub use roles::{resolve_role, role_for, Role};
pub use summary::rules_summary;
