//! Victory conditions: knockouts, the turn limit and the tournament end.
//!
//! The turn engine checks knockouts first after every move, then the turn
//! limit. When the limit is reached, higher health wins and an exact tie
//! goes to Player 2.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerState};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players knocked out by the same move.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// How the match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryReason {
    Knockout,
    DoubleKnockout,
    /// Turn limit reached, strictly higher health.
    Survival,
    /// Turn limit reached, equal health: Player 2 wins.
    Tiebreak,
}

/// A finished match: who won, and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: GameResult,
    pub reason: VictoryReason,
}

impl MatchOutcome {
    /// The winning seat, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            GameResult::Winner(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.result, self.reason) {
            (GameResult::Draw, _) => f.write_str("draw by double knockout"),
            (GameResult::Winner(p), VictoryReason::Knockout) => write!(f, "{} by knockout", p),
            (GameResult::Winner(p), VictoryReason::Tiebreak) => write!(f, "{} by tiebreaker", p),
            (GameResult::Winner(p), _) => write!(f, "{} by survival", p),
        }
    }
}

/// Check both players for knockouts at once.
///
/// `one` and `two` are Player 1 and Player 2. A double knockout is a draw
/// regardless of whose move caused it.
pub fn check_victory(one: &PlayerState, two: &PlayerState) -> (Option<MatchOutcome>, Vec<String>) {
    let outcome = match (one.is_knocked_out(), two.is_knocked_out()) {
        (true, true) => MatchOutcome {
            result: GameResult::Draw,
            reason: VictoryReason::DoubleKnockout,
        },
        (true, false) => MatchOutcome {
            result: GameResult::Winner(PlayerId::Two),
            reason: VictoryReason::Knockout,
        },
        (false, true) => MatchOutcome {
            result: GameResult::Winner(PlayerId::One),
            reason: VictoryReason::Knockout,
        },
        (false, false) => return (None, Vec::new()),
    };

    let line = match outcome.result {
        GameResult::Draw => "DOUBLE KNOCKOUT - IT'S A TIE!".to_string(),
        GameResult::Winner(PlayerId::One) => format!("{} WINS BY KNOCKOUT!", one.name),
        GameResult::Winner(PlayerId::Two) => format!("{} WINS BY KNOCKOUT!", two.name),
    };
    (Some(outcome), vec![line])
}

/// Check if both players have used all `turn_limit` of their turns.
#[must_use]
pub fn check_turn_limit(one: &PlayerState, two: &PlayerState, turn_limit: u32) -> bool {
    one.turns_played >= turn_limit && two.turns_played >= turn_limit
}

/// Decide a match that reached the turn limit without a knockout.
pub fn resolve_tournament_end(one: &PlayerState, two: &PlayerState) -> (MatchOutcome, Vec<String>) {
    let mut lines = vec![
        format!(
            "TOURNAMENT END! {} total turns played",
            one.turns_played + two.turns_played
        ),
        format!(
            "Final Health - {} ({}): {}HP",
            one.name, one.character, one.health
        ),
        format!("{} ({}): {}HP", two.name, two.character, two.health),
    ];

    let outcome = if one.health > two.health {
        lines.push(format!(
            "{} WINS BY SURVIVAL! ({} > {} HP)",
            one.name, one.health, two.health
        ));
        MatchOutcome {
            result: GameResult::Winner(PlayerId::One),
            reason: VictoryReason::Survival,
        }
    } else if two.health > one.health {
        lines.push(format!(
            "{} WINS BY SURVIVAL! ({} > {} HP)",
            two.name, two.health, one.health
        ));
        MatchOutcome {
            result: GameResult::Winner(PlayerId::Two),
            reason: VictoryReason::Survival,
        }
    } else {
        lines.push(format!("EXACT HEALTH TIE ({} HP each)!", one.health));
        lines.push(format!("{} WINS TIEBREAKER!", two.name));
        MatchOutcome {
            result: GameResult::Winner(PlayerId::Two),
            reason: VictoryReason::Tiebreak,
        }
    };

    (outcome, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Character, Face, Suit};

    fn players(h1: i32, h2: i32) -> (PlayerState, PlayerState) {
        let one = PlayerState::new("Player 1", Character::new(Face::King, Suit::Coins), vec![], h1);
        let two = PlayerState::new("Player 2", Character::new(Face::Page, Suit::Cups), vec![], h2);
        (one, two)
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::Two);
        assert!(!result.is_winner(PlayerId::One));
        assert!(result.is_winner(PlayerId::Two));
        assert!(!GameResult::Draw.is_winner(PlayerId::One));
    }

    #[test]
    fn test_no_knockout() {
        let (one, two) = players(1, 40);
        let (outcome, lines) = check_victory(&one, &two);
        assert!(outcome.is_none());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_knockout_at_zero() {
        let (one, two) = players(40, 0);
        let (outcome, lines) = check_victory(&one, &two);
        let outcome = outcome.unwrap();
        assert_eq!(outcome.winner(), Some(PlayerId::One));
        assert_eq!(outcome.reason, VictoryReason::Knockout);
        assert_eq!(lines, vec!["Player 1 WINS BY KNOCKOUT!"]);

        let (one, two) = players(-3, 12);
        let (outcome, _) = check_victory(&one, &two);
        assert_eq!(outcome.unwrap().winner(), Some(PlayerId::Two));
    }

    #[test]
    fn test_double_knockout_is_draw() {
        let (one, two) = players(0, -4);
        let (outcome, lines) = check_victory(&one, &two);
        let outcome = outcome.unwrap();
        assert_eq!(outcome.result, GameResult::Draw);
        assert_eq!(outcome.winner(), None);
        assert_eq!(lines, vec!["DOUBLE KNOCKOUT - IT'S A TIE!"]);
    }

    #[test]
    fn test_turn_limit_requires_both() {
        let (mut one, mut two) = players(40, 40);
        one.turns_played = 20;
        two.turns_played = 19;
        assert!(!check_turn_limit(&one, &two, 20));
        two.turns_played = 20;
        assert!(check_turn_limit(&one, &two, 20));
    }

    #[test]
    fn test_survival_winner() {
        let (one, two) = players(12, 30);
        let (outcome, lines) = resolve_tournament_end(&one, &two);
        assert_eq!(outcome.winner(), Some(PlayerId::Two));
        assert_eq!(outcome.reason, VictoryReason::Survival);
        assert_eq!(lines.last().unwrap(), "Player 2 WINS BY SURVIVAL! (30 > 12 HP)");

        let (one, two) = players(31, 30);
        let (outcome, _) = resolve_tournament_end(&one, &two);
        assert_eq!(outcome.winner(), Some(PlayerId::One));
    }

    #[test]
    fn test_exact_tie_goes_to_player_two() {
        let (mut one, mut two) = players(17, 17);
        one.turns_played = 20;
        two.turns_played = 20;
        let (outcome, lines) = resolve_tournament_end(&one, &two);
        assert_eq!(outcome.winner(), Some(PlayerId::Two));
        assert_eq!(outcome.reason, VictoryReason::Tiebreak);
        assert_eq!(lines[0], "TOURNAMENT END! 40 total turns played");
        assert_eq!(lines[1], "Final Health - Player 1 (King of Coins): 17HP");
        assert_eq!(lines[2], "Player 2 (Page of Cups): 17HP");
        assert!(lines.contains(&"Player 2 WINS TIEBREAKER!".to_string()));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = MatchOutcome {
            result: GameResult::Winner(PlayerId::Two),
            reason: VictoryReason::Tiebreak,
        };
        assert_eq!(outcome.to_string(), "Player 2 by tiebreaker");
    }
}
