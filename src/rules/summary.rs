//! Human-readable rules summary shown before a match.

use crate::core::MatchConfig;

/// The rules text, one line per entry, for a match played under `config`.
#[must_use]
pub fn rules_summary(config: &MatchConfig) -> Vec<String> {
    let turn_limit = config.turn_limit;
    let rule = "=".repeat(50);
    vec![
        rule.clone(),
        "ITALIAN CARD COMBAT - TOURNAMENT RULES".to_string(),
        rule.clone(),
        format!(
            "OBJECTIVE: Reduce opponent's HP to 0 or survive {} turns with more HP",
            turn_limit * 2
        ),
        format!("TURN LIMIT: {} turns each ({} total)", turn_limit, turn_limit * 2),
        "RESOLUTION: Higher HP wins. Exact tie: Player 2 wins!".to_string(),
        "DECK: 40-card regional deck (A=11, 2-7, Page/Knight/King=10)".to_string(),
        format!(
            "START: {} HP each, 4-card hand (5 for Coins char)",
            config.starting_health
        ),
        String::new(),
        "CHARACTERS & BONUSES:".to_string(),
        "- King: +2 defense per shield".to_string(),
        "- Knight: +1 attack per attack card".to_string(),
        "- Page: +2 healing per healing card".to_string(),
        String::new(),
        "SUIT SPECIALS:".to_string(),
        "- Coins: Wealth of Choice - +1 card in stack/hand (passive)".to_string(),
        "- Swords: Blood Price - Use Cups as attacks (ignore shields, self-damage)".to_string(),
        "- Cups: Charity's Burden - Use Swords as healing (opponent gains half)".to_string(),
        "- Clubs: Iron Versatility - Clubs can be attack OR shield".to_string(),
        String::new(),
        "COMBOS: Sequence of character-suit cards + optional 1 non-suit card".to_string(),
        "TURNS: Skip, play 1 card, or play combo. Draw to hand size at turn end".to_string(),
        "SHIELDS: Visible on table, destroyed smallest to largest, cycle to deck bottom"
            .to_string(),
        format!(
            "ENDGAME: After {} turns, higher HP wins. Exact tie = Player 2 wins!",
            turn_limit * 2
        ),
        rule,
    ]
}
