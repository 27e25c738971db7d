//! Turn engine integration tests.
//!
//! These tests play matches through `Match`: setup, pre-shield rules,
//! main-phase sequencing, rejection atomicity and match endings.

use disfida::cards::{Card, Character, Face, Rank, Suit};
use disfida::core::{MatchConfig, ParseError, PlayerId, PlayerState, RuleError};
use disfida::game::{Match, Phase};
use disfida::rules::{GameResult, VictoryReason};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn seat(name: &str, character: Character, hand: Vec<Card>, stack: Vec<Card>) -> PlayerState {
    let mut state = PlayerState::new(name, character, stack, 40);
    state.hand = hand.into_iter().collect();
    state
}

/// A match at Player 1's pre-shield with a Clubs Page against a Cups Knight.
fn clubs_vs_cups() -> Match {
    let one = seat(
        "Player 1",
        Character::new(Face::Page, Suit::Clubs),
        vec![
            card(Suit::Clubs, Rank::Three),
            card(Suit::Coins, Rank::Two),
            card(Suit::Cups, Rank::Four),
            card(Suit::Clubs, Rank::Six),
        ],
        vec![card(Suit::Swords, Rank::Ace), card(Suit::Swords, Rank::Two)],
    );
    let two = seat(
        "Player 2",
        Character::new(Face::Knight, Suit::Cups),
        vec![
            card(Suit::Swords, Rank::Five),
            card(Suit::Cups, Rank::Seven),
            card(Suit::Coins, Rank::Four),
            card(Suit::Swords, Rank::Three),
        ],
        vec![card(Suit::Coins, Rank::Ace)],
    );
    Match::from_players(MatchConfig::default(), one, two).unwrap()
}

/// Play a match to the end with the first hand card every turn.
fn play_out(game: &mut Match) {
    game.submit_pre_shield(PlayerId::One, "0").unwrap();
    game.submit_pre_shield(PlayerId::Two, "0").unwrap();

    while let Some(player) = game.active_player() {
        let text = if game.player(player).hand.is_empty() { "0" } else { "1" };
        game.submit_main(player, text).unwrap();
        game.integrity_check().unwrap();
    }
}

/// Test illegal pre-shield cards are refused without touching the hand.
#[test]
fn test_pre_shield_rejections() {
    let mut game = clubs_vs_cups();
    let before = game.clone();

    for (text, expected) in [
        ("3", RuleError::IllegalShieldCard { card: card(Suit::Cups, Rank::Four) }),
        ("1", RuleError::IllegalShieldCard { card: card(Suit::Clubs, Rank::Three) }),
        ("1sa", RuleError::IllegalShieldCard { card: card(Suit::Clubs, Rank::Three) }),
        (
            "1,2",
            RuleError::Parse(ParseError::TooManyCards { allowed: 1, found: 2 }),
        ),
        (
            "9",
            RuleError::Parse(ParseError::IndexOutOfRange { position: 9, hand_size: 4 }),
        ),
    ] {
        assert_eq!(game.submit_pre_shield(PlayerId::One, text), Err(expected));
        assert_eq!(game, before);
    }

    assert_eq!(
        game.submit_pre_shield(PlayerId::Two, "3"),
        Err(RuleError::NotActivePlayer {
            expected: PlayerId::One,
            actual: PlayerId::Two,
        })
    );
}

/// Test the pre-shield sequence into the main phase.
#[test]
fn test_pre_shield_sequence() {
    let mut game = clubs_vs_cups();

    let lines = game.submit_pre_shield(PlayerId::One, "1s").unwrap();
    assert_eq!(
        lines,
        vec![
            "Player 1 plays starting shield 3 of Clubs",
            "Shield 3 of Clubs: +3 defense",
            "Player 1 draws 1 card(s) to reach full hand size",
        ]
    );
    let one = game.player(PlayerId::One);
    assert_eq!(one.shields.len(), 1);
    assert_eq!(one.hand.len(), 4);
    assert_eq!(one.hand.back(), Some(&card(Suit::Swords, Rank::Ace)));
    assert_eq!(game.phase(), Phase::PreShield(PlayerId::Two));

    // Coins is always a legal shield
    game.submit_pre_shield(PlayerId::Two, "3").unwrap();
    assert_eq!(game.player(PlayerId::Two).shields.len(), 1);
    assert_eq!(game.phase(), Phase::Main { active: PlayerId::One });

    // Pre-shield does not count as a turn
    assert_eq!(game.total_turns(), 0);
}

/// Test an attack into a standing shield followed by the reply.
#[test]
fn test_main_phase_exchange() {
    let mut game = clubs_vs_cups();
    game.submit_pre_shield(PlayerId::One, "0").unwrap();
    game.submit_pre_shield(PlayerId::Two, "3").unwrap();

    // Clubs 3 then Clubs 6: 3 breaks the 4 shield, 6 lands in full
    let lines = game.submit_main(PlayerId::One, "1,4").unwrap();
    assert_eq!(
        lines,
        vec![
            "Player 1 plays 1,4",
            "Shields 4 of Coins absorbed attack, sent to bottom of deck",
            "Attack 3 of Clubs: 3 blocked by shields",
            "Attack 6 of Clubs: 6 -> 6 damage",
            "Player 1 draws 2 card(s) to reach full hand size",
        ]
    );
    assert_eq!(game.player(PlayerId::Two).health, 34);
    assert!(game.player(PlayerId::Two).shields.is_empty());
    assert_eq!(game.active_player(), Some(PlayerId::Two));

    // Charity's Burden: Swords 5 heals the Knight for 5 and Player 1 for 2
    game.submit_main(PlayerId::Two, "1s").unwrap();
    assert_eq!(game.player(PlayerId::Two).health, 39);
    assert_eq!(game.player(PlayerId::One).health, 40);
    assert_eq!(game.total_turns(), 2);
    game.integrity_check().unwrap();
}

/// Test that a rejected combo leaves the match untouched.
#[test]
fn test_rejected_moves_are_atomic() {
    let mut game = clubs_vs_cups();
    game.submit_pre_shield(PlayerId::One, "0").unwrap();
    game.submit_pre_shield(PlayerId::Two, "0").unwrap();
    let before = game.clone();

    let rejections = [
        ("", RuleError::Parse(ParseError::Empty)),
        ("x", RuleError::Parse(ParseError::MalformedToken("x".to_string()))),
        ("2,2", RuleError::Parse(ParseError::DuplicateIndex(2))),
        ("3,2,1", RuleError::ComboRuleViolation { position: 1 }),
        (
            "1,3s",
            RuleError::SpecialNotAllowed {
                character_suit: Suit::Clubs,
                card: card(Suit::Cups, Rank::Four),
            },
        ),
    ];
    for (text, expected) in rejections {
        assert_eq!(game.submit_main(PlayerId::One, text), Err(expected));
        assert_eq!(game, before);
    }
}

/// Test that the same seed deals the same match.
#[test]
fn test_setup_is_deterministic() {
    let config = MatchConfig::builder().seed(2024).build();
    let (a, lines_a) = Match::new(config.clone()).unwrap();
    let (b, lines_b) = Match::new(config).unwrap();
    assert_eq!(a, b);
    assert_eq!(lines_a, lines_b);

    let differs = (0..10u64).any(|seed| {
        let (other, _) = Match::new(MatchConfig::builder().seed(seed).build()).unwrap();
        other.players() != a.players()
    });
    assert!(differs);
}

/// Test that dealt stacks never share a card.
#[test]
fn test_setup_deals_disjoint_stacks() {
    for seed in 0..25 {
        let (game, _) = Match::new(MatchConfig::builder().seed(seed).build()).unwrap();
        game.integrity_check().unwrap();

        for (_, player) in game.players().iter() {
            assert_eq!(player.hand.len(), player.character.hand_size);
            assert_eq!(player.card_count(), player.character.stack_size);
            assert!(player.cards().all(|c| !c.rank.is_face()));
        }
    }
}

/// Test that every match ends within the turn limit.
#[test]
fn test_matches_always_end() {
    for seed in 0..20 {
        let (mut game, _) = Match::new(MatchConfig::builder().seed(seed).build()).unwrap();
        play_out(&mut game);

        let outcome = game.result().unwrap();
        assert!(game.total_turns() <= 40);
        if outcome.reason == VictoryReason::Survival || outcome.reason == VictoryReason::Tiebreak {
            assert_eq!(game.total_turns(), 40);
        }
    }
}

/// Test a match reaching the limit with equal health goes to Player 2.
#[test]
fn test_turn_limit_tiebreak() {
    let config = MatchConfig::builder().seed(5).turn_limit(3).build();
    let (mut game, _) = Match::new(config).unwrap();
    game.submit_pre_shield(PlayerId::One, "0").unwrap();
    game.submit_pre_shield(PlayerId::Two, "0").unwrap();

    let mut last = Vec::new();
    while let Some(player) = game.active_player() {
        last = game.submit_main(player, "0").unwrap();
    }

    assert_eq!(game.total_turns(), 6);
    let outcome = game.result().unwrap();
    assert_eq!(outcome.result, GameResult::Winner(PlayerId::Two));
    assert_eq!(outcome.reason, VictoryReason::Tiebreak);
    assert_eq!(
        &last[last.len() - 2..],
        &["EXACT HEALTH TIE (40 HP each)!".to_string(), "Player 2 WINS TIEBREAKER!".to_string()]
    );
    assert_eq!(game.submit_main(PlayerId::One, "0"), Err(RuleError::MatchEnded));
}

/// Test that the whole match round-trips through JSON.
#[test]
fn test_match_serde_round_trip() {
    let (mut game, _) = Match::new(MatchConfig::builder().seed(11).build()).unwrap();
    game.submit_pre_shield(PlayerId::One, "0").unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Match = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}

/// Test that a configuration read from JSON gets the same checks as the builder.
#[test]
fn test_json_config_is_validated() {
    for json in [
        r#"{"seed":1,"starting_health":55}"#,
        r#"{"seed":1,"turn_limit":0}"#,
        r#"{"seed":1,"max_health":0}"#,
    ] {
        assert!(serde_json::from_str::<MatchConfig>(json).is_err(), "{json}");
    }

    let config: MatchConfig = serde_json::from_str(r#"{"seed":1,"starting_health":30}"#).unwrap();
    let (game, _) = Match::new(config).unwrap();
    assert_eq!(game.player(PlayerId::One).health, 30);
}

/// Test that hands can only be refilled during the main phase.
#[test]
fn test_refill_hand_outside_main_phase() {
    let mut game = clubs_vs_cups();
    let before = game.clone();

    assert!(matches!(
        game.refill_hand(PlayerId::One),
        Err(RuleError::WrongPhase { .. })
    ));
    assert_eq!(game, before);

    game.submit_pre_shield(PlayerId::One, "0").unwrap();
    game.submit_pre_shield(PlayerId::Two, "0").unwrap();
    assert!(game.refill_hand(PlayerId::One).is_ok());
}
