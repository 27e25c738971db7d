//! Combat resolution integration tests.
//!
//! These tests drive `EffectResolver` through the public API with the
//! characters and cards of real match situations.

use disfida::cards::{Card, Character, Face, Rank, Suit};
use disfida::core::{ClubsStance, PlayerState, RuleError};
use disfida::effects::{EffectOutcome, EffectResolver};
use disfida::rules::{role_for, Role};

fn seat(name: &str, face: Face, suit: Suit) -> PlayerState {
    PlayerState::new(name, Character::new(face, suit), Vec::new(), 40)
}

/// Test a King's 3 shield fully absorbing a plain 5 attack.
#[test]
fn test_king_shield_absorbs_exactly() {
    let resolver = EffectResolver::default();
    let mut attacker = seat("Player 1", Face::Page, Suit::Swords);
    let mut defender = seat("Player 2", Face::King, Suit::Coins);
    let shield = Card::new(Suit::Coins, Rank::Three);
    defender.shields.push_back(shield);

    let outcome = resolver
        .apply_card(
            &mut attacker,
            Card::new(Suit::Swords, Rank::Five),
            &mut defender,
            false,
            None,
        )
        .unwrap();

    assert_eq!(outcome.damage_dealt(), 0);
    assert_eq!(defender.health, 40);
    assert!(defender.shields.is_empty());
    // Consumed shields go to the defender's stack, not the attacker's
    assert_eq!(defender.stack.back(), Some(&shield));
    assert!(attacker.stack.is_empty());
}

/// Test that damage equals the full attack value when no shields stand.
#[test]
fn test_unshielded_attack_deals_full_value() {
    let resolver = EffectResolver::default();
    for rank in Rank::NUMERIC {
        let mut attacker = seat("Player 1", Face::Knight, Suit::Clubs);
        let mut defender = seat("Player 2", Face::Page, Suit::Cups);
        let card = Card::new(Suit::Clubs, rank);

        let outcome = resolver
            .apply_card(&mut attacker, card, &mut defender, false, None)
            .unwrap();

        assert_eq!(outcome.damage_dealt(), card.value() + 1);
        assert_eq!(defender.health, 40 - card.value() - 1);
    }
}

/// Test Charity's Burden: the Cups player heals and the opponent gains half.
#[test]
fn test_shared_heal_clamps_both_sides() {
    let resolver = EffectResolver::default();
    let mut healer = seat("Player 1", Face::King, Suit::Cups);
    let mut other = seat("Player 2", Face::Knight, Suit::Swords);
    healer.health = 38;
    other.health = 10;

    let card = Card::new(Suit::Swords, Rank::Ace);
    let outcome = resolver
        .apply_card(&mut healer, card, &mut other, true, None)
        .unwrap();

    assert_eq!(healer.health, 40);
    assert_eq!(other.health, 15);
    assert_eq!(
        outcome.summary_lines(),
        vec!["Heal A of Swords: +11 HP, +5 to opponent"]
    );
}

/// Test Blood Price: shields are ignored and the attacker bleeds.
#[test]
fn test_blood_price_self_damage() {
    let resolver = EffectResolver::default();
    let mut attacker = seat("Player 1", Face::Page, Suit::Swords);
    let mut defender = seat("Player 2", Face::King, Suit::Coins);
    defender.shields.push_back(Card::new(Suit::Coins, Rank::Seven));
    defender.shields.push_back(Card::new(Suit::Coins, Rank::Six));

    let outcome = resolver
        .apply_card(
            &mut attacker,
            Card::new(Suit::Cups, Rank::Seven),
            &mut defender,
            true,
            None,
        )
        .unwrap();

    assert_eq!(defender.health, 33);
    assert_eq!(defender.shields.len(), 2);
    assert_eq!(attacker.health, 37);
    assert_eq!(
        outcome.summary_lines(),
        vec![
            "Blood Price 7 of Cups: 7 damage (ignores shields)",
            "Blood Price self-damage: -3 HP",
        ]
    );
}

/// Test that a Clubs special resolves one way only, per the stance.
#[test]
fn test_clubs_special_never_does_both() {
    let resolver = EffectResolver::default();
    let card = Card::new(Suit::Clubs, Rank::Five);

    let mut actor = seat("Player 1", Face::King, Suit::Clubs);
    let mut opponent = seat("Player 2", Face::Page, Suit::Cups);
    let outcome = resolver
        .apply_card(&mut actor, card, &mut opponent, true, Some(ClubsStance::Shield))
        .unwrap();
    assert_eq!(outcome, EffectOutcome::Shielded { card, defense: 7 });
    assert_eq!(opponent.health, 40);

    let mut actor = seat("Player 1", Face::King, Suit::Clubs);
    let mut opponent = seat("Player 2", Face::Page, Suit::Cups);
    resolver
        .apply_card(&mut actor, card, &mut opponent, true, None)
        .unwrap();
    assert!(actor.shields.is_empty());
    assert_eq!(opponent.health, 35);
}

/// Test every special pairing against the role table.
#[test]
fn test_special_table_matches_resolver() {
    let resolver = EffectResolver::default();
    for character_suit in Suit::ALL {
        for card_suit in Suit::ALL {
            let mut actor = seat("Player 1", Face::Page, character_suit);
            let mut opponent = seat("Player 2", Face::Page, character_suit);
            let card = Card::new(card_suit, Rank::Four);

            let result = resolver.apply_card(&mut actor, card, &mut opponent, true, None);
            match role_for(character_suit, card_suit, true) {
                Some(_) => assert!(result.is_ok()),
                None => assert_eq!(
                    result,
                    Err(RuleError::SpecialNotAllowed {
                        character_suit,
                        card
                    })
                ),
            }
        }
    }
    assert_eq!(role_for(Suit::Coins, Suit::Coins, true), None);
    assert_eq!(
        role_for(Suit::Clubs, Suit::Clubs, true),
        Some(Role::ChoiceRequired)
    );
}
