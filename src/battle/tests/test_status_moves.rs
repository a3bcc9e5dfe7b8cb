use crate::battle::conditions::TagKind;
use crate::battle::engine::{end_of_turn, resolve_move_use, MoveOutcome, TargetOutcome};
use crate::battle::state::{BattleEvent, EventBus};
use crate::battle::tests::common::{create_battle, foe, predictable_rng, user, TestBattlerBuilder};
use crate::battler::StatusCondition;
use crate::rng::BattleRng;
use pretty_assertions::assert_eq;
use schema::{Ability, Move, PokemonType, StatType};

#[test]
fn test_secondary_status_fires_under_its_chance() {
    let attacker = TestBattlerBuilder::new("Scorchik", 30)
        .with_types(vec![PokemonType::Fire])
        .with_moves(vec![Move::Ember])
        .build();
    let defender = TestBattlerBuilder::new("Leafling", 30)
        .with_types(vec![PokemonType::Grass])
        .with_hp(100)
        .build();
    let mut state = create_battle(attacker, defender);
    // acc, crit, damage, then a 5 on the 10% burn check.
    let mut rng = BattleRng::scripted(vec![50, 90, 50, 5]);
    let mut bus = EventBus::new();

    resolve_move_use(&mut state, user(), Move::Ember, Some(foe()), &mut rng, &mut bus).unwrap();
    assert_eq!(
        state.battler(foe()).unwrap().status,
        Some(StatusCondition::Burn)
    );
}

#[test]
fn test_secondary_status_respects_a_failed_roll() {
    let attacker = TestBattlerBuilder::new("Scorchik", 30)
        .with_moves(vec![Move::Ember])
        .build();
    let defender = TestBattlerBuilder::new("Leafling", 30).with_hp(100).build();
    let mut state = create_battle(attacker, defender);
    let mut rng = BattleRng::scripted(vec![50, 90, 50, 11]);
    let mut bus = EventBus::new();

    resolve_move_use(&mut state, user(), Move::Ember, Some(foe()), &mut rng, &mut bus).unwrap();
    assert_eq!(state.battler(foe()).unwrap().status, None);
}

#[test]
fn test_shield_dust_blocks_the_secondary_without_a_roll() {
    let attacker = TestBattlerBuilder::new("Scorchik", 30)
        .with_moves(vec![Move::Ember])
        .build();
    let defender = TestBattlerBuilder::new("Mothby", 30)
        .with_ability(Ability::ShieldDust)
        .with_hp(100)
        .build();
    let mut state = create_battle(attacker, defender);
    // Exactly three values: acc, crit, damage. A zeroed chance never draws.
    let mut rng = BattleRng::scripted(vec![50, 90, 50]);
    let mut bus = EventBus::new();

    resolve_move_use(&mut state, user(), Move::Ember, Some(foe()), &mut rng, &mut bus).unwrap();
    assert_eq!(state.battler(foe()).unwrap().status, None);
}

#[test]
fn test_secondary_roll_is_independent_of_unrelated_prior_draws() {
    // The burn roll runs inside a seed-offset scope: for a given seed and
    // turn it must come out the same no matter how many unrelated draws
    // preceded the move use.
    let resolve_burn = |seed: u64, skew: u32| {
        let attacker = TestBattlerBuilder::new("Scorchik", 30)
            .with_ability(Ability::NoGuard)
            .with_moves(vec![Move::Ember])
            .build();
        let defender = TestBattlerBuilder::new("Leafling", 30).with_hp(200).build();
        let mut state = create_battle(attacker, defender);
        let mut rng = BattleRng::seeded(seed);
        for _ in 0..skew {
            rng.next_outcome("unrelated earlier roll");
        }
        let mut bus = EventBus::new();
        resolve_move_use(&mut state, user(), Move::Ember, Some(foe()), &mut rng, &mut bus)
            .unwrap();
        state.battler(foe()).unwrap().status.is_some()
    };

    for seed in 0..40 {
        assert_eq!(resolve_burn(seed, 0), resolve_burn(seed, 57), "seed {}", seed);
    }
}

#[test]
fn test_toxic_damage_ramps_with_its_counter() {
    let attacker = TestBattlerBuilder::new("Venomoth", 30)
        .with_moves(vec![Move::Toxic])
        .build();
    let defender = TestBattlerBuilder::new("Victim", 30)
        .with_stats([160, 60, 60, 60, 60, 60])
        .build();
    let mut state = create_battle(attacker, defender);
    let mut rng = predictable_rng();
    let mut bus = EventBus::new();

    resolve_move_use(&mut state, user(), Move::Toxic, Some(foe()), &mut rng, &mut bus).unwrap();
    assert_eq!(
        state.battler(foe()).unwrap().status,
        Some(StatusCondition::Toxic(1))
    );

    // 1/16, then 2/16 of max HP.
    end_of_turn(&mut state, &mut bus);
    assert_eq!(state.battler(foe()).unwrap().current_hp, 160 - 10);
    end_of_turn(&mut state, &mut bus);
    assert_eq!(state.battler(foe()).unwrap().current_hp, 160 - 10 - 20);
}

#[test]
fn test_status_move_with_nothing_to_do_reports_no_effect() {
    let attacker = TestBattlerBuilder::new("Growler", 30)
        .with_moves(vec![Move::Growl])
        .build();
    let defender = TestBattlerBuilder::new("Stoic", 30).build();
    let mut state = create_battle(attacker, defender);
    state
        .battler_mut(foe())
        .unwrap()
        .modify_stat_stage(StatType::Atk, -6);
    let mut rng = predictable_rng();
    let mut bus = EventBus::new();

    let outcome =
        resolve_move_use(&mut state, user(), Move::Growl, Some(foe()), &mut rng, &mut bus)
            .unwrap();

    match outcome {
        MoveOutcome::Resolved { targets } => assert_eq!(targets, vec![TargetOutcome::NoEffect]),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(bus
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::StatChangeBlocked { stat: StatType::Atk, .. })));
}

#[test]
fn test_paralysis_bounces_off_electric_types() {
    let attacker = TestBattlerBuilder::new("Sparkit", 30)
        .with_moves(vec![Move::ThunderWave])
        .build();
    let defender = TestBattlerBuilder::new("Voltle", 30)
        .with_types(vec![PokemonType::Electric])
        .build();
    let mut state = create_battle(attacker, defender);
    let mut rng = predictable_rng();
    let mut bus = EventBus::new();

    let outcome =
        resolve_move_use(&mut state, user(), Move::ThunderWave, Some(foe()), &mut rng, &mut bus)
            .unwrap();

    assert!(!outcome.succeeded());
    assert_eq!(state.battler(foe()).unwrap().status, None);
}

#[test]
fn test_flinch_tag_applies_and_clears_at_end_of_turn() {
    let attacker = TestBattlerBuilder::new("Chomper", 30)
        .with_moves(vec![Move::Bite])
        .build();
    let defender = TestBattlerBuilder::new("Victim", 30).with_hp(150).build();
    let mut state = create_battle(attacker, defender);
    // acc, crit, damage, then 25 on the 30% flinch check.
    let mut rng = BattleRng::scripted(vec![50, 90, 50, 25]);
    let mut bus = EventBus::new();

    resolve_move_use(&mut state, user(), Move::Bite, Some(foe()), &mut rng, &mut bus).unwrap();
    assert!(state.battler(foe()).unwrap().has_tag(TagKind::Flinched));

    end_of_turn(&mut state, &mut bus);
    assert!(!state.battler(foe()).unwrap().has_tag(TagKind::Flinched));
    assert!(bus
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::TagExpired { tag: TagKind::Flinched, .. })));
}

#[test]
fn test_sound_moves_bounce_off_soundproof() {
    let attacker = TestBattlerBuilder::new("Howler", 30)
        .with_moves(vec![Move::Growl])
        .build();
    let defender = TestBattlerBuilder::new("Earmuff", 30)
        .with_ability(Ability::Soundproof)
        .build();
    let mut state = create_battle(attacker, defender);
    let mut rng = predictable_rng();
    let mut bus = EventBus::new();

    let outcome =
        resolve_move_use(&mut state, user(), Move::Growl, Some(foe()), &mut rng, &mut bus)
            .unwrap();

    assert!(!outcome.succeeded());
    assert_eq!(state.battler(foe()).unwrap().stat_stage(StatType::Atk), 0);
    assert!(bus
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::MoveHadNoEffect { .. })));
}

#[test]
fn test_disable_locks_the_targets_last_move() {
    let attacker = TestBattlerBuilder::new("Hexer", 30)
        .with_moves(vec![Move::Disable])
        .build();
    let defender = TestBattlerBuilder::new("Victim", 30).build();
    let mut state = create_battle(attacker, defender);
    state
        .battler_mut(foe())
        .unwrap()
        .record_move(Move::Tackle, true);
    let mut rng = predictable_rng();
    let mut bus = EventBus::new();

    let outcome =
        resolve_move_use(&mut state, user(), Move::Disable, Some(foe()), &mut rng, &mut bus)
            .unwrap();

    assert!(outcome.succeeded());
    assert!(state.battler(foe()).unwrap().has_tag(TagKind::Disabled));
}

#[test]
fn test_disable_fails_without_a_last_move() {
    let attacker = TestBattlerBuilder::new("Hexer", 30)
        .with_moves(vec![Move::Disable])
        .build();
    let defender = TestBattlerBuilder::new("Victim", 30).build();
    let mut state = create_battle(attacker, defender);
    let mut rng = predictable_rng();
    let mut bus = EventBus::new();

    let outcome =
        resolve_move_use(&mut state, user(), Move::Disable, Some(foe()), &mut rng, &mut bus)
            .unwrap();
    assert!(!outcome.succeeded());
}
