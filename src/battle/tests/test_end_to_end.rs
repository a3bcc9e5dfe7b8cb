use crate::battle::effects::EffectContext;
use crate::battle::engine::{resolve_move_use, MoveOutcome, TargetOutcome};
use crate::battle::pipelines::{accuracy_pipeline, power_pipeline, Accuracy};
use crate::battle::state::{BattleEvent, EventBus};
use crate::battle::tests::common::{create_battle, foe, predictable_rng, user, TestBattlerBuilder};
use crate::move_dex::get_move_data;
use crate::rng::BattleRng;
use pretty_assertions::assert_eq;
use schema::{Move, PokemonType};

#[test]
fn test_plain_physical_move_reference_values() {
    // A plain Physical move, base power 40, accuracy 100, no relevant
    // ability or item modifiers: the pipelines must reproduce the intrinsic
    // values exactly.
    let attacker = TestBattlerBuilder::new("Rattlet", 30)
        .with_moves(vec![Move::Tackle])
        .build();
    let defender = TestBattlerBuilder::new("Boulderon", 30)
        .with_types(vec![PokemonType::Fighting])
        .build();
    let state = create_battle(attacker, defender);
    let data = get_move_data(Move::Tackle).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Tackle);

    assert_eq!(power_pipeline(&state, &ctx, data), Some(40));
    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::Percent(100));

    // The 2x weakness comes from the pure lookup and is applied downstream
    // of the power pipeline, never inside it.
    assert_eq!(
        PokemonType::effectiveness_against(PokemonType::Fighting, &[PokemonType::Normal]),
        2.0
    );
}

#[test]
fn test_full_resolution_deals_damage_and_reports_effectiveness() {
    let attacker = TestBattlerBuilder::new("Bruiser", 30)
        .with_types(vec![PokemonType::Fighting])
        .with_moves(vec![Move::DoubleKick])
        .build();
    let defender = TestBattlerBuilder::new("Rattlet", 30).with_hp(100).build();
    let mut state = create_battle(attacker, defender);
    let mut rng = predictable_rng();
    let mut bus = EventBus::new();

    let outcome =
        resolve_move_use(&mut state, user(), Move::DoubleKick, Some(foe()), &mut rng, &mut bus)
            .unwrap();

    match outcome {
        MoveOutcome::Resolved { targets } => {
            assert_eq!(targets.len(), 1);
            assert!(matches!(targets[0], TargetOutcome::Hit { strikes: 2, .. }));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(bus
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::TypeEffectiveness { multiplier } if *multiplier == 2.0)));
    assert_eq!(
        bus.events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::DamageDealt { .. }))
            .count(),
        2
    );
}

#[test]
fn test_copying_resolves_the_targets_last_move() {
    let copier = TestBattlerBuilder::new("Mimicant", 30)
        .with_moves(vec![Move::MirrorMove])
        .build();
    let original = TestBattlerBuilder::new("Scorchik", 30)
        .with_types(vec![PokemonType::Fire])
        .with_moves(vec![Move::Ember])
        .build();
    let mut state = create_battle(copier, original);
    state
        .battler_mut(foe())
        .unwrap()
        .record_move(Move::Ember, true);

    let mut rng = predictable_rng();
    let mut bus = EventBus::new();
    let outcome =
        resolve_move_use(&mut state, user(), Move::MirrorMove, Some(foe()), &mut rng, &mut bus)
            .unwrap();

    assert!(outcome.succeeded());
    // The copied move's damage lands on the enemy.
    assert!(bus
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::DamageDealt { target, .. } if *target == foe())));
    // History records the copying move itself, not the borrowed one.
    let history = &state.battler(user()).unwrap().move_history;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].move_, Move::MirrorMove);
}

#[test]
fn test_copying_fails_without_a_last_move() {
    let copier = TestBattlerBuilder::new("Mimicant", 30)
        .with_moves(vec![Move::MirrorMove])
        .build();
    let original = TestBattlerBuilder::new("Scorchik", 30).build();
    let mut state = create_battle(copier, original);

    let mut rng = predictable_rng();
    let mut bus = EventBus::new();
    let outcome =
        resolve_move_use(&mut state, user(), Move::MirrorMove, Some(foe()), &mut rng, &mut bus)
            .unwrap();
    assert!(!outcome.succeeded());
}

#[test]
fn test_payout_banks_money_for_the_users_side() {
    let attacker = TestBattlerBuilder::new("Coinpurr", 25)
        .with_moves(vec![Move::PayDay])
        .build();
    let defender = TestBattlerBuilder::new("Rattlet", 25).build();
    let mut state = create_battle(attacker, defender);

    let mut rng = predictable_rng();
    let mut bus = EventBus::new();
    resolve_move_use(&mut state, user(), Move::PayDay, Some(foe()), &mut rng, &mut bus).unwrap();

    assert_eq!(state.sides[0].money, 50);
    assert!(bus
        .events()
        .iter()
        .any(|e| matches!(e, BattleEvent::MoneyEarned { side: 0, amount: 50 })));
}

#[test]
fn test_event_log_serializes_to_json() {
    let attacker = TestBattlerBuilder::new("Rattlet", 30).build();
    let defender = TestBattlerBuilder::new("Boulderon", 30).build();
    let mut state = create_battle(attacker, defender);
    let mut rng = BattleRng::seeded(42);
    let mut bus = EventBus::new();

    resolve_move_use(&mut state, user(), Move::Tackle, Some(foe()), &mut rng, &mut bus).unwrap();

    let json = bus.to_json().expect("event log must serialize");
    assert!(json.contains("MoveUsed"));
}
