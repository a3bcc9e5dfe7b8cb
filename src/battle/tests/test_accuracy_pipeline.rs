use crate::battle::effects::EffectContext;
use crate::battle::pipelines::{accuracy_pipeline, secondary_chance_pipeline, Accuracy};
use crate::battle::tests::common::{create_battle, foe, user, TestBattlerBuilder};
use crate::move_dex::get_move_data;
use pretty_assertions::assert_eq;
use schema::{Ability, HeldItem, Move, StatType, Weather};

#[test]
fn test_intrinsic_never_miss_short_circuits_every_contributor() {
    // Swift has no accuracy value. Stack gravity, a sandstorm, and an
    // evasive Sand Veil defender on top: no later contributor may change
    // the sentinel.
    let attacker = TestBattlerBuilder::new("Comet", 30)
        .with_moves(vec![Move::Swift])
        .build();
    let defender = TestBattlerBuilder::new("Duster", 30)
        .with_ability(Ability::SandVeil)
        .build();
    let mut state = create_battle(attacker, defender);
    state.field.set_weather(Weather::Sandstorm, 5);
    state.field.set_gravity(5);
    state
        .battler_mut(foe())
        .unwrap()
        .modify_stat_stage(StatType::Eva, 6);

    let data = get_move_data(Move::Swift).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Swift);
    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::NeverMiss);
}

#[test]
fn test_no_guard_sets_the_sentinel_for_inaccurate_moves() {
    let attacker = TestBattlerBuilder::new("Machoke", 30)
        .with_ability(Ability::NoGuard)
        .with_moves(vec![Move::Fissure])
        .build();
    let state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    let data = get_move_data(Move::Fissure).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Fissure);
    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::NeverMiss);
}

#[test]
fn test_stage_differential_scales_accuracy() {
    let attacker = TestBattlerBuilder::new("Driller", 30)
        .with_moves(vec![Move::Fissure])
        .build();
    let mut state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    let data = get_move_data(Move::Fissure).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Fissure);

    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::Percent(30));

    state
        .battler_mut(user())
        .unwrap()
        .modify_stat_stage(StatType::Acc, 1);
    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::Percent(40));

    state.battler_mut(user()).unwrap().clear_stat_stages();
    state
        .battler_mut(foe())
        .unwrap()
        .modify_stat_stage(StatType::Eva, 6);
    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::Percent(10));
}

#[test]
fn test_ability_item_and_gravity_contributors_compound_in_order() {
    // 30 * 1.3 (Compound Eyes) * 1.1 (Wide Lens) * 5/3 (gravity) = 71.5,
    // rounded to 72.
    let attacker = TestBattlerBuilder::new("Flyspy", 30)
        .with_ability(Ability::CompoundEyes)
        .with_item(HeldItem::WideLens)
        .with_moves(vec![Move::Fissure])
        .build();
    let mut state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    state.field.set_gravity(5);

    let data = get_move_data(Move::Fissure).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Fissure);
    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::Percent(72));
}

#[test]
fn test_final_accuracy_clamps_to_one_hundred() {
    let attacker = TestBattlerBuilder::new("Sniper", 30)
        .with_ability(Ability::CompoundEyes)
        .build();
    let state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    let data = get_move_data(Move::Tackle).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Tackle);
    assert_eq!(accuracy_pipeline(&state, &ctx, data), Accuracy::Percent(100));
}

#[test]
fn test_shield_dust_negates_the_secondary_chance() {
    let attacker = TestBattlerBuilder::new("Scorchik", 30)
        .with_moves(vec![Move::Ember])
        .build();
    let defender = TestBattlerBuilder::new("Mothby", 30)
        .with_ability(Ability::ShieldDust)
        .build();
    let state = create_battle(attacker, defender);
    let data = get_move_data(Move::Ember).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Ember);

    assert_eq!(secondary_chance_pipeline(&state, &ctx, data), Some(0));
}

#[test]
fn test_secondary_chance_seeds_from_the_descriptor() {
    let state = create_battle(
        TestBattlerBuilder::new("A", 30).build(),
        TestBattlerBuilder::new("B", 30).build(),
    );
    let ember = get_move_data(Move::Ember).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Ember);
    assert_eq!(secondary_chance_pipeline(&state, &ctx, ember), Some(10));

    // "Always if applicable" moves carry no chance at all.
    let toxic = get_move_data(Move::Toxic).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Toxic);
    assert_eq!(secondary_chance_pipeline(&state, &ctx, toxic), None);
}
