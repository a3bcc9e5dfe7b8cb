use crate::battle::conditions::BattlerTag;
use crate::battle::effects::EffectContext;
use crate::battle::pipelines::power_pipeline;
use crate::battle::tests::common::{create_battle, foe, user, TestBattlerBuilder};
use crate::battler::StatusCondition;
use crate::move_dex::get_move_data;
use pretty_assertions::assert_eq;
use rstest::rstest;
use schema::{HeldItem, Move, MoveCategory, PokemonType, Weather};

#[test]
fn test_status_moves_have_no_power_and_skip_the_pipeline() {
    let state = create_battle(
        TestBattlerBuilder::new("A", 30).build(),
        TestBattlerBuilder::new("B", 30).build(),
    );
    for move_ in [Move::Growl, Move::Protect, Move::Recover, Move::SunnyDay] {
        let data = get_move_data(move_).unwrap();
        assert_eq!(data.category, MoveCategory::Status);
        assert_eq!(data.power, None);
        let ctx = EffectContext::new(user(), foe(), move_);
        assert_eq!(power_pipeline(&state, &ctx, data), None);
    }
}

#[test]
fn test_first_use_doubling_reads_move_history() {
    let attacker = TestBattlerBuilder::new("Lurker", 30)
        .with_moves(vec![Move::Ambush])
        .build();
    let mut state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    let data = get_move_data(Move::Ambush).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Ambush);

    assert_eq!(power_pipeline(&state, &ctx, data), Some(100));

    state
        .battler_mut(user())
        .unwrap()
        .record_move(Move::Ambush, true);
    assert_eq!(power_pipeline(&state, &ctx, data), Some(50));
}

#[test]
fn test_pp_scaling_ramps_toward_the_final_use() {
    let attacker = TestBattlerBuilder::new("Gambler", 30)
        .with_moves(vec![Move::TrumpCard])
        .build();
    let mut state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    let data = get_move_data(Move::TrumpCard).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::TrumpCard);

    // Full PP: base power untouched.
    assert_eq!(power_pipeline(&state, &ctx, data), Some(40));

    // Four of five uses spent: 40 * (1 + 1.5 * 4/5) = 88.
    for _ in 0..4 {
        state.battler_mut(user()).unwrap().spend_pp(Move::TrumpCard).unwrap();
    }
    assert_eq!(power_pipeline(&state, &ctx, data), Some(88));
}

#[rstest]
#[case(100, 1.0)]
#[case(60, 2.0)]
#[case(30, 3.0)]
#[case(10, 6.0)]
#[case(4, 8.0)]
fn test_low_hp_boost_tiers(#[case] current_hp: u16, #[case] expected_multiplier: f64) {
    let attacker = TestBattlerBuilder::new("Scrapper", 30)
        .with_stats([100, 60, 60, 60, 60, 60])
        .with_moves(vec![Move::Reversal])
        .with_hp(current_hp)
        .build();
    let state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    let data = get_move_data(Move::Reversal).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Reversal);

    let expected = (20.0 * expected_multiplier) as u16;
    assert_eq!(power_pipeline(&state, &ctx, data), Some(expected));
}

#[test]
fn test_power_doubles_against_a_statused_target() {
    let attacker = TestBattlerBuilder::new("Haunter", 30)
        .with_moves(vec![Move::Hex])
        .build();
    let defender = TestBattlerBuilder::new("Victim", 30)
        .with_status(StatusCondition::Burn)
        .build();
    let state = create_battle(attacker, defender);
    let data = get_move_data(Move::Hex).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Hex);
    assert_eq!(power_pipeline(&state, &ctx, data), Some(130));
}

#[test]
fn test_contributor_chain_order_item_weather_then_ally_boost() {
    // Ember 40: Wise Glasses x1.1 -> 44, sunlight x1.5 -> 66, ally boost
    // x1.5 -> 99. The documented stage order produces exactly this chain.
    let attacker = TestBattlerBuilder::new("Scorchik", 30)
        .with_types(vec![PokemonType::Fire])
        .with_moves(vec![Move::Ember])
        .with_item(HeldItem::WiseGlasses)
        .build();
    let mut state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    state.field.set_weather(Weather::Sunlight, 5);
    state
        .battler_mut(user())
        .unwrap()
        .add_tag(BattlerTag::HelpingHand);

    let data = get_move_data(Move::Ember).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Ember);
    assert_eq!(power_pipeline(&state, &ctx, data), Some(99));
}

#[test]
fn test_weather_suppression_removes_the_weather_stage() {
    let attacker = TestBattlerBuilder::new("Scorchik", 30)
        .with_moves(vec![Move::Ember])
        .build();
    let mut state = create_battle(attacker, TestBattlerBuilder::new("B", 30).build());
    state.field.set_weather(Weather::Sunlight, 5);
    state.field.weather_suppressed = true;

    let data = get_move_data(Move::Ember).unwrap();
    let ctx = EffectContext::new(user(), foe(), Move::Ember);
    assert_eq!(power_pipeline(&state, &ctx, data), Some(40));
}
