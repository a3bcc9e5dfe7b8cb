use crate::battle::conditions::BattlerTag;
use crate::battle::effects::EffectContext;
use crate::battle::state::{BattleEvent, BattleState, EventBus};
use crate::battler::Battler;
use crate::move_dex;
use schema::{ChargeCondition, EffectKind, StatType, Weather};

/// Percent-of-max-HP heal on the user. A full-HP user makes this a routine
/// clause failure.
pub fn apply_heal(
    state: &mut BattleState,
    ctx: &EffectContext,
    percent: u8,
    bus: &mut EventBus,
) -> bool {
    let Some(user) = state.battler_mut(ctx.user) else {
        return false;
    };
    if user.is_fainted() {
        return false;
    }
    let amount = (u32::from(user.max_hp()) * u32::from(percent) / 100).max(1) as u16;
    let restored = user.heal(amount);
    if restored == 0 {
        return false;
    }
    let new_hp = user.current_hp;
    bus.push(BattleEvent::BattlerHealed {
        target: ctx.user,
        amount: restored,
        new_hp,
    });
    true
}

/// Scatters coins: the user's side banks money scaled by the user's level.
pub fn apply_payout(state: &mut BattleState, ctx: &EffectContext, bus: &mut EventBus) -> bool {
    let Some(level) = state.battler(ctx.user).map(|b| b.level) else {
        return false;
    };
    let amount = u32::from(level) * 2;
    state.sides[ctx.user.side].money += amount;
    bus.push(BattleEvent::MoneyEarned {
        side: ctx.user.side,
        amount,
    });
    true
}

/// Charge-turn effects: queue the forced release, optionally go airborne,
/// optionally raise a stat as part of the preparation.
pub fn apply_charge_phase(
    state: &mut BattleState,
    ctx: &EffectContext,
    airborne: bool,
    stat_boost: Option<(StatType, i8)>,
    bus: &mut EventBus,
) -> bool {
    let Some(user) = state.battler_mut(ctx.user) else {
        return false;
    };
    user.add_tag(BattlerTag::Charging { move_: ctx.move_id });
    if airborne {
        user.add_tag(BattlerTag::Airborne);
    }
    bus.push(BattleEvent::MoveCharging {
        user: ctx.user,
        move_: ctx.move_id,
    });
    if let Some((stat, stages)) = stat_boost {
        super::stat::apply_stat_change(state, ctx.user, &[stat], stages, bus);
    }
    true
}

/// Whether a charge move's instant-release predicate holds, collapsing
/// charge and release into a single turn.
pub fn charge_is_instant(state: &BattleState, condition: Option<ChargeCondition>) -> bool {
    match condition {
        Some(ChargeCondition::SunlightActive) => state.field.weather() == Some(Weather::Sunlight),
        None => false,
    }
}

/// Raises the user's guard for the rest of the turn.
pub fn apply_guard(state: &mut BattleState, ctx: &EffectContext, bus: &mut EventBus) -> bool {
    let Some(user) = state.battler_mut(ctx.user) else {
        return false;
    };
    if !user.add_tag(BattlerTag::Protected) {
        return false;
    }
    bus.push(BattleEvent::TagApplied {
        target: ctx.user,
        tag: crate::battle::conditions::TagKind::Protected,
    });
    true
}

/// Success probability for the diminishing guard: 1/3^n, where n counts the
/// immediately preceding turns on which a guard-category move was both
/// selected and succeeded. Any other entry breaks the streak.
pub fn guard_succession_probability(battler: &Battler) -> f64 {
    let mut consecutive: u32 = 0;
    for used in battler.move_history.iter().rev() {
        let is_guard = move_dex::get_move_data(used.move_)
            .map(|data| data.has_effect_kind(EffectKind::Guard))
            .unwrap_or(false);
        if is_guard && used.succeeded {
            consecutive += 1;
        } else {
            break;
        }
    }
    1.0 / 3f64.powi(consecutive as i32)
}
