use crate::battle::effects::{EffectArgs, EffectContext};
use crate::battle::pipelines::PowerValue;
use crate::battle::state::{BattleEvent, BattleState, EventBus};
use crate::move_dex;
use schema::{MoveData, MoveEffect, VariablePowerKind};

/// Variable-power contributors: each reads the running cell and replaces or
/// scales it.
pub fn apply_variable_power(
    state: &BattleState,
    ctx: &EffectContext,
    kind: VariablePowerKind,
    cell: &mut PowerValue,
) {
    match kind {
        VariablePowerKind::DoubledOnFirstUse => {
            let used_before = state.battler(ctx.user).map_or(false, |b| {
                b.move_history.iter().any(|used| used.move_ == ctx.move_id)
            });
            if !used_before {
                cell.scale(2.0);
            }
        }
        VariablePowerKind::ScalesWithRemainingPp => {
            // Fewer uses left, harder it hits: base power stands in for the
            // full-PP case and ramps up to 2.5x on the final use.
            if let Some(slot) = state
                .battler(ctx.user)
                .and_then(|b| b.move_slot(ctx.move_id))
            {
                let max_pp = move_dex::get_move_data(ctx.move_id)
                    .map(|d| d.max_pp)
                    .unwrap_or(slot.pp.max(1));
                let spent = f64::from(max_pp.saturating_sub(slot.pp));
                cell.scale(1.0 + 1.5 * spent / f64::from(max_pp.max(1)));
            }
        }
        VariablePowerKind::LowHpBoost => {
            if let Some(user) = state.battler(ctx.user) {
                let fraction = f64::from(user.current_hp) / f64::from(user.max_hp());
                let multiplier = match fraction {
                    f if f <= 0.0417 => 8.0,
                    f if f <= 0.1042 => 6.0,
                    f if f <= 0.2083 => 4.0,
                    f if f <= 0.3542 => 3.0,
                    f if f <= 0.6875 => 2.0,
                    _ => 1.0,
                };
                cell.scale(multiplier);
            }
        }
        VariablePowerKind::DoubledAgainstStatused => {
            if state
                .battler(ctx.target)
                .map_or(false, |b| b.status.is_some())
            {
                cell.scale(2.0);
            }
        }
    }
}

/// Damage override for shaped-damage clauses; None means the strike uses
/// the normal damage formula.
pub fn shaped_strike_damage(
    move_data: &MoveData,
    state: &BattleState,
    ctx: &EffectContext,
) -> Option<u16> {
    for effect in &move_data.effects {
        match effect {
            MoveEffect::FixedDamage(amount) => return Some(*amount),
            MoveEffect::LevelDamage => {
                return Some(state.battler(ctx.user).map_or(0, |b| u16::from(b.level)));
            }
            MoveEffect::HalveHp => {
                return Some(
                    state
                        .battler(ctx.target)
                        .map_or(0, |b| (b.current_hp / 2).max(1)),
                );
            }
            MoveEffect::Ohko => {
                return Some(state.battler(ctx.target).map_or(0, |b| b.current_hp));
            }
            _ => {}
        }
    }
    None
}

/// Recoil and drain run once per strike, scaled from the damage that strike
/// actually dealt. Mirrors the dedicated damage-based pass of the dispatch
/// contract: these clauses are skipped by the main pass.
pub fn apply_damage_based_clauses(
    move_data: &MoveData,
    state: &mut BattleState,
    ctx: &EffectContext,
    args: &EffectArgs,
    bus: &mut EventBus,
) {
    if args.damage_dealt == 0 {
        return;
    }
    for effect in &move_data.effects {
        match effect {
            MoveEffect::Recoil(percent) => {
                let recoil =
                    (u32::from(args.damage_dealt) * u32::from(*percent) / 100).max(1) as u16;
                if let Some(user) = state.battler_mut(ctx.user) {
                    let fainted = user.take_damage(recoil);
                    let remaining_hp = user.current_hp;
                    bus.push(BattleEvent::DamageDealt {
                        target: ctx.user,
                        amount: recoil,
                        remaining_hp,
                    });
                    if fainted {
                        bus.push(BattleEvent::BattlerFainted { battler: ctx.user });
                    }
                }
            }
            MoveEffect::Drain(percent) => {
                let drained =
                    (u32::from(args.damage_dealt) * u32::from(*percent) / 100).max(1) as u16;
                if let Some(user) = state.battler_mut(ctx.user) {
                    let restored = user.heal(drained);
                    if restored > 0 {
                        let new_hp = user.current_hp;
                        bus.push(BattleEvent::BattlerHealed {
                            target: ctx.user,
                            amount: restored,
                            new_hp,
                        });
                    }
                }
            }
            _ => {}
        }
    }
}

/// Post-all-targets self-KO. Fails (and spares the user) when no legal
/// target existed for the use.
pub fn apply_self_destruct(
    state: &mut BattleState,
    ctx: &EffectContext,
    args: &EffectArgs,
    bus: &mut EventBus,
) -> bool {
    if !args.any_target_existed {
        return false;
    }
    if let Some(user) = state.battler_mut(ctx.user) {
        user.take_damage(user.max_hp());
        bus.push(BattleEvent::BattlerFainted { battler: ctx.user });
        true
    } else {
        false
    }
}
