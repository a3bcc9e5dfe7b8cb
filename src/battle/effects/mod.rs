// Clause behavior for the schema's effect data variants.
//
// The schema crate defines `MoveEffect` as pure data; this module attaches
// the engine behavior through an extension trait, dispatching each variant
// to a standalone helper in the submodules below.

mod damage;
mod field;
mod special;
mod stat;
mod status;

use crate::battle::pipelines::PowerValue;
use crate::battle::state::{BattleState, BattlerId, EventBus};
use crate::rng::BattleRng;
use schema::{ApplyPhase, Move, MoveData, MoveEffect, StrikeGate, Target};

pub use self::damage::{apply_damage_based_clauses, shaped_strike_damage};
pub use self::special::{charge_is_instant, guard_succession_probability};

/// Identifies the battlers a dispatch pass is operating on. Passed
/// explicitly into every clause call; clauses never reach for ambient
/// battle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectContext {
    pub user: BattlerId,
    pub target: BattlerId,
    pub move_id: Move,
}

impl EffectContext {
    pub fn new(user: BattlerId, target: BattlerId, move_id: Move) -> Self {
        Self {
            user,
            target,
            move_id,
        }
    }

    /// The battler a clause acts on, per its declared target.
    pub fn target_id(&self, target: Target) -> BattlerId {
        match target {
            Target::User => self.user,
            Target::Target => self.target,
        }
    }
}

/// Shared value cells threaded through one dispatch pass so earlier
/// clauses' outputs are visible to later clauses of the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectArgs {
    /// 0-based strike index within a multi-strike sequence.
    pub hit_number: u8,
    pub total_hits: u8,
    /// 0-based position of the current target in the resolved target set.
    pub target_index: usize,
    /// Damage dealt by the current strike.
    pub damage_dealt: u16,
    /// Damage accumulated across the whole move use.
    pub total_damage: u16,
    /// Secondary-chance pipeline output for the current target.
    pub secondary_chance: Option<u8>,
    /// Whether targeting resolution produced at least one legal target.
    pub any_target_existed: bool,
}

impl EffectArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_first_hit(&self) -> bool {
        self.hit_number == 0
    }

    pub fn is_last_hit(&self) -> bool {
        self.hit_number + 1 == self.total_hits
    }
}

pub trait ClauseBehaviorExt {
    /// Executes the clause. The boolean reports clause-level success; a
    /// false return is routine (target already at a stat bound, tag already
    /// present) and never aborts sibling clauses of the same pass.
    fn apply(
        &self,
        state: &mut BattleState,
        ctx: &EffectContext,
        args: &mut EffectArgs,
        rng: &mut BattleRng,
        bus: &mut EventBus,
    ) -> bool;

    /// Heuristic desirability for AI scoring. Positive is good for the
    /// user.
    fn benefit_score(&self, state: &BattleState, ctx: &EffectContext) -> f32;

    /// Whether the clause fires for the current strike of a multi-strike
    /// sequence and the current position in the target set.
    fn fires_now(&self, args: &EffectArgs) -> bool;
}

impl ClauseBehaviorExt for MoveEffect {
    fn apply(
        &self,
        state: &mut BattleState,
        ctx: &EffectContext,
        args: &mut EffectArgs,
        rng: &mut BattleRng,
        bus: &mut EventBus,
    ) -> bool {
        match self {
            MoveEffect::StatChange {
                target,
                stats,
                stages,
                chance,
            } => {
                if !clause_chance_passes(*chance, args, rng, "Stat Change Chance") {
                    return false;
                }
                stat::apply_stat_change(state, ctx.target_id(*target), stats, *stages, bus)
            }
            MoveEffect::ClearStatStages => stat::apply_clear_stat_stages(state, bus),
            MoveEffect::InflictStatus { status, chance } => {
                if !clause_chance_passes(*chance, args, rng, "Status Chance") {
                    return false;
                }
                status::apply_status(state, ctx, *status, rng, bus)
            }
            MoveEffect::InflictTag { tag, chance } => {
                if !clause_chance_passes(*chance, args, rng, "Tag Chance") {
                    return false;
                }
                status::apply_tag(state, ctx, *tag, rng, bus)
            }
            MoveEffect::Heal(percent) => special::apply_heal(state, ctx, *percent, bus),
            MoveEffect::SetWeather(weather) => field::apply_weather(state, *weather, bus),
            MoveEffect::SetTerrain(terrain) => field::apply_terrain(state, *terrain, bus),
            MoveEffect::SideScreen { screen, turns } => {
                field::apply_screen(state, ctx.user.side, *screen, *turns, bus)
            }
            MoveEffect::LayHazard(hazard) => {
                field::apply_hazard(state, ctx.user.enemy_side(), *hazard, bus)
            }
            MoveEffect::ClearHazards => field::apply_clear_hazards(state, ctx.user.side, bus),
            MoveEffect::SetGravity { turns } => field::apply_gravity(state, *turns, bus),
            MoveEffect::Charge { airborne, stat_boost, .. } => {
                special::apply_charge_phase(state, ctx, *airborne, *stat_boost, bus)
            }
            MoveEffect::Guard => special::apply_guard(state, ctx, bus),
            MoveEffect::SelfDestruct => damage::apply_self_destruct(state, ctx, args, bus),
            MoveEffect::Payout => special::apply_payout(state, ctx, bus),
            // Consumed elsewhere in resolution: variable power and
            // multi-strike feed the pipelines, damage shaping feeds the
            // strike damage step, recoil/drain run in the damage-based
            // pass, and the rampage/copy/dynamic-target clauses steer the
            // resolution flow itself.
            MoveEffect::VariablePower(_)
            | MoveEffect::MultiStrike(_)
            | MoveEffect::FixedDamage(_)
            | MoveEffect::LevelDamage
            | MoveEffect::HalveHp
            | MoveEffect::Ohko
            | MoveEffect::HighCrit
            | MoveEffect::Recoil(_)
            | MoveEffect::Drain(_)
            | MoveEffect::Rampage { .. }
            | MoveEffect::CopyLastMove { .. }
            | MoveEffect::DynamicTargets(_) => true,
        }
    }

    fn benefit_score(&self, state: &BattleState, ctx: &EffectContext) -> f32 {
        match self {
            MoveEffect::StatChange { target, stats, stages, .. } => {
                let sign = if *target == Target::User { 1.0 } else { -1.0 };
                sign * f32::from(*stages) * stats.len() as f32 * 1.5
            }
            MoveEffect::InflictStatus { .. } => 3.0,
            MoveEffect::InflictTag { .. } => 2.0,
            MoveEffect::Heal(percent) => {
                let missing = state
                    .battler(ctx.user)
                    .map_or(0.0, |b| {
                        f32::from(b.max_hp() - b.current_hp) / f32::from(b.max_hp())
                    });
                f32::from(*percent) / 100.0 * missing * 10.0
            }
            MoveEffect::Guard => 2.5,
            MoveEffect::SelfDestruct => -6.0,
            MoveEffect::Recoil(percent) => -f32::from(*percent) / 100.0 * 3.0,
            MoveEffect::Drain(percent) => f32::from(*percent) / 100.0 * 3.0,
            MoveEffect::SetWeather(_) | MoveEffect::SetTerrain(_) => 1.5,
            MoveEffect::SideScreen { .. } => 2.0,
            MoveEffect::LayHazard(_) => 1.5,
            _ => 0.0,
        }
    }

    fn fires_now(&self, args: &EffectArgs) -> bool {
        let gate_open = match self.strike_gate() {
            StrikeGate::EveryHit => true,
            StrikeGate::FirstHitOnly => args.is_first_hit(),
            StrikeGate::LastHitOnly => args.is_last_hit(),
        };
        let exclusivity_open = !self.first_target_only() || args.target_index == 0;
        gate_open && exclusivity_open
    }
}

/// Runs every clause matching `filter` in clause-list order, threading the
/// shared args cells. Returns true when any clause reported success.
pub fn apply_matching(
    move_data: &MoveData,
    filter: impl Fn(&MoveEffect) -> bool,
    state: &mut BattleState,
    ctx: &EffectContext,
    args: &mut EffectArgs,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> bool {
    let mut any_succeeded = false;
    for effect in &move_data.effects {
        if !filter(effect) || !effect.fires_now(args) {
            continue;
        }
        if effect.apply(state, ctx, args, rng, bus) {
            any_succeeded = true;
        }
    }
    any_succeeded
}

/// Phase-filtered dispatch used by the main effect pass. Flow-steering
/// clause kinds (charge, rampage, copy, dynamic targets) never run here;
/// the engine invokes them at their own points in the resolution flow.
pub fn apply_phase(
    move_data: &MoveData,
    phase: ApplyPhase,
    state: &mut BattleState,
    ctx: &EffectContext,
    args: &mut EffectArgs,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> bool {
    apply_matching(
        move_data,
        |effect| effect.phase() == phase && !effect.kind().steers_resolution(),
        state,
        ctx,
        args,
        rng,
        bus,
    )
}

/// The clause-intrinsic stage of the power pipeline: variable-power clauses
/// read and rewrite the running cell in clause-list order.
pub fn apply_power_clauses(
    state: &BattleState,
    ctx: &EffectContext,
    move_data: &MoveData,
    cell: &mut PowerValue,
) {
    for effect in &move_data.effects {
        if let MoveEffect::VariablePower(kind) = effect {
            damage::apply_variable_power(state, ctx, *kind, cell);
        }
    }
}

/// Chance gate for chance-bearing clauses. A clause-local chance overrides
/// the move's pipeline-computed secondary chance; absent both, the clause
/// always fires.
fn clause_chance_passes(
    chance: Option<u8>,
    args: &EffectArgs,
    rng: &mut BattleRng,
    label: &str,
) -> bool {
    match chance.or(args.secondary_chance) {
        None => true,
        Some(percent) => rng.chance(percent, label),
    }
}
