use crate::battle::conditions::{BattlerTag, TagKind};
use crate::battle::effects::{
    self, apply_damage_based_clauses, charge_is_instant, guard_succession_probability,
    EffectArgs, EffectContext,
};
use crate::battle::multi_strike::strike_count;
use crate::battle::pipelines::{
    accuracy_pipeline, power_pipeline, secondary_chance_pipeline, Accuracy,
};
use crate::battle::state::{
    BattleEvent, BattleState, BattlerId, EventBus, FailureReason,
};
use crate::battle::stats::{calculate_strike_damage, move_effectiveness, roll_critical};
use crate::battle::targeting::resolve_targets;
use crate::battler::StatusCondition;
use crate::errors::{BattleResult, BattleStateError};
use crate::move_dex::get_move_data;
use crate::rng::BattleRng;
use schema::{
    Ability, ApplyPhase, EffectKind, Move, MoveCategory, MoveCondition, MoveEffect, MoveFlags,
    RampageEnd, TargetMode,
};

/// How one move use ended. Every variant is a routine outcome; errors are
/// reserved for structural misuse (unknown battler, unregistered move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The pre-use gate failed or no legal target existed.
    Failed(FailureReason),
    /// The turn was consumed charging; the release is queued for next turn.
    Charged,
    /// Per-target results, in target-set order.
    Resolved { targets: Vec<TargetOutcome> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    Hit { strikes: u8, damage: u16 },
    Missed,
    /// Stopped by the target's guard.
    Blocked,
    /// Type immunity or nothing for the move to do.
    NoEffect,
}

impl MoveOutcome {
    pub fn succeeded(&self) -> bool {
        match self {
            MoveOutcome::Failed(_) => false,
            MoveOutcome::Charged => true,
            MoveOutcome::Resolved { targets } => targets
                .iter()
                .any(|outcome| matches!(outcome, TargetOutcome::Hit { .. })),
        }
    }
}

/// The move a battler is locked into using this turn, if any: a queued
/// charge release or a rampage repeat. The outer turn loop consults this
/// before offering a free action choice.
pub fn forced_move(state: &BattleState, id: BattlerId) -> Option<Move> {
    let battler = state.battler(id)?;
    if let Some(BattlerTag::Charging { move_ }) = battler.tag(TagKind::Charging) {
        return Some(*move_);
    }
    if let Some(BattlerTag::Rampaging { move_, .. }) = battler.tag(TagKind::Rampaging) {
        return Some(*move_);
    }
    None
}

/// Drops any queued release or lock-in, e.g. when the battler is forced off
/// the field between turns. The commitment is never honored past an
/// incapacitation.
pub fn clear_forced_moves(state: &mut BattleState, id: BattlerId) {
    if let Some(battler) = state.battler_mut(id) {
        battler.remove_tag(TagKind::Charging);
        battler.remove_tag(TagKind::Airborne);
        battler.remove_tag(TagKind::Rampaging);
    }
}

/// Resolves one use of a move by `user` against a notional target.
///
/// Control flow: forced-use bookkeeping, pre-use condition gate, targeting
/// expansion, then per target: guard/immunity checks, the accuracy roll,
/// and the phase-ordered clause passes across the strike loop. Post-target
/// clauses run once at the end, followed by the charge/rampage state
/// machine transitions and the history push.
pub fn resolve_move_use(
    state: &mut BattleState,
    user: BattlerId,
    move_: Move,
    chosen_target: Option<BattlerId>,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> BattleResult<MoveOutcome> {
    resolve_internal(state, user, move_, chosen_target, None, false, rng, bus)
}

#[allow(clippy::too_many_arguments)]
fn resolve_internal(
    state: &mut BattleState,
    user: BattlerId,
    move_: Move,
    chosen_target: Option<BattlerId>,
    override_mode: Option<TargetMode>,
    virtual_use: bool,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> BattleResult<MoveOutcome> {
    let move_data = get_move_data(move_)?;

    {
        let battler = state
            .battler(user)
            .ok_or(BattleStateError::NoBattler(user))?;
        if battler.is_fainted() {
            // Incapacitated between charge and release: the queued action
            // is dropped, not honored.
            clear_forced_moves(state, user);
            return Ok(MoveOutcome::Failed(FailureReason::ConditionFailed));
        }
    }

    // Forced-use bookkeeping.
    let releasing = matches!(
        state.battler(user).and_then(|b| b.tag(TagKind::Charging)),
        Some(BattlerTag::Charging { move_: queued }) if *queued == move_
    );
    let rampage_repeat = matches!(
        state.battler(user).and_then(|b| b.tag(TagKind::Rampaging)),
        Some(BattlerTag::Rampaging { move_: locked, .. }) if *locked == move_
    );
    if releasing {
        if let Some(battler) = state.battler_mut(user) {
            battler.remove_tag(TagKind::Charging);
            battler.remove_tag(TagKind::Airborne);
        }
    }

    bus.push(BattleEvent::MoveUsed { user, move_ });

    // PP is spent once per commitment: on the charge turn, on the rampage's
    // initial use, and never for a copied (virtual) invocation.
    if !virtual_use && !releasing && !rampage_repeat {
        state
            .battler_mut(user)
            .ok_or(BattleStateError::NoBattler(user))?
            .spend_pp(move_)?;
    }

    // Pre-use gate: conjunction of every condition predicate. A single
    // false predicate fails the move with no further effect.
    for condition in &move_data.conditions {
        if !evaluate_condition(*condition, state, user, chosen_target, rng) {
            bus.push(BattleEvent::MoveFailed {
                user,
                reason: FailureReason::ConditionFailed,
            });
            finish_use(state, user, move_, false, virtual_use, rng, bus);
            return Ok(MoveOutcome::Failed(FailureReason::ConditionFailed));
        }
    }

    // Copying indirection: resolve the target's last move in place of this
    // one, with the copying clause's redirected targeting mode.
    if let Some(redirect) = copy_redirect(move_data.effects.as_slice()) {
        let copy_source = chosen_target
            .filter(|id| state.is_active(*id))
            .or_else(|| state.active_ids(user.enemy_side()).first().copied());
        let copied = copy_source
            .and_then(|id| state.battler(id))
            .and_then(|b| b.last_move())
            .map(|used| used.move_);
        let Some(copied) = copied else {
            bus.push(BattleEvent::MoveFailed {
                user,
                reason: FailureReason::ConditionFailed,
            });
            finish_use(state, user, move_, false, virtual_use, rng, bus);
            return Ok(MoveOutcome::Failed(FailureReason::ConditionFailed));
        };
        let outcome = resolve_internal(
            state,
            user,
            copied,
            chosen_target,
            Some(redirect),
            true,
            rng,
            bus,
        )?;
        finish_use(state, user, move_, outcome.succeeded(), virtual_use, rng, bus);
        return Ok(outcome);
    }

    // Targeting expansion against live field state.
    let target_set = resolve_targets(state, user, move_data, override_mode, rng);
    if target_set.is_empty() {
        bus.push(BattleEvent::MoveFailed {
            user,
            reason: FailureReason::NoTarget,
        });
        finish_use(state, user, move_, false, virtual_use, rng, bus);
        return Ok(MoveOutcome::Failed(FailureReason::NoTarget));
    }
    let targets: Vec<BattlerId> = if target_set.multiple {
        target_set.targets.clone()
    } else {
        let chosen = chosen_target
            .filter(|id| target_set.targets.contains(id))
            .unwrap_or(target_set.targets[0]);
        vec![chosen]
    };

    // Charge machine: Idle -> Charging unless the instant predicate
    // collapses both turns into one.
    if !releasing {
        if let Some(instant_when) = charge_condition(move_data.effects.as_slice()) {
            if !charge_is_instant(state, instant_when) {
                let ctx = EffectContext::new(user, targets[0], move_);
                let mut args = EffectArgs::new();
                args.total_hits = 1;
                args.any_target_existed = true;
                effects::apply_matching(
                    move_data,
                    |effect| effect.kind() == EffectKind::Charge,
                    state,
                    &ctx,
                    &mut args,
                    rng,
                    bus,
                );
                if !virtual_use {
                    if let Some(battler) = state.battler_mut(user) {
                        battler.record_move(move_, true);
                    }
                }
                return Ok(MoveOutcome::Charged);
            }
        }
    }

    let mut outcomes = Vec::with_capacity(targets.len());
    let mut args = EffectArgs::new();
    args.any_target_existed = true;

    for (target_index, &target) in targets.iter().enumerate() {
        let ctx = EffectContext::new(user, target, move_);
        args.target_index = target_index;
        args.secondary_chance = secondary_chance_pipeline(state, &ctx, move_data);
        outcomes.push(resolve_against_target(
            state, &ctx, move_data, &mut args, rng, bus,
        ));
    }

    // Post-target clauses run once after every target was processed.
    {
        let ctx = EffectContext::new(user, targets[0], move_);
        args.target_index = 0;
        effects::apply_phase(
            move_data,
            ApplyPhase::PostAllTargets,
            state,
            &ctx,
            &mut args,
            rng,
            bus,
        );
    }

    // A spent ally boost is consumed by the boosted use.
    if move_data.category != MoveCategory::Status {
        if let Some(battler) = state.battler_mut(user) {
            battler.remove_tag(TagKind::HelpingHand);
        }
    }

    let outcome = MoveOutcome::Resolved { targets: outcomes };
    finish_use(state, user, move_, outcome.succeeded(), virtual_use, rng, bus);
    Ok(outcome)
}

/// Accuracy, guard, immunity, and the strike loop for a single target.
fn resolve_against_target(
    state: &mut BattleState,
    ctx: &EffectContext,
    move_data: &schema::MoveData,
    args: &mut EffectArgs,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> TargetOutcome {
    let user = ctx.user;
    let target = ctx.target;

    // Guard check: a protected target stops anything aimed at it, except
    // the user itself and guard-piercing moves.
    if target != user
        && state
            .battler(target)
            .map_or(false, |b| b.has_tag(TagKind::Protected))
        && !move_data.has_flag(MoveFlags::IGNORES_PROTECT)
    {
        bus.push(BattleEvent::MoveBlocked { target });
        return TargetOutcome::Blocked;
    }

    // Semi-invulnerable targets dodge unless the move reaches them.
    if target != user
        && state
            .battler(target)
            .map_or(false, |b| b.has_tag(TagKind::Airborne))
        && !move_data.has_flag(MoveFlags::HITS_SEMI_INVULNERABLE)
    {
        bus.push(BattleEvent::MoveMissed {
            user,
            target,
            move_: ctx.move_id,
        });
        return TargetOutcome::Missed;
    }

    // Ability immunity: sound-based moves stop at a soundproof target.
    if target != user
        && move_data.has_flag(MoveFlags::SOUND_BASED)
        && state
            .battler(target)
            .map_or(false, |b| b.ability == Ability::Soundproof)
    {
        bus.push(BattleEvent::MoveHadNoEffect { target });
        return TargetOutcome::NoEffect;
    }

    // Type immunity pre-empts the accuracy roll for damaging moves.
    let effectiveness = state
        .battler(target)
        .map(|b| move_effectiveness(move_data, b))
        .unwrap_or(1.0);
    if move_data.category != MoveCategory::Status && effectiveness == 0.0 {
        bus.push(BattleEvent::MoveHadNoEffect { target });
        return TargetOutcome::NoEffect;
    }

    // Pre-apply clauses run before per-target success or failure is
    // determined (e.g. sweeping hazards away whether or not the strike
    // lands).
    let mut any_clause_succeeded = false;
    args.hit_number = 0;
    args.total_hits = 0;
    if effects::apply_phase(move_data, ApplyPhase::PreApply, state, ctx, args, rng, bus) {
        any_clause_succeeded = true;
    }

    // Hit/miss resolution.
    if target != user && !roll_accuracy(state, ctx, move_data, rng) {
        bus.push(BattleEvent::MoveMissed {
            user,
            target,
            move_: ctx.move_id,
        });
        return TargetOutcome::Missed;
    }

    let total_hits = strike_count(state, user, target, move_data, rng);
    if total_hits == 0 {
        bus.push(BattleEvent::MoveFailed {
            user,
            reason: FailureReason::ConditionFailed,
        });
        return TargetOutcome::NoEffect;
    }
    args.total_hits = total_hits;

    let high_crit = move_data
        .effects
        .iter()
        .any(|e| matches!(e, MoveEffect::HighCrit));

    let mut landed: u8 = 0;
    let mut target_damage: u16 = 0;

    for hit_number in 0..total_hits {
        args.hit_number = hit_number;
        args.damage_dealt = 0;

        // Per-strike accuracy checking: each strike after the first rolls
        // independently and a miss ends the sequence.
        if hit_number > 0
            && move_data.has_flag(MoveFlags::PER_STRIKE_ACCURACY)
            && !roll_accuracy(state, ctx, move_data, rng)
        {
            bus.push(BattleEvent::MoveMissed {
                user,
                target,
                move_: ctx.move_id,
            });
            break;
        }

        if move_data.category != MoveCategory::Status {
            let damage = strike_damage(state, ctx, move_data, effectiveness, high_crit, rng, bus);
            let dealt = deal_damage(state, target, damage, bus);
            args.damage_dealt = dealt;
            args.total_damage += dealt;
            target_damage += dealt;
            apply_damage_based_clauses(move_data, state, ctx, args, bus);
        }

        // Which secondary effects fire must not depend on how many
        // unrelated rolls happened earlier this turn, so the on-hit pass
        // runs inside a seed-offset scope keyed by turn, target, and
        // strike.
        let turn = state.turn_number;
        let wave = (args.target_index as u32) << 4 | u32::from(hit_number);
        let clause_hit = rng.with_offset_seed(turn, wave, |rng| {
            effects::apply_phase(move_data, ApplyPhase::OnHit, state, ctx, args, rng, bus)
        });
        if clause_hit {
            any_clause_succeeded = true;
        }

        landed += 1;

        if state.battler(target).map_or(true, |b| b.is_fainted()) {
            break;
        }
        if state.battler(user).map_or(true, |b| b.is_fainted()) {
            // Recoil can drop the user mid-sequence.
            break;
        }
    }

    if move_data.is_multi_strike() {
        bus.push(BattleEvent::StrikeCount { hits: landed });
    }

    if move_data.category == MoveCategory::Status && !any_clause_succeeded {
        // Nothing the move tried stuck: report the no-effect path.
        bus.push(BattleEvent::MoveHadNoEffect { target });
        return TargetOutcome::NoEffect;
    }

    TargetOutcome::Hit {
        strikes: landed,
        damage: target_damage,
    }
}

fn roll_accuracy(
    state: &BattleState,
    ctx: &EffectContext,
    move_data: &schema::MoveData,
    rng: &mut BattleRng,
) -> bool {
    match accuracy_pipeline(state, ctx, move_data) {
        Accuracy::NeverMiss => true,
        Accuracy::Percent(percent) => rng.next_outcome("Accuracy Check") <= percent,
    }
}

fn strike_damage(
    state: &mut BattleState,
    ctx: &EffectContext,
    move_data: &schema::MoveData,
    effectiveness: f32,
    high_crit: bool,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> u16 {
    // Shaped damage bypasses the formula and the crit roll entirely.
    if let Some(shaped) = effects_shaped_damage(state, ctx, move_data) {
        return shaped;
    }

    let power = power_pipeline(state, ctx, move_data).unwrap_or(0);
    let is_crit = state
        .battler(ctx.user)
        .map_or(false, |attacker| roll_critical(attacker, high_crit, rng));
    if is_crit {
        bus.push(BattleEvent::CriticalHit { target: ctx.target });
    }
    if effectiveness != 1.0 {
        bus.push(BattleEvent::TypeEffectiveness {
            multiplier: effectiveness,
        });
    }
    calculate_strike_damage(
        state,
        ctx.user,
        ctx.target,
        move_data,
        power,
        effectiveness,
        is_crit,
        rng,
    )
}

fn effects_shaped_damage(
    state: &BattleState,
    ctx: &EffectContext,
    move_data: &schema::MoveData,
) -> Option<u16> {
    crate::battle::effects::shaped_strike_damage(move_data, state, ctx)
}

fn deal_damage(
    state: &mut BattleState,
    target: BattlerId,
    amount: u16,
    bus: &mut EventBus,
) -> u16 {
    let Some(battler) = state.battler_mut(target) else {
        return 0;
    };
    let dealt = amount.min(battler.current_hp);
    let fainted = battler.take_damage(amount);
    let remaining_hp = battler.current_hp;
    bus.push(BattleEvent::DamageDealt {
        target,
        amount: dealt,
        remaining_hp,
    });
    if fainted {
        bus.push(BattleEvent::BattlerFainted { battler: target });
    }
    dealt
}

/// Condition predicate evaluation: pure reads plus, for the diminishing
/// guard, a single seeded draw against 1/3^n.
fn evaluate_condition(
    condition: MoveCondition,
    state: &BattleState,
    user: BattlerId,
    chosen_target: Option<BattlerId>,
    rng: &mut BattleRng,
) -> bool {
    match condition {
        MoveCondition::TargetHasLastMove => {
            let target = chosen_target
                .filter(|id| state.is_active(*id))
                .or_else(|| state.active_ids(user.enemy_side()).first().copied());
            target
                .and_then(|id| state.battler(id))
                .and_then(|b| b.last_move())
                .is_some()
        }
        MoveCondition::GuardSuccession => {
            let probability = state
                .battler(user)
                .map(guard_succession_probability)
                .unwrap_or(0.0);
            rng.chance_f64(probability, "Guard Succession Check")
        }
    }
}

/// History push plus the rampage state machine transitions that close out a
/// move use.
fn finish_use(
    state: &mut BattleState,
    user: BattlerId,
    move_: Move,
    succeeded: bool,
    virtual_use: bool,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) {
    if !virtual_use {
        if let Some(battler) = state.battler_mut(user) {
            battler.record_move(move_, succeeded);
        }
    }

    let rampage_end = get_move_data(move_)
        .ok()
        .and_then(|data| rampage_end_of(data.effects.as_slice()));
    let Some(end) = rampage_end else {
        return;
    };
    if virtual_use {
        return;
    }

    if !succeeded {
        // A failure during any locked turn clears the commitment
        // immediately; no end-of-rampage consequence fires.
        if state
            .battler_mut(user)
            .map_or(false, |b| b.remove_tag(TagKind::Rampaging).is_some())
        {
            bus.push(BattleEvent::RampageEnded { user });
        }
        return;
    }

    let already_locked = state
        .battler(user)
        .map_or(false, |b| b.has_tag(TagKind::Rampaging));
    if !already_locked {
        // Free -> Locked: commit to 1-2 additional forced turns.
        let extra_turns = 1 + rng.range(2, "Rampage Duration") as u8;
        if let Some(battler) = state.battler_mut(user) {
            battler.add_tag(BattlerTag::Rampaging {
                move_,
                turns_remaining: extra_turns,
                end,
            });
        }
        bus.push(BattleEvent::RampageStarted { user, move_ });
        return;
    }

    // Locked(n) -> Locked(n-1) | Free. Natural expiry fires the
    // clause-declared consequence.
    let expired = {
        let Some(battler) = state.battler_mut(user) else {
            return;
        };
        match battler.tag_mut(TagKind::Rampaging) {
            Some(BattlerTag::Rampaging {
                turns_remaining, ..
            }) => {
                *turns_remaining -= 1;
                *turns_remaining == 0
            }
            _ => false,
        }
    };
    if expired {
        if let Some(battler) = state.battler_mut(user) {
            battler.remove_tag(TagKind::Rampaging);
        }
        bus.push(BattleEvent::RampageEnded { user });
        if end == RampageEnd::Confuse {
            let turns = 2 + rng.range(4, "Confusion Duration") as u8;
            if let Some(battler) = state.battler_mut(user) {
                if battler.add_tag(BattlerTag::Confused {
                    turns_remaining: turns,
                }) {
                    bus.push(BattleEvent::TagApplied {
                        target: user,
                        tag: TagKind::Confused,
                    });
                }
            }
        }
    }
}

fn copy_redirect(effects: &[MoveEffect]) -> Option<TargetMode> {
    effects.iter().find_map(|effect| match effect {
        MoveEffect::CopyLastMove { redirect } => Some(*redirect),
        _ => None,
    })
}

fn charge_condition(effects: &[MoveEffect]) -> Option<Option<schema::ChargeCondition>> {
    effects.iter().find_map(|effect| match effect {
        MoveEffect::Charge { instant_when, .. } => Some(*instant_when),
        _ => None,
    })
}

fn rampage_end_of(effects: &[MoveEffect]) -> Option<RampageEnd> {
    effects.iter().find_map(|effect| match effect {
        MoveEffect::Rampage { end } => Some(*end),
        _ => None,
    })
}

/// Fixed-order end-of-turn phase: battler tags lapse first (with their
/// expiry behavior and residual damage), then side conditions, then the
/// field. Preserving this order is part of the engine contract.
pub fn end_of_turn(state: &mut BattleState, bus: &mut EventBus) {
    // 1. Battler tags and residual status, side 0 slots then side 1.
    for side in 0..2 {
        for slot in 0..state.sides[side].active.len() {
            let id = BattlerId::new(side, slot);
            if !state.is_active(id) {
                continue;
            }
            residual_status_damage(state, id, bus);
            residual_tag_damage(state, id, bus);
            if let Some(battler) = state.battler_mut(id) {
                for expired in battler.lapse_tags() {
                    bus.push(BattleEvent::TagExpired {
                        target: id,
                        tag: expired.kind(),
                    });
                }
            }
        }
    }

    // 2. Side conditions.
    for side in 0..2 {
        for screen in state.sides[side].conditions.tick_screens() {
            bus.push(BattleEvent::ScreenExpired { side, screen });
        }
    }

    // 3. Field-wide conditions.
    let expiry = state.field.tick();
    if let Some(weather) = expiry.weather {
        bus.push(BattleEvent::WeatherEnded { weather });
    }
    if let Some(terrain) = expiry.terrain {
        bus.push(BattleEvent::TerrainEnded { terrain });
    }
    if expiry.gravity_ended {
        bus.push(BattleEvent::GravityEnded);
    }

    state.turn_number += 1;
}

fn residual_status_damage(state: &mut BattleState, id: BattlerId, bus: &mut EventBus) {
    let Some(battler) = state.battler_mut(id) else {
        return;
    };
    let max_hp = battler.max_hp();
    let (damage, status) = match battler.status {
        Some(StatusCondition::Poison) => ((max_hp / 8).max(1), StatusCondition::Poison),
        Some(StatusCondition::Toxic(counter)) => {
            let damage = (u32::from(max_hp) * u32::from(counter) / 16).max(1) as u16;
            battler.status = Some(StatusCondition::Toxic(counter.saturating_add(1).min(15)));
            (damage, StatusCondition::Toxic(counter))
        }
        Some(StatusCondition::Burn) => ((max_hp / 16).max(1), StatusCondition::Burn),
        _ => return,
    };
    let fainted = battler.take_damage(damage);
    bus.push(BattleEvent::StatusDamage {
        target: id,
        status,
        damage,
    });
    if fainted {
        bus.push(BattleEvent::BattlerFainted { battler: id });
    }
}

fn residual_tag_damage(state: &mut BattleState, id: BattlerId, bus: &mut EventBus) {
    // Trap damage.
    if state.battler(id).map_or(false, |b| b.has_tag(TagKind::Trapped)) {
        if let Some(battler) = state.battler_mut(id) {
            let damage = (battler.max_hp() / 16).max(1);
            let fainted = battler.take_damage(damage);
            let remaining_hp = battler.current_hp;
            bus.push(BattleEvent::DamageDealt {
                target: id,
                amount: damage,
                remaining_hp,
            });
            if fainted {
                bus.push(BattleEvent::BattlerFainted { battler: id });
            }
        }
    }

    // Leech seed drains toward the opposing side.
    if state.battler(id).map_or(false, |b| b.has_tag(TagKind::Seeded)) {
        let drained = {
            let Some(battler) = state.battler_mut(id) else {
                return;
            };
            let damage = (battler.max_hp() / 8).max(1).min(battler.current_hp);
            if damage == 0 {
                return;
            }
            let fainted = battler.take_damage(damage);
            let remaining_hp = battler.current_hp;
            bus.push(BattleEvent::DamageDealt {
                target: id,
                amount: damage,
                remaining_hp,
            });
            if fainted {
                bus.push(BattleEvent::BattlerFainted { battler: id });
            }
            damage
        };
        if let Some(beneficiary) = state.active_ids(id.enemy_side()).first().copied() {
            if let Some(battler) = state.battler_mut(beneficiary) {
                let restored = battler.heal(drained);
                if restored > 0 {
                    let new_hp = battler.current_hp;
                    bus.push(BattleEvent::BattlerHealed {
                        target: beneficiary,
                        amount: restored,
                        new_hp,
                    });
                }
            }
        }
    }
}
