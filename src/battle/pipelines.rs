//! Ordered contributor chains for power, accuracy, priority, and
//! secondary-effect chance.
//!
//! Each pipeline seeds an accumulator cell from the move's intrinsic value
//! and threads it through contributors in a fixed order. Contributors are
//! not commutative: the stage order below is a behavioral contract, not an
//! implementation detail. Reordering changes results.
//!
//! Contributor order (where a stage applies):
//! 1. clause-intrinsic modifiers (variable-power clauses)
//! 2. ally aura effects
//! 3. held-item multipliers
//! 4. weather/terrain modifiers
//! 5. move-specific post-multipliers (stacking buffs)

use crate::battle::conditions::TagKind;
use crate::battle::effects::{self, EffectContext};
use crate::battle::state::BattleState;
use crate::battle::stats::accuracy_stage_multiplier;
use schema::{
    Ability, HeldItem, MoveCategory, MoveData, PokemonType, StatType, Terrain, Weather,
};

/// Mutable accumulator threaded through the power chain. Contributors read
/// the running value and either replace it or scale it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerValue {
    pub value: f64,
}

impl PowerValue {
    pub fn new(base: u16) -> Self {
        PowerValue {
            value: f64::from(base),
        }
    }

    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    pub fn scale(&mut self, factor: f64) {
        self.value *= factor;
    }
}

/// Accuracy accumulator. `NeverMiss` is a sticky sentinel: once set, every
/// later contributor is skipped and the pipeline's answer is final.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccuracyValue {
    Percent(f64),
    NeverMiss,
}

impl AccuracyValue {
    pub fn scale(&mut self, factor: f64) {
        if let AccuracyValue::Percent(value) = self {
            *value *= factor;
        }
    }
}

/// Final accuracy pipeline output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Percent(u8),
    NeverMiss,
}

/// Computes the effective base power for one strike. Returns None for moves
/// with no applicable power; the engine never invokes this for Status moves.
pub fn power_pipeline(
    state: &BattleState,
    ctx: &EffectContext,
    move_data: &MoveData,
) -> Option<u16> {
    let base = move_data.power?;
    let mut cell = PowerValue::new(base);

    // 1. Clause-intrinsic variable power, in clause-list order.
    effects::apply_power_clauses(state, ctx, move_data, &mut cell);

    // 2. Ally aura effects would contribute here; none are modeled yet.

    // 3. Held item.
    if let Some(user) = state.battler(ctx.user) {
        match (user.held_item, move_data.category) {
            (Some(HeldItem::MuscleBand), MoveCategory::Physical) => cell.scale(1.1),
            (Some(HeldItem::WiseGlasses), MoveCategory::Special) => cell.scale(1.1),
            _ => {}
        }
    }

    // 4. Weather, then terrain.
    match (state.field.weather(), move_data.move_type) {
        (Some(Weather::Sunlight), PokemonType::Fire) => cell.scale(1.5),
        (Some(Weather::Sunlight), PokemonType::Water) => cell.scale(0.5),
        (Some(Weather::Rain), PokemonType::Water) => cell.scale(1.5),
        (Some(Weather::Rain), PokemonType::Fire) => cell.scale(0.5),
        _ => {}
    }
    match (state.field.terrain(), move_data.move_type) {
        (Some(Terrain::Grassy), PokemonType::Grass) => cell.scale(1.3),
        (Some(Terrain::Psychic), PokemonType::Psychic) => cell.scale(1.3),
        _ => {}
    }

    // 5. Post-multipliers: stacking ally boost.
    if state
        .battler(ctx.user)
        .map_or(false, |b| b.has_tag(TagKind::HelpingHand))
    {
        cell.scale(1.5);
    }

    Some(cell.value.round().max(0.0) as u16)
}

/// Computes the hit chance against one target. The never-miss sentinel
/// short-circuits every later contributor, including the gravity modifier.
pub fn accuracy_pipeline(
    state: &BattleState,
    ctx: &EffectContext,
    move_data: &MoveData,
) -> Accuracy {
    // Intrinsic sentinel: a move with no accuracy value cannot miss.
    let Some(base) = move_data.accuracy else {
        return Accuracy::NeverMiss;
    };
    let mut cell = AccuracyValue::Percent(f64::from(base));

    let user = state.battler(ctx.user);
    let target = state.battler(ctx.target);

    // Ability sentinel contributors run before any numeric stage.
    let no_guard = user.map_or(false, |b| b.ability == Ability::NoGuard)
        || target.map_or(false, |b| b.ability == Ability::NoGuard);
    if no_guard {
        cell = AccuracyValue::NeverMiss;
    }

    if let AccuracyValue::Percent(_) = cell {
        // Stage differential: user's accuracy minus target's evasion.
        let acc_stage = user.map_or(0, |b| b.stat_stage(StatType::Acc));
        let eva_stage = target.map_or(0, |b| b.stat_stage(StatType::Eva));
        cell.scale(accuracy_stage_multiplier((acc_stage - eva_stage).clamp(-6, 6)));

        if user.map_or(false, |b| b.ability == Ability::CompoundEyes) {
            cell.scale(1.3);
        }
        if user.and_then(|b| b.held_item) == Some(HeldItem::WideLens) {
            cell.scale(1.1);
        }
        if state.field.weather() == Some(Weather::Sandstorm)
            && target.map_or(false, |b| b.ability == Ability::SandVeil)
        {
            cell.scale(0.8);
        }
        if state.field.gravity_active() {
            cell.scale(5.0 / 3.0);
        }
    }

    match cell {
        AccuracyValue::NeverMiss => Accuracy::NeverMiss,
        AccuracyValue::Percent(value) => Accuracy::Percent(value.round().clamp(0.0, 100.0) as u8),
    }
}

/// Computes the move's action priority. The chain is currently seeded from
/// the descriptor alone; ability and terrain contributors slot in here.
pub fn priority_pipeline(
    _state: &BattleState,
    _ctx: &EffectContext,
    move_data: &MoveData,
) -> i8 {
    move_data.priority.clamp(-7, 7)
}

/// Computes the chance that chance-bearing secondary clauses fire. None
/// means "always, if applicable". The defender's ability hooks may negate
/// the chance outright.
pub fn secondary_chance_pipeline(
    state: &BattleState,
    ctx: &EffectContext,
    move_data: &MoveData,
) -> Option<u8> {
    if state
        .battler(ctx.target)
        .map_or(false, |b| b.ability == Ability::ShieldDust)
        && ctx.target != ctx.user
    {
        return Some(0);
    }
    move_data.effect_chance
}
