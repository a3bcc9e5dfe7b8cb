use crate::field_types::{HazardKind, ScreenKind, Terrain, Weather};
use crate::move_types::{StatType, StatusType, Target, TargetMode};
use serde::{Deserialize, Serialize};

/// Kind tag used by the engine's dispatch passes to filter a move's clause
/// list ("all clauses of heal kind", "all power-variable clauses", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    VariablePower,
    MultiStrike,
    DamageShape,
    StatStage,
    Status,
    Tag,
    Heal,
    Field,
    Charge,
    Rampage,
    Guard,
    CopyMove,
    DynamicTarget,
    SelfKo,
    Money,
}

impl EffectKind {
    /// Kinds that steer the resolution flow itself (charging, lock-in,
    /// copying, target widening) rather than applying an effect. The
    /// phase-ordered passes skip them; the engine dispatches them
    /// explicitly where the flow calls for it.
    pub fn steers_resolution(self) -> bool {
        matches!(
            self,
            EffectKind::Charge
                | EffectKind::Rampage
                | EffectKind::CopyMove
                | EffectKind::DynamicTarget
        )
    }
}

/// When in the resolution of a single move use a clause fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplyPhase {
    /// Before per-target success is determined (e.g. clearing hazards).
    PreApply,
    /// After normal damage has been dealt to the current target.
    OnHit,
    /// Once, after every target has been processed.
    PostAllTargets,
}

/// Restricts a clause to part of a multi-strike sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeGate {
    EveryHit,
    FirstHitOnly,
    LastHitOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariablePowerKind {
    /// Power doubles the first time the move is used in a battle.
    DoubledOnFirstUse,
    /// Power scales up as the move's remaining PP drops.
    ScalesWithRemainingPp,
    /// Power rises as the user's remaining HP falls.
    LowHpBoost,
    /// Power doubles against a target with a status condition.
    DoubledAgainstStatused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultiStrikeKind {
    /// 2-5 strikes with weights 3/8, 3/8, 1/8, 1/8.
    TwoToFive,
    Fixed(u8),
    /// One strike per living, status-free party member.
    PartyCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeCondition {
    /// Unsuppressed harsh sunlight lets the move fire on the charge turn.
    SunlightActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RampageEnd {
    /// The user becomes confused when the rampage runs its full course.
    Confuse,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DynamicTargetKind {
    /// Widens a single-target move into a spread while a terrain is up.
    SpreadInTerrain(Terrain, TargetMode),
}

/// Tag kinds a clause can inflict. The engine's runtime tag store carries
/// additional engine-internal kinds (charging, rampaging, guard) that are
/// never inflicted directly by a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseTagKind {
    Flinch,
    Confusion,
    LeechSeed,
    Trapped,
    Disable,
    HelpingHand,
}

/// Conditions gating whether a move may execute at all. The move-level list
/// is the conjunction of clause-contributed predicates plus any added
/// explicitly at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCondition {
    /// The target must have a recorded last move (copying, disabling).
    TargetHasLastMove,
    /// Diminishing-probability guard: succeeds with probability 1/3^n where
    /// n counts immediately preceding successful guard-category uses.
    GuardSuccession,
}

/// A single composable unit of move behavior. Pure data here; the engine
/// crate attaches `apply`/`condition`/`benefit` behavior via extension
/// traits so this crate stays serializable and dependency-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoveEffect {
    // Power pipeline contributors
    VariablePower(VariablePowerKind),

    // Strike count
    MultiStrike(MultiStrikeKind),

    // Damage shaping
    FixedDamage(u16),
    LevelDamage,
    HalveHp,
    Ohko,
    HighCrit,
    /// Percent of damage dealt reflected onto the user.
    Recoil(u8),
    /// Percent of damage dealt restored to the user.
    Drain(u8),
    /// The user faints once all targets were processed; requires that a
    /// legal target existed.
    SelfDestruct,

    // Stat stages
    StatChange {
        target: Target,
        stats: Vec<StatType>,
        stages: i8,
        /// None = governed by the move's base secondary chance.
        chance: Option<u8>,
    },
    /// Eliminates every battler's stat stage changes.
    ClearStatStages,

    // Status and tags
    InflictStatus {
        status: StatusType,
        chance: Option<u8>,
    },
    InflictTag {
        tag: ClauseTagKind,
        chance: Option<u8>,
    },

    // Healing
    Heal(u8),

    // Field
    SetWeather(Weather),
    SetTerrain(Terrain),
    SideScreen {
        screen: ScreenKind,
        turns: u8,
    },
    LayHazard(HazardKind),
    /// Removes hazards from the user's side before damage is inflicted.
    ClearHazards,
    SetGravity {
        turns: u8,
    },

    // Embedded state machines
    Charge {
        instant_when: Option<ChargeCondition>,
        /// The user is semi-invulnerable (airborne) during the charge turn.
        airborne: bool,
        /// Stat raised as part of the charge turn.
        stat_boost: Option<(StatType, i8)>,
    },
    Rampage {
        end: RampageEnd,
    },
    Guard,

    // Indirection
    CopyLastMove {
        /// Targeting mode substituted for the copied move's own mode.
        redirect: TargetMode,
    },
    DynamicTargets(DynamicTargetKind),

    // Economy
    Payout,
}

impl MoveEffect {
    pub fn kind(&self) -> EffectKind {
        match self {
            MoveEffect::VariablePower(_) => EffectKind::VariablePower,
            MoveEffect::MultiStrike(_) => EffectKind::MultiStrike,
            MoveEffect::FixedDamage(_)
            | MoveEffect::LevelDamage
            | MoveEffect::HalveHp
            | MoveEffect::Ohko
            | MoveEffect::HighCrit
            | MoveEffect::Recoil(_)
            | MoveEffect::Drain(_) => EffectKind::DamageShape,
            MoveEffect::SelfDestruct => EffectKind::SelfKo,
            MoveEffect::StatChange { .. } | MoveEffect::ClearStatStages => EffectKind::StatStage,
            MoveEffect::InflictStatus { .. } => EffectKind::Status,
            MoveEffect::InflictTag { .. } => EffectKind::Tag,
            MoveEffect::Heal(_) => EffectKind::Heal,
            MoveEffect::SetWeather(_)
            | MoveEffect::SetTerrain(_)
            | MoveEffect::SideScreen { .. }
            | MoveEffect::LayHazard(_)
            | MoveEffect::ClearHazards
            | MoveEffect::SetGravity { .. } => EffectKind::Field,
            MoveEffect::Charge { .. } => EffectKind::Charge,
            MoveEffect::Rampage { .. } => EffectKind::Rampage,
            MoveEffect::Guard => EffectKind::Guard,
            MoveEffect::CopyLastMove { .. } => EffectKind::CopyMove,
            MoveEffect::DynamicTargets(_) => EffectKind::DynamicTarget,
            MoveEffect::Payout => EffectKind::Money,
        }
    }

    pub fn phase(&self) -> ApplyPhase {
        match self {
            MoveEffect::ClearHazards => ApplyPhase::PreApply,
            MoveEffect::SelfDestruct => ApplyPhase::PostAllTargets,
            _ => ApplyPhase::OnHit,
        }
    }

    pub fn strike_gate(&self) -> StrikeGate {
        match self {
            MoveEffect::ClearHazards
            | MoveEffect::Heal(_)
            | MoveEffect::SetWeather(_)
            | MoveEffect::SetTerrain(_)
            | MoveEffect::SideScreen { .. }
            | MoveEffect::LayHazard(_)
            | MoveEffect::SetGravity { .. }
            | MoveEffect::CopyLastMove { .. } => StrikeGate::FirstHitOnly,
            MoveEffect::StatChange {
                target: Target::User,
                ..
            } => StrikeGate::LastHitOnly,
            _ => StrikeGate::EveryHit,
        }
    }

    /// True when the clause acts on the user rather than the struck target.
    pub fn targets_user(&self) -> bool {
        match self {
            MoveEffect::StatChange { target, .. } => *target == Target::User,
            MoveEffect::Heal(_)
            | MoveEffect::ClearHazards
            | MoveEffect::Recoil(_)
            | MoveEffect::Drain(_)
            | MoveEffect::Charge { .. }
            | MoveEffect::Rampage { .. }
            | MoveEffect::Guard
            | MoveEffect::SelfDestruct
            | MoveEffect::Payout => true,
            _ => false,
        }
    }

    /// Self-targeting clauses of spread moves fire only while processing the
    /// first target so they are not applied once per struck battler.
    pub fn first_target_only(&self) -> bool {
        self.targets_user()
    }

    /// The pre-use predicate this clause adds to its move's condition list.
    pub fn contributed_condition(&self) -> Option<MoveCondition> {
        match self {
            MoveEffect::Guard => Some(MoveCondition::GuardSuccession),
            MoveEffect::CopyLastMove { .. } => Some(MoveCondition::TargetHasLastMove),
            MoveEffect::InflictTag {
                tag: ClauseTagKind::Disable,
                ..
            } => Some(MoveCondition::TargetHasLastMove),
            _ => None,
        }
    }
}
