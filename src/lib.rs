//! Crucible Battle Engine
//!
//! The move-effect resolution core for a turn-based creature battler:
//! given a move, a user, and a notional target, it decides what happens —
//! targeting expansion, the power/accuracy/priority/secondary-chance
//! pipelines, hit/miss resolution, phase-ordered effect clauses, and the
//! embedded charge/rampage/guard state machines.
//!
//! The engine is an in-process library. A higher-level turn orchestrator
//! owns action selection and turn ordering; it calls
//! [`resolve_move_use`] per chosen action and [`end_of_turn`] once per
//! turn, consults [`forced_move`] before offering a free choice, and
//! drains the [`EventBus`] for messaging, animation, and audio cues.
//! Execution is single-threaded and deterministic per seed.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod battler;
pub mod errors;
pub mod move_dex;
pub mod rng;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Core data definitions shared with outer tooling.
pub use schema::{
    Ability, ApplyPhase, ChargeCondition, ClauseTagKind, EffectKind, HazardKind, HeldItem, Move,
    MoveCategory, MoveCondition, MoveData, MoveEffect, MoveFlags, MultiStrikeKind, PokemonType,
    RampageEnd, ScreenKind, StatType, StatusType, Target, TargetMode, Terrain, VariablePowerKind,
    Weather,
};

// --- From this crate's modules ---

// Resolution entry points.
pub use battle::engine::{
    clear_forced_moves, end_of_turn, forced_move, resolve_move_use, MoveOutcome, TargetOutcome,
};

// Core runtime types for a battle.
pub use battle::conditions::{BattlerTag, TagKind};
pub use battle::state::{
    BattleEvent, BattleSide, BattleState, BattlerId, EventBus, FailureReason, FieldState,
};
pub use battler::{Battler, MoveSlot, StatusCondition, UsedMove};

// Numeric pipelines and clause dispatch.
pub use battle::effects::{apply_matching, ClauseBehaviorExt, EffectArgs, EffectContext};
pub use battle::pipelines::{
    accuracy_pipeline, power_pipeline, priority_pipeline, secondary_chance_pipeline, Accuracy,
};

// Targeting and scoring queries.
pub use battle::multi_strike::{expected_strike_count, strike_count};
pub use battle::scoring::{best_move, expected_move_value};
pub use battle::targeting::{resolve_targets, TargetSet};

// Randomness.
pub use rng::BattleRng;

// Registry access.
pub use move_dex::{get_move_data, validate_move_dex};

// Crate-specific error and result types.
pub use errors::{BattleEngineError, BattleResult, BattleStateError, MoveDataError};
