use crate::battle::state::{BattleState, BattlerId};
use crate::rng::BattleRng;
use schema::{DynamicTargetKind, EffectKind, MoveData, MoveEffect, TargetMode};

/// Concrete outcome of targeting resolution: an ordered list of live slots,
/// plus whether the move strikes every slot (`multiple`) or exactly one of
/// the listed candidates.
///
/// Recomputed fresh on every move use from live field state; never cached.
/// Empty means the move fails with no target — callers never see null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    pub targets: Vec<BattlerId>,
    pub multiple: bool,
}

impl TargetSet {
    fn every(targets: Vec<BattlerId>) -> Self {
        TargetSet {
            targets,
            multiple: true,
        }
    }

    fn one_of(targets: Vec<BattlerId>) -> Self {
        TargetSet {
            targets,
            multiple: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Expands a move's targeting mode against the live battlefield topology.
///
/// `override_mode` substitutes the descriptor's own mode when the move is
/// invoked indirectly (copying) or widened by a dynamic-target clause.
pub fn resolve_targets(
    state: &BattleState,
    user: BattlerId,
    move_data: &MoveData,
    override_mode: Option<TargetMode>,
    rng: &mut BattleRng,
) -> TargetSet {
    let mode = override_mode
        .or_else(|| dynamic_target_override(state, move_data))
        .unwrap_or(move_data.target_mode);

    let enemies = state.active_ids(user.enemy_side());

    match mode {
        TargetMode::User => TargetSet::every(self_if_active(state, user)),
        TargetMode::UserAndAllies => {
            let mut targets = self_if_active(state, user);
            targets.extend(state.ally_of(user));
            TargetSet::every(targets)
        }
        TargetMode::NearAlly => TargetSet::one_of(state.ally_of(user).into_iter().collect()),
        TargetMode::UserOrNearAlly => {
            let mut targets = self_if_active(state, user);
            targets.extend(state.ally_of(user));
            TargetSet::one_of(targets)
        }
        TargetMode::NearEnemy => TargetSet::one_of(enemies),
        TargetMode::NearOther => {
            let mut targets = enemies;
            targets.extend(state.ally_of(user));
            TargetSet::one_of(targets)
        }
        TargetMode::RandomNearEnemy => {
            if enemies.is_empty() {
                return TargetSet::one_of(Vec::new());
            }
            let pick = rng.range(enemies.len() as u32, "Random Target Selection") as usize;
            TargetSet::one_of(vec![enemies[pick]])
        }
        TargetMode::AllNearEnemies | TargetMode::AllEnemies => TargetSet::every(enemies),
        TargetMode::AllNearOthers => {
            let mut targets = enemies;
            targets.extend(state.ally_of(user));
            TargetSet::every(targets)
        }
        // Area moves act on arena scopes; the user's own slot stands in as
        // the representative target so the strike loop has a subject.
        TargetMode::UserSide | TargetMode::BothSides | TargetMode::EntireField => {
            TargetSet::every(self_if_active(state, user))
        }
        TargetMode::EnemySide => TargetSet::every(enemies.into_iter().take(1).collect()),
    }
}

fn self_if_active(state: &BattleState, user: BattlerId) -> Vec<BattlerId> {
    if state.is_active(user) {
        vec![user]
    } else {
        Vec::new()
    }
}

/// A dynamic-target clause may replace the nominal mode before the switch,
/// for moves whose reach depends on board state rather than a fixed enum.
fn dynamic_target_override(state: &BattleState, move_data: &MoveData) -> Option<TargetMode> {
    move_data
        .effects_of_kind(EffectKind::DynamicTarget)
        .find_map(|effect| match effect {
            MoveEffect::DynamicTargets(DynamicTargetKind::SpreadInTerrain(terrain, widened)) => {
                (state.field.terrain() == Some(*terrain)).then_some(*widened)
            }
            _ => None,
        })
}
