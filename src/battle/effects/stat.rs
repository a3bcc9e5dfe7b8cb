use crate::battle::state::{BattleEvent, BattleState, BattlerId, EventBus};
use schema::StatType;

/// Applies a stage delta to each listed stat. Reports success when at least
/// one stat actually moved; a battler already at the bound produces a
/// blocked event instead.
pub fn apply_stat_change(
    state: &mut BattleState,
    target_id: BattlerId,
    stats: &[StatType],
    stages: i8,
    bus: &mut EventBus,
) -> bool {
    let Some(target) = state.battler_mut(target_id) else {
        return false;
    };
    if target.is_fainted() {
        return false;
    }

    let mut any_changed = false;
    for stat in stats {
        let applied = target.modify_stat_stage(*stat, stages);
        if applied == 0 {
            bus.push(BattleEvent::StatChangeBlocked {
                target: target_id,
                stat: *stat,
            });
            continue;
        }
        any_changed = true;
        let new_stage = target.stat_stage(*stat);
        bus.push(BattleEvent::StatStageChanged {
            target: target_id,
            stat: *stat,
            delta: applied,
            new_stage,
        });
    }
    any_changed
}

/// Eliminates every active battler's stage changes, both sides.
pub fn apply_clear_stat_stages(state: &mut BattleState, bus: &mut EventBus) -> bool {
    let mut any_cleared = false;
    for id in state.all_active_ids() {
        if let Some(battler) = state.battler_mut(id) {
            if !battler.stat_stages.is_empty() {
                battler.clear_stat_stages();
                any_cleared = true;
            }
        }
    }
    if any_cleared {
        bus.push(BattleEvent::StatStagesCleared);
    }
    any_cleared
}
