use crate::battle::conditions::BattlerTag;
use crate::battle::effects::EffectContext;
use crate::battle::state::{BattleEvent, BattleState, EventBus};
use crate::battler::StatusCondition;
use crate::move_dex;
use crate::rng::BattleRng;
use schema::{ClauseTagKind, MoveFlags, PokemonType, StatusType};

/// Inflicts a non-volatile status on the clause's target. The single status
/// slot is first-come-first-served: an existing status makes this a routine
/// clause failure, not an error.
pub fn apply_status(
    state: &mut BattleState,
    ctx: &EffectContext,
    status: StatusType,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> bool {
    if status_blocked_by_type_or_flags(state, ctx, status) {
        return false;
    }

    let condition = match status {
        StatusType::Sleep => {
            let turns = 1 + rng.range(3, "Sleep Duration") as u8;
            StatusCondition::Sleep(turns)
        }
        StatusType::Poison => StatusCondition::Poison,
        StatusType::Toxic => StatusCondition::Toxic(1),
        StatusType::Burn => StatusCondition::Burn,
        StatusType::Freeze => StatusCondition::Freeze,
        StatusType::Paralysis => StatusCondition::Paralysis,
    };

    let Some(target) = state.battler_mut(ctx.target) else {
        return false;
    };
    if target.is_fainted() || target.status.is_some() {
        return false;
    }
    target.status = Some(condition);
    bus.push(BattleEvent::StatusApplied {
        target: ctx.target,
        status: condition,
    });
    true
}

fn status_blocked_by_type_or_flags(
    state: &BattleState,
    ctx: &EffectContext,
    status: StatusType,
) -> bool {
    let Some(target) = state.battler(ctx.target) else {
        return true;
    };
    match status {
        StatusType::Burn if target.types.contains(&PokemonType::Fire) => return true,
        StatusType::Paralysis if target.types.contains(&PokemonType::Electric) => return true,
        StatusType::Poison | StatusType::Toxic
            if target.types.contains(&PokemonType::Poison) =>
        {
            return true;
        }
        _ => {}
    }
    // Powder-delivered statuses bounce off Grass-types.
    if let Ok(move_data) = move_dex::get_move_data(ctx.move_id) {
        if move_data.has_flag(MoveFlags::POWDER) && target.types.contains(&PokemonType::Grass) {
            return true;
        }
    }
    false
}

/// Attaches a clause-inflicted tag to its subject. Duplicate kinds are a
/// routine failure.
pub fn apply_tag(
    state: &mut BattleState,
    ctx: &EffectContext,
    tag: ClauseTagKind,
    rng: &mut BattleRng,
    bus: &mut EventBus,
) -> bool {
    let (subject, battler_tag) = match tag {
        ClauseTagKind::Flinch => (ctx.target, BattlerTag::Flinched),
        ClauseTagKind::Confusion => {
            let turns = 2 + rng.range(4, "Confusion Duration") as u8;
            (
                ctx.target,
                BattlerTag::Confused {
                    turns_remaining: turns,
                },
            )
        }
        ClauseTagKind::LeechSeed => {
            // Grass-types shrug the seed off.
            if state
                .battler(ctx.target)
                .map_or(true, |b| b.types.contains(&PokemonType::Grass))
            {
                return false;
            }
            (ctx.target, BattlerTag::Seeded)
        }
        ClauseTagKind::Trapped => {
            let turns = 4 + rng.range(2, "Trap Duration") as u8;
            (
                ctx.target,
                BattlerTag::Trapped {
                    turns_remaining: turns,
                    source: ctx.move_id,
                },
            )
        }
        ClauseTagKind::Disable => {
            let Some(last) = state.battler(ctx.target).and_then(|b| b.last_move()) else {
                return false;
            };
            (
                ctx.target,
                BattlerTag::Disabled {
                    move_: last.move_,
                    turns_remaining: 4,
                },
            )
        }
        ClauseTagKind::HelpingHand => (ctx.target, BattlerTag::HelpingHand),
    };

    let Some(battler) = state.battler_mut(subject) else {
        return false;
    };
    if battler.is_fainted() {
        return false;
    }
    let kind = battler_tag.kind();
    if !battler.add_tag(battler_tag) {
        return false;
    }
    bus.push(BattleEvent::TagApplied {
        target: subject,
        tag: kind,
    });
    debug_assert!(state.battler(subject).map_or(false, |b| b.has_tag(kind)));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::state::{BattleSide, BattlerId};
    use crate::battler::Battler;
    use schema::Move;

    fn duel(attacker_types: Vec<PokemonType>, defender_types: Vec<PokemonType>) -> BattleState {
        let attacker = Battler::new(
            "Attacker",
            20,
            attacker_types,
            [60, 50, 50, 50, 50, 50],
            vec![Move::Ember],
        );
        let defender = Battler::new(
            "Defender",
            20,
            defender_types,
            [60, 50, 50, 50, 50, 50],
            vec![Move::Tackle],
        );
        BattleState::new(BattleSide::solo(attacker), BattleSide::solo(defender))
    }

    #[test]
    fn test_fire_types_cannot_be_burned() {
        let mut state = duel(vec![PokemonType::Fire], vec![PokemonType::Fire]);
        let ctx = EffectContext::new(BattlerId::new(0, 0), BattlerId::new(1, 0), Move::Ember);
        let mut rng = BattleRng::scripted(vec![]);
        let mut bus = EventBus::new();
        assert!(!apply_status(&mut state, &ctx, StatusType::Burn, &mut rng, &mut bus));
        assert!(state.battler(ctx.target).unwrap().status.is_none());
    }

    #[test]
    fn test_status_slot_is_exclusive() {
        let mut state = duel(vec![PokemonType::Fire], vec![PokemonType::Normal]);
        let ctx = EffectContext::new(BattlerId::new(0, 0), BattlerId::new(1, 0), Move::Ember);
        let mut rng = BattleRng::scripted(vec![]);
        let mut bus = EventBus::new();
        assert!(apply_status(&mut state, &ctx, StatusType::Burn, &mut rng, &mut bus));
        assert!(!apply_status(
            &mut state,
            &ctx,
            StatusType::Paralysis,
            &mut rng,
            &mut bus
        ));
        assert_eq!(
            state.battler(ctx.target).unwrap().status,
            Some(StatusCondition::Burn)
        );
    }

    #[test]
    fn test_powder_bounces_off_grass_types() {
        let mut state = duel(vec![PokemonType::Grass], vec![PokemonType::Grass]);
        let ctx = EffectContext::new(
            BattlerId::new(0, 0),
            BattlerId::new(1, 0),
            Move::SleepPowder,
        );
        let mut rng = BattleRng::scripted(vec![50]);
        let mut bus = EventBus::new();
        assert!(!apply_status(
            &mut state,
            &ctx,
            StatusType::Sleep,
            &mut rng,
            &mut bus
        ));
    }

    #[test]
    fn test_disable_requires_a_last_move() {
        let mut state = duel(vec![PokemonType::Normal], vec![PokemonType::Normal]);
        let ctx = EffectContext::new(BattlerId::new(0, 0), BattlerId::new(1, 0), Move::Disable);
        let mut rng = BattleRng::scripted(vec![]);
        let mut bus = EventBus::new();
        assert!(!apply_tag(
            &mut state,
            &ctx,
            ClauseTagKind::Disable,
            &mut rng,
            &mut bus
        ));

        state
            .battler_mut(ctx.target)
            .unwrap()
            .record_move(Move::Tackle, true);
        assert!(apply_tag(
            &mut state,
            &ctx,
            ClauseTagKind::Disable,
            &mut rng,
            &mut bus
        ));
    }
}
