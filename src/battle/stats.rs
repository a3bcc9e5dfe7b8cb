use crate::battle::state::{BattleState, BattlerId};
use crate::battler::{Battler, StatusCondition, STAT_ATK, STAT_DEF, STAT_SPATK, STAT_SPDEF, STAT_SPE};
use crate::rng::BattleRng;
use schema::{MoveCategory, MoveData, PokemonType, ScreenKind, StatType};

/// Stage multipliers for the five battle stats.
/// Negative stages: 2 / (2 + |stage|); positive stages: (2 + stage) / 2.
pub fn stat_stage_multiplier(base_stat: u16, stage: i8) -> u16 {
    let stage = stage.clamp(-6, 6);
    if stage == 0 {
        return base_stat;
    }
    let multiplier = if stage < 0 {
        2.0 / (2.0 + f64::from(-stage))
    } else {
        (2.0 + f64::from(stage)) / 2.0
    };
    (f64::from(base_stat) * multiplier).round() as u16
}

/// Accuracy and evasion use a steeper 3-based ladder than the other stats.
pub fn accuracy_stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-6, 6);
    if stage >= 0 {
        (3.0 + f64::from(stage)) / 3.0
    } else {
        3.0 / (3.0 + f64::from(-stage))
    }
}

/// The attacking stat for a damaging move, stages applied.
pub fn effective_attack(attacker: &Battler, move_data: &MoveData) -> u16 {
    match move_data.category {
        MoveCategory::Physical => stat_stage_multiplier(
            attacker.stats[STAT_ATK],
            attacker.stat_stage(StatType::Atk),
        ),
        MoveCategory::Special => stat_stage_multiplier(
            attacker.stats[STAT_SPATK],
            attacker.stat_stage(StatType::SpAtk),
        ),
        MoveCategory::Status => 0,
    }
}

/// The defending stat against a damaging move, stages applied.
pub fn effective_defense(defender: &Battler, move_data: &MoveData) -> u16 {
    match move_data.category {
        MoveCategory::Physical => stat_stage_multiplier(
            defender.stats[STAT_DEF],
            defender.stat_stage(StatType::Def),
        ),
        MoveCategory::Special => stat_stage_multiplier(
            defender.stats[STAT_SPDEF],
            defender.stat_stage(StatType::SpDef),
        ),
        MoveCategory::Status => 0,
    }
}

/// Speed with stages and paralysis applied; used by outer turn ordering.
pub fn effective_speed(battler: &Battler) -> u16 {
    let mut speed =
        stat_stage_multiplier(battler.stats[STAT_SPE], battler.stat_stage(StatType::Spe));
    if battler.status == Some(StatusCondition::Paralysis) {
        speed /= 4;
    }
    speed
}

/// Critical-hit roll. The crit-ratio stage is the battler's Crit stat stage
/// plus one for high-crit moves.
pub fn roll_critical(attacker: &Battler, high_crit: bool, rng: &mut BattleRng) -> bool {
    let stage = attacker.stat_stage(StatType::Crit).max(0) + i8::from(high_crit);
    let percent = match stage {
        0 => 6,
        1 => 12,
        2 => 25,
        _ => 33,
    };
    rng.chance(percent, "Critical Hit Check")
}

/// Final damage for one strike: the classic level formula, then crit, STAB,
/// type effectiveness, burn, screens, and the 85-100% roll, in that order.
///
/// The type-effectiveness multiplier arrives here from the pure lookup; the
/// power pipeline upstream never includes it.
pub fn calculate_strike_damage(
    state: &BattleState,
    attacker_id: BattlerId,
    defender_id: BattlerId,
    move_data: &MoveData,
    power: u16,
    effectiveness: f32,
    is_crit: bool,
    rng: &mut BattleRng,
) -> u16 {
    let attacker = match state.battler(attacker_id) {
        Some(b) => b,
        None => return 0,
    };
    let defender = match state.battler(defender_id) {
        Some(b) => b,
        None => return 0,
    };

    let attack = effective_attack(attacker, move_data).max(1);
    let defense = effective_defense(defender, move_data).max(1);

    let level_factor = (2.0 * f64::from(attacker.level)) / 5.0 + 2.0;
    let mut damage =
        (level_factor * f64::from(power) * f64::from(attack) / f64::from(defense)) / 50.0 + 2.0;

    if is_crit {
        damage *= 1.5;
    }

    // Same-type attack bonus.
    if attacker.types.contains(&move_data.move_type) {
        damage *= 1.5;
    }

    damage *= f64::from(effectiveness);

    if attacker.status == Some(StatusCondition::Burn)
        && move_data.category == MoveCategory::Physical
    {
        damage *= 0.5;
    }

    // Screens halve damage unless the strike crit through them.
    if !is_crit {
        let screen = match move_data.category {
            MoveCategory::Physical => Some(ScreenKind::Reflect),
            MoveCategory::Special => Some(ScreenKind::LightScreen),
            MoveCategory::Status => None,
        };
        if let Some(screen) = screen {
            if state.sides[defender_id.side].conditions.screen_active(screen) {
                damage *= 0.5;
            }
        }
    }

    // 85-100% spread.
    let roll = 85 + rng.range(16, "Damage Roll");
    damage = damage * f64::from(roll) / 100.0;

    (damage as u16).max(1)
}

/// Type effectiveness of a move against a defender, from the pure lookup.
pub fn move_effectiveness(move_data: &MoveData, defender: &Battler) -> f32 {
    PokemonType::effectiveness_against(move_data.move_type, &defender.types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stat_stage_multipliers() {
        assert_eq!(stat_stage_multiplier(100, 0), 100);
        assert_eq!(stat_stage_multiplier(100, 1), 150);
        assert_eq!(stat_stage_multiplier(100, 2), 200);
        assert_eq!(stat_stage_multiplier(100, 6), 400);
        assert_eq!(stat_stage_multiplier(100, -1), 67);
        assert_eq!(stat_stage_multiplier(100, -2), 50);
        assert_eq!(stat_stage_multiplier(100, -6), 25);
    }

    #[test]
    fn test_accuracy_stage_multipliers() {
        assert!((accuracy_stage_multiplier(0) - 1.0).abs() < 1e-9);
        assert!((accuracy_stage_multiplier(1) - 4.0 / 3.0).abs() < 1e-9);
        assert!((accuracy_stage_multiplier(-1) - 0.75).abs() < 1e-9);
        assert!((accuracy_stage_multiplier(6) - 3.0).abs() < 1e-9);
        assert!((accuracy_stage_multiplier(-6) - 1.0 / 3.0).abs() < 1e-9);
    }
}
