use crate::battle::state::{BattleState, BattlerId};
use crate::rng::BattleRng;
use schema::{Ability, MoveData, MoveFlags, MultiStrikeKind};

/// Resolves how many strikes a move use delivers against one target.
///
/// Single-strike moves return 1. The weighted 2-5 table draws a uniform
/// value in [0, 20) and maps it through fixed thresholds approximating
/// weights 3/8, 3/8, 1/8, 1/8 — after the user's ability hook gets the
/// chance to force the maximum.
pub fn strike_count(
    state: &BattleState,
    user: BattlerId,
    _target: BattlerId,
    move_data: &MoveData,
    rng: &mut BattleRng,
) -> u8 {
    let Some(kind) = move_data.multi_strike_kind() else {
        return 1;
    };
    match kind {
        MultiStrikeKind::TwoToFive => {
            if state
                .battler(user)
                .map_or(false, |b| b.ability == Ability::SkillLink)
            {
                return 5;
            }
            match rng.range(20, "Multi-Strike Count") {
                roll if roll >= 13 => 2,
                roll if roll >= 6 => 3,
                roll if roll >= 3 => 4,
                _ => 5,
            }
        }
        MultiStrikeKind::Fixed(count) => count,
        MultiStrikeKind::PartyCount => state.sides[user.side].healthy_party_count(),
    }
}

/// Statistical expectation of the strike count, for AI scoring only — never
/// used for actual resolution.
///
/// For moves whose every strike must independently land, the expectation is
/// the accuracy-weighted geometric series sum p + p^2 + ... + p^n, since a
/// single miss ends the sequence.
pub fn expected_strike_count(
    state: &BattleState,
    user: BattlerId,
    move_data: &MoveData,
    accuracy: Option<u8>,
) -> f64 {
    let nominal = match move_data.multi_strike_kind() {
        None => 1.0,
        Some(MultiStrikeKind::TwoToFive) => {
            if state
                .battler(user)
                .map_or(false, |b| b.ability == Ability::SkillLink)
            {
                5.0
            } else {
                // Weighted mean of the 2-5 table: (2+3)*3/8 + (4+5)/8.
                2.0 * 0.375 + 3.0 * 0.375 + 4.0 * 0.125 + 5.0 * 0.125
            }
        }
        Some(MultiStrikeKind::Fixed(count)) => f64::from(count),
        Some(MultiStrikeKind::PartyCount) => {
            f64::from(state.sides[user.side].healthy_party_count())
        }
    };

    if move_data.has_flag(MoveFlags::PER_STRIKE_ACCURACY) {
        let p = f64::from(accuracy.unwrap_or(100)) / 100.0;
        if p >= 1.0 {
            return nominal;
        }
        // Geometric partial sum over the fixed strike count.
        let n = nominal as i32;
        return p * (1.0 - p.powi(n)) / (1.0 - p);
    }

    nominal
}
