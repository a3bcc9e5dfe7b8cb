use crate::battle::effects::{ClauseBehaviorExt, EffectContext};
use crate::battle::multi_strike::expected_strike_count;
use crate::battle::pipelines::{accuracy_pipeline, power_pipeline, Accuracy};
use crate::battle::state::{BattleState, BattlerId};
use crate::errors::BattleResult;
use crate::move_dex::get_move_data;
use ordered_float::NotNan;
use schema::Move;

/// Heuristic desirability of one move use for AI selection. Combines the
/// accuracy-weighted expected damage output with the clause benefit hooks.
/// Never used by actual resolution.
pub fn expected_move_value(
    state: &BattleState,
    user: BattlerId,
    target: BattlerId,
    move_: Move,
) -> BattleResult<f32> {
    let move_data = get_move_data(move_)?;
    let ctx = EffectContext::new(user, target, move_);

    let hit_probability = match accuracy_pipeline(state, &ctx, move_data) {
        Accuracy::NeverMiss => 1.0,
        Accuracy::Percent(percent) => f32::from(percent) / 100.0,
    };

    let power = power_pipeline(state, &ctx, move_data).unwrap_or(0);
    let strikes = expected_strike_count(state, user, move_data, move_data.accuracy) as f32;
    let damage_term = f32::from(power) * strikes / 20.0;

    let clause_term: f32 = move_data
        .effects
        .iter()
        .map(|effect| effect.benefit_score(state, &ctx))
        .sum();

    Ok(hit_probability * (damage_term + clause_term))
}

/// The user's highest-valued usable move against the given target.
pub fn best_move(state: &BattleState, user: BattlerId, target: BattlerId) -> Option<Move> {
    let battler = state.battler(user)?;
    battler
        .moves
        .iter()
        .flatten()
        .filter(|slot| slot.pp > 0)
        .map(|slot| slot.move_)
        .max_by_key(|&move_| {
            let value = expected_move_value(state, user, target, move_).unwrap_or(0.0);
            NotNan::new(value).unwrap_or_else(|_| NotNan::new(f32::MIN).unwrap())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::state::BattleSide;
    use crate::battler::Battler;
    use schema::PokemonType;

    #[test]
    fn test_stronger_move_scores_higher() {
        let user = Battler::new(
            "Scorchik",
            30,
            vec![PokemonType::Fire],
            [70, 60, 50, 70, 50, 60],
            vec![Move::Ember, Move::Tackle],
        );
        let foe = Battler::new(
            "Leafling",
            30,
            vec![PokemonType::Grass],
            [70, 50, 50, 50, 50, 50],
            vec![Move::Tackle],
        );
        let state = BattleState::new(BattleSide::solo(user), BattleSide::solo(foe));
        let user_id = BattlerId::new(0, 0);
        let target_id = BattlerId::new(1, 0);

        let ember = expected_move_value(&state, user_id, target_id, Move::Ember).unwrap();
        let tackle = expected_move_value(&state, user_id, target_id, Move::Tackle).unwrap();
        assert!(ember > tackle, "ember {} vs tackle {}", ember, tackle);
        assert_eq!(best_move(&state, user_id, target_id), Some(Move::Ember));
    }
}
