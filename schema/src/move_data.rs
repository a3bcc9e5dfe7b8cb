use crate::battler_types::Ability;
use crate::move_effects::{EffectKind, MoveCondition, MoveEffect, MultiStrikeKind};
use crate::move_types::{MoveCategory, MoveFlags, TargetMode};
use crate::moves::Move;
use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};

/// Immutable descriptor for a registered move.
///
/// Constructed once at process start through [`MoveDataBuilder`] into the
/// engine's global registry and never mutated during a battle. Temporary
/// move substitution (copying another battler's move) operates on a
/// battler's own moveset record, never on this shared descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: Move,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    /// None for moves with no applicable base power (always for Status).
    pub power: Option<u16>,
    /// None means the move never misses.
    pub accuracy: Option<u8>,
    /// Base chance for chance-bearing clauses that do not carry their own.
    /// None means "always, if applicable".
    pub effect_chance: Option<u8>,
    pub max_pp: u8,
    pub priority: i8,
    pub target_mode: TargetMode,
    pub flags: MoveFlags,
    /// Ordered clause list; application order is a behavioral contract.
    pub effects: Vec<MoveEffect>,
    /// Conjunction of pre-use predicates: clause-contributed plus any added
    /// explicitly at registration.
    pub conditions: Vec<MoveCondition>,
}

impl MoveData {
    pub fn build(
        id: Move,
        move_type: PokemonType,
        category: MoveCategory,
        target_mode: TargetMode,
    ) -> MoveDataBuilder {
        MoveDataBuilder {
            data: MoveData {
                id,
                move_type,
                category,
                power: None,
                accuracy: None,
                effect_chance: None,
                max_pp: 20,
                priority: 0,
                target_mode,
                flags: default_flags(category),
                effects: Vec::new(),
                conditions: Vec::new(),
            },
        }
    }

    pub fn has_flag(&self, flag: MoveFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Flag applicability resolved against the user's ability: a flag can be
    /// carried by the descriptor yet not apply for a particular user.
    pub fn has_effective_flag(&self, flag: MoveFlags, user_ability: Ability) -> bool {
        if !self.has_flag(flag) {
            return false;
        }
        match flag {
            MoveFlags::MAKES_CONTACT => user_ability != Ability::LongReach,
            _ => true,
        }
    }

    pub fn is_multi_strike(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind() == EffectKind::MultiStrike)
    }

    pub fn multi_strike_kind(&self) -> Option<MultiStrikeKind> {
        self.effects.iter().find_map(|e| match e {
            MoveEffect::MultiStrike(kind) => Some(*kind),
            _ => None,
        })
    }

    pub fn effects_of_kind(&self, kind: EffectKind) -> impl Iterator<Item = &MoveEffect> {
        self.effects.iter().filter(move |e| e.kind() == kind)
    }

    pub fn has_effect_kind(&self, kind: EffectKind) -> bool {
        self.effects_of_kind(kind).next().is_some()
    }

    /// Registration-time sanity checks. Violations are programmer errors and
    /// abort loading; they are never surfaced during battle resolution.
    pub fn validate(&self) -> Result<(), String> {
        if self.category == MoveCategory::Status && self.power.is_some() {
            return Err(format!("{:?}: status move carries a base power", self.id));
        }
        if let Some(chance) = self.effect_chance {
            if chance > 100 {
                return Err(format!("{:?}: effect chance {} out of range", self.id, chance));
            }
        }
        if let Some(accuracy) = self.accuracy {
            if accuracy == 0 || accuracy > 100 {
                return Err(format!("{:?}: accuracy {} out of range", self.id, accuracy));
            }
        }
        if self.has_flag(MoveFlags::PER_STRIKE_ACCURACY)
            && self.multi_strike_kind() == Some(MultiStrikeKind::TwoToFive)
        {
            // These two never co-occur; the combination is ambiguous, so it
            // stays a validated invariant rather than a silent resolution.
            return Err(format!(
                "{:?}: per-strike accuracy combined with the 2-5 strike table",
                self.id
            ));
        }
        if let Some(MultiStrikeKind::Fixed(n)) = self.multi_strike_kind() {
            if n == 0 {
                return Err(format!("{:?}: fixed strike count of zero", self.id));
            }
        }
        if self.has_effect_kind(EffectKind::Charge) && self.has_effect_kind(EffectKind::Rampage) {
            return Err(format!("{:?}: both a charge and a rampage move", self.id));
        }
        for effect in &self.effects {
            let chance = match effect {
                MoveEffect::StatChange { chance, .. } => *chance,
                MoveEffect::InflictStatus { chance, .. } => *chance,
                MoveEffect::InflictTag { chance, .. } => *chance,
                _ => None,
            };
            if let Some(chance) = chance {
                if chance > 100 {
                    return Err(format!(
                        "{:?}: clause chance {} out of range",
                        self.id, chance
                    ));
                }
            }
        }
        Ok(())
    }
}

fn default_flags(category: MoveCategory) -> MoveFlags {
    // Physical moves make contact unless the builder says otherwise.
    match category {
        MoveCategory::Physical => MoveFlags::MAKES_CONTACT,
        MoveCategory::Special | MoveCategory::Status => MoveFlags::NONE,
    }
}

/// Registration-time builder. Descriptor fields are frozen once `finish`
/// runs; no builder method is reachable afterwards.
pub struct MoveDataBuilder {
    data: MoveData,
}

impl MoveDataBuilder {
    pub fn power(mut self, power: u16) -> Self {
        self.data.power = Some(power);
        self
    }

    pub fn accuracy(mut self, accuracy: u8) -> Self {
        self.data.accuracy = Some(accuracy);
        self
    }

    pub fn pp(mut self, max_pp: u8) -> Self {
        self.data.max_pp = max_pp;
        self
    }

    pub fn priority(mut self, priority: i8) -> Self {
        self.data.priority = priority;
        self
    }

    pub fn effect_chance(mut self, chance: u8) -> Self {
        self.data.effect_chance = Some(chance);
        self
    }

    pub fn effect(mut self, effect: MoveEffect) -> Self {
        self.data.effects.push(effect);
        self
    }

    pub fn condition(mut self, condition: MoveCondition) -> Self {
        self.data.conditions.push(condition);
        self
    }

    pub fn flag(mut self, flag: MoveFlags) -> Self {
        self.data.flags |= flag;
        self
    }

    pub fn no_contact(mut self) -> Self {
        self.data.flags = self.data.flags.without(MoveFlags::MAKES_CONTACT);
        self
    }

    /// Seals the descriptor: folds clause-contributed conditions into the
    /// condition list and returns the finished data.
    pub fn finish(mut self) -> MoveData {
        for effect in &self.data.effects {
            if let Some(condition) = effect.contributed_condition() {
                if !self.data.conditions.contains(&condition) {
                    self.data.conditions.push(condition);
                }
            }
        }
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_effects::ClauseTagKind;

    #[test]
    fn test_status_move_with_power_rejected() {
        let mut data = MoveData::build(
            Move::Growl,
            PokemonType::Normal,
            MoveCategory::Status,
            TargetMode::AllNearEnemies,
        )
        .finish();
        assert!(data.validate().is_ok());
        data.power = Some(40);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_per_strike_accuracy_cannot_join_weighted_table() {
        let data = MoveData::build(
            Move::FurySwipes,
            PokemonType::Normal,
            MoveCategory::Physical,
            TargetMode::NearEnemy,
        )
        .power(18)
        .accuracy(80)
        .effect(MoveEffect::MultiStrike(MultiStrikeKind::TwoToFive))
        .flag(MoveFlags::PER_STRIKE_ACCURACY)
        .finish();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_physical_contact_default_and_override() {
        let slash = MoveData::build(
            Move::Slash,
            PokemonType::Normal,
            MoveCategory::Physical,
            TargetMode::NearEnemy,
        )
        .power(70)
        .accuracy(100)
        .finish();
        assert!(slash.has_flag(MoveFlags::MAKES_CONTACT));

        let quake = MoveData::build(
            Move::Earthquake,
            PokemonType::Ground,
            MoveCategory::Physical,
            TargetMode::AllNearOthers,
        )
        .power(100)
        .accuracy(100)
        .no_contact()
        .finish();
        assert!(!quake.has_flag(MoveFlags::MAKES_CONTACT));
    }

    #[test]
    fn test_clause_contributed_conditions_folded_in() {
        let disable = MoveData::build(
            Move::Disable,
            PokemonType::Normal,
            MoveCategory::Status,
            TargetMode::NearEnemy,
        )
        .accuracy(100)
        .effect(MoveEffect::InflictTag {
            tag: ClauseTagKind::Disable,
            chance: None,
        })
        .finish();
        assert!(disable
            .conditions
            .contains(&MoveCondition::TargetHasLastMove));
    }

    #[test]
    fn test_contact_flag_ineffective_with_long_reach() {
        let bite = MoveData::build(
            Move::Bite,
            PokemonType::Normal,
            MoveCategory::Physical,
            TargetMode::NearEnemy,
        )
        .power(60)
        .accuracy(100)
        .flag(MoveFlags::BITING)
        .finish();
        assert!(bite.has_effective_flag(MoveFlags::MAKES_CONTACT, Ability::None));
        assert!(!bite.has_effective_flag(MoveFlags::MAKES_CONTACT, Ability::LongReach));
        assert!(bite.has_effective_flag(MoveFlags::BITING, Ability::LongReach));
    }
}
