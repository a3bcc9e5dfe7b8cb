//! The global move registry.
//!
//! Every descriptor is constructed once, at first access, through the
//! schema builder and then read-only for the life of the process. Battles
//! never mutate a descriptor; temporary substitutions act on a battler's
//! own moveset records.

use crate::errors::MoveDataError;
use schema::{
    ChargeCondition, ClauseTagKind, DynamicTargetKind, HazardKind, Move, MoveCategory, MoveData,
    MoveEffect, MoveFlags, MultiStrikeKind, PokemonType, RampageEnd, ScreenKind, StatType,
    StatusType, Target, TargetMode, Terrain, VariablePowerKind, Weather,
};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

static MOVE_DEX: LazyLock<HashMap<Move, MoveData>> = LazyLock::new(build_move_dex);

/// Looks up the descriptor for a move. An unregistered move is a programmer
/// error surfaced as `MoveNotFound`.
pub fn get_move_data(move_: Move) -> Result<&'static MoveData, MoveDataError> {
    MOVE_DEX
        .get(&move_)
        .ok_or(MoveDataError::MoveNotFound(move_))
}

/// Registration-time validation: every identifier present, every descriptor
/// structurally sound. Call once at process start; violations are fatal
/// configuration mistakes, never battle-time conditions.
pub fn validate_move_dex() -> Result<(), MoveDataError> {
    for move_ in Move::iter() {
        let data = get_move_data(move_)?;
        data.validate().map_err(MoveDataError::MalformedData)?;
    }
    Ok(())
}

fn build_move_dex() -> HashMap<Move, MoveData> {
    use MoveCategory::{Physical, Special, Status};
    use PokemonType::*;

    let entries = [
        // === Plain and shaped damage ===
        MoveData::build(Move::Tackle, Normal, Physical, TargetMode::NearEnemy)
            .power(40)
            .accuracy(100)
            .pp(35)
            .finish(),
        MoveData::build(Move::Slash, Normal, Physical, TargetMode::NearEnemy)
            .power(70)
            .accuracy(100)
            .pp(20)
            .effect(MoveEffect::HighCrit)
            .finish(),
        MoveData::build(Move::QuickAttack, Normal, Physical, TargetMode::NearEnemy)
            .power(40)
            .accuracy(100)
            .pp(30)
            .priority(1)
            .finish(),
        MoveData::build(Move::Swift, Normal, Special, TargetMode::AllNearEnemies)
            .power(60)
            .pp(20)
            .finish(),
        MoveData::build(Move::DoubleEdge, Normal, Physical, TargetMode::NearEnemy)
            .power(120)
            .accuracy(100)
            .pp(15)
            .effect(MoveEffect::Recoil(33))
            .finish(),
        MoveData::build(Move::TakeDown, Normal, Physical, TargetMode::NearEnemy)
            .power(90)
            .accuracy(85)
            .pp(20)
            .effect(MoveEffect::Recoil(25))
            .finish(),
        MoveData::build(Move::SuperFang, Normal, Physical, TargetMode::NearEnemy)
            .accuracy(90)
            .pp(10)
            .effect(MoveEffect::HalveHp)
            .flag(MoveFlags::BITING)
            .finish(),
        MoveData::build(Move::SeismicToss, Fighting, Physical, TargetMode::NearEnemy)
            .accuracy(100)
            .pp(20)
            .effect(MoveEffect::LevelDamage)
            .finish(),
        MoveData::build(Move::DragonRage, Dragon, Special, TargetMode::NearEnemy)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::FixedDamage(40))
            .finish(),
        MoveData::build(Move::Fissure, Ground, Physical, TargetMode::NearEnemy)
            .accuracy(30)
            .pp(5)
            .no_contact()
            .effect(MoveEffect::Ohko)
            .finish(),
        MoveData::build(Move::Explosion, Normal, Physical, TargetMode::AllNearOthers)
            .power(250)
            .accuracy(100)
            .pp(5)
            .no_contact()
            .effect(MoveEffect::SelfDestruct)
            .finish(),
        MoveData::build(Move::Earthquake, Ground, Physical, TargetMode::AllNearOthers)
            .power(100)
            .accuracy(100)
            .pp(10)
            .no_contact()
            .finish(),
        MoveData::build(Move::Surf, Water, Special, TargetMode::AllNearOthers)
            .power(90)
            .accuracy(100)
            .pp(15)
            .finish(),
        MoveData::build(Move::RazorLeaf, Grass, Physical, TargetMode::AllNearEnemies)
            .power(55)
            .accuracy(95)
            .pp(25)
            .no_contact()
            .effect(MoveEffect::HighCrit)
            .finish(),
        MoveData::build(Move::HeatWave, Fire, Special, TargetMode::AllNearEnemies)
            .power(95)
            .accuracy(90)
            .pp(10)
            .effect_chance(10)
            .flag(MoveFlags::WIND)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Burn,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::GigaDrain, Grass, Special, TargetMode::NearEnemy)
            .power(75)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::Drain(50))
            .finish(),
        // === Variable power ===
        MoveData::build(Move::Ambush, Normal, Physical, TargetMode::NearEnemy)
            .power(50)
            .accuracy(100)
            .pp(20)
            .effect(MoveEffect::VariablePower(
                VariablePowerKind::DoubledOnFirstUse,
            ))
            .finish(),
        MoveData::build(Move::TrumpCard, Normal, Special, TargetMode::NearEnemy)
            .power(40)
            .pp(5)
            .effect(MoveEffect::VariablePower(
                VariablePowerKind::ScalesWithRemainingPp,
            ))
            .finish(),
        MoveData::build(Move::Reversal, Fighting, Physical, TargetMode::NearEnemy)
            .power(20)
            .accuracy(100)
            .pp(15)
            .effect(MoveEffect::VariablePower(VariablePowerKind::LowHpBoost))
            .finish(),
        MoveData::build(Move::Hex, Ghost, Special, TargetMode::NearEnemy)
            .power(65)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::VariablePower(
                VariablePowerKind::DoubledAgainstStatused,
            ))
            .finish(),
        MoveData::build(Move::ExpandingForce, Psychic, Special, TargetMode::NearEnemy)
            .power(80)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::DynamicTargets(
                DynamicTargetKind::SpreadInTerrain(Terrain::Psychic, TargetMode::AllNearEnemies),
            ))
            .finish(),
        // === Multi-strike ===
        MoveData::build(Move::FurySwipes, Normal, Physical, TargetMode::NearEnemy)
            .power(18)
            .accuracy(80)
            .pp(15)
            .effect(MoveEffect::MultiStrike(MultiStrikeKind::TwoToFive))
            .finish(),
        MoveData::build(Move::DoubleKick, Fighting, Physical, TargetMode::NearEnemy)
            .power(30)
            .accuracy(100)
            .pp(30)
            .effect(MoveEffect::MultiStrike(MultiStrikeKind::Fixed(2)))
            .finish(),
        MoveData::build(Move::TripleKick, Fighting, Physical, TargetMode::NearEnemy)
            .power(20)
            .accuracy(90)
            .pp(10)
            .flag(MoveFlags::PER_STRIKE_ACCURACY)
            .effect(MoveEffect::MultiStrike(MultiStrikeKind::Fixed(3)))
            .finish(),
        MoveData::build(Move::PopulationBomb, Normal, Physical, TargetMode::NearEnemy)
            .power(20)
            .accuracy(90)
            .pp(10)
            .flag(MoveFlags::PER_STRIKE_ACCURACY)
            .effect(MoveEffect::MultiStrike(MultiStrikeKind::Fixed(10)))
            .finish(),
        MoveData::build(Move::BeatUp, Normal, Physical, TargetMode::NearEnemy)
            .power(15)
            .accuracy(100)
            .pp(10)
            .no_contact()
            .effect(MoveEffect::MultiStrike(MultiStrikeKind::PartyCount))
            .finish(),
        // === Charge ===
        MoveData::build(Move::SolarBeam, Grass, Special, TargetMode::NearEnemy)
            .power(120)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::Charge {
                instant_when: Some(ChargeCondition::SunlightActive),
                airborne: false,
                stat_boost: None,
            })
            .finish(),
        MoveData::build(Move::Fly, Flying, Physical, TargetMode::NearEnemy)
            .power(90)
            .accuracy(95)
            .pp(15)
            .effect(MoveEffect::Charge {
                instant_when: None,
                airborne: true,
                stat_boost: None,
            })
            .finish(),
        MoveData::build(Move::SkullBash, Normal, Physical, TargetMode::NearEnemy)
            .power(130)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::Charge {
                instant_when: None,
                airborne: false,
                stat_boost: Some((StatType::Def, 1)),
            })
            .finish(),
        // === Rampage ===
        MoveData::build(Move::Thrash, Normal, Physical, TargetMode::RandomNearEnemy)
            .power(120)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::Rampage {
                end: RampageEnd::Confuse,
            })
            .finish(),
        MoveData::build(Move::Outrage, Dragon, Physical, TargetMode::RandomNearEnemy)
            .power(120)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::Rampage {
                end: RampageEnd::Confuse,
            })
            .finish(),
        // === Guards ===
        MoveData::build(Move::Protect, Normal, Status, TargetMode::User)
            .pp(10)
            .priority(4)
            .effect(MoveEffect::Guard)
            .finish(),
        MoveData::build(Move::Detect, Fighting, Status, TargetMode::User)
            .pp(5)
            .priority(4)
            .effect(MoveEffect::Guard)
            .finish(),
        // === Stat stages ===
        MoveData::build(Move::SwordsDance, Normal, Status, TargetMode::User)
            .pp(20)
            .effect(MoveEffect::StatChange {
                target: Target::User,
                stats: vec![StatType::Atk],
                stages: 2,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Agility, Psychic, Status, TargetMode::User)
            .pp(30)
            .effect(MoveEffect::StatChange {
                target: Target::User,
                stats: vec![StatType::Spe],
                stages: 2,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Growl, Normal, Status, TargetMode::AllNearEnemies)
            .accuracy(100)
            .pp(40)
            .flag(MoveFlags::SOUND_BASED)
            .effect(MoveEffect::StatChange {
                target: Target::Target,
                stats: vec![StatType::Atk],
                stages: -1,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::TailWhip, Normal, Status, TargetMode::AllNearEnemies)
            .accuracy(100)
            .pp(30)
            .effect(MoveEffect::StatChange {
                target: Target::Target,
                stats: vec![StatType::Def],
                stages: -1,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::AncientPower, Rock, Special, TargetMode::NearEnemy)
            .power(60)
            .accuracy(100)
            .pp(5)
            .effect_chance(10)
            .effect(MoveEffect::StatChange {
                target: Target::User,
                stats: vec![
                    StatType::Atk,
                    StatType::Def,
                    StatType::SpAtk,
                    StatType::SpDef,
                    StatType::Spe,
                ],
                stages: 1,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Overheat, Fire, Special, TargetMode::NearEnemy)
            .power(130)
            .accuracy(90)
            .pp(5)
            .effect(MoveEffect::StatChange {
                target: Target::User,
                stats: vec![StatType::SpAtk],
                stages: -2,
                chance: Some(100),
            })
            .finish(),
        MoveData::build(Move::Haze, Ice, Status, TargetMode::EntireField)
            .pp(30)
            .effect(MoveEffect::ClearStatStages)
            .finish(),
        // === Status and tags ===
        MoveData::build(Move::Ember, Fire, Special, TargetMode::NearEnemy)
            .power(40)
            .accuracy(100)
            .pp(25)
            .effect_chance(10)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Burn,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Thunderbolt, Electric, Special, TargetMode::NearEnemy)
            .power(90)
            .accuracy(100)
            .pp(15)
            .effect_chance(10)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Paralysis,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::IceBeam, Ice, Special, TargetMode::NearEnemy)
            .power(90)
            .accuracy(100)
            .pp(10)
            .effect_chance(10)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Freeze,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::PoisonSting, Poison, Physical, TargetMode::NearEnemy)
            .power(15)
            .accuracy(100)
            .pp(35)
            .no_contact()
            .effect_chance(30)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Poison,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Toxic, Poison, Status, TargetMode::NearEnemy)
            .accuracy(90)
            .pp(10)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Toxic,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::ThunderWave, Electric, Status, TargetMode::NearEnemy)
            .accuracy(90)
            .pp(20)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Paralysis,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Spore, Grass, Status, TargetMode::NearEnemy)
            .accuracy(100)
            .pp(15)
            .flag(MoveFlags::POWDER)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Sleep,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::SleepPowder, Grass, Status, TargetMode::NearEnemy)
            .accuracy(75)
            .pp(15)
            .flag(MoveFlags::POWDER)
            .effect(MoveEffect::InflictStatus {
                status: StatusType::Sleep,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Bite, Normal, Physical, TargetMode::NearEnemy)
            .power(60)
            .accuracy(100)
            .pp(25)
            .flag(MoveFlags::BITING)
            .effect_chance(30)
            .effect(MoveEffect::InflictTag {
                tag: ClauseTagKind::Flinch,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Headbutt, Normal, Physical, TargetMode::NearEnemy)
            .power(70)
            .accuracy(100)
            .pp(15)
            .effect_chance(30)
            .effect(MoveEffect::InflictTag {
                tag: ClauseTagKind::Flinch,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::ConfuseRay, Ghost, Status, TargetMode::NearEnemy)
            .accuracy(100)
            .pp(10)
            .effect(MoveEffect::InflictTag {
                tag: ClauseTagKind::Confusion,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::LeechSeed, Grass, Status, TargetMode::NearEnemy)
            .accuracy(90)
            .pp(10)
            .effect(MoveEffect::InflictTag {
                tag: ClauseTagKind::LeechSeed,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Wrap, Normal, Physical, TargetMode::NearEnemy)
            .power(15)
            .accuracy(90)
            .pp(20)
            .effect(MoveEffect::InflictTag {
                tag: ClauseTagKind::Trapped,
                chance: None,
            })
            .finish(),
        MoveData::build(Move::Disable, Normal, Status, TargetMode::NearEnemy)
            .accuracy(100)
            .pp(20)
            .effect(MoveEffect::InflictTag {
                tag: ClauseTagKind::Disable,
                chance: None,
            })
            .finish(),
        // === Field ===
        MoveData::build(Move::SunnyDay, Fire, Status, TargetMode::EntireField)
            .pp(5)
            .effect(MoveEffect::SetWeather(Weather::Sunlight))
            .finish(),
        MoveData::build(Move::RainDance, Water, Status, TargetMode::EntireField)
            .pp(5)
            .effect(MoveEffect::SetWeather(Weather::Rain))
            .finish(),
        MoveData::build(Move::Sandstorm, Rock, Status, TargetMode::EntireField)
            .pp(10)
            .effect(MoveEffect::SetWeather(Weather::Sandstorm))
            .finish(),
        MoveData::build(Move::GrassyTerrain, Grass, Status, TargetMode::EntireField)
            .pp(10)
            .effect(MoveEffect::SetTerrain(Terrain::Grassy))
            .finish(),
        MoveData::build(Move::PsychicTerrain, Psychic, Status, TargetMode::EntireField)
            .pp(10)
            .effect(MoveEffect::SetTerrain(Terrain::Psychic))
            .finish(),
        MoveData::build(Move::Gravity, Psychic, Status, TargetMode::EntireField)
            .pp(5)
            .effect(MoveEffect::SetGravity { turns: 5 })
            .finish(),
        MoveData::build(Move::LightScreen, Psychic, Status, TargetMode::UserSide)
            .pp(30)
            .effect(MoveEffect::SideScreen {
                screen: ScreenKind::LightScreen,
                turns: 5,
            })
            .finish(),
        MoveData::build(Move::Reflect, Psychic, Status, TargetMode::UserSide)
            .pp(20)
            .effect(MoveEffect::SideScreen {
                screen: ScreenKind::Reflect,
                turns: 5,
            })
            .finish(),
        MoveData::build(Move::Spikes, Ground, Status, TargetMode::EnemySide)
            .pp(20)
            .effect(MoveEffect::LayHazard(HazardKind::Spikes))
            .finish(),
        MoveData::build(Move::RapidSpin, Normal, Physical, TargetMode::NearEnemy)
            .power(50)
            .accuracy(100)
            .pp(40)
            .effect(MoveEffect::ClearHazards)
            .finish(),
        // === Utility ===
        MoveData::build(Move::Recover, Normal, Status, TargetMode::User)
            .pp(10)
            .effect(MoveEffect::Heal(50))
            .finish(),
        MoveData::build(Move::MirrorMove, Flying, Status, TargetMode::NearEnemy)
            .pp(20)
            .effect(MoveEffect::CopyLastMove {
                redirect: TargetMode::NearEnemy,
            })
            .finish(),
        MoveData::build(Move::PayDay, Normal, Physical, TargetMode::NearEnemy)
            .power(40)
            .accuracy(100)
            .pp(20)
            .no_contact()
            .effect(MoveEffect::Payout)
            .finish(),
        MoveData::build(Move::HelpingHand, Normal, Status, TargetMode::NearAlly)
            .pp(20)
            .priority(5)
            .effect(MoveEffect::InflictTag {
                tag: ClauseTagKind::HelpingHand,
                chance: None,
            })
            .finish(),
    ];

    entries.into_iter().map(|data| (data.id, data)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::EffectKind;

    #[test]
    fn test_every_move_is_registered_and_valid() {
        assert!(validate_move_dex().is_ok());
    }

    #[test]
    fn test_status_moves_carry_no_power() {
        for move_ in Move::iter() {
            let data = get_move_data(move_).unwrap();
            if data.category == MoveCategory::Status {
                assert!(data.power.is_none(), "{:?} is Status but has power", move_);
            }
        }
    }

    #[test]
    fn test_guard_moves_contribute_the_succession_condition() {
        for move_ in [Move::Protect, Move::Detect] {
            let data = get_move_data(move_).unwrap();
            assert!(data
                .conditions
                .contains(&schema::MoveCondition::GuardSuccession));
        }
    }

    #[test]
    fn test_charge_and_rampage_never_combine() {
        for move_ in Move::iter() {
            let data = get_move_data(move_).unwrap();
            assert!(
                !(data.has_effect_kind(EffectKind::Charge)
                    && data.has_effect_kind(EffectKind::Rampage)),
                "{:?} mixes charge and rampage",
                move_
            );
        }
    }
}
