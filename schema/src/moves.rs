use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Identifier for every move registered with the engine.
///
/// The registry in the engine crate maps each identifier to its immutable
/// `MoveData` descriptor at process start.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum Move {
    // Plain and shaped damage
    Tackle,
    Slash,
    QuickAttack,
    Swift,
    DoubleEdge,
    TakeDown,
    SuperFang,
    SeismicToss,
    DragonRage,
    Fissure,
    Explosion,
    Earthquake,
    Surf,
    RazorLeaf,
    HeatWave,
    GigaDrain,

    // Variable power
    Ambush,
    TrumpCard,
    Reversal,
    Hex,
    ExpandingForce,

    // Multi-strike
    FurySwipes,
    DoubleKick,
    TripleKick,
    PopulationBomb,
    BeatUp,

    // Charge
    SolarBeam,
    Fly,
    SkullBash,

    // Rampage
    Thrash,
    Outrage,

    // Guards
    Protect,
    Detect,

    // Stat stages
    SwordsDance,
    Agility,
    Growl,
    TailWhip,
    AncientPower,
    Overheat,
    Haze,

    // Status and tags
    Ember,
    Thunderbolt,
    IceBeam,
    PoisonSting,
    Toxic,
    ThunderWave,
    Spore,
    SleepPowder,
    Bite,
    Headbutt,
    ConfuseRay,
    LeechSeed,
    Wrap,
    Disable,

    // Field
    SunnyDay,
    RainDance,
    Sandstorm,
    GrassyTerrain,
    PsychicTerrain,
    Gravity,
    LightScreen,
    Reflect,
    Spikes,
    RapidSpin,

    // Utility
    Recover,
    MirrorMove,
    PayDay,
    HelpingHand,
}

impl Move {
    /// Human-readable name with word breaks restored.
    pub fn display_name(self) -> String {
        let debug_string = format!("{:?}", self);
        let mut name = String::with_capacity(debug_string.len() + 2);
        for (i, c) in debug_string.chars().enumerate() {
            if i > 0 && c.is_uppercase() {
                name.push(' ');
            }
            name.push(c);
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_word_breaks() {
        assert_eq!(Move::Tackle.display_name(), "Tackle");
        assert_eq!(Move::SwordsDance.display_name(), "Swords Dance");
        assert_eq!(Move::ExpandingForce.display_name(), "Expanding Force");
    }
}
