use serde::{Deserialize, Serialize};
use std::fmt;

/// Passive abilities the engine's pipelines and dispatch hooks consult.
/// This is the engine-relevant subset, not a full ability dex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    None,
    /// Multi-strike moves always roll the maximum strike count.
    SkillLink,
    /// Secondary effect chances against this battler drop to zero.
    ShieldDust,
    /// Moves used by or against this battler never miss.
    NoGuard,
    /// Accuracy of this battler's moves is multiplied by 1.3.
    CompoundEyes,
    /// This battler's contact moves do not count as making contact.
    LongReach,
    /// Immune to sound-based moves.
    Soundproof,
    /// Evasion boost while a sandstorm is active.
    SandVeil,
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Held items consumed by the numeric pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeldItem {
    /// Physical move power x1.1.
    MuscleBand,
    /// Special move power x1.1.
    WiseGlasses,
    /// Accuracy x1.1.
    WideLens,
}

impl fmt::Display for HeldItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeldItem::MuscleBand => write!(f, "Muscle Band"),
            HeldItem::WiseGlasses => write!(f, "Wise Glasses"),
            HeldItem::WideLens => write!(f, "Wide Lens"),
        }
    }
}
