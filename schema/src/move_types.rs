use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StatType {
    Atk,
    Def,
    SpAtk,
    SpDef,
    Spe,
    Acc,
    Eva,
    Crit,
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatType::Atk => write!(f, "Attack"),
            StatType::Def => write!(f, "Defense"),
            StatType::SpAtk => write!(f, "Special Attack"),
            StatType::SpDef => write!(f, "Special Defense"),
            StatType::Spe => write!(f, "Speed"),
            StatType::Acc => write!(f, "accuracy"),
            StatType::Eva => write!(f, "evasiveness"),
            StatType::Crit => write!(f, "critical-hit ratio"),
        }
    }
}

/// Which battler an individual effect clause acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    User,
    Target,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::User => write!(f, "User"),
            Target::Target => write!(f, "Target"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusType {
    Sleep,
    Poison,
    Toxic,
    Burn,
    Freeze,
    Paralysis,
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusType::Sleep => write!(f, "sleep"),
            StatusType::Poison => write!(f, "poison"),
            StatusType::Toxic => write!(f, "toxic poison"),
            StatusType::Burn => write!(f, "burn"),
            StatusType::Freeze => write!(f, "freeze"),
            StatusType::Paralysis => write!(f, "paralysis"),
        }
    }
}

/// Which board slots a move may affect. The targeting resolver reduces these
/// to roughly eight candidate-set shapes at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum TargetMode {
    /// The user itself.
    User,
    /// The user plus every active ally.
    UserAndAllies,
    /// Exactly one adjacent ally.
    NearAlly,
    /// The user or one adjacent ally.
    UserOrNearAlly,
    /// One adjacent enemy, chosen by the caller.
    NearEnemy,
    /// One adjacent battler other than the user (enemy or ally).
    NearOther,
    /// One adjacent enemy picked uniformly at random among live candidates.
    RandomNearEnemy,
    /// Every adjacent enemy.
    AllNearEnemies,
    /// Every enemy on the field.
    AllEnemies,
    /// Every battler other than the user.
    AllNearOthers,
    /// The user's side of the arena (screens, hazard removal).
    UserSide,
    /// The enemy side of the arena (hazard lay).
    EnemySide,
    /// Both sides of the arena.
    BothSides,
    /// The whole field (weather, terrain, gravity).
    EntireField,
}

impl TargetMode {
    /// True when the mode denotes an area rather than individual battlers.
    /// Area moves resolve against representative slots but never miss per-slot.
    pub fn is_area(self) -> bool {
        matches!(
            self,
            TargetMode::UserSide
                | TargetMode::EnemySide
                | TargetMode::BothSides
                | TargetMode::EntireField
        )
    }

    /// True when the move can strike more than one battler.
    pub fn is_spread(self) -> bool {
        matches!(
            self,
            TargetMode::UserAndAllies
                | TargetMode::AllNearEnemies
                | TargetMode::AllEnemies
                | TargetMode::AllNearOthers
        )
    }
}

/// Immutable bit-flag set carried by every move descriptor. Defaults are
/// derived once at construction from category/targeting; afterwards the set
/// only changes through explicit builder calls at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveFlags(u32);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const MAKES_CONTACT: MoveFlags = MoveFlags(1 << 0);
    pub const SOUND_BASED: MoveFlags = MoveFlags(1 << 1);
    pub const POWDER: MoveFlags = MoveFlags(1 << 2);
    pub const WIND: MoveFlags = MoveFlags(1 << 3);
    pub const BITING: MoveFlags = MoveFlags(1 << 4);
    pub const PUNCHING: MoveFlags = MoveFlags(1 << 5);
    pub const IGNORES_PROTECT: MoveFlags = MoveFlags(1 << 6);
    /// Each strike of a multi-strike sequence rolls accuracy independently.
    /// Never combined with the weighted 2-5 strike table.
    pub const PER_STRIKE_ACCURACY: MoveFlags = MoveFlags(1 << 7);
    /// Ignores the target's semi-invulnerable turn (e.g. hits airborne).
    pub const HITS_SEMI_INVULNERABLE: MoveFlags = MoveFlags(1 << 8);

    pub fn contains(self, flag: MoveFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn with(self, flag: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | flag.0)
    }

    pub fn without(self, flag: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 & !flag.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveFlags {
    fn bitor_assign(&mut self, rhs: MoveFlags) {
        self.0 |= rhs.0;
    }
}
