use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Sunlight,
    Rain,
    Sandstorm,
    Hail,
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::Sunlight => write!(f, "harsh sunlight"),
            Weather::Rain => write!(f, "rain"),
            Weather::Sandstorm => write!(f, "sandstorm"),
            Weather::Hail => write!(f, "hail"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Grassy,
    Psychic,
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terrain::Grassy => write!(f, "Grassy Terrain"),
            Terrain::Psychic => write!(f, "Psychic Terrain"),
        }
    }
}

/// Per-side screen conditions with a turn counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenKind {
    Reflect,
    LightScreen,
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenKind::Reflect => write!(f, "Reflect"),
            ScreenKind::LightScreen => write!(f, "Light Screen"),
        }
    }
}

/// Per-side entry hazards with a layer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    Spikes,
}

impl HazardKind {
    pub fn max_layers(self) -> u8 {
        match self {
            HazardKind::Spikes => 3,
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HazardKind::Spikes => write!(f, "Spikes"),
        }
    }
}

/// Field-wide arena tags (not scoped to a side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArenaTagKind {
    /// Grounds airborne battlers and multiplies accuracy by 5/3.
    Gravity,
}

impl fmt::Display for ArenaTagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaTagKind::Gravity => write!(f, "Gravity"),
        }
    }
}
