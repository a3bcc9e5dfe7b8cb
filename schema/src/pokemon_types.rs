use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Typeless,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Single-type effectiveness multiplier for an attacking type against one
    /// defending type. The matrix contents are game data; the engine only
    /// consumes this as a pure lookup.
    ///
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very
    /// Effective, 0.0 = No Effect.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f32 {
        use PokemonType::*;

        match (attacking, defending) {
            (Typeless, _) | (_, Typeless) => 1.0,

            (Normal, Ghost) => 0.0,
            (Normal, Rock) => 0.5,
            (Normal, _) => 1.0,

            (Fighting, Ghost) => 0.0,
            (Fighting, Normal) | (Fighting, Rock) | (Fighting, Ice) => 2.0,
            (Fighting, Flying) | (Fighting, Poison) | (Fighting, Bug) | (Fighting, Psychic) => 0.5,
            (Fighting, _) => 1.0,

            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,
            (Flying, Electric) | (Flying, Rock) => 0.5,
            (Flying, _) => 1.0,

            (Poison, Grass) => 2.0,
            (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 0.5,
            (Poison, _) => 1.0,

            (Ground, Flying) => 0.0,
            (Ground, Fire) | (Ground, Electric) | (Ground, Poison) | (Ground, Rock) => 2.0,
            (Ground, Grass) | (Ground, Bug) => 0.5,
            (Ground, _) => 1.0,

            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,
            (Rock, Fighting) | (Rock, Ground) => 0.5,
            (Rock, _) => 1.0,

            (Bug, Grass) | (Bug, Psychic) => 2.0,
            (Bug, Fire) | (Bug, Fighting) | (Bug, Poison) | (Bug, Flying) | (Bug, Ghost) => 0.5,
            (Bug, _) => 1.0,

            (Ghost, Normal) => 0.0,
            (Ghost, Ghost) | (Ghost, Psychic) => 2.0,
            (Ghost, _) => 1.0,

            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) => 2.0,
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
            (Fire, _) => 1.0,

            (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,
            (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
            (Water, _) => 1.0,

            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,
            (Grass, Fire)
            | (Grass, Grass)
            | (Grass, Poison)
            | (Grass, Flying)
            | (Grass, Bug)
            | (Grass, Dragon) => 0.5,
            (Grass, _) => 1.0,

            (Electric, Ground) => 0.0,
            (Electric, Water) | (Electric, Flying) => 2.0,
            (Electric, Electric) | (Electric, Grass) | (Electric, Dragon) => 0.5,
            (Electric, _) => 1.0,

            (Psychic, Fighting) | (Psychic, Poison) => 2.0,
            (Psychic, Psychic) => 0.5,
            (Psychic, _) => 1.0,

            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) => 0.5,
            (Ice, _) => 1.0,

            (Dragon, Dragon) => 2.0,
            (Dragon, _) => 1.0,
        }
    }

    /// Combined multiplier against a (possibly dual-typed) defender. Products
    /// of the single-type values, so the full range is
    /// {0, 0.25, 0.5, 1, 2, 4} for two types.
    pub fn effectiveness_against(attacking: PokemonType, defending: &[PokemonType]) -> f32 {
        defending
            .iter()
            .map(|d| Self::type_effectiveness(attacking, *d))
            .product()
    }

    pub fn is_immune(attacking: PokemonType, defending: &[PokemonType]) -> bool {
        Self::effectiveness_against(attacking, defending) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_type_product() {
        // Electric vs Water/Flying stacks to 4x
        assert_eq!(
            PokemonType::effectiveness_against(
                PokemonType::Electric,
                &[PokemonType::Water, PokemonType::Flying]
            ),
            4.0
        );
        // Ground vs Flying is immune regardless of second type
        assert!(PokemonType::is_immune(
            PokemonType::Ground,
            &[PokemonType::Flying, PokemonType::Rock]
        ));
    }
}
