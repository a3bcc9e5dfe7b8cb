use crate::battle::state::{BattleSide, BattleState, BattlerId};
use crate::battler::{Battler, StatusCondition};
use crate::rng::BattleRng;
use schema::{Ability, HeldItem, Move, PokemonType};

/// A builder for creating test battlers with common defaults.
///
/// # Example
/// ```ignore
/// let battler = TestBattlerBuilder::new("Sparkit", 25)
///     .with_types(vec![PokemonType::Electric])
///     .with_moves(vec![Move::Thunderbolt])
///     .build();
/// ```
pub struct TestBattlerBuilder {
    name: String,
    level: u8,
    types: Vec<PokemonType>,
    stats: [u16; 6],
    moves: Vec<Move>,
    ability: Ability,
    held_item: Option<HeldItem>,
    status: Option<StatusCondition>,
    current_hp: Option<u16>,
}

impl TestBattlerBuilder {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level,
            types: vec![PokemonType::Normal],
            stats: [100, 60, 60, 60, 60, 60],
            moves: vec![Move::Tackle],
            ability: Ability::None,
            held_item: None,
            status: None,
            current_hp: None,
        }
    }

    pub fn with_types(mut self, types: Vec<PokemonType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_stats(mut self, stats: [u16; 6]) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = ability;
        self
    }

    pub fn with_item(mut self, item: HeldItem) -> Self {
        self.held_item = Some(item);
        self
    }

    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Battler {
        let mut battler = Battler::new(self.name, self.level, self.types, self.stats, self.moves);
        battler.ability = self.ability;
        battler.held_item = self.held_item;
        battler.status = self.status;
        if let Some(hp) = self.current_hp {
            battler.current_hp = hp.min(battler.max_hp());
        }
        battler
    }
}

/// A standard 1v1 battle.
pub fn create_battle(attacker: Battler, defender: Battler) -> BattleState {
    BattleState::new(BattleSide::solo(attacker), BattleSide::solo(defender))
}

/// A 2v2 battle: two active battlers per side.
pub fn create_double_battle(side0: Vec<Battler>, side1: Vec<Battler>) -> BattleState {
    BattleState::new(
        BattleSide::new(side0, vec![0, 1]),
        BattleSide::new(side1, vec![0, 1]),
    )
}

pub fn user() -> BattlerId {
    BattlerId::new(0, 0)
}

pub fn foe() -> BattlerId {
    BattlerId::new(1, 0)
}

/// A scripted oracle with a generous buffer of middling values, for tests
/// where specific outcomes don't matter. 50 passes common accuracy checks
/// and fails common secondary-chance checks.
pub fn predictable_rng() -> BattleRng {
    BattleRng::scripted(vec![50; 100])
}
