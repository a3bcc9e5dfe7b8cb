use crate::battle::conditions::{BattlerTag, TagKind};
use crate::errors::BattleStateError;
use crate::move_dex;
use schema::{Ability, HeldItem, Move, PokemonType, StatType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Non-volatile status conditions. One slot per battler; a new status never
/// overwrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCondition {
    /// Remaining sleep turns.
    Sleep(u8),
    Poison,
    /// Ramping poison; the counter scales the end-of-turn damage.
    Toxic(u8),
    Burn,
    Freeze,
    Paralysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub move_: Move,
    pub pp: u8,
}

impl MoveSlot {
    pub fn new(move_: Move) -> Self {
        let max_pp = move_dex::get_move_data(move_).map(|d| d.max_pp).unwrap_or(20);
        MoveSlot { move_, pp: max_pp }
    }
}

/// One entry of a battler's per-battle move history, newest last. The
/// success flag feeds the diminishing guard and the lock-in machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedMove {
    pub move_: Move,
    pub succeeded: bool,
}

/// Index of the six persistent stats in `Battler::stats`.
pub const STAT_HP: usize = 0;
pub const STAT_ATK: usize = 1;
pub const STAT_DEF: usize = 2;
pub const STAT_SPATK: usize = 3;
pub const STAT_SPDEF: usize = 4;
pub const STAT_SPE: usize = 5;

/// A combatant's live battle state. Owned by a [`crate::battle::state::BattleSide`];
/// addressed through [`crate::battle::state::BattlerId`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battler {
    pub name: String,
    pub level: u8,
    pub types: Vec<PokemonType>,
    /// HP, Atk, Def, SpAtk, SpDef, Spe.
    pub stats: [u16; 6],
    pub current_hp: u16,
    pub status: Option<StatusCondition>,
    pub ability: Ability,
    pub held_item: Option<HeldItem>,
    pub moves: [Option<MoveSlot>; 4],
    /// Stage modifications, each clamped to [-6, +6]; absent key = 0.
    pub stat_stages: HashMap<StatType, i8>,
    tags: HashMap<TagKind, BattlerTag>,
    pub move_history: Vec<UsedMove>,
}

impl Battler {
    pub fn new(
        name: impl Into<String>,
        level: u8,
        types: Vec<PokemonType>,
        stats: [u16; 6],
        moves: Vec<Move>,
    ) -> Self {
        let mut slots = [const { None }; 4];
        for (i, move_) in moves.into_iter().take(4).enumerate() {
            slots[i] = Some(MoveSlot::new(move_));
        }
        Battler {
            name: name.into(),
            level,
            types,
            stats,
            current_hp: stats[STAT_HP],
            status: None,
            ability: Ability::None,
            held_item: None,
            moves: slots,
            stat_stages: HashMap::new(),
            tags: HashMap::new(),
            move_history: Vec::new(),
        }
    }

    pub fn max_hp(&self) -> u16 {
        self.stats[STAT_HP]
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Returns true when the damage fainted the battler.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.is_fainted()
    }

    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let headroom = self.max_hp() - self.current_hp;
        let restored = amount.min(headroom);
        self.current_hp += restored;
        restored
    }

    // === Stat stages ===

    pub fn stat_stage(&self, stat: StatType) -> i8 {
        self.stat_stages.get(&stat).copied().unwrap_or(0)
    }

    /// Applies a stage delta, clamped to [-6, +6]. Returns the change that
    /// actually took effect (0 when already at the bound).
    pub fn modify_stat_stage(&mut self, stat: StatType, delta: i8) -> i8 {
        let current = self.stat_stage(stat);
        let new = (current + delta).clamp(-6, 6);
        if new == 0 {
            self.stat_stages.remove(&stat);
        } else {
            self.stat_stages.insert(stat, new);
        }
        new - current
    }

    pub fn clear_stat_stages(&mut self) {
        self.stat_stages.clear();
    }

    // === Tags ===

    pub fn has_tag(&self, kind: TagKind) -> bool {
        self.tags.contains_key(&kind)
    }

    pub fn tag(&self, kind: TagKind) -> Option<&BattlerTag> {
        self.tags.get(&kind)
    }

    pub fn tag_mut(&mut self, kind: TagKind) -> Option<&mut BattlerTag> {
        self.tags.get_mut(&kind)
    }

    /// Adds a tag, keyed by kind. Returns false (and leaves the existing tag
    /// alone) when a tag of the same kind is already present.
    pub fn add_tag(&mut self, tag: BattlerTag) -> bool {
        let kind = tag.kind();
        if self.tags.contains_key(&kind) {
            return false;
        }
        self.tags.insert(kind, tag);
        true
    }

    pub fn remove_tag(&mut self, kind: TagKind) -> Option<BattlerTag> {
        self.tags.remove(&kind)
    }

    /// Lapses every counted tag, removing the expired ones. Returns the
    /// removed tags so the caller can fire expiry behavior and messaging.
    pub fn lapse_tags(&mut self) -> Vec<BattlerTag> {
        let mut expired = Vec::new();
        self.tags.retain(|_, tag| {
            if tag.lapse() {
                true
            } else {
                expired.push(tag.clone());
                false
            }
        });
        expired
    }

    pub fn tags(&self) -> impl Iterator<Item = &BattlerTag> {
        self.tags.values()
    }

    // === Moveset ===

    pub fn move_slot(&self, move_: Move) -> Option<&MoveSlot> {
        self.moves
            .iter()
            .flatten()
            .find(|slot| slot.move_ == move_)
    }

    /// Spends one PP. Forced re-uses (charge release, rampage repeats) do
    /// not go through here.
    pub fn spend_pp(&mut self, move_: Move) -> Result<(), BattleStateError> {
        let slot = self
            .moves
            .iter_mut()
            .flatten()
            .find(|slot| slot.move_ == move_)
            .ok_or(BattleStateError::MoveNotKnown(move_))?;
        slot.pp = slot.pp.saturating_sub(1);
        Ok(())
    }

    pub fn record_move(&mut self, move_: Move, succeeded: bool) {
        self.move_history.push(UsedMove { move_, succeeded });
    }

    pub fn last_move(&self) -> Option<UsedMove> {
        self.move_history.last().copied()
    }
}
