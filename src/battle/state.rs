use crate::battle::conditions::TagKind;
use crate::battler::{Battler, StatusCondition};
use schema::{HazardKind, Move, ScreenKind, StatType, Terrain, Weather};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Address of an active battler: side index (0 or 1) and active-slot index
/// within that side (0 in singles, 0-1 in doubles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattlerId {
    pub side: usize,
    pub slot: usize,
}

impl BattlerId {
    pub fn new(side: usize, slot: usize) -> Self {
        BattlerId { side, slot }
    }

    pub fn enemy_side(&self) -> usize {
        1 - self.side
    }
}

/// Routine ways a move use can end before any roll. Failure is an outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// A pre-use condition predicate evaluated false.
    ConditionFailed,
    /// Targeting resolution found no legal candidate.
    NoTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    MoveUsed {
        user: BattlerId,
        move_: Move,
    },
    MoveFailed {
        user: BattlerId,
        reason: FailureReason,
    },
    MoveMissed {
        user: BattlerId,
        target: BattlerId,
        move_: Move,
    },
    /// Stopped by the target's guard.
    MoveBlocked {
        target: BattlerId,
    },
    MoveHadNoEffect {
        target: BattlerId,
    },
    MoveCharging {
        user: BattlerId,
        move_: Move,
    },
    StrikeCount {
        hits: u8,
    },
    DamageDealt {
        target: BattlerId,
        amount: u16,
        remaining_hp: u16,
    },
    BattlerHealed {
        target: BattlerId,
        amount: u16,
        new_hp: u16,
    },
    BattlerFainted {
        battler: BattlerId,
    },
    TypeEffectiveness {
        multiplier: f32,
    },
    CriticalHit {
        target: BattlerId,
    },
    StatStageChanged {
        target: BattlerId,
        stat: StatType,
        delta: i8,
        new_stage: i8,
    },
    StatChangeBlocked {
        target: BattlerId,
        stat: StatType,
    },
    StatStagesCleared,
    StatusApplied {
        target: BattlerId,
        status: StatusCondition,
    },
    StatusDamage {
        target: BattlerId,
        status: StatusCondition,
        damage: u16,
    },
    TagApplied {
        target: BattlerId,
        tag: TagKind,
    },
    TagExpired {
        target: BattlerId,
        tag: TagKind,
    },
    WeatherStarted {
        weather: Weather,
    },
    WeatherEnded {
        weather: Weather,
    },
    TerrainStarted {
        terrain: Terrain,
    },
    TerrainEnded {
        terrain: Terrain,
    },
    ScreenRaised {
        side: usize,
        screen: ScreenKind,
    },
    ScreenExpired {
        side: usize,
        screen: ScreenKind,
    },
    HazardLaid {
        side: usize,
        hazard: HazardKind,
        layers: u8,
    },
    HazardsCleared {
        side: usize,
    },
    GravityStarted,
    GravityEnded,
    RampageStarted {
        user: BattlerId,
        move_: Move,
    },
    RampageEnded {
        user: BattlerId,
    },
    MoneyEarned {
        side: usize,
        amount: u32,
    },
}

impl BattleEvent {
    /// Human-readable line for user-visible events; None for silent ones.
    pub fn format(&self, state: &BattleState) -> Option<String> {
        let name = |id: &BattlerId| {
            state
                .battler(*id)
                .map(|b| b.name.clone())
                .unwrap_or_else(|| "???".to_string())
        };
        match self {
            BattleEvent::MoveUsed { user, move_ } => {
                Some(format!("{} used {}!", name(user), move_.display_name()))
            }
            BattleEvent::MoveFailed { .. } => Some("But it failed!".to_string()),
            BattleEvent::MoveMissed { user, .. } => {
                Some(format!("{}'s attack missed!", name(user)))
            }
            BattleEvent::MoveBlocked { target } => {
                Some(format!("{} protected itself!", name(target)))
            }
            BattleEvent::MoveHadNoEffect { target } => {
                Some(format!("It doesn't affect {}...", name(target)))
            }
            BattleEvent::MoveCharging { user, move_ } => Some(format!(
                "{} is charging {}!",
                name(user),
                move_.display_name()
            )),
            BattleEvent::StrikeCount { hits } => Some(format!("Hit {} time(s)!", hits)),
            BattleEvent::DamageDealt { target, amount, .. } => {
                Some(format!("{} took {} damage!", name(target), amount))
            }
            BattleEvent::BattlerHealed { target, amount, .. } => {
                Some(format!("{} recovered {} HP!", name(target), amount))
            }
            BattleEvent::BattlerFainted { battler } => {
                Some(format!("{} fainted!", name(battler)))
            }
            BattleEvent::TypeEffectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m > 0.0 && m < 1.0 => Some("It's not very effective...".to_string()),
                _ => None,
            },
            BattleEvent::CriticalHit { .. } => Some("A critical hit!".to_string()),
            BattleEvent::StatStageChanged {
                target,
                stat,
                delta,
                ..
            } => {
                let verb = if *delta > 0 { "rose" } else { "fell" };
                Some(format!("{}'s {} {}!", name(target), stat, verb))
            }
            BattleEvent::StatChangeBlocked { target, stat } => Some(format!(
                "{}'s {} won't go any further!",
                name(target),
                stat
            )),
            BattleEvent::StatStagesCleared => {
                Some("All stat changes were eliminated!".to_string())
            }
            BattleEvent::StatusApplied { target, status } => {
                let text = match status {
                    StatusCondition::Sleep(_) => "fell asleep!",
                    StatusCondition::Poison => "was poisoned!",
                    StatusCondition::Toxic(_) => "was badly poisoned!",
                    StatusCondition::Burn => "was burned!",
                    StatusCondition::Freeze => "was frozen solid!",
                    StatusCondition::Paralysis => "is paralyzed!",
                };
                Some(format!("{} {}", name(target), text))
            }
            BattleEvent::WeatherStarted { weather } => {
                Some(format!("The {} began!", weather))
            }
            BattleEvent::WeatherEnded { weather } => {
                Some(format!("The {} subsided.", weather))
            }
            BattleEvent::MoneyEarned { amount, .. } => {
                Some(format!("Coins scattered everywhere! (+{})", amount))
            }
            _ => None,
        }
    }
}

/// Ordered per-move-use notification sink. The engine never awaits the
/// consumer; outer layers drain it for text, animation, and audio cues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Debug dump, one event per line.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// JSON export of the event log for outer UI layers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}

/// Per-side arena conditions: screens with turn counters and hazards with
/// layer counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SideConditions {
    screens: HashMap<ScreenKind, u8>,
    hazards: HashMap<HazardKind, u8>,
}

impl SideConditions {
    pub fn screen_active(&self, screen: ScreenKind) -> bool {
        self.screens.contains_key(&screen)
    }

    /// Returns false when the screen was already up.
    pub fn raise_screen(&mut self, screen: ScreenKind, turns: u8) -> bool {
        if self.screens.contains_key(&screen) {
            return false;
        }
        self.screens.insert(screen, turns);
        true
    }

    pub fn tick_screens(&mut self) -> Vec<ScreenKind> {
        let mut expired = Vec::new();
        self.screens.retain(|screen, turns| {
            *turns = turns.saturating_sub(1);
            if *turns == 0 {
                expired.push(*screen);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn hazard_layers(&self, hazard: HazardKind) -> u8 {
        self.hazards.get(&hazard).copied().unwrap_or(0)
    }

    /// Adds one layer; returns the new count, or None when already maxed.
    pub fn lay_hazard(&mut self, hazard: HazardKind) -> Option<u8> {
        let layers = self.hazards.entry(hazard).or_insert(0);
        if *layers >= hazard.max_layers() {
            return None;
        }
        *layers += 1;
        Some(*layers)
    }

    /// Removes every hazard; returns true when there was anything to clear.
    pub fn clear_hazards(&mut self) -> bool {
        let had_any = !self.hazards.is_empty();
        self.hazards.clear();
        had_any
    }
}

/// One team's half of the field: the party, which party members occupy the
/// active slots, side conditions, and accumulated prize money.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSide {
    pub party: Vec<Battler>,
    /// Party indices of the battlers currently on the field, slot-ordered.
    pub active: Vec<usize>,
    pub conditions: SideConditions,
    pub money: u32,
}

impl BattleSide {
    pub fn new(party: Vec<Battler>, active: Vec<usize>) -> Self {
        BattleSide {
            party,
            active,
            conditions: SideConditions::default(),
            money: 0,
        }
    }

    /// Single active battler convenience constructor.
    pub fn solo(battler: Battler) -> Self {
        Self::new(vec![battler], vec![0])
    }

    pub fn battler_at(&self, slot: usize) -> Option<&Battler> {
        self.active.get(slot).and_then(|&ix| self.party.get(ix))
    }

    pub fn battler_at_mut(&mut self, slot: usize) -> Option<&mut Battler> {
        let ix = *self.active.get(slot)?;
        self.party.get_mut(ix)
    }

    /// Living, status-free party members; the party-count strike variant.
    pub fn healthy_party_count(&self) -> u8 {
        self.party
            .iter()
            .filter(|b| !b.is_fainted() && b.status.is_none())
            .count() as u8
    }
}

/// Field-wide conditions: weather and terrain with remaining turns and a
/// suppression flag, plus the gravity arena tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldState {
    weather: Option<Weather>,
    weather_turns: u8,
    /// When set, weather remains on the field but has no effect.
    pub weather_suppressed: bool,
    terrain: Option<Terrain>,
    terrain_turns: u8,
    gravity_turns: u8,
}

impl FieldState {
    /// The weather currently in effect (None while suppressed).
    pub fn weather(&self) -> Option<Weather> {
        if self.weather_suppressed {
            None
        } else {
            self.weather
        }
    }

    pub fn raw_weather(&self) -> Option<Weather> {
        self.weather
    }

    /// Returns false when that weather was already active.
    pub fn set_weather(&mut self, weather: Weather, turns: u8) -> bool {
        if self.weather == Some(weather) {
            return false;
        }
        self.weather = Some(weather);
        self.weather_turns = turns;
        true
    }

    pub fn terrain(&self) -> Option<Terrain> {
        self.terrain
    }

    pub fn set_terrain(&mut self, terrain: Terrain, turns: u8) -> bool {
        if self.terrain == Some(terrain) {
            return false;
        }
        self.terrain = Some(terrain);
        self.terrain_turns = turns;
        true
    }

    pub fn gravity_active(&self) -> bool {
        self.gravity_turns > 0
    }

    pub fn set_gravity(&mut self, turns: u8) -> bool {
        if self.gravity_active() {
            return false;
        }
        self.gravity_turns = turns;
        true
    }

    /// End-of-turn countdown. Returns the conditions that ran out this turn.
    pub fn tick(&mut self) -> FieldExpiry {
        let mut expiry = FieldExpiry::default();
        if self.weather.is_some() {
            self.weather_turns = self.weather_turns.saturating_sub(1);
            if self.weather_turns == 0 {
                expiry.weather = self.weather.take();
            }
        }
        if self.terrain.is_some() {
            self.terrain_turns = self.terrain_turns.saturating_sub(1);
            if self.terrain_turns == 0 {
                expiry.terrain = self.terrain.take();
            }
        }
        if self.gravity_turns > 0 {
            self.gravity_turns -= 1;
            expiry.gravity_ended = self.gravity_turns == 0;
        }
        expiry
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldExpiry {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub gravity_ended: bool,
}

/// The whole battlefield: both sides plus field-wide state. Passed
/// explicitly into every resolver and clause call; there is no ambient
/// battle singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    pub sides: [BattleSide; 2],
    pub field: FieldState,
    pub turn_number: u32,
}

impl BattleState {
    pub fn new(side0: BattleSide, side1: BattleSide) -> Self {
        BattleState {
            sides: [side0, side1],
            field: FieldState::default(),
            turn_number: 1,
        }
    }

    pub fn battler(&self, id: BattlerId) -> Option<&Battler> {
        self.sides.get(id.side)?.battler_at(id.slot)
    }

    pub fn battler_mut(&mut self, id: BattlerId) -> Option<&mut Battler> {
        self.sides.get_mut(id.side)?.battler_at_mut(id.slot)
    }

    /// True when the slot holds a battler that is on the field and able to
    /// be targeted.
    pub fn is_active(&self, id: BattlerId) -> bool {
        self.battler(id).map_or(false, |b| !b.is_fainted())
    }

    /// Live battlers on one side, slot order.
    pub fn active_ids(&self, side: usize) -> Vec<BattlerId> {
        (0..self.sides[side].active.len())
            .map(|slot| BattlerId::new(side, slot))
            .filter(|id| self.is_active(*id))
            .collect()
    }

    /// Live battlers on both sides: side 0 slots first, then side 1.
    pub fn all_active_ids(&self) -> Vec<BattlerId> {
        let mut ids = self.active_ids(0);
        ids.extend(self.active_ids(1));
        ids
    }

    /// The user's live ally slot, if any.
    pub fn ally_of(&self, id: BattlerId) -> Option<BattlerId> {
        (0..self.sides[id.side].active.len())
            .map(|slot| BattlerId::new(id.side, slot))
            .find(|candidate| candidate.slot != id.slot && self.is_active(*candidate))
    }
}
