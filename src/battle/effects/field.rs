use crate::battle::state::{BattleEvent, BattleState, EventBus};
use schema::{HazardKind, ScreenKind, Terrain, Weather};

const WEATHER_TURNS: u8 = 5;
const TERRAIN_TURNS: u8 = 5;

/// Weather replacement. Setting the already-active weather is a routine
/// clause failure.
pub fn apply_weather(state: &mut BattleState, weather: Weather, bus: &mut EventBus) -> bool {
    if !state.field.set_weather(weather, WEATHER_TURNS) {
        return false;
    }
    bus.push(BattleEvent::WeatherStarted { weather });
    true
}

pub fn apply_terrain(state: &mut BattleState, terrain: Terrain, bus: &mut EventBus) -> bool {
    if !state.field.set_terrain(terrain, TERRAIN_TURNS) {
        return false;
    }
    bus.push(BattleEvent::TerrainStarted { terrain });
    true
}

pub fn apply_screen(
    state: &mut BattleState,
    side: usize,
    screen: ScreenKind,
    turns: u8,
    bus: &mut EventBus,
) -> bool {
    if !state.sides[side].conditions.raise_screen(screen, turns) {
        return false;
    }
    bus.push(BattleEvent::ScreenRaised { side, screen });
    true
}

/// Adds one hazard layer to the given side, up to the hazard's layer cap.
pub fn apply_hazard(
    state: &mut BattleState,
    side: usize,
    hazard: HazardKind,
    bus: &mut EventBus,
) -> bool {
    match state.sides[side].conditions.lay_hazard(hazard) {
        Some(layers) => {
            bus.push(BattleEvent::HazardLaid {
                side,
                hazard,
                layers,
            });
            true
        }
        None => false,
    }
}

/// Sweeps the user's own side clean of hazards. Runs in the pre-apply
/// phase, before per-target damage.
pub fn apply_clear_hazards(state: &mut BattleState, side: usize, bus: &mut EventBus) -> bool {
    if !state.sides[side].conditions.clear_hazards() {
        return false;
    }
    bus.push(BattleEvent::HazardsCleared { side });
    true
}

pub fn apply_gravity(state: &mut BattleState, turns: u8, bus: &mut EventBus) -> bool {
    if !state.field.set_gravity(turns) {
        return false;
    }
    bus.push(BattleEvent::GravityStarted);
    true
}
