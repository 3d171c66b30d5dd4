//! Spawn factories for the session's units.
//!
//! Builds the starting roster (champions, turrets, nexuses) and minion waves
//! from the static catalog.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lanewar_core::catalog::{
    minion_stats, nexus_stats, turret_stats, turret_x, Catalog, ChampionTemplate,
};
use lanewar_core::components::Stats;
use lanewar_core::constants::*;
use lanewar_core::enums::*;
use lanewar_core::error::SessionError;
use lanewar_core::types::{Position, UnitId};

use crate::store::{EntityStore, UnitSpawn};

/// Lobby indexes of the two AI enemies.
const ENEMY_TEMPLATES: [usize; 2] = [2, 3];

/// Where a team respawns and recalls to.
pub fn base_anchor(team: Team) -> Position {
    match team {
        Team::Order => Position::new(ORDER_BASE_X, LANE_Y),
        Team::Chaos => Position::new(CHAOS_BASE_X, LANE_Y),
    }
}

/// Set up the starting roster and return the player's unit id.
///
/// Spawn order (and therefore store order): player, ally, two enemies,
/// order turret, chaos turret, order nexus, chaos nexus.
pub fn setup_session(
    store: &mut EntityStore,
    catalog: &Catalog,
    player_champion: usize,
) -> Result<UnitId, SessionError> {
    let available = catalog.champions.len();
    let template = |index: usize| {
        catalog
            .champion(index)
            .ok_or(SessionError::UnknownChampion { index, available })
    };

    let player_template = template(player_champion)?;
    let ally_template = template((player_champion + 1) % available)?;
    let enemy_templates = [
        template(ENEMY_TEMPLATES[0])?,
        template(ENEMY_TEMPLATES[1])?,
    ];

    let player = spawn_champion(
        store,
        player_template,
        Team::Order,
        Position::new(100.0, LANE_Y),
        true,
    );
    spawn_champion(
        store,
        ally_template,
        Team::Order,
        Position::new(100.0, LANE_Y + 100.0),
        false,
    );
    spawn_champion(
        store,
        enemy_templates[0],
        Team::Chaos,
        Position::new(MAP_WIDTH - 100.0, LANE_Y),
        false,
    );
    spawn_champion(
        store,
        enemy_templates[1],
        Team::Chaos,
        Position::new(MAP_WIDTH - 100.0, LANE_Y - 100.0),
        false,
    );

    for team in [Team::Order, Team::Chaos] {
        spawn_structure(
            store,
            format!("{team:?} Turret"),
            UnitKind::Turret,
            team,
            Position::new(turret_x(team), LANE_Y),
            turret_stats(),
        );
    }
    for team in [Team::Order, Team::Chaos] {
        spawn_structure(
            store,
            format!("{team:?} Nexus"),
            UnitKind::Nexus,
            team,
            base_anchor(team),
            nexus_stats(catalog),
        );
    }

    Ok(player)
}

pub fn spawn_champion(
    store: &mut EntityStore,
    template: &ChampionTemplate,
    team: Team,
    position: Position,
    player_controlled: bool,
) -> UnitId {
    store.spawn_unit(UnitSpawn {
        name: template.name.clone(),
        kind: UnitKind::Champion,
        team,
        role: Some(template.role),
        position,
        stats: template.stats,
        abilities: template.abilities.clone(),
        player_controlled,
    })
}

fn spawn_structure(
    store: &mut EntityStore,
    name: String,
    kind: UnitKind,
    team: Team,
    position: Position,
    stats: Stats,
) -> UnitId {
    store.spawn_unit(UnitSpawn {
        name,
        kind,
        team,
        role: None,
        position,
        stats,
        abilities: Vec::new(),
        player_controlled: false,
    })
}

/// Spawn one wave of minions for a team at its end of the lane.
pub fn spawn_minion_wave(store: &mut EntityStore, rng: &mut ChaCha8Rng, team: Team) -> Vec<UnitId> {
    let base_x = match team {
        Team::Order => 100.0,
        Team::Chaos => MAP_WIDTH - 100.0,
    };

    (0..MINIONS_PER_WAVE)
        .map(|i| {
            let jitter: f64 = rng.gen_range(0.0..MINION_SPAWN_JITTER);
            let y = LANE_Y + i as f64 * MINION_ROW_SPACING - MINION_ROW_SPACING;
            store.spawn_unit(UnitSpawn {
                name: "Minion".into(),
                kind: UnitKind::Minion,
                team,
                role: None,
                position: Position::new(base_x + jitter, y),
                stats: minion_stats(),
                abilities: Vec::new(),
                player_controlled: false,
            })
        })
        .collect()
}
