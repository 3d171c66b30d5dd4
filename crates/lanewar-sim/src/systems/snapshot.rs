//! Snapshot system: reads the store and builds a complete `GameSnapshot`.
//!
//! This system is read-only; it never modifies the store.

use lanewar_core::components::*;
use lanewar_core::enums::{GameResult, RecallPhase};
use lanewar_core::events::{Notification, SimEvent};
use lanewar_core::state::*;
use lanewar_core::types::{Position, SimTime, UnitId};

use super::projectiles;
use crate::store::EntityStore;

/// Session-level values that live outside the store.
pub struct SessionView<'a> {
    pub time: SimTime,
    pub player: UnitId,
    pub result: Option<GameResult>,
    pub camera_x: f64,
    pub notifications: &'a [Notification],
    pub events: Vec<SimEvent>,
}

pub fn build_snapshot(store: &EntityStore, session: SessionView<'_>) -> GameSnapshot {
    let units = build_units(store);
    let player_gold = store
        .get::<Progression>(session.player)
        .map_or(0, |p| p.gold);

    GameSnapshot {
        time: session.time,
        units,
        projectiles: build_projectiles(store),
        player_id: session.player,
        player_gold,
        elapsed_ms: session.time.elapsed_ms,
        result: session.result,
        camera_x: session.camera_x,
        notifications: session.notifications.to_vec(),
        events: session.events,
    }
}

/// Units in spawn order.
fn build_units(store: &EntityStore) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = store
        .world()
        .query::<(
            &UnitInfo,
            &Position,
            &Stats,
            &CombatState,
            &Lifecycle,
            &RecallChannel,
            &Progression,
            &Loadout,
            Option<&PlayerControlled>,
        )>()
        .iter()
        .map(
            |(_, (info, pos, stats, combat, life, recall, progression, loadout, player))| UnitView {
                id: info.id,
                name: info.name.clone(),
                kind: info.kind,
                team: info.team,
                role: info.role,
                position: *pos,
                stats: *stats,
                target: combat.target,
                is_dead: life.is_dead,
                respawn_ms: life.respawn_ms,
                recall_remaining_ms: match recall.phase {
                    RecallPhase::Idle => None,
                    RecallPhase::Channeling { remaining_ms } => Some(remaining_ms),
                },
                level: progression.level,
                items: progression.items.clone(),
                cooldowns: progression.cooldowns.clone(),
                abilities: loadout.abilities.clone(),
                player_controlled: player.is_some(),
            },
        )
        .collect();
    units.sort_by_key(|u| u.id);
    units
}

/// Projectiles in spawn order.
fn build_projectiles(store: &EntityStore) -> Vec<ProjectileView> {
    store
        .projectile_ids()
        .into_iter()
        .filter_map(|id| store.projectile(id))
        .map(|(projectile, position)| ProjectileView {
            id: projectile.id,
            owner: projectile.owner,
            team: projectile.team,
            position,
            aim: projectiles::aim_point(store, &projectile),
            radius: projectile.radius,
            kind: projectile.kind,
        })
        .collect()
}
