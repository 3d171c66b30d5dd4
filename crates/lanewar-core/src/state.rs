//! Game state snapshot: the read-only view handed to presentation each tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Ability;
use crate::components::Stats;
use crate::enums::*;
use crate::events::{Notification, SimEvent};
use crate::types::{Position, ProjectileId, SimTime, UnitId};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    /// Units in spawn order.
    pub units: Vec<UnitView>,
    /// Projectiles in spawn order.
    pub projectiles: Vec<ProjectileView>,
    pub player_id: UnitId,
    pub player_gold: u32,
    pub elapsed_ms: f64,
    pub result: Option<GameResult>,
    /// Left edge of the camera viewport along x.
    pub camera_x: f64,
    pub notifications: Vec<Notification>,
    /// Events emitted during the last tick.
    pub events: Vec<SimEvent>,
}

impl GameSnapshot {
    pub fn unit(&self, id: UnitId) -> Option<&UnitView> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn player(&self) -> Option<&UnitView> {
        self.unit(self.player_id)
    }

    pub fn count(&self, kind: UnitKind, team: Team) -> usize {
        self.units
            .iter()
            .filter(|u| u.kind == kind && u.team == team)
            .count()
    }
}

/// A unit as drawn by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub name: String,
    pub kind: UnitKind,
    pub team: Team,
    pub role: Option<ChampionRole>,
    pub position: Position,
    pub stats: Stats,
    pub target: Option<UnitId>,
    pub is_dead: bool,
    pub respawn_ms: f64,
    /// Remaining recall channel time, `None` when not recalling.
    pub recall_remaining_ms: Option<f64>,
    pub level: u32,
    pub items: Vec<String>,
    pub cooldowns: BTreeMap<String, f64>,
    pub abilities: Vec<Ability>,
    pub player_controlled: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub owner: UnitId,
    pub team: Team,
    pub position: Position,
    /// Where the projectile is currently headed.
    pub aim: Position,
    pub radius: f64,
    pub kind: ProjectileKind,
}
