//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems; the only methods
//! here keep the pool invariants (health and mana clamped to their maxima).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Ability;
use crate::enums::*;
use crate::types::{Position, ProjectileId, UnitId};

/// Who a unit is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInfo {
    pub id: UnitId,
    pub name: String,
    pub kind: UnitKind,
    pub team: Team,
    pub role: Option<ChampionRole>,
}

/// Combat stats block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub max_health: f64,
    pub health: f64,
    pub max_mana: f64,
    pub mana: f64,
    pub attack_damage: f64,
    pub ability_power: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub attack_range: f64,
    pub move_speed: f64,
    /// Attacks per second.
    pub attack_speed: f64,
}

impl Stats {
    /// Clamp health and mana into `[0, max]`.
    pub fn clamp_pools(&mut self) {
        self.health = self.health.clamp(0.0, self.max_health.max(0.0));
        self.mana = self.mana.clamp(0.0, self.max_mana.max(0.0));
    }

    pub fn restore_pools(&mut self) {
        self.health = self.max_health;
        self.mana = self.max_mana;
    }

    /// Milliseconds between two attacks at the current attack speed.
    pub fn attack_interval_ms(&self) -> f64 {
        if self.attack_speed <= 0.0 {
            f64::INFINITY
        } else {
            1000.0 / self.attack_speed
        }
    }

    pub fn is_ranged(&self) -> bool {
        self.attack_range > crate::constants::RANGED_THRESHOLD
    }
}

/// Attack bookkeeping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CombatState {
    pub target: Option<UnitId>,
    /// Session time of the last attack (ms), `None` before the first one.
    pub last_attack_ms: Option<f64>,
}

/// Alive/dead state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifecycle {
    pub is_dead: bool,
    /// Remaining respawn countdown (champions only).
    pub respawn_ms: f64,
}

/// Recall channel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RecallChannel {
    pub phase: RecallPhase,
}

/// Level, wallet, inventory and ability cooldowns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub gold: u32,
    /// Owned item ids, at most `MAX_ITEMS`.
    pub items: Vec<String>,
    /// Ability id -> session time at which it is ready again (ms).
    pub cooldowns: BTreeMap<String, f64>,
}

/// The abilities a champion can cast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loadout {
    pub abilities: Vec<Ability>,
}

/// Marks the unit driven by player commands instead of AI.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerControlled {
    /// Point the player clicked on empty ground, walked to in a straight line.
    pub move_to: Option<Position>,
}

/// An active timed buff. The value the stat had before the buff is stored
/// verbatim and written back on expiry, so repeated buffs cannot drift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatBuff {
    pub stat: BuffedStat,
    pub original: f64,
    pub expires_at_ms: f64,
}

/// How a projectile picks its aim point each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Guidance {
    /// Follows a unit; falls back to the point it was fired at once the unit is gone.
    Homing { target: UnitId, fallback: Position },
    /// Flies to a fixed point.
    Fixed(Position),
}

/// An in-flight projectile (paired with a `Position` component).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub owner: UnitId,
    pub team: Team,
    pub guidance: Guidance,
    /// Units per second.
    pub speed: f64,
    pub damage: f64,
    pub radius: f64,
    pub kind: ProjectileKind,
}
