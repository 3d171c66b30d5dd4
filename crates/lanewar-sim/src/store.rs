//! Entity Store: the single authoritative collection of units and projectiles.
//!
//! Wraps the hecs world with id indexes. hecs iterates by archetype, so
//! anything order-sensitive goes through the indexes, which are keyed by
//! spawn-ordered ids.

use std::collections::BTreeMap;

use hecs::{Component, Entity, World};

use lanewar_ai::targeting::Sighting;
use lanewar_core::catalog::Ability;
use lanewar_core::components::*;
use lanewar_core::constants::STARTING_GOLD;
use lanewar_core::enums::*;
use lanewar_core::types::{Position, ProjectileId, UnitId};

/// Everything needed to put a unit on the field.
#[derive(Debug, Clone)]
pub struct UnitSpawn {
    pub name: String,
    pub kind: UnitKind,
    pub team: Team,
    pub role: Option<ChampionRole>,
    pub position: Position,
    pub stats: Stats,
    pub abilities: Vec<Ability>,
    pub player_controlled: bool,
}

/// A projectile about to be fired. The store assigns the id.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpawn {
    pub owner: UnitId,
    pub team: Team,
    pub origin: Position,
    pub guidance: Guidance,
    pub speed: f64,
    pub damage: f64,
    pub radius: f64,
    pub kind: ProjectileKind,
}

#[derive(Default)]
pub struct EntityStore {
    world: World,
    units: BTreeMap<UnitId, Entity>,
    projectiles: BTreeMap<ProjectileId, Entity>,
    next_unit_id: u32,
    next_projectile_id: u32,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn spawn_unit(&mut self, spawn: UnitSpawn) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;

        let gold = match spawn.kind {
            UnitKind::Champion => STARTING_GOLD,
            _ => 0,
        };

        let entity = self.world.spawn((
            UnitInfo {
                id,
                name: spawn.name,
                kind: spawn.kind,
                team: spawn.team,
                role: spawn.role,
            },
            spawn.position,
            spawn.stats,
            CombatState::default(),
            Lifecycle::default(),
            RecallChannel::default(),
            Progression {
                level: 1,
                gold,
                ..Default::default()
            },
            Loadout {
                abilities: spawn.abilities,
            },
        ));
        if spawn.player_controlled {
            let _ = self.world.insert_one(entity, PlayerControlled::default());
        }

        self.units.insert(id, entity);
        id
    }

    pub fn spawn_projectile(&mut self, spawn: ProjectileSpawn) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;

        let entity = self.world.spawn((
            Projectile {
                id,
                owner: spawn.owner,
                team: spawn.team,
                guidance: spawn.guidance,
                speed: spawn.speed,
                damage: spawn.damage,
                radius: spawn.radius,
                kind: spawn.kind,
            },
            spawn.origin,
        ));
        self.projectiles.insert(id, entity);
        id
    }

    pub fn despawn_unit(&mut self, id: UnitId) {
        if let Some(entity) = self.units.remove(&id) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn despawn_projectile(&mut self, id: ProjectileId) {
        if let Some(entity) = self.projectiles.remove(&id) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    /// Unit ids in store (spawn) order.
    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.units.keys().copied().collect()
    }

    /// Projectile ids in store (spawn) order.
    pub fn projectile_ids(&self) -> Vec<ProjectileId> {
        self.projectiles.keys().copied().collect()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Copy a component off a unit.
    pub fn get<T: Component + Clone>(&self, id: UnitId) -> Option<T> {
        let entity = *self.units.get(&id)?;
        self.world.get::<&T>(entity).ok().map(|c| (*c).clone())
    }

    /// Mutate a component on a unit in place.
    pub fn update<T: Component, R>(
        &mut self,
        id: UnitId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        let entity = *self.units.get(&id)?;
        let mut component = self.world.get::<&mut T>(entity).ok()?;
        Some(f(&mut *component))
    }

    pub fn has<T: Component>(&self, id: UnitId) -> bool {
        self.units
            .get(&id)
            .is_some_and(|&entity| self.world.entity(entity).is_ok_and(|e| e.has::<T>()))
    }

    /// Attach or replace a component on a unit.
    pub fn insert<T: Component>(&mut self, id: UnitId, component: T) {
        if let Some(&entity) = self.units.get(&id) {
            let _ = self.world.insert_one(entity, component);
        }
    }

    pub fn remove<T: Component>(&mut self, id: UnitId) -> Option<T> {
        let entity = *self.units.get(&id)?;
        self.world.remove_one::<T>(entity).ok()
    }

    pub fn projectile(&self, id: ProjectileId) -> Option<(Projectile, Position)> {
        let entity = *self.projectiles.get(&id)?;
        let projectile = *self.world.get::<&Projectile>(entity).ok()?;
        let position = *self.world.get::<&Position>(entity).ok()?;
        Some((projectile, position))
    }

    pub fn set_projectile_position(&mut self, id: ProjectileId, position: Position) {
        if let Some(&entity) = self.projectiles.get(&id) {
            if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                *pos = position;
            }
        }
    }

    /// What every unit can see of every other unit, in store order.
    pub fn roster(&self) -> Vec<Sighting> {
        let mut roster: Vec<Sighting> = self
            .world
            .query::<(&UnitInfo, &Position, &Lifecycle)>()
            .iter()
            .map(|(_, (info, pos, life))| Sighting {
                id: info.id,
                team: info.team,
                kind: info.kind,
                position: *pos,
                alive: !life.is_dead,
            })
            .collect();
        roster.sort_by_key(|s| s.id);
        roster
    }

    /// First unit of the given kind and team in store order.
    pub fn find_unit(&self, kind: UnitKind, team: Team) -> Option<UnitId> {
        self.world
            .query::<&UnitInfo>()
            .iter()
            .filter(|(_, info)| info.kind == kind && info.team == team)
            .map(|(_, info)| info.id)
            .min()
    }

    pub fn is_dead(&self, id: UnitId) -> bool {
        self.get::<Lifecycle>(id).is_some_and(|l| l.is_dead)
    }
}
