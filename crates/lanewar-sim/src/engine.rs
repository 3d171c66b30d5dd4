//! Simulation engine: the session controller.
//!
//! `SimulationEngine` owns the entity store, all session timers and the
//! command queue, runs the systems in a fixed order each tick, and produces
//! `GameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use lanewar_core::catalog::Catalog;
use lanewar_core::commands::PlayerCommand;
use lanewar_core::components::{CombatState, PlayerControlled, Progression, UnitInfo};
use lanewar_core::constants::*;
use lanewar_core::enums::{DamageType, GameResult, RecallInterruption, Team, UnitKind};
use lanewar_core::error::{CommandRejection, SessionError};
use lanewar_core::events::{Notification, SimEvent};
use lanewar_core::state::GameSnapshot;
use lanewar_core::types::{Deadline, Position, SimTime, UnitId};

use crate::store::EntityStore;
use crate::systems::snapshot::SessionView;
use crate::systems::wave_spawner::WaveSchedule;
use crate::systems::{self, TickContext};
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same session.
    pub seed: u64,
    /// Lobby index of the player's champion.
    pub player_champion: usize,
    /// Width of the presentation viewport, used for the camera clamp.
    pub viewport_width: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_champion: 0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

/// The simulation engine. Owns the store and all session state.
pub struct SimulationEngine {
    store: EntityStore,
    catalog: Catalog,
    time: SimTime,
    player: UnitId,
    rng: ChaCha8Rng,
    viewport_width: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<UnitId>,

    wave_schedule: WaveSchedule,
    gold_deadline: Deadline,
    result: Option<GameResult>,
    camera_x: f64,

    /// Events raised between ticks, reported with the next tick.
    pending_events: Vec<SimEvent>,
    last_events: Vec<SimEvent>,
    notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl SimulationEngine {
    /// Build the starting roster and return a ready session.
    pub fn new(config: SimConfig) -> Result<Self, SessionError> {
        let catalog = Catalog::default();
        let mut store = EntityStore::new();
        let player = world_setup::setup_session(&mut store, &catalog, config.player_champion)?;

        tracing::info!(
            seed = config.seed,
            champion = config.player_champion,
            units = store.unit_count(),
            "Session started"
        );

        let mut engine = Self {
            store,
            catalog,
            time: SimTime::default(),
            player,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            viewport_width: config.viewport_width,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            wave_schedule: WaveSchedule::default(),
            gold_deadline: Deadline::new(0.0, GOLD_INTERVAL_MS),
            result: None,
            camera_x: 0.0,
            pending_events: Vec::new(),
            last_events: Vec::new(),
            notifications: Vec::new(),
            next_notification_id: 0,
        };
        engine.update_camera();
        Ok(engine)
    }

    /// Queue a player command for the start of the next tick's unit pass.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Click at a world point: attack an enemy under the cursor, otherwise walk there.
    pub fn issue_move_or_attack(&mut self, point: Position) {
        self.queue_command(PlayerCommand::MoveOrAttack { point });
    }

    pub fn issue_recall(&mut self) {
        self.queue_command(PlayerCommand::Recall);
    }

    pub fn issue_cast(&mut self, ability_id: impl Into<String>) {
        self.queue_command(PlayerCommand::Cast {
            ability_id: ability_id.into(),
        });
    }

    pub fn issue_purchase(&mut self, item_id: impl Into<String>) {
        self.queue_command(PlayerCommand::Purchase {
            item_id: item_id.into(),
        });
    }

    /// Advance the session by one frame.
    ///
    /// Once the session has a result, only the clock, camera and
    /// notifications move; queued commands are rejected.
    pub fn tick(&mut self, dt_ms: f64, now_ms: f64) {
        self.time.advance(now_ms);

        let mut ctx = TickContext::new(now_ms, dt_ms, self.player);
        ctx.events.append(&mut self.pending_events);

        if self.result.is_none() {
            self.run_systems(&mut ctx);
        } else {
            while self.command_queue.pop_front().is_some() {
                reject(&mut ctx, CommandRejection::SessionOver);
            }
        }

        self.update_camera();
        self.publish(ctx.events, now_ms);
    }

    /// Read-only view of the session for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        systems::snapshot::build_snapshot(
            &self.store,
            SessionView {
                time: self.time,
                player: self.player,
                result: self.result,
                camera_x: self.camera_x,
                notifications: &self.notifications,
                events: self.last_events.clone(),
            },
        )
    }

    /// Deal raw damage outside the tick loop (scripted damage, tests).
    /// Events are reported with the next tick. Ignored once the session
    /// has a result.
    pub fn apply_damage(&mut self, target: UnitId, raw: f64, source: UnitId) -> Option<f64> {
        if self.result.is_some() {
            return None;
        }
        let mut ctx = TickContext::new(self.time.elapsed_ms, 0.0, self.player);
        let dealt = systems::combat::apply_damage(
            &mut self.store,
            &mut ctx,
            target,
            raw,
            source,
            DamageType::Physical,
        );
        self.pending_events.append(&mut ctx.events);
        dealt
    }

    pub fn player_id(&self) -> UnitId {
        self.player
    }

    pub fn player_gold(&self) -> u32 {
        self.store
            .get::<Progression>(self.player)
            .map_or(0, |p| p.gold)
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// First unit of a kind and team, e.g. a team's nexus.
    pub fn find_unit(&self, kind: UnitKind, team: Team) -> Option<UnitId> {
        self.store.find_unit(kind, team)
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(test)]
    pub fn set_player_gold(&mut self, gold: u32) {
        self.store
            .update(self.player, |p: &mut Progression| p.gold = gold);
    }

    /// Spawn an extra unit (for tests needing a specific matchup).
    #[cfg(test)]
    pub fn spawn_test_unit(
        &mut self,
        kind: UnitKind,
        team: Team,
        position: Position,
        stats: lanewar_core::components::Stats,
    ) -> UnitId {
        self.store.spawn_unit(crate::store::UnitSpawn {
            name: format!("Test {kind:?}"),
            kind,
            team,
            role: None,
            position,
            stats,
            abilities: Vec::new(),
            player_controlled: false,
        })
    }

    /// Run all systems in order.
    fn run_systems(&mut self, ctx: &mut TickContext) {
        // 1. Minion waves
        systems::wave_spawner::run(&mut self.store, &mut self.rng, &mut self.wave_schedule, ctx);
        // 2. Passive gold
        if self.gold_deadline.poll(ctx.now_ms) {
            systems::economy::grant_passive_income(&mut self.store, self.player);
        }
        // 3. Player intents, then every unit in store order
        self.process_commands(ctx);
        systems::units::run(&mut self.store, ctx);
        // 4. Projectile flight and impacts
        systems::projectiles::run(&mut self.store, ctx);
        // 5. Dead minions and turrets
        systems::cleanup::run(&mut self.store, &mut self.despawn_buffer);
        // 6. Win condition
        self.check_result(ctx);
    }

    fn process_commands(&mut self, ctx: &mut TickContext) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(rejection) = self.handle_command(ctx, command) {
                reject(ctx, rejection);
            }
        }
    }

    fn handle_command(
        &mut self,
        ctx: &mut TickContext,
        command: PlayerCommand,
    ) -> Result<(), CommandRejection> {
        let player = self.player;
        match command {
            PlayerCommand::MoveOrAttack { point } => self.move_or_attack(ctx, point),
            PlayerCommand::Recall => systems::recall::start(&mut self.store, ctx, player),
            PlayerCommand::Cast { ability_id } => {
                self.cancel_recall_for_command(ctx);
                systems::abilities::cast(&mut self.store, ctx, player, &ability_id)
            }
            PlayerCommand::Purchase { item_id } => {
                self.cancel_recall_for_command(ctx);
                let item = self
                    .catalog
                    .item(&item_id)
                    .ok_or_else(|| CommandRejection::UnknownItem(item_id.clone()))?;
                systems::economy::purchase(&mut self.store, ctx, player, item)
            }
        }
    }

    fn cancel_recall_for_command(&mut self, ctx: &mut TickContext) {
        if !self.store.is_dead(self.player) {
            systems::recall::interrupt(
                &mut self.store,
                ctx,
                self.player,
                RecallInterruption::NewCommand,
            );
        }
    }

    fn move_or_attack(
        &mut self,
        ctx: &mut TickContext,
        point: Position,
    ) -> Result<(), CommandRejection> {
        let player = self.player;
        if self.store.is_dead(player) {
            return Err(CommandRejection::UnitDead);
        }
        self.cancel_recall_for_command(ctx);

        let team = self
            .store
            .get::<UnitInfo>(player)
            .map(|i| i.team)
            .ok_or(CommandRejection::UnitDead)?;
        let clicked = self.store.roster().into_iter().find(|s| {
            let radius = match s.kind {
                UnitKind::Turret => TURRET_CLICK_RADIUS,
                _ => UNIT_CLICK_RADIUS,
            };
            s.alive && s.position.distance_to(&point) < radius
        });

        match clicked {
            Some(enemy) if enemy.team != team => {
                self.store
                    .update(player, |c: &mut CombatState| c.target = Some(enemy.id));
                self.store
                    .update(player, |p: &mut PlayerControlled| p.move_to = None);
            }
            _ => {
                self.store
                    .update(player, |c: &mut CombatState| c.target = None);
                self.store
                    .update(player, |p: &mut PlayerControlled| p.move_to = Some(point));
                ctx.events.push(SimEvent::MoveOrdered { unit: player });
            }
        }
        Ok(())
    }

    fn check_result(&mut self, ctx: &mut TickContext) {
        let nexus_dead = |team| {
            self.store
                .find_unit(UnitKind::Nexus, team)
                .is_some_and(|id| self.store.is_dead(id))
        };
        let result = if nexus_dead(Team::Chaos) {
            GameResult::Victory
        } else if nexus_dead(Team::Order) {
            GameResult::Defeat
        } else {
            return;
        };

        tracing::info!(?result, at_ms = ctx.now_ms, "Game over");
        self.result = Some(result);
        ctx.events.push(SimEvent::GameOver { result });
    }

    fn update_camera(&mut self) {
        if let Some(pos) = self.store.get::<Position>(self.player) {
            self.camera_x = (pos.x - self.viewport_width / 2.0)
                .min(MAP_WIDTH - self.viewport_width)
                .max(0.0);
        }
    }

    /// Turn player-relevant events into notifications and drop expired ones.
    fn publish(&mut self, events: Vec<SimEvent>, now_ms: f64) {
        for event in &events {
            if let Some(text) = event.notification_text(self.player) {
                self.notifications.push(Notification {
                    id: self.next_notification_id,
                    text,
                    expires_at_ms: now_ms + NOTIFICATION_TTL_MS,
                });
                self.next_notification_id += 1;
            }
        }
        self.notifications.retain(|n| n.expires_at_ms > now_ms);
        self.last_events = events;
    }
}

fn reject(ctx: &mut TickContext, rejection: CommandRejection) {
    tracing::debug!(%rejection, "Command rejected");
    ctx.events.push(SimEvent::CommandRejected {
        reason: rejection.to_string(),
    });
}
