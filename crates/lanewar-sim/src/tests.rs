//! Tests for the session controller, combat, recall, economy and abilities.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lanewar_core::commands::PlayerCommand;
use lanewar_core::components::*;
use lanewar_core::constants::*;
use lanewar_core::enums::*;
use lanewar_core::error::SessionError;
use lanewar_core::events::SimEvent;
use lanewar_core::types::{Position, UnitId};

use crate::engine::{SimConfig, SimulationEngine};
use crate::store::{EntityStore, ProjectileSpawn, UnitSpawn};
use crate::systems::wave_spawner::{self, WaveSchedule};
use crate::systems::{combat, projectiles, TickContext};
use crate::world_setup;

const STEP: f64 = 100.0;

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default()).unwrap()
}

fn engine_with(player_champion: usize) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        player_champion,
        ..Default::default()
    })
    .unwrap()
}

/// Engine with both enemy champions removed, so nothing reaches the
/// player's base for a while.
fn quiet_engine(player_champion: usize) -> SimulationEngine {
    let mut engine = engine_with(player_champion);
    for id in [UnitId(2), UnitId(3)] {
        engine.store_mut().despawn_unit(id);
    }
    engine
}

fn step(engine: &mut SimulationEngine) {
    let now = engine.time().elapsed_ms + STEP;
    engine.tick(STEP, now);
}

fn steps(engine: &mut SimulationEngine, n: usize) {
    for _ in 0..n {
        step(engine);
    }
}

fn target_dummy(armor: f64, health: f64) -> Stats {
    Stats {
        max_health: health,
        health,
        armor,
        ..Default::default()
    }
}

fn rejections(engine: &SimulationEngine) -> Vec<String> {
    engine
        .snapshot()
        .events
        .into_iter()
        .filter_map(|e| match e {
            SimEvent::CommandRejected { reason } => Some(reason),
            _ => None,
        })
        .collect()
}

fn player_stats(engine: &SimulationEngine) -> Stats {
    engine.store().get::<Stats>(engine.player_id()).unwrap()
}

// ---- Setup ----

#[test]
fn test_initial_roster() {
    let engine = engine();
    let snap = engine.snapshot();

    assert_eq!(snap.units.len(), 8);
    assert_eq!(snap.count(UnitKind::Champion, Team::Order), 2);
    assert_eq!(snap.count(UnitKind::Champion, Team::Chaos), 2);
    assert_eq!(snap.count(UnitKind::Turret, Team::Order), 1);
    assert_eq!(snap.count(UnitKind::Nexus, Team::Chaos), 1);
    assert_eq!(snap.player_gold, STARTING_GOLD);

    let player = snap.player().unwrap();
    assert_eq!(player.name, "Warden");
    assert!(player.player_controlled);
    assert_eq!(player.position, Position::new(100.0, LANE_Y));

    assert_eq!(snap.unit(UnitId(1)).unwrap().name, "Lumina");
    assert_eq!(snap.unit(UnitId(2)).unwrap().name, "Frostbow");
    assert_eq!(snap.unit(UnitId(3)).unwrap().name, "Shade");
    assert_eq!(snap.camera_x, 0.0);
}

#[test]
fn test_unknown_champion_is_an_error() {
    let result = SimulationEngine::new(SimConfig {
        player_champion: 9,
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(SessionError::UnknownChampion {
            index: 9,
            available: 4
        })
    ));
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config.clone()).unwrap();
    let mut engine_b = SimulationEngine::new(config).unwrap();

    for i in 0..600 {
        let now = (i + 1) as f64 * FRAME_MS;
        engine_a.tick(FRAME_MS, now);
        engine_b.tick(FRAME_MS, now);

        let json_a = serde_json::to_string(&engine_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&engine_b.snapshot()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_different_seeds_jitter_minions_differently() {
    let minion_xs = |seed| {
        let mut engine = SimulationEngine::new(SimConfig {
            seed,
            ..Default::default()
        })
        .unwrap();
        engine.tick(FRAME_MS, FRAME_MS);
        engine
            .snapshot()
            .units
            .iter()
            .filter(|u| u.kind == UnitKind::Minion)
            .map(|u| u.position.x)
            .collect::<Vec<_>>()
    };
    assert_ne!(minion_xs(111), minion_xs(222));
}

// ---- Minion waves ----

#[test]
fn test_three_minions_per_team_every_wave() {
    let mut store = EntityStore::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut schedule = WaveSchedule::default();

    let minions = |store: &EntityStore, team: Team| {
        store
            .roster()
            .iter()
            .filter(|s| s.kind == UnitKind::Minion && s.team == team)
            .count()
    };

    let mut counts = Vec::new();
    for tick in 1..=900u32 {
        let now = tick as f64 * STEP;
        let mut ctx = TickContext::new(now, STEP, UnitId(0));
        wave_spawner::run(&mut store, &mut rng, &mut schedule, &mut ctx);
        if matches!(tick, 1 | 300 | 301 | 600 | 601 | 900) {
            counts.push((minions(&store, Team::Order), minions(&store, Team::Chaos)));
        }
    }
    assert_eq!(counts, vec![(3, 3), (3, 3), (6, 6), (6, 6), (9, 9), (9, 9)]);
}

#[test]
fn test_wave_layout() {
    let mut store = EntityStore::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    world_setup::spawn_minion_wave(&mut store, &mut rng, Team::Chaos);

    let roster = store.roster();
    let ys: Vec<f64> = roster.iter().map(|s| s.position.y).collect();
    assert_eq!(ys, vec![LANE_Y - 30.0, LANE_Y, LANE_Y + 30.0]);
    for s in &roster {
        assert!(s.position.x >= MAP_WIDTH - 100.0);
        assert!(s.position.x < MAP_WIDTH - 100.0 + MINION_SPAWN_JITTER);
    }
}

// ---- Economy ----

#[test]
fn test_passive_gold() {
    let mut engine = engine();
    step(&mut engine);
    assert_eq!(engine.player_gold(), STARTING_GOLD + PASSIVE_GOLD);
    steps(&mut engine, 9);
    assert_eq!(engine.time().elapsed_ms, 1000.0);
    assert_eq!(engine.player_gold(), STARTING_GOLD + PASSIVE_GOLD);
    step(&mut engine);
    assert_eq!(engine.player_gold(), STARTING_GOLD + 2 * PASSIVE_GOLD);
}

#[test]
fn test_purchase_rejected_without_gold() {
    let mut engine = engine();
    step(&mut engine);
    engine.set_player_gold(100);
    engine.issue_purchase("long_sword");
    step(&mut engine);

    assert_eq!(engine.player_gold(), 100);
    assert!(engine.snapshot().player().unwrap().items.is_empty());
    assert_eq!(rejections(&engine), vec!["Not enough gold (100/350)".to_string()]);
}

#[test]
fn test_inventory_caps_at_six_items() {
    let mut engine = engine();
    step(&mut engine);
    engine.set_player_gold(10_000);
    let base_speed = player_stats(&engine).move_speed;
    let boots = engine.catalog().item("boots").unwrap().clone();

    engine.queue_commands(
        std::iter::repeat_with(|| PlayerCommand::Purchase {
            item_id: boots.id.clone(),
        })
        .take(7),
    );
    step(&mut engine);

    let player = engine.snapshot().player().unwrap().clone();
    assert_eq!(player.items.len(), MAX_ITEMS);
    assert_eq!(engine.player_gold(), 10_000 - 6 * boots.cost);
    assert_eq!(
        player.stats.move_speed,
        base_speed + 6.0 * boots.stats.move_speed.unwrap()
    );
    assert_eq!(rejections(&engine), vec!["Inventory is full".to_string()]);
}

#[test]
fn test_health_item_heals_by_its_bonus() {
    let mut engine = engine();
    step(&mut engine);
    engine.apply_damage(engine.player_id(), 500.0, UnitId(2));
    let before = player_stats(&engine);

    engine.issue_purchase("ruby_crystal");
    step(&mut engine);

    let after = player_stats(&engine);
    assert_eq!(after.max_health, before.max_health + 150.0);
    assert_eq!(after.health, before.health + 150.0);
}

#[test]
fn test_dead_buyer_gains_health_item_on_respawn() {
    let mut engine = quiet_engine(0);
    let player = engine.player_id();
    let base_max = player_stats(&engine).max_health;
    engine.apply_damage(player, 1_000_000.0, UnitId(2));
    step(&mut engine);

    engine.set_player_gold(1_000);
    engine.issue_purchase("ruby_crystal");
    step(&mut engine);

    let dead = player_stats(&engine);
    assert!(engine.store().is_dead(player));
    assert_eq!(dead.health, 0.0);
    assert_eq!(dead.max_health, base_max + 150.0);
    assert_eq!(
        engine.snapshot().player().unwrap().items,
        vec!["ruby_crystal".to_string()]
    );

    steps(&mut engine, 98);
    assert!(!engine.store().is_dead(player));
    let alive = player_stats(&engine);
    assert_eq!(alive.max_health, base_max + 150.0);
    assert_eq!(alive.health, alive.max_health);
}

#[test]
fn test_unknown_item_rejected() {
    let mut engine = engine();
    step(&mut engine);
    engine.issue_purchase("infinity_edge");
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["Unknown item: infinity_edge".to_string()]);
}

// ---- Combat ----

#[test]
fn test_armor_halves_damage_at_100() {
    let mut engine = engine();
    let dummy = engine.spawn_test_unit(
        UnitKind::Minion,
        Team::Chaos,
        Position::new(1000.0, 100.0),
        target_dummy(100.0, 1000.0),
    );
    assert_eq!(engine.apply_damage(dummy, 100.0, UnitId(1)), Some(50.0));
    assert_eq!(engine.store().get::<Stats>(dummy).unwrap().health, 950.0);
}

#[test]
fn test_zero_armor_takes_full_damage() {
    let mut engine = engine();
    let champion = engine.spawn_test_unit(
        UnitKind::Champion,
        Team::Chaos,
        Position::new(1000.0, 100.0),
        target_dummy(0.0, 1000.0),
    );
    engine.apply_damage(champion, 120.0, UnitId(1));
    assert_eq!(engine.store().get::<Stats>(champion).unwrap().health, 880.0);
}

#[test]
fn test_player_kill_bounties() {
    let mut engine = engine();
    let player = engine.player_id();
    let gold = engine.player_gold();

    let minion = engine.spawn_test_unit(
        UnitKind::Minion,
        Team::Chaos,
        Position::new(1000.0, 100.0),
        target_dummy(0.0, 10.0),
    );
    engine.apply_damage(minion, 1000.0, player);
    assert_eq!(engine.player_gold(), gold + 20);

    let champion = engine.spawn_test_unit(
        UnitKind::Champion,
        Team::Chaos,
        Position::new(1000.0, 200.0),
        target_dummy(0.0, 10.0),
    );
    engine.apply_damage(champion, 1000.0, player);
    assert_eq!(engine.player_gold(), gold + 320);

    // Kills by anyone else pay nothing.
    let other = engine.spawn_test_unit(
        UnitKind::Minion,
        Team::Chaos,
        Position::new(1000.0, 300.0),
        target_dummy(0.0, 10.0),
    );
    engine.apply_damage(other, 1000.0, UnitId(1));
    assert_eq!(engine.player_gold(), gold + 320);
}

#[test]
fn test_killed_unit_state() {
    let mut engine = engine();
    let enemy = UnitId(2);
    engine
        .store_mut()
        .update(enemy, |c: &mut CombatState| c.target = Some(UnitId(0)));

    engine.apply_damage(enemy, 1_000_000.0, UnitId(0));

    let store = engine.store();
    assert_eq!(store.get::<Stats>(enemy).unwrap().health, 0.0);
    assert_eq!(store.get::<CombatState>(enemy).unwrap().target, None);
    let life = store.get::<Lifecycle>(enemy).unwrap();
    assert!(life.is_dead);
    assert_eq!(life.respawn_ms, RESPAWN_MS);

    // Dead units take no further damage.
    assert_eq!(engine.apply_damage(enemy, 10.0, UnitId(0)), None);
}

#[test]
fn test_dead_minions_are_removed_but_champions_stay() {
    let mut engine = engine();
    let minion = engine.spawn_test_unit(
        UnitKind::Minion,
        Team::Chaos,
        Position::new(1000.0, 100.0),
        target_dummy(0.0, 10.0),
    );
    engine.apply_damage(minion, 100.0, UnitId(1));
    engine.apply_damage(UnitId(3), 1_000_000.0, UnitId(1));
    step(&mut engine);

    assert!(!engine.store().contains(minion));
    assert!(engine.store().contains(UnitId(3)));
}

#[test]
fn test_champion_respawns_at_base() {
    let mut engine = engine();
    let player = engine.player_id();
    engine
        .store_mut()
        .update(player, |p: &mut Position| *p = Position::new(800.0, LANE_Y));
    engine.apply_damage(player, 1_000_000.0, UnitId(2));

    steps(&mut engine, 99);
    assert!(engine.store().is_dead(player));

    step(&mut engine);
    let view = engine.snapshot().player().unwrap().clone();
    assert!(!view.is_dead);
    assert_eq!(view.position, world_setup::base_anchor(Team::Order));
    assert_eq!(view.stats.health, view.stats.max_health);
    assert!(engine
        .snapshot()
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::UnitRespawned { unit, .. } if *unit == player)));
}

// ---- Projectiles ----

fn bare_unit(store: &mut EntityStore, team: Team, position: Position) -> UnitId {
    store.spawn_unit(UnitSpawn {
        name: "Dummy".into(),
        kind: UnitKind::Minion,
        team,
        role: None,
        position,
        stats: target_dummy(0.0, 400.0),
        abilities: Vec::new(),
        player_controlled: false,
    })
}

fn fly(store: &mut EntityStore, ticks: usize) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for i in 0..ticks {
        let mut ctx = TickContext::new((i + 1) as f64 * STEP, STEP, UnitId(99));
        projectiles::run(store, &mut ctx);
        events.append(&mut ctx.events);
    }
    events
}

#[test]
fn test_homing_projectile_hits_once() {
    let mut store = EntityStore::new();
    let target = bare_unit(&mut store, Team::Chaos, Position::new(500.0, 0.0));
    store.spawn_projectile(ProjectileSpawn {
        owner: UnitId(99),
        team: Team::Order,
        origin: Position::new(0.0, 0.0),
        guidance: Guidance::Homing {
            target,
            fallback: Position::new(500.0, 0.0),
        },
        speed: AUTO_PROJECTILE_SPEED,
        damage: 50.0,
        radius: AUTO_PROJECTILE_RADIUS,
        kind: ProjectileKind::Auto,
    });

    let events = fly(&mut store, 20);
    let hits = events
        .iter()
        .filter(|e| matches!(e, SimEvent::DamageDealt { .. }))
        .count();
    assert_eq!(hits, 1);
    assert_eq!(store.projectile_count(), 0);
    assert_eq!(store.get::<Stats>(target).unwrap().health, 350.0);
}

#[test]
fn test_homing_projectile_without_target_fizzles() {
    let mut store = EntityStore::new();
    let target = bare_unit(&mut store, Team::Chaos, Position::new(500.0, 0.0));
    store.spawn_projectile(ProjectileSpawn {
        owner: UnitId(99),
        team: Team::Order,
        origin: Position::new(0.0, 0.0),
        guidance: Guidance::Homing {
            target,
            fallback: Position::new(500.0, 0.0),
        },
        speed: AUTO_PROJECTILE_SPEED,
        damage: 50.0,
        radius: AUTO_PROJECTILE_RADIUS,
        kind: ProjectileKind::Auto,
    });
    fly(&mut store, 2);
    store.despawn_unit(target);

    let events = fly(&mut store, 20);
    assert!(events.is_empty());
    assert_eq!(store.projectile_count(), 0);
}

#[test]
fn test_skillshot_hits_first_enemy_only() {
    let mut store = EntityStore::new();
    let ally = bare_unit(&mut store, Team::Order, Position::new(400.0, 0.0));
    let first = bare_unit(&mut store, Team::Chaos, Position::new(405.0, 10.0));
    let second = bare_unit(&mut store, Team::Chaos, Position::new(395.0, -10.0));
    store.spawn_projectile(ProjectileSpawn {
        owner: UnitId(99),
        team: Team::Order,
        origin: Position::new(0.0, 0.0),
        guidance: Guidance::Fixed(Position::new(400.0, 0.0)),
        speed: SKILLSHOT_SPEED,
        damage: 100.0,
        radius: SKILLSHOT_RADIUS,
        kind: ProjectileKind::Ability,
    });

    fly(&mut store, 5);
    assert_eq!(store.projectile_count(), 0);
    assert_eq!(store.get::<Stats>(ally).unwrap().health, 400.0);
    assert_eq!(store.get::<Stats>(first).unwrap().health, 300.0);
    assert_eq!(store.get::<Stats>(second).unwrap().health, 400.0);
}

#[test]
fn test_ranged_attack_fires_projectile_and_melee_hits_instantly() {
    let mut store = EntityStore::new();
    let target = bare_unit(&mut store, Team::Chaos, Position::new(100.0, 0.0));
    let ranged = store.spawn_unit(UnitSpawn {
        name: "Archer".into(),
        kind: UnitKind::Champion,
        team: Team::Order,
        role: None,
        position: Position::new(0.0, 0.0),
        stats: Stats {
            max_health: 100.0,
            health: 100.0,
            attack_damage: 30.0,
            attack_range: 500.0,
            attack_speed: 1.0,
            ..Default::default()
        },
        abilities: Vec::new(),
        player_controlled: false,
    });

    let mut ctx = TickContext::new(0.0, STEP, UnitId(99));
    assert!(combat::try_attack(&mut store, &mut ctx, ranged, target));
    assert_eq!(store.projectile_count(), 1);
    // Gated by the attack interval.
    let mut ctx = TickContext::new(500.0, STEP, UnitId(99));
    assert!(!combat::try_attack(&mut store, &mut ctx, ranged, target));
    let mut ctx = TickContext::new(1000.0, STEP, UnitId(99));
    assert!(combat::try_attack(&mut store, &mut ctx, ranged, target));

    store.update(ranged, |s: &mut Stats| s.attack_range = 100.0);
    let mut ctx = TickContext::new(2000.0, STEP, UnitId(99));
    assert!(combat::try_attack(&mut store, &mut ctx, ranged, target));
    assert_eq!(store.projectile_count(), 2);
    assert_eq!(store.get::<Stats>(target).unwrap().health, 370.0);
}

// ---- Recall ----

#[test]
fn test_recall_completes_after_full_channel() {
    let mut engine = quiet_engine(0);
    let player = engine.player_id();
    step(&mut engine);
    engine
        .store_mut()
        .update(player, |p: &mut Position| *p = Position::new(400.0, LANE_Y + 400.0));
    engine.apply_damage(player, 500.0, UnitId(2));
    assert!(player_stats(&engine).health < player_stats(&engine).max_health);

    engine.issue_recall();
    steps(&mut engine, 39);
    let view = engine.snapshot().player().unwrap().clone();
    assert_eq!(view.recall_remaining_ms, Some(100.0));
    assert_eq!(view.position, Position::new(400.0, LANE_Y + 400.0));

    step(&mut engine);
    let view = engine.snapshot().player().unwrap().clone();
    assert_eq!(view.recall_remaining_ms, None);
    assert_eq!(view.position, world_setup::base_anchor(Team::Order));
    assert_eq!(view.stats.health, view.stats.max_health);
    assert!(engine
        .snapshot()
        .events
        .contains(&SimEvent::RecallCompleted { unit: player }));
}

#[test]
fn test_damage_resets_recall_without_moving() {
    let mut engine = quiet_engine(0);
    let player = engine.player_id();
    step(&mut engine);
    engine.issue_recall();
    steps(&mut engine, 10);
    let before = engine.snapshot().player().unwrap().position;

    engine.apply_damage(player, 50.0, UnitId(2));
    let view = engine.snapshot().player().unwrap().clone();
    assert_eq!(view.recall_remaining_ms, None);
    assert_eq!(view.position, before);

    step(&mut engine);
    assert!(engine.snapshot().events.contains(&SimEvent::RecallInterrupted {
        unit: player,
        cause: RecallInterruption::Damaged,
    }));
    steps(&mut engine, 40);
    assert_eq!(engine.snapshot().player().unwrap().position, before);
}

#[test]
fn test_new_command_interrupts_recall() {
    let mut engine = quiet_engine(0);
    let player = engine.player_id();
    step(&mut engine);
    engine.issue_recall();
    step(&mut engine);
    engine.issue_move_or_attack(Position::new(400.0, LANE_Y + 300.0));
    step(&mut engine);

    assert_eq!(engine.snapshot().player().unwrap().recall_remaining_ms, None);
    assert!(engine.snapshot().events.contains(&SimEvent::RecallInterrupted {
        unit: player,
        cause: RecallInterruption::NewCommand,
    }));
}

#[test]
fn test_recall_rejected_when_dead_or_recalling() {
    let mut engine = quiet_engine(0);
    step(&mut engine);
    engine.issue_recall();
    engine.issue_recall();
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["Already recalling".to_string()]);

    engine.apply_damage(engine.player_id(), 1_000_000.0, UnitId(2));
    engine.issue_recall();
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["You are dead".to_string()]);
}

// ---- Abilities ----

#[test]
fn test_self_buff_restores_exact_attack_speed() {
    let mut engine = quiet_engine(0);
    step(&mut engine);
    let original = player_stats(&engine).attack_speed;

    for _ in 0..3 {
        engine.issue_cast("q");
        step(&mut engine);
        assert_eq!(
            player_stats(&engine).attack_speed,
            original * SELF_BUFF_MULTIPLIER
        );

        steps(&mut engine, 30);
        assert_eq!(player_stats(&engine).attack_speed, original);
        // Wait out the rest of the 6s cooldown.
        steps(&mut engine, 31);
    }
}

#[test]
fn test_attack_speed_item_survives_buff_expiry() {
    let mut engine = quiet_engine(0);
    step(&mut engine);
    let original = player_stats(&engine).attack_speed;

    engine.issue_cast("q");
    step(&mut engine);
    engine.issue_purchase("dagger");
    step(&mut engine);
    steps(&mut engine, 30);

    assert_eq!(player_stats(&engine).attack_speed, original + 0.12);
}

#[test]
fn test_cast_rejections() {
    let mut engine = quiet_engine(1);
    let player = engine.player_id();
    step(&mut engine);

    engine.issue_cast("e");
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["Unknown ability: e".to_string()]);

    engine
        .store_mut()
        .update(player, |s: &mut Stats| s.mana = 10.0);
    engine.issue_cast("q");
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["Not enough mana".to_string()]);
    assert!(engine.snapshot().player().unwrap().cooldowns.is_empty());

    engine
        .store_mut()
        .update(player, |s: &mut Stats| s.mana = 800.0);
    engine.issue_cast("q");
    engine.issue_cast("q");
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["Ability is on cooldown".to_string()]);
}

#[test]
fn test_targeted_ability_bursts_selected_target() {
    let mut engine = quiet_engine(0);
    let dummy = engine.spawn_test_unit(
        UnitKind::Minion,
        Team::Chaos,
        Position::new(1150.0, 1100.0),
        target_dummy(0.0, 1000.0),
    );
    step(&mut engine);
    engine.issue_move_or_attack(Position::new(1150.0, 1100.0));
    step(&mut engine);
    assert_eq!(engine.snapshot().player().unwrap().target, Some(dummy));

    engine.issue_cast("r");
    step(&mut engine);
    assert!(engine.snapshot().events.contains(&SimEvent::DamageDealt {
        source: engine.player_id(),
        target: dummy,
        amount: TARGETED_BASE_DAMAGE,
        damage_type: DamageType::Magic,
    }));
    assert_eq!(engine.store().get::<Stats>(dummy).unwrap().health, 800.0);
}

#[test]
fn test_targeted_ability_without_target_still_costs_cooldown() {
    let mut engine = quiet_engine(0);
    step(&mut engine);
    engine.issue_cast("r");
    step(&mut engine);

    let snap = engine.snapshot();
    assert!(snap.player().unwrap().cooldowns.contains_key("r"));
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::DamageDealt { .. })));
}

#[test]
fn test_skillshot_flies_along_facing_without_target() {
    let mut engine = quiet_engine(1);
    let player = engine.player_id();
    step(&mut engine);
    engine.issue_cast("q");
    step(&mut engine);

    let snap = engine.snapshot();
    let shot = snap
        .projectiles
        .iter()
        .find(|p| p.owner == player)
        .unwrap();
    assert_eq!(shot.kind, ProjectileKind::Ability);
    assert_eq!(shot.aim, Position::new(100.0 + 900.0, LANE_Y));
    assert_eq!(shot.radius, SKILLSHOT_RADIUS);
    assert_eq!(snap.player().unwrap().cooldowns["q"], 200.0 + 8000.0);
}

// ---- Player orders ----

#[test]
fn test_click_on_ground_walks_there() {
    let mut engine = quiet_engine(0);
    step(&mut engine);
    let destination = Position::new(300.0, LANE_Y + 100.0);
    engine.issue_move_or_attack(destination);
    step(&mut engine);
    assert!(engine
        .snapshot()
        .events
        .contains(&SimEvent::MoveOrdered {
            unit: engine.player_id()
        }));

    steps(&mut engine, 20);
    let player = engine.snapshot().player().unwrap().clone();
    assert_eq!(player.position, destination);
    assert_eq!(player.target, None);
}

#[test]
fn test_move_rejected_when_dead() {
    let mut engine = engine();
    engine.apply_damage(engine.player_id(), 1_000_000.0, UnitId(2));
    engine.issue_move_or_attack(Position::new(500.0, LANE_Y));
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["You are dead".to_string()]);
}

#[test]
fn test_camera_follows_player_within_map() {
    let mut engine = engine();
    let player = engine.player_id();
    engine
        .store_mut()
        .update(player, |p: &mut Position| *p = Position::new(1500.0, LANE_Y));
    step(&mut engine);
    assert_eq!(
        engine.snapshot().camera_x,
        MAP_WIDTH - DEFAULT_VIEWPORT_WIDTH
    );

    engine
        .store_mut()
        .update(player, |p: &mut Position| *p = Position::new(1000.0, LANE_Y));
    step(&mut engine);
    assert_eq!(
        engine.snapshot().camera_x,
        1000.0 - DEFAULT_VIEWPORT_WIDTH / 2.0
    );
}

#[test]
fn test_notifications_expire() {
    let mut engine = engine();
    step(&mut engine);
    let first = engine.snapshot().notifications[0].clone();
    assert_eq!(first.text, "Minions have spawned!");
    assert_eq!(first.expires_at_ms, 100.0 + NOTIFICATION_TTL_MS);

    steps(&mut engine, 29);
    assert!(engine.snapshot().notifications.contains(&first));
    step(&mut engine);
    assert!(!engine.snapshot().notifications.contains(&first));
}

// ---- Win condition ----

#[test]
fn test_destroying_chaos_nexus_is_victory() {
    let mut engine = engine();
    step(&mut engine);
    let nexus = engine.find_unit(UnitKind::Nexus, Team::Chaos).unwrap();
    engine.apply_damage(nexus, 1_000_000.0, engine.player_id());
    assert_eq!(engine.snapshot().result, None);

    step(&mut engine);
    assert_eq!(engine.snapshot().result, Some(GameResult::Victory));

    // Terminal: no more gameplay.
    let frozen = engine.snapshot().units;
    engine.issue_recall();
    step(&mut engine);
    assert_eq!(rejections(&engine), vec!["The game is over".to_string()]);
    assert_eq!(engine.apply_damage(engine.player_id(), 100.0, UnitId(2)), None);
    step(&mut engine);
    let after = engine.snapshot().units;
    assert_eq!(
        serde_json::to_string(&frozen).unwrap(),
        serde_json::to_string(&after).unwrap()
    );
}

#[test]
fn test_destroying_order_nexus_is_defeat() {
    let mut engine = engine();
    let nexus = engine.find_unit(UnitKind::Nexus, Team::Order).unwrap();
    engine.apply_damage(nexus, 1_000_000.0, UnitId(2));
    step(&mut engine);
    assert_eq!(engine.result(), Some(GameResult::Defeat));
    assert!(engine.snapshot().events.contains(&SimEvent::GameOver {
        result: GameResult::Defeat
    }));
}

// ---- Invariants over a full session ----

#[test]
fn test_pools_and_inventory_stay_in_bounds() {
    let mut engine = engine();
    engine.issue_move_or_attack(Position::new(1200.0, LANE_Y));

    for i in 0..6000 {
        let now = (i + 1) as f64 * FRAME_MS;
        engine.tick(FRAME_MS, now);
        if i % 600 == 0 {
            engine.issue_purchase("long_sword");
            engine.issue_cast("q");
        }

        for unit in engine.snapshot().units {
            let s = unit.stats;
            assert!(s.health >= 0.0 && s.health <= s.max_health, "{unit:?}");
            assert!(s.mana >= 0.0 && s.mana <= s.max_mana, "{unit:?}");
            assert!(unit.items.len() <= MAX_ITEMS);
            if unit.is_dead {
                assert_eq!(s.health, 0.0);
                assert_eq!(unit.target, None);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_mitigation_bounded(raw in 0.0f64..10_000.0, armor in 0.0f64..1_000.0) {
        let dealt = combat::mitigate(raw, armor);
        prop_assert!(dealt >= 0.0);
        prop_assert!(dealt <= raw + 1e-9);
    }
}
