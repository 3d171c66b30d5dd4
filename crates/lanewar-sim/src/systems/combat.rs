//! Combat resolver: attack-speed gating, auto attacks, damage and deaths.

use lanewar_core::components::*;
use lanewar_core::constants::*;
use lanewar_core::enums::*;
use lanewar_core::events::SimEvent;
use lanewar_core::types::{Position, UnitId};

use super::{economy, recall, TickContext};
use crate::store::{EntityStore, ProjectileSpawn};

/// Armor mitigation: `raw * 100 / (100 + armor)`.
pub fn mitigate(raw: f64, armor: f64) -> f64 {
    raw * ARMOR_MITIGATION_K / (ARMOR_MITIGATION_K + armor)
}

/// Gold the player earns for killing a unit of this kind.
pub fn bounty_for(kind: UnitKind) -> u32 {
    match kind {
        UnitKind::Champion => CHAMPION_BOUNTY,
        UnitKind::Minion | UnitKind::Turret | UnitKind::Nexus => UNIT_BOUNTY,
    }
}

/// Attack `target` if the attacker's attack-speed gate is open.
///
/// Ranged attackers fire a homing auto projectile, melee attackers hit
/// instantly. Returns `true` if an attack went out.
pub fn try_attack(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    attacker: UnitId,
    target: UnitId,
) -> bool {
    let (Some(stats), Some(combat), Some(info)) = (
        store.get::<Stats>(attacker),
        store.get::<CombatState>(attacker),
        store.get::<UnitInfo>(attacker),
    ) else {
        return false;
    };

    if let Some(last) = combat.last_attack_ms {
        if ctx.now_ms - last < stats.attack_interval_ms() {
            return false;
        }
    }
    store.update(attacker, |c: &mut CombatState| {
        c.last_attack_ms = Some(ctx.now_ms);
    });

    if stats.is_ranged() {
        let (Some(origin), Some(aim)) = (
            store.get::<Position>(attacker),
            store.get::<Position>(target),
        ) else {
            return false;
        };
        store.spawn_projectile(ProjectileSpawn {
            owner: attacker,
            team: info.team,
            origin,
            guidance: Guidance::Homing {
                target,
                fallback: aim,
            },
            speed: AUTO_PROJECTILE_SPEED,
            damage: stats.attack_damage,
            radius: AUTO_PROJECTILE_RADIUS,
            kind: ProjectileKind::Auto,
        });
    } else {
        apply_damage(
            store,
            ctx,
            target,
            stats.attack_damage,
            attacker,
            DamageType::Physical,
        );
    }
    true
}

/// Apply raw damage to a unit, handling recall interruption, death,
/// bounties and respawn timers. Returns the mitigated amount, or `None`
/// when the target is missing or already dead.
pub fn apply_damage(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    target: UnitId,
    raw: f64,
    source: UnitId,
    damage_type: DamageType,
) -> Option<f64> {
    if store.is_dead(target) {
        return None;
    }
    let stats = store.get::<Stats>(target)?;
    let info = store.get::<UnitInfo>(target)?;

    let amount = mitigate(raw, stats.armor);
    let killed = store.update(target, |s: &mut Stats| {
        s.health -= amount;
        let killed = s.health <= 0.0;
        s.clamp_pools();
        killed
    })?;

    ctx.events.push(SimEvent::DamageDealt {
        source,
        target,
        amount,
        damage_type,
    });

    let cause = if killed {
        RecallInterruption::Died
    } else {
        RecallInterruption::Damaged
    };
    recall::interrupt(store, ctx, target, cause);

    if killed {
        kill(store, ctx, target, &info, source);
    }
    Some(amount)
}

fn kill(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    victim: UnitId,
    info: &UnitInfo,
    killer: UnitId,
) {
    store.update(victim, |l: &mut Lifecycle| {
        l.is_dead = true;
        l.respawn_ms = if info.kind.respawns() { RESPAWN_MS } else { 0.0 };
    });
    store.update(victim, |s: &mut Stats| s.health = 0.0);
    store.update(victim, |c: &mut CombatState| c.target = None);
    store.update(victim, |p: &mut PlayerControlled| p.move_to = None);

    let bounty = if killer == ctx.player && victim != ctx.player {
        let bounty = bounty_for(info.kind);
        economy::credit(store, ctx.player, bounty);
        bounty
    } else {
        0
    };

    tracing::info!(
        victim = %victim,
        name = %info.name,
        kind = ?info.kind,
        killer = %killer,
        bounty,
        "Unit killed"
    );
    ctx.events.push(SimEvent::UnitKilled {
        victim,
        victim_name: info.name.clone(),
        victim_kind: info.kind,
        killer,
        bounty,
    });
}
