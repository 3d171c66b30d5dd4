//! Per-unit update: buffs, respawn, recall, mana, then AI or player orders.
//!
//! Units are processed one at a time in store order. Each unit sees the
//! effects of every unit processed before it in the same tick.

use lanewar_ai::targeting::{self, AiContext, Decision, Sighting};
use lanewar_core::components::*;
use lanewar_core::constants::MANA_REGEN_PER_TICK;
use lanewar_core::enums::RecallInterruption;
use lanewar_core::events::SimEvent;
use lanewar_core::types::{Position, UnitId};

use super::{abilities, combat, movement, recall, TickContext};
use crate::store::EntityStore;
use crate::world_setup;

pub fn run(store: &mut EntityStore, ctx: &mut TickContext) {
    for id in store.unit_ids() {
        update_unit(store, ctx, id);
    }
}

fn update_unit(store: &mut EntityStore, ctx: &mut TickContext, id: UnitId) {
    if !store.contains(id) {
        return;
    }
    abilities::expire_buffs(store, ctx, id);

    if store.is_dead(id) {
        recall::interrupt(store, ctx, id, RecallInterruption::Died);
        respawn_countdown(store, ctx, id);
        return;
    }

    if recall::run_channel(store, ctx, id) {
        return;
    }

    store.update(id, |s: &mut Stats| {
        s.mana += MANA_REGEN_PER_TICK;
        s.clamp_pools();
    });

    if store.has::<PlayerControlled>(id) {
        player_step(store, ctx, id);
    } else {
        ai_step(store, ctx, id);
    }
}

fn respawn_countdown(store: &mut EntityStore, ctx: &mut TickContext, id: UnitId) {
    let Some(info) = store.get::<UnitInfo>(id) else {
        return;
    };
    if !info.kind.respawns() {
        return;
    }
    let ready = store
        .update(id, |l: &mut Lifecycle| {
            if l.respawn_ms <= 0.0 {
                return false;
            }
            l.respawn_ms -= ctx.dt_ms;
            if l.respawn_ms <= 0.0 {
                l.respawn_ms = 0.0;
                l.is_dead = false;
                true
            } else {
                false
            }
        })
        .unwrap_or(false);
    if !ready {
        return;
    }

    let home = world_setup::base_anchor(info.team);
    store.update(id, |p: &mut Position| *p = home);
    store.update(id, |s: &mut Stats| s.restore_pools());
    store.update(id, |c: &mut CombatState| c.target = None);

    tracing::info!(unit = %id, name = %info.name, "Champion respawned");
    ctx.events.push(SimEvent::UnitRespawned {
        unit: id,
        name: info.name,
    });
}

fn sighting(roster: &[Sighting], id: UnitId) -> Option<Sighting> {
    roster.iter().find(|s| s.id == id).copied()
}

fn ai_step(store: &mut EntityStore, ctx: &mut TickContext, id: UnitId) {
    let roster = store.roster();
    let (Some(me), Some(stats), Some(combat)) = (
        sighting(&roster, id),
        store.get::<Stats>(id),
        store.get::<CombatState>(id),
    ) else {
        return;
    };

    let outcome = targeting::evaluate(&AiContext {
        me,
        attack_range: stats.attack_range,
        current_target: combat.target,
        roster: &roster,
    });
    store.update(id, |c: &mut CombatState| c.target = outcome.target);
    act(store, ctx, id, outcome.decision);
}

/// The player only attacks what they clicked; with no target they walk to
/// their move order.
fn player_step(store: &mut EntityStore, ctx: &mut TickContext, id: UnitId) {
    let Some(target) = store.get::<CombatState>(id).and_then(|c| c.target) else {
        movement::follow_move_order(store, id, ctx.dt_ms);
        return;
    };

    let roster = store.roster();
    let (Some(me), Some(stats)) = (sighting(&roster, id), store.get::<Stats>(id)) else {
        return;
    };

    match targeting::pursue(&me, stats.attack_range, target, &roster) {
        Some(decision) => act(store, ctx, id, decision),
        None => {
            store.update(id, |c: &mut CombatState| c.target = None);
        }
    }
}

fn act(store: &mut EntityStore, ctx: &mut TickContext, id: UnitId, decision: Decision) {
    match decision {
        Decision::Attack(target) => {
            combat::try_attack(store, ctx, id, target);
        }
        Decision::Chase { toward, .. } | Decision::Advance(toward) => {
            movement::move_towards(store, id, toward, ctx.dt_ms);
        }
        Decision::Hold => {}
    }
}
