//! Recall channel side effects: events, teleport, pool restore.

use lanewar_ai::recall::{self, RecallStep};
use lanewar_core::components::{
    CombatState, Lifecycle, PlayerControlled, RecallChannel, Stats, UnitInfo,
};
use lanewar_core::enums::{RecallInterruption, RecallPhase};
use lanewar_core::error::CommandRejection;
use lanewar_core::events::SimEvent;
use lanewar_core::types::{Position, UnitId};

use super::TickContext;
use crate::store::EntityStore;
use crate::world_setup;

/// Begin channeling. Clears the attack target and any walk order.
pub fn start(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    unit: UnitId,
) -> Result<(), CommandRejection> {
    let is_dead = store.get::<Lifecycle>(unit).map_or(true, |l| l.is_dead);
    let phase = store
        .get::<RecallChannel>(unit)
        .map(|r| r.phase)
        .unwrap_or_default();

    let phase = recall::begin(phase, is_dead)?;
    store.update(unit, |r: &mut RecallChannel| r.phase = phase);
    store.update(unit, |c: &mut CombatState| c.target = None);
    store.update(unit, |p: &mut PlayerControlled| p.move_to = None);

    tracing::debug!(unit = %unit, "Recall started");
    ctx.events.push(SimEvent::RecallStarted { unit });
    Ok(())
}

/// Cancel an active channel. No-op when the unit is not recalling.
pub fn interrupt(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    unit: UnitId,
    cause: RecallInterruption,
) {
    let interrupted = store
        .update(unit, |r: &mut RecallChannel| recall::interrupt(&mut r.phase))
        .unwrap_or(false);
    if interrupted {
        tracing::debug!(unit = %unit, ?cause, "Recall interrupted");
        ctx.events.push(SimEvent::RecallInterrupted { unit, cause });
    }
}

/// Advance a channel by one tick. Returns `true` while the unit is busy
/// channeling (including the tick it completes).
pub fn run_channel(store: &mut EntityStore, ctx: &mut TickContext, unit: UnitId) -> bool {
    let Some(channel) = store.get::<RecallChannel>(unit) else {
        return false;
    };

    match recall::advance(channel.phase, ctx.dt_ms) {
        RecallStep::Idle => false,
        RecallStep::Channeling(phase) => {
            store.update(unit, |r: &mut RecallChannel| r.phase = phase);
            true
        }
        RecallStep::Completed => {
            store.update(unit, |r: &mut RecallChannel| r.phase = RecallPhase::Idle);
            if let Some(info) = store.get::<UnitInfo>(unit) {
                let home = world_setup::base_anchor(info.team);
                store.update(unit, |p: &mut Position| *p = home);
            }
            store.update(unit, |s: &mut Stats| s.restore_pools());

            tracing::debug!(unit = %unit, "Recall completed");
            ctx.events.push(SimEvent::RecallCompleted { unit });
            true
        }
    }
}
