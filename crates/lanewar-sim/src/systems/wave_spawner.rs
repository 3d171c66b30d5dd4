//! Wave spawning system: one minion wave per team every 30 seconds.

use rand_chacha::ChaCha8Rng;

use lanewar_core::constants::{MINIONS_PER_WAVE, WAVE_INTERVAL_MS};
use lanewar_core::enums::Team;
use lanewar_core::events::SimEvent;
use lanewar_core::types::Deadline;

use super::TickContext;
use crate::store::EntityStore;

/// When the next wave is due. The first wave goes out on the first tick.
#[derive(Debug, Clone, Copy)]
pub struct WaveSchedule {
    pub deadline: Deadline,
    pub waves_spawned: u32,
}

impl Default for WaveSchedule {
    fn default() -> Self {
        Self {
            deadline: Deadline::new(0.0, WAVE_INTERVAL_MS),
            waves_spawned: 0,
        }
    }
}

/// Spawn a wave for both teams if the deadline has passed.
pub fn run(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    ctx: &mut TickContext,
) {
    if !schedule.deadline.poll(ctx.now_ms) {
        return;
    }
    schedule.waves_spawned += 1;

    for team in [Team::Order, Team::Chaos] {
        crate::world_setup::spawn_minion_wave(store, rng, team);
        ctx.events.push(SimEvent::WaveSpawned {
            team,
            count: MINIONS_PER_WAVE as u32,
        });
    }
    tracing::info!(
        wave = schedule.waves_spawned,
        at_ms = ctx.now_ms,
        "Minion wave spawned"
    );
}
