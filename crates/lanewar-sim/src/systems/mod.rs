//! Systems that operate on the Entity Store each tick.
//!
//! Systems are free functions over `&mut EntityStore`. They do not own
//! state; per-tick inputs and the event buffer travel in `TickContext`.

pub mod abilities;
pub mod cleanup;
pub mod combat;
pub mod economy;
pub mod movement;
pub mod projectiles;
pub mod recall;
pub mod snapshot;
pub mod units;
pub mod wave_spawner;

use lanewar_core::events::SimEvent;
use lanewar_core::types::UnitId;

/// Per-tick inputs shared by all systems.
#[derive(Debug)]
pub struct TickContext {
    /// Session clock (ms).
    pub now_ms: f64,
    /// Time since the previous tick (ms).
    pub dt_ms: f64,
    /// The player-controlled unit (bounties, notifications).
    pub player: UnitId,
    pub events: Vec<SimEvent>,
}

impl TickContext {
    pub fn new(now_ms: f64, dt_ms: f64, player: UnitId) -> Self {
        Self {
            now_ms,
            dt_ms,
            player,
            events: Vec::new(),
        }
    }
}
