//! Straight-line movement.

use lanewar_core::components::{PlayerControlled, Stats};
use lanewar_core::constants::ARRIVAL_EPSILON;
use lanewar_core::types::{Position, UnitId};

use crate::store::EntityStore;

/// Step a unit toward `destination` at its move speed. Returns `true` once
/// the unit is within `ARRIVAL_EPSILON`, in which case it does not move.
pub fn move_towards(
    store: &mut EntityStore,
    unit: UnitId,
    destination: Position,
    dt_ms: f64,
) -> bool {
    let Some(speed) = store.get::<Stats>(unit).map(|s| s.move_speed) else {
        return false;
    };
    let step = speed * dt_ms / 1000.0;
    store
        .update(unit, |pos: &mut Position| {
            if pos.distance_to(&destination) < ARRIVAL_EPSILON {
                return true;
            }
            *pos = pos.step_towards(&destination, step);
            false
        })
        .unwrap_or(false)
}

/// Walk the player toward a clicked ground point, clearing it on arrival.
pub fn follow_move_order(store: &mut EntityStore, unit: UnitId, dt_ms: f64) {
    let Some(destination) = store.get::<PlayerControlled>(unit).and_then(|p| p.move_to) else {
        return;
    };
    if move_towards(store, unit, destination, dt_ms) {
        store.update(unit, |p: &mut PlayerControlled| p.move_to = None);
    }
}
