//! Cleanup system: removes dead minions and turrets.
//!
//! Champions wait in the store for their respawn; a dead nexus stays so the
//! win check can see it.

use lanewar_core::components::{Lifecycle, UnitInfo};
use lanewar_core::enums::UnitKind;
use lanewar_core::types::UnitId;

use crate::store::EntityStore;

/// Despawn permanently dead units. Uses a caller-owned buffer to avoid
/// per-tick allocation.
pub fn run(store: &mut EntityStore, despawn_buffer: &mut Vec<UnitId>) {
    despawn_buffer.clear();

    for (_entity, (info, life)) in store.world().query::<(&UnitInfo, &Lifecycle)>().iter() {
        if life.is_dead && matches!(info.kind, UnitKind::Minion | UnitKind::Turret) {
            despawn_buffer.push(info.id);
        }
    }

    for id in despawn_buffer.drain(..) {
        store.despawn_unit(id);
    }
}
