//! Gold income and the item shop.

use lanewar_core::catalog::{Item, StatDelta};
use lanewar_core::components::{Progression, Stats, StatBuff};
use lanewar_core::constants::{MAX_ITEMS, PASSIVE_GOLD};
use lanewar_core::enums::BuffedStat;
use lanewar_core::error::CommandRejection;
use lanewar_core::events::SimEvent;
use lanewar_core::types::UnitId;

use super::TickContext;
use crate::store::EntityStore;

/// Add gold to a unit's wallet.
pub fn credit(store: &mut EntityStore, unit: UnitId, amount: u32) {
    store.update(unit, |p: &mut Progression| {
        p.gold = p.gold.saturating_add(amount);
    });
}

/// Passive income tick for the player.
pub fn grant_passive_income(store: &mut EntityStore, player: UnitId) {
    credit(store, player, PASSIVE_GOLD);
}

/// Buy an item for `unit`. Gold is checked before inventory space; on
/// rejection nothing changes. A dead buyer only gains pool maxima; the
/// pools refill on respawn.
pub fn purchase(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    unit: UnitId,
    item: &Item,
) -> Result<(), CommandRejection> {
    let progression = store
        .get::<Progression>(unit)
        .ok_or(CommandRejection::UnitDead)?;

    if progression.gold < item.cost {
        return Err(CommandRejection::InsufficientGold {
            required: item.cost,
            available: progression.gold,
        });
    }
    if progression.items.len() >= MAX_ITEMS {
        return Err(CommandRejection::InventoryFull);
    }

    let raise_pools = !store.is_dead(unit);
    store.update(unit, |p: &mut Progression| {
        p.gold -= item.cost;
        p.items.push(item.id.clone());
    });
    store.update(unit, |s: &mut Stats| apply_stat_delta(s, &item.stats, raise_pools));

    // A running attack-speed buff must restore to the bought-up value.
    if let Some(delta) = item.stats.attack_speed {
        store.update(unit, |b: &mut StatBuff| {
            if b.stat == BuffedStat::AttackSpeed {
                b.original += delta;
            }
        });
    }

    tracing::debug!(unit = %unit, item = %item.id, cost = item.cost, "Item purchased");
    ctx.events.push(SimEvent::ItemPurchased {
        unit,
        item_id: item.id.clone(),
        item_name: item.name.clone(),
        cost: item.cost,
    });
    Ok(())
}

/// Add every populated delta to the live stats. With `raise_pools`, pool
/// maxima raise the current pool by the same amount.
pub fn apply_stat_delta(stats: &mut Stats, delta: &StatDelta, raise_pools: bool) {
    if let Some(v) = delta.max_health {
        stats.max_health += v;
        if raise_pools {
            stats.health += v;
        }
    }
    if let Some(v) = delta.max_mana {
        stats.max_mana += v;
        if raise_pools {
            stats.mana += v;
        }
    }
    if let Some(v) = delta.attack_damage {
        stats.attack_damage += v;
    }
    if let Some(v) = delta.ability_power {
        stats.ability_power += v;
    }
    if let Some(v) = delta.armor {
        stats.armor += v;
    }
    if let Some(v) = delta.magic_resist {
        stats.magic_resist += v;
    }
    if let Some(v) = delta.move_speed {
        stats.move_speed += v;
    }
    if let Some(v) = delta.attack_speed {
        stats.attack_speed += v;
    }
    stats.clamp_pools();
}
