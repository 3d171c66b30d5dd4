//! Ability dispatcher: validation, costs, and the three archetypes.

use glam::DVec2;

use lanewar_core::catalog::Ability;
use lanewar_core::components::*;
use lanewar_core::constants::*;
use lanewar_core::enums::*;
use lanewar_core::error::CommandRejection;
use lanewar_core::events::SimEvent;
use lanewar_core::types::{Position, UnitId};

use super::{combat, TickContext};
use crate::store::{EntityStore, ProjectileSpawn};

/// Cast one of `unit`'s abilities.
///
/// Checked in order: alive, known ability, mana, cooldown. A rejected cast
/// changes nothing. A targeted cast with no live target still pays its cost.
pub fn cast(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    unit: UnitId,
    ability_id: &str,
) -> Result<(), CommandRejection> {
    if store.is_dead(unit) {
        return Err(CommandRejection::UnitDead);
    }
    let ability = store
        .get::<Loadout>(unit)
        .and_then(|l| l.abilities.into_iter().find(|a| a.id == ability_id))
        .ok_or_else(|| CommandRejection::UnknownAbility(ability_id.to_string()))?;
    let stats = store.get::<Stats>(unit).ok_or(CommandRejection::UnitDead)?;
    let progression = store
        .get::<Progression>(unit)
        .ok_or(CommandRejection::UnitDead)?;

    if stats.mana < ability.mana_cost {
        return Err(CommandRejection::InsufficientMana);
    }
    if progression
        .cooldowns
        .get(&ability.id)
        .is_some_and(|&ready_at| ready_at > ctx.now_ms)
    {
        return Err(CommandRejection::OnCooldown);
    }

    store.update(unit, |s: &mut Stats| {
        s.mana -= ability.mana_cost;
        s.clamp_pools();
    });
    store.update(unit, |p: &mut Progression| {
        p.cooldowns
            .insert(ability.id.clone(), ctx.now_ms + ability.cooldown_ms);
    });

    tracing::debug!(unit = %unit, ability = %ability.id, kind = ?ability.kind, "Ability cast");
    ctx.events.push(SimEvent::AbilityCast {
        unit,
        ability_id: ability.id.clone(),
        ability_name: ability.name.clone(),
        kind: ability.kind,
    });

    match ability.kind {
        AbilityKind::SelfBuff => self_buff(store, ctx, unit),
        AbilityKind::Targeted => targeted(store, ctx, unit),
        AbilityKind::Skillshot => skillshot(store, unit, &ability),
    }
    Ok(())
}

/// Multiply attack speed for a fixed window. Re-casting while buffed keeps
/// the pre-buff value and only extends the window.
fn self_buff(store: &mut EntityStore, ctx: &TickContext, unit: UnitId) {
    let Some(stats) = store.get::<Stats>(unit) else {
        return;
    };
    let original = store
        .get::<StatBuff>(unit)
        .filter(|b| b.stat == BuffedStat::AttackSpeed)
        .map_or(stats.attack_speed, |b| b.original);

    store.update(unit, |s: &mut Stats| {
        s.attack_speed = original * SELF_BUFF_MULTIPLIER;
    });
    store.insert(
        unit,
        StatBuff {
            stat: BuffedStat::AttackSpeed,
            original,
            expires_at_ms: ctx.now_ms + SELF_BUFF_DURATION_MS,
        },
    );
}

fn targeted(store: &mut EntityStore, ctx: &mut TickContext, unit: UnitId) {
    let Some(target) = live_target(store, unit) else {
        return;
    };
    let Some(stats) = store.get::<Stats>(unit) else {
        return;
    };
    combat::apply_damage(
        store,
        ctx,
        target,
        TARGETED_BASE_DAMAGE + stats.ability_power,
        unit,
        DamageType::Magic,
    );
}

fn skillshot(store: &mut EntityStore, unit: UnitId, ability: &Ability) {
    let (Some(info), Some(origin), Some(stats)) = (
        store.get::<UnitInfo>(unit),
        store.get::<Position>(unit),
        store.get::<Stats>(unit),
    ) else {
        return;
    };

    let aim = live_target(store, unit)
        .and_then(|t| store.get::<Position>(t))
        .unwrap_or_else(|| {
            (origin.as_vec() + DVec2::X * ability.range * info.team.facing()).into()
        });

    store.spawn_projectile(ProjectileSpawn {
        owner: unit,
        team: info.team,
        origin,
        guidance: Guidance::Fixed(aim),
        speed: SKILLSHOT_SPEED,
        damage: SKILLSHOT_BASE_DAMAGE + stats.ability_power,
        radius: SKILLSHOT_RADIUS,
        kind: ProjectileKind::Ability,
    });
}

fn live_target(store: &EntityStore, unit: UnitId) -> Option<UnitId> {
    store
        .get::<CombatState>(unit)?
        .target
        .filter(|&t| store.contains(t) && !store.is_dead(t))
}

/// Restore a buffed stat to its exact pre-buff value once the window ends.
pub fn expire_buffs(store: &mut EntityStore, ctx: &mut TickContext, unit: UnitId) {
    let Some(buff) = store.get::<StatBuff>(unit) else {
        return;
    };
    if ctx.now_ms < buff.expires_at_ms {
        return;
    }
    store.update(unit, |s: &mut Stats| match buff.stat {
        BuffedStat::AttackSpeed => s.attack_speed = buff.original,
    });
    store.remove::<StatBuff>(unit);
    ctx.events.push(SimEvent::BuffExpired {
        unit,
        stat: buff.stat,
    });
}
