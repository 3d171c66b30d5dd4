//! Projectile flight and impact resolution.

use lanewar_core::components::{Guidance, Projectile};
use lanewar_core::constants::{PROJECTILE_ARRIVAL_RADIUS, SKILLSHOT_HIT_SLACK};
use lanewar_core::enums::{DamageType, ProjectileKind};
use lanewar_core::types::Position;

use super::{combat, TickContext};
use crate::store::EntityStore;

/// Where a projectile is headed this tick.
///
/// Homing projectiles follow their target while it is in the store, then
/// fly on to the point they were fired at.
pub fn aim_point(store: &EntityStore, projectile: &Projectile) -> Position {
    match projectile.guidance {
        Guidance::Homing { target, fallback } => {
            store.get::<Position>(target).unwrap_or(fallback)
        }
        Guidance::Fixed(point) => point,
    }
}

/// Advance every projectile and resolve the ones that arrived.
pub fn run(store: &mut EntityStore, ctx: &mut TickContext) {
    for id in store.projectile_ids() {
        let Some((projectile, position)) = store.projectile(id) else {
            continue;
        };
        let aim = aim_point(store, &projectile);

        let arrived = if position.distance_to(&aim) < PROJECTILE_ARRIVAL_RADIUS {
            Some(position)
        } else {
            let step = projectile.speed * ctx.dt_ms / 1000.0;
            let next = position.step_towards(&aim, step);
            store.set_projectile_position(id, next);
            (next.distance_to(&aim) < PROJECTILE_ARRIVAL_RADIUS).then_some(next)
        };

        if let Some(impact) = arrived {
            resolve_impact(store, ctx, &projectile, impact);
            store.despawn_projectile(id);
        }
    }
}

fn resolve_impact(
    store: &mut EntityStore,
    ctx: &mut TickContext,
    projectile: &Projectile,
    impact: Position,
) {
    match projectile.kind {
        ProjectileKind::Auto => {
            let Guidance::Homing { target, .. } = projectile.guidance else {
                return;
            };
            if store.contains(target) {
                tracing::trace!(
                    projectile = projectile.id.0,
                    target = %target,
                    "Auto attack landed"
                );
                combat::apply_damage(
                    store,
                    ctx,
                    target,
                    projectile.damage,
                    projectile.owner,
                    DamageType::Physical,
                );
            }
        }
        ProjectileKind::Ability => {
            let reach = projectile.radius + SKILLSHOT_HIT_SLACK;
            let hit = store
                .roster()
                .into_iter()
                .find(|s| {
                    s.alive
                        && s.team != projectile.team
                        && s.position.distance_to(&impact) < reach
                });
            if let Some(hit) = hit {
                tracing::trace!(projectile = projectile.id.0, target = %hit.id, "Skillshot hit");
                combat::apply_damage(
                    store,
                    ctx,
                    hit.id,
                    projectile.damage,
                    projectile.owner,
                    DamageType::Magic,
                );
            }
        }
    }
}
