//! Target acquisition and the move-or-attack decision.
//!
//! No ECS dependency: callers pass a roster of `Sighting`s in store order
//! (spawn order), which is also the tie-break order for equal distances.

use lanewar_core::constants::*;
use lanewar_core::enums::{Team, UnitKind};
use lanewar_core::types::{Position, UnitId};

/// What one unit can see of another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub id: UnitId,
    pub team: Team,
    pub kind: UnitKind,
    pub position: Position,
    pub alive: bool,
}

/// What a unit should do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Target is within attack range.
    Attack(UnitId),
    /// Walk straight at the target.
    Chase { target: UnitId, toward: Position },
    /// No target: walk down-lane toward this point.
    Advance(Position),
    /// Structures with nothing in range.
    Hold,
}

/// Result of one AI evaluation: the target to remember and the action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiOutcome {
    pub target: Option<UnitId>,
    pub decision: Decision,
}

/// Input to the AI for a single unit.
pub struct AiContext<'a> {
    pub me: Sighting,
    pub attack_range: f64,
    pub current_target: Option<UnitId>,
    /// Every unit in store order, including `me`.
    pub roster: &'a [Sighting],
}

pub fn aggro_radius(kind: UnitKind) -> f64 {
    match kind {
        UnitKind::Turret => TURRET_AGGRO_RADIUS,
        UnitKind::Champion | UnitKind::Minion | UnitKind::Nexus => DEFAULT_AGGRO_RADIUS,
    }
}

/// Closest living enemy strictly inside the aggro radius. The first one in
/// roster order wins a tie.
pub fn acquire_target(me: &Sighting, roster: &[Sighting]) -> Option<UnitId> {
    let aggro = aggro_radius(me.kind);
    let mut closest: Option<(f64, UnitId)> = None;

    for other in roster {
        if other.team == me.team || !other.alive {
            continue;
        }
        let dist = me.position.distance_to(&other.position);
        if dist >= aggro {
            continue;
        }
        if closest.map_or(true, |(best, _)| dist < best) {
            closest = Some((dist, other.id));
        }
    }

    closest.map(|(_, id)| id)
}

/// Where a unit without a target walks: the enemy nexus, or the far end of
/// the lane if there is none.
pub fn advance_point(team: Team, roster: &[Sighting]) -> Position {
    roster
        .iter()
        .find(|s| s.kind == UnitKind::Nexus && s.team != team)
        .map(|s| s.position)
        .unwrap_or_else(|| {
            let x = match team {
                Team::Order => MAP_WIDTH,
                Team::Chaos => 0.0,
            };
            Position::new(x, LANE_Y)
        })
}

/// Move into range of `target`, then attack. `None` when the target is dead
/// or no longer on the roster.
pub fn pursue(
    me: &Sighting,
    attack_range: f64,
    target: UnitId,
    roster: &[Sighting],
) -> Option<Decision> {
    let target = roster.iter().find(|s| s.id == target && s.alive)?;
    let dist = me.position.distance_to(&target.position);
    if dist <= attack_range {
        Some(Decision::Attack(target.id))
    } else if me.kind.is_structure() {
        Some(Decision::Hold)
    } else {
        Some(Decision::Chase {
            target: target.id,
            toward: target.position,
        })
    }
}

/// Full AI evaluation for a non-player unit.
///
/// Units without a target scan for one; turrets rescan every tick. A lost
/// target is cleared and mobile units fall back to advancing down-lane.
pub fn evaluate(ctx: &AiContext<'_>) -> AiOutcome {
    let me = &ctx.me;

    let target = if ctx.current_target.is_none() || me.kind == UnitKind::Turret {
        acquire_target(me, ctx.roster)
    } else {
        ctx.current_target
    };

    if let Some(target_id) = target {
        if let Some(decision) = pursue(me, ctx.attack_range, target_id, ctx.roster) {
            return AiOutcome {
                target: Some(target_id),
                decision,
            };
        }
    }

    AiOutcome {
        target: None,
        decision: idle_decision(me, ctx.roster),
    }
}

fn idle_decision(me: &Sighting, roster: &[Sighting]) -> Decision {
    if me.kind.is_structure() {
        Decision::Hold
    } else {
        Decision::Advance(advance_point(me.team, roster))
    }
}
