//! Recall channel state machine.
//!
//! `Idle -> Channeling -> (Completed | Interrupted)`, both exits landing back
//! in `Idle`. The caller owns the side effects (teleport, restore, events).

use lanewar_core::constants::RECALL_DURATION_MS;
use lanewar_core::enums::RecallPhase;
use lanewar_core::error::CommandRejection;

/// Outcome of advancing a channel by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecallStep {
    /// Nothing to do.
    Idle,
    /// Still channeling with the updated countdown.
    Channeling(RecallPhase),
    /// The countdown ran out: teleport home and restore pools.
    Completed,
}

/// Start a channel. Dead or already-recalling units are refused.
pub fn begin(phase: RecallPhase, is_dead: bool) -> Result<RecallPhase, CommandRejection> {
    if is_dead {
        return Err(CommandRejection::UnitDead);
    }
    if phase.is_channeling() {
        return Err(CommandRejection::AlreadyRecalling);
    }
    Ok(RecallPhase::Channeling {
        remaining_ms: RECALL_DURATION_MS,
    })
}

pub fn advance(phase: RecallPhase, dt_ms: f64) -> RecallStep {
    match phase {
        RecallPhase::Idle => RecallStep::Idle,
        RecallPhase::Channeling { remaining_ms } => {
            let remaining_ms = remaining_ms - dt_ms;
            if remaining_ms <= 0.0 {
                RecallStep::Completed
            } else {
                RecallStep::Channeling(RecallPhase::Channeling { remaining_ms })
            }
        }
    }
}

/// Cancel a channel. Returns `true` if one was active.
pub fn interrupt(phase: &mut RecallPhase) -> bool {
    let was_channeling = phase.is_channeling();
    *phase = RecallPhase::Idle;
    was_channeling
}
