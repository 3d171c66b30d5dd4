//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::UnitId;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A minion wave entered the lane.
    WaveSpawned { team: Team, count: u32 },
    /// Mitigated damage landed on a unit.
    DamageDealt {
        source: UnitId,
        target: UnitId,
        amount: f64,
        damage_type: DamageType,
    },
    /// A unit died.
    UnitKilled {
        victim: UnitId,
        victim_name: String,
        victim_kind: UnitKind,
        killer: UnitId,
        /// Gold paid to the player for the kill (0 when the player was not the killer).
        bounty: u32,
    },
    /// A champion came back at its base.
    UnitRespawned { unit: UnitId, name: String },
    RecallStarted { unit: UnitId },
    RecallCompleted { unit: UnitId },
    RecallInterrupted {
        unit: UnitId,
        cause: RecallInterruption,
    },
    ItemPurchased {
        unit: UnitId,
        item_id: String,
        item_name: String,
        cost: u32,
    },
    AbilityCast {
        unit: UnitId,
        ability_id: String,
        ability_name: String,
        kind: AbilityKind,
    },
    /// Self-buff wore off and the stat was restored.
    BuffExpired { unit: UnitId, stat: BuffedStat },
    /// A player command was refused; `reason` is user-facing text.
    CommandRejected { reason: String },
    /// A click on empty ground set a walk destination.
    MoveOrdered { unit: UnitId },
    GameOver { result: GameResult },
}

impl SimEvent {
    /// User-facing text for events the player should see, `None` otherwise.
    pub fn notification_text(&self, player: UnitId) -> Option<String> {
        match self {
            SimEvent::WaveSpawned { team: Team::Order, .. } => {
                Some("Minions have spawned!".into())
            }
            SimEvent::UnitKilled {
                victim,
                victim_name,
                killer,
                bounty,
                ..
            } => {
                if *victim == player {
                    Some("You have been slain!".into())
                } else if *killer == player {
                    Some(format!("You killed {victim_name} (+{bounty} gold)"))
                } else {
                    None
                }
            }
            SimEvent::UnitRespawned { name, .. } => Some(format!("{name} has respawned!")),
            SimEvent::RecallStarted { unit } if *unit == player => Some("Recalling...".into()),
            SimEvent::RecallCompleted { unit } if *unit == player => {
                Some("Recalled to base!".into())
            }
            SimEvent::RecallInterrupted {
                unit,
                cause: RecallInterruption::Damaged,
            } if *unit == player => Some("Recall interrupted!".into()),
            SimEvent::ItemPurchased { item_name, .. } => Some(format!("Purchased {item_name}")),
            SimEvent::AbilityCast { ability_name, .. } => Some(format!("Cast {ability_name}")),
            SimEvent::CommandRejected { reason } => Some(reason.clone()),
            SimEvent::MoveOrdered { .. } => Some("Moving".into()),
            SimEvent::GameOver { result } => Some(match result {
                GameResult::Victory => "Victory!".into(),
                GameResult::Defeat => "Defeat!".into(),
            }),
            _ => None,
        }
    }
}

/// Transient text shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub text: String,
    /// Session time after which the notification is dropped (ms).
    pub expires_at_ms: f64,
}
