//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and applied at the start of the next tick's
//! per-unit processing.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Click on the map: attack the enemy under the point, or walk to it.
    MoveOrAttack { point: Position },
    /// Start channeling a recall to base.
    Recall,
    /// Cast one of the player champion's abilities.
    Cast { ability_id: String },
    /// Buy an item from the shop.
    Purchase { item_id: String },
}
