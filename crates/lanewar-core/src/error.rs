//! Error types.
//!
//! Nothing in the simulation is fatal. A rejected command leaves state
//! untouched and its `Display` text is shown to the player as a notification.

use thiserror::Error;

/// Reasons a player intent is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandRejection {
    #[error("Not enough gold ({available}/{required})")]
    InsufficientGold { required: u32, available: u32 },

    #[error("Inventory is full")]
    InventoryFull,

    #[error("Not enough mana")]
    InsufficientMana,

    #[error("Ability is on cooldown")]
    OnCooldown,

    #[error("You are dead")]
    UnitDead,

    #[error("Already recalling")]
    AlreadyRecalling,

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    #[error("The game is over")]
    SessionOver,
}

/// Failures while setting up a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No champion at lobby index {index} ({available} available)")]
    UnknownChampion { index: usize, available: usize },
}
