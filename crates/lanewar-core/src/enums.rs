//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Unit archetype. The set is closed; AI, combat and cleanup match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Champion,
    Minion,
    Turret,
    Nexus,
}

impl UnitKind {
    /// Turrets and nexuses are rooted in place.
    pub fn is_structure(self) -> bool {
        matches!(self, UnitKind::Turret | UnitKind::Nexus)
    }

    /// Only champions come back after dying.
    pub fn respawns(self) -> bool {
        matches!(self, UnitKind::Champion)
    }
}

/// The two sides of the lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// The player's side, based on the left (low x) end of the lane.
    #[default]
    Order,
    /// The enemy side, based on the right (high x) end of the lane.
    Chaos,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Order => Team::Chaos,
            Team::Chaos => Team::Order,
        }
    }

    /// Unit x-direction pointing down-lane toward the enemy base.
    pub fn facing(self) -> f64 {
        match self {
            Team::Order => 1.0,
            Team::Chaos => -1.0,
        }
    }
}

/// Champion role shown in the lobby. Purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChampionRole {
    Fighter,
    Mage,
    Marksman,
    Assassin,
    Tank,
}

/// Damage taxonomy. Every type is mitigated by armor only; magic resist is
/// carried on the stats block but never consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    #[default]
    Physical,
    Magic,
    True,
}

/// Ability archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Temporary multiplicative buff on the caster.
    SelfBuff,
    /// Instant burst on the currently selected target.
    Targeted,
    /// Projectile flying to a fixed point.
    Skillshot,
}

/// Projectile archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Homing auto-attack from a ranged unit.
    Auto,
    /// Skillshot fired by an ability.
    Ability,
}

/// Stat that a timed buff modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuffedStat {
    AttackSpeed,
}

/// Recall channel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum RecallPhase {
    #[default]
    Idle,
    Channeling {
        remaining_ms: f64,
    },
}

impl RecallPhase {
    pub fn is_channeling(&self) -> bool {
        matches!(self, RecallPhase::Channeling { .. })
    }
}

/// Why a recall channel was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallInterruption {
    Damaged,
    Died,
    NewCommand,
}

/// Terminal outcome of a session, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Victory,
    Defeat,
}
