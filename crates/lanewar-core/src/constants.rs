//! Simulation constants and tuning parameters.

/// Nominal frame rate of the driving loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal milliseconds per frame.
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Map ---

/// Lane length along x.
pub const MAP_WIDTH: f64 = 2000.0;

/// Map height along y.
pub const MAP_HEIGHT: f64 = 1200.0;

/// The lane runs horizontally through the middle of the map.
pub const LANE_Y: f64 = MAP_HEIGHT / 2.0;

/// Base anchor x for the order team (respawn and recall destination).
pub const ORDER_BASE_X: f64 = 50.0;

/// Base anchor x for the chaos team.
pub const CHAOS_BASE_X: f64 = MAP_WIDTH - 50.0;

/// Default presentation viewport width, used for the camera clamp.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

// --- Session timers ---

/// Interval between minion waves (ms).
pub const WAVE_INTERVAL_MS: f64 = 30_000.0;

/// Minions per team per wave.
pub const MINIONS_PER_WAVE: usize = 3;

/// Random x-jitter applied to each spawned minion.
pub const MINION_SPAWN_JITTER: f64 = 50.0;

/// Lateral spacing between minions in a wave.
pub const MINION_ROW_SPACING: f64 = 30.0;

/// Interval between passive gold grants (ms).
pub const GOLD_INTERVAL_MS: f64 = 1_000.0;

/// Gold per passive grant.
pub const PASSIVE_GOLD: u32 = 5;

/// Gold every champion starts with.
pub const STARTING_GOLD: u32 = 500;

/// Lifetime of a notification (ms).
pub const NOTIFICATION_TTL_MS: f64 = 3_000.0;

// --- AI ---

/// Aggro radius for turrets.
pub const TURRET_AGGRO_RADIUS: f64 = 800.0;

/// Aggro radius for every other unit.
pub const DEFAULT_AGGRO_RADIUS: f64 = 500.0;

/// Distance under which a walker counts as arrived.
pub const ARRIVAL_EPSILON: f64 = 1.0;

// --- Combat ---

/// Units with attack range above this fire projectiles instead of striking.
pub const RANGED_THRESHOLD: f64 = 200.0;

/// Auto-attack projectile speed (units/s).
pub const AUTO_PROJECTILE_SPEED: f64 = 800.0;

/// Auto-attack projectile radius.
pub const AUTO_PROJECTILE_RADIUS: f64 = 5.0;

/// Armor mitigation constant: actual = raw * K / (K + armor).
pub const ARMOR_MITIGATION_K: f64 = 100.0;

/// Bounty for killing a champion.
pub const CHAMPION_BOUNTY: u32 = 300;

/// Bounty for killing anything else.
pub const UNIT_BOUNTY: u32 = 20;

/// Champion respawn delay (ms).
pub const RESPAWN_MS: f64 = 10_000.0;

/// Mana regenerated per tick by living, non-channeling units.
pub const MANA_REGEN_PER_TICK: f64 = 0.05;

// --- Projectiles ---

/// A projectile closer than this to its aim point has arrived.
pub const PROJECTILE_ARRIVAL_RADIUS: f64 = 10.0;

/// Extra slack added to a skillshot's radius when searching for a victim.
pub const SKILLSHOT_HIT_SLACK: f64 = 20.0;

// --- Recall ---

/// Recall channel duration (ms).
pub const RECALL_DURATION_MS: f64 = 4_000.0;

// --- Abilities ---

/// Attack-speed multiplier of self-buff abilities.
pub const SELF_BUFF_MULTIPLIER: f64 = 1.5;

/// Duration of self-buffs (ms).
pub const SELF_BUFF_DURATION_MS: f64 = 3_000.0;

/// Flat part of a targeted burst.
pub const TARGETED_BASE_DAMAGE: f64 = 200.0;

/// Flat part of a skillshot's damage.
pub const SKILLSHOT_BASE_DAMAGE: f64 = 100.0;

/// Skillshot projectile speed (units/s).
pub const SKILLSHOT_SPEED: f64 = 1_200.0;

/// Skillshot impact radius.
pub const SKILLSHOT_RADIUS: f64 = 40.0;

// --- Progression ---

/// Inventory capacity.
pub const MAX_ITEMS: usize = 6;

// --- Click hit-testing ---

/// Click radius around a turret.
pub const TURRET_CLICK_RADIUS: f64 = 40.0;

/// Click radius around any other unit.
pub const UNIT_CLICK_RADIUS: f64 = 20.0;
