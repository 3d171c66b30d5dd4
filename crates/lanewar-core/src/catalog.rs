//! Static catalog: champion templates, abilities, items, structures, minions.
//!
//! Built once at startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::components::Stats;
use crate::constants::MAP_WIDTH;
use crate::enums::{AbilityKind, ChampionRole, Team};

/// A castable ability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cooldown_ms: f64,
    pub mana_cost: f64,
    pub range: f64,
    pub kind: AbilityKind,
    /// Display color hint for the presentation layer.
    pub color: String,
}

/// Sparse stat deltas granted by an item. Unset fields leave the stat alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatDelta {
    pub max_health: Option<f64>,
    pub max_mana: Option<f64>,
    pub attack_damage: Option<f64>,
    pub ability_power: Option<f64>,
    pub armor: Option<f64>,
    pub magic_resist: Option<f64>,
    pub move_speed: Option<f64>,
    pub attack_speed: Option<f64>,
}

/// A shop item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub stats: StatDelta,
    pub description: String,
}

/// A playable champion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionTemplate {
    pub name: String,
    pub role: ChampionRole,
    pub stats: Stats,
    pub abilities: Vec<Ability>,
}

/// Everything the session needs to build units and run the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub champions: Vec<ChampionTemplate>,
    pub items: Vec<Item>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            champions: default_champions(),
            items: default_items(),
        }
    }
}

impl Catalog {
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn champion(&self, index: usize) -> Option<&ChampionTemplate> {
        self.champions.get(index)
    }
}

#[allow(clippy::too_many_arguments)]
fn ability(
    id: &str,
    name: &str,
    description: &str,
    cooldown_ms: f64,
    mana_cost: f64,
    range: f64,
    kind: AbilityKind,
    color: &str,
) -> Ability {
    Ability {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        cooldown_ms,
        mana_cost,
        range,
        kind,
        color: color.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn stats(
    max_health: f64,
    max_mana: f64,
    attack_damage: f64,
    ability_power: f64,
    armor: f64,
    magic_resist: f64,
    attack_range: f64,
    move_speed: f64,
    attack_speed: f64,
) -> Stats {
    Stats {
        max_health,
        health: max_health,
        max_mana,
        mana: max_mana,
        attack_damage,
        ability_power,
        armor,
        magic_resist,
        attack_range,
        move_speed,
        attack_speed,
    }
}

/// The four lobby champions, in lobby order.
pub fn default_champions() -> Vec<ChampionTemplate> {
    vec![
        ChampionTemplate {
            name: "Warden".into(),
            role: ChampionRole::Fighter,
            stats: stats(2000.0, 0.0, 120.0, 0.0, 60.0, 50.0, 150.0, 280.0, 0.8),
            abilities: vec![
                ability(
                    "q",
                    "Decisive Strike",
                    "Gain haste and empower the next attacks.",
                    6000.0,
                    0.0,
                    150.0,
                    AbilityKind::SelfBuff,
                    "#eab308",
                ),
                ability(
                    "r",
                    "Judgment",
                    "Deal heavy execute damage to the target.",
                    30000.0,
                    0.0,
                    400.0,
                    AbilityKind::Targeted,
                    "#fbbf24",
                ),
            ],
        },
        ChampionTemplate {
            name: "Lumina".into(),
            role: ChampionRole::Mage,
            stats: stats(1200.0, 800.0, 60.0, 150.0, 30.0, 35.0, 550.0, 260.0, 0.65),
            abilities: vec![
                ability(
                    "q",
                    "Light Binding",
                    "Bind enemies along a line.",
                    8000.0,
                    60.0,
                    900.0,
                    AbilityKind::Skillshot,
                    "#fef08a",
                ),
                ability(
                    "r",
                    "Final Spark",
                    "Fire a huge beam of light.",
                    25000.0,
                    100.0,
                    1500.0,
                    AbilityKind::Skillshot,
                    "#fde047",
                ),
            ],
        },
        ChampionTemplate {
            name: "Frostbow".into(),
            role: ChampionRole::Marksman,
            stats: stats(1300.0, 500.0, 140.0, 0.0, 35.0, 30.0, 600.0, 270.0, 1.1),
            abilities: vec![
                ability(
                    "q",
                    "Ranger's Focus",
                    "Briefly increase attack speed.",
                    10000.0,
                    40.0,
                    0.0,
                    AbilityKind::SelfBuff,
                    "#60a5fa",
                ),
                ability(
                    "r",
                    "Crystal Arrow",
                    "A map-wide stunning arrow.",
                    40000.0,
                    100.0,
                    2000.0,
                    AbilityKind::Skillshot,
                    "#93c5fd",
                ),
            ],
        },
        ChampionTemplate {
            name: "Shade".into(),
            role: ChampionRole::Assassin,
            stats: stats(1500.0, 200.0, 160.0, 0.0, 40.0, 40.0, 150.0, 310.0, 0.9),
            abilities: vec![
                ability(
                    "q",
                    "Shuriken",
                    "Throw a razor shuriken.",
                    5000.0,
                    40.0,
                    700.0,
                    AbilityKind::Skillshot,
                    "#ef4444",
                ),
                ability(
                    "r",
                    "Death Mark",
                    "Dash at an enemy and detonate the mark.",
                    35000.0,
                    0.0,
                    500.0,
                    AbilityKind::Targeted,
                    "#7f1d1d",
                ),
            ],
        },
    ]
}

/// The shop.
pub fn default_items() -> Vec<Item> {
    let item = |id: &str, name: &str, cost: u32, stats: StatDelta, description: &str| Item {
        id: id.into(),
        name: name.into(),
        cost,
        stats,
        description: description.into(),
    };
    vec![
        item(
            "long_sword",
            "Long Sword",
            350,
            StatDelta {
                attack_damage: Some(10.0),
                ..Default::default()
            },
            "+10 attack damage",
        ),
        item(
            "boots",
            "Boots",
            300,
            StatDelta {
                move_speed: Some(25.0),
                ..Default::default()
            },
            "+25 move speed",
        ),
        item(
            "amp_tome",
            "Amplifying Tome",
            400,
            StatDelta {
                ability_power: Some(20.0),
                ..Default::default()
            },
            "+20 ability power",
        ),
        item(
            "ruby_crystal",
            "Ruby Crystal",
            400,
            StatDelta {
                max_health: Some(150.0),
                ..Default::default()
            },
            "+150 health",
        ),
        item(
            "cloth_armor",
            "Cloth Armor",
            300,
            StatDelta {
                armor: Some(15.0),
                ..Default::default()
            },
            "+15 armor",
        ),
        item(
            "dagger",
            "Dagger",
            300,
            StatDelta {
                attack_speed: Some(0.12),
                ..Default::default()
            },
            "+12% attack speed",
        ),
    ]
}

/// Stats of a lane minion.
pub fn minion_stats() -> Stats {
    stats(400.0, 0.0, 20.0, 0.0, 0.0, 0.0, 100.0, 200.0, 1.0)
}

/// Stats of a lane turret.
pub fn turret_stats() -> Stats {
    stats(3000.0, 0.0, 200.0, 0.0, 100.0, 100.0, 700.0, 0.0, 0.8)
}

/// Nexus health pool.
pub const NEXUS_HEALTH: f64 = 5000.0;

/// A nexus borrows the first champion's combat stats with a bigger pool.
pub fn nexus_stats(catalog: &Catalog) -> Stats {
    let mut base = catalog
        .champions
        .first()
        .map(|c| c.stats)
        .unwrap_or_default();
    base.max_health = NEXUS_HEALTH;
    base.health = NEXUS_HEALTH;
    base
}

/// x-coordinate of a team's turret.
pub fn turret_x(team: Team) -> f64 {
    match team {
        Team::Order => 300.0,
        Team::Chaos => MAP_WIDTH - 300.0,
    }
}
