//! Data pools for NIGHTREIGN objectives.
//!
//! String lists are exposed both as constants and as accessor functions
//! returning owned values, so the host can bind them to placeholders.
//! Integer pools are half-open ranges.

use std::ops::Range;

/// Every playable Nightfarer, in roster order (8 entries).
pub const HEROES_ALL: &[&str] = &[
    "Wylder", "Guardian", "Ironeye", "Duchess", "Raider", "Revenant", "Recluse", "Executor",
];

/// Nightlords available without the Night Aspect unlock (7 entries).
pub const NIGHTLORDS_BASE: &[&str] = &[
    "Tricephalos",
    "Gaping Jaw",
    "Sentient Pest",
    "Augur",
    "Equilibrious Beast",
    "Darkdrift Knight",
    "Fissure in the Fog",
];

/// The final nightlord, gated behind an option.
pub const NIGHT_ASPECT: &str = "Night Aspect";

/// Items worth hunting for during an expedition.
///
/// The last entry is two names run together; it is kept verbatim.
pub const ITEMS: &[&str] = &[
    "Boluses",
    "Spraymist/Aromatic",
    "Gravity Stone",
    "Glintstone Scrap",
    "Stonesword Key",
    "Wending Grace",
    "Smithing Stone (2)",
    "a legendary weapon",
    "an epic weaponKukri",
];

/// Gear rarity tiers.
pub const RARITY: &[&str] = &["EPIC", "LEGENDARY"];

/// Relic colors.
pub const COLORS: &[&str] = &["Blue", "Green", "Red", "Yellow"];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

/// Item names.
pub fn items() -> Vec<String> {
    owned(ITEMS)
}

/// Gear rarity tiers.
pub fn rarity() -> Vec<String> {
    owned(RARITY)
}

/// Relic colors.
pub fn color() -> Vec<String> {
    owned(COLORS)
}

/// Day to survive until.
pub fn day_range() -> Range<i64> {
    2..3
}

/// Number of teammates to revive.
pub fn revive_range() -> Range<i64> {
    1..4
}

/// Number of relics to have equipped.
pub fn relic_range() -> Range<i64> {
    0..2
}

/// Flask of Crimson Tears charge cap.
pub fn flask_range() -> Range<i64> {
    4..7
}
