//! ELDEN RING NIGHTREIGN objective catalog for Keymaster's Keep.
//!
//! Declares the game's identity and platforms, the two player options it
//! reads (owned heroes, Night Aspect unlock), the data pools behind each
//! placeholder, and the objective templates the host draws from.

/// The [`NightreignGame`] descriptor and its objective catalog.
pub mod game;
/// Player options and their schema.
pub mod options;
/// Fixed data pools: heroes, nightlords, items, relic colors and ranges.
pub mod pools;

pub use game::NightreignGame;
pub use options::NightreignOptions;
