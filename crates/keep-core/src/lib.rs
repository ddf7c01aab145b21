//! Game plugin contract for Keymaster's Keep.
//!
//! A game plugin describes one video game to the host: its identity and
//! platforms, the player options it reads, and the catalog of objective
//! templates the host draws quests from. This crate holds the types on both
//! sides of that boundary. It does not draw values or pick templates; that
//! is the host's job.

/// Error types shared by the host contract.
pub mod error;
/// The [`Game`] capability every plugin implements.
pub mod game;
/// Declarative option descriptors and their validity checks.
pub mod options;
/// Platform identifiers understood by the host.
pub mod platform;
/// Objective templates and the data pools behind their placeholders.
pub mod template;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the game contract.
pub use game::Game;
/// Re-export option descriptors.
pub use options::{OptionDescriptor, OptionSet, Toggle};
/// Re-export platform identifiers.
pub use platform::Platform;
/// Re-export template types.
pub use template::{DataSource, ObjectiveTemplate, Pool};
