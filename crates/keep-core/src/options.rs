use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A set-valued option whose members come from a fixed list of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    /// Key the host stores the option under.
    pub name: String,
    /// Name shown to players.
    pub display_name: String,
    /// Help text.
    pub description: String,
    /// Every value a player may choose.
    pub valid_keys: Vec<String>,
    /// Values selected when the player has not chosen.
    pub default: Vec<String>,
}

impl OptionSet {
    /// Check that every member of `value` is a valid key.
    pub fn validate(&self, value: &BTreeSet<String>) -> CoreResult<()> {
        match value.iter().find(|&key| !self.valid_keys.contains(key)) {
            Some(key) => Err(CoreError::InvalidOptionKey {
                option: self.name.clone(),
                key: key.clone(),
            }),
            None => Ok(()),
        }
    }

    /// The default selection as a set.
    pub fn default_value(&self) -> BTreeSet<String> {
        self.default.iter().cloned().collect()
    }
}

/// An on/off option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle {
    /// Key the host stores the option under.
    pub name: String,
    /// Name shown to players.
    pub display_name: String,
    /// Help text.
    pub description: String,
    /// Value when the player has not chosen.
    pub default: bool,
}

/// One entry of a game's options schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionDescriptor {
    /// A set of keys.
    Set(OptionSet),
    /// A boolean toggle.
    Toggle(Toggle),
}

impl OptionDescriptor {
    /// Key the host stores the option under.
    pub fn name(&self) -> &str {
        match self {
            OptionDescriptor::Set(set) => &set.name,
            OptionDescriptor::Toggle(toggle) => &toggle.name,
        }
    }

    /// Name shown to players.
    pub fn display_name(&self) -> &str {
        match self {
            OptionDescriptor::Set(set) => &set.display_name,
            OptionDescriptor::Toggle(toggle) => &toggle.display_name,
        }
    }

    /// Help text.
    pub fn description(&self) -> &str {
        match self {
            OptionDescriptor::Set(set) => &set.description,
            OptionDescriptor::Toggle(toggle) => &toggle.description,
        }
    }
}
