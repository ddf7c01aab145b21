//! Player options read by the NIGHTREIGN plugin.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use keep_core::{CoreResult, OptionDescriptor, OptionSet, Toggle};

use crate::pools::HEROES_ALL;

/// Host key for the owned-heroes option.
pub const HEROES_OWNED_KEY: &str = "nightreign_heroes_owned";
/// Host key for the Night Aspect toggle.
pub const NIGHT_ASPECT_UNLOCKED_KEY: &str = "nightreign_night_aspect_unlocked";

/// Option values for a NIGHTREIGN slot.
///
/// Keys missing from serialized input fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightreignOptions {
    /// Heroes the player owns and is willing to play as.
    #[serde(rename = "nightreign_heroes_owned")]
    pub heroes_owned: BTreeSet<String>,
    /// Whether the Night Aspect may appear in objectives.
    #[serde(rename = "nightreign_night_aspect_unlocked")]
    pub night_aspect_unlocked: bool,
}

impl Default for NightreignOptions {
    fn default() -> Self {
        Self {
            heroes_owned: HEROES_ALL.iter().map(|h| (*h).to_string()).collect(),
            night_aspect_unlocked: false,
        }
    }
}

impl NightreignOptions {
    /// Replace the owned heroes. Duplicates collapse.
    pub fn with_heroes<I, S>(mut self, heroes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.heroes_owned = heroes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the Night Aspect unlock.
    pub fn with_night_aspect(mut self, unlocked: bool) -> Self {
        self.night_aspect_unlocked = unlocked;
        self
    }

    /// The owned-heroes option descriptor.
    pub fn heroes_owned_option() -> OptionSet {
        let roster: Vec<String> = HEROES_ALL.iter().map(|h| (*h).to_string()).collect();
        OptionSet {
            name: HEROES_OWNED_KEY.to_string(),
            display_name: "Nightreign Heroes Owned".to_string(),
            description: "Indicates which Heroes the player owns and wants to possibly play as."
                .to_string(),
            default: roster.clone(),
            valid_keys: roster,
        }
    }

    /// The Night Aspect toggle descriptor.
    pub fn night_aspect_option() -> Toggle {
        Toggle {
            name: NIGHT_ASPECT_UNLOCKED_KEY.to_string(),
            display_name: "Nightreign Night Aspect Unlocked".to_string(),
            description:
                "Indicates whether to include the Night Aspect Boss when generating objectives."
                    .to_string(),
            default: false,
        }
    }

    /// Both option descriptors, in declaration order.
    pub fn schema() -> Vec<OptionDescriptor> {
        vec![
            OptionDescriptor::Set(Self::heroes_owned_option()),
            OptionDescriptor::Toggle(Self::night_aspect_option()),
        ]
    }

    /// Check the values against the schema.
    pub fn validate(&self) -> CoreResult<()> {
        Self::heroes_owned_option().validate(&self.heroes_owned)
    }

    /// Parse option values from JSON and validate them.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}
