use tracing::debug;

use keep_core::{Game, ObjectiveTemplate, OptionDescriptor, Platform};

use crate::options::NightreignOptions;
use crate::pools::{self, NIGHT_ASPECT, NIGHTLORDS_BASE};

/// ELDEN RING NIGHTREIGN.
#[derive(Debug, Clone, Default)]
pub struct NightreignGame {
    options: NightreignOptions,
}

impl NightreignGame {
    /// Game name as shown by the host.
    pub const NAME: &'static str = "ELDEN RING NIGHTREIGN";

    /// Create the game descriptor over the player's option values.
    pub fn new(options: NightreignOptions) -> Self {
        Self { options }
    }

    /// Current option values.
    pub fn options(&self) -> &NightreignOptions {
        &self.options
    }

    /// Heroes the player owns, sorted. May be empty.
    pub fn heroes(&self) -> Vec<String> {
        let heroes: Vec<String> = self.options.heroes_owned.iter().cloned().collect();
        debug!(count = heroes.len(), "resolved owned heroes");
        heroes
    }

    /// Nightlords to fight, sorted. Includes the Night Aspect when unlocked.
    pub fn nightlords(&self) -> Vec<String> {
        let mut nightlords: Vec<String> =
            NIGHTLORDS_BASE.iter().map(|n| (*n).to_string()).collect();

        if self.options.night_aspect_unlocked {
            nightlords.push(NIGHT_ASPECT.to_string());
        }

        nightlords.sort();
        debug!(
            count = nightlords.len(),
            night_aspect = self.options.night_aspect_unlocked,
            "resolved nightlords"
        );
        nightlords
    }
}

impl Game for NightreignGame {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn platform(&self) -> Platform {
        Platform::Pc
    }

    fn platforms_other(&self) -> Vec<Platform> {
        vec![Platform::Ps4, Platform::Ps5, Platform::XOne, Platform::Xsx]
    }

    fn is_adult_only_or_unrated(&self) -> bool {
        false
    }

    fn options_schema(&self) -> Vec<OptionDescriptor> {
        NightreignOptions::schema()
    }

    fn optional_constraint_templates(&self) -> Vec<ObjectiveTemplate> {
        Vec::new()
    }

    fn objective_templates(&self) -> Vec<ObjectiveTemplate> {
        vec![
            ObjectiveTemplate::new("Defeat NIGHTLORD as the HERO")
                .with_data("NIGHTLORD", self.nightlords(), 1)
                .with_data("HERO", self.heroes(), 1)
                .with_weight(10),
            ObjectiveTemplate::new("Find ITEM")
                .with_data("ITEM", pools::items(), 1)
                .with_weight(5),
            ObjectiveTemplate::new("Claim the Shifting Earth's Favor").with_weight(1),
            ObjectiveTemplate::new("Defeat the Nightlord without RARITY gear")
                .with_data("RARITY", pools::rarity(), 1)
                .with_weight(2),
            ObjectiveTemplate::new("Don't die until Day DAY")
                .with_data("DAY", pools::day_range(), 1)
                .with_weight(1),
            ObjectiveTemplate::new("Revive REVIVES Teammates")
                .with_data("REVIVES", pools::revive_range(), 1)
                .with_weight(3),
            ObjectiveTemplate::new("Defeat the next Nightlord with RELICS relics equipped")
                .with_data("RELICS", pools::relic_range(), 1)
                .with_weight(3),
            ObjectiveTemplate::new("Defeat the next Nightlord with a COLOR relic equipped")
                .with_data("COLOR", pools::color(), 1)
                .with_weight(3),
            ObjectiveTemplate::new("Defeat the next Nightlord with only COLOR relics equipped")
                .with_data("COLOR", pools::color(), 1)
                .with_weight(3),
            ObjectiveTemplate::new("Increase your Flask of Crimson Tears cap to FLASKS next run")
                .with_data("FLASKS", pools::flask_range(), 1)
                .with_weight(4),
        ]
    }
}
