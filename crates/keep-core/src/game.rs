use crate::error::CoreResult;
use crate::options::OptionDescriptor;
use crate::platform::Platform;
use crate::template::ObjectiveTemplate;

/// The capability every game plugin provides to the host.
///
/// Template lists are rebuilt on every call from the plugin's current option
/// values; the host never mutates them.
pub trait Game {
    /// Display name of the game.
    fn name(&self) -> &str;

    /// Primary platform.
    fn platform(&self) -> Platform;

    /// Other platforms the game is playable on.
    fn platforms_other(&self) -> Vec<Platform> {
        Vec::new()
    }

    /// Whether the game is adult-only or unrated.
    fn is_adult_only_or_unrated(&self) -> bool {
        false
    }

    /// Options this game reads from the player's settings.
    fn options_schema(&self) -> Vec<OptionDescriptor> {
        Vec::new()
    }

    /// Global constraints the host may attach to a whole run.
    fn optional_constraint_templates(&self) -> Vec<ObjectiveTemplate>;

    /// The objective catalog.
    fn objective_templates(&self) -> Vec<ObjectiveTemplate>;

    /// Sum of all objective template weights.
    fn total_weight(&self) -> u32 {
        self.objective_templates().iter().map(|t| t.weight).sum()
    }

    /// Validate every objective and constraint template.
    fn validate_templates(&self) -> CoreResult<()> {
        self.objective_templates()
            .iter()
            .chain(self.optional_constraint_templates().iter())
            .try_for_each(ObjectiveTemplate::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::template::Pool;

    struct Minimal;

    impl Game for Minimal {
        fn name(&self) -> &str {
            "Minimal"
        }

        fn platform(&self) -> Platform {
            Platform::Pc
        }

        fn optional_constraint_templates(&self) -> Vec<ObjectiveTemplate> {
            vec![ObjectiveTemplate::new("No healing")]
        }

        fn objective_templates(&self) -> Vec<ObjectiveTemplate> {
            vec![
                ObjectiveTemplate::new("Win").with_weight(2),
                ObjectiveTemplate::new("Find ITEM")
                    .with_data("ITEM", Pool::values(&["Key"]), 1)
                    .with_weight(3),
            ]
        }
    }

    struct Broken;

    impl Game for Broken {
        fn name(&self) -> &str {
            "Broken"
        }

        fn platform(&self) -> Platform {
            Platform::Pc
        }

        fn optional_constraint_templates(&self) -> Vec<ObjectiveTemplate> {
            vec![ObjectiveTemplate::new("Never").with_weight(0)]
        }

        fn objective_templates(&self) -> Vec<ObjectiveTemplate> {
            Vec::new()
        }
    }

    #[test]
    fn provided_defaults() {
        let game = Minimal;
        assert!(game.platforms_other().is_empty());
        assert!(!game.is_adult_only_or_unrated());
        assert!(game.options_schema().is_empty());
    }

    #[test]
    fn total_weight_sums_objectives_only() {
        assert_eq!(Minimal.total_weight(), 5);
        assert_eq!(Broken.total_weight(), 0);
    }

    #[test]
    fn validate_covers_constraints() {
        assert!(Minimal.validate_templates().is_ok());
        assert!(matches!(
            Broken.validate_templates(),
            Err(CoreError::ZeroWeight(label)) if label == "Never"
        ));
    }
}
