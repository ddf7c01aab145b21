//! Property tests for the NIGHTREIGN catalog across option states.

use proptest::prelude::*;

use keep_core::{Game, Pool};
use keep_nightreign::pools::{self, HEROES_ALL, NIGHT_ASPECT, NIGHTLORDS_BASE};
use keep_nightreign::{NightreignGame, NightreignOptions};

fn hero_subset() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(HEROES_ALL.to_vec(), 0..=HEROES_ALL.len())
}

fn is_sorted(values: &[String]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn heroes_are_sorted_subset(subset in hero_subset(), unlocked in any::<bool>()) {
        let options = NightreignOptions::default()
            .with_heroes(subset.iter().copied())
            .with_night_aspect(unlocked);
        prop_assert!(options.validate().is_ok());

        let game = NightreignGame::new(options);
        let mut expected: Vec<String> = subset.iter().map(|h| (*h).to_string()).collect();
        expected.sort();
        prop_assert_eq!(game.heroes(), expected);
    }

    #[test]
    fn nightlords_cover_base_roster(subset in hero_subset(), unlocked in any::<bool>()) {
        let game = NightreignGame::new(
            NightreignOptions::default()
                .with_heroes(subset)
                .with_night_aspect(unlocked),
        );
        let lords = game.nightlords();

        prop_assert_eq!(lords.len(), if unlocked { 8 } else { 7 });
        prop_assert!(is_sorted(&lords));
        for base in NIGHTLORDS_BASE {
            prop_assert!(lords.iter().any(|l| l == base));
        }
        prop_assert_eq!(lords.iter().any(|l| l == NIGHT_ASPECT), unlocked);
    }

    #[test]
    fn catalog_shape_is_option_independent(subset in hero_subset(), unlocked in any::<bool>()) {
        let game = NightreignGame::new(
            NightreignOptions::default()
                .with_heroes(subset)
                .with_night_aspect(unlocked),
        );
        let templates = game.objective_templates();
        let reference = NightreignGame::default().objective_templates();

        prop_assert_eq!(templates.len(), 10);
        prop_assert_eq!(game.total_weight(), 35);
        prop_assert!(game.validate_templates().is_ok());
        prop_assert!(game.optional_constraint_templates().is_empty());
        for (t, r) in templates.iter().zip(&reference) {
            prop_assert_eq!(&t.label, &r.label);
            prop_assert_eq!(t.weight, r.weight);
        }
    }

    #[test]
    fn constant_pools_ignore_options(subset in hero_subset(), unlocked in any::<bool>()) {
        let game = NightreignGame::new(
            NightreignOptions::default()
                .with_heroes(subset)
                .with_night_aspect(unlocked),
        );
        let templates = game.objective_templates();
        let reference = NightreignGame::default().objective_templates();

        // Find ITEM, RARITY gear, a COLOR relic, only COLOR relics
        for (index, token) in [(1, "ITEM"), (3, "RARITY"), (7, "COLOR"), (8, "COLOR")] {
            prop_assert_eq!(&templates[index].data[token], &reference[index].data[token]);
        }
        prop_assert_eq!(&templates[1].data["ITEM"].pool, &Pool::from(pools::items()));
        prop_assert_eq!(
            &templates[3].data["RARITY"].pool,
            &Pool::values(&["EPIC", "LEGENDARY"])
        );
        prop_assert_eq!(
            &templates[7].data["COLOR"].pool,
            &Pool::values(&["Blue", "Green", "Red", "Yellow"])
        );
    }
}

#[test]
fn night_aspect_sorted_into_place() {
    let game = NightreignGame::new(NightreignOptions::default().with_night_aspect(true));
    assert_eq!(
        game.nightlords(),
        vec![
            "Augur",
            "Darkdrift Knight",
            "Equilibrious Beast",
            "Fissure in the Fog",
            "Gaping Jaw",
            "Night Aspect",
            "Sentient Pest",
            "Tricephalos",
        ]
    );
}

#[test]
fn wylder_and_raider() {
    let game = NightreignGame::new(NightreignOptions::default().with_heroes(["Wylder", "Raider"]));
    assert_eq!(game.heroes(), vec!["Raider", "Wylder"]);
}

#[test]
fn range_pools() {
    assert_eq!(pools::day_range().collect::<Vec<_>>(), vec![2]);
    assert_eq!(pools::revive_range().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(pools::relic_range().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(pools::flask_range().collect::<Vec<_>>(), vec![4, 5, 6]);
}
