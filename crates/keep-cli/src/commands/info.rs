use colored::Colorize;

use keep_core::{Game, Platform};
use keep_nightreign::NightreignGame;

use super::yes_no;

pub fn run(game: &NightreignGame) -> Result<(), String> {
    let others: Vec<String> = game
        .platforms_other()
        .into_iter()
        .map(describe_platform)
        .collect();
    let heroes = game.heroes();
    let options = game.options();

    println!("  {}", game.name().bold());
    println!("  Platform:     {}", describe_platform(game.platform()));
    println!("  Also on:      {}", others.join(", "));
    println!(
        "  Adult only:   {}",
        yes_no(game.is_adult_only_or_unrated())
    );
    println!();
    println!(
        "  Heroes owned: {}",
        if heroes.is_empty() {
            "(none)".to_string()
        } else {
            heroes.join(", ")
        }
    );
    println!(
        "  Night Aspect: {}",
        if options.night_aspect_unlocked {
            "unlocked"
        } else {
            "locked"
        }
    );
    println!();
    println!(
        "  {} objective templates, total weight {}",
        game.objective_templates().len(),
        game.total_weight()
    );
    println!(
        "  {} constraint templates",
        game.optional_constraint_templates().len()
    );

    Ok(())
}

/// Host code, followed by the full name when it differs.
fn describe_platform(platform: Platform) -> String {
    if platform.code() == platform.display_name() {
        platform.code().to_string()
    } else {
        format!("{} ({})", platform.code(), platform.display_name())
    }
}
