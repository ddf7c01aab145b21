use colored::Colorize;

use keep_core::Pool;
use keep_nightreign::NightreignGame;
use keep_nightreign::pools;

pub fn run(game: &NightreignGame) -> Result<(), String> {
    let listing = [
        ("heroes", Pool::from(game.heroes())),
        ("nightlords", Pool::from(game.nightlords())),
        ("items", Pool::from(pools::items())),
        ("rarity", Pool::from(pools::rarity())),
        ("color", Pool::from(pools::color())),
        ("day_range", Pool::from(pools::day_range())),
        ("revive_range", Pool::from(pools::revive_range())),
        ("relic_range", Pool::from(pools::relic_range())),
        ("flask_range", Pool::from(pools::flask_range())),
    ];

    for (name, pool) in &listing {
        println!("  {} ({})", name.bold(), pool.len());
        if pool.is_empty() {
            println!("    (empty)");
        }
        for value in pool.as_strings() {
            println!("    {value}");
        }
    }

    Ok(())
}
