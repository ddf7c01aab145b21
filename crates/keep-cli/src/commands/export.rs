use std::path::Path;

use serde_json::json;

use keep_core::Game;
use keep_nightreign::NightreignGame;

pub fn run(game: &NightreignGame, output: Option<&Path>) -> Result<(), String> {
    let catalog = json!({
        "name": game.name(),
        "platform": game.platform(),
        "platforms_other": game.platforms_other(),
        "is_adult_only_or_unrated": game.is_adult_only_or_unrated(),
        "options": game.options(),
        "options_schema": game.options_schema(),
        "total_weight": game.total_weight(),
        "objective_templates": game.objective_templates(),
        "optional_constraint_templates": game.optional_constraint_templates(),
    });

    let content = serde_json::to_string_pretty(&catalog).map_err(|e| e.to_string())?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!("  Exported catalog to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
