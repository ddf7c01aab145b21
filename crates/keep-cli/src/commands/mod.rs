pub mod export;
pub mod info;
pub mod options;
pub mod pools;
pub mod templates;

use std::path::Path;

use tracing::{debug, info};

use keep_nightreign::{NightreignGame, NightreignOptions};

use crate::OptionArgs;

/// Resolve option values from the file and flags, validate them, and build
/// the game descriptor.
///
/// Flags override the file: `--hero` replaces the owned heroes, `--no-heroes`
/// clears them, `--night-aspect` turns the unlock on.
pub fn load_game(args: &OptionArgs) -> Result<NightreignGame, String> {
    let mut options = match &args.options {
        Some(path) => read_options(path)?,
        None => NightreignOptions::default(),
    };

    if !args.heroes.is_empty() {
        options = options.with_heroes(args.heroes.iter().cloned());
    }
    if args.no_heroes {
        options = options.with_heroes(Vec::<String>::new());
    }
    if args.night_aspect {
        options = options.with_night_aspect(true);
    }

    options.validate().map_err(|e| e.to_string())?;
    debug!(
        heroes = options.heroes_owned.len(),
        night_aspect = options.night_aspect_unlocked,
        "options resolved"
    );

    Ok(NightreignGame::new(options))
}

fn read_options(path: &Path) -> Result<NightreignOptions, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let options = NightreignOptions::from_json(&json)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    info!(path = %path.display(), "loaded options file");
    Ok(options)
}

/// Render a yes/no flag for table cells.
fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
