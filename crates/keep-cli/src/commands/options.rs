use comfy_table::{ContentArrangement, Table};

use keep_core::{Game, OptionDescriptor};
use keep_nightreign::NightreignGame;

pub fn run(game: &NightreignGame) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Option", "Display Name", "Kind", "Default", "Valid Values"]);

    for descriptor in game.options_schema() {
        let (kind, default, valid) = match &descriptor {
            OptionDescriptor::Set(set) => (
                "set",
                set.default.join(", "),
                set.valid_keys.join(", "),
            ),
            OptionDescriptor::Toggle(toggle) => (
                "toggle",
                toggle.default.to_string(),
                "true, false".to_string(),
            ),
        };
        table.add_row(vec![
            descriptor.name().to_string(),
            descriptor.display_name().to_string(),
            kind.to_string(),
            default,
            valid,
        ]);
    }

    println!("{table}");

    Ok(())
}
