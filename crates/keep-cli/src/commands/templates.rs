use comfy_table::{ContentArrangement, Table};

use keep_core::{Game, ObjectiveTemplate};
use keep_nightreign::NightreignGame;

use super::yes_no;

pub fn run(game: &NightreignGame) -> Result<(), String> {
    let templates = game.objective_templates();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#",
        "Label",
        "Placeholders",
        "Weight",
        "Time-consuming",
        "Difficult",
    ]);

    for (i, template) in templates.iter().enumerate() {
        let label = if template.can_draw() {
            template.label.clone()
        } else {
            format!("{} (no values)", template.label)
        };
        table.add_row(vec![
            (i + 1).to_string(),
            label,
            describe_placeholders(template),
            template.weight.to_string(),
            yes_no(template.is_time_consuming).to_string(),
            yes_no(template.is_difficult).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} templates, total weight {}",
        templates.len(),
        game.total_weight()
    );

    Ok(())
}

/// `TOKEN x count / pool size` for each placeholder, in label order.
fn describe_placeholders(template: &ObjectiveTemplate) -> String {
    let parts: Vec<String> = template
        .placeholders()
        .into_iter()
        .map(|token| {
            let source = &template.data[token];
            format!("{token} x{} of {}", source.count, source.pool.len())
        })
        .collect();

    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(", ")
    }
}
