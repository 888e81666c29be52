use brewguide_core::catalog::Catalog;
use brewguide_core::errors::ApplicationError;
use serde::Serialize;

use crate::commands::CommandResult;
use crate::context::AppContext;

#[derive(Debug, Serialize)]
struct CatalogSummary {
    source: String,
    fingerprint: String,
    coffees: Vec<String>,
    recipes: Vec<String>,
    equipment: Vec<String>,
}

pub fn run(json_output: bool) -> CommandResult {
    let summary = match summarize() {
        Ok(summary) => summary,
        Err(error) => return CommandResult::from_error("catalog", &error),
    };

    if json_output {
        return CommandResult::data("catalog", &summary);
    }
    CommandResult { exit_code: 0, output: render_human(&summary) }
}

fn summarize() -> Result<CatalogSummary, ApplicationError> {
    let context = AppContext::load()?;
    let source = context
        .config
        .catalog
        .path
        .as_ref()
        .map(|path| format!("file ({})", path.display()))
        .unwrap_or_else(|| "builtin".to_string());

    Ok(summary_of(&context.catalog, source))
}

fn summary_of(catalog: &Catalog, source: String) -> CatalogSummary {
    CatalogSummary {
        source,
        fingerprint: catalog.fingerprint(),
        coffees: catalog.all_coffees().iter().map(|coffee| coffee.id.0.clone()).collect(),
        recipes: catalog.all_recipes().iter().map(|recipe| recipe.id.0.clone()).collect(),
        equipment: catalog.all_equipment().iter().map(|item| item.id.0.clone()).collect(),
    }
}

fn render_human(summary: &CatalogSummary) -> String {
    let mut lines = vec![
        format!("catalog source: {}", summary.source),
        format!("fingerprint: {}", summary.fingerprint),
    ];
    let sections = [
        ("coffees", &summary.coffees),
        ("recipes", &summary.recipes),
        ("equipment", &summary.equipment),
    ];
    for (label, ids) in sections {
        lines.push(format!("- {label} ({}): {}", ids.len(), ids.join(", ")));
    }
    lines.join("\n")
}
