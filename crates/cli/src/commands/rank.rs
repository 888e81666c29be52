use brewguide_core::catalog::Catalog;
use brewguide_core::domain::preferences::WizardPreferences;
use brewguide_core::errors::ApplicationError;
use brewguide_core::recommend::{CatalogKind, Recommendable};
use brewguide_core::scoring::{rank_by_preference, PreferenceSubject};
use serde::Serialize;

use crate::commands::CommandResult;
use crate::context::AppContext;

#[derive(Debug, Serialize)]
struct RankedEntry {
    id: String,
    name: String,
    score: u32,
}

#[derive(Debug, Serialize)]
struct RankOutput {
    kind: CatalogKind,
    personalized: bool,
    ranking: Vec<RankedEntry>,
}

pub fn run(kind: &str) -> CommandResult {
    match execute(kind) {
        Ok(output) => CommandResult::data("rank", &output),
        Err(error) => CommandResult::from_error("rank", &error),
    }
}

fn execute(kind: &str) -> Result<RankOutput, ApplicationError> {
    let kind = kind.parse::<CatalogKind>()?;
    let context = AppContext::load()?;
    let preferences = context.saved_preferences()?;

    Ok(RankOutput {
        kind,
        personalized: preferences.is_some(),
        ranking: rank_kind(&context.catalog, kind, preferences.as_ref()),
    })
}

fn rank_kind(
    catalog: &Catalog,
    kind: CatalogKind,
    preferences: Option<&WizardPreferences>,
) -> Vec<RankedEntry> {
    match kind {
        CatalogKind::Coffee => entries(catalog.all_coffees(), preferences),
        CatalogKind::Recipe => entries(catalog.all_recipes(), preferences),
        CatalogKind::Equipment => entries(catalog.all_equipment(), preferences),
    }
}

fn entries<T: Recommendable + PreferenceSubject>(
    items: &[T],
    preferences: Option<&WizardPreferences>,
) -> Vec<RankedEntry> {
    rank_by_preference(items, preferences)
        .into_iter()
        .map(|ranked| RankedEntry {
            id: ranked.item.item_id().to_string(),
            name: ranked.item.display_name().to_string(),
            score: ranked.score,
        })
        .collect()
}
