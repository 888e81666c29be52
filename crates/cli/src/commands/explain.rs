use brewguide_core::catalog::Catalog;
use brewguide_core::domain::coffee::CoffeeId;
use brewguide_core::domain::equipment::EquipmentId;
use brewguide_core::domain::preferences::WizardPreferences;
use brewguide_core::domain::recipe::RecipeId;
use brewguide_core::errors::{ApplicationError, DomainError};
use brewguide_core::recommend::{evaluate_rules, CatalogKind, Recommendable, RuleVerdict};
use brewguide_core::scoring::{score_breakdown, PreferenceSubject, ScoreBreakdown};
use serde::Serialize;

use crate::commands::CommandResult;
use crate::context::AppContext;

#[derive(Debug, Serialize)]
struct ExplainOutput {
    kind: CatalogKind,
    id: String,
    name: String,
    personalized: bool,
    admitted: bool,
    rules: Vec<RuleVerdict>,
    fallback_admits: bool,
    score: ScoreBreakdown,
    score_total: u32,
}

/// Per-rule verdicts for one item against saved preferences (defaults when none are saved).
pub fn run(kind: &str, id: &str) -> CommandResult {
    match execute(kind, id) {
        Ok(output) => CommandResult::data("explain", &output),
        Err(error) => CommandResult::from_error("explain", &error),
    }
}

fn execute(kind: &str, id: &str) -> Result<ExplainOutput, ApplicationError> {
    let kind = kind.parse::<CatalogKind>()?;
    let context = AppContext::load()?;
    let saved = context.saved_preferences()?;
    let personalized = saved.is_some();
    let preferences = saved.unwrap_or_default();

    let output = lookup(&context.catalog, kind, id, &preferences, personalized)
        .ok_or_else(|| DomainError::NotFound { kind: kind.as_str(), id: id.to_string() })?;
    Ok(output)
}

fn lookup(
    catalog: &Catalog,
    kind: CatalogKind,
    id: &str,
    preferences: &WizardPreferences,
    personalized: bool,
) -> Option<ExplainOutput> {
    let id = id.trim().to_string();
    match kind {
        CatalogKind::Coffee => catalog
            .coffee(&CoffeeId(id))
            .map(|item| explain(item, preferences, personalized)),
        CatalogKind::Recipe => catalog
            .recipe(&RecipeId(id))
            .map(|item| explain(item, preferences, personalized)),
        CatalogKind::Equipment => catalog
            .equipment(&EquipmentId(id))
            .map(|item| explain(item, preferences, personalized)),
    }
}

fn explain<T: Recommendable + PreferenceSubject>(
    item: &T,
    preferences: &WizardPreferences,
    personalized: bool,
) -> ExplainOutput {
    let rules = evaluate_rules(item, preferences);
    let score =
        if personalized { score_breakdown(item, preferences) } else { ScoreBreakdown::default() };

    ExplainOutput {
        kind: T::KIND,
        id: item.item_id().to_string(),
        name: item.display_name().to_string(),
        personalized,
        admitted: rules.iter().all(|verdict| verdict.passed),
        rules,
        fallback_admits: item.fallback_admits(preferences),
        score_total: score.total(),
        score,
    }
}
