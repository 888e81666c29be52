use brewguide_core::domain::preferences::WizardPreferences;
use brewguide_core::errors::ApplicationError;
use brewguide_core::recommend::{RecommendationEngine, RecommendationSet};
use serde::Serialize;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::commands::prefs::PreferenceArgs;
use crate::commands::CommandResult;
use crate::context::AppContext;

#[derive(Debug, Serialize)]
struct RecommendOutput {
    saved: bool,
    empty: bool,
    preferences: WizardPreferences,
    #[serde(flatten)]
    recommendations: RecommendationSet,
}

/// Starts from saved preferences (or defaults) and layers the flags on top.
pub fn run(args: &PreferenceArgs, save: bool, analytics: &dyn AnalyticsSink) -> CommandResult {
    match execute(args, save, analytics) {
        Ok(output) => CommandResult::data("recommend", &output),
        Err(error) => CommandResult::from_error("recommend", &error),
    }
}

fn execute(
    args: &PreferenceArgs,
    save: bool,
    analytics: &dyn AnalyticsSink,
) -> Result<RecommendOutput, ApplicationError> {
    let context = AppContext::load()?;
    let mut preferences = context.saved_preferences()?.unwrap_or_default();
    args.apply(&mut preferences)?;

    let recommendations = context.engine().recommend(&context.catalog, &preferences);

    if save {
        context.save_preferences(&preferences)?;
    }
    if save || !args.is_empty() {
        analytics.emit(AnalyticsEvent::preferences_changed("recommend", &preferences));
    }

    Ok(RecommendOutput {
        saved: save,
        empty: recommendations.is_empty(),
        preferences,
        recommendations,
    })
}
