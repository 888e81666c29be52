use brewguide_core::domain::preferences::{
    BrewingTime, CaffeineLevel, ExperienceLevel, FlavorNote, Intensity, OriginTag, PriceRange,
    RoastPreference, Selection, WizardPreferences,
};
use brewguide_core::errors::{ApplicationError, DomainError};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::commands::CommandResult;
use crate::context::AppContext;

/// Wizard answers as command-line flags. Unset flags keep the current answer.
#[derive(Args, Clone, Debug, Default)]
pub struct PreferenceArgs {
    #[arg(long, help = "beginner | intermediate | advanced")]
    pub experience: Option<String>,
    #[arg(long, help = "mild | medium | strong")]
    pub intensity: Option<String>,
    #[arg(
        long = "flavor",
        help = "Flavor note (repeatable): fruity, chocolatey, nutty, floral, earthy, sweet, any"
    )]
    pub flavors: Vec<String>,
    #[arg(long = "roast", help = "light | medium | dark | any")]
    pub roast_level: Option<String>,
    #[arg(long = "brewing-time", help = "quick | moderate | patient")]
    pub brewing_time: Option<String>,
    #[arg(long = "caffeine", help = "low | regular | high")]
    pub caffeine_level: Option<String>,
    #[arg(long = "origin", help = "Origin fragment such as Kenya (repeatable, `any` for all)")]
    pub origins: Vec<String>,
    #[arg(long, help = "budget | mid-range | premium")]
    pub budget: Option<String>,
}

impl PreferenceArgs {
    pub fn is_empty(&self) -> bool {
        self.experience.is_none()
            && self.intensity.is_none()
            && self.flavors.is_empty()
            && self.roast_level.is_none()
            && self.brewing_time.is_none()
            && self.caffeine_level.is_none()
            && self.origins.is_empty()
            && self.budget.is_none()
    }

    pub fn apply(&self, preferences: &mut WizardPreferences) -> Result<(), DomainError> {
        if let Some(value) = &self.experience {
            preferences.experience = value.parse::<ExperienceLevel>()?;
        }
        if let Some(value) = &self.intensity {
            preferences.intensity = value.parse::<Intensity>()?;
        }
        if !self.flavors.is_empty() {
            preferences.flavor_notes =
                Selection::<FlavorNote>::from_tags(self.flavors.iter().map(String::as_str))?;
        }
        if let Some(value) = &self.roast_level {
            preferences.roast_level = value.parse::<RoastPreference>()?;
        }
        if let Some(value) = &self.brewing_time {
            preferences.brewing_time = value.parse::<BrewingTime>()?;
        }
        if let Some(value) = &self.caffeine_level {
            preferences.caffeine_level = value.parse::<CaffeineLevel>()?;
        }
        if !self.origins.is_empty() {
            preferences.bean_origin =
                Selection::<OriginTag>::from_tags(self.origins.iter().map(String::as_str))?;
        }
        if let Some(value) = &self.budget {
            preferences.budget = value.parse::<PriceRange>()?;
        }
        Ok(())
    }
}

#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    #[command(about = "Show saved preferences (defaults when nothing is saved)")]
    Show,
    #[command(about = "Delete saved preferences")]
    Reset,
    #[command(about = "Toggle one flavor note; `any` clears the others")]
    ToggleFlavor { tag: String },
    #[command(about = "Toggle one origin fragment; `any` clears the others")]
    ToggleOrigin { origin: String },
    #[command(about = "Update answers and save")]
    Set(PreferenceArgs),
}

impl PrefsAction {
    fn name(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Reset => "reset",
            Self::ToggleFlavor { .. } => "toggle-flavor",
            Self::ToggleOrigin { .. } => "toggle-origin",
            Self::Set(_) => "set",
        }
    }
}

#[derive(Debug, Serialize)]
struct PrefsOutput<'a> {
    action: &'static str,
    stored: bool,
    preferences: &'a WizardPreferences,
}

pub fn run(action: &PrefsAction, analytics: &dyn AnalyticsSink) -> CommandResult {
    match execute(action, analytics) {
        Ok((stored, preferences)) => CommandResult::data(
            "prefs",
            &PrefsOutput { action: action.name(), stored, preferences: &preferences },
        ),
        Err(error) => CommandResult::from_error("prefs", &error),
    }
}

fn execute(
    action: &PrefsAction,
    analytics: &dyn AnalyticsSink,
) -> Result<(bool, WizardPreferences), ApplicationError> {
    let context = AppContext::load()?;
    let saved = context.saved_preferences()?;
    let stored = saved.is_some();
    let mut preferences = saved.unwrap_or_default();

    match action {
        PrefsAction::Show => return Ok((stored, preferences)),
        PrefsAction::Reset => {
            context.reset_preferences()?;
            let defaults = WizardPreferences::default();
            analytics.emit(AnalyticsEvent::preferences_changed(action.name(), &defaults));
            return Ok((false, defaults));
        }
        PrefsAction::ToggleFlavor { tag } => preferences.flavor_notes.toggle_tag(tag)?,
        PrefsAction::ToggleOrigin { origin } => preferences.bean_origin.toggle_tag(origin)?,
        PrefsAction::Set(args) => args.apply(&mut preferences)?,
    }

    context.save_preferences(&preferences)?;
    analytics.emit(AnalyticsEvent::preferences_changed(action.name(), &preferences));
    Ok((true, preferences))
}
