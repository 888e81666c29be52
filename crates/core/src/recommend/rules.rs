//! Named filter rules, one ordered list per catalog type.
//!
//! An item is recommended only when every rule in its list admits it.

use serde::{Deserialize, Serialize};

use super::fallback;
use super::flavor::note_matches;
use super::CatalogKind;
use crate::domain::coffee::{Body, Coffee, Roast};
use crate::domain::equipment::Equipment;
use crate::domain::preferences::{
    BrewingTime, CaffeineLevel, ExperienceLevel, Intensity, PriceRange, RoastPreference,
    WizardPreferences,
};
use crate::domain::recipe::{Difficulty, Recipe};

pub struct FilterRule<T: 'static> {
    pub name: &'static str,
    admits: fn(&T, &WizardPreferences) -> bool,
}

impl<T> FilterRule<T> {
    pub const fn new(name: &'static str, admits: fn(&T, &WizardPreferences) -> bool) -> Self {
        Self { name, admits }
    }

    pub fn admits(&self, item: &T, preferences: &WizardPreferences) -> bool {
        (self.admits)(item, preferences)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub rule: String,
    pub passed: bool,
}

/// A catalog record the wizard can recommend.
pub trait Recommendable: Clone + 'static {
    const KIND: CatalogKind;

    fn rules() -> &'static [FilterRule<Self>];

    /// Predicate used when no item passes [`Recommendable::rules`].
    fn fallback_admits(&self, preferences: &WizardPreferences) -> bool;

    fn item_id(&self) -> &str;

    fn display_name(&self) -> &str;
}

pub fn admits_all<T: Recommendable>(item: &T, preferences: &WizardPreferences) -> bool {
    T::rules().iter().all(|rule| rule.admits(item, preferences))
}

pub fn filter_items<T: Recommendable>(items: &[T], preferences: &WizardPreferences) -> Vec<T> {
    items.iter().filter(|item| admits_all(*item, preferences)).cloned().collect()
}

/// Every rule's verdict for one item, in evaluation order.
pub fn evaluate_rules<T: Recommendable>(
    item: &T,
    preferences: &WizardPreferences,
) -> Vec<RuleVerdict> {
    T::rules()
        .iter()
        .map(|rule| RuleVerdict {
            rule: rule.name.to_string(),
            passed: rule.admits(item, preferences),
        })
        .collect()
}

pub const COFFEE_RULES: &[FilterRule<Coffee>] = &[
    FilterRule::new("roast", coffee_roast),
    FilterRule::new("origin", coffee_origin),
    FilterRule::new("intensity_body", coffee_intensity_body),
    FilterRule::new("flavor_notes", coffee_flavor_notes),
];

pub const RECIPE_RULES: &[FilterRule<Recipe>] = &[
    FilterRule::new("brewing_time", recipe_brewing_time),
    FilterRule::new("difficulty", recipe_difficulty),
    FilterRule::new("intensity_heuristic", recipe_intensity_heuristic),
    FilterRule::new("caffeine_heuristic", recipe_caffeine_heuristic),
];

pub const EQUIPMENT_RULES: &[FilterRule<Equipment>] = &[
    FilterRule::new("budget", equipment_budget),
    FilterRule::new("difficulty", equipment_difficulty),
];

/// `medium-dark` has no wizard counterpart, so it only passes for `any`.
pub fn roast_satisfies(preference: RoastPreference, roast: Roast) -> bool {
    match preference {
        RoastPreference::Any => true,
        RoastPreference::Light => roast == Roast::Light,
        RoastPreference::Medium => roast == Roast::Medium,
        RoastPreference::Dark => roast == Roast::Dark,
    }
}

fn coffee_roast(coffee: &Coffee, preferences: &WizardPreferences) -> bool {
    roast_satisfies(preferences.roast_level, coffee.roast)
}

fn coffee_origin(coffee: &Coffee, preferences: &WizardPreferences) -> bool {
    match preferences.bean_origin.constraint() {
        None => true,
        Some(origins) => origins.iter().any(|origin| coffee.origin.mentions(origin.as_str())),
    }
}

fn coffee_intensity_body(coffee: &Coffee, preferences: &WizardPreferences) -> bool {
    match preferences.intensity {
        Intensity::Mild => coffee.body != Body::Full,
        Intensity::Strong => coffee.body != Body::Light,
        Intensity::Medium => true,
    }
}

fn coffee_flavor_notes(coffee: &Coffee, preferences: &WizardPreferences) -> bool {
    match preferences.flavor_notes.constraint() {
        None => true,
        Some(notes) => notes.iter().any(|note| note_matches(*note, &coffee.flavor_profile)),
    }
}

// Times without a leading integer never restrict the result.
fn recipe_brewing_time(recipe: &Recipe, preferences: &WizardPreferences) -> bool {
    let Some(amount) = recipe.time.amount() else {
        return true;
    };
    let in_hours = recipe.time.is_measured_in_hours();
    match preferences.brewing_time {
        BrewingTime::Quick => !in_hours && amount <= 3,
        BrewingTime::Patient => in_hours || amount >= 5,
        BrewingTime::Moderate => true,
    }
}

fn recipe_difficulty(recipe: &Recipe, preferences: &WizardPreferences) -> bool {
    !(preferences.experience == ExperienceLevel::Beginner && recipe.difficulty == Difficulty::Hard)
}

// Strength proxy based on the recipe id naming convention.
fn recipe_intensity_heuristic(recipe: &Recipe, preferences: &WizardPreferences) -> bool {
    match preferences.intensity {
        Intensity::Strong => !recipe.id.contains("drip"),
        Intensity::Mild => !recipe.id.contains("espresso"),
        Intensity::Medium => true,
    }
}

fn recipe_caffeine_heuristic(recipe: &Recipe, preferences: &WizardPreferences) -> bool {
    !(preferences.caffeine_level == CaffeineLevel::Low && recipe.id.contains("espresso"))
}

// Only the `budget` answer narrows by price; `mid-range` and `premium` see everything.
fn equipment_budget(item: &Equipment, preferences: &WizardPreferences) -> bool {
    match preferences.budget {
        PriceRange::Budget => item.price_range == PriceRange::Budget,
        PriceRange::MidRange | PriceRange::Premium => true,
    }
}

fn equipment_difficulty(item: &Equipment, preferences: &WizardPreferences) -> bool {
    !(preferences.experience == ExperienceLevel::Beginner
        && item.difficulty == ExperienceLevel::Advanced)
}

impl Recommendable for Coffee {
    const KIND: CatalogKind = CatalogKind::Coffee;

    fn rules() -> &'static [FilterRule<Self>] {
        COFFEE_RULES
    }

    fn fallback_admits(&self, preferences: &WizardPreferences) -> bool {
        fallback::coffee_fallback(self, preferences)
    }

    fn item_id(&self) -> &str {
        &self.id.0
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Recommendable for Recipe {
    const KIND: CatalogKind = CatalogKind::Recipe;

    fn rules() -> &'static [FilterRule<Self>] {
        RECIPE_RULES
    }

    fn fallback_admits(&self, preferences: &WizardPreferences) -> bool {
        fallback::recipe_fallback(self, preferences)
    }

    fn item_id(&self) -> &str {
        &self.id.0
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl Recommendable for Equipment {
    const KIND: CatalogKind = CatalogKind::Equipment;

    fn rules() -> &'static [FilterRule<Self>] {
        EQUIPMENT_RULES
    }

    fn fallback_admits(&self, preferences: &WizardPreferences) -> bool {
        fallback::equipment_fallback(self, preferences)
    }

    fn item_id(&self) -> &str {
        &self.id.0
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
