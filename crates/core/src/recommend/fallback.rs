//! Substitute predicates applied when a primary filter matches nothing.

use super::rules::Recommendable;
use crate::domain::coffee::{Acidity, Coffee, Roast};
use crate::domain::equipment::Equipment;
use crate::domain::preferences::{ExperienceLevel, WizardPreferences};
use crate::domain::recipe::{Difficulty, Recipe};

/// Beginners get a narrow "safe" subset; everyone else gets the whole catalog.
pub(crate) fn coffee_fallback(coffee: &Coffee, preferences: &WizardPreferences) -> bool {
    match preferences.experience {
        ExperienceLevel::Beginner => {
            coffee.roast == Roast::Medium && coffee.acidity != Acidity::High
        }
        ExperienceLevel::Intermediate | ExperienceLevel::Advanced => true,
    }
}

pub(crate) fn recipe_fallback(recipe: &Recipe, _preferences: &WizardPreferences) -> bool {
    recipe.difficulty == Difficulty::Easy
}

pub(crate) fn equipment_fallback(item: &Equipment, _preferences: &WizardPreferences) -> bool {
    item.difficulty == ExperienceLevel::Beginner
}

/// Items admitted by the fallback policy, in catalog order. May be empty.
pub fn apply_fallback<T: Recommendable>(items: &[T], preferences: &WizardPreferences) -> Vec<T> {
    items.iter().filter(|item| item.fallback_admits(preferences)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn beginner_coffee_fallback_is_medium_roast_without_high_acidity() {
        let catalog = Catalog::builtin();
        let fallback = apply_fallback(catalog.all_coffees(), &WizardPreferences::default());

        assert!(!fallback.is_empty());
        assert!(fallback
            .iter()
            .all(|coffee| coffee.roast == Roast::Medium && coffee.acidity != Acidity::High));
    }

    #[test]
    fn experienced_coffee_fallback_is_whole_catalog() {
        let catalog = Catalog::builtin();
        for experience in [ExperienceLevel::Intermediate, ExperienceLevel::Advanced] {
            let preferences = WizardPreferences { experience, ..WizardPreferences::default() };
            assert_eq!(apply_fallback(catalog.all_coffees(), &preferences), catalog.all_coffees());
        }
    }

    #[test]
    fn recipe_fallback_ignores_experience() {
        let catalog = Catalog::builtin();
        for experience in ExperienceLevel::ALL {
            let preferences = WizardPreferences { experience, ..WizardPreferences::default() };
            let fallback = apply_fallback(catalog.all_recipes(), &preferences);
            assert!(!fallback.is_empty());
            assert!(fallback.iter().all(|recipe| recipe.difficulty == Difficulty::Easy));
        }
    }

    #[test]
    fn equipment_fallback_is_beginner_gear() {
        let catalog = Catalog::builtin();
        let fallback = apply_fallback(catalog.all_equipment(), &WizardPreferences::default());
        assert!(fallback.iter().all(|item| item.difficulty == ExperienceLevel::Beginner));
    }

    #[test]
    fn fallback_over_empty_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(apply_fallback(catalog.all_coffees(), &WizardPreferences::default()).is_empty());
    }
}
