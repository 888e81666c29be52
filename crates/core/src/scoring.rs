//! Personalization scoring for "recommended for you" ordering.
//!
//! Scores are additive and uncapped. They are only meaningful relative to each
//! other and never filter anything out.

use serde::{Deserialize, Serialize};

use crate::domain::coffee::{Acidity, Coffee, Roast};
use crate::domain::equipment::Equipment;
use crate::domain::preferences::{ExperienceLevel, Intensity, RoastPreference, WizardPreferences};
use crate::domain::recipe::{Difficulty, Recipe};
use crate::recommend::flavor::matching_note_count;
use crate::recommend::rules::roast_satisfies;

pub const ROAST_MATCH_POINTS: u32 = 20;
pub const BEGINNER_EASY_POINTS: u32 = 15;
pub const INTERMEDIATE_NOT_HARD_POINTS: u32 = 10;
pub const ADVANCED_POINTS: u32 = 5;
pub const FLAVOR_NOTE_POINTS: u32 = 10;
pub const ACIDITY_INTENSITY_POINTS: u32 = 10;

/// Facets an item exposes to the scorer. Missing facets contribute nothing.
pub trait PreferenceSubject {
    fn roast(&self) -> Option<Roast> {
        None
    }

    fn difficulty(&self) -> Option<Difficulty> {
        None
    }

    fn flavor_profile(&self) -> &[String] {
        &[]
    }

    fn acidity(&self) -> Option<Acidity> {
        None
    }
}

impl PreferenceSubject for Coffee {
    fn roast(&self) -> Option<Roast> {
        Some(self.roast)
    }

    fn flavor_profile(&self) -> &[String] {
        &self.flavor_profile
    }

    fn acidity(&self) -> Option<Acidity> {
        Some(self.acidity)
    }
}

impl PreferenceSubject for Recipe {
    fn difficulty(&self) -> Option<Difficulty> {
        Some(self.difficulty)
    }
}

// Equipment is graded by experience level and is never easy or hard.
impl PreferenceSubject for Equipment {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub roast: u32,
    pub difficulty: u32,
    pub flavor: u32,
    pub acidity: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.roast + self.difficulty + self.flavor + self.acidity
    }
}

pub fn score_breakdown<S: PreferenceSubject + ?Sized>(
    item: &S,
    preferences: &WizardPreferences,
) -> ScoreBreakdown {
    ScoreBreakdown {
        roast: roast_points(item, preferences),
        difficulty: difficulty_points(item, preferences),
        flavor: flavor_points(item, preferences),
        acidity: acidity_points(item, preferences),
    }
}

/// Zero when no preferences are stored.
pub fn score<S: PreferenceSubject + ?Sized>(
    item: &S,
    preferences: Option<&WizardPreferences>,
) -> u32 {
    preferences.map_or(0, |preferences| score_breakdown(item, preferences).total())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub item: T,
    pub score: u32,
}

/// Descending by score; equal scores keep input order.
pub fn rank_by_preference<T: PreferenceSubject + Clone>(
    items: &[T],
    preferences: Option<&WizardPreferences>,
) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = items
        .iter()
        .map(|item| Ranked { item: item.clone(), score: score(item, preferences) })
        .collect();
    ranked.sort_by(|left, right| right.score.cmp(&left.score));
    ranked
}

fn roast_points<S: PreferenceSubject + ?Sized>(item: &S, preferences: &WizardPreferences) -> u32 {
    match item.roast() {
        Some(roast)
            if preferences.roast_level != RoastPreference::Any
                && roast_satisfies(preferences.roast_level, roast) =>
        {
            ROAST_MATCH_POINTS
        }
        _ => 0,
    }
}

fn difficulty_points<S: PreferenceSubject + ?Sized>(
    item: &S,
    preferences: &WizardPreferences,
) -> u32 {
    let difficulty = item.difficulty();
    match preferences.experience {
        ExperienceLevel::Beginner if difficulty == Some(Difficulty::Easy) => {
            BEGINNER_EASY_POINTS
        }
        ExperienceLevel::Intermediate if difficulty != Some(Difficulty::Hard) => {
            INTERMEDIATE_NOT_HARD_POINTS
        }
        ExperienceLevel::Advanced => ADVANCED_POINTS,
        _ => 0,
    }
}

fn flavor_points<S: PreferenceSubject + ?Sized>(item: &S, preferences: &WizardPreferences) -> u32 {
    let Some(notes) = preferences.flavor_notes.constraint() else {
        return 0;
    };
    let matches = matching_note_count(notes, item.flavor_profile());
    FLAVOR_NOTE_POINTS.saturating_mul(u32::try_from(matches).unwrap_or(u32::MAX))
}

fn acidity_points<S: PreferenceSubject + ?Sized>(item: &S, preferences: &WizardPreferences) -> u32 {
    let Some(acidity) = item.acidity() else {
        return 0;
    };
    let aligned = match preferences.intensity {
        Intensity::Mild => acidity == Acidity::Low,
        Intensity::Strong => matches!(acidity, Acidity::Medium | Acidity::High),
        Intensity::Medium => acidity == Acidity::Medium,
    };
    if aligned {
        ACIDITY_INTENSITY_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::coffee::CoffeeId;
    use crate::domain::preferences::{FlavorNote, Selection};

    fn coffee(id: &str) -> Coffee {
        Catalog::builtin()
            .coffee(&CoffeeId(id.to_string()))
            .cloned()
            .expect("builtin coffee")
    }

    #[test]
    fn absent_preferences_score_zero() {
        let catalog = Catalog::builtin();
        for item in catalog.all_coffees() {
            assert_eq!(score(item, None), 0);
        }
        for item in catalog.all_recipes() {
            assert_eq!(score(item, None), 0);
        }
    }

    #[test]
    fn rules_accumulate_without_early_exit() {
        let preferences = WizardPreferences {
            experience: ExperienceLevel::Advanced,
            intensity: Intensity::Strong,
            roast_level: RoastPreference::Light,
            flavor_notes: Selection::only([FlavorNote::Fruity, FlavorNote::Floral]),
            ..WizardPreferences::default()
        };

        // Blueberry (fruity), Jasmine (no keyword), Lemon zest (no keyword).
        let breakdown = score_breakdown(&coffee("ethiopian-yirgacheffe"), &preferences);
        assert_eq!(
            breakdown,
            ScoreBreakdown { roast: 20, difficulty: 5, flavor: 10, acidity: 10 }
        );
        assert_eq!(breakdown.total(), 45);
    }

    #[test]
    fn any_roast_never_awards_roast_points() {
        let preferences = WizardPreferences::default();
        for item in Catalog::builtin().all_coffees() {
            assert_eq!(score_breakdown(item, &preferences).roast, 0);
        }
    }

    #[test]
    fn difficulty_alignment_depends_on_experience() {
        let catalog = Catalog::builtin();
        let latte = &catalog.all_recipes()[0];
        let espresso = catalog
            .all_recipes()
            .iter()
            .find(|recipe| recipe.difficulty == Difficulty::Hard)
            .expect("hard recipe");

        let at = |experience| WizardPreferences { experience, ..WizardPreferences::default() };
        assert_eq!(score_breakdown(latte, &at(ExperienceLevel::Beginner)).difficulty, 15);
        assert_eq!(score_breakdown(espresso, &at(ExperienceLevel::Beginner)).difficulty, 0);
        assert_eq!(score_breakdown(latte, &at(ExperienceLevel::Intermediate)).difficulty, 10);
        assert_eq!(score_breakdown(espresso, &at(ExperienceLevel::Intermediate)).difficulty, 0);
        assert_eq!(score_breakdown(espresso, &at(ExperienceLevel::Advanced)).difficulty, 5);
    }

    #[test]
    fn items_without_difficulty_still_align_with_intermediate_and_advanced() {
        let kenya = coffee("kenya-aa");
        let at = |experience| WizardPreferences { experience, ..WizardPreferences::default() };

        assert_eq!(score_breakdown(&kenya, &at(ExperienceLevel::Beginner)).difficulty, 0);
        assert_eq!(score_breakdown(&kenya, &at(ExperienceLevel::Intermediate)).difficulty, 10);
        assert_eq!(score_breakdown(&kenya, &at(ExperienceLevel::Advanced)).difficulty, 5);
    }

    #[test]
    fn equipment_is_never_easy_or_hard() {
        let catalog = Catalog::builtin();
        let at = |experience| WizardPreferences { experience, ..WizardPreferences::default() };
        assert!(catalog
            .all_equipment()
            .iter()
            .any(|item| item.difficulty == ExperienceLevel::Advanced));

        for item in catalog.all_equipment() {
            assert_eq!(score_breakdown(item, &at(ExperienceLevel::Beginner)).difficulty, 0);
            assert_eq!(score_breakdown(item, &at(ExperienceLevel::Intermediate)).difficulty, 10);
            assert_eq!(score_breakdown(item, &at(ExperienceLevel::Advanced)).difficulty, 5);
        }
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let catalog = Catalog::builtin();
        let ranked = rank_by_preference(catalog.all_recipes(), None);
        let ids: Vec<_> = ranked.iter().map(|entry| entry.item.id.clone()).collect();
        let expected: Vec<_> =
            catalog.all_recipes().iter().map(|recipe| recipe.id.clone()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn ranking_orders_by_descending_score() {
        let preferences = WizardPreferences {
            roast_level: RoastPreference::Dark,
            flavor_notes: Selection::only([FlavorNote::Chocolatey]),
            ..WizardPreferences::default()
        };
        let ranked = rank_by_preference(Catalog::builtin().all_coffees(), Some(&preferences));
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(ranked[0].item.id.0, "sumatra-mandheling");
    }
}
