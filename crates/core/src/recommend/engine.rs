use serde::{Deserialize, Serialize};

use super::rules::{admits_all, Recommendable};
use super::tips::build_tips;
use super::{CatalogKind, DEFAULT_RESULT_LIMIT, DEFAULT_TIP_LIMIT};
use crate::catalog::Catalog;
use crate::domain::coffee::Coffee;
use crate::domain::equipment::Equipment;
use crate::domain::preferences::WizardPreferences;
use crate::domain::recipe::Recipe;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    pub results: usize,
    pub tips: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self { results: DEFAULT_RESULT_LIMIT, tips: DEFAULT_TIP_LIMIT }
    }
}

/// Derived on every preference change and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub coffees: Vec<Coffee>,
    pub recipes: Vec<Recipe>,
    pub equipment: Vec<Equipment>,
    pub tips: Vec<String>,
    /// Catalogs whose primary filter matched nothing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<CatalogKind>,
}

impl RecommendationSet {
    /// True when all three item lists are empty; callers render an empty state.
    pub fn is_empty(&self) -> bool {
        self.coffees.is_empty() && self.recipes.is_empty() && self.equipment.is_empty()
    }

    pub fn used_fallback(&self, kind: CatalogKind) -> bool {
        self.fallbacks.contains(&kind)
    }
}

pub trait RecommendationEngine: Send + Sync {
    fn recommend(&self, catalog: &Catalog, preferences: &WizardPreferences) -> RecommendationSet;
}

#[derive(Clone, Debug, Default)]
pub struct DeterministicRecommendationEngine {
    limits: RecommendationLimits,
}

impl DeterministicRecommendationEngine {
    pub fn new(limits: RecommendationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> RecommendationLimits {
        self.limits
    }
}

impl RecommendationEngine for DeterministicRecommendationEngine {
    fn recommend(&self, catalog: &Catalog, preferences: &WizardPreferences) -> RecommendationSet {
        let mut fallbacks = Vec::new();

        let limit = self.limits.results;

        let coffees = select(catalog.all_coffees(), preferences, limit, &mut fallbacks);
        let recipes = select(catalog.all_recipes(), preferences, limit, &mut fallbacks);
        let equipment = select(catalog.all_equipment(), preferences, limit, &mut fallbacks);
        let tips = build_tips(preferences, self.limits.tips);

        RecommendationSet { coffees, recipes, equipment, tips, fallbacks }
    }
}

/// First `limit` matches in catalog order, or the first `limit` fallback items
/// when nothing matches.
pub fn select<T: Recommendable>(
    items: &[T],
    preferences: &WizardPreferences,
    limit: usize,
    fallbacks: &mut Vec<CatalogKind>,
) -> Vec<T> {
    let mut matches = items.iter().filter(|item| admits_all(*item, preferences)).peekable();
    if matches.peek().is_some() {
        return matches.take(limit).cloned().collect();
    }

    fallbacks.push(T::KIND);
    let selected: Vec<T> = items
        .iter()
        .filter(|item| item.fallback_admits(preferences))
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!(
        event_name = "core.recommend.fallback_applied",
        catalog = T::KIND.as_str(),
        catalog_size = items.len(),
        selected = selected.len(),
        "primary filter matched nothing; fallback policy applied"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coffee::Roast;
    use crate::domain::preferences::{
        ExperienceLevel, FlavorNote, Intensity, OriginTag, PriceRange, RoastPreference, Selection,
    };

    fn engine() -> DeterministicRecommendationEngine {
        DeterministicRecommendationEngine::default()
    }

    #[test]
    fn default_limits_cap_lists() {
        let set = engine().recommend(&Catalog::builtin(), &WizardPreferences::default());
        assert!(set.coffees.len() <= 3);
        assert!(set.recipes.len() <= 3);
        assert!(set.equipment.len() <= 3);
        assert!(set.tips.len() <= 5);
    }

    #[test]
    fn results_keep_catalog_order() {
        let catalog = Catalog::builtin();
        let preferences = WizardPreferences {
            experience: ExperienceLevel::Advanced,
            ..WizardPreferences::default()
        };
        let set = engine().recommend(&catalog, &preferences);
        let expected: Vec<_> = catalog.all_coffees().iter().take(3).cloned().collect();
        assert_eq!(set.coffees, expected);
        assert!(set.fallbacks.is_empty());
    }

    #[test]
    fn advanced_user_without_matches_gets_whole_catalog_prefix() {
        let catalog = Catalog::builtin();
        let preferences = WizardPreferences {
            experience: ExperienceLevel::Advanced,
            roast_level: RoastPreference::Light,
            bean_origin: Selection::only([OriginTag("Kenya".to_string())]),
            flavor_notes: Selection::only([FlavorNote::Earthy]),
            ..WizardPreferences::default()
        };

        let set = engine().recommend(&catalog, &preferences);
        assert!(set.used_fallback(CatalogKind::Coffee));
        let expected: Vec<_> = catalog.all_coffees().iter().take(3).cloned().collect();
        assert_eq!(set.coffees, expected);
    }

    #[test]
    fn beginner_without_matches_gets_safe_subset() {
        let preferences = WizardPreferences {
            roast_level: RoastPreference::Dark,
            intensity: Intensity::Mild,
            ..WizardPreferences::default()
        };

        let set = engine().recommend(&Catalog::builtin(), &preferences);
        assert!(set.used_fallback(CatalogKind::Coffee));
        assert!(!set.coffees.is_empty());
        assert!(set.coffees.iter().all(|coffee| coffee.roast == Roast::Medium));
    }

    #[test]
    fn empty_catalog_yields_empty_lists_without_panicking() {
        let set = engine().recommend(&Catalog::default(), &WizardPreferences::default());
        assert!(set.is_empty());
        assert!(!set.tips.is_empty());
        assert_eq!(
            set.fallbacks,
            vec![CatalogKind::Coffee, CatalogKind::Recipe, CatalogKind::Equipment]
        );
    }

    #[test]
    fn custom_limits_are_honoured() {
        let engine = DeterministicRecommendationEngine::new(RecommendationLimits {
            results: 1,
            tips: 2,
        });
        let preferences =
            WizardPreferences { budget: PriceRange::Premium, ..WizardPreferences::default() };
        let set = engine.recommend(&Catalog::builtin(), &preferences);
        assert_eq!(set.coffees.len(), 1);
        assert_eq!(set.recipes.len(), 1);
        assert_eq!(set.equipment.len(), 1);
        assert_eq!(set.tips.len(), 2);
    }

    #[test]
    fn zero_result_limit_does_not_trigger_fallback() {
        let engine = DeterministicRecommendationEngine::new(RecommendationLimits {
            results: 0,
            tips: 5,
        });
        let set = engine.recommend(&Catalog::builtin(), &WizardPreferences::default());
        assert!(set.is_empty());
        assert!(!set.used_fallback(CatalogKind::Recipe));
    }
}
