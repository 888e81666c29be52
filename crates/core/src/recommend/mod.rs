//! Preference-driven recommendation wizard.
//!
//! Preferences are matched against each catalog through an ordered list of
//! named rules. When nothing matches, a per-catalog fallback policy supplies a
//! broader default subset. Results are truncated to presentation limits and
//! paired with a short list of brewing tips.

mod engine;
pub mod fallback;
pub mod flavor;
pub mod rules;
pub mod tips;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub use engine::{
    select, DeterministicRecommendationEngine, RecommendationEngine, RecommendationLimits,
    RecommendationSet,
};
pub use rules::{evaluate_rules, filter_items, FilterRule, Recommendable, RuleVerdict};

/// Items shown per catalog list.
pub const DEFAULT_RESULT_LIMIT: usize = 3;

/// Tips shown alongside results.
pub const DEFAULT_TIP_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Coffee,
    Recipe,
    Equipment,
}

impl CatalogKind {
    pub const ALL: [Self; 3] = [Self::Coffee, Self::Recipe, Self::Equipment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Recipe => "recipe",
            Self::Equipment => "equipment",
        }
    }
}

impl Display for CatalogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "coffee" | "coffees" => Ok(Self::Coffee),
            "recipe" | "recipes" => Ok(Self::Recipe),
            "equipment" | "gear" => Ok(Self::Equipment),
            _ => Err(DomainError::unknown("catalog_kind", value)),
        }
    }
}
