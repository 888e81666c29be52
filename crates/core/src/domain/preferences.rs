use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DomainError;

/// Wire tag for "match everything" in a [`Selection`].
pub const ANY_TAG: &str = "any";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Mild,
    Medium,
    Strong,
}

impl Intensity {
    pub const ALL: [Self; 3] = [Self::Mild, Self::Medium, Self::Strong];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlavorNote {
    Fruity,
    Chocolatey,
    Nutty,
    Floral,
    Earthy,
    Sweet,
}

impl FlavorNote {
    pub const ALL: [Self; 6] =
        [Self::Fruity, Self::Chocolatey, Self::Nutty, Self::Floral, Self::Earthy, Self::Sweet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fruity => "fruity",
            Self::Chocolatey => "chocolatey",
            Self::Nutty => "nutty",
            Self::Floral => "floral",
            Self::Earthy => "earthy",
            Self::Sweet => "sweet",
        }
    }
}

/// Roast asked for by the wizard. Catalog roasts are [`crate::domain::coffee::Roast`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoastPreference {
    Light,
    Medium,
    Dark,
    Any,
}

impl RoastPreference {
    pub const ALL: [Self; 4] = [Self::Light, Self::Medium, Self::Dark, Self::Any];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
            Self::Any => "any",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrewingTime {
    Quick,
    Moderate,
    Patient,
}

impl BrewingTime {
    pub const ALL: [Self; 3] = [Self::Quick, Self::Moderate, Self::Patient];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Moderate => "moderate",
            Self::Patient => "patient",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineLevel {
    Low,
    Regular,
    High,
}

impl CaffeineLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Regular, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Regular => "regular",
            Self::High => "high",
        }
    }
}

/// Shared by the wizard budget answer and equipment price ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    Budget,
    MidRange,
    Premium,
}

impl PriceRange {
    pub const ALL: [Self; 3] = [Self::Budget, Self::MidRange, Self::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Premium => "premium",
        }
    }
}

macro_rules! wire_enum_impls {
    ($($ty:ty => $field:literal),* $(,)?) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = DomainError;

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    let normalized = value.trim().to_ascii_lowercase();
                    Self::ALL
                        .into_iter()
                        .find(|candidate| candidate.as_str() == normalized)
                        .ok_or_else(|| DomainError::unknown($field, value))
                }
            }
        )*
    };
}

wire_enum_impls! {
    ExperienceLevel => "experience",
    Intensity => "intensity",
    FlavorNote => "flavor_note",
    RoastPreference => "roast_level",
    BrewingTime => "brewing_time",
    CaffeineLevel => "caffeine_level",
    PriceRange => "budget",
}

/// A multi-select answer where [`ANY_TAG`] dominates every other value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection<T> {
    Any,
    Only(Vec<T>),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Only(Vec::new())
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        let mut deduped = Vec::new();
        for value in values {
            if !deduped.contains(&value) {
                deduped.push(value);
            }
        }
        Self::Only(deduped)
    }

    /// Concrete values to filter on, or `None` when the dimension is unconstrained.
    pub fn constraint(&self) -> Option<&[T]> {
        match self {
            Self::Any => None,
            Self::Only(values) if values.is_empty() => None,
            Self::Only(values) => Some(values.as_slice()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::Any => false,
            Self::Only(values) => values.contains(value),
        }
    }

    /// Wizard toggle for a concrete value. Selecting a value while `Any` is
    /// active replaces `Any`; selecting an already chosen value removes it.
    pub fn toggle(&mut self, value: T) {
        match self {
            Self::Any => *self = Self::Only(vec![value]),
            Self::Only(values) => {
                if let Some(position) = values.iter().position(|existing| existing == &value) {
                    values.remove(position);
                } else {
                    values.push(value);
                }
            }
        }
    }

    /// Wizard toggle for the sentinel: clears every concrete selection.
    pub fn toggle_any(&mut self) {
        *self = match self {
            Self::Any => Self::Only(Vec::new()),
            Self::Only(_) => Self::Any,
        };
    }
}

impl<T> Selection<T>
where
    T: FromStr<Err = DomainError> + Clone + PartialEq,
{
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Result<Self, DomainError> {
        let mut parsed = Vec::new();
        for tag in tags {
            if tag.trim().eq_ignore_ascii_case(ANY_TAG) {
                return Ok(Self::Any);
            }
            parsed.push(tag.parse::<T>()?);
        }
        Ok(Self::only(parsed))
    }

    /// Applies one wizard click given as a raw tag (`any` or a concrete value).
    pub fn toggle_tag(&mut self, tag: &str) -> Result<(), DomainError> {
        if tag.trim().eq_ignore_ascii_case(ANY_TAG) {
            self.toggle_any();
        } else {
            self.toggle(tag.parse::<T>()?);
        }
        Ok(())
    }
}

impl<T: Display> Selection<T> {
    pub fn tags(&self) -> Vec<String> {
        match self {
            Self::Any => vec![ANY_TAG.to_string()],
            Self::Only(values) => values.iter().map(ToString::to_string).collect(),
        }
    }
}

impl<T: Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tags())
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr<Err = DomainError> + Clone + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Self::from_tags(raw.iter().map(String::as_str)).map_err(D::Error::custom)
    }
}

/// Origin fragment selected in the wizard. Kept verbatim; matching is case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OriginTag(pub String);

impl OriginTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OriginTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OriginTag {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::unknown("bean_origin", value));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardPreferences {
    pub experience: ExperienceLevel,
    pub intensity: Intensity,
    #[serde(default)]
    pub flavor_notes: Selection<FlavorNote>,
    pub roast_level: RoastPreference,
    pub brewing_time: BrewingTime,
    pub caffeine_level: CaffeineLevel,
    #[serde(default = "any_origin")]
    pub bean_origin: Selection<OriginTag>,
    pub budget: PriceRange,
}

fn any_origin() -> Selection<OriginTag> {
    Selection::Any
}

impl Default for WizardPreferences {
    fn default() -> Self {
        Self {
            experience: ExperienceLevel::Beginner,
            intensity: Intensity::Medium,
            flavor_notes: Selection::default(),
            roast_level: RoastPreference::Any,
            brewing_time: BrewingTime::Moderate,
            caffeine_level: CaffeineLevel::Regular,
            bean_origin: Selection::Any,
            budget: PriceRange::MidRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_tag_collapses_selection() {
        let selection =
            Selection::<FlavorNote>::from_tags(["fruity", "any", "nutty"]).expect("valid tags");
        assert_eq!(selection, Selection::Any);
        assert!(selection.constraint().is_none());
    }

    #[test]
    fn empty_selection_imposes_no_constraint() {
        let selection = Selection::<FlavorNote>::default();
        assert!(selection.constraint().is_none());
        assert!(!selection.is_any());
    }

    #[test]
    fn from_tags_dedupes_in_first_seen_order() {
        let selection = Selection::<FlavorNote>::from_tags(["Sweet", "fruity", " sweet "])
            .expect("valid tags");
        assert_eq!(selection, Selection::Only(vec![FlavorNote::Sweet, FlavorNote::Fruity]));
    }

    #[test]
    fn selecting_any_clears_concrete_values() {
        let mut selection = Selection::only([FlavorNote::Fruity, FlavorNote::Floral]);
        selection.toggle_tag("any").expect("any is valid");
        assert_eq!(selection, Selection::Any);
    }

    #[test]
    fn selecting_concrete_value_after_any_removes_any() {
        let mut selection = Selection::<FlavorNote>::Any;
        selection.toggle_tag("earthy").expect("earthy is valid");
        assert_eq!(selection, Selection::Only(vec![FlavorNote::Earthy]));
    }

    #[test]
    fn toggling_selected_value_removes_it() {
        let mut selection = Selection::only([FlavorNote::Nutty, FlavorNote::Sweet]);
        selection.toggle(FlavorNote::Nutty);
        assert_eq!(selection, Selection::Only(vec![FlavorNote::Sweet]));
    }

    #[test]
    fn unknown_flavor_tag_is_rejected() {
        let error = Selection::<FlavorNote>::from_tags(["smoky"]).expect_err("unknown tag");
        assert_eq!(error, DomainError::unknown("flavor_note", "smoky"));
    }

    #[test]
    fn budget_parses_kebab_case_wire_value() {
        assert_eq!("Mid-Range".parse::<PriceRange>(), Ok(PriceRange::MidRange));
        assert_eq!(PriceRange::MidRange.to_string(), "mid-range");
    }

    #[test]
    fn preferences_round_trip_through_json_with_sentinel() {
        let preferences = WizardPreferences {
            flavor_notes: Selection::only([FlavorNote::Chocolatey]),
            bean_origin: Selection::Any,
            ..WizardPreferences::default()
        };

        let json = serde_json::to_value(&preferences).expect("serializable");
        assert_eq!(json["bean_origin"], serde_json::json!(["any"]));
        assert_eq!(json["flavor_notes"], serde_json::json!(["chocolatey"]));
        assert_eq!(json["budget"], "mid-range");

        let restored: WizardPreferences = serde_json::from_value(json).expect("deserializable");
        assert_eq!(restored, preferences);
    }

    #[test]
    fn missing_selections_fall_back_to_defaults() {
        let restored: WizardPreferences = serde_json::from_str(
            r#"{"experience":"advanced","intensity":"strong","roast_level":"dark",
                "brewing_time":"quick","caffeine_level":"high","budget":"premium"}"#,
        )
        .expect("deserializable");

        assert!(restored.flavor_notes.constraint().is_none());
        assert!(restored.bean_origin.is_any());
    }
}
