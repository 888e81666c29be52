use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    Hot,
    Cold,
    Beginner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Unspecified,
}

/// Free-text preparation time (`"4 minutes"`, `"12-24 hours"`) parsed once.
///
/// `amount` is the leading integer of the text and is `None` when the text does
/// not start with digits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BrewDuration {
    raw: String,
    amount: Option<u32>,
    unit: TimeUnit,
}

impl BrewDuration {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let amount = leading_integer(&raw);
        let lowered = raw.to_ascii_lowercase();
        let unit = if lowered.contains("hour") {
            TimeUnit::Hours
        } else if lowered.contains("min") {
            TimeUnit::Minutes
        } else if lowered.contains("sec") {
            TimeUnit::Seconds
        } else {
            TimeUnit::Unspecified
        };
        Self { raw, amount, unit }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn amount(&self) -> Option<u32> {
        self.amount
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn is_measured_in_hours(&self) -> bool {
        self.unit == TimeUnit::Hours
    }
}

// Overlong numbers saturate so they still compare as large.
fn leading_integer(text: &str) -> Option<u32> {
    let digits: String =
        text.trim_start().chars().take_while(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

impl From<String> for BrewDuration {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<BrewDuration> for String {
    fn from(value: BrewDuration) -> Self {
        value.raw
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub category: RecipeCategory,
    pub difficulty: Difficulty,
    pub time: BrewDuration,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes() {
        let time = BrewDuration::parse("4 minutes");
        assert_eq!(time.amount(), Some(4));
        assert_eq!(time.unit(), TimeUnit::Minutes);
        assert!(!time.is_measured_in_hours());
    }

    #[test]
    fn range_takes_leading_integer() {
        let time = BrewDuration::parse("12-24 hours");
        assert_eq!(time.amount(), Some(12));
        assert!(time.is_measured_in_hours());
    }

    #[test]
    fn overlong_amount_saturates() {
        let time = BrewDuration::parse("99999999999 minutes");
        assert_eq!(time.amount(), Some(u32::MAX));
        assert_eq!(time.unit(), TimeUnit::Minutes);
    }

    #[test]
    fn text_without_leading_digits_has_no_amount() {
        let time = BrewDuration::parse("Overnight");
        assert_eq!(time.amount(), None);
        assert_eq!(time.unit(), TimeUnit::Unspecified);
    }

    #[test]
    fn keeps_raw_text_on_serialize() {
        let json = serde_json::to_string(&BrewDuration::parse("25 seconds")).expect("serializable");
        assert_eq!(json, "\"25 seconds\"");
    }

    #[test]
    fn id_fragment_matching_is_literal() {
        let id = RecipeId("iced-espresso-tonic".to_string());
        assert!(id.contains("espresso"));
        assert!(!id.contains("drip"));
    }
}
