use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoffeeId(pub String);

impl Display for CoffeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Roast {
    Light,
    Medium,
    MediumDark,
    Dark,
}

impl Roast {
    pub const ALL: [Self; 4] = [Self::Light, Self::Medium, Self::MediumDark, Self::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::MediumDark => "medium-dark",
            Self::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acidity {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Light,
    Medium,
    Full,
}

impl Display for Roast {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Roast {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|roast| roast.as_str() == normalized)
            .ok_or_else(|| DomainError::unknown("roast", value))
    }
}

/// Growing origin as written in the catalog, e.g. `"Sumatra, Indonesia"`.
///
/// The raw text is what preference matching runs against; `regions` is the
/// comma-split view computed once when the record is loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Origin {
    raw: String,
    regions: Vec<String>,
}

impl Origin {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let regions = raw
            .split(',')
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map(str::to_string)
            .collect();
        Self { raw, regions }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Case-sensitive substring test of a wizard origin fragment.
    pub fn mentions(&self, fragment: &str) -> bool {
        self.raw.contains(fragment)
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<Origin> for String {
    fn from(value: Origin) -> Self {
        value.raw
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: CoffeeId,
    pub name: String,
    pub origin: Origin,
    pub roast: Roast,
    pub flavor_profile: Vec<String>,
    pub acidity: Acidity,
    pub body: Body,
    #[serde(default)]
    pub description: String,
}
