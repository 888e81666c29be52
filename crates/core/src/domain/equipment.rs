use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::preferences::{ExperienceLevel, PriceRange};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(pub String);

impl Display for EquipmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub category: String,
    pub price_range: PriceRange,
    pub difficulty: ExperienceLevel,
    #[serde(default)]
    pub description: String,
}
