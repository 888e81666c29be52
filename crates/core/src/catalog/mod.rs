mod seed;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::coffee::{Coffee, CoffeeId};
use crate::domain::equipment::{Equipment, EquipmentId};
use crate::domain::recipe::{Recipe, RecipeId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse TOML catalog `{path}`: {source}")]
    ParseToml { path: PathBuf, source: toml::de::Error },
    #[error("could not parse JSON catalog `{path}`: {source}")]
    ParseJson { path: PathBuf, source: serde_json::Error },
    #[error("duplicate {kind} id `{id}` in catalog")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{kind} entry at position {index} has a blank id")]
    BlankId { kind: &'static str, index: usize },
}

/// Read-only snapshot of the three record collections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    coffees: Vec<Coffee>,
    #[serde(default)]
    recipes: Vec<Recipe>,
    #[serde(default)]
    equipment: Vec<Equipment>,
}

impl Catalog {
    pub fn new(coffees: Vec<Coffee>, recipes: Vec<Recipe>, equipment: Vec<Equipment>) -> Self {
        Self { coffees, recipes, equipment }
    }

    pub fn builtin() -> Self {
        Self::new(seed::coffees(), seed::recipes(), seed::equipment())
    }

    /// Loads a catalog document. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;

        let is_toml = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("toml"));

        let catalog: Self = if is_toml {
            toml::from_str(&raw)
                .map_err(|source| CatalogError::ParseToml { path: path.to_path_buf(), source })?
        } else {
            serde_json::from_str(&raw)
                .map_err(|source| CatalogError::ParseJson { path: path.to_path_buf(), source })?
        };

        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique_ids("coffee", self.coffees.iter().map(|coffee| coffee.id.0.as_str()))?;
        ensure_unique_ids("recipe", self.recipes.iter().map(|recipe| recipe.id.0.as_str()))?;
        ensure_unique_ids("equipment", self.equipment.iter().map(|item| item.id.0.as_str()))?;
        Ok(())
    }

    pub fn all_coffees(&self) -> &[Coffee] {
        &self.coffees
    }

    pub fn all_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn all_equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn coffee(&self, id: &CoffeeId) -> Option<&Coffee> {
        self.coffees.iter().find(|coffee| &coffee.id == id)
    }

    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    pub fn equipment(&self, id: &EquipmentId) -> Option<&Equipment> {
        self.equipment.iter().find(|item| &item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.coffees.is_empty() && self.recipes.is_empty() && self.equipment.is_empty()
    }

    /// blake3 hex digest of the canonical JSON encoding.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        blake3::hash(&canonical).to_hex().to_string()
    }
}

fn ensure_unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::BlankId { kind, index });
        }
        if !seen.insert(trimmed) {
            return Err(CatalogError::DuplicateId { kind, id: trimmed.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{Catalog, CatalogError};
    use crate::domain::coffee::{CoffeeId, Roast};
    use crate::domain::recipe::RecipeId;

    #[test]
    fn builtin_catalog_is_valid_and_populated() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert!(!catalog.all_coffees().is_empty());
        assert!(!catalog.all_recipes().is_empty());
        assert!(!catalog.all_equipment().is_empty());
    }

    #[test]
    fn builtin_catalog_carries_medium_dark_roast() {
        let catalog = Catalog::builtin();
        assert!(catalog.all_coffees().iter().any(|coffee| coffee.roast == Roast::MediumDark));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let coffee = catalog.coffee(&CoffeeId("kenya-aa".to_string()));
        assert_eq!(coffee.map(|coffee| coffee.name.as_str()), Some("Kenya AA"));
        assert!(catalog.recipe(&RecipeId("missing".to_string())).is_none());
    }

    #[test]
    fn fingerprint_is_stable_for_identical_catalogs() {
        assert_eq!(Catalog::builtin().fingerprint(), Catalog::builtin().fingerprint());
        assert_ne!(Catalog::builtin().fingerprint(), Catalog::default().fingerprint());
    }

    #[test]
    fn loads_toml_catalog_and_parses_free_text_fields() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err| err.to_string())?;
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[[coffees]]
id = "sumatra"
name = "Sumatra"
origin = "Sumatra, Indonesia"
roast = "dark"
flavor_profile = ["Earthy", "Spicy"]
acidity = "low"
body = "full"

[[recipes]]
id = "cold-brew"
title = "Cold Brew"
category = "cold"
difficulty = "easy"
time = "12-24 hours"
"#,
        )
        .map_err(|err| err.to_string())?;

        let catalog = Catalog::load(&path).map_err(|err| err.to_string())?;
        let coffee = &catalog.all_coffees()[0];
        assert_eq!(coffee.origin.regions().len(), 2);
        let recipe = &catalog.all_recipes()[0];
        assert_eq!(recipe.time.amount(), Some(12));
        assert!(recipe.time.is_measured_in_hours());
        assert!(catalog.all_equipment().is_empty());
        Ok(())
    }

    #[test]
    fn loads_json_catalog() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err| err.to_string())?;
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"equipment":[{"id":"chemex","name":"Chemex","category":"brewer",
                 "price_range":"mid-range","difficulty":"intermediate"}]}"#,
        )
        .map_err(|err| err.to_string())?;

        let catalog = Catalog::load(&path).map_err(|err| err.to_string())?;
        assert_eq!(catalog.all_equipment().len(), 1);
        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() -> Result<(), String> {
        let dir = TempDir::new().map_err(|err| err.to_string())?;
        let path = dir.path().join("catalog.json");
        let entry = r#"{"id":"aeropress","name":"AeroPress","category":"brewer",
                        "price_range":"budget","difficulty":"beginner"}"#;
        fs::write(&path, format!(r#"{{"equipment":[{entry},{entry}]}}"#))
            .map_err(|err| err.to_string())?;

        match Catalog::load(&path) {
            Err(CatalogError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "equipment");
                assert_eq!(id, "aeropress");
                Ok(())
            }
            other => Err(format!("expected duplicate id error, got {other:?}")),
        }
    }

    #[test]
    fn missing_file_reports_read_error() {
        let result = Catalog::load(std::path::Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(CatalogError::ReadFile { .. })));
    }
}
