use brewguide_core::catalog::Catalog;
use brewguide_core::community::CommunityBoard;
use brewguide_core::config::{AppConfig, LoadOptions};
use brewguide_core::domain::preferences::WizardPreferences;
use brewguide_core::errors::ApplicationError;
use brewguide_core::recommend::DeterministicRecommendationEngine;
use brewguide_core::store::{self, BlobStore, FileBlobStore, COMMUNITY_KEY, PREFERENCES_KEY};

/// Everything a command needs: validated config, a loaded catalog, and the blob store.
pub struct AppContext {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub store: FileBlobStore,
}

impl AppContext {
    pub fn load() -> Result<Self, ApplicationError> {
        let config = AppConfig::load(LoadOptions::default())?;
        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> Result<Self, ApplicationError> {
        let catalog = load_catalog(&config)?;
        let store = FileBlobStore::new(config.storage.data_dir.clone());
        Ok(Self { config, catalog, store })
    }

    pub fn engine(&self) -> DeterministicRecommendationEngine {
        DeterministicRecommendationEngine::new(self.config.limits())
    }

    pub fn saved_preferences(&self) -> Result<Option<WizardPreferences>, ApplicationError> {
        Ok(store::load_json(&self.store, PREFERENCES_KEY)?)
    }

    pub fn save_preferences(
        &self,
        preferences: &WizardPreferences,
    ) -> Result<(), ApplicationError> {
        store::save_json(&self.store, PREFERENCES_KEY, preferences)?;
        tracing::info!(
            event_name = "cli.preferences.saved",
            data_dir = %self.store.root().display(),
            "preferences saved"
        );
        Ok(())
    }

    pub fn reset_preferences(&self) -> Result<bool, ApplicationError> {
        Ok(self.store.remove(PREFERENCES_KEY)?)
    }

    pub fn board(&self) -> Result<CommunityBoard, ApplicationError> {
        Ok(store::load_json(&self.store, COMMUNITY_KEY)?.unwrap_or_default())
    }

    pub fn save_board(&self, board: &CommunityBoard) -> Result<(), ApplicationError> {
        store::save_json(&self.store, COMMUNITY_KEY, board)?;
        Ok(())
    }
}

pub fn load_catalog(config: &AppConfig) -> Result<Catalog, ApplicationError> {
    match &config.catalog.path {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            tracing::debug!(
                event_name = "cli.catalog.loaded",
                path = %path.display(),
                coffees = catalog.all_coffees().len(),
                recipes = catalog.all_recipes().len(),
                equipment = catalog.all_equipment().len(),
                "catalog loaded from file"
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
