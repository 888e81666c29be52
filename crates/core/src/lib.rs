pub mod catalog;
pub mod community;
pub mod config;
pub mod domain;
pub mod errors;
pub mod recommend;
pub mod scoring;
pub mod store;

pub use catalog::{Catalog, CatalogError};
pub use community::{BrewDraft, BrewId, Comment, CommentId, CommunityBoard, SharedBrew};
pub use domain::coffee::{Coffee, CoffeeId, Roast};
pub use domain::equipment::{Equipment, EquipmentId};
pub use domain::preferences::{FlavorNote, OriginTag, Selection, WizardPreferences};
pub use domain::recipe::{Recipe, RecipeId};
pub use errors::{ApplicationError, DomainError};
pub use recommend::{
    CatalogKind, DeterministicRecommendationEngine, RecommendationEngine, RecommendationLimits,
    RecommendationSet,
};
pub use scoring::{rank_by_preference, score, PreferenceSubject, Ranked, ScoreBreakdown};
pub use store::{BlobStore, FileBlobStore, MemoryBlobStore, StoreError};
