pub mod coffee;
pub mod equipment;
pub mod preferences;
pub mod recipe;
