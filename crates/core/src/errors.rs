use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::store::StoreError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown {field} value `{value}`")]
    UnknownValue { field: &'static str, value: String },
    #[error("{kind} `{id}` was not found")]
    NotFound { kind: &'static str, id: String },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownValue { field, value: value.to_string() }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("catalog failure: {0}")]
    Catalog(String),
    #[error("persistence failure: {0}")]
    Persistence(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in command payloads.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::UnknownValue { .. }) => "invalid_input",
            Self::Domain(DomainError::NotFound { .. }) => "not_found",
            Self::Domain(DomainError::InvariantViolation(_)) => "domain_validation",
            Self::Catalog(_) => "catalog",
            Self::Persistence(_) => "persistence",
            Self::Configuration(_) => "config_validation",
        }
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value.to_string())
    }
}

impl From<StoreError> for ApplicationError {
    fn from(value: StoreError) -> Self {
        Self::Persistence(value.to_string())
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(value: ConfigError) -> Self {
        Self::Configuration(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::CatalogError;
    use crate::errors::{ApplicationError, DomainError};

    #[test]
    fn unknown_value_maps_to_invalid_input_class() {
        let error = ApplicationError::from(DomainError::unknown("roast_level", "burnt"));

        assert_eq!(error.error_class(), "invalid_input");
        assert_eq!(error.to_string(), "unknown roast_level value `burnt`");
    }

    #[test]
    fn not_found_names_kind_and_id() {
        let error = ApplicationError::from(DomainError::NotFound {
            kind: "brew",
            id: "brew-404".to_string(),
        });

        assert_eq!(error.error_class(), "not_found");
        assert_eq!(error.to_string(), "brew `brew-404` was not found");
    }

    #[test]
    fn catalog_error_maps_to_catalog_class() {
        let error = ApplicationError::from(CatalogError::DuplicateId {
            kind: "coffee",
            id: "kenya-aa".to_string(),
        });

        assert_eq!(error.error_class(), "catalog");
        assert!(error.to_string().contains("kenya-aa"));
    }
}
