pub mod app_config;
pub mod catalog;
pub mod categories;
pub mod config;
pub mod i18n;
pub mod promotions;

pub use app_config::{AppConfig, Environment, FixedPosition};
pub use catalog::{load_catalog, CatalogError, CatalogFile, CatalogProvider, StaticCatalog};
pub use categories::{validate_category_labels, Category, CategoryDescriptor};
pub use config::{load_app_config, load_app_config_from_env};
pub use i18n::{Language, TranslationKey, Translations};
pub use promotions::{Promotion, PromotionDetails};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid language: {0} (expected \"pl\" or \"en\")")]
    InvalidLanguage(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
