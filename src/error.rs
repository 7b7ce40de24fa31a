use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog or generating a recipe
#[derive(Error, Debug)]
pub enum RouletteError {
    /// A negative ingredient count was requested
    #[error("Invalid ingredient count: {0} (must be zero or more)")]
    InvalidRequestCount(i64),

    /// A phrase table is empty or otherwise unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A step template could not be parsed
    #[error("Invalid step template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// Failed to load layered configuration
    #[error("Failed to load configuration: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// The ingredient catalog could not be read
    #[error("Failed to read catalog '{}': {source}", .path.display())]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ingredient column is not present in the catalog header
    #[error("Column '{column}' not found in catalog '{}'", .path.display())]
    CatalogColumnMissing { column: String, path: PathBuf },

    /// The catalog is structurally broken
    #[error("Malformed catalog: {0}")]
    CatalogFormat(String),

    /// Failed to (de)serialize JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
