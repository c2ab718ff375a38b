//! Error types for docforge-core

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while preparing a conversion
#[derive(Debug, Error)]
pub enum CoreError {
    /// Metadata string was not a JSON object
    #[error("Invalid metadata JSON: {0}")]
    InvalidMetadata(String),

    /// Settings file could not be parsed
    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings parsed but hold an unusable value
    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting {
        /// Dotted key, e.g. `pdf.timeout_secs`
        key: &'static str,
        /// What is wrong with the value
        reason: &'static str,
    },
}
