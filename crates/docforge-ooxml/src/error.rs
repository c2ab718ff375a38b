//! Error types for OOXML operations

use thiserror::Error;

/// Errors that can occur while building OOXML packages
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required part not found in a package
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// Worksheet name rejected by the spreadsheet format
    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName {
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
