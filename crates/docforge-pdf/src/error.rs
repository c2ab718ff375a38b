//! Error types for PDF generation

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF generation
#[derive(Error, Debug)]
pub enum PdfError {
    /// Every backend in the chain was unavailable
    #[error("No PDF converter found. {hint}")]
    NoConverter {
        /// Installation hint naming the external converters
        hint: String,
    },

    /// At least one backend ran and failed; carries the last failure
    #[error("{backend} error: {reason}. {hint}")]
    BackendFailed {
        backend: String,
        reason: String,
        hint: String,
    },

    /// Typst compilation error
    #[error("Typst compilation failed: {0}")]
    Compilation(String),

    /// IO error while staging HTML or writing output
    #[error("Error creating PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the `Install a, b, or c.` hint from converter names
pub fn install_hint(names: &[&str]) -> String {
    match names {
        [] => "Configure at least one PDF backend.".to_string(),
        [only] => format!("Install {}.", only),
        [first, second] => format!("Install {} or {}.", first, second),
        [head @ .., last] => format!("Install {}, or {}.", head.join(", "), last),
    }
}
