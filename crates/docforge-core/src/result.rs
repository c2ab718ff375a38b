//! Conversion outcome reported to the user

use std::fmt;
use std::path::{Path, PathBuf};

/// Glyph prefixed to successful results
pub const SUCCESS_GLYPH: &str = "✅";

/// Glyph prefixed to failed results
pub const FAILURE_GLYPH: &str = "❌";

/// Outcome of one conversion run
///
/// Displays as a single line starting with [`SUCCESS_GLYPH`] or
/// [`FAILURE_GLYPH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Whether the output file was written
    pub success: bool,
    /// Human-readable message, without the glyph
    pub message: String,
    /// Intended output path
    pub output_path: PathBuf,
}

impl ConversionResult {
    /// Successful conversion
    pub fn success(output_path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            output_path: output_path.into(),
        }
    }

    /// Failed conversion
    pub fn failure(output_path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            output_path: output_path.into(),
        }
    }

    /// Success result with the standard "<Label> saved: <path>" message
    pub fn saved(label: &str, output_path: &Path) -> Self {
        Self::success(
            output_path,
            format!("{} saved: {}", label, output_path.display()),
        )
    }

    /// Process exit code: 0 on success, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = if self.success {
            SUCCESS_GLYPH
        } else {
            FAILURE_GLYPH
        };
        write!(f, "{} {}", glyph, self.message)
    }
}
