//! Output formats

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Document formats docforge can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Word-processor document
    Docx,
    /// Spreadsheet workbook
    Xlsx,
    /// Presentation deck
    Pptx,
    /// Portable Document Format
    Pdf,
}

impl DocumentFormat {
    /// All formats in CLI order
    pub fn all() -> &'static [DocumentFormat] {
        &[Self::Docx, Self::Xlsx, Self::Pptx, Self::Pdf]
    }

    /// Canonical file extension (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Pptx => "pptx",
            Self::Pdf => "pdf",
        }
    }

    /// Human-readable label used in status messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Docx => "Word document",
            Self::Xlsx => "Excel spreadsheet",
            Self::Pptx => "PowerPoint",
            Self::Pdf => "PDF",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when parsing an unknown format name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown document format: {}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for DocumentFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "docx" => Ok(Self::Docx),
            "xlsx" => Ok(Self::Xlsx),
            "pptx" => Ok(Self::Pptx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
