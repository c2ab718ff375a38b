//! Document metadata supplied on the command line

use serde::{Deserialize, Serialize};

/// Flat metadata object; unknown keys are ignored
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document author
    #[serde(default)]
    pub author: Option<String>,
    /// Document subject
    #[serde(default)]
    pub subject: Option<String>,
}
