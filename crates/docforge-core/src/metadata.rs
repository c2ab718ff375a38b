//! Document metadata parsing

use docforge_ast::DocumentMetadata;

use crate::error::{CoreError, Result};

/// Parse a flat JSON object into [`DocumentMetadata`]
///
/// Only `author` and `subject` are read; other keys are ignored. Anything
/// that is not a JSON object is rejected.
pub fn parse_metadata(json: &str) -> Result<DocumentMetadata> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| CoreError::InvalidMetadata(e.to_string()))?;

    if !value.is_object() {
        return Err(CoreError::InvalidMetadata(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| CoreError::InvalidMetadata(e.to_string()))
}
