//! Settings loaded from `docforge.toml`
//!
//! ```toml
//! [defaults]
//! title = "Quarterly Report"
//! template = "executive"
//!
//! [pdf]
//! timeout_secs = 60
//! backends = ["weasyprint", "pandoc"]
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Defaults for command-line options
    pub defaults: DefaultSettings,
    /// PDF rendering settings
    pub pdf: PdfSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    ///
    /// Values that parse but cannot be used, such as a zero PDF timeout,
    /// are rejected here rather than at conversion time.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let settings: Self = toml::from_str(toml_str)?;
        settings.pdf.validate()?;
        Ok(settings)
    }
}

/// Values used when the command line leaves an option unset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// Document title
    pub title: String,
    /// Style template name
    pub template: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            title: "Document".to_string(),
            template: crate::template::DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// PDF backend chain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// Per-backend time limit in seconds
    pub timeout_secs: u64,
    /// Backend names, in the order they are tried
    pub backends: Vec<String>,
}

impl PdfSettings {
    /// Check values serde cannot rule out on its own
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(CoreError::InvalidSetting {
                key: "pdf.timeout_secs",
                reason: "must be at least 1 second",
            });
        }
        Ok(())
    }

    /// Timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            backends: default_backends(),
        }
    }
}

fn default_backends() -> Vec<String> {
    vec![
        "wkhtmltopdf".to_string(),
        "weasyprint".to_string(),
        "pandoc".to_string(),
    ]
}
