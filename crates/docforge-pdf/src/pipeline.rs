//! PDF rendering pipeline with fallback chain
//!
//! ```text
//! content ──► HTML page ──► staged temp file ──► backend 1 ──► backend 2 ──► ...
//! ```
//!
//! The staged HTML is owned by a [`tempfile::NamedTempFile`] and is removed
//! when [`PdfPipeline::convert`] returns, whatever the outcome.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use docforge_ast::StyleTemplate;
use docforge_core::config::PdfSettings;

use crate::backend::{PdfBackend, PdfJob, RenderOutcome};
use crate::error::{install_hint, PdfError, Result};
use crate::external::{CommandBackend, BUILTIN_CONVERTERS};
use crate::html::render_page;

/// Default per-backend timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Ordered chain of PDF backends
pub struct PdfPipeline {
    /// Registered backends in priority order
    backends: Vec<Box<dyn PdfBackend>>,
    timeout: Duration,
}

impl Default for PdfPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfPipeline {
    /// Create a pipeline with the default chain
    ///
    /// wkhtmltopdf, weasyprint and pandoc, followed by the embedded Typst
    /// backend when the `embedded-typst` feature is enabled.
    pub fn new() -> Self {
        let mut pipeline = Self::empty();
        for name in BUILTIN_CONVERTERS {
            if let Some(backend) = backend_by_name(name) {
                pipeline.add_backend(backend);
            }
        }

        #[cfg(feature = "embedded-typst")]
        {
            pipeline.add_backend(Box::new(crate::compiler::TypstBackend));
        }

        pipeline
    }

    /// Create a pipeline with no backends
    pub fn empty() -> Self {
        Self {
            backends: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build the chain named in settings
    ///
    /// Unknown names are skipped with a warning. With `embedded-typst`, the
    /// Typst backend is appended unless the settings place it explicitly.
    pub fn from_settings(settings: &PdfSettings) -> Self {
        let mut pipeline = Self::empty().with_timeout(settings.timeout());
        for name in &settings.backends {
            match backend_by_name(name) {
                Some(backend) => pipeline.add_backend(backend),
                None => log::warn!("Unknown PDF backend '{}' in settings, skipping", name),
            }
        }

        #[cfg(feature = "embedded-typst")]
        {
            let typst = crate::compiler::TypstBackend::NAME;
            if !settings.backends.iter().any(|n| n == typst) {
                pipeline.add_backend(Box::new(crate::compiler::TypstBackend));
            }
        }

        pipeline
    }

    /// Set the per-backend timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Append a backend at the lowest priority
    pub fn add_backend(&mut self, backend: Box<dyn PdfBackend>) {
        log::debug!("Added PDF backend: {}", backend.name());
        self.backends.push(backend);
    }

    /// Get the names of all registered backends
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Per-backend timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Render `content` to a PDF at `output`
    ///
    /// Backends are tried in order until one renders. Returns the name of
    /// the backend that produced the file.
    pub fn convert(
        &self,
        title: &str,
        content: &str,
        style: &StyleTemplate,
        output: &Path,
    ) -> Result<&'static str> {
        let page = render_page(title, content, style);

        let mut staged = tempfile::Builder::new()
            .prefix("docforge-")
            .suffix(".html")
            .tempfile()?;
        staged.write_all(page.as_bytes())?;
        staged.flush()?;

        let job = PdfJob {
            html_path: staged.path().to_path_buf(),
            output_path: output.to_path_buf(),
            title: title.to_string(),
            content: content.to_string(),
            style: *style,
            timeout: self.timeout,
        };

        self.run_chain(&job)
    }

    /// Try each backend on a prepared job
    fn run_chain(&self, job: &PdfJob) -> Result<&'static str> {
        let mut last_failure: Option<(&'static str, String)> = None;

        for backend in &self.backends {
            match backend.render(job) {
                RenderOutcome::Rendered => {
                    log::debug!(
                        "Rendered PDF with {} to {}",
                        backend.name(),
                        job.output_path.display()
                    );
                    return Ok(backend.name());
                }
                RenderOutcome::Unavailable(reason) => {
                    log::debug!("PDF backend {} is not available: {}", backend.name(), reason);
                }
                RenderOutcome::Failed(reason) => {
                    log::warn!("PDF backend {} failed: {}", backend.name(), reason);
                    last_failure = Some((backend.name(), reason));
                }
            }
        }

        let hint = install_hint(&self.external_names());
        Err(match last_failure {
            Some((backend, reason)) => PdfError::BackendFailed {
                backend: backend.to_string(),
                reason,
                hint,
            },
            None => PdfError::NoConverter { hint },
        })
    }

    fn external_names(&self) -> Vec<&'static str> {
        self.backends
            .iter()
            .filter(|b| b.is_external())
            .map(|b| b.name())
            .collect()
    }
}

/// Resolve a backend name from settings
pub fn backend_by_name(name: &str) -> Option<Box<dyn PdfBackend>> {
    #[cfg(feature = "embedded-typst")]
    {
        if name == crate::compiler::TypstBackend::NAME {
            return Some(Box::new(crate::compiler::TypstBackend));
        }
    }

    CommandBackend::builtin(name).map(|b| Box::new(b) as Box<dyn PdfBackend>)
}
