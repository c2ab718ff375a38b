//! PDF backend trait
//!
//! A backend is one way of turning a staged conversion job into a PDF
//! file. The pipeline holds backends in priority order and falls through
//! on anything but [`RenderOutcome::Rendered`].

use std::path::PathBuf;
use std::time::Duration;

use docforge_ast::StyleTemplate;

/// Everything a backend may need for one conversion
#[derive(Debug, Clone)]
pub struct PdfJob {
    /// Staged HTML page
    pub html_path: PathBuf,
    /// Destination PDF
    pub output_path: PathBuf,
    /// Document title
    pub title: String,
    /// Raw input content
    pub content: String,
    /// Style template
    pub style: StyleTemplate,
    /// Upper bound for one backend run
    pub timeout: Duration,
}

/// Result of asking one backend to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The PDF was written to the job's output path
    Rendered,
    /// The backend cannot run here (e.g. binary not installed)
    Unavailable(String),
    /// The backend ran and failed
    Failed(String),
}

/// A PDF rendering capability
pub trait PdfBackend: Send + Sync {
    /// Name used in settings, logs and error messages
    fn name(&self) -> &'static str;

    /// Whether the backend is an external program the user can install
    fn is_external(&self) -> bool {
        true
    }

    /// Render the job
    fn render(&self, job: &PdfJob) -> RenderOutcome;
}
