//! docforge-pdf - PDF generation through a converter fallback chain
//!
//! Content is rendered to a styled HTML page, staged in a temporary file,
//! and handed to external converters in priority order until one of them
//! produces the PDF.
//!
//! # Architecture
//!
//! 1. **HTML** - CommonMark rendering with a template stylesheet
//! 2. **Pipeline** - stages the page and walks the backend chain
//! 3. **Backends** - `wkhtmltopdf`, `weasyprint`, `pandoc`, and with the
//!    `embedded-typst` feature an in-process Typst compiler
//!
//! # Example
//!
//! ```no_run
//! use docforge_core::TemplateRegistry;
//! use docforge_pdf::PdfPipeline;
//! use std::path::Path;
//!
//! let pipeline = PdfPipeline::new();
//! let style = TemplateRegistry::resolve("academic");
//! match pipeline.convert("Notes", "# Intro\n\nHello", style, Path::new("notes.pdf")) {
//!     Ok(backend) => println!("rendered with {backend}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod backend;
mod error;
mod external;
mod html;
mod pipeline;

#[cfg(feature = "embedded-typst")]
mod compiler;
#[cfg(feature = "embedded-typst")]
mod transpiler;

pub use backend::{PdfBackend, PdfJob, RenderOutcome};
pub use error::{install_hint, PdfError, Result};
pub use external::{CommandBackend, BUILTIN_CONVERTERS};
pub use html::{markdown_to_html, render_page, stylesheet};
pub use pipeline::{backend_by_name, PdfPipeline, DEFAULT_TIMEOUT};

#[cfg(feature = "embedded-typst")]
pub use compiler::{Compiler, TypstBackend};
#[cfg(feature = "embedded-typst")]
pub use transpiler::Transpiler;
