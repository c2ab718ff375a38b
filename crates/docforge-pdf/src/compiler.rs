//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib, and exposes the
//! result as an in-process [`PdfBackend`].

use typst_as_lib::TypstEngine;

use crate::backend::{PdfBackend, PdfJob, RenderOutcome};
use crate::error::{PdfError, Result};
use crate::transpiler::Transpiler;

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        let engine = TypstEngine::builder().main_file(markup.to_string()).build();

        // compiled is Warned<Result<Document, Error>>
        let compiled = engine.compile();
        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

/// Embedded Typst backend, used after the external converters
#[derive(Debug, Default, Clone, Copy)]
pub struct TypstBackend;

impl TypstBackend {
    /// Name of this backend in settings
    pub const NAME: &'static str = "typst";

    fn render_to_file(job: &PdfJob) -> Result<()> {
        let nodes = docforge_core::markdown::parse_lines(&job.content);
        let markup = Transpiler::transpile(&job.title, &nodes, &job.style);
        let pdf = Compiler::compile(&markup)?;
        std::fs::write(&job.output_path, pdf)?;
        Ok(())
    }
}

impl PdfBackend for TypstBackend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_external(&self) -> bool {
        false
    }

    fn render(&self, job: &PdfJob) -> RenderOutcome {
        match Self::render_to_file(job) {
            Ok(()) => RenderOutcome::Rendered,
            Err(e) => RenderOutcome::Failed(e.to_string()),
        }
    }
}
