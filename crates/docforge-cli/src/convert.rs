//! Format dispatch
//!
//! Each emitter is compiled in behind the cargo feature of the same name.
//! A format whose emitter is missing reports how to install it instead of
//! failing to build.

use std::path::PathBuf;

use docforge_ast::{DocumentFormat, DocumentMetadata, StyleTemplate};
use docforge_core::config::PdfSettings;
use docforge_core::ConversionResult;

/// Everything one conversion needs
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Raw input text
    pub content: String,
    /// Document title
    pub title: String,
    /// Resolved style template
    pub style: &'static StyleTemplate,
    /// Optional document metadata (DOCX only)
    pub metadata: Option<DocumentMetadata>,
    /// Destination file
    pub output: PathBuf,
    /// PDF chain configuration
    pub pdf: PdfSettings,
}

/// Run the emitter for `format`
pub fn convert(format: DocumentFormat, request: &ConversionRequest) -> ConversionResult {
    log::info!(
        "Converting to {} with template '{}'",
        format,
        request.style.name
    );
    match format {
        DocumentFormat::Docx => to_docx(request),
        DocumentFormat::Xlsx => to_xlsx(request),
        DocumentFormat::Pptx => to_pptx(request),
        DocumentFormat::Pdf => to_pdf(request),
    }
}

/// Result for a format whose emitter was not compiled in
pub fn unavailable(format: DocumentFormat, output: PathBuf) -> ConversionResult {
    ConversionResult::failure(
        output,
        format!(
            "{} support is not available. Install with: cargo install docforge-cli --features {}",
            format.label(),
            format.extension()
        ),
    )
}

#[cfg(feature = "docx")]
fn to_docx(request: &ConversionRequest) -> ConversionResult {
    use docforge_ooxml::DocxWriter;

    let nodes = docforge_core::markdown::parse_lines(&request.content);
    log::debug!("Parsed {} structural nodes", nodes.len());

    let mut writer = DocxWriter::new(request.title.clone(), request.style);
    if let Some(metadata) = &request.metadata {
        writer.set_metadata(metadata.clone());
    }

    match writer.write_to_file(&nodes, &request.output) {
        Ok(()) => ConversionResult::saved(DocumentFormat::Docx.label(), &request.output),
        Err(e) => ConversionResult::failure(
            request.output.clone(),
            format!("Error creating Word document: {}", e),
        ),
    }
}

#[cfg(not(feature = "docx"))]
fn to_docx(request: &ConversionRequest) -> ConversionResult {
    unavailable(DocumentFormat::Docx, request.output.clone())
}

#[cfg(feature = "xlsx")]
fn to_xlsx(request: &ConversionRequest) -> ConversionResult {
    use docforge_ooxml::{sheet_name_for, XlsxWriter};

    let rows = docforge_core::tabular::parse_table(&request.content);
    log::debug!("Parsed {} table rows", rows.len());

    let written = XlsxWriter::new(sheet_name_for(&request.title), request.style)
        .and_then(|writer| writer.write_to_file(&rows, &request.output));

    match written {
        Ok(()) => ConversionResult::saved(DocumentFormat::Xlsx.label(), &request.output),
        Err(e) => ConversionResult::failure(
            request.output.clone(),
            format!("Error creating Excel file: {}", e),
        ),
    }
}

#[cfg(not(feature = "xlsx"))]
fn to_xlsx(request: &ConversionRequest) -> ConversionResult {
    unavailable(DocumentFormat::Xlsx, request.output.clone())
}

#[cfg(feature = "pptx")]
fn to_pptx(request: &ConversionRequest) -> ConversionResult {
    use docforge_pptx::{Deck, PptxWriter};

    let deck = Deck::from_content(&request.title, &request.content);
    let mut writer = PptxWriter::new(request.style).with_title(request.title.clone());
    writer.add_deck(deck);

    match writer.write_to_file(&request.output) {
        Ok(()) => ConversionResult::saved(DocumentFormat::Pptx.label(), &request.output),
        Err(e) => ConversionResult::failure(
            request.output.clone(),
            format!("Error creating PowerPoint: {}", e),
        ),
    }
}

#[cfg(not(feature = "pptx"))]
fn to_pptx(request: &ConversionRequest) -> ConversionResult {
    unavailable(DocumentFormat::Pptx, request.output.clone())
}

#[cfg(feature = "pdf")]
fn to_pdf(request: &ConversionRequest) -> ConversionResult {
    use docforge_pdf::PdfPipeline;

    let pipeline = PdfPipeline::from_settings(&request.pdf);
    match pipeline.convert(
        &request.title,
        &request.content,
        request.style,
        &request.output,
    ) {
        Ok(backend) => {
            log::info!("PDF rendered by {}", backend);
            ConversionResult::saved(DocumentFormat::Pdf.label(), &request.output)
        }
        Err(e) => ConversionResult::failure(request.output.clone(), e.to_string()),
    }
}

#[cfg(not(feature = "pdf"))]
fn to_pdf(request: &ConversionRequest) -> ConversionResult {
    unavailable(DocumentFormat::Pdf, request.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docforge_core::TemplateRegistry;

    fn request(dir: &std::path::Path, name: &str, content: &str) -> ConversionRequest {
        ConversionRequest {
            content: content.to_string(),
            title: "Report".to_string(),
            style: TemplateRegistry::resolve("professional"),
            metadata: None,
            output: dir.join(name),
            pdf: PdfSettings::default(),
        }
    }

    #[test]
    fn test_unavailable_message() {
        let result = unavailable(DocumentFormat::Pptx, PathBuf::from("out.pptx"));
        assert!(!result.success);
        assert_eq!(result.exit_code(), 1);
        assert_eq!(
            result.to_string(),
            "❌ PowerPoint support is not available. Install with: cargo install docforge-cli --features pptx"
        );
    }

    #[cfg(not(feature = "docx"))]
    #[test]
    fn test_docx_without_emitter() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "out.docx", "# Title");
        let result = convert(DocumentFormat::Docx, &req);
        assert_eq!(result.exit_code(), 1);
        assert!(result
            .message
            .ends_with("cargo install docforge-cli --features docx"));
        assert!(!req.output.exists());
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_docx_saved() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "out.docx", "# Title\n- item\ntext");
        let result = convert(DocumentFormat::Docx, &req);
        assert!(result.success, "{}", result);
        assert!(req.output.exists());
        assert_eq!(
            result.message,
            format!("Word document saved: {}", req.output.display())
        );
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_xlsx_invalid_sheet_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(dir.path(), "out.xlsx", "a,b\n1,2");
        req.title = "Q1/Q2".to_string();
        let result = convert(DocumentFormat::Xlsx, &req);
        assert!(!result.success);
        assert!(result.message.starts_with("Error creating Excel file:"));
    }

    #[cfg(feature = "pptx")]
    #[test]
    fn test_pptx_write_error_reported() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(&dir.path().join("missing-dir"), "out.pptx", "x");
        let result = convert(DocumentFormat::Pptx, &req);
        assert!(!result.success);
        assert!(result.message.starts_with("Error creating PowerPoint:"));
    }

    #[cfg(all(feature = "pdf", not(feature = "embedded-typst")))]
    #[test]
    fn test_pdf_empty_chain() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(dir.path(), "out.pdf", "text");
        req.pdf.backends.clear();
        let result = convert(DocumentFormat::Pdf, &req);
        assert!(!result.success);
        assert!(result.message.starts_with("No PDF converter found."));
    }
}
