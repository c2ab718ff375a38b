//! DOCX writer
//!
//! Builds a complete WordprocessingML package from structural nodes. The
//! document body starts with a centered title paragraph followed by one
//! paragraph per node:
//!
//! | Node | Paragraph style |
//! |------|-----------------|
//! | `Heading { level }` | `Heading1`..`Heading3` |
//! | `BulletItem` | `ListBullet` (bullet numbering) |
//! | `Paragraph` | `Normal` |

use std::path::Path;

use docforge_ast::{DocumentMetadata, StructuralNode, StyleTemplate};

use crate::archive::OoxmlArchive;
use crate::content_types::{
    ContentTypes, CONTENT_TYPES_PATH, CT_CORE_PROPERTIES, CT_EXTENDED_PROPERTIES,
    CT_WORD_DOCUMENT, CT_WORD_NUMBERING, CT_WORD_STYLES,
};
use crate::error::Result;
use crate::properties::{
    app_properties_xml, CoreProperties, APP_PROPERTIES_PATH, CORE_PROPERTIES_PATH,
};
use crate::relationships::Relationships;
use crate::styles::{
    heading_style, numbering_xml, styles_xml, BULLET_NUM_ID, STYLE_LIST_BULLET, STYLE_NORMAL,
    STYLE_TITLE,
};
use crate::xml::{escape_xml, XML_DECLARATION};

/// Path of the main document part
pub const DOCUMENT_PATH: &str = "word/document.xml";

/// DOCX Writer for generating DOCX files from structural nodes
pub struct DocxWriter {
    /// XML output buffer for `word/document.xml`
    output: String,
    /// Style template applied to the styles part
    style: StyleTemplate,
    /// Document title (first paragraph and core properties)
    title: String,
    /// Optional author/subject metadata
    metadata: Option<DocumentMetadata>,
}

impl DocxWriter {
    /// Create a writer for a titled document
    pub fn new(title: impl Into<String>, style: &StyleTemplate) -> Self {
        Self {
            output: String::new(),
            style: *style,
            title: title.into(),
            metadata: None,
        }
    }

    /// Record author/subject metadata in the core properties
    pub fn set_metadata(&mut self, metadata: DocumentMetadata) {
        self.metadata = Some(metadata);
    }

    /// Generate the DOCX package bytes
    pub fn generate(&mut self, nodes: &[StructuralNode]) -> Result<Vec<u8>> {
        self.build_archive(nodes).to_bytes()
    }

    /// Generate the package and write it to `path`
    pub fn write_to_file(&mut self, nodes: &[StructuralNode], path: &Path) -> Result<()> {
        let archive = self.build_archive(nodes);
        archive.write_to_file(path)?;
        log::debug!(
            "Wrote DOCX with {} nodes to {}",
            nodes.len(),
            path.display()
        );
        Ok(())
    }

    fn build_archive(&mut self, nodes: &[StructuralNode]) -> OoxmlArchive {
        let mut archive = OoxmlArchive::new();

        let mut content_types = ContentTypes::new();
        content_types.add_override(DOCUMENT_PATH, CT_WORD_DOCUMENT);
        content_types.add_override("word/styles.xml", CT_WORD_STYLES);
        content_types.add_override("word/numbering.xml", CT_WORD_NUMBERING);
        content_types.add_override(CORE_PROPERTIES_PATH, CT_CORE_PROPERTIES);
        content_types.add_override(APP_PROPERTIES_PATH, CT_EXTENDED_PROPERTIES);
        archive.set_string(CONTENT_TYPES_PATH, content_types.to_xml());

        let mut package_rels = Relationships::new();
        package_rels.add(Relationships::TYPE_OFFICE_DOCUMENT, DOCUMENT_PATH);
        package_rels.add(Relationships::TYPE_CORE_PROPERTIES, CORE_PROPERTIES_PATH);
        package_rels.add(Relationships::TYPE_EXTENDED_PROPERTIES, APP_PROPERTIES_PATH);
        archive.set_string("_rels/.rels", package_rels.to_xml());

        let mut document_rels = Relationships::new();
        document_rels.add(Relationships::TYPE_STYLES, "styles.xml");
        document_rels.add(Relationships::TYPE_NUMBERING, "numbering.xml");
        archive.set_string("word/_rels/document.xml.rels", document_rels.to_xml());

        archive.set_string(DOCUMENT_PATH, self.generate_document_xml(nodes));
        archive.set_string("word/styles.xml", styles_xml(&self.style));
        archive.set_string("word/numbering.xml", numbering_xml());

        let mut core = CoreProperties::new(self.title.clone());
        if let Some(metadata) = &self.metadata {
            core = core.with_metadata(metadata);
        }
        archive.set_string(CORE_PROPERTIES_PATH, core.to_xml());
        archive.set_string(APP_PROPERTIES_PATH, app_properties_xml());

        archive
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, nodes: &[StructuralNode]) -> String {
        self.output.clear();

        self.output.push_str(XML_DECLARATION);
        self.output.push_str(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        let title = self.title.clone();
        self.generate_title(&title);

        for node in nodes {
            self.generate_node(node);
        }

        // Letter page, 1" margins
        self.output.push_str(
            "<w:sectPr><w:pgSz w:w=\"12240\" w:h=\"15840\"/><w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/></w:sectPr>\n",
        );
        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    fn generate_title(&mut self, title: &str) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output
            .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", STYLE_TITLE));
        self.output.push_str("<w:jc w:val=\"center\"/>\n");
        self.output.push_str("</w:pPr>\n");
        self.generate_run(title);
        self.output.push_str("</w:p>\n");
    }

    fn generate_node(&mut self, node: &StructuralNode) {
        match node {
            StructuralNode::Heading { level, text } => {
                self.generate_paragraph(&heading_style(*level), text, false)
            }
            StructuralNode::BulletItem(text) => {
                self.generate_paragraph(STYLE_LIST_BULLET, text, true)
            }
            StructuralNode::Paragraph(text) => self.generate_paragraph(STYLE_NORMAL, text, false),
        }
    }

    fn generate_paragraph(&mut self, style: &str, text: &str, bullet: bool) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output
            .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", escape_xml(style)));
        if bullet {
            self.output.push_str(&format!(
                "<w:numPr>\n<w:ilvl w:val=\"0\"/>\n<w:numId w:val=\"{}\"/>\n</w:numPr>\n",
                BULLET_NUM_ID
            ));
        }
        self.output.push_str("</w:pPr>\n");
        self.generate_run(text);
        self.output.push_str("</w:p>\n");
    }

    fn generate_run(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.output.push_str(&format!(
            "<w:r><w:t xml:space=\"preserve\">{}</w:t></w:r>\n",
            escape_xml(text)
        ));
    }
}
