//! `[Content_Types].xml` generation

use crate::xml::{escape_xml, XML_DECLARATION};

/// Path of the content types part
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// Relationship parts
pub const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
/// Generic XML
pub const CT_XML: &str = "application/xml";
/// Core properties
pub const CT_CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
/// Extended properties
pub const CT_EXTENDED_PROPERTIES: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";
/// Theme part (shared by spreadsheet and presentation packages)
pub const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

/// WordprocessingML main document
pub const CT_WORD_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
/// WordprocessingML styles
pub const CT_WORD_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
/// WordprocessingML numbering
pub const CT_WORD_NUMBERING: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";

/// SpreadsheetML workbook
pub const CT_WORKBOOK: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
/// SpreadsheetML worksheet
pub const CT_WORKSHEET: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
/// SpreadsheetML shared strings
pub const CT_SHARED_STRINGS: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml";
/// SpreadsheetML styles
pub const CT_SHEET_STYLES: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

/// Builder for the content types part
#[derive(Debug, Clone)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTypes {
    /// Content types with the `rels` and `xml` defaults every package needs
    pub fn new() -> Self {
        Self {
            defaults: vec![
                ("rels".to_string(), CT_RELATIONSHIPS.to_string()),
                ("xml".to_string(), CT_XML.to_string()),
            ],
            overrides: Vec::new(),
        }
    }

    /// Map a file extension to a content type
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        if !self.defaults.iter().any(|(ext, _)| ext == extension) {
            self.defaults
                .push((extension.to_string(), content_type.to_string()));
        }
    }

    /// Set the content type of one part; `part` is a package path without
    /// the leading slash
    pub fn add_override(&mut self, part: &str, content_type: &str) {
        let part_name = format!("/{}", part.trim_start_matches('/'));
        self.overrides.retain(|(name, _)| name != &part_name);
        self.overrides.push((part_name, content_type.to_string()));
    }

    /// Serialize the part
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(
            "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\n",
        );
        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                "  <Default Extension=\"{}\" ContentType=\"{}\"/>\n",
                escape_xml(ext),
                escape_xml(ct)
            ));
        }
        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                "  <Override PartName=\"{}\" ContentType=\"{}\"/>\n",
                escape_xml(part),
                escape_xml(ct)
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_present() {
        let xml = ContentTypes::new().to_xml();
        assert!(xml.contains("Extension=\"rels\""));
        assert!(xml.contains("Extension=\"xml\""));
    }

    #[test]
    fn test_override_gets_leading_slash() {
        let mut ct = ContentTypes::new();
        ct.add_override("word/document.xml", CT_WORD_DOCUMENT);
        let xml = ct.to_xml();
        assert!(xml.contains("PartName=\"/word/document.xml\""));
    }

    #[test]
    fn test_no_duplicates() {
        let mut ct = ContentTypes::new();
        ct.add_default("xml", CT_XML);
        ct.add_default("png", "image/png");
        ct.add_default("png", "image/png");
        ct.add_override("/xl/workbook.xml", CT_WORKBOOK);
        ct.add_override("xl/workbook.xml", CT_WORKBOOK);
        let xml = ct.to_xml();
        assert_eq!(xml.matches("Extension=\"png\"").count(), 1);
        assert_eq!(xml.matches("Extension=\"xml\"").count(), 1);
        assert_eq!(xml.matches("/xl/workbook.xml").count(), 1);
    }
}
