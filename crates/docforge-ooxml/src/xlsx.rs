//! XLSX writer
//!
//! Writes rows of string cells into a single-worksheet SpreadsheetML
//! workbook. All cell values go through the shared strings table. Row 1 is
//! styled bold, and every column is sized to its longest cell.

use std::collections::HashMap;
use std::path::Path;

use docforge_ast::{StyleTemplate, TableRow};

use crate::archive::OoxmlArchive;
use crate::content_types::{
    ContentTypes, CONTENT_TYPES_PATH, CT_CORE_PROPERTIES, CT_EXTENDED_PROPERTIES,
    CT_SHARED_STRINGS, CT_SHEET_STYLES, CT_WORKBOOK, CT_WORKSHEET,
};
use crate::error::{OoxmlError, Result};
use crate::properties::{
    app_properties_xml, CoreProperties, APP_PROPERTIES_PATH, CORE_PROPERTIES_PATH,
};
use crate::relationships::Relationships;
use crate::xml::{escape_xml, XML_DECLARATION};

/// Longest worksheet name Excel accepts
pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// Upper bound for computed column widths
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Characters not allowed in worksheet names
pub const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

const NS_SPREADSHEET: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Clip a document title to a usable worksheet name length
pub fn sheet_name_for(title: &str) -> String {
    title.chars().take(MAX_SHEET_NAME_CHARS).collect()
}

/// Check a worksheet name against the spreadsheet format's rules
pub fn validate_sheet_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| OoxmlError::InvalidSheetName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.chars().count() > MAX_SHEET_NAME_CHARS {
        return Err(invalid("name is longer than 31 characters"));
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
        return Err(invalid(&format!("character '{}' is not allowed", c)));
    }
    Ok(())
}

/// Column letters for a 0-based index (`0` is `A`, `26` is `AA`)
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Width of each column: longest cell (in characters) plus 2, capped
pub fn column_widths(rows: &[TableRow]) -> Vec<usize> {
    let columns = rows.iter().map(TableRow::len).max().unwrap_or(0);
    (0..columns)
        .map(|col| {
            let longest = rows
                .iter()
                .filter_map(|row| row.cells.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            (longest + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// Interning table for `xl/sharedStrings.xml`
#[derive(Debug, Default)]
struct SharedStrings {
    strings: Vec<String>,
    index: HashMap<String, usize>,
    references: usize,
}

impl SharedStrings {
    fn intern(&mut self, value: &str) -> usize {
        self.references += 1;
        if let Some(&idx) = self.index.get(value) {
            return idx;
        }
        let idx = self.strings.len();
        self.strings.push(value.to_string());
        self.index.insert(value.to_string(), idx);
        idx
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!(
            "<sst xmlns=\"{}\" count=\"{}\" uniqueCount=\"{}\">",
            NS_SPREADSHEET,
            self.references,
            self.strings.len()
        ));
        for s in &self.strings {
            xml.push_str(&format!(
                "<si><t xml:space=\"preserve\">{}</t></si>",
                escape_xml(s)
            ));
        }
        xml.push_str("</sst>");
        xml
    }
}

/// XLSX Writer for generating single-sheet workbooks
pub struct XlsxWriter {
    sheet_name: String,
    style: StyleTemplate,
}

impl XlsxWriter {
    /// Create a writer; fails if `sheet_name` is not a valid worksheet name
    pub fn new(sheet_name: impl Into<String>, style: &StyleTemplate) -> Result<Self> {
        let sheet_name = sheet_name.into();
        validate_sheet_name(&sheet_name)?;
        Ok(Self {
            sheet_name,
            style: *style,
        })
    }

    /// Worksheet name
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Generate the XLSX package bytes
    pub fn generate(&self, rows: &[TableRow]) -> Result<Vec<u8>> {
        self.build_archive(rows).to_bytes()
    }

    /// Generate the package and write it to `path`
    pub fn write_to_file(&self, rows: &[TableRow], path: &Path) -> Result<()> {
        self.build_archive(rows).write_to_file(path)?;
        log::debug!("Wrote XLSX with {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    fn build_archive(&self, rows: &[TableRow]) -> OoxmlArchive {
        let mut archive = OoxmlArchive::new();

        let mut content_types = ContentTypes::new();
        content_types.add_override("xl/workbook.xml", CT_WORKBOOK);
        content_types.add_override("xl/worksheets/sheet1.xml", CT_WORKSHEET);
        content_types.add_override("xl/sharedStrings.xml", CT_SHARED_STRINGS);
        content_types.add_override("xl/styles.xml", CT_SHEET_STYLES);
        content_types.add_override(CORE_PROPERTIES_PATH, CT_CORE_PROPERTIES);
        content_types.add_override(APP_PROPERTIES_PATH, CT_EXTENDED_PROPERTIES);
        archive.set_string(CONTENT_TYPES_PATH, content_types.to_xml());

        let mut package_rels = Relationships::new();
        package_rels.add(Relationships::TYPE_OFFICE_DOCUMENT, "xl/workbook.xml");
        package_rels.add(Relationships::TYPE_CORE_PROPERTIES, CORE_PROPERTIES_PATH);
        package_rels.add(Relationships::TYPE_EXTENDED_PROPERTIES, APP_PROPERTIES_PATH);
        archive.set_string("_rels/.rels", package_rels.to_xml());

        let mut workbook_rels = Relationships::new();
        let sheet_rel = workbook_rels.add(Relationships::TYPE_WORKSHEET, "worksheets/sheet1.xml");
        workbook_rels.add(Relationships::TYPE_STYLES, "styles.xml");
        workbook_rels.add(Relationships::TYPE_SHARED_STRINGS, "sharedStrings.xml");
        archive.set_string("xl/_rels/workbook.xml.rels", workbook_rels.to_xml());

        archive.set_string("xl/workbook.xml", self.workbook_xml(&sheet_rel));

        let mut shared = SharedStrings::default();
        archive.set_string("xl/worksheets/sheet1.xml", worksheet_xml(rows, &mut shared));
        archive.set_string("xl/sharedStrings.xml", shared.to_xml());
        archive.set_string("xl/styles.xml", self.styles_xml());

        archive.set_string(
            CORE_PROPERTIES_PATH,
            CoreProperties::new(self.sheet_name.clone()).to_xml(),
        );
        archive.set_string(APP_PROPERTIES_PATH, app_properties_xml());

        archive
    }

    fn workbook_xml(&self, sheet_rel: &str) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!(
            "<workbook xmlns=\"{}\" xmlns:r=\"{}\">",
            NS_SPREADSHEET, NS_RELATIONSHIPS
        ));
        xml.push_str("<bookViews><workbookView/></bookViews>");
        xml.push_str(&format!(
            "<sheets><sheet name=\"{}\" sheetId=\"1\" r:id=\"{}\"/></sheets>",
            escape_xml(&self.sheet_name),
            sheet_rel
        ));
        xml.push_str("</workbook>");
        xml
    }

    /// Style 0 is regular text, style 1 is bold (header row)
    fn styles_xml(&self) -> String {
        let font = escape_xml(self.style.font_family);
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!("<styleSheet xmlns=\"{}\">", NS_SPREADSHEET));
        xml.push_str(&format!(
            "<fonts count=\"2\"><font><sz val=\"11\"/><name val=\"{font}\"/></font><font><b/><sz val=\"11\"/><name val=\"{font}\"/></font></fonts>"
        ));
        xml.push_str(
            "<fills count=\"2\"><fill><patternFill patternType=\"none\"/></fill><fill><patternFill patternType=\"gray125\"/></fill></fills>",
        );
        xml.push_str("<borders count=\"1\"><border><left/><right/><top/><bottom/><diagonal/></border></borders>");
        xml.push_str("<cellStyleXfs count=\"1\"><xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\"/></cellStyleXfs>");
        xml.push_str("<cellXfs count=\"2\"><xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/><xf numFmtId=\"0\" fontId=\"1\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyFont=\"1\"/></cellXfs>");
        xml.push_str("<cellStyles count=\"1\"><cellStyle name=\"Normal\" xfId=\"0\" builtinId=\"0\"/></cellStyles>");
        xml.push_str("</styleSheet>");
        xml
    }
}

fn worksheet_xml(rows: &[TableRow], shared: &mut SharedStrings) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(
        "<worksheet xmlns=\"{}\" xmlns:r=\"{}\">",
        NS_SPREADSHEET, NS_RELATIONSHIPS
    ));

    let widths = column_widths(rows);
    if !widths.is_empty() {
        xml.push_str("<cols>");
        for (idx, width) in widths.iter().enumerate() {
            xml.push_str(&format!(
                "<col min=\"{n}\" max=\"{n}\" width=\"{width}\" customWidth=\"1\"/>",
                n = idx + 1
            ));
        }
        xml.push_str("</cols>");
    }

    xml.push_str("<sheetData>");
    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx + 1;
        let style = if row_num == 1 { " s=\"1\"" } else { "" };
        xml.push_str(&format!("<row r=\"{}\">", row_num));
        for (col_idx, cell) in row.cells.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let sst_idx = shared.intern(cell);
            xml.push_str(&format!(
                "<c r=\"{}{}\"{} t=\"s\"><v>{}</v></c>",
                column_letter(col_idx),
                row_num,
                style,
                sst_idx
            ));
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData>");

    xml.push_str("</worksheet>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_well_formed, professional, read_part};

    fn row(cells: &[&str]) -> TableRow {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_sheet_name_clipped() {
        let long = "A very long document title that exceeds the limit";
        let name = sheet_name_for(long);
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_CHARS);
        assert!(long.starts_with(&name));
        assert_eq!(sheet_name_for("Short"), "Short");
    }

    #[test]
    fn test_sheet_name_validation() {
        assert!(validate_sheet_name("Data").is_ok());
        assert!(validate_sheet_name("").is_err());
        assert!(validate_sheet_name("   ").is_err());
        assert!(validate_sheet_name("Q1/Q2").is_err());
        assert!(validate_sheet_name("a[1]").is_err());
        assert!(validate_sheet_name(&"x".repeat(32)).is_err());
    }

    #[test]
    fn test_writer_rejects_invalid_name() {
        let err = XlsxWriter::new("Costs: 2024", &professional())
            .err()
            .unwrap();
        assert!(err.to_string().contains("':'"));
    }

    #[test]
    fn test_column_widths() {
        let rows = vec![row(&["id", "description"]), row(&["1", "x"]), row(&["22"])];
        assert_eq!(column_widths(&rows), vec![4, 13]);

        let wide = vec![row(&[&"w".repeat(80)])];
        assert_eq!(column_widths(&wide), vec![MAX_COLUMN_WIDTH]);

        assert!(column_widths(&[]).is_empty());
    }

    #[test]
    fn test_header_row_bold() {
        let writer = XlsxWriter::new("Sheet", &professional()).unwrap();
        let bytes = writer
            .generate(&[row(&["Name", "Age"]), row(&["Bob", "42"])])
            .unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert_well_formed(&sheet);
        assert!(sheet.contains("<c r=\"A1\" s=\"1\" t=\"s\">"));
        assert!(sheet.contains("<c r=\"B2\" t=\"s\">"));
        assert!(sheet.contains("width=\"5\""));

        let styles = read_part(&bytes, "xl/styles.xml");
        assert_well_formed(&styles);
        assert!(styles.contains("<b/>"));
        assert!(styles.contains("<name val=\"Calibri\"/>"));
    }

    #[test]
    fn test_shared_strings_deduplicated() {
        let writer = XlsxWriter::new("S", &professional()).unwrap();
        let bytes = writer
            .generate(&[row(&["a", "b"]), row(&["a", "a & b"])])
            .unwrap();
        let sst = read_part(&bytes, "xl/sharedStrings.xml");
        assert_well_formed(&sst);
        assert!(sst.contains("count=\"4\" uniqueCount=\"3\""));
        assert!(sst.contains("a &amp; b"));
    }

    #[test]
    fn test_empty_table() {
        let writer = XlsxWriter::new("Empty", &professional()).unwrap();
        let bytes = writer.generate(&[]).unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert_well_formed(&sheet);
        assert!(sheet.contains("<sheetData></sheetData>"));
        assert!(!sheet.contains("<cols>"));
    }

    #[test]
    fn test_workbook_names_sheet() {
        let writer = XlsxWriter::new("Q&A", &professional()).unwrap();
        let bytes = writer.generate(&[row(&["x"])]).unwrap();
        let workbook = read_part(&bytes, "xl/workbook.xml");
        assert_well_formed(&workbook);
        assert!(workbook.contains("name=\"Q&amp;A\""));
    }
}
