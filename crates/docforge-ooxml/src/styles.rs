//! WordprocessingML style and numbering parts
//!
//! The DOCX writer references a fixed set of style IDs. This module
//! generates `word/styles.xml` defining them from a [`StyleTemplate`], and
//! `word/numbering.xml` with the bullet definition used by list items.

use docforge_ast::StyleTemplate;

use crate::xml::{escape_xml, XML_DECLARATION};

/// Style ID of the centered document title
pub const STYLE_TITLE: &str = "Title";
/// Style ID of body paragraphs
pub const STYLE_NORMAL: &str = "Normal";
/// Style ID of bullet list items
pub const STYLE_LIST_BULLET: &str = "ListBullet";

/// `w:numId` of the bullet numbering instance
pub const BULLET_NUM_ID: u32 = 1;

/// Heading sizes in half-points, indexed by level - 1
const HEADING_SIZES: [u32; 3] = [32, 26, 24];

/// Style ID for a heading level (clamped to 1-3)
pub fn heading_style(level: u8) -> String {
    format!("Heading{}", level.clamp(1, 3))
}

/// Generate `word/styles.xml` for a template
pub fn styles_xml(style: &StyleTemplate) -> String {
    let font = escape_xml(style.font_family);
    let primary = style.primary_hex();
    let secondary = style.secondary_hex();

    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );
    xml.push('\n');

    xml.push_str(&format!(
        "<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:eastAsia=\"{font}\" w:cs=\"{font}\"/><w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/><w:lang w:val=\"en-US\"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after=\"160\" w:line=\"259\" w:lineRule=\"auto\"/></w:pPr></w:pPrDefault></w:docDefaults>\n"
    ));

    xml.push_str(&format!(
        "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"{STYLE_NORMAL}\"><w:name w:val=\"Normal\"/><w:qFormat/></w:style>\n"
    ));

    xml.push_str(&format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"{STYLE_TITLE}\"><w:name w:val=\"Title\"/><w:basedOn w:val=\"{STYLE_NORMAL}\"/><w:next w:val=\"{STYLE_NORMAL}\"/><w:qFormat/><w:pPr><w:pBdr><w:bottom w:val=\"single\" w:sz=\"8\" w:space=\"4\" w:color=\"{secondary}\"/></w:pBdr><w:spacing w:after=\"300\"/><w:jc w:val=\"center\"/></w:pPr><w:rPr><w:color w:val=\"{primary}\"/><w:kern w:val=\"28\"/><w:sz w:val=\"52\"/><w:szCs w:val=\"52\"/></w:rPr></w:style>\n"
    ));

    for (idx, size) in HEADING_SIZES.iter().enumerate() {
        let level = idx + 1;
        xml.push_str(&format!(
            "<w:style w:type=\"paragraph\" w:styleId=\"Heading{level}\"><w:name w:val=\"heading {level}\"/><w:basedOn w:val=\"{STYLE_NORMAL}\"/><w:next w:val=\"{STYLE_NORMAL}\"/><w:qFormat/><w:pPr><w:keepNext/><w:keepLines/><w:spacing w:before=\"{before}\" w:after=\"0\"/><w:outlineLvl w:val=\"{outline}\"/></w:pPr><w:rPr><w:b/><w:bCs/><w:color w:val=\"{primary}\"/><w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/></w:rPr></w:style>\n",
            before = if level == 1 { 480 } else { 200 },
            outline = idx,
        ));
    }

    xml.push_str(&format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"{STYLE_LIST_BULLET}\"><w:name w:val=\"List Bullet\"/><w:basedOn w:val=\"{STYLE_NORMAL}\"/><w:qFormat/><w:pPr><w:numPr><w:numId w:val=\"{BULLET_NUM_ID}\"/></w:numPr><w:contextualSpacing/></w:pPr></w:style>\n"
    ));

    xml.push_str("</w:styles>");
    xml
}

/// Generate `word/numbering.xml` with a single-level bullet list
pub fn numbering_xml() -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );
    xml.push_str(
        "<w:abstractNum w:abstractNumId=\"0\"><w:multiLevelType w:val=\"singleLevel\"/><w:lvl w:ilvl=\"0\"><w:start w:val=\"1\"/><w:numFmt w:val=\"bullet\"/><w:lvlText w:val=\"\u{2022}\"/><w:lvlJc w:val=\"left\"/><w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr><w:rPr><w:rFonts w:ascii=\"Symbol\" w:hAnsi=\"Symbol\" w:hint=\"default\"/></w:rPr></w:lvl></w:abstractNum>",
    );
    xml.push_str(&format!(
        "<w:num w:numId=\"{BULLET_NUM_ID}\"><w:abstractNumId w:val=\"0\"/></w:num>"
    ));
    xml.push_str("</w:numbering>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACADEMIC: StyleTemplate = StyleTemplate {
        name: "academic",
        primary_color: "#2f3e46",
        secondary_color: "#354f52",
        font_family: "Times New Roman",
    };

    #[test]
    fn test_heading_style_ids() {
        assert_eq!(heading_style(1), "Heading1");
        assert_eq!(heading_style(3), "Heading3");
        assert_eq!(heading_style(0), "Heading1");
        assert_eq!(heading_style(7), "Heading3");
    }

    #[test]
    fn test_styles_use_template() {
        let xml = styles_xml(&ACADEMIC);
        assert!(xml.contains("w:ascii=\"Times New Roman\""));
        assert!(xml.contains("<w:color w:val=\"2F3E46\"/>"));
        assert!(xml.contains("w:color=\"354F52\""));
    }

    #[test]
    fn test_styles_define_every_referenced_id() {
        let xml = styles_xml(&ACADEMIC);
        for id in [STYLE_NORMAL, STYLE_TITLE, STYLE_LIST_BULLET] {
            assert!(xml.contains(&format!("w:styleId=\"{}\"", id)), "{}", id);
        }
        for level in 1..=3 {
            assert!(xml.contains(&format!("w:styleId=\"{}\"", heading_style(level))));
        }
    }

    #[test]
    fn test_title_is_centered() {
        let xml = styles_xml(&ACADEMIC);
        let title = xml
            .split("<w:style ")
            .find(|s| s.contains("w:styleId=\"Title\""))
            .unwrap();
        assert!(title.contains("<w:jc w:val=\"center\"/>"));
    }

    #[test]
    fn test_numbering_bullet() {
        let xml = numbering_xml();
        assert!(xml.contains("<w:numFmt w:val=\"bullet\"/>"));
        assert!(xml.contains("<w:num w:numId=\"1\">"));
    }
}
