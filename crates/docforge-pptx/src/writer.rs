//! PPTX generation from slide data.
//!
//! This module writes a self-contained presentation package: one slide
//! master, the two built-in layouts, a theme derived from the style
//! template, and one slide part per [`Slide`].

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use docforge_ast::StyleTemplate;
use docforge_ooxml::content_types::{
    ContentTypes, CONTENT_TYPES_PATH, CT_CORE_PROPERTIES, CT_EXTENDED_PROPERTIES, CT_THEME,
};
use docforge_ooxml::properties::{
    app_properties_xml, CoreProperties, APP_PROPERTIES_PATH, CORE_PROPERTIES_PATH,
};
use docforge_ooxml::xml::escape_xml;
use docforge_ooxml::Relationships;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::constants::*;
use crate::deck::Deck;
use crate::error::Result;
use crate::layout::SlideLayout;
use crate::slide::Slide;
use crate::theme::theme_xml;

/// PPTX document writer
pub struct PptxWriter {
    /// Style template for the theme
    style: StyleTemplate,

    /// Slides to render
    slides: Vec<Slide>,

    /// Presentation title (core properties)
    title: Option<String>,

    /// Presentation author (core properties)
    author: Option<String>,
}

impl PptxWriter {
    /// Create a new PPTX writer for a style template
    pub fn new(style: &StyleTemplate) -> Self {
        Self {
            style: *style,
            slides: Vec::new(),
            title: None,
            author: None,
        }
    }

    /// Set the presentation title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Add a slide
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Add multiple slides
    pub fn add_slides(&mut self, slides: impl IntoIterator<Item = Slide>) {
        self.slides.extend(slides);
    }

    /// Add every slide of a deck
    pub fn add_deck(&mut self, deck: Deck) {
        self.add_slides(deck.slides);
    }

    /// Number of slides queued
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Generate the PPTX as bytes
    pub fn generate(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.write_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Generate the PPTX and write it to `path`
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(file)?;
        log::debug!(
            "Wrote PPTX with {} slides to {}",
            self.slides.len(),
            path.display()
        );
        Ok(())
    }

    /// Write the package to any seekable writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        self.write_content_types(&mut zip, options)?;
        self.write_root_rels(&mut zip, options)?;
        self.write_doc_props(&mut zip, options)?;
        self.write_presentation(&mut zip, options)?;
        self.write_presentation_parts(&mut zip, options)?;
        write_part(&mut zip, options, THEME_PATH, &theme_xml(&self.style))?;
        self.write_slide_master(&mut zip, options)?;
        self.write_slide_layouts(&mut zip, options)?;

        for (i, slide) in self.slides.iter().enumerate() {
            self.write_slide(&mut zip, options, i + 1, slide)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Write [Content_Types].xml
    fn write_content_types<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        let mut ct = ContentTypes::new();
        ct.add_override(PRESENTATION_PATH, CT_PRESENTATION);
        ct.add_override(PRES_PROPS_PATH, CT_PRES_PROPS);
        ct.add_override(VIEW_PROPS_PATH, CT_VIEW_PROPS);
        ct.add_override(TABLE_STYLES_PATH, CT_TABLE_STYLES);
        ct.add_override(THEME_PATH, CT_THEME);
        ct.add_override(SLIDE_MASTER_PATH, CT_SLIDE_MASTER);
        for layout in SlideLayout::ALL {
            ct.add_override(&layout.part_name(), CT_SLIDE_LAYOUT);
        }
        for i in 1..=self.slides.len() {
            ct.add_override(&slide_path(i), CT_SLIDE);
        }
        ct.add_override(CORE_PROPERTIES_PATH, CT_CORE_PROPERTIES);
        ct.add_override(APP_PROPERTIES_PATH, CT_EXTENDED_PROPERTIES);

        write_part(zip, options, CONTENT_TYPES_PATH, &ct.to_xml())
    }

    /// Write _rels/.rels
    fn write_root_rels<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        let mut rels = Relationships::new();
        rels.add(Relationships::TYPE_OFFICE_DOCUMENT, PRESENTATION_PATH);
        rels.add(Relationships::TYPE_CORE_PROPERTIES, CORE_PROPERTIES_PATH);
        rels.add(Relationships::TYPE_EXTENDED_PROPERTIES, APP_PROPERTIES_PATH);
        write_part(zip, options, "_rels/.rels", &rels.to_xml())
    }

    /// Write docProps/core.xml and docProps/app.xml
    fn write_doc_props<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        let title = self
            .title
            .clone()
            .or_else(|| self.slides.first().map(|s| s.title.clone()))
            .unwrap_or_default();
        let mut core = CoreProperties::new(title);
        core.creator = self.author.clone();

        write_part(zip, options, CORE_PROPERTIES_PATH, &core.to_xml())?;
        write_part(zip, options, APP_PROPERTIES_PATH, &app_properties_xml())
    }

    /// Write ppt/presentation.xml and its relationships
    fn write_presentation<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        let mut rels = Relationships::new();
        let master_rel = rels.add(REL_TYPE_SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        rels.add(REL_TYPE_PRES_PROPS, "presProps.xml");
        rels.add(REL_TYPE_VIEW_PROPS, "viewProps.xml");
        rels.add(Relationships::TYPE_THEME, "theme/theme1.xml");
        rels.add(REL_TYPE_TABLE_STYLES, "tableStyles.xml");

        let mut slide_refs = String::new();
        for i in 1..=self.slides.len() {
            let rel_id = rels.add(REL_TYPE_SLIDE, format!("slides/slide{}.xml", i));
            slide_refs.push_str(&format!(
                "    <p:sldId id=\"{}\" r:id=\"{}\"/>\n",
                255 + i,
                rel_id
            ));
        }

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="{}"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{}  </p:sldIdLst>
  <p:sldSz cx="{}" cy="{}" type="screen4x3"/>
  <p:notesSz cx="{}" cy="{}"/>
</p:presentation>"#,
            NS_DRAWING,
            NS_RELATIONSHIPS,
            NS_PRESENTATION,
            master_rel,
            slide_refs,
            DEFAULT_SLIDE_WIDTH_EMU,
            DEFAULT_SLIDE_HEIGHT_EMU,
            DEFAULT_SLIDE_HEIGHT_EMU, // Notes are rotated
            DEFAULT_SLIDE_WIDTH_EMU
        );

        write_part(zip, options, PRESENTATION_PATH, &content)?;
        write_part(
            zip,
            options,
            "ppt/_rels/presentation.xml.rels",
            &rels.to_xml(),
        )
    }

    /// Write presProps.xml, viewProps.xml and tableStyles.xml
    fn write_presentation_parts<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        let pres_props = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );
        write_part(zip, options, PRES_PROPS_PATH, &pres_props)?;

        let view_props = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
</p:viewPr>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );
        write_part(zip, options, VIEW_PROPS_PATH, &view_props)?;

        let table_styles = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
            NS_DRAWING
        );
        write_part(zip, options, TABLE_STYLES_PATH, &table_styles)
    }

    /// Write ppt/slideMasters/slideMaster1.xml
    ///
    /// Titles use the theme's accent1 (template primary color) and the
    /// major font; bodies use the minor font with bullet characters.
    fn write_slide_master<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        let mut rels = Relationships::new();
        let layout_rels: Vec<String> = SlideLayout::ALL
            .iter()
            .map(|layout| {
                rels.add(
                    REL_TYPE_SLIDE_LAYOUT,
                    format!("../slideLayouts/slideLayout{}.xml", layout.index()),
                )
            })
            .collect();
        rels.add(Relationships::TYPE_THEME, "../theme/theme1.xml");

        let layout_ids: String = layout_rels
            .iter()
            .enumerate()
            .map(|(i, rel_id)| {
                format!(
                    "    <p:sldLayoutId id=\"{}\" r:id=\"{}\"/>\n",
                    2_147_483_649u64 + i as u64,
                    rel_id
                )
            })
            .collect();

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
{}  </p:sldLayoutIdLst>
  <p:txStyles>
    <p:titleStyle>
      <a:lvl1pPr algn="l"><a:defRPr sz="4000"><a:solidFill><a:schemeClr val="accent1"/></a:solidFill><a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr>
    </p:titleStyle>
    <p:bodyStyle>
      <a:lvl1pPr marL="342900" indent="-342900"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="2400"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr>
    </p:bodyStyle>
    <p:otherStyle>
      <a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr>
    </p:otherStyle>
  </p:txStyles>
</p:sldMaster>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION, layout_ids
        );

        write_part(zip, options, SLIDE_MASTER_PATH, &content)?;
        write_part(
            zip,
            options,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &rels.to_xml(),
        )
    }

    /// Write ppt/slideLayouts/slideLayoutN.xml
    fn write_slide_layouts<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        let mut rels = Relationships::new();
        rels.add(REL_TYPE_SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        let rels_xml = rels.to_xml();

        for layout in SlideLayout::ALL {
            write_part(zip, options, &layout.part_name(), &layout.to_xml())?;
            write_part(
                zip,
                options,
                &format!(
                    "ppt/slideLayouts/_rels/slideLayout{}.xml.rels",
                    layout.index()
                ),
                &rels_xml,
            )?;
        }
        Ok(())
    }

    /// Write a single slide
    fn write_slide<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        slide_num: usize,
        slide: &Slide,
    ) -> Result<()> {
        write_part(zip, options, &slide_path(slide_num), &self.generate_slide_xml(slide))?;

        let mut rels = Relationships::new();
        rels.add(
            REL_TYPE_SLIDE_LAYOUT,
            format!("../slideLayouts/slideLayout{}.xml", slide.layout.index()),
        );
        write_part(
            zip,
            options,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            &rels.to_xml(),
        )
    }

    /// Generate slide XML content
    fn generate_slide_xml(&self, slide: &Slide) -> String {
        let mut shapes = self.generate_title_shape(&slide.title, slide.layout);
        if slide.has_body() {
            shapes.push_str(&self.generate_body_shape(slide));
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION, shapes
        )
    }

    /// Generate title shape XML
    fn generate_title_shape(&self, title: &str, layout: SlideLayout) -> String {
        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Title 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="{}"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
{}        </p:txBody>
      </p:sp>
"#,
            layout.title_placeholder(),
            text_paragraph(title)
        )
    }

    /// Generate the body placeholder shape, one paragraph per body line
    fn generate_body_shape(&self, slide: &Slide) -> String {
        let paragraphs: String = slide.paragraphs().map(text_paragraph).collect();
        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Content Placeholder 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr>{}</p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
{}        </p:txBody>
      </p:sp>
"#,
            slide.layout.body_placeholder(),
            paragraphs
        )
    }
}

/// Package path of slide `n` (1-based)
pub fn slide_path(n: usize) -> String {
    format!("ppt/slides/slide{}.xml", n)
}

fn text_paragraph(text: &str) -> String {
    if text.is_empty() {
        return "          <a:p><a:endParaRPr lang=\"en-US\"/></a:p>\n".to_string();
    }
    format!(
        "          <a:p><a:r><a:rPr lang=\"en-US\"/><a:t>{}</a:t></a:r></a:p>\n",
        escape_xml(text)
    )
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    path: &str,
    content: &str,
) -> Result<()> {
    zip.start_file(path, options)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn style() -> StyleTemplate {
        StyleTemplate {
            name: "executive",
            primary_color: "#2d3436",
            secondary_color: "#74b9ff",
            font_family: "Arial",
        }
    }

    fn read(bytes: &[u8], part: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(part).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_create_writer() {
        let writer = PptxWriter::new(&style());
        assert_eq!(writer.slide_count(), 0);
    }

    #[test]
    fn test_add_slides() {
        let mut writer = PptxWriter::new(&style());
        writer.add_slide(Slide::title_slide("Hello"));
        writer.add_slides(vec![Slide::content_slide("A", "x")]);
        assert_eq!(writer.slide_count(), 2);
    }

    #[test]
    fn test_generate_empty_pptx() {
        let writer = PptxWriter::new(&style())
            .with_title("Test Presentation")
            .with_author("Test Author");

        let bytes = writer.generate().unwrap();
        let core = read(&bytes, CORE_PROPERTIES_PATH);
        assert!(core.contains("<dc:title>Test Presentation</dc:title>"));
        assert!(core.contains("<dc:creator>Test Author</dc:creator>"));

        let presentation = read(&bytes, PRESENTATION_PATH);
        assert!(!presentation.contains("<p:sldId "));
    }

    #[test]
    fn test_generate_with_slides() {
        let mut writer = PptxWriter::new(&style()).with_title("Deck");
        writer.add_slide(Slide::title_slide("Welcome"));
        writer.add_slide(Slide::content_slide("Agenda", "First point\nSecond point"));

        let bytes = writer.generate().unwrap();

        let title = read(&bytes, "ppt/slides/slide1.xml");
        assert!(title.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(title.contains("<a:t>Welcome</a:t>"));
        assert!(!title.contains("Content Placeholder"));

        let content = read(&bytes, "ppt/slides/slide2.xml");
        assert!(content.contains(r#"<p:ph type="title"/>"#));
        assert!(content.contains("<a:t>First point</a:t>"));
        assert!(content.contains("<a:t>Second point</a:t>"));

        let rels = read(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(rels.contains("slideLayout2.xml"));
    }

    #[test]
    fn test_presentation_references_every_slide() {
        let mut writer = PptxWriter::new(&style());
        writer.add_deck(Deck::from_content("T", "Intro\n## A\n1\n## B\n2"));

        let bytes = writer.generate().unwrap();
        let presentation = read(&bytes, PRESENTATION_PATH);
        assert_eq!(presentation.matches("<p:sldId ").count(), 4);

        let rels = read(&bytes, "ppt/_rels/presentation.xml.rels");
        for i in 1..=4 {
            assert!(rels.contains(&format!("slides/slide{}.xml", i)));
        }

        let ct = read(&bytes, CONTENT_TYPES_PATH);
        assert_eq!(ct.matches(CT_SLIDE).count(), 4);
    }

    #[test]
    fn test_empty_body_has_no_body_shape() {
        let mut writer = PptxWriter::new(&style());
        writer.add_slide(Slide::content_slide("Just a title", ""));
        let bytes = writer.generate().unwrap();
        let slide = read(&bytes, "ppt/slides/slide1.xml");
        assert!(!slide.contains(r#"<p:ph idx="1"/>"#));
    }

    #[test]
    fn test_theme_uses_template() {
        let writer = PptxWriter::new(&style());
        let bytes = writer.generate().unwrap();
        let theme = read(&bytes, THEME_PATH);
        assert!(theme.contains(r#"<a:accent1><a:srgbClr val="2D3436"/></a:accent1>"#));
        assert!(theme.contains(r#"<a:latin typeface="Arial"/>"#));
    }

    #[test]
    fn test_text_escaped() {
        let mut writer = PptxWriter::new(&style());
        writer.add_slide(Slide::content_slide("R&D", "a < b"));
        let bytes = writer.generate().unwrap();
        let slide = read(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("<a:t>R&amp;D</a:t>"));
        assert!(slide.contains("<a:t>a &lt; b</a:t>"));
    }
}
